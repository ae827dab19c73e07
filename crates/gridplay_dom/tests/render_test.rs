//! Tests for rendering element trees into the in-memory document.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gridplay_dom::{
    DomErrorKind, EventHandler, EventName, MemoryDocument, Props, PropValue, TEXT_TAG,
    make_element, make_text, render,
};

fn shared_doc() -> (Rc<RefCell<MemoryDocument>>, gridplay_dom::NodeId) {
    let mut doc = MemoryDocument::new();
    let container = doc.create_container("main").unwrap();
    (Rc::new(RefCell::new(doc)), container)
}

#[test]
fn test_renders_element_with_text_child() {
    let mut doc = MemoryDocument::new();
    let container = doc.create_container("main").unwrap();

    let node = make_element("div", Props::new().with("id", "x"), [make_text("hi")]);
    let div = render(&mut doc, node, container).unwrap();

    assert_eq!(doc.children(container).unwrap(), &[div]);
    assert_eq!(doc.tag(div).unwrap(), "div");
    assert_eq!(doc.property(div, "id").unwrap(), Some(&PropValue::from("x")));

    let kids = doc.children(div).unwrap();
    assert_eq!(kids.len(), 1);
    assert_eq!(doc.tag(kids[0]).unwrap(), TEXT_TAG);
    assert_eq!(doc.text(kids[0]).unwrap(), Some("hi"));
}

#[test]
fn test_nested_children_keep_order() {
    let mut doc = MemoryDocument::new();
    let container = doc.create_container("main").unwrap();

    let tree = make_element(
        "ul",
        Props::new().with("className", "score"),
        ["a", "b", "c"]
            .into_iter()
            .map(|t| make_element("li", Props::new(), [make_text(t)])),
    );
    let ul = render(&mut doc, tree, container).unwrap();

    let items: Vec<String> = doc
        .children(ul)
        .unwrap()
        .iter()
        .map(|li| doc.text_content(*li).unwrap())
        .collect();
    assert_eq!(items, vec!["a", "b", "c"]);
    assert_eq!(doc.query_by_class("score"), vec![ul]);
}

#[test]
fn test_arbitrary_attributes_pass_through() {
    let mut doc = MemoryDocument::new();
    let container = doc.create_container("main").unwrap();

    let props = Props::new()
        .with("title", "btn")
        .with("columns", 5usize)
        .with("disabled", true)
        .with("data-anything", "ok");
    let node = render(&mut doc, make_element("button", props, []), container).unwrap();

    assert_eq!(doc.property(node, "title").unwrap(), Some(&PropValue::from("btn")));
    assert_eq!(doc.property(node, "columns").unwrap(), Some(&PropValue::from(5usize)));
    assert_eq!(doc.property(node, "disabled").unwrap(), Some(&PropValue::from(true)));
    assert_eq!(doc.property(node, "data-anything").unwrap(), Some(&PropValue::from("ok")));
}

#[test]
fn test_on_click_registers_listener_and_property() {
    let (doc, container) = shared_doc();
    let clicks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&clicks);
    let handler = EventHandler::new(move |_| counter.set(counter.get() + 1));

    let node = make_element("button", Props::new().with("onClick", handler.clone()), []);
    let button = render(&mut *doc.borrow_mut(), node, container).unwrap();

    assert_eq!(
        doc.borrow().property(button, "onClick").unwrap(),
        Some(&PropValue::Handler(handler))
    );
    assert_eq!(doc.borrow().listener_count(button, EventName::Click).unwrap(), 1);

    assert_eq!(MemoryDocument::dispatch(&doc, button, "click").unwrap(), 1);
    assert_eq!(clicks.get(), 1);
    assert_eq!(MemoryDocument::dispatch(&doc, button, "click").unwrap(), 1);
    assert_eq!(clicks.get(), 2);
}

#[test]
fn test_unlisted_event_is_property_only() {
    let (doc, container) = shared_doc();
    let focused = Rc::new(Cell::new(false));
    let flag = Rc::clone(&focused);

    let node = make_element("input", Props::new().on("onFocus", move |_| flag.set(true)), []);
    let input = render(&mut *doc.borrow_mut(), node, container).unwrap();

    let prop = doc.borrow().property(input, "onFocus").unwrap().cloned();
    assert!(prop.as_ref().and_then(PropValue::as_handler).is_some());
    for event in [EventName::Click, EventName::Change, EventName::Mouseover] {
        assert_eq!(doc.borrow().listener_count(input, event).unwrap(), 0);
    }

    assert_eq!(MemoryDocument::dispatch(&doc, input, "focus").unwrap(), 0);
    assert!(!focused.get());
}

#[test]
fn test_handler_can_mutate_document() {
    let (doc, container) = shared_doc();
    let handle = Rc::clone(&doc);
    let node = make_element(
        "button",
        Props::new().on("onClick", move |event| {
            handle
                .borrow_mut()
                .set_text_content(event.target(), "clicked")
                .unwrap();
        }),
        [make_text("")],
    );
    let button = render(&mut *doc.borrow_mut(), node, container).unwrap();

    MemoryDocument::dispatch(&doc, button, "click").unwrap();
    assert_eq!(doc.borrow().text_content(button).unwrap(), "clicked");
}

#[test]
fn test_render_into_text_node_fails() {
    let mut doc = MemoryDocument::new();
    let container = doc.create_container("main").unwrap();
    let text = render(&mut doc, make_text("leaf"), container).unwrap();

    let err = render(&mut doc, make_element("span", Props::new(), []), text).unwrap_err();
    assert_eq!(err.kind(), DomErrorKind::TextNodeParent(text));
}

#[test]
fn test_outline_shows_tree() {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    let node = make_element(
        "nav",
        Props::new().with("className", "menu"),
        [make_element(
            "button",
            Props::new().with("id", "restart").on("onClick", |_| {}),
            [make_text("Restart")],
        )],
    );
    render(&mut doc, node, body).unwrap();

    let expected = "<body>\n  <nav className=\"menu\">\n    <button id=\"restart\" onClick=<fn>>\n      \"Restart\"\n";
    assert_eq!(doc.outline(), expected);
}
