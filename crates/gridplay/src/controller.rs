//! Controller glue: renders the board and routes clicks into the engine.
//!
//! The controller composes a [`GridEngine`] and a [`MemoryDocument`]. Every
//! cell is a `button` whose click listener is bound to its own `(row, col)`
//! at construction time. User actions travel through the document exactly
//! like host events would: [`Controller::click`] and
//! [`Controller::restart`] dispatch `click` on the matching node.

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use gridplay_dom::{
    Event, Host, MemoryDocument, NodeId, Props, make_element, make_text, render,
};
use gridplay_engine::{GridEngine, GridError, GridErrorKind, MoveOutcome};
use tracing::{debug, error, info, instrument};

use crate::config::GameConfig;
use crate::error::ControllerError;
use crate::scoreboard::Scoreboard;

/// Class shared by every cell button.
pub const CELL_CLASS: &str = "btn";
/// Id of the status indicator.
pub const INDICATOR_ID: &str = "player";
/// Id of the board container.
pub const BOARD_ID: &str = "board";
/// Id of the restart button.
pub const RESTART_ID: &str = "restart";
/// Id of the score list.
pub const SCORE_ID: &str = "score";

/// Id of the cell button at `(row, col)`.
pub fn cell_id(row: usize, col: usize) -> String {
    format!("{row}_{col}")
}

/// State the click handlers mutate.
#[derive(Debug)]
struct Session {
    engine: GridEngine,
    scoreboard: Scoreboard,
    indicator: NodeId,
    score: NodeId,
}

impl Session {
    #[instrument(skip(self, doc), fields(active = %self.engine.active_mark()))]
    fn click_cell(
        &mut self,
        doc: &mut MemoryDocument,
        target: NodeId,
        row: usize,
        col: usize,
    ) -> Result<(), ControllerError> {
        if self.engine.is_terminal() || !self.engine.board().is_empty(row, col) {
            debug!("Click ignored");
            return Ok(());
        }

        let mark = self.engine.active_mark();
        doc.set_text_content(target, &mark.to_string())?;
        doc.class_list_add(target, &mark.to_string().to_lowercase())?;

        match self.engine.make_move(row, col)? {
            MoveOutcome::Won { mark } => {
                self.scoreboard.record(mark);
                doc.set_text_content(self.indicator, &format!("{mark} wins"))?;
                let entry = format!("Winner {mark}");
                render(
                    doc,
                    make_element("li", Props::new(), [make_text(entry.as_str())]),
                    self.score,
                )?;
                info!(%mark, wins = self.scoreboard.wins(mark), "Game won");
            }
            MoveOutcome::Placed { .. } => {
                let next = self.engine.active_mark().to_string();
                doc.set_text_content(self.indicator, &next)?;
            }
            MoveOutcome::Ignored(reason) => debug!(?reason, "Engine ignored move"),
        }
        Ok(())
    }

    #[instrument(skip_all)]
    fn restart(&mut self, doc: &mut MemoryDocument) -> Result<(), ControllerError> {
        self.engine.restart();
        doc.set_text_content(self.indicator, &self.engine.starting_mark().to_string())?;
        for cell in doc.query_by_class(CELL_CLASS) {
            doc.set_text_content(cell, "")?;
            doc.set_property(cell, "className", CELL_CLASS.into())?;
        }
        Ok(())
    }
}

/// Runs `action` against the session and the document, if the document is
/// still alive. Errors are logged since listeners cannot return them.
fn with_session(
    session: &Rc<RefCell<Session>>,
    document: &Weak<RefCell<MemoryDocument>>,
    action: impl FnOnce(&mut Session, &mut MemoryDocument) -> Result<(), ControllerError>,
) {
    let Some(document) = document.upgrade() else {
        return;
    };
    let mut doc = document.borrow_mut();
    if let Err(err) = action(&mut session.borrow_mut(), &mut doc) {
        error!(%err, "Event handler failed");
    }
}

/// Binds the rendered board to a grid engine.
#[derive(Debug)]
pub struct Controller {
    document: Rc<RefCell<MemoryDocument>>,
    session: Rc<RefCell<Session>>,
    size: usize,
}

impl Controller {
    /// Builds the engine from `config` and renders the full UI into a new
    /// document: status indicator, board, restart menu and score list.
    #[instrument]
    pub fn mount(config: &GameConfig) -> Result<Self, ControllerError> {
        let engine = GridEngine::new(config.size(), config.starting_mark(), config.policy())?;
        let size = engine.size();
        let start = engine.starting_mark().to_string();

        let mut doc = MemoryDocument::new();
        let body = doc.body();

        let indicator = render(
            &mut doc,
            make_element(
                "span",
                Props::new().with("id", INDICATOR_ID).with("className", "player"),
                [make_text(start.as_str())],
            ),
            body,
        )?;

        let board = render(
            &mut doc,
            make_element(
                "div",
                Props::new()
                    .with("id", BOARD_ID)
                    .with("className", "board")
                    .with("columns", size)
                    .with("fontSize", format!("{:.2}vw", (80.0 / size as f64).max(10.0))),
                [],
            ),
            body,
        )?;

        let score = render(
            &mut doc,
            make_element(
                "ul",
                Props::new().with("id", SCORE_ID).with("className", "score"),
                [],
            ),
            body,
        )?;

        let document = Rc::new(RefCell::new(doc));
        let session = Rc::new(RefCell::new(Session {
            engine,
            scoreboard: Scoreboard::default(),
            indicator,
            score,
        }));

        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                let session = Rc::clone(&session);
                let weak = Rc::downgrade(&document);
                let on_click = move |event: &Event| {
                    with_session(&session, &weak, |s, doc| {
                        s.click_cell(doc, event.target(), row, col)
                    });
                };
                cells.push(make_element(
                    "button",
                    Props::new()
                        .with("title", CELL_CLASS)
                        .with("id", cell_id(row, col))
                        .with("className", CELL_CLASS)
                        .on("onClick", on_click),
                    [make_text("")],
                ));
            }
        }
        {
            let mut doc = document.borrow_mut();
            for cell in cells {
                render(&mut *doc, cell, board)?;
            }
        }

        let restart_session = Rc::clone(&session);
        let weak = Rc::downgrade(&document);
        let menu = make_element(
            "nav",
            Props::new().with("className", "menu"),
            [make_element(
                "button",
                Props::new()
                    .with("title", "restart")
                    .with("className", "restart")
                    .with("id", RESTART_ID)
                    .on("onClick", move |_: &Event| {
                        with_session(&restart_session, &weak, |s, doc| s.restart(doc));
                    }),
                [make_text("Restart")],
            )],
        );
        {
            let mut doc = document.borrow_mut();
            let body = doc.body();
            render(&mut *doc, menu, body)?;
        }

        info!(size, "Board mounted");
        Ok(Self {
            document,
            session,
            size,
        })
    }

    /// Clicks the cell at `(row, col)`.
    ///
    /// Clicking an occupied cell or a finished game is a silent no-op.
    ///
    /// # Errors
    ///
    /// Fails with an index error when `(row, col)` is off the board.
    #[instrument(skip(self))]
    pub fn click(&self, row: usize, col: usize) -> Result<(), ControllerError> {
        let node = self.cell_node(row, col).ok_or_else(|| {
            GridError::new(GridErrorKind::IndexOutOfRange {
                row,
                col,
                size: self.size,
            })
        })?;
        MemoryDocument::dispatch(&self.document, node, "click")?;
        Ok(())
    }

    /// Clicks the restart button.
    #[instrument(skip(self))]
    pub fn restart(&self) -> Result<(), ControllerError> {
        let node = self.document.borrow().find_by_id(RESTART_ID);
        if let Some(node) = node {
            MemoryDocument::dispatch(&self.document, node, "click")?;
        }
        Ok(())
    }

    /// Node of the cell button at `(row, col)`.
    pub fn cell_node(&self, row: usize, col: usize) -> Option<NodeId> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.document.borrow().find_by_id(&cell_id(row, col))
    }

    /// The live document.
    pub fn document(&self) -> &Rc<RefCell<MemoryDocument>> {
        &self.document
    }

    /// Read access to the engine.
    pub fn engine(&self) -> Ref<'_, GridEngine> {
        Ref::map(self.session.borrow(), |s| &s.engine)
    }

    /// Copy of the session scoreboard.
    pub fn scoreboard(&self) -> Scoreboard {
        self.session.borrow().scoreboard.clone()
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Text of the status indicator.
    pub fn indicator_text(&self) -> Result<String, ControllerError> {
        let node = self.session.borrow().indicator;
        Ok(self.document.borrow().text_content(node)?)
    }

    /// Texts of the score list entries.
    pub fn score_entries(&self) -> Result<Vec<String>, ControllerError> {
        let score = self.session.borrow().score;
        let doc = self.document.borrow();
        let mut entries = Vec::new();
        for item in doc.children(score)? {
            entries.push(doc.text_content(*item)?);
        }
        Ok(entries)
    }
}
