//! Terminal front end.
//!
//! The document is the source of truth for what is on screen: each frame
//! is drawn from a [`DocumentView`] captured from the live node tree, and
//! key presses are turned into `click` dispatches on document nodes.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gridplay_dom::{DomError, MemoryDocument, PropValue};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph},
};
use tracing::{debug, error, info, instrument};

use crate::controller::{BOARD_ID, CELL_CLASS, Controller, INDICATOR_ID, SCORE_ID};

/// One cell as it appears in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    /// Cell text, empty or the mark.
    pub text: String,
    /// Cell class list.
    pub class_name: String,
}

/// Snapshot of the parts of the document the terminal draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentView {
    /// Grid width read from the board's `columns` property.
    pub columns: usize,
    /// Cells in document order.
    pub cells: Vec<CellView>,
    /// Status indicator text.
    pub indicator: String,
    /// Score list entries.
    pub scores: Vec<String>,
}

impl DocumentView {
    /// Reads the board, indicator and score list out of `doc`.
    #[instrument(skip(doc))]
    pub fn capture(doc: &MemoryDocument) -> Result<Self, DomError> {
        let columns = doc
            .find_by_id(BOARD_ID)
            .map(|board| doc.property(board, "columns"))
            .transpose()?
            .flatten()
            .and_then(|value| match value {
                PropValue::Value(v) => v.as_u64(),
                PropValue::Handler(_) => None,
            })
            .map_or(0, |n| n as usize);

        let mut cells = Vec::new();
        for node in doc.query_by_class(CELL_CLASS) {
            cells.push(CellView {
                text: doc.text_content(node)?,
                class_name: doc.class_name(node)?.to_string(),
            });
        }

        let indicator = match doc.find_by_id(INDICATOR_ID) {
            Some(node) => doc.text_content(node)?,
            None => String::new(),
        };

        let mut scores = Vec::new();
        if let Some(list) = doc.find_by_id(SCORE_ID) {
            for item in doc.children(list)? {
                scores.push(doc.text_content(*item)?);
            }
        }

        Ok(Self {
            columns,
            cells,
            indicator,
            scores,
        })
    }
}

/// Moves the keyboard cursor, staying on the board.
pub fn move_cursor(cursor: (usize, usize), key: KeyCode, size: usize) -> (usize, usize) {
    let (row, col) = cursor;
    match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(size - 1), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(size - 1)),
        _ => cursor,
    }
}

/// Runs the interactive terminal UI until the user quits.
pub fn run_terminal(controller: &Controller) -> anyhow::Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = event_loop(&mut terminal, controller);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Terminal loop error");
    }
    res
}

#[instrument(skip_all)]
fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    controller: &Controller,
) -> anyhow::Result<()> {
    let size = controller.size();
    let mut cursor = (0, 0);

    loop {
        let view = DocumentView::capture(&controller.document().borrow())?;
        terminal.draw(|f| draw(f, &view, cursor))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("Quit requested");
                return Ok(());
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                debug!(?cursor, "Cell selected");
                controller.click(cursor.0, cursor.1)?;
            }
            KeyCode::Char('r') => controller.restart()?,
            code => cursor = move_cursor(cursor, code, size),
        }
    }
}

fn draw(f: &mut Frame, view: &DocumentView, cursor: (usize, usize)) {
    let rows = view.cells.len().checked_div(view.columns).unwrap_or(0);
    let board_height = u16::try_from(rows * 3).unwrap_or(u16::MAX);
    let [status, board, scores, help] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(board_height),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(f.area());

    let status_line = Paragraph::new(view.indicator.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::bordered().title("Player"));
    f.render_widget(status_line, status);

    render_board(f, board, view, cursor);

    let list = view.scores.join("\n");
    f.render_widget(
        Paragraph::new(list).block(Block::bordered().title("Score")),
        scores,
    );

    f.render_widget(
        Paragraph::new("arrows: move  enter/space: play  r: restart  q: quit")
            .style(Style::default().fg(Color::DarkGray)),
        help,
    );
}

fn render_board(f: &mut Frame, area: Rect, view: &DocumentView, cursor: (usize, usize)) {
    if view.columns == 0 {
        return;
    }
    let cols = view.columns;
    let row_areas = Layout::vertical(vec![Constraint::Length(3); view.cells.len() / cols]).split(area);
    let col_constraints = vec![Constraint::Ratio(1, cols as u32); cols];

    for (row, row_area) in row_areas.iter().enumerate() {
        let cell_areas = Layout::horizontal(col_constraints.clone()).split(*row_area);
        for (col, cell_area) in cell_areas.iter().enumerate() {
            let Some(cell) = view.cells.get(row * cols + col) else {
                continue;
            };
            let mut style = match cell.text.as_str() {
                "X" => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                "O" => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                _ => Style::default().fg(Color::DarkGray),
            };
            let mut block = Block::bordered();
            if (row, col) == cursor {
                block = block.border_style(Style::default().fg(Color::Yellow));
                style = style.add_modifier(Modifier::REVERSED);
            }
            let widget = Paragraph::new(cell.text.as_str())
                .alignment(Alignment::Center)
                .style(style)
                .block(block);
            f.render_widget(widget, *cell_area);
        }
    }
}
