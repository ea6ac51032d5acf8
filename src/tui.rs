//! Interactive checkbox form for assignment settings
//!
//! Implements [`Presenter`] with a ratatui list: arrow keys move, space
//! toggles, enter submits, q or esc cancels. The terminal session is scoped
//! to `collect_submission`; notices print after the terminal is restored.

use std::collections::HashMap;
use std::io::stdout;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame, Terminal,
};
use tracing::debug;

use crate::catalog::SelectionSet;
use crate::error::{AssignError, Result};
use crate::presenter::{Destination, Presenter};
use crate::theme::Colors;

/// Ratatui-based presenter for one editing session
#[derive(Debug, Default)]
pub struct TuiPresenter {
    selection: Option<SelectionSet>,
    cursor: usize,
}

impl TuiPresenter {
    /// Create a presenter with no selection loaded yet
    pub fn new() -> Self {
        Self::default()
    }

    fn render_form(&self, f: &mut Frame, selection: &SelectionSet) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(5),    // Checkbox list
                Constraint::Length(3), // Key hints
            ])
            .split(f.area());

        let title = Paragraph::new(format!(
            "Assignment settings — {}",
            selection.category
        ))
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Colors::FG_PRIMARY));
        f.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = selection
            .options
            .iter()
            .enumerate()
            .map(|(index, opt)| {
                let mark = if opt.selected { "[x]" } else { "[ ]" };
                let style = if index == self.cursor {
                    Style::default()
                        .fg(Colors::SECONDARY)
                        .add_modifier(Modifier::BOLD)
                } else if opt.selected {
                    Style::default().fg(Colors::SUCCESS)
                } else {
                    Style::default().fg(Colors::FG_PRIMARY)
                };
                let prefix = if index == self.cursor { "▸ " } else { "  " };
                ListItem::new(format!("{}{} {} ({})", prefix, mark, opt.label, opt.id))
                    .style(style)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Configuration types"),
        );
        f.render_widget(list, chunks[1]);

        let hints = Paragraph::new(Line::from(
            "↑/↓ move   space toggle   enter save   q cancel",
        ))
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Colors::FG_SECONDARY));
        f.render_widget(hints, chunks[2]);
    }

    /// Event loop over the checkbox list. Returns the submission map, or
    /// `None` on cancel.
    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<Option<HashMap<String, bool>>> {
        let mut selection = self
            .selection
            .clone()
            .ok_or_else(|| AssignError::terminal("no selection rendered before collection"))?;

        loop {
            terminal.draw(|f| self.render_form(f, &selection))?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.cursor = self.cursor.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.cursor + 1 < selection.options.len() {
                        self.cursor += 1;
                    }
                }
                KeyCode::Char(' ') => {
                    if let Some(opt) = selection.options.get_mut(self.cursor) {
                        opt.selected = !opt.selected;
                    }
                }
                KeyCode::Enter => {
                    let submission = selection
                        .options
                        .iter()
                        .map(|opt| (opt.id.clone(), opt.selected))
                        .collect();
                    return Ok(Some(submission));
                }
                KeyCode::Esc | KeyCode::Char('q') => return Ok(None),
                _ => {}
            }
        }
    }
}

impl Presenter for TuiPresenter {
    fn render_selection(&mut self, selection: &SelectionSet) -> Result<()> {
        self.selection = Some(selection.clone());
        self.cursor = 0;
        Ok(())
    }

    fn collect_submission(&mut self) -> Result<Option<HashMap<String, bool>>> {
        enable_raw_mode().map_err(|e| AssignError::terminal(format!("raw mode: {}", e)))?;
        execute!(stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore the terminal, even when the loop failed.
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen);

        result
    }

    fn notify(&mut self, message: &str) {
        println!("{}", message);
    }

    fn redirect(&mut self, destination: Destination) {
        debug!(%destination, "redirect requested");
        println!("Returning to the {}.", destination);
    }
}
