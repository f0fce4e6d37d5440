//! Save-as dialog for naming a configuration before persisting it.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::{centered_rect, Component, Theme};

/// Events emitted by the save dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveDialogEvent {
    /// User confirmed a non-empty name
    Confirmed(String),
    /// User dismissed the dialog
    Cancelled,
}

/// Save dialog component state.
#[derive(Debug, Clone)]
pub struct SaveDialog {
    input: String,
    /// Names already in the store, used to warn about overwrites
    existing_names: Vec<String>,
    error: Option<String>,
}

impl SaveDialog {
    /// Creates a dialog pre-filled with the current configuration name.
    #[must_use]
    pub fn new(initial_name: &str, existing_names: Vec<String>) -> Self {
        Self {
            input: initial_name.to_string(),
            existing_names,
            error: None,
        }
    }

    fn would_overwrite(&self) -> bool {
        self.existing_names.iter().any(|n| n == self.input.trim())
    }
}

impl Component for SaveDialog {
    type Event = SaveDialogEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Char(c) => {
                self.input.push(c);
                self.error = None;
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.error = None;
            }
            KeyCode::Enter => {
                let name = self.input.trim();
                if name.is_empty() {
                    self.error = Some("Name cannot be empty".to_string());
                } else {
                    return Some(SaveDialogEvent::Confirmed(name.to_string()));
                }
            }
            KeyCode::Esc => return Some(SaveDialogEvent::Cancelled),
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(60, 30, area);
        f.render_widget(Clear, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Input field
                Constraint::Length(1), // Overwrite warning or error
                Constraint::Length(1), // Help text
            ])
            .split(dialog_area);

        let input = Paragraph::new(format!("{}█", self.input))
            .style(Style::default().fg(theme.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Save Configuration As ")
                    .style(Style::default().fg(theme.primary).bg(theme.background)),
            );
        f.render_widget(input, chunks[0]);

        if let Some(error) = &self.error {
            let widget = Paragraph::new(error.as_str())
                .style(Style::default().fg(theme.error).bg(theme.background));
            f.render_widget(widget, chunks[1]);
        } else if self.would_overwrite() {
            let widget = Paragraph::new("A saved configuration with this name will be overwritten")
                .style(Style::default().fg(theme.warning).bg(theme.background));
            f.render_widget(widget, chunks[1]);
        }

        let help = Paragraph::new(Line::from(vec![
            Span::styled(
                "Enter",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Save  "),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Cancel"),
        ]))
        .style(Style::default().fg(theme.text).bg(theme.background));
        f.render_widget(help, chunks[2]);
    }
}
