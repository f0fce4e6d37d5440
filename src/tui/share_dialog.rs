//! Share dialog showing the generated share URL.
//!
//! The URL is copied to the system clipboard on open when possible; when the
//! clipboard is unavailable (headless terminals, SSH sessions) the dialog
//! stays up so the URL can be copied manually.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::{centered_rect, Component, Theme};

/// Events emitted by the share dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareDialogEvent {
    /// User dismissed the dialog
    Closed,
}

/// Share dialog component state.
#[derive(Debug, Clone)]
pub struct ShareDialog {
    url: String,
    /// Result of the clipboard copy attempted on open
    copy_result: Result<(), String>,
}

impl ShareDialog {
    /// Creates the dialog and attempts to copy the URL to the clipboard.
    #[must_use]
    pub fn new(url: String) -> Self {
        let copy_result = arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(url.clone()))
            .map_err(|e| e.to_string());
        Self { url, copy_result }
    }

    /// Whether the clipboard copy on open succeeded.
    #[must_use]
    pub fn copied(&self) -> bool {
        self.copy_result.is_ok()
    }
}

impl Component for ShareDialog {
    type Event = ShareDialogEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(ShareDialogEvent::Closed),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(70, 40, area);
        f.render_widget(Clear, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(4),    // URL
                Constraint::Length(1), // Copy status
                Constraint::Length(1), // Help text
            ])
            .split(dialog_area);

        let url = Paragraph::new(self.url.as_str())
            .style(Style::default().fg(theme.text))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Share URL ")
                    .style(Style::default().fg(theme.primary).bg(theme.background)),
            );
        f.render_widget(url, chunks[0]);

        let status = match &self.copy_result {
            Ok(()) => Paragraph::new("Copied to clipboard")
                .style(Style::default().fg(theme.success).bg(theme.background)),
            Err(e) => Paragraph::new(format!("Clipboard unavailable ({e}), copy manually"))
                .style(Style::default().fg(theme.warning).bg(theme.background)),
        };
        f.render_widget(status, chunks[1]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(
                "Esc",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Close"),
        ]))
        .style(Style::default().fg(theme.text).bg(theme.background));
        f.render_widget(help, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_dismiss_keys() {
        // Bypass the clipboard so the test runs headless
        let mut dialog = ShareDialog {
            url: "https://radar.example.com/?config=x".to_string(),
            copy_result: Err("no display".to_string()),
        };
        assert!(!dialog.copied());
        assert_eq!(
            dialog.handle_input(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Some(ShareDialogEvent::Closed)
        );
        assert_eq!(
            dialog.handle_input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            Some(ShareDialogEvent::Closed)
        );
        assert_eq!(
            dialog.handle_input(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
            None
        );
    }
}
