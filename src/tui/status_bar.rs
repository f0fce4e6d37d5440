//! Status bar widget for status messages, validation state, and key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, PopupType, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual key hints.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut lines: Vec<Line> = Vec::new();

        // First line: status message or validation summary
        if let Some(message) = &state.status_message {
            lines.push(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(theme.accent),
            )));
        } else if state.errors.is_empty() {
            let dirty = if state.dirty { " (unsaved changes)" } else { "" };
            lines.push(Line::from(vec![
                Span::styled("Valid", Style::default().fg(theme.success)),
                Span::styled(dirty, Style::default().fg(theme.text_muted)),
            ]));
        } else {
            lines.push(Line::from(Span::styled(
                format!(
                    "{} validation error{}",
                    state.errors.len(),
                    if state.errors.len() == 1 { "" } else { "s" }
                ),
                Style::default().fg(theme.error),
            )));
        }

        lines.push(Self::hints_line(state, theme));

        let status = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Key hints for the current context.
    fn hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hints: &[(&str, &str)] = match state.active_popup {
            Some(PopupType::Picker) => &[
                ("↑↓", "Navigate"),
                ("Enter", "Load"),
                ("d", "Delete saved"),
                ("Esc", "Cancel"),
            ],
            Some(PopupType::SaveDialog) => &[("Enter", "Save"), ("Esc", "Cancel")],
            Some(PopupType::ShareDialog | PopupType::HelpOverlay) => &[("Esc", "Close")],
            None => &[
                ("o", "Open"),
                ("s", "Save"),
                ("S", "Save as"),
                ("c", "Share"),
                ("1/2", "Panels"),
                ("?", "Help"),
                ("q", "Quit"),
            ],
        };

        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                (*key).to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::styled(
                (*action).to_string(),
                Style::default().fg(theme.text_muted),
            ));
        }
        Line::from(spans)
    }
}
