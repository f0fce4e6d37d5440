//! Help overlay listing all keyboard shortcuts, shown on '?'.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{centered_rect, Theme};

/// Render the help overlay.
pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
    let dialog_area = centered_rect(70, 80, area);
    f.render_widget(Clear, dialog_area);

    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let entry = |key: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<14}"), Style::default().fg(theme.success)),
            Span::styled(action, Style::default().fg(theme.text)),
        ])
    };

    let lines = vec![
        section("Editing"),
        entry("↑↓ / j k", "Move between editor rows"),
        entry("Enter", "Edit the selected field, or add an item"),
        entry("← → / - +", "Adjust the selected value or level count"),
        entry("d / Delete", "Remove the selected attribute or level"),
        entry("Esc", "Cancel the current edit"),
        Line::from(""),
        section("Configurations"),
        entry("o", "Open a preset or saved configuration"),
        entry("s", "Save under the current name"),
        entry("S", "Save under a new name"),
        entry("c", "Generate a share URL"),
        Line::from(""),
        section("View"),
        entry("1", "Toggle the attribute details panel"),
        entry("2", "Toggle the level descriptions panel"),
        entry("PgUp/PgDn", "Scroll the attribute details panel"),
        Line::from(""),
        section("General"),
        entry("?", "Toggle this help"),
        entry("q", "Quit"),
    ];

    let overlay = Paragraph::new(lines)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .style(Style::default().fg(theme.primary).bg(theme.background)),
        );

    f.render_widget(overlay, dialog_area);
}
