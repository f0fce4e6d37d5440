//! Configuration picker popup.
//!
//! Lists the built-in presets followed by saved configurations. Selecting an
//! entry loads it; saved entries can also be deleted from here. Presets are
//! read-only and cannot be deleted.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::presets::PRESET_NAMES;
use crate::tui::{centered_rect, Component, Theme};

/// Events emitted by the configuration picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// User selected a configuration by name
    Selected(String),
    /// User deleted a saved configuration by name
    Deleted(String),
    /// User dismissed the picker
    Cancelled,
}

/// One selectable entry in the picker list.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PickerEntry {
    Preset(String),
    Saved(String),
}

impl PickerEntry {
    fn name(&self) -> &str {
        match self {
            Self::Preset(name) | Self::Saved(name) => name,
        }
    }
}

/// Configuration picker component state.
#[derive(Debug, Clone)]
pub struct ConfigPicker {
    entries: Vec<PickerEntry>,
    selected: usize,
}

impl ConfigPicker {
    /// Creates a picker over the preset catalog and the given saved names.
    #[must_use]
    pub fn new(saved_names: Vec<String>) -> Self {
        let mut entries: Vec<PickerEntry> = PRESET_NAMES
            .iter()
            .map(|name| PickerEntry::Preset((*name).to_string()))
            .collect();
        entries.extend(saved_names.into_iter().map(PickerEntry::Saved));
        Self {
            entries,
            selected: 0,
        }
    }

    /// Removes a saved entry from the list after a delete, keeping the
    /// selection in bounds.
    pub fn remove_saved(&mut self, name: &str) {
        self.entries
            .retain(|entry| !matches!(entry, PickerEntry::Saved(n) if n == name));
        if self.selected >= self.entries.len() && self.selected > 0 {
            self.selected = self.entries.len() - 1;
        }
    }
}

impl Component for ConfigPicker {
    type Event = PickerEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected > 0 {
                    self.selected -= 1;
                } else if !self.entries.is_empty() {
                    self.selected = self.entries.len() - 1;
                }
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.entries.len() {
                    self.selected += 1;
                } else {
                    self.selected = 0;
                }
                None
            }
            KeyCode::Enter => self
                .entries
                .get(self.selected)
                .map(|entry| PickerEvent::Selected(entry.name().to_string())),
            KeyCode::Delete | KeyCode::Char('d') => match self.entries.get(self.selected) {
                Some(PickerEntry::Saved(name)) => Some(PickerEvent::Deleted(name.clone())),
                // Presets cannot be deleted
                _ => None,
            },
            KeyCode::Esc => Some(PickerEvent::Cancelled),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(60, 70, area);
        f.render_widget(Clear, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(3)])
            .split(dialog_area);

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let (tag, tag_color) = match entry {
                    PickerEntry::Preset(_) => ("(Preset)", theme.primary),
                    PickerEntry::Saved(_) => ("(Saved)", theme.success),
                };
                let style = if i == self.selected {
                    Style::default()
                        .fg(theme.accent)
                        .bg(theme.highlight_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", entry.name()), style),
                    Span::styled(tag, Style::default().fg(tag_color)),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Load Configuration ")
                .style(Style::default().fg(theme.primary).bg(theme.background)),
        );
        f.render_widget(list, chunks[0]);

        let instructions = Paragraph::new("↑↓: Navigate  |  Enter: Load  |  d: Delete saved  |  Esc: Cancel")
            .style(Style::default().fg(theme.text_muted).bg(theme.background))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(instructions, chunks[1]);
    }
}
