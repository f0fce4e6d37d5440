//! Configuration editor panel.
//!
//! Row-based form over the current configuration: name, level scale,
//! attributes (name/value/description), and level-description entries.
//! Every mutation rebuilds the configuration value and re-validates; edits
//! are never blocked by validation errors.

use crossterm::event::{self, KeyCode};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::configuration::MIN_ATTRIBUTES;
use crate::models::Configuration;
use crate::tui::{AppState, Theme};

/// One selectable row of the editor form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorRow {
    /// Configuration name field
    ConfigName,
    /// Level scale field
    Levels,
    /// Attribute name field
    AttributeName(usize),
    /// Attribute value field
    AttributeValue(usize),
    /// Attribute description field
    AttributeDescription(usize),
    /// Action row appending a new attribute
    AddAttribute,
    /// Level-description tier name field
    LevelDescName(usize),
    /// Level-description tier text field
    LevelDescText(usize),
    /// Action row appending a new level-description entry
    AddLevelDesc,
}

/// Editor panel UI state (selection and inline edit buffer).
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Index into [`rows`] of the selected row
    pub selected: usize,
    /// Inline edit buffer; `Some` while a text edit is in progress
    pub edit_buffer: Option<String>,
}

impl EditorState {
    /// Creates a fresh editor state with the first row selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True while an inline text edit is in progress.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.edit_buffer.is_some()
    }

    /// Clamps the selection after the row list shrank.
    pub fn clamp_selection(&mut self, config: &Configuration) {
        let count = rows(config).len();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }
}

/// Builds the selectable row list for a configuration.
#[must_use]
pub fn rows(config: &Configuration) -> Vec<EditorRow> {
    let mut rows = vec![EditorRow::ConfigName, EditorRow::Levels];
    for i in 0..config.attributes.len() {
        rows.push(EditorRow::AttributeName(i));
        rows.push(EditorRow::AttributeValue(i));
        rows.push(EditorRow::AttributeDescription(i));
    }
    rows.push(EditorRow::AddAttribute);
    for i in 0..config.level_descriptions().len() {
        rows.push(EditorRow::LevelDescName(i));
        rows.push(EditorRow::LevelDescText(i));
    }
    rows.push(EditorRow::AddLevelDesc);
    rows
}

/// Returns the current text of an editable row, or `None` for action and
/// numeric rows that are not text-edited from a buffer start point.
fn row_text(config: &Configuration, row: EditorRow) -> Option<String> {
    match row {
        EditorRow::ConfigName => Some(config.name.clone()),
        EditorRow::Levels => Some(config.levels.to_string()),
        EditorRow::AttributeName(i) => config.attributes.get(i).map(|a| a.name.clone()),
        EditorRow::AttributeValue(i) => config.attributes.get(i).map(|a| a.value.to_string()),
        EditorRow::AttributeDescription(i) => config
            .attributes
            .get(i)
            .map(|a| a.description.clone().unwrap_or_default()),
        EditorRow::LevelDescName(i) => {
            config.level_descriptions().get(i).map(|l| l.name.clone())
        }
        EditorRow::LevelDescText(i) => config
            .level_descriptions()
            .get(i)
            .map(|l| l.description.clone()),
        EditorRow::AddAttribute | EditorRow::AddLevelDesc => None,
    }
}

/// Applies a committed edit buffer to the configuration.
fn commit_edit(config: &mut Configuration, row: EditorRow, text: &str) {
    match row {
        EditorRow::ConfigName => config.name = text.to_string(),
        // parse-or-fallback mirrors numeric input coercion: garbage becomes
        // the field minimum rather than an error
        EditorRow::Levels => {
            config.levels = text.parse().unwrap_or(1);
            let max = config.levels;
            for attr in &mut config.attributes {
                attr.value = attr.value.min(max);
            }
        }
        EditorRow::AttributeName(i) => {
            if let Some(attr) = config.attributes.get_mut(i) {
                attr.name = text.to_string();
            }
        }
        EditorRow::AttributeValue(i) => {
            config.set_attribute_value(i, text.parse().unwrap_or(0));
        }
        EditorRow::AttributeDescription(i) => {
            if let Some(attr) = config.attributes.get_mut(i) {
                attr.description = if text.is_empty() {
                    None
                } else {
                    Some(text.to_string())
                };
            }
        }
        EditorRow::LevelDescName(i) => {
            if let Some(descs) = config.level_descriptions.as_mut() {
                if let Some(entry) = descs.get_mut(i) {
                    entry.name = text.to_string();
                }
            }
        }
        EditorRow::LevelDescText(i) => {
            if let Some(descs) = config.level_descriptions.as_mut() {
                if let Some(entry) = descs.get_mut(i) {
                    entry.description = text.to_string();
                }
            }
        }
        EditorRow::AddAttribute | EditorRow::AddLevelDesc => {}
    }
}

/// Handle input for the editor panel.
pub fn handle_editor_input(state: &mut AppState, key: event::KeyEvent) {
    let row_list = rows(&state.current);
    let Some(&row) = row_list.get(state.editor.selected) else {
        state.editor.selected = 0;
        return;
    };

    // Inline edit mode captures everything except commit/cancel
    if state.editor.is_editing() {
        match key.code {
            KeyCode::Enter => {
                let text = state.editor.edit_buffer.take().unwrap_or_default();
                state.update_current(|config| commit_edit(config, row, &text));
            }
            KeyCode::Esc => {
                state.editor.edit_buffer = None;
            }
            KeyCode::Backspace => {
                if let Some(buffer) = state.editor.edit_buffer.as_mut() {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = state.editor.edit_buffer.as_mut() {
                    buffer.push(c);
                }
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.editor.selected = state.editor.selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.editor.selected + 1 < row_list.len() {
                state.editor.selected += 1;
            }
        }
        KeyCode::Enter => match row {
            EditorRow::AddAttribute => {
                state.update_current(Configuration::add_attribute);
                state.set_status("Attribute added");
            }
            EditorRow::AddLevelDesc => {
                state.update_current(Configuration::add_level_description);
                state.set_status("Level description added");
            }
            _ => {
                state.editor.edit_buffer = row_text(&state.current, row);
            }
        },
        KeyCode::Left | KeyCode::Char('-') => match row {
            EditorRow::Levels => {
                if state.current.levels > 1 {
                    state.update_current(|config| {
                        config.levels -= 1;
                        let max = config.levels;
                        for attr in &mut config.attributes {
                            attr.value = attr.value.min(max);
                        }
                    });
                }
            }
            EditorRow::AttributeValue(i) => {
                let value = state.current.attributes[i].value.saturating_sub(1);
                state.update_current(|config| config.set_attribute_value(i, value));
            }
            _ => {}
        },
        KeyCode::Right | KeyCode::Char('+') => match row {
            EditorRow::Levels => {
                state.update_current(|config| config.levels += 1);
            }
            EditorRow::AttributeValue(i) => {
                let value = state.current.attributes[i].value + 1;
                state.update_current(|config| config.set_attribute_value(i, value));
            }
            _ => {}
        },
        KeyCode::Delete | KeyCode::Char('d') => match row {
            EditorRow::AttributeName(i)
            | EditorRow::AttributeValue(i)
            | EditorRow::AttributeDescription(i) => {
                if state.current.attributes.len() <= MIN_ATTRIBUTES {
                    state.set_status("Minimum 3 attributes - cannot remove");
                } else {
                    state.update_current(|config| {
                        config.remove_attribute(i);
                    });
                    state.editor.clamp_selection(&state.current);
                    state.set_status("Attribute removed");
                }
            }
            EditorRow::LevelDescName(i) | EditorRow::LevelDescText(i) => {
                state.update_current(|config| config.remove_level_description(i));
                state.editor.clamp_selection(&state.current);
                state.set_status("Level description removed");
            }
            _ => {}
        },
        _ => {}
    }
}

/// Render the editor panel.
pub fn render_editor(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let config = &state.current;
    let row_list = rows(config);

    let mut lines: Vec<Line> = Vec::new();
    let mut selected_line = 0usize;
    let mut attr_header_done = false;
    let mut level_header_done = false;

    for (idx, row) in row_list.iter().enumerate() {
        match row {
            EditorRow::AttributeName(_) | EditorRow::AddAttribute if !attr_header_done => {
                attr_header_done = true;
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Attributes",
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            EditorRow::LevelDescName(_) | EditorRow::AddLevelDesc if !level_header_done => {
                level_header_done = true;
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Level descriptions",
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            _ => {}
        }

        let is_selected = idx == state.editor.selected;
        if is_selected {
            selected_line = lines.len();
        }
        lines.push(render_row(config, *row, state, is_selected, theme));
    }

    // Validation errors below the form, accumulated
    if !state.errors.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Validation errors",
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )));
        for error in &state.errors {
            lines.push(Line::from(Span::styled(
                format!("  {error}"),
                Style::default().fg(theme.error),
            )));
        }
    }

    // Keep the selected row visible
    let visible = area.height.saturating_sub(2) as usize;
    let offset = if selected_line >= visible {
        (selected_line + 1 - visible) as u16
    } else {
        0
    };

    let panel = Paragraph::new(lines)
        .style(Style::default().bg(theme.background))
        .scroll((offset, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Configuration ")
                .style(Style::default().fg(theme.primary).bg(theme.background)),
        );

    f.render_widget(panel, area);
}

/// Render one editor row as a styled line.
fn render_row(
    config: &Configuration,
    row: EditorRow,
    state: &AppState,
    is_selected: bool,
    theme: &Theme,
) -> Line<'static> {
    let editing = is_selected && state.editor.is_editing();
    let value = if editing {
        format!("{}\u{2588}", state.editor.edit_buffer.as_deref().unwrap_or(""))
    } else {
        row_text(config, row).unwrap_or_default()
    };

    let label = match row {
        EditorRow::ConfigName => "Name: ".to_string(),
        EditorRow::Levels => "Levels: ".to_string(),
        EditorRow::AttributeName(i) => format!("{}. Name: ", i + 1),
        EditorRow::AttributeValue(i) => {
            format!("{}. Value ({}/{}): ", i + 1, config.attributes[i].value, config.levels)
        }
        EditorRow::AttributeDescription(i) => format!("{}. Description: ", i + 1),
        EditorRow::AddAttribute => "[+] Add attribute".to_string(),
        EditorRow::LevelDescName(i) => format!("{}. Level name: ", i + 1),
        EditorRow::LevelDescText(i) => format!("{}. Text: ", i + 1),
        EditorRow::AddLevelDesc => "[+] Add level description".to_string(),
    };

    let base_style = if is_selected {
        Style::default()
            .fg(theme.accent)
            .bg(theme.highlight_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };

    let shown = match row {
        // Action rows carry no value; numeric row shows value in the label
        EditorRow::AddAttribute | EditorRow::AddLevelDesc => String::new(),
        EditorRow::AttributeValue(_) if !editing => String::new(),
        _ => truncate(&value, 40),
    };

    Line::from(vec![
        Span::styled(label, base_style),
        Span::styled(shown, base_style),
    ])
}

/// Truncates long field values for single-line display.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Attribute;

    fn config() -> Configuration {
        Configuration::new(
            "Test",
            vec![
                Attribute::new("A", 1),
                Attribute::new("B", 2),
                Attribute::new("C", 3),
            ],
            5,
        )
    }

    #[test]
    fn test_rows_cover_all_fields() {
        let mut c = config();
        c.add_level_description();
        let rows = rows(&c);
        // name + levels + 3 attributes x 3 + add + 1 level desc x 2 + add
        assert_eq!(rows.len(), 2 + 9 + 1 + 2 + 1);
        assert_eq!(rows[0], EditorRow::ConfigName);
        assert!(rows.contains(&EditorRow::AddAttribute));
        assert!(rows.contains(&EditorRow::LevelDescText(0)));
    }

    #[test]
    fn test_commit_levels_clamps_values() {
        let mut c = config();
        c.attributes[2].value = 5;
        commit_edit(&mut c, EditorRow::Levels, "2");
        assert_eq!(c.levels, 2);
        assert_eq!(c.attributes[2].value, 2);
    }

    #[test]
    fn test_commit_garbage_numbers_fall_back() {
        let mut c = config();
        commit_edit(&mut c, EditorRow::Levels, "abc");
        assert_eq!(c.levels, 1);

        commit_edit(&mut c, EditorRow::AttributeValue(0), "xyz");
        assert_eq!(c.attributes[0].value, 0);
    }

    #[test]
    fn test_commit_value_clamped_to_levels() {
        let mut c = config();
        commit_edit(&mut c, EditorRow::AttributeValue(1), "99");
        assert_eq!(c.attributes[1].value, 5);
    }

    #[test]
    fn test_commit_empty_description_clears_it() {
        let mut c = config();
        commit_edit(&mut c, EditorRow::AttributeDescription(0), "something");
        assert_eq!(c.attributes[0].description.as_deref(), Some("something"));
        commit_edit(&mut c, EditorRow::AttributeDescription(0), "");
        assert!(c.attributes[0].description.is_none());
    }

    #[test]
    fn test_clamp_selection_after_shrink() {
        let mut c = config();
        c.add_attribute();
        let mut editor = EditorState::new();
        editor.selected = rows(&c).len() - 1;
        c.remove_attribute(3);
        editor.clamp_selection(&c);
        assert!(editor.selected < rows(&c).len());
    }
}
