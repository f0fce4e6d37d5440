//! Terminal user interface for the radar chart editor.
//!
//! The TUI is organized around a single [`AppState`] that owns the working
//! configuration, the saved-configuration list, and all transient UI state.
//! Rendering reads the state immutably; mutations happen only in the key
//! handlers. Popups implement [`Component`] and communicate through events.

pub mod chart;
pub mod component;
pub mod editor;
pub mod help_overlay;
pub mod picker;
pub mod save_dialog;
pub mod share_dialog;
pub mod status_bar;
pub mod theme;

pub use component::Component;
pub use theme::Theme;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::Configuration;
use crate::presets;
use crate::share;
use crate::storage;
use crate::validation;

use chart::ChartPanelState;
use editor::EditorState;
use picker::{ConfigPicker, PickerEvent};
use save_dialog::{SaveDialog, SaveDialogEvent};
use share_dialog::{ShareDialog, ShareDialogEvent};
use status_bar::StatusBar;

/// Which popup is currently active, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Configuration picker (presets + saved)
    Picker,
    /// Save-as name prompt
    SaveDialog,
    /// Share URL dialog
    ShareDialog,
    /// Keyboard shortcut reference
    HelpOverlay,
}

/// Stateful popup component instances.
pub enum ActiveComponent {
    /// Configuration picker
    Picker(ConfigPicker),
    /// Save-as dialog
    SaveDialog(SaveDialog),
    /// Share dialog
    ShareDialog(ShareDialog),
}

/// Central application state, the single source of truth for the TUI.
pub struct AppState {
    /// Configuration currently being edited
    pub current: Configuration,
    /// Saved configurations, mirrored to the store on every change
    pub saved: Vec<Configuration>,
    /// Validation errors for the working configuration
    pub errors: Vec<String>,
    /// Whether the working configuration has unsaved edits
    pub dirty: bool,
    /// Application preferences
    pub config: Config,
    /// Resolved color theme
    pub theme: Theme,
    /// Editor pane state
    pub editor: EditorState,
    /// Chart detail-panel state
    pub chart: ChartPanelState,
    /// Active popup indicator
    pub active_popup: Option<PopupType>,
    /// Active popup component instance
    pub active_component: Option<ActiveComponent>,
    /// Transient status message, cleared on the next key press
    pub status_message: Option<String>,
    /// Quit flag checked by the event loop
    pub should_quit: bool,
}

impl AppState {
    /// Creates the initial state: preferences and the saved store are loaded,
    /// and the working configuration starts from the first preset (or the
    /// provided configuration, e.g. one decoded from a share URL).
    pub fn new(initial: Option<Configuration>) -> Result<Self> {
        let config = Config::load()?;
        // Materialize the preferences file on first run so users can find it
        if !Config::config_file_path()?.exists() {
            config.save()?;
        }
        let theme = Theme::from_mode(config.ui.theme_mode);
        let saved = storage::load();
        let current = initial.unwrap_or_else(presets::default_configuration);
        let errors = validation::validate(&current);

        Ok(Self {
            current,
            saved,
            errors,
            dirty: false,
            config,
            theme,
            editor: EditorState::new(),
            chart: ChartPanelState::default(),
            active_popup: None,
            active_component: None,
            status_message: None,
            should_quit: false,
        })
    }

    /// Applies a mutation to the working configuration, then revalidates and
    /// marks the state dirty. All edits go through here.
    pub fn update_current<F>(&mut self, mutate: F)
    where
        F: FnOnce(&mut Configuration),
    {
        mutate(&mut self.current);
        self.errors = validation::validate(&self.current);
        self.dirty = true;
        self.editor.clamp_selection(&self.current);
    }

    /// Replaces the working configuration wholesale (load, preset select).
    pub fn set_current(&mut self, config: Configuration) {
        self.current = config;
        self.errors = validation::validate(&self.current);
        self.dirty = false;
        self.editor = EditorState::new();
    }

    /// Saves the working configuration under its current name.
    ///
    /// Refused while validation errors are present or while the working name
    /// is a reserved preset name; overwrites any saved configuration with the
    /// same name.
    pub fn save_current(&mut self) -> Result<()> {
        if presets::is_preset_name(&self.current.name) {
            self.set_status("Preset names are reserved, use save-as (S) with a new name");
            return Ok(());
        }
        if !self.errors.is_empty() {
            self.set_status("Cannot save: fix validation errors first");
            return Ok(());
        }

        let overwrote = storage::upsert(&mut self.saved, self.current.clone());
        storage::save(&self.saved)?;
        self.dirty = false;
        self.set_status(if overwrote {
            format!("Updated '{}'", self.current.name)
        } else {
            format!("Saved '{}'", self.current.name)
        });
        Ok(())
    }

    /// Saves the working configuration under a new name, which becomes the
    /// working name.
    ///
    /// Preset names are reserved and refused.
    pub fn save_as(&mut self, name: &str) -> Result<()> {
        if presets::is_preset_name(name) {
            self.set_status(format!("'{name}' is a built-in preset name"));
            return Ok(());
        }
        if !self.errors.is_empty() {
            self.set_status("Cannot save: fix validation errors first");
            return Ok(());
        }

        self.current.name = name.to_string();
        self.save_current()
    }

    /// Deletes a saved configuration by name and persists the store.
    ///
    /// When the deleted configuration is the one being edited, the editor
    /// resets to the first preset.
    pub fn delete_saved(&mut self, name: &str) -> Result<()> {
        if !storage::remove(&mut self.saved, name) {
            return Ok(());
        }
        storage::save(&self.saved)?;

        if self.current.name == name {
            self.set_current(presets::default_configuration());
        }
        self.set_status(format!("Deleted '{name}'"));
        Ok(())
    }

    /// Loads a preset or saved configuration by name into the editor.
    ///
    /// Unknown names are ignored silently.
    pub fn select_by_name(&mut self, name: &str) {
        let found = presets::preset_by_name(name)
            .or_else(|| self.saved.iter().find(|c| c.name == name).cloned());
        if let Some(config) = found {
            self.set_current(config);
        }
    }

    /// Names of all saved configurations, in store order.
    #[must_use]
    pub fn saved_names(&self) -> Vec<String> {
        self.saved.iter().map(|c| c.name.clone()).collect()
    }

    /// Share URL for the working configuration.
    #[must_use]
    pub fn share_url(&self) -> String {
        share::encode_url(&self.config.share.base_url, &self.current)
    }

    /// Sets a transient status message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    fn open_popup(&mut self, popup: PopupType, component: Option<ActiveComponent>) {
        self.active_popup = Some(popup);
        self.active_component = component;
    }

    fn close_popup(&mut self) {
        self.active_popup = None;
        self.active_component = None;
    }
}

/// Runs the TUI until the user quits.
pub fn run(initial: Option<Configuration>) -> Result<()> {
    let mut state = AppState::new(initial)?;
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut state);
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let terminal =
        Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key_event(state, key)?;
                }
            }
        }

        if state.should_quit {
            return Ok(());
        }
    }
}

/// Render the full frame: title, editor + chart panes, status bar, popups.
fn render(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Main panes
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    let title = Paragraph::new(format!(" {APP_NAME} "))
        .style(
            Style::default()
                .fg(state.theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );
    f.render_widget(title, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    editor::render_editor(f, panes[0], state);
    chart::render_chart(f, panes[1], state);

    StatusBar::render(f, chunks[2], state, &state.theme);

    let full = f.area();
    match &state.active_component {
        Some(ActiveComponent::Picker(picker)) => picker.render(f, full, &state.theme),
        Some(ActiveComponent::SaveDialog(dialog)) => dialog.render(f, full, &state.theme),
        Some(ActiveComponent::ShareDialog(dialog)) => dialog.render(f, full, &state.theme),
        None => {
            if state.active_popup == Some(PopupType::HelpOverlay) {
                help_overlay::render(f, full, &state.theme);
            }
        }
    }
}

/// Route a key press to the active popup or the main editor.
fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<()> {
    state.status_message = None;

    if state.active_popup.is_some() {
        return handle_popup_input(state, key);
    }

    // Global keys are ignored while a field edit is in progress so typed
    // text reaches the edit buffer
    if !state.editor.is_editing() {
        match key.code {
            KeyCode::Char('q') => {
                state.should_quit = true;
                return Ok(());
            }
            KeyCode::Char('o') => {
                let picker = ConfigPicker::new(state.saved_names());
                state.open_popup(PopupType::Picker, Some(ActiveComponent::Picker(picker)));
                return Ok(());
            }
            KeyCode::Char('s') => {
                return state.save_current();
            }
            KeyCode::Char('S') => {
                let dialog = SaveDialog::new(&state.current.name, state.saved_names());
                state.open_popup(
                    PopupType::SaveDialog,
                    Some(ActiveComponent::SaveDialog(dialog)),
                );
                return Ok(());
            }
            KeyCode::Char('c') => {
                let dialog = ShareDialog::new(state.share_url());
                if dialog.copied() {
                    state.set_status("Share URL copied to clipboard");
                }
                state.open_popup(
                    PopupType::ShareDialog,
                    Some(ActiveComponent::ShareDialog(dialog)),
                );
                return Ok(());
            }
            KeyCode::Char('1') => {
                state.chart.toggle_attribute_details();
                return Ok(());
            }
            KeyCode::Char('2') => {
                state.chart.toggle_level_glossary();
                return Ok(());
            }
            KeyCode::Char('?') => {
                state.open_popup(PopupType::HelpOverlay, None);
                return Ok(());
            }
            KeyCode::PageDown => {
                if state.chart.show_attribute_details {
                    state.chart.details_scroll = state.chart.details_scroll.saturating_add(3);
                }
                return Ok(());
            }
            KeyCode::PageUp => {
                state.chart.details_scroll = state.chart.details_scroll.saturating_sub(3);
                return Ok(());
            }
            _ => {}
        }
    }

    editor::handle_editor_input(state, key);
    Ok(())
}

/// Dispatch a key press to the active popup component and process its event.
fn handle_popup_input(state: &mut AppState, key: KeyEvent) -> Result<()> {
    // Help overlay has no component state
    if state.active_component.is_none() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            state.close_popup();
        }
        return Ok(());
    }

    // Take the component out so event handling can borrow state mutably
    let Some(mut component) = state.active_component.take() else {
        return Ok(());
    };

    let mut keep_open = true;
    match &mut component {
        ActiveComponent::Picker(picker) => match picker.handle_input(key) {
            Some(PickerEvent::Selected(name)) => {
                state.select_by_name(&name);
                state.set_status(format!("Loaded '{name}'"));
                keep_open = false;
            }
            Some(PickerEvent::Deleted(name)) => {
                state.delete_saved(&name)?;
                picker.remove_saved(&name);
            }
            Some(PickerEvent::Cancelled) => keep_open = false,
            None => {}
        },
        ActiveComponent::SaveDialog(dialog) => match dialog.handle_input(key) {
            Some(SaveDialogEvent::Confirmed(name)) => {
                state.save_as(&name)?;
                keep_open = false;
            }
            Some(SaveDialogEvent::Cancelled) => keep_open = false,
            None => {}
        },
        ActiveComponent::ShareDialog(dialog) => {
            if dialog.handle_input(key) == Some(ShareDialogEvent::Closed) {
                keep_open = false;
            }
        }
    }

    if keep_open {
        state.active_component = Some(component);
    } else {
        state.close_popup();
    }
    Ok(())
}

/// Helper to create a centered rectangle within `r`.
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::PRESET_NAMES;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;

    // Tests share the config-dir env var, so they must not interleave
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn isolated_state() -> (MutexGuard<'static, ()>, TempDir, AppState) {
        let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = TempDir::new().unwrap();
        std::env::set_var(crate::constants::CONFIG_DIR_ENV, dir.path());
        let state = AppState::new(None).unwrap();
        (guard, dir, state)
    }

    #[test]
    fn test_initial_state_is_first_preset() {
        let (_guard, _dir, state) = isolated_state();
        assert_eq!(state.current.name, PRESET_NAMES[0]);
        assert!(state.errors.is_empty());
        assert!(!state.dirty);
    }

    #[test]
    fn test_update_current_revalidates_and_dirties() {
        let (_guard, _dir, mut state) = isolated_state();
        state.update_current(|config| config.attributes[0].name = String::new());
        assert!(state.dirty);
        assert!(state
            .errors
            .contains(&crate::validation::ERR_ATTRIBUTE_NAMES_EMPTY.to_string()));
    }

    #[test]
    fn test_save_refused_while_invalid() {
        let (_guard, _dir, mut state) = isolated_state();
        state.update_current(|config| config.attributes[0].name = String::new());
        state.save_current().unwrap();
        assert!(state.saved.is_empty());
        assert!(state.dirty);
    }

    #[test]
    fn test_save_as_renames_and_persists() {
        let (_guard, _dir, mut state) = isolated_state();
        state.update_current(|config| config.add_attribute());
        state.save_as("My Config").unwrap();

        assert_eq!(state.current.name, "My Config");
        assert!(!state.dirty);
        assert_eq!(state.saved.len(), 1);
        assert_eq!(storage::load().len(), 1);
    }

    #[test]
    fn test_save_overwrites_same_name() {
        let (_guard, _dir, mut state) = isolated_state();
        state.save_as("Mine").unwrap();
        state.update_current(|config| config.levels = 7);
        state.save_current().unwrap();

        assert_eq!(state.saved.len(), 1);
        assert_eq!(state.saved[0].levels, 7);
    }

    #[test]
    fn test_delete_active_resets_to_first_preset() {
        let (_guard, _dir, mut state) = isolated_state();
        state.save_as("Mine").unwrap();
        state.delete_saved("Mine").unwrap();

        assert!(state.saved.is_empty());
        assert_eq!(state.current.name, PRESET_NAMES[0]);
        assert!(storage::load().is_empty());
    }

    #[test]
    fn test_delete_inactive_keeps_editor() {
        let (_guard, _dir, mut state) = isolated_state();
        state.save_as("Other").unwrap();
        state.select_by_name(PRESET_NAMES[1]);
        state.delete_saved("Other").unwrap();

        assert_eq!(state.current.name, PRESET_NAMES[1]);
    }

    #[test]
    fn test_preset_names_are_reserved() {
        let (_guard, _dir, mut state) = isolated_state();
        // Plain save while editing a preset is refused
        state.save_current().unwrap();
        assert!(state.saved.is_empty());

        // Save-as under another preset's name is refused too
        state.save_as(PRESET_NAMES[1]).unwrap();
        assert!(state.saved.is_empty());
        assert_eq!(state.current.name, PRESET_NAMES[0]);
    }

    #[test]
    fn test_select_unknown_name_is_ignored() {
        let (_guard, _dir, mut state) = isolated_state();
        let before = state.current.clone();
        state.select_by_name("no such configuration");
        assert_eq!(state.current, before);
    }

    #[test]
    fn test_select_prefers_presets_over_saved() {
        let (_guard, _dir, mut state) = isolated_state();
        // Shadow a preset name in the store
        state.update_current(|config| config.levels = 2);
        let mut shadow = state.current.clone();
        shadow.name = PRESET_NAMES[0].to_string();
        storage::upsert(&mut state.saved, shadow);

        state.select_by_name(PRESET_NAMES[0]);
        assert_eq!(state.current.levels, presets::default_configuration().levels);
    }

    #[test]
    fn test_share_url_uses_configured_base() {
        let (_guard, _dir, mut state) = isolated_state();
        state.config.share.base_url = "https://charts.internal/".to_string();
        assert!(state.share_url().starts_with("https://charts.internal/?"));
    }
}
