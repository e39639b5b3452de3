use std::path::PathBuf;
use std::time::{Duration, Instant};

use ratatui::style::Color;

use crate::core::{Action, Command, NotifyLevel};
use crate::domain::Dataset;
use crate::modules::{export, views};

/// Main tabs in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Trims,
    CargoSpace,
    Ratings,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Trims, Tab::CargoSpace, Tab::Ratings];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Trims => "Trims",
            Tab::CargoSpace => "Cargo Space",
            Tab::Ratings => "Ratings",
        }
    }

    /// Normalized selection key ("cargo space" for the Cargo Space tab)
    pub fn key(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Trims => "trims",
            Tab::CargoSpace => "cargo space",
            Tab::Ratings => "ratings",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Tab::Overview => '1',
            Tab::Trims => '2',
            Tab::CargoSpace => '3',
            Tab::Ratings => '4',
        }
    }

    pub fn from_key(key: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.key() == key)
    }

    pub fn from_shortcut(ch: char) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.shortcut() == ch)
    }

    fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }
}

/// Normalize a tab name the way the tab bar does: trimmed and lowercased.
pub fn normalize_tab_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

impl From<NotifyLevel> for StatusLevel {
    fn from(level: NotifyLevel) -> Self {
        match level {
            NotifyLevel::Info => StatusLevel::Info,
            NotifyLevel::Warn => StatusLevel::Warn,
            NotifyLevel::Error => StatusLevel::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub at: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct CommandState {
    pub input: String,
}

pub struct App {
    pub data: Dataset,
    active_tab: String,
    pub input_mode: InputMode,
    pub command: CommandState,
    pub status: Option<StatusMessage>,
    pub help_open: bool,
    pub should_quit: bool,
    pub accent: Color,
    pub export_dir: Option<PathBuf>,
}

impl App {
    const STATUS_TTL: Duration = Duration::from_secs(5);

    pub fn new() -> Self {
        Self {
            data: Dataset::telluride(),
            active_tab: Tab::Overview.key().to_string(),
            input_mode: InputMode::Normal,
            command: CommandState::default(),
            status: None,
            help_open: false,
            should_quit: false,
            accent: Color::Rgb(0x00, 0xA6, 0xE2),
            export_dir: None,
        }
    }

    /// Replace the selection with the normalized `name`.
    ///
    /// Any string is accepted; names that match no tab simply render nothing.
    pub fn select_tab(&mut self, name: &str) {
        let normalized = normalize_tab_name(name);
        if normalized != self.active_tab {
            tracing::debug!(from = %self.active_tab, to = %normalized, "tab selected");
        }
        self.active_tab = normalized;
    }

    pub fn selection(&self) -> &str {
        &self.active_tab
    }

    pub fn active_tab(&self) -> Option<Tab> {
        Tab::from_key(&self.active_tab)
    }

    /// Step through the four tabs, wrapping at either end. An unrecognized
    /// selection starts over from Overview.
    pub fn cycle_tab(&mut self, forward: bool) {
        let next = match self.active_tab() {
            Some(tab) => {
                let len = Tab::ALL.len();
                let idx = if forward {
                    (tab.index() + 1) % len
                } else {
                    (tab.index() + len - 1) % len
                };
                Tab::ALL[idx]
            }
            None => Tab::Overview,
        };
        self.select_tab(next.title());
    }

    pub fn current_view(&self) -> Option<views::ViewBlock> {
        views::render_view(&self.active_tab, &self.data)
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            at: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status.as_ref().map(|s| (s.text.as_str(), s.level))
    }

    pub fn on_tick(&mut self) {
        if self
            .status
            .as_ref()
            .is_some_and(|s| s.at.elapsed() >= Self::STATUS_TTL)
        {
            self.status = None;
        }
    }

    pub fn toggle_help(&mut self) {
        self.help_open = !self.help_open;
    }

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    /// Parse and run whatever is in the command line, then leave command mode.
    pub fn apply_command(&mut self) {
        let input = std::mem::take(&mut self.command.input);
        self.input_mode = InputMode::Normal;
        if input.trim().is_empty() {
            return;
        }
        let cmd = crate::core::parse_command(&input);
        let action = self.execute_command(&cmd);
        self.apply_action(action);
    }

    pub fn execute_command(&mut self, cmd: &Command) -> Action {
        match cmd {
            Command::Tab(name) => Action::SelectTab(name.clone()),
            Command::Export(dir) => Action::Export(dir.clone()),
            Command::Copy => Action::Copy,
            Command::Help => Action::ToggleHelp,
            Command::Quit => Action::Quit,
            Command::Unknown(input) => {
                Action::Notify(format!("Unknown command: {input}"), NotifyLevel::Error)
            }
        }
    }

    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::SelectTab(name) => self.select_tab(&name),
            Action::Export(dir) => {
                let outcome = self.export(dir);
                self.apply_action(outcome);
            }
            Action::Copy => {
                let outcome = self.copy_view();
                self.apply_action(outcome);
            }
            Action::ToggleHelp => self.toggle_help(),
            Action::Notify(text, level) => self.set_status(text, level.into()),
            Action::Quit => self.should_quit = true,
        }
    }

    fn export(&self, dir: Option<PathBuf>) -> Action {
        let Some(base) = dir
            .or_else(|| self.export_dir.clone())
            .or_else(export::default_export_dir)
        else {
            return Action::Notify(
                "No export directory available".to_string(),
                NotifyLevel::Error,
            );
        };
        match export::export_all(&base, &self.data) {
            Ok(report) => {
                tracing::info!(dir = %report.dir.display(), files = report.files, "exported datasets");
                Action::Notify(
                    format!("Exported {} files to {}", report.files, report.dir.display()),
                    NotifyLevel::Info,
                )
            }
            Err(err) => {
                tracing::warn!(error = %err, "export failed");
                Action::Notify(format!("Export failed: {err}"), NotifyLevel::Error)
            }
        }
    }

    fn copy_view(&self) -> Action {
        let Some(view) = self.current_view() else {
            return Action::Notify(
                "Nothing to copy in this view".to_string(),
                NotifyLevel::Warn,
            );
        };
        let text = view.plain_lines().join("\n");
        let result = arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text));
        match result {
            Ok(()) => Action::Notify("Copied view to clipboard".to_string(), NotifyLevel::Info),
            Err(err) => {
                tracing::warn!(error = %err, "clipboard unavailable");
                Action::Notify(format!("Clipboard unavailable: {err}"), NotifyLevel::Warn)
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
