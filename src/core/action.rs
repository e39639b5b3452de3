//! Actions produced by key handling and commands

use std::path::PathBuf;

/// State changes requested of the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Select a tab by name (normalized by the app)
    SelectTab(String),

    /// Export all datasets, optionally into a specific directory
    Export(Option<PathBuf>),

    /// Copy the current view as plain text
    Copy,

    /// Show or hide the help popup
    ToggleHelp,

    /// Show notification in status line
    Notify(String, NotifyLevel),

    /// Request quit
    Quit,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
