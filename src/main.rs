mod app;
mod config;
mod core;
mod domain;
mod modules;
mod ui;

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::{App, InputMode, StatusLevel, Tab};
use crate::core::Action;
use crate::modules::export;

#[derive(Debug, Parser)]
#[command(
    name = "telluride",
    version,
    about = "Telluride: a terminal dashboard for the Kia Telluride"
)]
struct Args {
    /// Tab to open (overview, trims, "cargo space", ratings)
    #[arg(long)]
    tab: Option<String>,

    /// Config file (default: ~/.config/telluride/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the selected view as plain text and exit
    #[arg(long)]
    print: bool,

    /// Export every table as CSV/JSON into DIR and exit
    #[arg(long, value_name = "DIR")]
    export: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let (config, config_error) = match config::load(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => (config::Config::default(), Some(err)),
    };

    let headless = args.print || args.export.is_some();
    let log_file = args.log_file.clone().or_else(|| config.log_file.clone());
    init_logging(log_file.as_deref(), headless)?;
    if let Some(err) = &config_error {
        tracing::warn!(error = %err, "falling back to default config");
    }

    let mut app = App::new();
    if let Some(accent) = config.accent_color() {
        app.accent = accent;
    }
    app.export_dir = config.export_dir.clone();
    if let Some(tab) = args.tab.as_deref().or(config.default_tab.as_deref()) {
        app.select_tab(tab);
    }

    if let Some(dir) = args.export.as_deref() {
        let report = export::export_all(dir, &app.data)?;
        println!("Exported {} files to {}", report.files, report.dir.display());
        return Ok(());
    }

    if args.print {
        match app.current_view() {
            Some(view) => {
                for line in view.plain_lines() {
                    println!("{line}");
                }
            }
            None => tracing::warn!(tab = %app.selection(), "no view for selection"),
        }
        return Ok(());
    }

    if let Some(err) = config_error {
        app.set_status(format!("Config ignored: {err}"), StatusLevel::Warn);
    }
    let tick_rate = Duration::from_millis(config.tick_rate_ms());

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!(tab = %app.selection(), "dashboard started");
    let res = run_app(&mut terminal, app, tick_rate);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    exit_status(res)
}

/// Log a failed run; the error is still returned so the process exits non-zero.
fn exit_status(res: Result<()>) -> Result<()> {
    if let Err(err) = &res {
        tracing::error!(error = %err, "dashboard exited with error");
    }
    res
}

/// Install the tracing subscriber.
///
/// While the TUI owns the terminal, logs only go to a file. Headless runs
/// without a log file log to stderr instead.
fn init_logging(log_file: Option<&Path>, headless: bool) -> Result<()> {
    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };
    let stderr_layer = (file_layer.is_none() && headless).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(io::stderr)
    });
    if file_layer.is_none() && stderr_layer.is_none() {
        return Ok(());
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        ))
        .with(file_layer)
        .with(stderr_layer)
        .init();
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            tracing::info!("quit requested");
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => handle_key(&mut app, key),
                Event::Mouse(mouse) => handle_mouse(&mut app, mouse),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.help_open = false;
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Command => handle_command_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Char(':') => {
            app.enter_command();
            Action::None
        }
        KeyCode::Char('e') => Action::Export(None),
        KeyCode::Char('y') => Action::Copy,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
            app.cycle_tab(false);
            Action::None
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
            app.cycle_tab(true);
            Action::None
        }
        KeyCode::Char(ch) => match Tab::from_shortcut(ch) {
            Some(tab) => Action::SelectTab(tab.title().to_string()),
            None => Action::None,
        },
        _ => Action::None,
    };
    app.apply_action(action);
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => app.apply_command(),
        KeyCode::Backspace => {
            app.command.input.pop();
        }
        KeyCode::Char(ch) => app.command.input.push(ch),
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.help_open || app.input_mode == InputMode::Command {
        return;
    }
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let Some(size) = terminal_rect() else {
        return;
    };
    let areas = ui::layout::areas(size);
    if let Some(tab) = ui::tabs::tab_at(areas.tabs, mouse.column, mouse.row) {
        app.select_tab(tab.title());
    }
}

fn terminal_rect() -> Option<Rect> {
    let (width, height) = crossterm::terminal::size().ok()?;
    Some(Rect {
        x: 0,
        y: 0,
        width,
        height,
    })
}
