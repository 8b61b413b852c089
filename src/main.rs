mod app;
mod config;
mod engine;
mod error;
mod events;
mod haptics;
mod log;
mod tui;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;
use std::time::{Duration, Instant};

use app::App;
use config::Config;
use events::{Action, EventHandler};

/// Frame interval while a wheel is flinging or snapping.
const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Idle poll interval; keeps the loop responsive to resize without spinning.
const IDLE_TICK: Duration = Duration::from_millis(250);

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<std::path::PathBuf> = None;
    let mut haptics_override: Option<bool> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(std::path::PathBuf::from(&args[i + 1]));
                    i += 2;
                    continue;
                } else {
                    eprintln!("Warning: --config requires a path argument");
                    i += 1;
                }
            }
            "--no-haptics" => {
                haptics_override = Some(false);
                i += 1;
            }
            _ => {
                // Unknown flag, ignore
                i += 1;
            }
        }
    }

    // Load config with precedence: CLI > config file > defaults
    let mut config = Config::load(config_path.clone())?;
    if let Some(haptics) = haptics_override {
        config.haptics = haptics;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(&config, haptics::sink_for(config.haptics));

    // Run the app
    let result = run_app(&mut terminal, &mut app, config_path).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    config_path: Option<std::path::PathBuf>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        // Render
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        if app.should_quit {
            return Ok(());
        }

        // Tick fast only while something animates.
        let tick = if app.is_animating() {
            ANIMATION_TICK
        } else {
            IDLE_TICK
        };

        tokio::select! {
            // Terminal events (keyboard, mouse, resize)
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event {
                    match EventHandler::handle_event(app, &event) {
                        // Reload needs the config path, which the app
                        // doesn't carry; a broken file keeps the old state.
                        Action::ReloadConfig => match Config::load(config_path.clone()) {
                            Ok(config) => app.reconfigure(&config),
                            Err(e) => log::log(&format!("Warning: reload failed: {}", e)),
                        },
                        action => app.apply(action, Instant::now()),
                    }
                }
            }
            // Animation frames for flings and snaps
            _ = tokio::time::sleep(tick) => {
                app.tick(Instant::now());
            }
        }
    }
}
