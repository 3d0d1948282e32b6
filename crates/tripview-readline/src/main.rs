mod command;
mod helper;
mod logging;
mod render;
mod terminal_map;

use std::io::Stdout;

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::history::DefaultHistory;
use tokio::sync::broadcast;

use tripview_application::{MapPanel, Presenter, SessionEvent, TripLoader, TripSession};
use tripview_core::config::{RootConfig, SecretConfig};
use tripview_core::secret::SecretService;
use tripview_infrastructure::paths::TripviewPaths;
use tripview_infrastructure::{ConfigService, SecretServiceImpl, trip_source_from_config};

use crate::command::{Command, help_text};
use crate::helper::ViewerHelper;
use crate::terminal_map::TerminalMapWidget;

fn load_config(paths: &TripviewPaths) -> RootConfig {
    let loaded = ConfigService::new(paths).and_then(|service| service.get_config());
    match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("[Main] Failed to load config.toml: {}", e);
            eprintln!("{}", format!("Config error: {}. Using defaults.", e).yellow());
            RootConfig::default()
        }
    }
}

async fn load_secrets(paths: &TripviewPaths) -> SecretConfig {
    let service = match SecretServiceImpl::new(paths.base_path()) {
        Ok(service) => service,
        Err(e) => {
            tracing::warn!("[Main] Secret service unavailable: {}", e);
            return SecretConfig::default();
        }
    };

    match service.load_secrets().await {
        Ok(secrets) => secrets,
        Err(e) => {
            tracing::warn!("[Main] Failed to load secrets: {}", e);
            SecretConfig::default()
        }
    }
}

fn drain_events(events: &mut broadcast::Receiver<SessionEvent>) {
    while let Ok(event) = events.try_recv() {
        println!("{}", render::event_text(&event).dimmed());
    }
}

fn redraw(
    session: &mut TripSession,
    panel: &mut MapPanel<TerminalMapWidget<Stdout>>,
    rl: &mut Editor<ViewerHelper, DefaultHistory>,
) {
    let screen = Presenter::new().present(session);
    if let Err(e) = render::write_screen(&mut std::io::stdout(), &screen, panel) {
        tracing::warn!("[Main] Failed to write screen: {}", e);
    }
    if let Some(helper) = rl.helper_mut() {
        helper.sync(session.trip(), session.active_day());
    }
}

/// Terminal itinerary viewer.
///
/// Loads the configured trip once, then lets the user switch days and
/// highlight activities until `quit`.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let paths = TripviewPaths::default();
    let _log_guard = match logging::init(&paths) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("{}", format!("Logging disabled: {:#}", e).yellow());
            None
        }
    };

    let config = load_config(&paths);
    let secrets = load_secrets(&paths).await;

    let source = trip_source_from_config(&config.trip);
    let mut session = TripSession::new(TripLoader::new(source), &config.map);
    tracing::info!("[Main] Loading trip from {}", session.loader().location());
    let mut events = session.subscribe();
    let mut panel = MapPanel::new(
        TerminalMapWidget::new(std::io::stdout()),
        secrets.map_api_key(),
    );

    let mut rl = Editor::new()?;
    rl.set_helper(Some(ViewerHelper::new()));

    println!("{}", "=== Trip Viewer ===".bright_magenta().bold());
    redraw(&mut session, &mut panel, &mut rl);
    session.start().await;
    drain_events(&mut events);
    redraw(&mut session, &mut panel, &mut rl);

    println!();
    println!(
        "{}",
        "Type '/help' for commands, or 'quit' to exit.".bright_black()
    );

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                let command = match Command::parse(trimmed) {
                    Ok(command) => command,
                    Err(message) => {
                        println!("{}", message.yellow());
                        continue;
                    }
                };

                let outcome = match command {
                    Command::Quit => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    Command::Help => {
                        println!("{}", help_text().bright_black());
                        continue;
                    }
                    Command::Show => Ok(true),
                    Command::SelectDay(day_id) => session.select_day(day_id),
                    Command::Hover(activity_id) => session.hover_activity(Some(activity_id)),
                    Command::Leave => session.hover_activity(None),
                };

                match outcome {
                    Ok(true) => {
                        drain_events(&mut events);
                        redraw(&mut session, &mut panel, &mut rl);
                    }
                    Ok(false) => println!("{}", "No change.".bright_black()),
                    Err(e) => {
                        tracing::debug!("[Main] Command rejected: {}", e);
                        println!("{}", e.to_string().red());
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
