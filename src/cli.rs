//! Command-line front end over the command handlers.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::commands::{self, AppState};
use crate::error::AppError;
use crate::models::category::Category;
use crate::models::home::HERO_IMAGES;
use crate::services::slideshow::SlideshowHandle;
use crate::storage::JsonFileStore;

#[derive(Debug, Parser)]
#[command(name = "country-explorer", version, about = "Explore countries and keep a list of favorites")]
pub struct Cli {
    /// Store file (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage favorite countries
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Select a category and print the route to open
    Explore {
        #[arg(value_enum)]
        category: Category,
    },
    /// Print the currently selected API endpoint
    Endpoint,
    /// Print the landing page content as JSON
    Home,
    /// Run the hero slideshow for a number of slide changes
    Slideshow {
        #[arg(long, default_value_t = 3)]
        ticks: usize,
        /// Override the configured interval
        #[arg(long)]
        interval_ms: Option<u64>,
    },
    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum FavoritesAction {
    List,
    Toggle { code: String },
    Check { code: String },
}

#[derive(Debug, Subcommand)]
pub enum SettingsAction {
    Show,
    Set {
        #[arg(long)]
        slide_interval_ms: Option<u64>,
        #[arg(long)]
        api_base_url: Option<String>,
    },
}

/// Open the store named on the command line and run the command.
pub async fn run(cli: Cli) -> crate::error::Result<()> {
    let path = match cli.store {
        Some(path) => path,
        None => JsonFileStore::default_path()?,
    };
    let state = AppState::new(Arc::new(JsonFileStore::open(path)?));
    let mut out = std::io::stdout().lock();
    execute(cli.command, &state, &mut out).await
}

pub async fn execute<W: Write>(
    command: Command,
    state: &AppState,
    out: &mut W,
) -> crate::error::Result<()> {
    match command {
        Command::Favorites { action } => match action {
            FavoritesAction::List => {
                for code in commands::favorites::get_favorites(state).map_err(AppError::Command)? {
                    writeln!(out, "{}", code)?;
                }
            }
            FavoritesAction::Toggle { code } => {
                let list =
                    commands::favorites::toggle_favorite(&code, state).map_err(AppError::Command)?;
                let verb = if list.contains(&code) { "added" } else { "removed" };
                writeln!(out, "{} {}", code, verb)?;
            }
            FavoritesAction::Check { code } => {
                let fav = commands::favorites::check_favorite(&code, state)
                    .map_err(AppError::Command)?;
                writeln!(out, "{}", fav)?;
            }
        },
        Command::Explore { category } => {
            let route = commands::navigation::explore_category(category, state)
                .map_err(AppError::Command)?;
            writeln!(out, "{}", route)?;
        }
        Command::Endpoint => {
            match commands::navigation::current_endpoint(state).map_err(AppError::Command)? {
                Some(url) => writeln!(out, "{}", url)?,
                None => writeln!(out, "(none)")?,
            }
        }
        Command::Home => {
            let home = commands::home::get_home_content();
            writeln!(out, "{}", serde_json::to_string_pretty(&home)?)?;
        }
        Command::Slideshow { ticks, interval_ms } => {
            let interval_ms = match interval_ms {
                Some(ms) => ms,
                None => {
                    commands::settings::get_settings(state)
                        .map_err(AppError::Command)?
                        .slide_interval_ms
                }
            };
            run_slideshow(ticks, Duration::from_millis(interval_ms), out).await?;
        }
        Command::Settings { action } => match action {
            SettingsAction::Show => {
                let settings = commands::settings::get_settings(state).map_err(AppError::Command)?;
                writeln!(out, "{}", serde_json::to_string_pretty(&settings)?)?;
            }
            SettingsAction::Set {
                slide_interval_ms,
                api_base_url,
            } => {
                let mut settings =
                    commands::settings::get_settings(state).map_err(AppError::Command)?;
                if let Some(ms) = slide_interval_ms {
                    settings.slide_interval_ms = ms;
                }
                if let Some(url) = api_base_url {
                    settings.api_base_url = url;
                }
                commands::settings::save_settings(settings, state).map_err(AppError::Command)?;
            }
        },
    }
    Ok(())
}

async fn run_slideshow<W: Write>(
    ticks: usize,
    interval: Duration,
    out: &mut W,
) -> crate::error::Result<()> {
    let mut handle = SlideshowHandle::spawn(HERO_IMAGES.len(), interval);
    writeln!(out, "{}", HERO_IMAGES[handle.current()])?;
    if !handle.is_running() {
        return Ok(());
    }
    let mut rx = handle.subscribe();
    for _ in 0..ticks {
        rx.changed()
            .await
            .map_err(|e| AppError::Internal(format!("slideshow ended: {}", e)))?;
        let index = *rx.borrow_and_update();
        writeln!(out, "{}", HERO_IMAGES[index])?;
    }
    handle.stop();
    Ok(())
}
