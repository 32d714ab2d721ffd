mod api;
mod config;
mod consts;
mod environment;
mod events;
mod logging;
mod runtime;
mod timefmt;
mod ui;

use crate::api::PortalApiClient;
use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::sync::Arc;
use std::{error::Error, io};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the staff portal
    Start {
        /// Staff member name, overriding the saved session
        #[arg(long, value_name = "NAME")]
        staff_name: Option<String>,
    },
    /// Save a staff session for subsequent starts
    Login {
        /// Staff member name to sign in as
        #[arg(long, value_name = "NAME")]
        staff_name: String,
    },
    /// Clear the saved session and logout.
    Logout,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let environment_str = std::env::var("STAFF_PORTAL_ENVIRONMENT").unwrap_or_default();
    let environment = environment_str
        .parse::<Environment>()
        .unwrap_or(Environment::default());

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start { staff_name } => {
            // If no name is provided, try to load it from the session file.
            let staff_name = match staff_name {
                Some(name) => name,
                None => Config::load_from_file(&config_path)
                    .map(|config| config.staff_name)
                    .unwrap_or_else(|_| "Staff".to_string()),
            };
            start(staff_name, environment).await
        }
        Command::Login { staff_name } => {
            println!(
                "Saving session for {} in environment: {:?}",
                staff_name, environment
            );
            let config = Config::new(staff_name);
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            println!("Session saved.");
            Ok(())
        }
        Command::Logout => {
            println!("Logging out and clearing the saved session...");
            Config::clear_session(&config_path).map_err(Into::into)
        }
    }
}

/// Starts the staff portal UI.
///
/// # Arguments
/// * `staff_name` - The staff member the portal is signed in as.
/// * `env` - The environment whose backend the portal talks to.
async fn start(staff_name: String, env: Environment) -> Result<(), Box<dyn Error>> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create the application and run it.
    let api_client = Arc::new(PortalApiClient::new(env));
    let app = ui::App::new(staff_name, env, api_client);
    let res = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}
