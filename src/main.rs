//! viscosity-cli - Viscosity VPN control from the terminal
//!
//! Connects, disconnects and lists Viscosity VPN connections through the
//! macOS scripting bridge without opening the application window.

use std::ffi::OsString;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use viscosity_core::config::{ControllerConfig, DEFAULT_APPLICATION, DEFAULT_RUNNER};
use viscosity_core::error::ViscosityError;
use viscosity_core::init_logging;

mod cli;

const USAGE: &str = "\
Viscosity VPN CLI Tool

Usage:
  viscosity-cli connect [connection-name]    Connect to a VPN connection (interactive mode if no name)
  viscosity-cli on [connection-name]         Alias for connect
  viscosity-cli disconnect [connection-name] Disconnect from VPN (all if no name specified)
  viscosity-cli off [connection-name]        Alias for disconnect
  viscosity-cli status                       Show status of all VPN connections
  viscosity-cli list                         Alias for status
  viscosity-cli help                         Show this help message

Options:
  -v, --verbose                              Increase log output (repeat for more)

Examples:
  viscosity-cli connect                      Start interactive connection selection
  viscosity-cli connect MyVPN                Connect to specific VPN
  viscosity-cli on                           Start interactive connection selection
  viscosity-cli disconnect MyVPN             Disconnect from specific VPN
  viscosity-cli off                          Disconnect from all VPNs
  viscosity-cli status                       Show all connections status";

#[derive(Parser)]
#[command(name = "viscosity-cli", version)]
#[command(override_help = USAGE)]
struct Cli {
    /// Increase log output
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Application to send commands to
    #[arg(long, global = true, hide = true, default_value = DEFAULT_APPLICATION)]
    application: String,

    /// Scripting runner to execute snippets with
    #[arg(long, global = true, hide = true, default_value = DEFAULT_RUNNER)]
    osascript: OsString,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to a VPN connection (interactive if no name)
    #[command(visible_alias = "on")]
    Connect {
        #[arg(allow_hyphen_values = true)]
        name: Option<String>,
    },
    /// Disconnect a VPN connection (all if no name)
    #[command(visible_alias = "off")]
    Disconnect {
        #[arg(allow_hyphen_values = true)]
        name: Option<String>,
    },
    /// Show status of all VPN connections
    #[command(visible_alias = "list")]
    Status,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                e.exit();
            }
            match unknown_command(&e) {
                Some(command) => println!("Unknown command: {}", command),
                None => eprintln!("{}", e),
            }
            println!("{}", USAGE);
            std::process::exit(1);
        }
    };

    // Initialize logging
    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let Some(command) = cli.command else {
        println!("{}", USAGE);
        return;
    };

    let config = ControllerConfig::new(cli.application, cli.osascript);
    let result = run(command, &config);

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            std::process::exit(exit_code(&e));
        }
    }
}

fn run(command: Commands, config: &ControllerConfig) -> Result<(), ViscosityError> {
    use viscosity_core::error::ConfigError;
    use viscosity_core::vpn::VpnController;

    config
        .validate()
        .map_err(|message| ConfigError::ValidationError { message })?;
    let controller = VpnController::from_config(config);

    match command {
        Commands::Connect { name } => cli::vpn::run_connect(&controller, name),
        Commands::Disconnect { name } => cli::vpn::run_disconnect(&controller, name),
        Commands::Status => cli::vpn::run_status(&controller),
    }
}

/// The unrecognized command token, if that is why parsing failed
fn unknown_command(error: &clap::Error) -> Option<&str> {
    if error.kind() != ErrorKind::InvalidSubcommand {
        return None;
    }
    match error.get(ContextKind::InvalidSubcommand) {
        Some(ContextValue::String(command)) => Some(command.as_str()),
        _ => None,
    }
}

/// Every failure, usage or external, exits with 1
fn exit_code(error: &ViscosityError) -> i32 {
    match error {
        ViscosityError::Config(_) => 1,
        ViscosityError::Vpn(_) | ViscosityError::Script(_) => 1,
        ViscosityError::Io(_) => 1,
    }
}
