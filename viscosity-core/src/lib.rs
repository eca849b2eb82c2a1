//! Core library for the viscosity VPN CLI tool
//!
//! This crate provides the scripting bridge to the Viscosity VPN client,
//! parsing of the connection listing it returns, and terminal presentation.

pub mod error;
pub mod types;

pub mod config;
pub mod console;
pub mod script;
pub mod vpn;

/// Initialize logging infrastructure
///
/// Logs go to stderr so they never mix with command output on stdout.
/// `verbosity` 0 shows warnings only, 1 adds info, 2 or more adds debug.
pub fn init_logging(verbosity: u8) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(level)
        .try_init()?;

    Ok(())
}
