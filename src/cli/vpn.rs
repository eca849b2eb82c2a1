//! VPN connection management commands
//!
//! Each handler issues its actions through a [`VpnController`] and prints the
//! outcome. Failures are returned to `main` for exit-code mapping.

use std::io::{self, Write};

use colored::Colorize;
use tracing::debug;
use viscosity_core::console::{render_status, select_connection};
use viscosity_core::error::ViscosityError;
use viscosity_core::script::ScriptRunner;
use viscosity_core::vpn::VpnController;

/// Run the connect command, prompting for a connection when `name` is absent
pub fn run_connect<R: ScriptRunner>(
    controller: &VpnController<R>,
    name: Option<String>,
) -> Result<(), ViscosityError> {
    let name = match name {
        Some(name) => name,
        None => match select_interactively(controller)? {
            Some(name) => name,
            None => {
                println!("No connection selected.");
                return Ok(());
            }
        },
    };

    controller.connect(&name)?;
    println!("{} Connecting to VPN: {}", "✓".green(), name);
    Ok(())
}

/// Run the disconnect command, disconnecting everything when `name` is absent
pub fn run_disconnect<R: ScriptRunner>(
    controller: &VpnController<R>,
    name: Option<String>,
) -> Result<(), ViscosityError> {
    match name {
        Some(name) => {
            controller.disconnect(&name)?;
            println!("{} Disconnecting from VPN: {}", "✓".green(), name);
        }
        None => {
            controller.disconnect_all()?;
            println!("{} Disconnecting from all VPNs", "✓".green());
        }
    }
    Ok(())
}

/// Run the status command
pub fn run_status<R: ScriptRunner>(controller: &VpnController<R>) -> Result<(), ViscosityError> {
    let connections = controller.list_connections()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_status(&connections, &mut out)?;
    out.flush()?;
    Ok(())
}

/// List connections and read one selection from stdin
fn select_interactively<R: ScriptRunner>(
    controller: &VpnController<R>,
) -> Result<Option<String>, ViscosityError> {
    let connections = controller.list_connections()?;
    debug!("Prompting for one of {} connection(s)", connections.len());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let selected = select_connection(&connections, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(selected.map(|record| record.name.clone()))
}
