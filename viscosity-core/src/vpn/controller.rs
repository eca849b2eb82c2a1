//! VPN controller
//!
//! Composes the snippet builder, a scripting runner and the output parser.
//! Each call spawns exactly one runner process.

use crate::config::ControllerConfig;
use crate::error::VpnError;
use crate::script::{OsaScriptRunner, ScriptAction, ScriptBuilder, ScriptRunner};
use crate::types::ConnectionRecord;
use crate::vpn::output_parser::parse_connections;

/// Issues VPN actions to the application through a [`ScriptRunner`]
pub struct VpnController<R> {
    runner: R,
    builder: ScriptBuilder,
}

impl VpnController<OsaScriptRunner> {
    /// Create a controller backed by the configured system runner
    pub fn from_config(config: &ControllerConfig) -> Self {
        Self::new(OsaScriptRunner::new(&config.runner), &config.application)
    }
}

impl<R: ScriptRunner> VpnController<R> {
    pub fn new(runner: R, application: &str) -> Self {
        Self {
            runner,
            builder: ScriptBuilder::new(application),
        }
    }

    /// Access the underlying runner
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Ask the application to connect `name`
    pub fn connect(&self, name: &str) -> Result<(), VpnError> {
        tracing::info!("Connecting VPN connection {}", name);
        let script = self.builder.build(ScriptAction::Connect(name));
        self.runner
            .run(&script)
            .map_err(|e| VpnError::ConnectFailed {
                name: name.to_string(),
                reason: e.diagnostic().to_string(),
            })
    }

    /// Ask the application to disconnect `name`
    pub fn disconnect(&self, name: &str) -> Result<(), VpnError> {
        tracing::info!("Disconnecting VPN connection {}", name);
        let script = self.builder.build(ScriptAction::Disconnect(name));
        self.runner
            .run(&script)
            .map_err(|e| VpnError::DisconnectFailed {
                name: name.to_string(),
                reason: e.diagnostic().to_string(),
            })
    }

    /// Ask the application to disconnect every connection
    pub fn disconnect_all(&self) -> Result<(), VpnError> {
        tracing::info!("Disconnecting all VPN connections");
        let script = self.builder.build(ScriptAction::DisconnectAll);
        self.runner
            .run(&script)
            .map_err(|e| VpnError::DisconnectAllFailed {
                reason: e.diagnostic().to_string(),
            })
    }

    /// Enumerate connections in the order the application reports them
    pub fn list_connections(&self) -> Result<Vec<ConnectionRecord>, VpnError> {
        let script = self.builder.build(ScriptAction::ListConnections);
        let output = self
            .runner
            .run_with_output(&script)
            .map_err(|e| VpnError::ListFailed {
                reason: e.diagnostic().to_string(),
            })?;

        let connections = parse_connections(&output);
        tracing::debug!("Application reported {} connection(s)", connections.len());
        Ok(connections)
    }
}
