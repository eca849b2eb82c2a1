//! Error types for the viscosity VPN CLI tool
//!
//! This module defines all error types used throughout the application,
//! providing consistent error handling and user-friendly error messages.

use thiserror::Error;

/// Main error type for the viscosity application
#[derive(Error, Debug)]
pub enum ViscosityError {
    /// Errors in the settings assembled from the command line
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors related to VPN connection operations
    #[error("{0}")]
    Vpn(#[from] VpnError),

    /// Errors raised by the scripting runner itself
    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration validation error: {message}")]
    ValidationError { message: String },
}

/// VPN connection operation errors
///
/// Every variant that acts on a single connection carries its name so the
/// user can tell which connection the application refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VpnError {
    #[error("Error connecting to VPN '{name}': {reason}")]
    ConnectFailed { name: String, reason: String },

    #[error("Error disconnecting from VPN '{name}': {reason}")]
    DisconnectFailed { name: String, reason: String },

    #[error("Error disconnecting from all VPNs: {reason}")]
    DisconnectAllFailed { reason: String },

    #[error("Error listing VPN connections: {reason}")]
    ListFailed { reason: String },
}

/// Scripting runner errors
///
/// Both variants mean "the external action failed"; they differ only in
/// whether the runner got as far as executing the snippet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Scripting facility unavailable: {diagnostic}")]
    FacilityUnavailable { diagnostic: String },

    #[error("Script execution failed: {diagnostic}")]
    ExecutionFailed { diagnostic: String },
}

impl ScriptError {
    /// The underlying diagnostic text, without the variant prefix
    pub fn diagnostic(&self) -> &str {
        match self {
            ScriptError::FacilityUnavailable { diagnostic }
            | ScriptError::ExecutionFailed { diagnostic } => diagnostic,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ViscosityError>;
