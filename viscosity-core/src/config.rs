//! Controller configuration
//!
//! Built from command-line flags only; there is no configuration file and no
//! environment lookup.

use std::ffi::OsString;

/// Application targeted by default
pub const DEFAULT_APPLICATION: &str = "Viscosity";

/// Scripting runner used by default
pub const DEFAULT_RUNNER: &str = "osascript";

/// Settings for talking to the VPN application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Name used in the `tell application` block
    pub application: String,

    /// Scripting runner program, a bare name looked up on `PATH` or a path
    pub runner: OsString,
}

impl ControllerConfig {
    /// Create a configuration targeting the given application
    pub fn new(application: impl Into<String>, runner: impl Into<OsString>) -> Self {
        Self {
            application: application.into(),
            runner: runner.into(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.application.trim().is_empty() {
            return Err("Application name cannot be empty".to_string());
        }

        if self.runner.is_empty() {
            return Err("Scripting runner cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            application: DEFAULT_APPLICATION.to_string(),
            runner: OsString::from(DEFAULT_RUNNER),
        }
    }
}
