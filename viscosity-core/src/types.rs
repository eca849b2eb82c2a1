//! Connection record and status types
//!
//! Records are built fresh from every enumeration and never cached.

use std::fmt;

/// Connection state reported by the application for a "Connected" connection
pub const STATE_CONNECTED: &str = "Connected";

/// Connection state reported by the application while a connection comes up
pub const STATE_CONNECTING: &str = "Connecting";

/// One VPN connection as reported by the application at query time
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionRecord {
    /// Display name, opaque and unvalidated
    pub name: String,
    /// Raw state text, open-ended
    pub state: String,
}

impl ConnectionRecord {
    pub fn new(name: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: state.into(),
        }
    }

    /// Classify the raw state text
    pub fn status(&self) -> ConnectionStatus {
        ConnectionStatus::from_state(&self.state)
    }
}

/// Three-way classification of a connection's state
///
/// Matching is exact and case-sensitive: "connected" is not `Connected`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected,
    Connecting,
    /// Any other state, including "Disconnected" and unknown values
    Idle,
}

impl ConnectionStatus {
    pub fn from_state(state: &str) -> Self {
        match state {
            STATE_CONNECTED => ConnectionStatus::Connected,
            STATE_CONNECTING => ConnectionStatus::Connecting,
            _ => ConnectionStatus::Idle,
        }
    }

    /// Status indicator shown in front of the connection name
    pub fn glyph(self) -> &'static str {
        match self {
            ConnectionStatus::Connected => "🟢",
            ConnectionStatus::Connecting => "🟡",
            ConnectionStatus::Idle => "🔴",
        }
    }
}

impl fmt::Display for ConnectionRecord {
    /// Renders as `<glyph> <name> (<state>)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.status().glyph(), self.name, self.state)
    }
}
