//! VPN connection module
//!
//! Drives the application through the scripting bridge and interprets what
//! it reports back.

pub mod controller;
pub mod output_parser;

// Public re-exports
pub use controller::VpnController;
pub use output_parser::parse_connections;
