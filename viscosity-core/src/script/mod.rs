//! Scripting bridge module
//!
//! Builds AppleScript snippets and hands them to the system scripting runner.

pub mod builder;
pub mod runner;

// Public re-exports
pub use builder::{ScriptAction, ScriptBuilder};
pub use runner::{OsaScriptRunner, ScriptRunner};
