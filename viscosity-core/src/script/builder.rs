//! AppleScript snippet construction
//!
//! Every action becomes one `tell application` block. The enumerate snippet
//! returns `name|state` lines in the application's own iteration order.

/// Field separator used by the enumerate snippet
pub const FIELD_SEPARATOR: char = '|';

/// An action the application can be asked to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptAction<'a> {
    Connect(&'a str),
    Disconnect(&'a str),
    DisconnectAll,
    ListConnections,
}

/// Builds snippets addressed to one application
#[derive(Debug, Clone)]
pub struct ScriptBuilder {
    application: String,
}

impl ScriptBuilder {
    pub fn new(application: impl Into<String>) -> Self {
        Self {
            application: application.into(),
        }
    }

    /// Render the snippet for `action`
    pub fn build(&self, action: ScriptAction<'_>) -> String {
        let body = match action {
            ScriptAction::Connect(name) => format!("connect {}", quote(name)),
            ScriptAction::Disconnect(name) => format!("disconnect {}", quote(name)),
            ScriptAction::DisconnectAll => "disconnectall".to_string(),
            ScriptAction::ListConnections => format!(
                r#"set connectionList to ""
    repeat with conn in connections
        set connName to name of conn
        set connState to state of conn
        set connectionList to connectionList & connName & "{sep}" & connState & "\n"
    end repeat
    return connectionList"#,
                sep = FIELD_SEPARATOR
            ),
        };

        format!(
            "tell application {}\n    {}\nend tell",
            quote(&self.application),
            body
        )
    }
}

/// Quote `value` as an AppleScript string literal
///
/// Backslashes and double quotes are escaped so names containing them reach
/// the application verbatim.
fn quote(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '\\' => literal.push_str("\\\\"),
            '"' => literal.push_str("\\\""),
            _ => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_snippet() {
        let builder = ScriptBuilder::new("Viscosity");
        let script = builder.build(ScriptAction::Connect("Office VPN"));
        assert_eq!(
            script,
            "tell application \"Viscosity\"\n    connect \"Office VPN\"\nend tell"
        );
    }

    #[test]
    fn test_disconnect_all_has_no_name() {
        let builder = ScriptBuilder::new("Viscosity");
        let script = builder.build(ScriptAction::DisconnectAll);
        assert!(script.contains("disconnectall"));
        assert!(!script.contains("disconnect \""));
    }

    #[test]
    fn test_list_snippet_uses_pipe_and_newline() {
        let builder = ScriptBuilder::new("Viscosity");
        let script = builder.build(ScriptAction::ListConnections);
        assert!(script.contains(r#"connName & "|" & connState & "\n""#));
        assert!(script.contains("return connectionList"));
    }

    #[test]
    fn test_quote_characters_are_escaped() {
        let builder = ScriptBuilder::new("Viscosity");
        let script = builder.build(ScriptAction::Disconnect(r#"Bob's "Home" \ VPN"#));
        assert!(script.contains(r#"disconnect "Bob's \"Home\" \\ VPN""#));
    }

    #[test]
    fn test_quote_plain_value() {
        assert_eq!(quote("MyVPN"), "\"MyVPN\"");
        assert_eq!(quote(""), "\"\"");
    }
}
