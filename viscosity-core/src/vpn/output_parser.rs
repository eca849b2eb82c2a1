//! Parser for the enumerate snippet's output
//!
//! Each record is one `name|state` line. Parsing is best-effort: lines that
//! do not split into exactly two fields are dropped without error.

use crate::script::builder::FIELD_SEPARATOR;
use crate::types::ConnectionRecord;

/// Parse captured output into records, preserving the order they were emitted
pub fn parse_connections(output: &str) -> Vec<ConnectionRecord> {
    output
        .split('\n')
        .filter(|line| !line.is_empty())
        .filter_map(parse_line)
        .collect()
}

/// Parse a single `name|state` line
pub fn parse_line(line: &str) -> Option<ConnectionRecord> {
    let mut fields = line.split(FIELD_SEPARATOR);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(name), Some(state), None) => Some(ConnectionRecord::new(name.trim(), state.trim())),
        _ => {
            tracing::debug!("Skipping malformed connection line: {:?}", line);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_trims_fields() {
        let record = parse_line("  Office VPN | Connected \r").unwrap();
        assert_eq!(record, ConnectionRecord::new("Office VPN", "Connected"));
    }

    #[test]
    fn test_parse_line_rejects_wrong_field_count() {
        assert!(parse_line("noseparator").is_none());
        assert!(parse_line("a|b|c").is_none());
    }

    #[test]
    fn test_parse_line_allows_empty_fields() {
        assert_eq!(parse_line("|"), Some(ConnectionRecord::new("", "")));
    }
}
