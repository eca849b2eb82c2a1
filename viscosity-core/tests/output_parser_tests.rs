// Unit tests for the connection listing parser

use viscosity_core::types::ConnectionRecord;
use viscosity_core::vpn::parse_connections;

#[test]
fn test_parse_well_formed_output() {
    let records = parse_connections("A|Connected\nB|Disconnected\n");
    assert_eq!(
        records,
        vec![
            ConnectionRecord::new("A", "Connected"),
            ConnectionRecord::new("B", "Disconnected"),
        ]
    );
}

#[test]
fn test_parse_is_idempotent_on_well_formed_output() {
    let output = "A|Connected\nB|Disconnected\n";
    assert_eq!(parse_connections(output), parse_connections(output));
}

#[test]
fn test_parse_empty_output() {
    assert!(parse_connections("").is_empty());
    assert!(parse_connections("\n\n").is_empty());
}

#[test]
fn test_parse_drops_malformed_lines() {
    let records = parse_connections("noseparator\na|b|c\nGood|Connecting\n");
    assert_eq!(records, vec![ConnectionRecord::new("Good", "Connecting")]);
}

#[test]
fn test_parse_without_trailing_newline() {
    let records = parse_connections("Only|Connected");
    assert_eq!(records, vec![ConnectionRecord::new("Only", "Connected")]);
}

#[test]
fn test_parse_trims_whitespace_and_carriage_returns() {
    let records = parse_connections("  Office VPN  |  Connected \r\n");
    assert_eq!(records, vec![ConnectionRecord::new("Office VPN", "Connected")]);
}

#[test]
fn test_parse_keeps_unknown_states_verbatim() {
    let records = parse_connections("Lab|Authenticating\n");
    assert_eq!(records[0].state, "Authenticating");
}
