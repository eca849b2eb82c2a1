//! Tests for logging initialization

use viscosity_core::init_logging;

#[test]
fn test_second_init_returns_error() {
    let _ = init_logging(0);
    assert!(init_logging(2).is_err());
}
