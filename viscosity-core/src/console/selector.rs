//! Interactive connection selection
//!
//! Lists the connections, reads exactly one line and resolves it. There is no
//! retry loop: anything other than a valid index cancels.

use crate::types::ConnectionRecord;
use std::io::{self, BufRead, Write};

/// Outcome of resolving one line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Zero-based index into the listed records
    Selected(usize),
    /// `0` or an empty line
    Cancelled,
    /// Anything else, including out-of-range numbers
    Invalid,
}

/// Resolve `input` against a listing of `count` records
pub fn resolve_selection(input: &str, count: usize) -> Selection {
    let input = input.trim();
    if input.is_empty() || input == "0" {
        return Selection::Cancelled;
    }

    match input.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Selection::Selected(n - 1),
        _ => Selection::Invalid,
    }
}

/// Show `records`, read one line from `input` and return the chosen record
///
/// Returns `Ok(None)` for cancellation, invalid input and read failures.
/// Only failures to write the listing are reported as errors.
pub fn select_connection<'a, R, W>(
    records: &'a [ConnectionRecord],
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<&'a ConnectionRecord>>
where
    R: BufRead,
    W: Write,
{
    if records.is_empty() {
        writeln!(out, "No VPN connections found in Viscosity.")?;
        return Ok(None);
    }

    writeln!(out, "Available VPN Connections:")?;
    writeln!(out, "==========================")?;
    for (i, record) in records.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, record)?;
    }
    writeln!(out, "0. Cancel")?;
    write!(out, "\nSelect a connection (enter number): ")?;
    out.flush()?;

    let mut line = String::new();
    if let Err(e) = input.read_line(&mut line) {
        tracing::warn!("Failed to read selection: {}", e);
        writeln!(out, "Error reading input: {}", e)?;
        return Ok(None);
    }

    match resolve_selection(&line, records.len()) {
        Selection::Selected(index) => Ok(records.get(index)),
        Selection::Cancelled => Ok(None),
        Selection::Invalid => {
            writeln!(out, "Invalid selection.")?;
            Ok(None)
        }
    }
}
