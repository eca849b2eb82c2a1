//! Status listing

use crate::types::ConnectionRecord;
use std::io::{self, Write};

/// Print every record as `<glyph> <name> (<state>)` under a header
pub fn render_status<W: Write>(records: &[ConnectionRecord], out: &mut W) -> io::Result<()> {
    if records.is_empty() {
        writeln!(out, "No VPN connections found")?;
        return Ok(());
    }

    writeln!(out, "VPN Connections:")?;
    writeln!(out, "=================")?;
    for record in records {
        writeln!(out, "{}", record)?;
    }
    Ok(())
}
