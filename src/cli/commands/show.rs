//! show command - Print active and inactive control variables

use std::io::Write;

use crate::core::table::Listing;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Print a listing as the two-section text view or as JSON.
pub fn render_listing(listing: &Listing, json: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if json {
        serde_json::to_writer_pretty(&mut out, listing).context("Failed to serialize table")?;
        writeln!(out)?;
    } else {
        output::write_listing(listing, &mut out).context("Failed to write table")?;
    }

    out.flush()?;
    Ok(())
}
