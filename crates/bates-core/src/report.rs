//! CSV serialization of the Bates log.

use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::logger::LogRow;

/// Column order of the log.
pub const LOG_HEADER: [&str; 3] = ["beginning_bates", "ending_bates", "filename"];

/// Write the log to `path`, replacing any existing file.
pub fn write_log(path: &Path, rows: &[LogRow]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_log_to(file, rows)?;
    debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Write the header and rows as CSV to any writer.
pub fn write_log_to<W: Write>(writer: W, rows: &[LogRow]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // Written explicitly so an empty log still carries the header.
    wtr.write_record(LOG_HEADER)?;
    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
