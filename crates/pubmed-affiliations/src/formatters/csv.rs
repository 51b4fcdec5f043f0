//! CSV report output.

use std::io::Write;
use std::path::Path;

use crate::error::{ExportError, ExportResult};
use crate::models::PaperRecord;

/// Write the header and one row per record to any sink.
///
/// The header is always written, so an empty slice yields a header-only file.
/// Records end in `\r\n`.
pub fn write_records<W: Write>(sink: W, records: &[PaperRecord]) -> ExportResult<()> {
    let mut wtr = ::csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(::csv::Terminator::CRLF)
        .from_writer(sink);

    wtr.write_record(PaperRecord::HEADERS)?;
    for record in records {
        wtr.serialize(record)?;
    }

    wtr.flush().map_err(|e| ExportError::io("<writer>", e))?;
    Ok(())
}

/// Create (or truncate) `path` and write the report to it.
pub fn save_to_csv(records: &[PaperRecord], path: impl AsRef<Path>) -> ExportResult<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .map_err(|e| ExportError::io(path.display().to_string(), e))?;

    write_records(std::io::BufWriter::new(file), records)?;
    tracing::debug!(path = %path.display(), rows = records.len(), "Wrote CSV");
    Ok(())
}
