//! JSON Export functionality
//!
//! Serializes a report document as pretty-printed JSON.

use std::io::Write;

use serde::Serialize;

use crate::error::{FinreportError, FinreportResult};

/// Export a report as JSON
pub fn export_report_json<T: Serialize, W: Write>(report: &T, writer: &mut W) -> FinreportResult<()> {
    serde_json::to_writer_pretty(&mut *writer, report)
        .map_err(|e| FinreportError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FinreportError::Export(e.to_string()))?;
    Ok(())
}
