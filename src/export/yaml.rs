//! YAML Export functionality
//!
//! Serializes a report document as YAML with a short comment header.

use std::io::Write;

use serde::Serialize;

use crate::error::{FinreportError, FinreportResult};
use crate::reports::Statement;

/// Export a report as YAML
pub fn export_report_yaml<T, W>(report: &T, writer: &mut W) -> FinreportResult<()>
where
    T: Serialize + Statement,
    W: Write,
{
    writeln!(writer, "# {}", report.title()).map_err(|e| FinreportError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", report.info().generated_at.to_rfc3339())
        .map_err(|e| FinreportError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, report).map_err(|e| FinreportError::Export(e.to_string()))?;

    Ok(())
}
