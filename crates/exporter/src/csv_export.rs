use crate::error::ExportError;
use core_types::QueryResult;

/// Serializes a result set to CSV: one header line of column names, then one
/// line per row. Values containing the delimiter, a quote or a newline are
/// quoted by the writer; absent values export as empty fields.
pub fn to_csv(result: &QueryResult) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(&result.columns)?;
    for row in &result.rows {
        writer.write_record(row.iter().map(|value| value.to_string()))?;
    }

    let buffer = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(buffer)
}
