//! CSV export of the full inventory.

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use rust_decimal::RoundingStrategy;
use stockroom_core::Listing;
use thiserror::Error;

/// Header row, written unquoted.
pub const CSV_HEADER: [&str; 7] = [
    "ID",
    "Nombre",
    "Categoría",
    "Cantidad",
    "Precio",
    "Valor Total",
    "Descripción",
];

/// Errors that can occur while exporting.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing to export; no file is produced.
    #[error("No hay productos para exportar")]
    Empty,

    /// CSV encoding failed.
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    /// The encoded buffer was not valid UTF-8.
    #[error("CSV output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// A generated export, ready to be written or downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    /// `inventario_<YYYY-MM-DD>.csv`
    pub filename: String,
    pub contents: String,
}

/// File name for an export made on `date`.
#[must_use]
pub fn export_filename(date: NaiveDate) -> String {
    format!("inventario_{}.csv", date.format("%Y-%m-%d"))
}

/// Encode every record as CSV.
///
/// Every data cell is double-quoted (embedded quotes are doubled) and every
/// row, header included, ends with `\n`.
///
/// # Errors
///
/// Returns [`ExportError::Empty`] when `records` is empty.
pub fn export_csv<R: Listing>(records: &[R], date: NaiveDate) -> Result<CsvExport, ExportError> {
    if records.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut contents = CSV_HEADER.join(",");
    contents.push('\n');

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for record in records {
        let total = record
            .total_value()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        writer.write_record([
            record.id().to_string(),
            record.name().to_owned(),
            record.category().to_owned(),
            record.quantity().to_string(),
            record.price().normalize().to_string(),
            format!("{total:.2}"),
            record.description().unwrap_or_default().to_owned(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(csv::Error::from(e.into_error())))?;
    contents.push_str(&String::from_utf8(bytes)?);

    Ok(CsvExport {
        filename: export_filename(date),
        contents,
    })
}
