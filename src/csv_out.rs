use csv::WriterBuilder;
use log::info;
use std::path::Path;

use chrono::NaiveDate;

use crate::band;
use crate::errors::AppError;
use crate::model::LogRecord;

// SOTA database upload format, V2 column layout.

// YYYY-MM-DD -> DD/MM/YY
fn csv_date(date: &str) -> Result<String, AppError> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| AppError::Parse(format!("bad QSO date '{}': {}", date, e)))?;
    Ok(parsed.format("%d/%m/%y").to_string())
}

/// Field list for one upload row. The chaser summit and comment columns
/// only appear when they carry data.
pub fn csv_record(record: &LogRecord) -> Result<Vec<String>, AppError> {
    let session = &record.session;
    let contact = &record.contact;
    let band_label = session
        .band
        .as_ref()
        .map(|band| band::sota_label(band.lower))
        .unwrap_or_default();

    let mut fields = vec![
        "V2".to_string(),
        session.my_call.clone().unwrap_or_default(),
        session.my_sota.clone().unwrap_or_default(),
        csv_date(session.date.as_deref().unwrap_or(""))?,
        session.time.clone().unwrap_or_default(),
        band_label,
        session.mode.clone().unwrap_or_default(),
        contact.call.clone().unwrap_or_default(),
    ];
    if contact.sota.is_some() || contact.comment.is_some() {
        fields.push(contact.sota.clone().unwrap_or_default());
    }
    if let Some(comment) = &contact.comment {
        fields.push(comment.clone());
    }
    Ok(fields)
}

/// Write the whole log as a SOTA CSV file; no header row, one record per
/// contact.
pub fn write_csv(out_path: &Path, records: &[LogRecord]) -> Result<(), AppError> {
    let mut wtr = WriterBuilder::new()
        .flexible(true)
        .from_path(out_path)
        .map_err(|e| AppError::IO(format!("open out csv '{}': {}", out_path.display(), e)))?;

    for record in records {
        wtr.write_record(&csv_record(record)?)
            .map_err(|e| AppError::IO(format!("csv write row: {}", e)))?;
    }
    wtr.flush()
        .map_err(|e| AppError::IO(format!("csv flush: {}", e)))?;

    info!("CSV wrote {} rows to {}", records.len(), out_path.display());
    Ok(())
}
