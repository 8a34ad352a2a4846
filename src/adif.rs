use chrono::NaiveDate;

use crate::errors::AppError;
use crate::model::LogRecord;

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Check that the log carries everything the ADIF output needs before
/// anything is written. Station-level gaps return immediately;
/// entry-level gaps are collected into one joined message.
pub fn validate_for_adif(
    records: &[LogRecord],
    is_wwff: bool,
    is_sota: bool,
) -> Result<(), AppError> {
    if records.is_empty() {
        return Err(AppError::Validation("No QSO found".to_string()));
    }

    let station = &records[0].session;
    if station.my_call.is_none() {
        return Err(AppError::Validation("Missing MyCall".to_string()));
    }
    if is_wwff {
        if station.my_wwff.is_none() {
            return Err(AppError::Validation("Missing MY-WWFF reference".to_string()));
        }
        if station.operator.is_none() {
            return Err(AppError::Validation("Missing Operator call sign".to_string()));
        }
    }
    if is_sota && station.my_sota.is_none() {
        return Err(AppError::Validation("Missing MY-SOTA reference".to_string()));
    }

    let mut problems: Vec<String> = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let position = entry_position(record, index);
        if record.session.date.is_none() {
            problems.push(format!("missing date for log entry {}", position));
        }
        if record.session.band.is_none() {
            problems.push(format!("missing band for log entry {}", position));
        }
        if record.session.time.is_none() {
            problems.push(format!("missing QSO time for log entry {}", position));
        }
        if record.session.mode.is_none() {
            problems.push(format!("missing mode for log entry {}", position));
        }
        if record.contact.call.is_none() {
            problems.push(format!("missing call for log entry {}", position));
        }
    }
    if !problems.is_empty() {
        return Err(AppError::Validation(problems.join(", ")));
    }
    Ok(())
}

// Entries with a time are easier to find by it than by their index.
fn entry_position(record: &LogRecord, index: usize) -> String {
    match &record.session.time {
        Some(time) => format!("at {} (#{})", time, index + 1),
        None => format!("#{}", index + 1),
    }
}

fn adif_element(name: &str, value: &str) -> String {
    format!("<{}:{}>{} ", name.to_ascii_uppercase(), value.len(), value)
}

// YYYY-MM-DD -> YYYYMMDD
fn adif_date(date: &str) -> Result<String, AppError> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| AppError::Parse(format!("bad QSO date '{}': {}", date, e)))?;
    Ok(parsed.format("%Y%m%d").to_string())
}

/// Render the whole log as in-memory ADIF lines, fixed header included.
pub fn build_adif(
    records: &[LogRecord],
    is_wwff: bool,
    is_sota: bool,
) -> Result<Vec<String>, AppError> {
    let mut lines = vec![
        "ADIF Export for Fast Log Entry by DF3CB".to_string(),
        "<PROGRAMID:3>FLE".to_string(),
        "<ADIF_VER:5>3.1.0".to_string(),
        "<EOH>".to_string(),
    ];

    for record in records {
        let session = &record.session;
        let contact = &record.contact;
        let band_name = session.band.as_ref().map(|band| band.name.as_str()).unwrap_or("");

        let mut line = String::new();
        line.push_str(&adif_element("STATION_CALLSIGN", field(&session.my_call)));
        line.push_str(&adif_element("CALL", field(&contact.call)));
        line.push_str(&adif_element("QSO_DATE", &adif_date(field(&session.date))?));
        line.push_str(&adif_element("TIME_ON", field(&session.time)));
        line.push_str(&adif_element("BAND", band_name));
        line.push_str(&adif_element("MODE", field(&session.mode)));
        if let Some(frequency) = &session.frequency {
            line.push_str(&adif_element("FREQ", frequency));
        }
        line.push_str(&adif_element("RST_SENT", field(&contact.rst_sent)));
        line.push_str(&adif_element("RST_RCVD", field(&contact.rst_rcvd)));
        if let Some(comment) = &contact.comment {
            line.push_str(&adif_element("COMMENT", comment));
        }
        if let Some(om_name) = &contact.om_name {
            line.push_str(&adif_element("NAME", om_name));
        }
        if let Some(qsl_msg) = &session.qsl_msg {
            line.push_str(&adif_element("QSLMSG", qsl_msg));
        }
        if is_wwff {
            line.push_str(&adif_element("MY_SIG", "WWFF"));
            line.push_str(&adif_element("MY_SIG_INFO", field(&session.my_wwff)));
        }
        if is_sota {
            line.push_str(&adif_element("MY_SOTA_REF", field(&session.my_sota)));
            if let Some(sota) = &contact.sota {
                line.push_str(&adif_element("SOTA_REF", sota));
            }
        }
        line.push_str(&adif_element("OPERATOR", field(&session.operator)));
        if let Some(nickname) = &session.nickname {
            line.push_str(&adif_element("APP_EQSL_QTH_NICKNAME", nickname));
        }
        line.push_str("<EOR>");

        lines.push(line);
    }

    Ok(lines)
}
