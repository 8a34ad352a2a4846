use crate::model::LogRecord;

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Render the sticky station values the way they were entered.
pub fn sprint_header_values(record: &LogRecord) -> String {
    let session = &record.session;
    let mut output = String::new();
    if let Some(my_call) = &session.my_call {
        output.push_str(&format!("MyCall    {}", my_call));
        if let Some(operator) = &session.operator {
            output.push_str(&format!(" ({})", operator));
        }
        output.push('\n');
    }
    if let Some(my_wwff) = &session.my_wwff {
        output.push_str(&format!("MyWWFF    {}\n", my_wwff));
    }
    if let Some(my_sota) = &session.my_sota {
        output.push_str(&format!("MySOTA    {}\n", my_sota));
    }
    output
}

pub fn sprint_column_titles() -> String {
    "Date       Time Band Mode Call          Sent Rcvd Notes\n\
     ----       ---- ---- ---- ----          ---- ---- -----\n"
        .to_string()
}

/// One aligned display row per contact.
pub fn sprint_log_record(record: &LogRecord) -> String {
    let band_name = record
        .session
        .band
        .as_ref()
        .map(|band| band.name.as_str())
        .unwrap_or("");

    let mut notes: Vec<String> = Vec::new();
    if let Some(wwff) = &record.contact.wwff {
        notes.push(wwff.clone());
    }
    if let Some(sota) = &record.contact.sota {
        notes.push(sota.clone());
    }
    if let Some(om_name) = &record.contact.om_name {
        notes.push(format!("@{}", om_name));
    }
    if let Some(grid_loc) = &record.contact.grid_loc {
        notes.push(format!("#{}", grid_loc));
    }
    if let Some(comment) = &record.contact.comment {
        notes.push(format!("<{}>", comment));
    }

    let row = format!(
        "{:<10} {:<4} {:<4} {:<4} {:<13} {:<4} {:<4} {}",
        field(&record.session.date),
        field(&record.session.time),
        band_name,
        field(&record.session.mode),
        field(&record.contact.call),
        field(&record.contact.rst_sent),
        field(&record.contact.rst_rcvd),
        notes.join(" "),
    );
    format!("{}\n", row.trim_end())
}

/// Print the whole log: station header, column titles, one row per QSO.
pub fn display_log(records: &[LogRecord]) {
    if let Some(first) = records.first() {
        print!("{}", sprint_header_values(first));
    }
    print!("{}", sprint_column_titles());
    for record in records {
        print!("{}", sprint_log_record(record));
    }
}
