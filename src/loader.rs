use crate::model::LogRecord;
use crate::parse_line::parse_line;
use crate::validate;

/// One problem found while loading, tied to its 1-based line number.
#[derive(Debug, PartialEq)]
pub struct Issue {
    pub line_no: usize,
    pub message: String,
}

/// Result of loading a whole log: the contacts in input order plus the
/// non-fatal problems collected along the way.
#[derive(Debug, Default)]
pub struct ParsedLog {
    pub records: Vec<LogRecord>,
    pub issues: Vec<Issue>,
}

/// Process a whole shorthand log. Lines starting with `#` and blank lines
/// are skipped; station directives (`mycall`, `operator`, `mywwff`,
/// `mysota`, `nickname`, `qslmsg`, `date`, `day +`) update the running
/// session state; everything else goes through the token classifier. A
/// classified line only becomes a contact when it carries a callsign;
/// otherwise it just updates the sticky state for the lines below it.
pub fn load_log(text: &str) -> ParsedLog {
    let mut parsed = ParsedLog::default();
    let mut current = LogRecord::default();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (first, value) = match line.split_once(char::is_whitespace) {
            Some((first, rest)) => (first, rest.trim()),
            None => (line, ""),
        };

        match first.to_ascii_lowercase().as_str() {
            "mycall" => {
                let (call, err) = validate::validate_call(value);
                if err.is_empty() {
                    current.session.my_call = Some(call);
                } else {
                    parsed.issues.push(Issue { line_no, message: err });
                }
            }
            "operator" => {
                let (call, err) = validate::validate_call(value);
                if err.is_empty() {
                    current.session.operator = Some(call);
                } else {
                    parsed.issues.push(Issue { line_no, message: err });
                }
            }
            "mywwff" => {
                let (reference, err) = validate::validate_wwff(value);
                if err.is_empty() {
                    current.session.my_wwff = Some(reference);
                } else {
                    parsed.issues.push(Issue { line_no, message: err });
                }
            }
            "mysota" => {
                let (reference, err) = validate::validate_sota(value);
                if err.is_empty() {
                    current.session.my_sota = Some(reference);
                } else {
                    parsed.issues.push(Issue { line_no, message: err });
                }
            }
            "nickname" => {
                if !value.is_empty() {
                    current.session.nickname = Some(value.to_string());
                }
            }
            "qslmsg" => {
                if !value.is_empty() {
                    current.session.qsl_msg = Some(value.to_string());
                }
            }
            "date" => {
                let (date, err) = validate::validate_date(value);
                if err.is_empty() {
                    current.session.date = Some(date);
                } else {
                    parsed.issues.push(Issue { line_no, message: err });
                }
            }
            "day" => {
                let days = value.chars().filter(|&c| c == '+').count() as u64;
                if days == 0 {
                    parsed.issues.push(Issue {
                        line_no,
                        message: format!("[day {}] has no increment", value),
                    });
                } else {
                    match current.session.date.clone() {
                        Some(date) => {
                            let (date, err) = validate::increment_date(&date, days);
                            if err.is_empty() {
                                current.session.date = Some(date);
                            } else {
                                parsed.issues.push(Issue { line_no, message: err });
                            }
                        }
                        None => parsed.issues.push(Issue {
                            line_no,
                            message: "day increment before any date".to_string(),
                        }),
                    }
                }
            }
            _ => {
                let (rec, errors) = parse_line(line, &current);
                if !errors.is_empty() {
                    parsed.issues.push(Issue {
                        line_no,
                        message: errors,
                    });
                }
                if rec.contact.call.is_some() {
                    parsed.records.push(rec.clone());
                }
                current = rec;
            }
        }
    }

    parsed
}
