use chrono::{Days, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

// Optional /prefix and /suffix around a callsign-shaped base.
static CALL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[A-Z0-9]{1,4}/)?\d?[A-Z]{1,2}\d(?:[A-Z]{1,4}|\d{3}|\d{1,3}[A-Z])[A-Z]{0,5}(?:/[A-Z0-9]{1,4})?$",
    )
    .expect("static regex must compile")
});

// e.g. ONFF-0259
static WWFF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Z]{1,4}FF-\d{4}$").expect("static regex must compile"));

// e.g. ON/ON-001
static SOTA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9A-Z]{1,3}/[A-Z]{2}-\d{3}$").expect("static regex must compile")
});

/// Gate used by the token classifier: does the upper-cased token look
/// like a callsign at all?
pub fn is_call(upper: &str) -> bool {
    CALL_RE.is_match(upper)
}

/// Normalize a callsign to upper case. An invalid sign comes back
/// `*`-marked together with a diagnostic; an empty diagnostic means the
/// sign is good.
pub fn validate_call(token: &str) -> (String, String) {
    let call = token.trim().to_ascii_uppercase();
    if CALL_RE.is_match(&call) {
        (call, String::new())
    } else {
        let msg = format!("[{}] is an invalid call", call);
        (format!("*{}", call), msg)
    }
}

/// Normalize a WWFF reference (e.g. ONFF-0259) to upper case.
pub fn validate_wwff(token: &str) -> (String, String) {
    let reference = token.trim().to_ascii_uppercase();
    if WWFF_RE.is_match(&reference) {
        (reference, String::new())
    } else {
        let msg = format!("[{}] is an invalid WWFF reference", reference);
        (format!("*{}", reference), msg)
    }
}

/// Normalize a SOTA summit reference (e.g. ON/ON-001) to upper case.
pub fn validate_sota(token: &str) -> (String, String) {
    let reference = token.trim().to_ascii_uppercase();
    if SOTA_RE.is_match(&reference) {
        (reference, String::new())
    } else {
        let msg = format!("[{}] is an invalid SOTA reference", reference);
        (format!("*{}", reference), msg)
    }
}

/// Normalize a date to YYYY-MM-DD, accepting `-`, `/` and `.` separators.
pub fn validate_date(token: &str) -> (String, String) {
    let normalized = token.trim().replace(['/', '.'], "-");
    match NaiveDate::parse_from_str(&normalized, "%Y-%m-%d") {
        Ok(date) => (date.format("%Y-%m-%d").to_string(), String::new()),
        Err(_) => (
            format!("*{}", token),
            format!("[{}] is an invalid date", token),
        ),
    }
}

/// Shift a YYYY-MM-DD date forward by `days`.
pub fn increment_date(date: &str, days: u64) -> (String, String) {
    let parsed = match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed,
        Err(_) => return (date.to_string(), format!("[{}] is an invalid date", date)),
    };
    match parsed.checked_add_days(Days::new(days)) {
        Some(shifted) => (shifted.format("%Y-%m-%d").to_string(), String::new()),
        None => (date.to_string(), format!("[{}] cannot be shifted", date)),
    }
}
