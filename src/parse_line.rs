use log::debug;
use regex::Regex;
use std::sync::LazyLock;

use crate::band;
use crate::brackets::{self, BracketKind};
use crate::diag::Diagnostics;
use crate::model::{Band, LogRecord};
use crate::report::{self, ModeCategory};
use crate::validate;

static FULL_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-2][0-9]{3}$").expect("static regex must compile"));
static PARTIAL_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-5][0-9]$|^[1-9]$").expect("static regex must compile"));
static RST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}$").expect("static regex must compile"));
static FREQ_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+$").expect("static regex must compile"));

/// Cross-token flags threaded through one line's classification.
#[derive(Default)]
struct LineState {
    /// Set once a callsign has been classified; stays set for the line.
    right_of_call: bool,
    /// Distinguishes the first (sent) from the second (received) report.
    have_sent_rst: bool,
}

/// Classify one shorthand log line into a record, seeded with the sticky
/// fields of `previous`. Returns the record and the accumulated
/// diagnostic text; an empty string means the line parsed cleanly.
/// Diagnostics never abort the line.
pub fn parse_line(input: &str, previous: &LogRecord) -> (LogRecord, String) {
    let mut rec = LogRecord::next_from(previous);
    let mut state = LineState::default();
    let mut diag = Diagnostics::new();

    // Annotation spans come out before tokenization.
    let (comment, rest) = brackets::extract(input, BracketKind::Comment);
    if !comment.is_empty() {
        rec.contact.comment = Some(comment);
    }
    let (qsl_msg, rest) = brackets::extract(&rest, BracketKind::QslMessage);
    if !qsl_msg.is_empty() {
        rec.session.qsl_msg = Some(qsl_msg);
    }

    for token in rest.split_whitespace() {
        classify_token(token, &mut rec, &mut state, &mut diag);
    }

    // Backstop: reports the line left empty fill from the mode default.
    if rec.contact.rst_sent.is_none() {
        let (_, default_report) = report::default_report(rec.session.mode.as_deref().unwrap_or(""));
        rec.contact.rst_sent = non_empty(default_report);
    }
    if rec.contact.rst_rcvd.is_none() {
        let (_, default_report) = report::default_report(rec.session.mode.as_deref().unwrap_or(""));
        rec.contact.rst_rcvd = non_empty(default_report);
    }

    if !diag.is_empty() {
        debug!("could not fully classify '{}'", input);
    }
    (rec, diag.into_string())
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() { None } else { Some(s.to_string()) }
}

/// Fixed-order rule cascade; the first matching rule consumes the token.
fn classify_token(token: &str, rec: &mut LogRecord, state: &mut LineState, diag: &mut Diagnostics) {
    let upper = token.to_ascii_uppercase();

    if report::is_mode(&upper) {
        if rec.contact.rst_sent.is_none() || rec.contact.rst_rcvd.is_none() {
            let (category, default_report) = report::default_report(&upper);
            rec.session.mode_category = category;
            rec.contact.rst_sent = non_empty(default_report);
            rec.contact.rst_rcvd = non_empty(default_report);
        } else {
            diag.push("Double definitiion of RST");
        }
        rec.session.mode = Some(upper);
        return;
    }

    if let Some((lower, upper_limit)) = band::limits(token) {
        rec.session.band = Some(Band {
            name: token.to_ascii_lowercase(),
            lower,
            upper: upper_limit,
        });
        return;
    }

    if FREQ_RE.is_match(token) {
        let qrg: f64 = token.parse().unwrap_or_default();
        match &rec.session.band {
            Some(band) => {
                if qrg >= band.lower && qrg <= band.upper {
                    rec.session.frequency = Some(format!("{qrg:.3}"));
                } else {
                    rec.session.frequency = None;
                    diag.push(&format!(
                        " Frequency {} is invalid for {} band",
                        token, band.name
                    ));
                }
            }
            None => diag.push(&format!(
                " Unable to load frequency {}: no band defined.",
                token
            )),
        }
        return;
    }

    if validate::is_call(&upper) {
        let (call, call_diag) = validate::validate_call(token);
        rec.contact.call = Some(call);
        diag.push(&call_diag);
        state.right_of_call = true;
        return;
    }

    // Times only make sense before the callsign.
    if !state.right_of_call {
        if FULL_TIME_RE.is_match(token) {
            rec.session.time = Some(token.to_string());
            rec.contact.actual_time = Some(token.to_string());
            return;
        }
        if PARTIAL_TIME_RE.is_match(token) {
            let merged = match &rec.session.time {
                None => token.to_string(),
                // Splice the new digits onto the right end of the
                // previously recorded time.
                Some(previous_time) => {
                    let keep = &previous_time[..previous_time.len().saturating_sub(token.len())];
                    format!("{keep}{token}")
                }
            };
            rec.session.time = Some(merged.clone());
            rec.contact.actual_time = Some(merged);
            return;
        }
    }

    if token.starts_with('@') {
        rec.contact.om_name = Some(token.trim_start_matches('@').to_string());
        return;
    }

    if token.starts_with('#') {
        rec.contact.grid_loc = Some(token.trim_start_matches('#').to_string());
        return;
    }

    if state.right_of_call {
        if RST_RE.is_match(token) {
            store_report(token, rec, state, diag);
            return;
        }

        let (wwff_ref, wwff_err) = validate::validate_wwff(token);
        if wwff_err.is_empty() {
            rec.contact.wwff = Some(wwff_ref);
            return;
        }

        let (sota_ref, sota_err) = validate::validate_sota(token);
        if sota_err.is_empty() {
            rec.contact.sota = Some(sota_ref);
            return;
        }
    }

    diag.push(&format!("Unable to parse {token} "));
}

/// Expand a 1-3 digit report shorthand for the current mode category and
/// file it as sent (first) or received (second).
fn store_report(token: &str, rec: &mut LogRecord, state: &mut LineState, diag: &mut Diagnostics) {
    let category = rec.session.mode_category;
    let report = match token.len() {
        1 => match category {
            ModeCategory::Cw => format!("5{token}9"),
            ModeCategory::Phone => format!("5{token}"),
            _ => String::new(),
        },
        2 => match category {
            ModeCategory::Cw => format!("{token}9"),
            ModeCategory::Phone => token.to_string(),
            _ => String::new(),
        },
        _ => {
            if category == ModeCategory::Cw {
                token.to_string()
            } else {
                diag.push(&format!(
                    "Invalid report ({}) for {} mode ",
                    token,
                    category.as_str()
                ));
                format!("*{token}")
            }
        }
    };
    if state.have_sent_rst {
        rec.contact.rst_rcvd = non_empty(&report);
    } else {
        rec.contact.rst_sent = non_empty(&report);
        state.have_sent_rst = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SessionState;

    fn on_20m_cw() -> LogRecord {
        LogRecord {
            session: SessionState {
                band: Some(Band {
                    name: "20m".to_string(),
                    lower: 14.0,
                    upper: 14.35,
                }),
                mode: Some("CW".to_string()),
                mode_category: ModeCategory::Cw,
                ..SessionState::default()
            },
            ..LogRecord::default()
        }
    }

    #[test]
    fn full_line_from_scratch() {
        let (rec, errors) = parse_line("20m cw 1310 s57lc 599 599", &LogRecord::default());
        assert_eq!(errors, "");
        let band = rec.session.band.expect("band");
        assert_eq!(band.name, "20m");
        assert_eq!((band.lower, band.upper), (14.0, 14.35));
        assert_eq!(rec.session.mode.as_deref(), Some("CW"));
        assert_eq!(rec.session.mode_category, ModeCategory::Cw);
        assert_eq!(rec.session.time.as_deref(), Some("1310"));
        assert_eq!(rec.contact.actual_time.as_deref(), Some("1310"));
        assert_eq!(rec.contact.call.as_deref(), Some("S57LC"));
        assert_eq!(rec.contact.rst_sent.as_deref(), Some("599"));
        assert_eq!(rec.contact.rst_rcvd.as_deref(), Some("599"));
    }

    #[test]
    fn received_report_defaults_when_only_sent_given() {
        let (rec, errors) = parse_line("CW 1310 S57LC 599", &on_20m_cw());
        assert_eq!(errors, "");
        assert_eq!(rec.session.mode.as_deref(), Some("CW"));
        assert_eq!(rec.session.time.as_deref(), Some("1310"));
        assert_eq!(rec.contact.call.as_deref(), Some("S57LC"));
        assert_eq!(rec.contact.rst_sent.as_deref(), Some("599"));
        assert_eq!(rec.contact.rst_rcvd.as_deref(), Some("599"));
    }

    #[test]
    fn second_mode_does_not_overwrite_reports() {
        let (rec, errors) = parse_line("cw 1310 s57lc 579 589 ssb", &LogRecord::default());
        assert!(errors.contains("Double definitiion of RST"));
        assert_eq!(rec.session.mode.as_deref(), Some("SSB"));
        // The category and the reports stay as the first mode set them.
        assert_eq!(rec.session.mode_category, ModeCategory::Cw);
        assert_eq!(rec.contact.rst_sent.as_deref(), Some("579"));
        assert_eq!(rec.contact.rst_rcvd.as_deref(), Some("589"));
    }

    #[test]
    fn partial_time_splices_onto_carried_time() {
        let mut previous = on_20m_cw();
        previous.session.time = Some("1300".to_string());
        let (rec, errors) = parse_line("05 on4ly", &previous);
        assert_eq!(errors, "");
        assert_eq!(rec.session.time.as_deref(), Some("1305"));
        assert_eq!(rec.contact.actual_time.as_deref(), Some("1305"));
    }

    #[test]
    fn partial_time_without_carried_time_is_kept_as_is() {
        let (rec, errors) = parse_line("5 on4ly", &on_20m_cw());
        assert_eq!(errors, "");
        assert_eq!(rec.session.time.as_deref(), Some("5"));
    }

    #[test]
    fn single_digit_splice_replaces_last_digit() {
        let mut previous = on_20m_cw();
        previous.session.time = Some("1305".to_string());
        let (rec, _) = parse_line("7 on4ly", &previous);
        assert_eq!(rec.session.time.as_deref(), Some("1307"));
    }

    #[test]
    fn in_band_frequency_is_stored_formatted() {
        let (rec, errors) = parse_line("14.045 s57lc", &on_20m_cw());
        assert_eq!(errors, "");
        assert_eq!(rec.session.frequency.as_deref(), Some("14.045"));
    }

    #[test]
    fn out_of_band_frequency_is_rejected() {
        let (rec, errors) = parse_line("15.000 s57lc", &on_20m_cw());
        assert!(errors.contains("Frequency 15.000 is invalid for 20m band"));
        assert_eq!(rec.session.frequency, None);
    }

    #[test]
    fn frequency_without_band_is_rejected() {
        let (rec, errors) = parse_line("14.045 s57lc", &LogRecord::default());
        assert!(errors.contains("Unable to load frequency 14.045: no band defined."));
        assert_eq!(rec.session.frequency, None);
    }

    #[test]
    fn cw_report_shorthands_expand() {
        let (rec, _) = parse_line("s57lc 9", &on_20m_cw());
        assert_eq!(rec.contact.rst_sent.as_deref(), Some("599"));

        let (rec, _) = parse_line("s57lc 55", &on_20m_cw());
        assert_eq!(rec.contact.rst_sent.as_deref(), Some("559"));

        let (rec, _) = parse_line("s57lc 339 449", &on_20m_cw());
        assert_eq!(rec.contact.rst_sent.as_deref(), Some("339"));
        assert_eq!(rec.contact.rst_rcvd.as_deref(), Some("449"));
    }

    #[test]
    fn phone_report_shorthands_expand() {
        let mut previous = on_20m_cw();
        previous.session.mode = Some("SSB".to_string());
        previous.session.mode_category = ModeCategory::Phone;

        let (rec, _) = parse_line("s57lc 9", &previous);
        assert_eq!(rec.contact.rst_sent.as_deref(), Some("59"));

        let (rec, _) = parse_line("s57lc 47 55", &previous);
        assert_eq!(rec.contact.rst_sent.as_deref(), Some("47"));
        assert_eq!(rec.contact.rst_rcvd.as_deref(), Some("55"));
    }

    #[test]
    fn three_digit_report_is_invalid_outside_cw() {
        let mut previous = on_20m_cw();
        previous.session.mode = Some("SSB".to_string());
        previous.session.mode_category = ModeCategory::Phone;

        let (rec, errors) = parse_line("s57lc 459", &previous);
        assert!(errors.contains("Invalid report (459) for PHONE mode"));
        assert_eq!(rec.contact.rst_sent.as_deref(), Some("*459"));
    }

    #[test]
    fn digital_shorthand_falls_back_to_mode_default() {
        let (rec, errors) = parse_line("ft8 s57lc 5", &LogRecord::default());
        assert_eq!(errors, "");
        // No expansion rule for DIGITAL shorthands; the default report
        // backstop fills the gap.
        assert_eq!(rec.contact.rst_sent.as_deref(), Some("-10"));
        assert_eq!(rec.contact.rst_rcvd.as_deref(), Some("-10"));
    }

    #[test]
    fn name_and_grid_markers_strip() {
        let (rec, errors) = parse_line("s57lc @Janez #JN76to", &on_20m_cw());
        assert_eq!(errors, "");
        assert_eq!(rec.contact.om_name.as_deref(), Some("Janez"));
        assert_eq!(rec.contact.grid_loc.as_deref(), Some("JN76to"));
    }

    #[test]
    fn references_right_of_call() {
        let (rec, errors) = parse_line("s57lc onff-0259", &on_20m_cw());
        assert_eq!(errors, "");
        assert_eq!(rec.contact.wwff.as_deref(), Some("ONFF-0259"));

        let (rec, errors) = parse_line("s57lc s5/bi-001", &on_20m_cw());
        assert_eq!(errors, "");
        assert_eq!(rec.contact.sota.as_deref(), Some("S5/BI-001"));
    }

    #[test]
    fn reference_left_of_call_is_unparseable() {
        let (rec, errors) = parse_line("onff-0259 s57lc", &on_20m_cw());
        assert!(errors.contains("Unable to parse onff-0259"));
        assert_eq!(rec.contact.wwff, None);
    }

    #[test]
    fn junk_token_is_reported_not_fatal() {
        let (rec, errors) = parse_line("s57lc zz!!", &on_20m_cw());
        assert_eq!(errors, "Unable to parse zz!! ");
        assert_eq!(rec.contact.call.as_deref(), Some("S57LC"));
    }

    #[test]
    fn bracketed_annotations_are_extracted() {
        let (rec, errors) = parse_line("s57lc <nice chat> [tnx 73]", &on_20m_cw());
        assert_eq!(errors, "");
        assert_eq!(rec.contact.comment.as_deref(), Some("nice chat"));
        assert_eq!(rec.session.qsl_msg.as_deref(), Some("tnx 73"));
    }

    #[test]
    fn sticky_fields_carry_and_per_line_fields_reset() {
        let mut previous = on_20m_cw();
        previous.session.my_call = Some("ON4KJM/P".to_string());
        previous.session.date = Some("2020-05-24".to_string());
        previous.session.time = Some("1310".to_string());
        previous.contact.call = Some("S57LC".to_string());
        previous.contact.rst_sent = Some("579".to_string());
        previous.contact.om_name = Some("Janez".to_string());
        previous.contact.comment = Some("old".to_string());

        let (rec, errors) = parse_line("on4ly", &previous);
        assert_eq!(errors, "");
        assert_eq!(rec.session.my_call.as_deref(), Some("ON4KJM/P"));
        assert_eq!(rec.session.date.as_deref(), Some("2020-05-24"));
        assert_eq!(rec.session.time.as_deref(), Some("1310"));
        assert_eq!(rec.contact.call.as_deref(), Some("ON4LY"));
        assert_eq!(rec.contact.om_name, None);
        assert_eq!(rec.contact.comment, None);
        // Reports default from the carried mode.
        assert_eq!(rec.contact.rst_sent.as_deref(), Some("599"));
        assert_eq!(rec.contact.rst_rcvd.as_deref(), Some("599"));
    }
}
