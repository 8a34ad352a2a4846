use std::fmt;

/// Coarse mode grouping driving the report-shorthand expansion rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeCategory {
    Cw,
    Phone,
    Digital,
    #[default]
    Unknown,
}

impl ModeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModeCategory::Cw => "CW",
            ModeCategory::Phone => "PHONE",
            ModeCategory::Digital => "DIGITAL",
            ModeCategory::Unknown => "",
        }
    }
}

impl fmt::Display for ModeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ADIF operating modes accepted on a log line.
const MODES: &[&str] = &[
    "CW", "SSB", "AM", "FM", "RTTY", "FT8", "PSK", "JT65", "JT9", "FT4",
    "JS8", "ARDOP", "ATV", "C4FM", "CHIP", "CLO", "CONTESTI", "DIGITALVOICE",
    "DOMINO", "DSTAR", "FAX", "FSK441", "HELL", "ISCAT", "JT4", "JT6M",
    "JT44", "MFSK", "MSK144", "MT63", "OLIVIA", "OPERA", "PAC", "PAX", "PKT",
    "PSK2K", "Q15", "QRA64", "ROS", "RTTYM", "SSTV", "T10", "THOR", "THRB",
    "TOR", "V4", "VOI", "WINMOR", "WSPR",
];

/// Case-insensitive membership test against the known mode list.
pub fn is_mode(token: &str) -> bool {
    let upper = token.to_ascii_uppercase();
    MODES.contains(&upper.as_str())
}

/// Mode category and default signal report for a mode. Modes without a
/// default yield `Unknown` and an empty report; callers leave the record
/// fields unset in that case.
pub fn default_report(mode: &str) -> (ModeCategory, &'static str) {
    match mode.to_ascii_uppercase().as_str() {
        "SSB" | "AM" | "FM" => (ModeCategory::Phone, "59"),
        "CW" | "RTTY" | "PSK" => (ModeCategory::Cw, "599"),
        "JT65" | "JT9" | "JT6M" | "JT4" | "JT44" | "FSK441" | "FT8" | "ISCAT"
        | "MSK144" | "QRA64" | "T10" | "WSPR" | "FT4" => (ModeCategory::Digital, "-10"),
        _ => (ModeCategory::Unknown, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_lookup_is_case_insensitive() {
        assert!(is_mode("cw"));
        assert!(is_mode("Ssb"));
        assert!(is_mode("FT8"));
        assert!(!is_mode("XYZ"));
        assert!(!is_mode("20m"));
    }

    #[test]
    fn default_reports_per_category() {
        assert_eq!(default_report("CW"), (ModeCategory::Cw, "599"));
        assert_eq!(default_report("rtty"), (ModeCategory::Cw, "599"));
        assert_eq!(default_report("ssb"), (ModeCategory::Phone, "59"));
        assert_eq!(default_report("FM"), (ModeCategory::Phone, "59"));
        assert_eq!(default_report("FT8"), (ModeCategory::Digital, "-10"));
        assert_eq!(default_report("WSPR"), (ModeCategory::Digital, "-10"));
    }

    #[test]
    fn modes_without_default_stay_unknown() {
        // SSTV is a known mode but carries no default report.
        assert!(is_mode("SSTV"));
        assert_eq!(default_report("SSTV"), (ModeCategory::Unknown, ""));
        assert_eq!(default_report("nonsense"), (ModeCategory::Unknown, ""));
    }

    #[test]
    fn category_display_matches_diagnostic_text() {
        assert_eq!(ModeCategory::Phone.to_string(), "PHONE");
        assert_eq!(ModeCategory::Unknown.to_string(), "");
    }
}
