use crate::report::ModeCategory;

/// Amateur band with its frequency window in MHz.
#[derive(Clone, Debug, PartialEq)]
pub struct Band {
    pub name: String,
    pub lower: f64,
    pub upper: f64,
}

/// Station-level fields that persist from one log line to the next until a
/// later token or directive overrides them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub date: Option<String>,
    pub my_call: Option<String>,
    pub operator: Option<String>,
    pub my_wwff: Option<String>,
    pub my_sota: Option<String>,
    pub nickname: Option<String>,
    pub qsl_msg: Option<String>,
    pub mode: Option<String>,
    pub mode_category: ModeCategory,
    pub band: Option<Band>,
    pub frequency: Option<String>,
    pub time: Option<String>,
}

/// Fields that describe a single contact and start blank on every line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactState {
    pub call: Option<String>,
    pub actual_time: Option<String>,
    pub rst_sent: Option<String>,
    pub rst_rcvd: Option<String>,
    pub om_name: Option<String>,
    pub grid_loc: Option<String>,
    pub wwff: Option<String>,
    pub sota: Option<String>,
    pub comment: Option<String>,
}

/// One parsed contact, split into its carried and per-line halves.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogRecord {
    pub session: SessionState,
    pub contact: ContactState,
}

impl LogRecord {
    /// Seed record for a new line: the session half carries over, the
    /// contact half is reset.
    pub fn next_from(previous: &LogRecord) -> LogRecord {
        LogRecord {
            session: previous.session.clone(),
            contact: ContactState::default(),
        }
    }
}
