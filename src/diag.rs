/// Accumulates the non-fatal diagnostics produced while classifying one
/// line. Messages carry their own spacing and are concatenated verbatim;
/// an empty buffer means the line parsed cleanly.
#[derive(Debug, Default)]
pub struct Diagnostics {
    buf: String,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, msg: &str) {
        self.buf.push_str(msg);
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}
