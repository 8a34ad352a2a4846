/// Delimiter pair to look for when pulling annotation text out of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BracketKind {
    /// `<...>` free-text comment.
    Comment,
    /// `[...]` QSL message.
    QslMessage,
}

impl BracketKind {
    fn delimiters(self) -> (char, char) {
        match self {
            BracketKind::Comment => ('<', '>'),
            BracketKind::QslMessage => ('[', ']'),
        }
    }
}

/// Pull the first delimited span of `kind` out of `line`. Returns the
/// inner text and the line with the whole span removed. A missing or
/// unterminated span is not an error: the inner text comes back empty and
/// the line unchanged.
pub fn extract(line: &str, kind: BracketKind) -> (String, String) {
    let (open, close) = kind.delimiters();
    let Some(start) = line.find(open) else {
        return (String::new(), line.to_string());
    };
    let Some(offset) = line[start + 1..].find(close) else {
        return (String::new(), line.to_string());
    };
    let end = start + 1 + offset;
    let inner = line[start + 1..end].to_string();
    let remainder = format!("{}{}", &line[..start], &line[end + 1..]);
    (inner, remainder)
}
