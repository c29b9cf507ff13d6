use std::fmt;

/// A label type for use as dictionary word elements.
///
/// Labels must be copyable and comparable for equality. Conversions to and
/// from text let the engine accept `&str` input and hand back readable
/// prefixes and predictions.
pub trait Label: Copy + Eq + fmt::Debug {
    /// Splits `text` into labels.
    fn from_text(text: &str) -> Vec<Self>;

    /// Joins `labels` back into text.
    fn to_text(labels: &[Self]) -> String;

    /// Writes a single label for diagnostic output.
    fn fmt_label(self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl Label for u8 {
    fn from_text(text: &str) -> Vec<Self> {
        text.as_bytes().to_vec()
    }

    fn to_text(labels: &[Self]) -> String {
        String::from_utf8_lossy(labels).into_owned()
    }

    fn fmt_label(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.escape_ascii())
    }
}

impl Label for char {
    fn from_text(text: &str) -> Vec<Self> {
        text.chars().collect()
    }

    fn to_text(labels: &[Self]) -> String {
        labels.iter().collect()
    }

    fn fmt_label(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
