// crates/engine/src/classifier.rs
use crate::error::Result;
use regex::bytes::Regex;

/// Email-shaped token: a dotted run of ASCII word characters, `@`, then at
/// least one `word.` group and a final word. `+`, `-` and other punctuation
/// are not accepted anywhere. This is looser and narrower than RFC 5322 on
/// purpose; existing outputs depend on it.
pub const EMAIL_PATTERN: &str = r"(?-u)\w+(?:\.\w+)*@(?:\w+\.)+\w+";

/// Result of classifying one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Lowercased label between `@` and the first following `.`.
    pub domain: String,
    /// Byte offset where the matched token starts.
    pub match_start: usize,
    /// Byte offset one past the end of the matched token.
    pub match_end: usize,
}

/// Finds the first email-like token in a line and extracts its domain label.
#[derive(Debug, Clone)]
pub struct Classifier {
    pattern: Regex,
}

impl Classifier {
    /// # Errors
    /// Returns an error if the built-in pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(EMAIL_PATTERN)?,
        })
    }

    /// Classify a raw line. Only the leftmost match counts.
    #[must_use]
    pub fn classify(&self, line: &[u8]) -> Option<Classification> {
        let m = self.pattern.find(line)?;
        let token = m.as_bytes();

        let host = token
            .iter()
            .position(|&b| b == b'@')
            .map_or(token, |at| &token[at + 1..]);
        let label = host
            .iter()
            .position(|&b| b == b'.')
            .map_or(host, |dot| &host[..dot]);

        Some(Classification {
            domain: String::from_utf8_lossy(label).to_ascii_lowercase(),
            match_start: m.start(),
            match_end: m.end(),
        })
    }
}
