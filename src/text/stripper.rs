use anyhow::{Context, Result};
use regex::Regex;

// ---------------------------------------------------------------------------
// Noise stripper – first normalization stage
// ---------------------------------------------------------------------------

/// Removes social-media noise from raw review text.
///
/// A single alternation pass drops `@handle` mentions, every character
/// outside `[0-9A-Za-z \t]`, scheme URLs (`foo://…` up to the next
/// whitespace), a leading `rt` retweet marker, and bare `http`-prefixed
/// runs up to the next whitespace. Stripping operates on a lower-cased
/// copy of the input and never fails on well-formed strings.
pub struct NoiseStripper {
    pattern: Regex,
}

impl NoiseStripper {
    /// Compile the noise pattern.
    ///
    /// Branch order matters: a full scheme URL must win over the
    /// single-character punctuation branch at the same position.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(r"(@[A-Za-z0-9]+)|([^0-9A-Za-z \t])|(\w+://\S+)|^rt|http\S*")
            .context("compiling noise pattern")?;
        Ok(Self { pattern })
    }

    /// Strip noise from a lower-cased copy of `text`.
    pub fn strip(&self, text: &str) -> String {
        self.pattern
            .replace_all(&text.to_lowercase(), "")
            .into_owned()
    }
}
