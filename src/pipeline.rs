use std::collections::HashSet;

use anyhow::Result;
use log::debug;

use crate::text::lemma::lemmatize;
use crate::text::stopwords::{self, remove_stop_words};
use crate::text::stripper::NoiseStripper;
use crate::text::tokenize::tokenize;

// ---------------------------------------------------------------------------
// Normalizer – the four-stage pipeline, built once per process
// ---------------------------------------------------------------------------

/// Holds the compiled noise pattern and the stop-word set so both are
/// computed once and shared across every row. Threaded explicitly through
/// the run; there is no module-level state.
pub struct Normalizer {
    stripper: NoiseStripper,
    stop_words: HashSet<String>,
}

impl Normalizer {
    /// Build a normalizer backed by the cached/remote stop-word resource.
    pub fn from_resources() -> Result<Self> {
        Self::with_stop_words(stopwords::load_stop_words()?)
    }

    /// Build a normalizer around an explicit stop-word set.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Result<Self> {
        Ok(Self {
            stripper: NoiseStripper::new()?,
            stop_words,
        })
    }

    /// Normalize one raw text entry: strip noise, tokenize, lemmatize,
    /// drop stop words — in that order.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        debug!("removing punctuation");
        let cleaned = self.stripper.strip(text);
        debug!("tokenizing");
        let tokens = tokenize(&cleaned);
        debug!("lemmatizing");
        let lemmas = lemmatize(&tokens);
        debug!("removing stop words");
        remove_stop_words(&lemmas, &self.stop_words)
    }

    /// Normalize a whole corpus: one token list per entry, same length
    /// and order as the input. No entry-level error isolation.
    pub fn preprocess_corpus(&self, entries: &[&str]) -> Vec<Vec<String>> {
        entries.iter().map(|entry| self.normalize(entry)).collect()
    }
}
