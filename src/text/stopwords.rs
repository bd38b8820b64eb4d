use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::error::PrepError;

/// Canonical English stop-word list (stopwords-iso), one word per line.
const STOPWORDS_URL: &str =
    "https://raw.githubusercontent.com/stopwords-iso/stopwords-en/master/stopwords-en.txt";

/// Local cache the fetched list is stored under.
const CACHE_PATH: &str = "data/stopwords/english.txt";

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load the English stop-word set.
///
/// The cached copy is preferred; the list is only fetched (and then
/// cached) when no cache exists yet. Called once per process, from the
/// pipeline constructor.
pub fn load_stop_words() -> Result<HashSet<String>> {
    load_from(Path::new(CACHE_PATH))
}

fn load_from(cache: &Path) -> Result<HashSet<String>> {
    let text = if cache.exists() {
        debug!("reading stop words from {}", cache.display());
        fs::read_to_string(cache)
            .with_context(|| format!("reading stop-word cache {}", cache.display()))?
    } else {
        fetch_and_cache(cache)?
    };

    let stops = parse_stop_words(&text);
    info!("loaded {} stop words", stops.len());
    Ok(stops)
}

fn fetch_and_cache(cache: &Path) -> Result<String> {
    info!("fetching stop-word list from {STOPWORDS_URL}");
    let text = reqwest::blocking::get(STOPWORDS_URL)
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.text())
        .map_err(|err| PrepError::ResourceUnavailable {
            reason: err.to_string(),
        })?;

    if let Some(dir) = cache.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    fs::write(cache, &text)
        .with_context(|| format!("writing stop-word cache {}", cache.display()))?;
    Ok(text)
}

/// One word per line; blank lines and surrounding whitespace are ignored.
fn parse_stop_words(text: &str) -> HashSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Drop stop words from a token sequence, preserving relative order.
pub fn remove_stop_words(tokens: &[String], stops: &HashSet<String>) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| !stops.contains(token.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn stops(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn parse_skips_blank_lines_and_trims() {
        let set = parse_stop_words("the\n\n  and  \nof\n");
        assert_eq!(set, stops(&["the", "and", "of"]));
    }

    #[test]
    fn filter_preserves_relative_order() {
        let tokens: Vec<String> = ["the", "great", "and", "sturdy", "box"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let kept = remove_stop_words(&tokens, &stops(&["the", "and"]));
        assert_eq!(kept, vec!["great", "sturdy", "box"]);
    }

    #[test]
    fn no_surviving_token_is_a_stop_word() {
        let set = stops(&["a", "is", "it"]);
        let tokens: Vec<String> = ["it", "is", "a", "keeper"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        for token in remove_stop_words(&tokens, &set) {
            assert!(!set.contains(&token));
        }
    }

    #[test]
    fn cached_file_is_preferred_over_the_network() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "the\nand\n").unwrap();
        tmp.flush().unwrap();

        // No network involved: the cache file satisfies the load.
        let set = load_from(tmp.path()).unwrap();
        assert_eq!(set, stops(&["the", "and"]));
    }
}
