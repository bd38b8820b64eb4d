use unicode_segmentation::UnicodeSegmentation;

/// Split cleaned text into word tokens on Unicode word boundaries.
///
/// Noise stripping runs first in the pipeline, so in practice this
/// separates on the whitespace the stripper leaves behind. The result is
/// possibly empty and deterministic for a given input.
pub fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words().map(str::to_string).collect()
}
