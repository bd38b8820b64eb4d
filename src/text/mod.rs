/// Text normalization stages, applied in fixed order by the pipeline:
/// noise stripping → tokenization → lemmatization → stop-word removal.
/// Each stage is pure; the stripper and the stop-word set are compiled or
/// loaded once per process and shared across all rows.

pub mod lemma;
pub mod stopwords;
pub mod stripper;
pub mod tokenize;
