/// Data layer: the review table, loading, and writing.
///
/// Architecture:
/// ```text
///  data/reviews/<file>.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse, derive title_desc → ReviewTable
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ ReviewTable  │  Vec<ReviewRecord>, source-ordered headers
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  append str_desc → data/preprocessed_reviews/
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod writer;
