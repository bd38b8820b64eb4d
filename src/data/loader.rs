use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::error::PrepError;

use super::model::{ReviewRecord, ReviewTable};

/// Directory the raw review exports land in.
pub const REVIEWS_DIR: &str = "data/reviews";

/// Incidental index column written by spreadsheet/dataframe exports,
/// dropped on load when present.
const INDEX_COLUMN: &str = "Unnamed: 0";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a reviews file by name from the fixed input directory.
pub fn load_reviews(filename: &str) -> Result<ReviewTable> {
    load_reviews_from(&Path::new(REVIEWS_DIR).join(filename))
}

/// Load a reviews CSV from an explicit path.
///
/// Requires `title` and `desc` columns; both are validated before any row
/// is read. Newline characters are stripped out of the `title` and `desc`
/// cells and the combined `title_desc` field is their direct concatenation
/// (no separator, so boundary words touch). A `Unnamed: 0` index column is
/// dropped; every other column passes through untouched, in order.
pub fn load_reviews_from(path: &Path) -> Result<ReviewTable> {
    info!("loading customer reviews from {}", path.display());

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening reviews file {}", path.display()))?;

    let raw_headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let raw_title_idx = require_column(&raw_headers, "title")?;
    let raw_desc_idx = require_column(&raw_headers, "desc")?;
    let index_idx = raw_headers.iter().position(|h| h == INDEX_COLUMN);

    let headers: Vec<String> = raw_headers
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != index_idx)
        .map(|(_, h)| h.clone())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("reading CSV row {row_no}"))?;

        let mut fields = Vec::with_capacity(headers.len());
        let mut title = String::new();
        let mut desc = String::new();
        for (col_idx, value) in record.iter().enumerate() {
            if Some(col_idx) == index_idx {
                continue;
            }
            let value = if col_idx == raw_title_idx || col_idx == raw_desc_idx {
                value.replace('\n', "")
            } else {
                value.to_string()
            };
            if col_idx == raw_title_idx {
                title = value.clone();
            } else if col_idx == raw_desc_idx {
                desc = value.clone();
            }
            fields.push(value);
        }

        rows.push(ReviewRecord {
            fields,
            title_desc: format!("{title}{desc}"),
            str_desc: String::new(),
        });
    }

    info!("loaded {} reviews, moving to nlp preprocessing", rows.len());
    Ok(ReviewTable { headers, rows })
}

fn require_column(headers: &[String], name: &str) -> Result<usize> {
    match headers.iter().position(|h| h == name) {
        Some(idx) => Ok(idx),
        None => Err(PrepError::MissingColumn {
            column: name.to_string(),
        }
        .into()),
    }
}
