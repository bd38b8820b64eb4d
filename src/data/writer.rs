use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use super::model::ReviewTable;

/// Directory preprocessed tables are written to.
pub const OUTPUT_DIR: &str = "data/preprocessed_reviews";

/// Prefix added to the source filename for the output file.
const OUTPUT_PREFIX: &str = "preprocessed_";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Join each token list, attach it as the `str_desc` column, and serialize
/// the table into the fixed output directory under `preprocessed_<filename>`.
///
/// Returns the path of the written file.
pub fn write_preprocessed(
    table: &mut ReviewTable,
    token_lists: &[Vec<String>],
    filename: &str,
) -> Result<PathBuf> {
    let path = Path::new(OUTPUT_DIR).join(format!("{OUTPUT_PREFIX}{filename}"));
    write_preprocessed_to(table, token_lists, &path)?;
    Ok(path)
}

/// Explicit-path variant of [`write_preprocessed`].
///
/// Output columns are the source headers followed by `title_desc` and
/// `str_desc`, one output row per table row, same order. The write is not
/// atomic; a crash mid-write can leave a truncated file behind.
pub fn write_preprocessed_to(
    table: &mut ReviewTable,
    token_lists: &[Vec<String>],
    path: &Path,
) -> Result<()> {
    info!("creating preprocessed column for review classification");

    let joined: Vec<String> = token_lists.iter().map(|tokens| tokens.join(" ")).collect();
    table.set_str_desc(joined)?;

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating output file {}", path.display()))?;

    let mut header_row: Vec<&str> = table.headers.iter().map(String::as_str).collect();
    header_row.push("title_desc");
    header_row.push("str_desc");
    writer.write_record(&header_row).context("writing CSV header")?;

    for (row_no, row) in table.rows.iter().enumerate() {
        let mut record: Vec<&str> = row.fields.iter().map(String::as_str).collect();
        record.push(&row.title_desc);
        record.push(&row.str_desc);
        writer
            .write_record(&record)
            .with_context(|| format!("writing CSV row {row_no}"))?;
    }

    writer.flush().context("flushing output file")?;
    info!("wrote {} preprocessed reviews to {}", table.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::ReviewRecord;

    fn sample_table() -> ReviewTable {
        ReviewTable {
            headers: vec!["title".into(), "desc".into(), "stars".into()],
            rows: vec![
                ReviewRecord {
                    fields: vec!["Great".into(), "Works well".into(), "5".into()],
                    title_desc: "GreatWorks well".into(),
                    str_desc: String::new(),
                },
                ReviewRecord {
                    fields: vec!["Bad".into(), "Broke fast".into(), "1".into()],
                    title_desc: "BadBroke fast".into(),
                    str_desc: String::new(),
                },
            ],
        }
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn appends_derived_columns_after_source_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preprocessed_sample.csv");
        let mut table = sample_table();
        let lists = vec![tokens(&["great", "work"]), tokens(&["bad", "broke"])];

        write_preprocessed_to(&mut table, &lists, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, vec!["title", "desc", "stars", "title_desc", "str_desc"]);

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][3], "GreatWorks well");
        assert_eq!(&rows[0][4], "great work");
        assert_eq!(&rows[1][4], "bad broke");
    }

    #[test]
    fn rejects_token_list_count_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preprocessed_sample.csv");
        let mut table = sample_table();
        let lists = vec![tokens(&["only", "one"])];

        assert!(write_preprocessed_to(&mut table, &lists, &path).is_err());
    }

    #[test]
    fn missing_output_directory_is_an_error() {
        let mut table = sample_table();
        let lists = vec![tokens(&["a"]), tokens(&["b"])];
        let path = Path::new("/nonexistent/preprocessed_sample.csv");

        assert!(write_preprocessed_to(&mut table, &lists, path).is_err());
    }

    #[test]
    fn empty_token_lists_become_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preprocessed_sample.csv");
        let mut table = sample_table();
        let lists = vec![tokens(&[]), tokens(&["ok"])];

        write_preprocessed_to(&mut table, &lists, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][4], "");
        assert_eq!(&rows[1][4], "ok");
    }
}
