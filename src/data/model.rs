use anyhow::{Result, ensure};

// ---------------------------------------------------------------------------
// ReviewRecord – one row of the reviews table
// ---------------------------------------------------------------------------

/// A single customer review (one row of the source file).
#[derive(Debug, Clone)]
pub struct ReviewRecord {
    /// Raw cell values aligned with [`ReviewTable::headers`]; the `title`
    /// and `desc` cells are stored newline-stripped.
    pub fields: Vec<String>,
    /// Newline-stripped title and description concatenated directly.
    /// The two halves meet without a separator.
    pub title_desc: String,
    /// Space-joined normalized tokens. Empty until the writer stage
    /// attaches the preprocessed column.
    pub str_desc: String,
}

// ---------------------------------------------------------------------------
// ReviewTable – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed reviews table.
///
/// Row order mirrors the source file and is mirrored again in the output
/// file; no stage filters, deduplicates, or reorders rows.
#[derive(Debug, Clone)]
pub struct ReviewTable {
    /// Column names in source order, minus any incidental index column.
    pub headers: Vec<String>,
    /// All reviews (rows).
    pub rows: Vec<ReviewRecord>,
}

impl ReviewTable {
    /// Number of reviews.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Attach the space-joined token column, one entry per row.
    pub fn set_str_desc(&mut self, joined: Vec<String>) -> Result<()> {
        ensure!(
            joined.len() == self.rows.len(),
            "str_desc column has {} entries for {} rows",
            joined.len(),
            self.rows.len()
        );
        for (row, value) in self.rows.iter_mut().zip(joined) {
            row.str_desc = value;
        }
        Ok(())
    }
}
