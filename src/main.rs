mod data;
mod error;
mod pipeline;
mod text;

use anyhow::Result;
use clap::Parser;
use log::warn;

use data::loader::load_reviews;
use data::writer::write_preprocessed;
use pipeline::Normalizer;

/// Normalize a CSV of customer reviews for downstream classification.
///
/// Reads `data/reviews/<FILENAME>`, concatenates each row's title and
/// description, runs the four-stage normalization pipeline over the
/// combined text, and writes the result to
/// `data/preprocessed_reviews/preprocessed_<FILENAME>`.
#[derive(Parser)]
#[command(name = "review-prep", version, about)]
struct Cli {
    /// File name inside `data/reviews/` to preprocess.
    filename: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut table = load_reviews(&cli.filename)?;
    if table.is_empty() {
        warn!("no reviews found in {}", cli.filename);
    }

    let normalizer = Normalizer::from_resources()?;
    let corpus: Vec<&str> = table.rows.iter().map(|r| r.title_desc.as_str()).collect();
    let token_lists = normalizer.preprocess_corpus(&corpus);

    write_preprocessed(&mut table, &token_lists, &cli.filename)?;
    Ok(())
}
