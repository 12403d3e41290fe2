use anyhow::Result;
use std::io::{self, Write};

use super::config::build_index;
use crate::index::{PackageIndex, SearchHit};

/// Printed instead of any hit when the search matched nothing.
pub const NO_RESULTS: &str = "No results found";

/// Searches the index at `index_url` and prints the hits to stdout.
#[tracing::instrument(skip(index_url))]
pub async fn search(term: &str, index_url: Option<String>) -> Result<()> {
    let index = build_index(index_url)?;
    let mut stdout = io::stdout();
    search_with(&index, term, &mut stdout).await
}

pub async fn search_with<I: PackageIndex, W: Write>(
    index: &I,
    term: &str,
    output: &mut W,
) -> Result<()> {
    let hits = index.search(term).await?;
    print_hits(&hits, output)
}

/// One `name - summary` line per hit, in the order the index returned them.
pub fn print_hits<W: Write>(hits: &[SearchHit], output: &mut W) -> Result<()> {
    if hits.is_empty() {
        writeln!(output, "{}", NO_RESULTS)?;
        return Ok(());
    }

    for hit in hits {
        writeln!(
            output,
            "{} - {}",
            hit.name,
            hit.summary.as_deref().unwrap_or_default()
        )?;
    }
    Ok(())
}
