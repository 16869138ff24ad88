use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;
use search_core::{DocId, ScoredDocument, SearchConfig, SearchServer};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `{ document_id = N, relevance = R }` per line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Read stop words, a document count, that many documents and one query from
/// `input`, then write the ranked results to `output`.
///
/// Returns the number of results written.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W, config: &SearchConfig, format: OutputFormat) -> Result<usize> {
    let mut lines = input.lines();
    let mut next_line = |what: &str| -> Result<Option<String>> {
        lines.next().transpose().with_context(|| format!("failed to read {what}"))
    };

    let mut server = SearchServer::with_config(config).context("invalid search configuration")?;
    if let Some(stop_words) = next_line("stop words")? {
        server.configure_stop_words(&stop_words);
    }

    let count_line = next_line("document count")?.ok_or_else(|| anyhow!("missing document count line"))?;
    let count: DocId = count_line
        .trim()
        .parse()
        .with_context(|| format!("document count is not a number: {count_line:?}"))?;

    for id in 0..count {
        let text = next_line("document")?.unwrap_or_default();
        server.add_document(id, &text).with_context(|| format!("failed to index document {id}"))?;
    }
    tracing::info!(num_docs = server.document_count(), num_terms = server.index().num_terms(), "ingested documents");

    let query = next_line("query")?.unwrap_or_default();
    let results = server.find_top_documents(&query);
    for hit in &results {
        write_result(&mut output, hit, format)?;
    }
    output.flush()?;
    Ok(results.len())
}

fn write_result<W: Write>(output: &mut W, hit: &ScoredDocument, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(output, "{{ document_id = {}, relevance = {:.6} }}", hit.document_id, hit.relevance)?,
        OutputFormat::Json => writeln!(output, "{}", serde_json::to_string(hit)?)?,
    }
    Ok(())
}
