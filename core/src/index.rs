use crate::error::{Result, SearchError};
use crate::tokenizer::StopWords;
use crate::DocId;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, warn};

/// Posting list: document id to that document's normalized term frequency.
pub type Postings = BTreeMap<DocId, f64>;

/// In-memory inverted index holding per-term TF for every indexed document.
///
/// Document text is not retained; only the derived frequencies are kept.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, Postings>,
    doc_ids: HashSet<DocId>,
    num_docs: usize,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Tokenize `text`, drop stop words, and record TF for each distinct term.
    ///
    /// A document with no remaining tokens is still counted. Re-using an id is
    /// rejected and leaves the index unchanged.
    pub fn add_document(&mut self, id: DocId, text: &str, stop_words: &StopWords) -> Result<()> {
        if !self.doc_ids.insert(id) {
            warn!(doc_id = id, "rejecting duplicate document id");
            return Err(SearchError::DuplicateDocumentId(id));
        }
        self.num_docs += 1;

        let words = stop_words.split_no_stop(text);
        if words.is_empty() {
            debug!(doc_id = id, "indexed empty document");
            return Ok(());
        }

        let mut counts: HashMap<&str, u32> = HashMap::new();
        for &word in &words {
            *counts.entry(word).or_insert(0) += 1;
        }
        let total = words.len() as f64;
        let distinct = counts.len();
        for (term, count) in counts {
            self.postings
                .entry(term.to_string())
                .or_default()
                .insert(id, count as f64 / total);
        }
        debug!(doc_id = id, tokens = words.len(), distinct, "indexed document");
        Ok(())
    }

    pub fn document_count(&self) -> usize { self.num_docs }

    pub fn contains_document(&self, id: DocId) -> bool { self.doc_ids.contains(&id) }

    /// Posting list for `term`, or `None` if no document contains it.
    pub fn postings(&self, term: &str) -> Option<&Postings> { self.postings.get(term) }

    /// Document id to TF for `term`; empty when the term was never indexed.
    pub fn term_frequency(&self, term: &str) -> Postings {
        self.postings.get(term).cloned().unwrap_or_default()
    }

    pub fn document_frequency(&self, term: &str) -> usize {
        self.postings.get(term).map_or(0, |p| p.len())
    }

    /// ln(N / df) for a term present in the index; `None` for an unseen term.
    pub fn idf(&self, term: &str) -> Option<f64> {
        let df = self.document_frequency(term);
        if df == 0 {
            return None;
        }
        Some((self.num_docs as f64 / df as f64).ln())
    }

    pub fn num_terms(&self) -> usize { self.postings.len() }
}
