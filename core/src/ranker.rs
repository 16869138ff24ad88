use crate::index::InvertedIndex;
use crate::query::ParsedQuery;
use crate::DocId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub document_id: DocId,
    pub relevance: f64,
}

/// TF-IDF ranker returning at most `top_k` documents per query.
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    top_k: usize,
}

impl Ranker {
    pub fn new(top_k: usize) -> Self { Self { top_k } }

    pub fn top_k(&self) -> usize { self.top_k }

    /// Score every document matching a plus term, drop documents matching any
    /// minus term, then keep the best `top_k` with relevance above zero.
    ///
    /// Results are ordered by descending relevance, ties by ascending id.
    pub fn find_top_documents(&self, query: &ParsedQuery, index: &InvertedIndex) -> Vec<ScoredDocument> {
        let mut relevance: BTreeMap<DocId, f64> = BTreeMap::new();
        for term in &query.plus_words {
            let Some(postings) = index.postings(term) else { continue };
            let Some(idf) = index.idf(term) else { continue };
            for (&doc_id, &tf) in postings {
                *relevance.entry(doc_id).or_insert(0.0) += tf * idf;
            }
        }
        let candidates = relevance.len();

        for term in &query.minus_words {
            if let Some(postings) = index.postings(term) {
                for doc_id in postings.keys() {
                    relevance.remove(doc_id);
                }
            }
        }
        let excluded = candidates - relevance.len();

        let mut scored: Vec<ScoredDocument> = relevance
            .into_iter()
            .filter(|&(_, r)| r > 0.0)
            .map(|(document_id, relevance)| ScoredDocument { document_id, relevance })
            .collect();
        scored.sort_by(|a, b| {
            b.relevance
                .partial_cmp(&a.relevance)
                .unwrap_or(Ordering::Equal)
                .then(a.document_id.cmp(&b.document_id))
        });
        scored.truncate(self.top_k);
        debug!(candidates, excluded, returned = scored.len(), "ranked documents");
        scored
    }
}

impl Default for Ranker {
    fn default() -> Self { Self::new(crate::config::DEFAULT_TOP_K) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::parse_query;
    use crate::tokenizer::StopWords;

    fn build(docs: &[&str]) -> (InvertedIndex, StopWords) {
        let mut sw = StopWords::new();
        sw.configure("a an the");
        let mut idx = InvertedIndex::new();
        for (id, text) in docs.iter().enumerate() {
            idx.add_document(id as DocId, text, &sw).unwrap();
        }
        (idx, sw)
    }

    #[test]
    fn sums_tf_idf_over_plus_terms() {
        let (idx, sw) = build(&["cat dog", "cat", "bird"]);
        let q = parse_query("cat dog", &sw);
        let res = Ranker::new(5).find_top_documents(&q, &idx);
        let idf_cat = (3.0f64 / 2.0).ln();
        let idf_dog = 3.0f64.ln();
        assert_eq!(res.len(), 2);
        assert_eq!(res[0].document_id, 0);
        assert!((res[0].relevance - (0.5 * idf_cat + 0.5 * idf_dog)).abs() < 1e-12);
        assert_eq!(res[1].document_id, 1);
        assert!((res[1].relevance - idf_cat).abs() < 1e-12);
    }

    #[test]
    fn minus_terms_remove_documents() {
        let (idx, sw) = build(&["cat dog", "cat", "bird"]);
        let q = parse_query("cat -dog", &sw);
        let res = Ranker::new(5).find_top_documents(&q, &idx);
        assert_eq!(res.iter().map(|d| d.document_id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn plus_and_minus_same_term_excludes() {
        let (idx, sw) = build(&["cat", "dog"]);
        let q = parse_query("cat -cat", &sw);
        assert!(Ranker::new(5).find_top_documents(&q, &idx).is_empty());
    }

    #[test]
    fn zero_relevance_is_dropped() {
        let (idx, sw) = build(&["cat dog", "cat bird"]);
        let q = parse_query("cat", &sw);
        assert!(Ranker::new(5).find_top_documents(&q, &idx).is_empty());
    }

    #[test]
    fn truncates_and_breaks_ties_by_id() {
        let (idx, sw) = build(&["x", "x", "x", "y"]);
        let q = parse_query("x", &sw);
        let res = Ranker::new(2).find_top_documents(&q, &idx);
        assert_eq!(res.iter().map(|d| d.document_id).collect::<Vec<_>>(), vec![0, 1]);
        assert!(Ranker::new(0).find_top_documents(&q, &idx).is_empty());
    }

    #[test]
    fn unknown_terms_and_empty_index() {
        let (idx, sw) = build(&["cat"]);
        assert!(Ranker::default().find_top_documents(&parse_query("zebra", &sw), &idx).is_empty());
        let empty = InvertedIndex::new();
        assert!(Ranker::default().find_top_documents(&parse_query("cat", &sw), &empty).is_empty());
    }
}
