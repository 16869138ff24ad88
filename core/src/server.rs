use crate::config::SearchConfig;
use crate::error::Result;
use crate::index::InvertedIndex;
use crate::query::{parse_query, ParsedQuery};
use crate::ranker::{Ranker, ScoredDocument};
use crate::tokenizer::StopWords;
use crate::DocId;

/// Stop words, inverted index and ranker behind the public search interface.
///
/// Configure stop words first, add documents, then query. Stop words added
/// after documents only apply to documents indexed afterwards.
#[derive(Debug, Default)]
pub struct SearchServer {
    stop_words: StopWords,
    index: InvertedIndex,
    ranker: Ranker,
}

impl SearchServer {
    pub fn new() -> Self { Self::default() }

    pub fn with_config(config: &SearchConfig) -> Result<Self> {
        config.validate()?;
        let mut server = Self { ranker: Ranker::new(config.top_k), ..Self::default() };
        for word in &config.stop_words {
            server.configure_stop_words(word);
        }
        Ok(server)
    }

    pub fn configure_stop_words(&mut self, text: &str) {
        self.stop_words.configure(text);
    }

    pub fn add_document(&mut self, id: DocId, text: &str) -> Result<()> {
        self.index.add_document(id, text, &self.stop_words)
    }

    pub fn parse_query(&self, raw_query: &str) -> ParsedQuery {
        parse_query(raw_query, &self.stop_words)
    }

    pub fn find_top_documents(&self, raw_query: &str) -> Vec<ScoredDocument> {
        let query = self.parse_query(raw_query);
        self.ranker.find_top_documents(&query, &self.index)
    }

    pub fn document_count(&self) -> usize { self.index.document_count() }

    pub fn index(&self) -> &InvertedIndex { &self.index }

    pub fn stop_words(&self) -> &StopWords { &self.stop_words }

    pub fn top_k(&self) -> usize { self.ranker.top_k() }
}
