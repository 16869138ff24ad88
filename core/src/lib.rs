//! In-memory TF-IDF document search.
//!
//! Documents are split on spaces, stop words are removed, and each remaining
//! term's normalized frequency is stored in an inverted index. Queries mix
//! required terms with `-`-prefixed excluded terms and are ranked by the sum
//! of TF * IDF over matched required terms.

pub mod config;
pub mod error;
pub mod index;
pub mod query;
pub mod ranker;
pub mod server;
pub mod tokenizer;

pub type DocId = u32;

pub use config::{SearchConfig, DEFAULT_TOP_K};
pub use error::{Result, SearchError};
pub use index::InvertedIndex;
pub use query::{parse_query, ParsedQuery};
pub use ranker::{Ranker, ScoredDocument};
pub use server::SearchServer;
pub use tokenizer::{split_into_words, StopWords};
