use crate::DocId;

/// Errors raised by the search core.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// A document with this id has already been indexed.
    #[error("document {0} already exists")]
    DuplicateDocumentId(DocId),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
