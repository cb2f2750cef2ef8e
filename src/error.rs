use thiserror::Error;

/// Errors surfaced by the library. Vocabulary variants are configuration
/// errors raised before any aggregation runs; a corpus load failure aborts
/// the whole run with no partial output.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("vocabulary entry {index} is empty")]
    EmptyVocabularyEntry { index: usize },

    #[error("duplicate vocabulary entry (case-insensitive): {item:?}")]
    DuplicateVocabularyEntry { item: String },

    #[error("invalid match pattern for {item:?}: {source}")]
    Pattern {
        item: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to read corpus: {0}")]
    Corpus(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
}
