use thiserror::Error;

/// Errors returned by the fallible operations of a [`Gloss`](crate::Gloss).
///
/// Every operation that can fail checks its preconditions before touching the map, so an
/// error never leaves the two halves of a map out of sync.
#[derive(Debug, Error)]
pub enum GlossError {
    /// A dynamic value can not be used as a term, e.g. a JSON array or object.
    #[error("invalid term: {0}")]
    InvalidTerm(String),

    /// A pair did not hold exactly two terms, or the source was not a mapping or a sequence
    /// of pairs.
    #[error("malformed pair: {0}")]
    MalformedPair(String),

    /// The term is in neither half of the map.
    #[error("term not found")]
    TermNotFound,

    /// There are no pairs left to pop.
    #[error("gloss is empty")]
    EmptyMap,

    /// The JSON text of a dynamic source could not be parsed.
    #[error("unable to parse source: {0}")]
    Json(#[from] serde_json::Error),
}
