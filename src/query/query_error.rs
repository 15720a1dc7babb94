use crate::query::SortKey;

/// Every variant is an invalid filter spec handed directly to the engine.
/// URL-derived specs never produce these; the URL adapter ignores bad input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    #[error("Invalid filter spec: price bucket {index} out of range (0..{available})")]
    InvalidPriceBucket { index: usize, available: usize },

    #[error("Invalid filter spec: unknown sort key '{0}'")]
    UnknownSortKey(String),

    #[error("Invalid filter spec: sort key '{key}' does not apply to {record_kind}")]
    SortKeyNotApplicable {
        key: SortKey,
        record_kind: &'static str,
    },
}
