use thiserror::Error;

/// Fatal parse failures. Nothing parsed before one of these survives.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to open '{path}': {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to read row at line {line}: {source}")]
    Read { line: u64, source: csv::Error },
}

/// Reasons a single row is skipped. Advisory only: the row is logged and
/// dropped, the parse continues.
#[derive(Debug, Error)]
pub enum RowError {
    #[error("expected 4 fields, found {found}")]
    FieldCount { found: usize },

    #[error("invalid quantity '{value}': {source}")]
    Quantity {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("invalid price '{value}': {source}")]
    Price {
        value: String,
        source: std::num::ParseFloatError,
    },
}
