use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricError {
    #[error("unknown patient field '{0}'")]
    UnknownField(String),

    #[error("field '{field}' holds {found} values, metric expects {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("date error: {0}")]
    Date(#[from] jiff::Error),
}
