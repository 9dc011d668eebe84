/// Errors raised while building a route table.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidPattern {
        pattern: String,
        reason: &'static str,
    },
}
