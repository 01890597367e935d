use thiserror::Error;

/// Failures raised by the sorting and sieving routines.
///
/// Both are precondition violations; nothing here is retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrillError {
    #[error("type mismatch: {0}")]
    TypeMismatch(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DrillError {
    pub fn type_mismatch(msg: impl Into<String>) -> Self {
        DrillError::TypeMismatch(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        DrillError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, DrillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_detail() {
        let err = DrillError::type_mismatch("cannot compare Int with Str");
        assert_eq!(err.to_string(), "type mismatch: cannot compare Int with Str");

        let err = DrillError::invalid_argument("bound must be at least 2, got 1");
        assert_eq!(
            err.to_string(),
            "invalid argument: bound must be at least 2, got 1"
        );
    }
}
