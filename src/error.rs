use crate::backend::BackendError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("I/O error: {context}")]
    Io {
        #[source]
        source: std::io::Error,
        context: String,
    },
    #[error("backend {operation} failed")]
    Backend {
        operation: &'static str,
        #[source]
        source: BackendError,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("unsupported: {0}")]
    Unsupported(String),
}

impl From<std::io::Error> for AppError {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            context: "I/O operation failed".to_string(),
        }
    }
}

impl AppError {
    pub fn io_with_context(source: std::io::Error, context: impl Into<String>) -> Self {
        Self::Io {
            source,
            context: context.into(),
        }
    }

    pub fn backend(operation: &'static str, source: BackendError) -> Self {
        Self::Backend { operation, source }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;
    use crate::backend::BackendError;

    #[test]
    fn backend_error_wraps_operation_and_source() {
        let err = AppError::backend("update_profile", BackendError::rejected("row locked"));
        assert!(matches!(
            err,
            AppError::Backend {
                operation: "update_profile",
                ..
            }
        ));
        assert_eq!(err.to_string(), "backend update_profile failed");
        let source = std::error::Error::source(&err).expect("source should be kept");
        assert_eq!(source.to_string(), "request rejected: row locked");
    }
}
