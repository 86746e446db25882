#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

#[cfg(feature = "axum")]
pub mod axum;

/// Result type with custom Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error information
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[derive(Debug, Clone)]
pub struct Error {
    /// Type of error and additional information
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub error_type: ErrorType,

    /// Where this error occurred
    pub location: String,
}

/// Possible error types
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    // ? Request errors
    InvalidId,
    FailedValidation {
        error: String,
    },
    NotFound,
    UnknownRoute,

    // ? General errors
    DatabaseError {
        operation: String,
        collection: String,
    },
    InternalError {
        error: String,
    },
}

impl ErrorType {
    /// Human readable message sent back to clients
    pub fn message(&self) -> String {
        match self {
            ErrorType::InvalidId => "Invalid ID format.".to_string(),
            ErrorType::FailedValidation { error } => error.clone(),
            ErrorType::NotFound => "Keyword not found.".to_string(),
            ErrorType::UnknownRoute => "Route not found".to_string(),
            ErrorType::DatabaseError { .. } => "Database operation failed.".to_string(),
            ErrorType::InternalError { .. } => "Internal server error".to_string(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error_type {
            ErrorType::DatabaseError {
                operation,
                collection,
            } => write!(
                f,
                "database error ({operation} on {collection}) at {}",
                self.location
            ),
            other => write!(f, "{} at {}", other.message(), self.location),
        }
    }
}

impl std::error::Error for Error {}

#[macro_export]
macro_rules! create_error {
    ( $error: ident $( $tt:tt )? ) => {
        $crate::Error {
            error_type: $crate::ErrorType::$error $( $tt )?,
            location: format!("{}:{}:{}", file!(), line!(), column!()),
        }
    };
}

#[macro_export]
macro_rules! create_database_error {
    ( $operation: expr, $collection: expr ) => {
        $crate::create_error!(DatabaseError {
            operation: $operation.to_string(),
            collection: $collection.to_string()
        })
    };
}
