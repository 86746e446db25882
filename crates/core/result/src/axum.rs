use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::{Error, ErrorType};

/// Body sent back for every failed request
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Error {
    /// HTTP status this error maps to
    pub fn status(&self) -> StatusCode {
        match self.error_type {
            ErrorType::InvalidId => StatusCode::BAD_REQUEST,
            ErrorType::FailedValidation { .. } => StatusCode::BAD_REQUEST,
            ErrorType::NotFound => StatusCode::NOT_FOUND,
            ErrorType::UnknownRoute => StatusCode::NOT_FOUND,

            ErrorType::DatabaseError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorType::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Response body for this error
    pub fn body(&self) -> ErrorBody {
        let message = self.error_type.message();
        match &self.error_type {
            ErrorType::DatabaseError {
                operation,
                collection,
            } => ErrorBody {
                success: None,
                message,
                error: Some(format!("{operation} on {collection}")),
            },
            ErrorType::UnknownRoute => ErrorBody {
                success: Some(false),
                message,
                error: None,
            },
            ErrorType::InternalError { error } => ErrorBody {
                success: Some(false),
                message,
                error: Some(error.clone()),
            },
            _ => ErrorBody {
                success: None,
                message,
                error: None,
            },
        }
    }
}

/// HTTP response builder for Error enum
impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        (self.status(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::create_error;

    #[test]
    fn request_errors_map_to_client_statuses() {
        assert_eq!(create_error!(InvalidId).status(), StatusCode::BAD_REQUEST);
        assert_eq!(create_error!(NotFound).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            create_error!(FailedValidation {
                error: "Channels are required.".to_string()
            })
            .status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn unknown_route_body() {
        let body = serde_json::to_value(create_error!(UnknownRoute).body()).unwrap();
        assert_eq!(body, json!({ "success": false, "message": "Route not found" }));
    }

    #[test]
    fn database_error_body_carries_detail() {
        let error = crate::create_database_error!("insert_one", "keywords");
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = serde_json::to_value(error.body()).unwrap();
        assert_eq!(body["message"], "Database operation failed.");
        assert_eq!(body["error"], "insert_one on keywords");
        assert!(body.get("success").is_none());
    }

    #[test]
    fn internal_error_body_carries_cause() {
        let error = create_error!(InternalError {
            error: "channel list poisoned".to_string()
        });
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = serde_json::to_value(error.body()).unwrap();
        assert_eq!(
            body,
            json!({
                "success": false,
                "message": "Internal server error",
                "error": "channel list poisoned"
            })
        );
    }
}
