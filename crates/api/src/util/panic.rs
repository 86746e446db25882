use std::any::Any;

use axum::response::{IntoResponse, Response};
use keywords_result::create_error;
use tower_http::catch_panic::CatchPanicLayer;

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Layer turning handler panics into the generic 500 response
pub fn catch_panic_layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

/// Build the error response for a panic payload
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let error = if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "Unknown panic".to_string()
    };

    tracing::error!("Request handler panicked: {error}");
    create_error!(InternalError { error }).into_response()
}
