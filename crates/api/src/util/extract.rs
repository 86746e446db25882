use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use keywords_result::{create_error, Error};
use serde::de::DeserializeOwned;
use validator::ValidationErrors;

/// JSON body which has passed its validation rules
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + validator::Validate,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(inner) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                create_error!(FailedValidation {
                    error: rejection.body_text()
                })
            })?;

        inner.validate().map_err(|errors| {
            create_error!(FailedValidation {
                error: first_message(&errors)
            })
        })?;

        Ok(Self(inner))
    }
}

/// Message of the first failing rule, taking fields in name order
fn first_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    fields
        .into_iter()
        .flat_map(|(_, failures)| failures.iter())
        .find_map(|error| error.message.as_ref().map(|message| message.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

/// Query string which reports malformed input as a validation failure
pub struct QueryOptions<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryOptions<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(inner)| Self(inner))
            .map_err(|rejection| {
                create_error!(FailedValidation {
                    error: rejection.body_text()
                })
            })
    }
}
