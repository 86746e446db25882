use axum::{extract::State, Json};
use keywords_database::Database;
use keywords_models::v0;
use keywords_result::{create_error, Result};

use crate::util::extract::QueryOptions;

/// Delete a keyword
#[utoipa::path(
    delete,
    path = "/api/keywords",
    tag = "Keywords",
    params(v0::OptionsDeleteKeyword),
    responses(
        (status = 200, description = "Keyword was deleted", body = v0::Acknowledgement),
        (status = 400, description = "Missing or malformed id"),
        (status = 404, description = "No keyword with this id"),
    )
)]
pub async fn delete_keyword(
    State(db): State<Database>,
    QueryOptions(options): QueryOptions<v0::OptionsDeleteKeyword>,
) -> Result<Json<v0::Acknowledgement>> {
    let id = options
        .id
        .filter(|id| v0::is_valid_id(id))
        .ok_or_else(|| create_error!(InvalidId))?;

    db.delete_keyword(&id).await?;

    tracing::info!("Deleted keyword {id}");
    Ok(Json(v0::Acknowledgement {
        message: "Keyword deleted successfully.".to_string(),
    }))
}
