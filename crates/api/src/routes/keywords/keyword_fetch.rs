use axum::{
    extract::{Path, State},
    Json,
};
use keywords_database::Database;
use keywords_models::v0;
use keywords_result::{create_error, Result};

/// Fetch a keyword by its id
#[utoipa::path(
    get,
    path = "/api/keywords/{id}",
    tag = "Keywords",
    params(("id" = String, Path, description = "Keyword id")),
    responses(
        (status = 200, description = "Requested keyword", body = v0::Keyword),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "No keyword with this id"),
    )
)]
pub async fn fetch_keyword(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Json<v0::Keyword>> {
    if !v0::is_valid_id(&id) {
        return Err(create_error!(InvalidId));
    }

    db.fetch_keyword(&id).await.map(Into::into).map(Json)
}
