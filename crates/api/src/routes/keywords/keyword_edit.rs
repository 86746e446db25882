use axum::{
    extract::{Path, State},
    Json,
};
use keywords_database::Database;
use keywords_models::v0;
use keywords_result::{create_error, Error, Result};

use crate::util::extract::ValidatedJson;

/// Replace the channels of a keyword
///
/// The username cannot be changed. Concurrent edits of the same keyword are last-write-wins.
#[utoipa::path(
    put,
    path = "/api/keywords/{id}",
    tag = "Keywords",
    params(("id" = String, Path, description = "Keyword id")),
    request_body = v0::DataEditKeyword,
    responses(
        (status = 200, description = "Updated keyword", body = v0::Keyword),
        (status = 400, description = "Malformed id or invalid channels"),
        (status = 404, description = "No keyword with this id"),
    )
)]
pub async fn edit_keyword(
    State(db): State<Database>,
    Path(id): Path<String>,
    data: std::result::Result<ValidatedJson<v0::DataEditKeyword>, Error>,
) -> Result<Json<v0::Keyword>> {
    if !v0::is_valid_id(&id) {
        return Err(create_error!(InvalidId));
    }

    let ValidatedJson(data) = data?;
    let mut keyword = db.fetch_keyword(&id).await?;
    keyword
        .update_channels(&db, data.channels.into_iter().map(Into::into).collect())
        .await?;

    tracing::debug!("Keyword {id} now has {} channels", keyword.channelcount);
    Ok(Json(keyword.into()))
}
