use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;

use remark_types::api::{CommentList, CommentPayload, ListParams};
use remark_types::models::NewComment;

use crate::error::ApiError;
use crate::state::AppState;
use crate::validate;

/// GET /comments — newest first, optional `page`, `search`, `limit`, `offset`.
pub async fn list_comments(
    State(state): State<AppState>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = query?;
    let filter = validate::list_filter(&params)?;
    let (limit, offset) = (filter.limit, filter.offset);

    let items = state.run(move |store| store.list(&filter)).await?;

    Ok(Json(CommentList {
        count: items.len(),
        items,
        limit,
        offset,
    }))
}

/// POST /comments — `{text, page?}`.
pub async fn create_comment(
    State(state): State<AppState>,
    payload: Result<Json<CommentPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;
    let new = NewComment {
        text: validate::comment_text(payload.text.as_deref(), state.max_text_len)?,
        page: validate::page_key(payload.page.as_deref())?,
    };

    let comment = state.run(move |store| store.create(new)).await?;
    info!("Created comment {}", comment.id);

    Ok((StatusCode::CREATED, Json(comment)))
}

/// GET /comments/{id}
pub async fn get_comment(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = validate::parse_id(&raw_id)?;

    let comment = state
        .run(move |store| store.get_by_id(id))
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(comment))
}

/// PUT /comments/{id} — replaces the whole text. `page` in the body is ignored.
pub async fn update_comment(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<CommentPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = validate::parse_id(&raw_id)?;
    let Json(payload) = payload?;
    let text = validate::comment_text(payload.text.as_deref(), state.max_text_len)?;

    let comment = state
        .run(move |store| store.update(id, &text))
        .await?
        .ok_or(ApiError::NotFound)?;
    info!("Updated comment {}", comment.id);

    Ok(Json(comment))
}

/// DELETE /comments/{id} — 204 on success.
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = validate::parse_id(&raw_id)?;

    if !state.run(move |store| store.delete(id)).await? {
        return Err(ApiError::NotFound);
    }
    info!("Deleted comment {}", id);

    Ok(StatusCode::NO_CONTENT)
}
