//! Post handlers.

use axum::{
    extract::{Path, State},
    routing::{delete, post},
    Router,
};
use serde::Deserialize;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::Post;
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Post creation request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub user_email: String,
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

/// Create post routes
pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_post))
        .route("/:id", delete(delete_post))
}

/// Create a post for an existing user
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePostRequest>,
) -> AppResult<Created<Post>> {
    let post = state
        .post_service
        .create_post(payload.user_email, payload.text)
        .await?;

    Ok(Created(post))
}

/// Delete a post by id
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<NoContent> {
    state.post_service.delete_post(&id).await?;
    Ok(NoContent)
}
