//! User handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Post, UserResponse};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Created, NoContent};

/// User creation request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub password: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(range(min = 0, message = "Age must not be negative"))]
    pub age: i64,
}

/// User update request; the email comes from the path
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    pub password: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(range(min = 0, message = "Age must not be negative"))]
    pub age: i64,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route(
            "/:email",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/:email/posts", get(list_user_posts))
}

/// Create (or overwrite) a user
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Created<UserResponse>> {
    let user = state
        .user_service
        .create_user(payload.email, payload.password, payload.name, payload.age)
        .await?;

    Ok(Created(UserResponse::from(user)))
}

/// Get a user by email
pub async fn get_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let user = state.user_service.get_user(&email).await?;
    Ok(Json(ApiResponse::success(UserResponse::from(user))))
}

/// Update an existing user
pub async fn update_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let user = state
        .user_service
        .update_user(email, payload.password, payload.name, payload.age)
        .await?;

    Ok(Json(ApiResponse::success(UserResponse::from(user))))
}

/// Delete a user (their posts are kept)
pub async fn delete_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<NoContent> {
    state.user_service.delete_user(&email).await?;
    Ok(NoContent)
}

/// List posts owned by a user
pub async fn list_user_posts(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<Post>>>> {
    let posts = state.post_service.list_posts(&email).await?;
    Ok(Json(ApiResponse::success(posts)))
}
