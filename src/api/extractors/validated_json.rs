//! Request bodies that are parsed and checked before a handler runs.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// JSON body extractor that runs `validator` rules before the handler.
///
/// A body that cannot be parsed (bad syntax, missing field, wrong type) is a
/// `BadRequest`. A parsed body that breaks a rule is a `Validation` error
/// whose message lists every broken rule, ordered by field name.
///
/// ```rust,ignore
/// #[derive(Deserialize, Validate)]
/// pub struct CreateUserRequest {
///     #[validate(email(message = "Invalid email format"))]
///     pub email: String,
///     pub password: String,
///     #[validate(length(min = 1, message = "Name is required"))]
///     pub name: String,
///     #[validate(range(min = 0, message = "Age must not be negative"))]
///     pub age: i64,
/// }
///
/// // {"email":"nope","password":"pw","name":"","age":-1} is rejected with
/// // "Age must not be negative, Invalid email format, Name is required"
/// async fn create_user(ValidatedJson(req): ValidatedJson<CreateUserRequest>) { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Flatten field errors into one message, ordered by field name.
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| field.to_string());

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
