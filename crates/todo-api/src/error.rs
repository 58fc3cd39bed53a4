use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{FieldError, TodoError, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Todo not found")]
    NotFound,

    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "error": self.to_string() }),
            ),
            ApiError::Validation(fields) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::json!({ "error": self.to_string(), "fields": fields }),
            ),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Validation(e.fields)
    }
}

impl From<TodoError> for ApiError {
    fn from(e: TodoError) -> Self {
        match e {
            TodoError::NotFound(_) => ApiError::NotFound,
            TodoError::Database(msg) => ApiError::Internal(msg),
        }
    }
}

// ボディの欠落・不正JSON・型不一致・Content-Type 不一致はすべて 422 に寄せる
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(vec![FieldError::new("body", rejection.body_text())])
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(vec![FieldError::new("todo_id", rejection.body_text())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body;
    use domain::TodoId;

    async fn into_parts(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let (status, json) = into_parts(TodoError::NotFound(TodoId::new(3)).into()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, serde_json::json!({ "error": "Todo not found" }));
    }

    #[tokio::test]
    async fn validation_maps_to_422_with_fields() {
        let err = ValidationError::single("title", "must not be blank");

        let (status, json) = into_parts(err.into()).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error"], "Validation failed");
        assert_eq!(json["fields"][0]["field"], "title");
        assert_eq!(json["fields"][0]["message"], "must not be blank");
    }

    #[tokio::test]
    async fn database_error_hides_details() {
        let err = TodoError::Database("disk I/O error".to_string());

        let (status, json) = into_parts(err.into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, serde_json::json!({ "error": "Internal server error" }));
    }
}
