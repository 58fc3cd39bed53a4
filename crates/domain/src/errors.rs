use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::TodoId;

/// フィールド単位の検証エラー
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// 入力スキーマの検証エラー（1件以上の FieldError を持つ）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed: {}", join_fields(.fields))]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            fields: vec![FieldError::new(field, message)],
        }
    }
}

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// リポジトリ操作のエラー
#[derive(Debug, Clone, Error)]
pub enum TodoError {
    #[error("Todo not found: {0}")]
    NotFound(TodoId),

    #[error("Database error: {0}")]
    Database(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_every_field() {
        let err = ValidationError {
            fields: vec![
                FieldError::new("title", "must not be blank"),
                FieldError::new("body", "expected a JSON object"),
            ],
        };

        assert_eq!(
            err.to_string(),
            "Validation failed: title: must not be blank, body: expected a JSON object"
        );
    }

    #[test]
    fn not_found_mentions_id() {
        let err = TodoError::NotFound(TodoId::new(42));
        assert_eq!(err.to_string(), "Todo not found: 42");
    }
}
