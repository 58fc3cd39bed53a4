//! 入力スキーマ
//!
//! リクエストボディの形（serde）と、その内容に対する検証規則を定義します。
//! 検証に成功すると永続化層が受け取る型（`NewTodo` / `TodoReplacement`）に変換されます。

use serde::Deserialize;

use crate::{FieldError, NewTodo, TodoReplacement, ValidationError};

/// POST /todos リクエスト
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateTodoRequest {
    pub fn validate(self) -> Result<NewTodo, ValidationError> {
        let mut errors = Vec::new();
        check_title(&self.title, &mut errors);
        finish(errors)?;

        Ok(NewTodo {
            title: self.title,
            description: self.description,
        })
    }
}

/// PUT /todos/{id} リクエスト（完全置換なので completed も必須）
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub completed: bool,
}

impl UpdateTodoRequest {
    pub fn validate(self) -> Result<TodoReplacement, ValidationError> {
        let mut errors = Vec::new();
        check_title(&self.title, &mut errors);
        finish(errors)?;

        Ok(TodoReplacement {
            title: self.title,
            description: self.description,
            completed: self.completed,
        })
    }
}

// 空白のみのタイトルは拒否するが、保存はトリムせずそのまま行う
fn check_title(title: &str, errors: &mut Vec<FieldError>) {
    if title.trim().is_empty() {
        errors.push(FieldError::new("title", "must not be blank"));
    }
}

fn finish(errors: Vec<FieldError>) -> Result<(), ValidationError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { fields: errors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_without_description_validates() {
        // Arrange: description を省略したボディ
        let req: CreateTodoRequest = serde_json::from_str(r#"{"title":"Buy milk"}"#).unwrap();

        // Act
        let new_todo = req.validate().unwrap();

        // Assert
        assert_eq!(new_todo.title, "Buy milk");
        assert_eq!(new_todo.description, None);
    }

    #[test]
    fn create_request_ignores_completed_field() {
        let req: CreateTodoRequest =
            serde_json::from_str(r#"{"title":"A","completed":true}"#).unwrap();
        assert_eq!(req.validate().unwrap().title, "A");
    }

    #[test]
    fn create_request_rejects_blank_title() {
        let req = CreateTodoRequest {
            title: "   ".to_string(),
            description: Some("x".to_string()),
        };

        let err = req.validate().unwrap_err();

        assert_eq!(err.fields, vec![FieldError::new("title", "must not be blank")]);
    }

    #[test]
    fn create_request_requires_title() {
        let result = serde_json::from_str::<CreateTodoRequest>(r#"{"description":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_description_is_kept_distinct_from_absent() {
        let req: CreateTodoRequest =
            serde_json::from_str(r#"{"title":"A","description":""}"#).unwrap();
        assert_eq!(req.validate().unwrap().description, Some(String::new()));
    }

    #[test]
    fn update_request_requires_completed() {
        let result = serde_json::from_str::<UpdateTodoRequest>(r#"{"title":"A"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_request_without_description_clears_it() {
        let req: UpdateTodoRequest =
            serde_json::from_str(r#"{"title":"A","completed":true}"#).unwrap();

        let replacement = req.validate().unwrap();

        assert_eq!(
            replacement,
            TodoReplacement {
                title: "A".to_string(),
                description: None,
                completed: true,
            }
        );
    }

    #[test]
    fn update_request_keeps_title_untrimmed() {
        let req = UpdateTodoRequest {
            title: "  padded  ".to_string(),
            description: None,
            completed: false,
        };
        assert_eq!(req.validate().unwrap().title, "  padded  ");
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // 非空白文字を1つでも含むタイトルは常に受理される
            #[test]
            fn titles_with_visible_characters_are_accepted(
                prefix in "[ \t]{0,4}",
                body in "[a-zA-Z0-9ぁ-ん]{1,32}",
                suffix in "[ \t]{0,4}",
            ) {
                let title = format!("{prefix}{body}{suffix}");
                let req = CreateTodoRequest { title: title.clone(), description: None };
                prop_assert_eq!(req.validate().unwrap().title, title);
            }

            #[test]
            fn whitespace_only_titles_are_rejected(title in "[ \t\r\n]{0,16}") {
                let req = UpdateTodoRequest { title, description: None, completed: true };
                prop_assert!(req.validate().is_err());
            }
        }
    }
}
