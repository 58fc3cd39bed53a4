use serde::{Deserialize, Serialize};
use std::fmt;

/// Todo の識別子（ストレージが採番する整数。SQLite の rowid と同じ 64bit）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for TodoId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 永続化された Todo（レスポンス表現を兼ねる）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl Todo {
    /// 全フィールドを置き換えます（マージはしない）。
    pub fn replace_with(&mut self, replacement: TodoReplacement) {
        self.title = replacement.title;
        self.description = replacement.description;
        self.completed = replacement.completed;
    }
}

/// 検証済みの作成内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
}

impl NewTodo {
    /// 採番された ID を付与して Todo にします。completed は常に false で開始。
    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            title: self.title,
            description: self.description,
            completed: false,
        }
    }
}

/// 検証済みの更新内容（完全置換）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoReplacement {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}
