use async_trait::async_trait;
use domain::{NewTodo, Todo, TodoError, TodoId, TodoReplacement};
use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::TodoRepository;

/// インメモリ実装（テスト用）
///
/// ID は 1 から単調増加し、削除後も再利用しない。
#[derive(Default)]
pub struct InMemoryTodoRepository {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    last_id: i64,
    todos: BTreeMap<TodoId, Todo>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存件数（テスト観測用）
    pub fn len(&self) -> Result<usize, TodoError> {
        Ok(self.lock()?.todos.len())
    }

    pub fn is_empty(&self) -> Result<bool, TodoError> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, State>, TodoError> {
        self.state
            .lock()
            .map_err(|_| TodoError::Database("in-memory store poisoned".to_string()))
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn insert(&self, new_todo: NewTodo) -> Result<Todo, TodoError> {
        let mut state = self.lock()?;
        state.last_id += 1;
        let todo = new_todo.into_todo(TodoId::new(state.last_id));
        state.todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn get(&self, id: TodoId) -> Result<Todo, TodoError> {
        let state = self.lock()?;
        state.todos.get(&id).cloned().ok_or(TodoError::NotFound(id))
    }

    async fn replace(&self, id: TodoId, replacement: TodoReplacement) -> Result<Todo, TodoError> {
        let mut state = self.lock()?;
        let todo = state.todos.get_mut(&id).ok_or(TodoError::NotFound(id))?;
        todo.replace_with(replacement);
        Ok(todo.clone())
    }

    async fn delete(&self, id: TodoId) -> Result<(), TodoError> {
        let mut state = self.lock()?;
        state
            .todos
            .remove(&id)
            .map(|_| ())
            .ok_or(TodoError::NotFound(id))
    }
}
