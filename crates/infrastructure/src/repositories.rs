use async_trait::async_trait;
use domain::{NewTodo, Todo, TodoError, TodoId, TodoReplacement};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, Set,
    TransactionTrait,
};

use crate::entity::todo;

/// Todo ストレージの抽象（ID 単位の get/insert/replace/delete）
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// 新しい Todo を保存し、採番済みの Todo を返す
    async fn insert(&self, new_todo: NewTodo) -> Result<Todo, TodoError>;
    async fn get(&self, id: TodoId) -> Result<Todo, TodoError>;
    /// 3フィールドを完全に置き換える
    async fn replace(&self, id: TodoId, replacement: TodoReplacement) -> Result<Todo, TodoError>;
    async fn delete(&self, id: TodoId) -> Result<(), TodoError>;
}

/// SeaORM(SQLite) 実装
///
/// 操作ごとにトランザクションを1つ開き、成功時のみコミットする。
/// エラーで抜けた場合はトランザクションの drop でロールバックされる。
#[derive(Clone)]
pub struct SeaOrmTodoRepository {
    db: DatabaseConnection,
}

impl SeaOrmTodoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_error(e: DbErr) -> TodoError {
    tracing::error!(error = %e, "database error");
    TodoError::Database(e.to_string())
}

#[async_trait]
impl TodoRepository for SeaOrmTodoRepository {
    async fn insert(&self, new_todo: NewTodo) -> Result<Todo, TodoError> {
        let txn = self.db.begin().await.map_err(db_error)?;

        let model = todo::ActiveModel {
            title: Set(new_todo.title),
            description: Set(new_todo.description),
            completed: Set(false),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(db_error)?;

        txn.commit().await.map_err(db_error)?;
        Ok(model.into())
    }

    async fn get(&self, id: TodoId) -> Result<Todo, TodoError> {
        let txn = self.db.begin().await.map_err(db_error)?;

        let model = todo::Entity::find_by_id(id.value())
            .one(&txn)
            .await
            .map_err(db_error)?
            .ok_or(TodoError::NotFound(id))?;

        txn.commit().await.map_err(db_error)?;
        Ok(model.into())
    }

    async fn replace(&self, id: TodoId, replacement: TodoReplacement) -> Result<Todo, TodoError> {
        let txn = self.db.begin().await.map_err(db_error)?;

        let existing = todo::Entity::find_by_id(id.value())
            .one(&txn)
            .await
            .map_err(db_error)?
            .ok_or(TodoError::NotFound(id))?;

        let mut active = existing.into_active_model();
        active.title = Set(replacement.title);
        active.description = Set(replacement.description);
        active.completed = Set(replacement.completed);
        let model = active.update(&txn).await.map_err(db_error)?;

        txn.commit().await.map_err(db_error)?;
        Ok(model.into())
    }

    async fn delete(&self, id: TodoId) -> Result<(), TodoError> {
        let txn = self.db.begin().await.map_err(db_error)?;

        let result = todo::Entity::delete_by_id(id.value())
            .exec(&txn)
            .await
            .map_err(db_error)?;
        if result.rows_affected == 0 {
            return Err(TodoError::NotFound(id));
        }

        txn.commit().await.map_err(db_error)?;
        Ok(())
    }
}
