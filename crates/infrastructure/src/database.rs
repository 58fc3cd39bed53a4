use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};
use shared::DatabaseConfig;

use crate::entity::todo;

/// 設定に従って SQLite に接続します。
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(config.sql_logging)
        .sqlx_logging_level(log::LevelFilter::Info);

    let db = Database::connect(options).await?;
    tracing::info!(url = %config.url, "database connected");
    Ok(db)
}

/// `todos` テーブルが無ければ作成します（起動時に1回呼ぶ）。
/// マイグレーションは行わない。
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut stmt = schema.create_table_from_entity(todo::Entity);
    stmt.if_not_exists();

    db.execute(backend.build(&stmt)).await?;
    tracing::debug!("todos table ensured");
    Ok(())
}
