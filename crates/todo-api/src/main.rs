//! todo-api バイナリのエントリポイント
//! 起動時に SQLite ファイルとテーブルを用意してから HTTP サーバを起動します。

use infrastructure::{connect, ensure_schema, SeaOrmTodoRepository};
use shared::{init_tracing, Config};
use std::sync::Arc;
use todo_api::{app_with_state, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing().map_err(|e| anyhow::anyhow!("failed to initialise tracing: {e}"))?;

    // 保存先・待ち受けアドレスは固定値
    let config = Config::default();

    let db = connect(&config.database).await?;
    ensure_schema(&db).await?;
    let state = AppState::new(Arc::new(SeaOrmTodoRepository::new(db)));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "server starting");

    axum::serve(listener, app_with_state(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
