use std::net::SocketAddr;

/// SQLite ファイルの接続先（存在しなければ作成される）
pub const DATABASE_URL: &str = "sqlite://./todos.db?mode=rwc";
/// 待ち受けアドレス
pub const BIND_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 8000);
/// コネクションプールの上限
pub const MAX_CONNECTIONS: u32 = 5;

/// サービス全体の設定
///
/// 保存先や接続方針は固定値で、環境変数からは読み込みません。
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub bind_addr: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            bind_addr: SocketAddr::from(BIND_ADDR),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    /// 発行した SQL をログに出すか
    pub sql_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DATABASE_URL.to_string(),
            max_connections: MAX_CONNECTIONS,
            sql_logging: true,
        }
    }
}

impl DatabaseConfig {
    /// テスト用のインメモリ SQLite。
    /// 接続ごとに別DBになるため、プールは 1 接続に固定する。
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            sql_logging: false,
        }
    }

    /// 任意のファイルパスを指す SQLite 設定（ファイルは自動作成）
    pub fn sqlite_file(path: &std::path::Path) -> Self {
        Self {
            url: format!("sqlite://{}?mode=rwc", path.display()),
            ..Self::default()
        }
    }
}
