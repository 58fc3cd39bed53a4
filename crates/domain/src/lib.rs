//! Todo ドメイン
//!
//! 永続化やHTTPに依存しないデータモデルと、入力スキーマの検証規則を提供します。

pub mod errors;
pub mod schemas;
pub mod todo;

pub use errors::*;
pub use schemas::*;
pub use todo::*;
