//! 拒否を `ApiError` に変換する抽出子
//!
//! axum 標準の `Json` / `Path` は失敗時に 400/415 などを返すため、
//! ここで包んで検証エラー（422）として統一する。

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::ApiError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct AppPath<T>(pub T);
