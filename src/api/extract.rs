//! axumの抽出器のラッパー
//!
//! 抽出に失敗した場合も`ApiError`経由でJSONのエラーレスポンスを返す。

use axum::extract::{FromRequest, FromRequestParts};

use super::error::ApiError;

/// パスパラメータ
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// クエリパラメータ
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// JSONボディ
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
