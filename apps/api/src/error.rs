//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換を行う。
//!
//! ## ステータスコードの対応
//!
//! | エラー | ステータス | 備考 |
//! |--------|-----------|------|
//! | [`ApiError::Validation`] | 422 | JSON ボディのデコード失敗と JSON 以外の Content-Type |
//! | [`ApiError::Database`] | 500 | 原因はログにのみ出力し、レスポンスには含めない |
//!
//! レスポンスボディは RFC 9457 Problem Details（[`ErrorResponse`]）。

use axum::{
   Json,
   extract::rejection::JsonRejection,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use itemstore_infra::InfraError;
use itemstore_shared::ErrorResponse;
use thiserror::Error;

/// API 層で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// リクエストボディの形式・型が不正
   #[error("バリデーションエラー: {0}")]
   Validation(String),

   /// データベースエラー
   #[error("データベースエラー: {0}")]
   Database(#[from] InfraError),
}

/// JSON デコードの失敗（構文エラー・型不一致・必須フィールド欠落）を
/// まとめて 422 として扱う
impl From<JsonRejection> for ApiError {
   fn from(rejection: JsonRejection) -> Self {
      ApiError::Validation(rejection.body_text())
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let body = match &self {
         ApiError::Validation(detail) => ErrorResponse::validation_error(detail.clone()),
         ApiError::Database(e) => {
            tracing::error!(error = ?e, "データベースエラー: {}", e);
            ErrorResponse::internal_error()
         }
      };

      let status =
         StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
      (status, Json(body)).into_response()
   }
}
