//! # ヘルスチェックハンドラ
//!
//! データベースへの到達性を確認するエンドポイント。
//!
//! ## エンドポイント
//!
//! ```text
//! GET /health
//! ```
//!
//! ## レスポンス例
//!
//! ```json
//! {"ok": true}
//! {"ok": false, "error": "データベースエラー: error communicating with database: Connection refused"}
//! ```
//!
//! 失敗はボディで報告し、ステータスは常に 200 OK とする。

use std::sync::Arc;

use axum::{Json, extract::State};
use itemstore_infra::DatabaseProbe;
use serde::{Deserialize, Serialize};

/// ヘルスチェックの共有状態
pub struct HealthState {
   pub probe: Arc<dyn DatabaseProbe>,
}

/// ヘルスチェックレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
   /// `SELECT 1` が成功したか
   pub ok:    bool,
   /// 失敗時のエラーメッセージ
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub error: Option<String>,
}

impl HealthResponse {
   fn healthy() -> Self {
      Self {
         ok:    true,
         error: None,
      }
   }

   fn unhealthy(error: String) -> Self {
      Self {
         ok:    false,
         error: Some(error),
      }
   }
}

/// GET /health
///
/// 接続プールを使わずに新しい接続を張り、往復クエリを 1 回実行する。
pub async fn health_check(State(state): State<Arc<HealthState>>) -> Json<HealthResponse> {
   match state.probe.ping().await {
      Ok(()) => Json(HealthResponse::healthy()),
      Err(e) => {
         tracing::warn!(error = %e, "ヘルスチェックに失敗しました");
         Json(HealthResponse::unhealthy(e.to_string()))
      }
   }
}

#[cfg(test)]
mod tests {
   use axum::{
      body::Body,
      http::{Request, StatusCode},
   };
   use pretty_assertions::assert_eq;
   use tower::ServiceExt;

   use super::*;
   use crate::test_utils::{InMemoryItemRepository, StubProbe, create_test_app, response_json};

   fn health_request() -> Request<Body> {
      Request::builder()
         .uri("/health")
         .body(Body::empty())
         .unwrap()
   }

   #[tokio::test]
   async fn test_pingが成功した場合okがtrueになる() {
      // Given
      let sut = create_test_app(InMemoryItemRepository::new(), StubProbe::healthy());

      // When
      let response = sut.oneshot(health_request()).await.unwrap();

      // Then
      assert_eq!(response.status(), StatusCode::OK);
      let body: serde_json::Value = response_json(response).await;
      assert_eq!(body, serde_json::json!({ "ok": true }));
   }

   #[tokio::test]
   async fn test_pingが失敗した場合も200でエラーメッセージを返す() {
      // Given
      let sut = create_test_app(
         InMemoryItemRepository::new(),
         StubProbe::failing("pool timed out"),
      );

      // When
      let response = sut.oneshot(health_request()).await.unwrap();

      // Then
      assert_eq!(response.status(), StatusCode::OK);
      let body: HealthResponse = response_json(response).await;
      assert!(!body.ok);
      let error = body.error.expect("error フィールドがあること");
      assert!(!error.is_empty());
   }

   #[test]
   fn test_healthyのシリアライズ結果にerrorフィールドが含まれない() {
      let json = serde_json::to_value(HealthResponse::healthy()).unwrap();

      assert_eq!(json, serde_json::json!({ "ok": true }));
   }
}
