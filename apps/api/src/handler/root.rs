//! # ルートハンドラ
//!
//! `GET /` でプロセスの稼働だけを返す。データベースには触れない。

use axum::Json;
use serde::{Deserialize, Serialize};

/// 稼働メッセージ
pub const ALIVE_MESSAGE: &str = "FastAPI is alive";

/// `GET /` のレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootResponse {
   pub message: String,
}

/// GET /
///
/// 常に 200 OK と固定メッセージを返す。
pub async fn root() -> Json<RootResponse> {
   Json(RootResponse {
      message: ALIVE_MESSAGE.to_string(),
   })
}

#[cfg(test)]
mod tests {
   use axum::{
      body::Body,
      http::{Request, StatusCode},
   };
   use pretty_assertions::assert_eq;
   use tower::ServiceExt;

   use crate::test_utils::{FailingItemRepository, StubProbe, create_test_app, response_json};

   #[tokio::test]
   async fn test_dbが利用できなくても固定メッセージを返す() {
      // Given
      let sut = create_test_app(
         FailingItemRepository,
         StubProbe::failing("connection refused"),
      );
      let request = Request::builder().uri("/").body(Body::empty()).unwrap();

      // When
      let response = sut.oneshot(request).await.unwrap();

      // Then
      assert_eq!(response.status(), StatusCode::OK);
      let body: serde_json::Value = response_json(response).await;
      assert_eq!(body, serde_json::json!({ "message": "FastAPI is alive" }));
   }
}
