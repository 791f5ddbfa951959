//! # アプリケーション構築
//!
//! ルーター構築とレイヤー（CORS・トレーシング）の付与を担当する。
//! `main` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, http::HeaderValue, routing::get};
use tower_http::{
   cors::{AllowOrigin, Any, CorsLayer},
   trace::TraceLayer,
};

use crate::handler::{HealthState, ItemState, create_item, health_check, list_items, root};

/// ルーターを構築する
///
/// `cors_origins` が空の場合は CORS レイヤーを付与しない。
pub fn build_router(
   item_state: Arc<ItemState>,
   health_state: Arc<HealthState>,
   cors_origins: &[String],
) -> Router {
   let router = Router::new()
      .route("/", get(root))
      .route("/health", get(health_check))
      .with_state(health_state)
      .route("/api/items", get(list_items).post(create_item))
      .with_state(item_state);

   let router = match cors_layer(cors_origins) {
      Some(cors) => router.layer(cors),
      None => router,
   };

   router.layer(TraceLayer::new_for_http())
}

/// 許可オリジンから CORS レイヤーを作成する
///
/// - 空なら `None`
/// - `*` を含む場合は全オリジンを許可
/// - ヘッダー値として不正なオリジンは警告を出して除外する
///
/// メソッド・ヘッダーはすべて許可する。
pub fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
   if origins.is_empty() {
      return None;
   }

   let allow_origin = if origins.iter().any(|origin| origin == "*") {
      AllowOrigin::any()
   } else {
      AllowOrigin::list(origins.iter().filter_map(|origin| {
         HeaderValue::from_str(origin)
            .inspect_err(|_| tracing::warn!(%origin, "不正な CORS オリジンを無視します"))
            .ok()
      }))
   };

   Some(
      CorsLayer::new()
         .allow_origin(allow_origin)
         .allow_methods(Any)
         .allow_headers(Any),
   )
}
