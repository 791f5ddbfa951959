//! # Item ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/items` - 全件を `id` 昇順で返す（ページングなし）
//! - `POST /api/items` - Item を作成し、採番済みの行を 201 で返す

use std::{fmt, sync::Arc};

use axum::{
   Json,
   body::Bytes,
   extract::State,
   http::{HeaderMap, StatusCode, header},
   response::IntoResponse,
};
use itemstore_domain::item::{Item, NewItem};
use itemstore_infra::repository::ItemRepository;
use serde::{
   Deserialize,
   Deserializer,
   Serialize,
   de::{self, IgnoredAny, MapAccess, Visitor},
};

use crate::error::ApiError;

/// Item API の共有状態
pub struct ItemState {
   pub repository: Arc<dyn ItemRepository>,
}

/// Item 作成リクエスト
///
/// JSON オブジェクトのみを受け付ける（配列による位置指定は不可）。
/// 未知のフィールドは無視する。
#[derive(Debug)]
pub struct CreateItemRequest {
   pub name: String,
}

impl<'de> Deserialize<'de> for CreateItemRequest {
   fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
   where
      D: Deserializer<'de>,
   {
      deserializer.deserialize_map(CreateItemRequestVisitor)
   }
}

struct CreateItemRequestVisitor;

impl<'de> Visitor<'de> for CreateItemRequestVisitor {
   type Value = CreateItemRequest;

   fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str("a JSON object with a string `name`")
   }

   fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
   where
      A: MapAccess<'de>,
   {
      let mut name: Option<String> = None;
      while let Some(key) = map.next_key::<String>()? {
         // 重複したキーは後勝ち
         if key == "name" {
            name = Some(map.next_value()?);
         } else {
            map.next_value::<IgnoredAny>()?;
         }
      }

      let name = name.ok_or_else(|| de::Error::missing_field("name"))?;
      Ok(CreateItemRequest { name })
   }
}

/// Content-Type が JSON（`application/json` または `application/*+json`）か
fn is_json_content_type(content_type: &str) -> bool {
   let essence = content_type
      .split(';')
      .next()
      .unwrap_or_default()
      .trim()
      .to_ascii_lowercase();

   essence == "application/json"
      || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Item のレスポンス DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDto {
   pub id:   i32,
   pub name: String,
}

impl From<Item> for ItemDto {
   fn from(item: Item) -> Self {
      Self {
         id:   item.id().as_i32(),
         name: item.name().to_string(),
      }
   }
}

/// GET /api/items
pub async fn list_items(State(state): State<Arc<ItemState>>) -> Result<Json<Vec<ItemDto>>, ApiError> {
   let items = state.repository.find_all().await?;

   Ok(Json(items.into_iter().map(ItemDto::from).collect()))
}

/// POST /api/items
///
/// ## レスポンス
///
/// - `201 Created`: 作成された Item
/// - `422 Unprocessable Entity`: `name` の欠落・型不一致、JSON として不正なボディ、
///   JSON 以外の Content-Type
/// - `500 Internal Server Error`: 書き込み失敗
///
/// Content-Type が無い場合はボディを JSON として解釈する。
pub async fn create_item(
   State(state): State<Arc<ItemState>>,
   headers: HeaderMap,
   body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
   if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
      let content_type = content_type.to_str().unwrap_or_default();
      if !is_json_content_type(content_type) {
         return Err(ApiError::Validation(format!(
            "Content-Type が JSON ではありません: {content_type}"
         )));
      }
   }

   let Json(req) = Json::<CreateItemRequest>::from_bytes(&body)?;

   let item = state.repository.insert(&NewItem::new(req.name)).await?;
   tracing::debug!(item_id = %item.id(), "Item を作成しました");

   Ok((StatusCode::CREATED, Json(ItemDto::from(item))))
}
