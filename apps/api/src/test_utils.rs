//! ハンドラテスト用のスタブとヘルパー

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{Router, body::Body, http::Response};
use itemstore_domain::item::{Item, ItemId, NewItem};
use itemstore_infra::{DatabaseProbe, InfraError, repository::ItemRepository};

use crate::{
   app_builder::build_router,
   handler::{HealthState, ItemState},
};

/// インメモリの ItemRepository
///
/// `id` は 1 から連番で採番する。
#[derive(Default)]
pub struct InMemoryItemRepository {
   items: Mutex<Vec<Item>>,
}

impl InMemoryItemRepository {
   pub fn new() -> Self {
      Self::default()
   }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
   async fn find_all(&self) -> Result<Vec<Item>, InfraError> {
      let mut items = self.items.lock().unwrap().clone();
      items.sort_by_key(Item::id);
      Ok(items)
   }

   async fn insert(&self, new_item: &NewItem) -> Result<Item, InfraError> {
      let mut items = self.items.lock().unwrap();
      let next_id = i32::try_from(items.len()).unwrap() + 1;
      let item = Item::from_db(ItemId::from_i32(next_id), new_item.name().to_string());
      items.push(item.clone());
      Ok(item)
   }
}

/// 常に DB エラーを返す ItemRepository
pub struct FailingItemRepository;

#[async_trait]
impl ItemRepository for FailingItemRepository {
   async fn find_all(&self) -> Result<Vec<Item>, InfraError> {
      Err(sqlx::Error::PoolTimedOut.into())
   }

   async fn insert(&self, _new_item: &NewItem) -> Result<Item, InfraError> {
      Err(sqlx::Error::PoolTimedOut.into())
   }
}

/// 結果を固定した DatabaseProbe
pub struct StubProbe {
   failure: Option<String>,
}

impl StubProbe {
   pub fn healthy() -> Self {
      Self { failure: None }
   }

   pub fn failing(message: &str) -> Self {
      Self {
         failure: Some(message.to_string()),
      }
   }
}

#[async_trait]
impl DatabaseProbe for StubProbe {
   async fn ping(&self) -> Result<(), InfraError> {
      match &self.failure {
         Some(message) => Err(sqlx::Error::Protocol(message.clone()).into()),
         None => Ok(()),
      }
   }
}

/// CORS なしのテスト用ルーターを作成する
pub fn create_test_app(
   repository: impl ItemRepository + 'static,
   probe: impl DatabaseProbe + 'static,
) -> Router {
   let item_state = Arc::new(ItemState {
      repository: Arc::new(repository),
   });
   let health_state = Arc::new(HealthState {
      probe: Arc::new(probe),
   });
   build_router(item_state, health_state, &[])
}

/// レスポンスボディを JSON としてデシリアライズする
pub async fn response_json<T: serde::de::DeserializeOwned>(response: Response<Body>) -> T {
   let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .unwrap();
   serde_json::from_slice(&bytes).unwrap()
}
