//! # Item エンティティ
//!
//! ItemStore が管理する唯一のエンティティ。
//!
//! ## ライフサイクル
//!
//! - 作成: `POST /api/items` で [`NewItem`] を永続化し、DB が `id` を採番する
//! - 更新・削除: API からは行わない（DB の運用作業でのみ削除される）
//!
//! ## 不変条件
//!
//! - `id` は DB が単調増加で採番し、一意かつ不変
//! - `name` には一意性・書式の制約を課さない
//!
//! ## 使用例
//!
//! ```rust
//! use itemstore_domain::item::{Item, ItemId, NewItem};
//!
//! let new_item = NewItem::new("foo");
//! let item = Item::from_db(ItemId::from_i32(1), new_item.name().to_string());
//! assert_eq!(item.id().as_i32(), 1);
//! assert_eq!(item.name(), "foo");
//! ```

use std::fmt;

/// Item の一意識別子
///
/// DB の `SERIAL` 列で採番される整数をラップする。
/// アプリケーション側で生成することはない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(i32);

impl ItemId {
   /// DB から取得した値で ItemId を作成する
   pub fn from_i32(value: i32) -> Self {
      Self(value)
   }

   /// 内部の整数値を取得する
   pub fn as_i32(&self) -> i32 {
      self.0
   }
}

impl fmt::Display for ItemId {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "{}", self.0)
   }
}

/// 永続化済みの Item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
   id:   ItemId,
   name: String,
}

impl Item {
   /// DB の行から Item を復元する
   pub fn from_db(id: ItemId, name: String) -> Self {
      Self { id, name }
   }

   pub fn id(&self) -> ItemId {
      self.id
   }

   pub fn name(&self) -> &str {
      &self.name
   }
}

/// 未永続化の Item（`id` 採番前）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
   name: String,
}

impl NewItem {
   pub fn new(name: impl Into<String>) -> Self {
      Self { name: name.into() }
   }

   pub fn name(&self) -> &str {
      &self.name
   }
}
