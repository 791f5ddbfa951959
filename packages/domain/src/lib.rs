//! # ItemStore ドメイン層
//!
//! ItemStore が扱うエンティティを定義する。
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層に依存しない。
//!
//! ## モジュール構成
//!
//! - [`item`] - Item エンティティと識別子

pub mod item;
