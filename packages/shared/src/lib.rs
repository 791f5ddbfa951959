//! # ItemStore 共有ユーティリティ
//!
//! ItemStore の各クレートから使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, infra, api）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum への依存は持たない（HTTP レスポンスへの変換は api の責務）

pub mod error_response;
pub mod observability;

pub use error_response::ErrorResponse;
