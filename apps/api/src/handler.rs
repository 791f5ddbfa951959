//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、1 リクエストにつき SQL は 1 本
//!
//! ## モジュール構成
//!
//! ```text
//! handler.rs          # 親モジュール（re-export）
//! └── handler/
//!     ├── health.rs   # GET /health
//!     ├── item.rs     # GET/POST /api/items
//!     └── root.rs     # GET /
//! ```

pub mod health;
pub mod item;
pub mod root;

pub use health::{HealthResponse, HealthState, health_check};
pub use item::{CreateItemRequest, ItemDto, ItemState, create_item, list_items};
pub use root::{RootResponse, root};
