//! # WMS Core
//!
//! 倉儲模擬核心資料模型與類型定義

pub mod config;
pub mod event;
pub mod goods;
pub mod history;
pub mod item;
pub mod pool;
pub mod schedule;
pub mod storage;

// Re-export 主要類型
pub use config::WarehouseConfig;
pub use event::{Event, EventKind, ItemTemplate};
pub use goods::GoodsType;
pub use history::ItemHistory;
pub use item::{Item, LocationEvent};
pub use pool::{ItemPool, Shelf, Terminal};
pub use schedule::{EventSchedule, DEFAULT_RECURRENCE_HORIZON_DAYS};
pub use storage::Storage;

/// 倉儲錯誤類型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WmsError {
    #[error("{pool} 已達容量上限，無法放入物品 '{item}'")]
    CapacityExceeded { pool: String, item: String },

    #[error("{pool} 中找不到物品 '{item}'")]
    ItemNotFound { pool: String, item: String },

    #[error("無效的週期間隔: {0} 天（必須大於 0）")]
    InvalidRecurrence(i64),

    #[error("無效的倉庫配置: {0}")]
    InvalidConfig(String),

    #[error("找不到貨架: {0}")]
    ShelfNotFound(String),

    #[error("事件類型不符：預期 {expected}，實際為 {actual}")]
    EventKindMismatch {
        expected: EventKind,
        actual: EventKind,
    },

    #[error("序列化錯誤: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for WmsError {
    fn from(err: serde_json::Error) -> Self {
        WmsError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WmsError>;
