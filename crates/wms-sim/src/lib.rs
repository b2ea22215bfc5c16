//! # WMS Simulation Engine
//!
//! 進出貨搬運演算法、逐日模擬驅動與倉庫門面

pub mod delivery;
pub mod pickup;
pub mod report;
pub mod simulation;
pub mod warehouse;

// Re-export 主要類型
pub use delivery::DeliveryProcessor;
pub use pickup::PickupProcessor;
pub use report::{DayReport, ShelfSnapshot};
pub use simulation::Simulation;
pub use warehouse::Warehouse;

use rust_decimal::Decimal;
use serde::Serialize;
use wms_core::{Event, EventKind, GoodsType, Storage};

/// 未完成原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShortfallReason {
    /// 上架途中暫存區已空
    TerminalExhausted,
    /// 同類型貨架空間不足，剩餘物品留在暫存區
    ShelfSpaceExhausted,
    /// 貨架庫存不足
    ShelfStockExhausted,
}

/// 事件處理狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransferStatus {
    /// 全數完成
    Completed,
    /// 部分完成（已完成的搬運不回滾）
    Partial(ShortfallReason),
}

/// 單一事件的處理結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferOutcome {
    pub kind: EventKind,
    pub day: u32,
    pub item_name: String,
    pub goods_type: GoodsType,

    /// 要求數量
    pub requested: u32,

    /// 實際搬運數量（進貨：上架數；出貨：下架數）
    pub transferred: u32,

    /// 因暫存區已滿而丟棄的數量
    pub dropped: u32,

    /// 出庫數量（僅出貨）
    pub shipped: u32,

    /// 累計搬運成本（模擬時間，不阻塞）
    pub elapsed_cost: Decimal,

    pub status: TransferStatus,
}

impl TransferOutcome {
    /// 以事件建立空結果
    pub fn new(event: &Event, day: u32) -> Self {
        Self {
            kind: event.kind,
            day,
            item_name: event.template.name.clone(),
            goods_type: event.goods_type,
            requested: event.quantity,
            transferred: 0,
            dropped: 0,
            shipped: 0,
            elapsed_cost: Decimal::ZERO,
            status: TransferStatus::Completed,
        }
    }

    /// 未完成數量
    pub fn remaining(&self) -> u32 {
        self.requested - self.transferred
    }

    pub fn is_completed(&self) -> bool {
        self.status == TransferStatus::Completed
    }

    pub fn is_partial(&self) -> bool {
        matches!(self.status, TransferStatus::Partial(_))
    }
}

/// 依事件類型分派至對應演算法
pub fn process_event(event: &Event, storage: &mut Storage, day: u32) -> TransferOutcome {
    match event.kind {
        EventKind::Delivery => DeliveryProcessor::process(event, storage, day),
        EventKind::Pickup => PickupProcessor::process(event, storage, day),
    }
}
