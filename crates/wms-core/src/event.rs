//! 進出貨事件模型

use crate::GoodsType;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 事件類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// 進貨
    Delivery,
    /// 出貨
    Pickup,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Delivery => f.write_str("delivery"),
            EventKind::Pickup => f.write_str("pickup"),
        }
    }
}

/// 物品模板（處理時依此產生實體物品）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTemplate {
    pub name: String,
    pub goods_type: GoodsType,
}

impl ItemTemplate {
    pub fn new(name: String, goods_type: GoodsType) -> Self {
        Self { name, goods_type }
    }

    /// 第 `sequence` 個實體單位的名稱（從 1 開始）
    pub fn unit_name(&self, sequence: u32) -> String {
        format!("{}_{}", self.name, sequence)
    }
}

/// 排程事件（建立後不可變）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// 事件類型
    pub kind: EventKind,

    /// 模擬日
    pub day: u32,

    /// 貨物類型
    pub goods_type: GoodsType,

    /// 數量
    pub quantity: u32,

    /// 物品模板
    pub template: ItemTemplate,
}

impl Event {
    /// 創建新的事件
    pub fn new(
        kind: EventKind,
        day: u32,
        goods_type: GoodsType,
        quantity: u32,
        template: ItemTemplate,
    ) -> Self {
        Self {
            kind,
            day,
            goods_type,
            quantity,
            template,
        }
    }

    /// 創建進貨事件（模板貨物類型與事件相同）
    pub fn delivery(day: u32, goods_type: GoodsType, quantity: u32, item_name: String) -> Self {
        Self::new(
            EventKind::Delivery,
            day,
            goods_type,
            quantity,
            ItemTemplate::new(item_name, goods_type),
        )
    }

    /// 創建出貨事件
    pub fn pickup(day: u32, goods_type: GoodsType, quantity: u32, item_name: String) -> Self {
        Self::new(
            EventKind::Pickup,
            day,
            goods_type,
            quantity,
            ItemTemplate::new(item_name, goods_type),
        )
    }

    /// 同一事件改到另一天（週期展開用）
    pub fn on_day(&self, day: u32) -> Self {
        Self {
            day,
            ..self.clone()
        }
    }

    /// 依模擬起始日計算實際日期
    pub fn due_date(&self, start_date: NaiveDate) -> Option<NaiveDate> {
        start_date.checked_add_days(Days::new(u64::from(self.day)))
    }
}
