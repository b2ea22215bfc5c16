//! 物品歷史記錄

use crate::{Item, LocationEvent};
use std::collections::HashMap;
use uuid::Uuid;

/// 物品歷史記錄
///
/// 所有曾經產生的物品都保存在這裡，出庫後也不刪除。
/// 貨架與暫存區只持有物品ID。
#[derive(Debug, Clone, Default)]
pub struct ItemHistory {
    items: Vec<Item>,
    index: HashMap<Uuid, usize>,
}

impl ItemHistory {
    /// 創建空的歷史記錄
    pub fn new() -> Self {
        Self::default()
    }

    /// 登記新物品，返回其ID
    pub fn register(&mut self, item: Item) -> Uuid {
        let id = item.id;
        self.index.insert(id, self.items.len());
        self.items.push(item);
        id
    }

    /// 為物品追加位置事件
    pub fn record(&mut self, id: Uuid, event: LocationEvent) {
        match self.index.get(&id) {
            Some(&pos) => self.items[pos].record(event),
            None => tracing::warn!("歷史記錄中找不到物品 {}，忽略位置事件", id),
        }
    }

    /// 依ID查詢
    pub fn get(&self, id: Uuid) -> Option<&Item> {
        self.index.get(&id).map(|&pos| &self.items[pos])
    }

    /// 依名稱查詢（只返回第一筆符合的物品）
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    /// 物品名稱（找不到時返回ID字串）
    pub fn name_of(&self, id: Uuid) -> String {
        self.get(id)
            .map(|item| item.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// 已記錄物品數量
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 依登記順序迭代
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}
