//! 容量受限的物品池（碼頭暫存區、貨架）

use crate::{GoodsType, Result, WmsError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use uuid::Uuid;

/// 有容量上限的物品池，保持先進先出順序
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ItemPoolRecord")]
pub struct ItemPool {
    /// 用於日誌與錯誤訊息的名稱
    label: String,

    /// 容量上限
    capacity: usize,

    /// 物品ID（依放入順序）
    items: VecDeque<Uuid>,
}

/// 反序列化用的原始欄位，經 `TryFrom` 檢查後才成為 `ItemPool`
#[derive(Deserialize)]
struct ItemPoolRecord {
    label: String,
    capacity: usize,
    items: Vec<Uuid>,
}

impl TryFrom<ItemPoolRecord> for ItemPool {
    type Error = WmsError;

    fn try_from(record: ItemPoolRecord) -> Result<Self> {
        if record.items.len() > record.capacity {
            return Err(WmsError::InvalidConfig(format!(
                "{} 物品數 {} 超過容量 {}",
                record.label,
                record.items.len(),
                record.capacity
            )));
        }

        let mut seen = HashSet::with_capacity(record.items.len());
        if let Some(dup) = record.items.iter().find(|&&id| !seen.insert(id)) {
            return Err(WmsError::InvalidConfig(format!(
                "{} 含重複物品 {}",
                record.label, dup
            )));
        }

        Ok(Self {
            label: record.label,
            capacity: record.capacity,
            items: record.items.into(),
        })
    }
}

impl ItemPool {
    /// 創建新的物品池
    pub fn new(label: String, capacity: usize) -> Self {
        Self {
            label,
            capacity,
            items: VecDeque::new(),
        }
    }

    /// 放入物品
    ///
    /// 已滿時物品被丟棄（不排隊），返回 `CapacityExceeded`。
    pub fn add(&mut self, item: Uuid) -> Result<()> {
        if self.items.len() < self.capacity {
            self.items.push_back(item);
            Ok(())
        } else {
            tracing::warn!("{} 已達容量上限 {}，丟棄物品 {}", self.label, self.capacity, item);
            Err(WmsError::CapacityExceeded {
                pool: self.label.clone(),
                item: item.to_string(),
            })
        }
    }

    /// 移除指定物品，其餘物品保持原順序
    pub fn remove(&mut self, item: Uuid) -> Result<()> {
        match self.items.iter().position(|&id| id == item) {
            Some(pos) => {
                self.items.remove(pos);
                Ok(())
            }
            None => {
                tracing::warn!("{} 中找不到物品 {}", self.label, item);
                Err(WmsError::ItemNotFound {
                    pool: self.label.clone(),
                    item: item.to_string(),
                })
            }
        }
    }

    /// 當前物品快照（不修改物品池）
    pub fn snapshot(&self) -> Vec<Uuid> {
        self.items.iter().copied().collect()
    }

    pub fn items(&self) -> &VecDeque<Uuid> {
        &self.items
    }

    /// 最早放入的物品
    pub fn front(&self) -> Option<Uuid> {
        self.items.front().copied()
    }

    /// 取出最早放入的物品
    pub fn pop_front(&mut self) -> Option<Uuid> {
        self.items.pop_front()
    }

    pub fn contains(&self, item: Uuid) -> bool {
        self.items.contains(&item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 剩餘空間
    pub fn free_space(&self) -> usize {
        self.capacity.saturating_sub(self.items.len())
    }

    pub fn is_full(&self) -> bool {
        self.free_space() == 0
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        if capacity < self.items.len() {
            return Err(WmsError::InvalidConfig(format!(
                "{} 容量 {} 小於現有物品數 {}",
                self.label,
                capacity,
                self.items.len()
            )));
        }
        self.capacity = capacity;
        Ok(())
    }
}

/// 碼頭暫存區（接受任何貨物類型）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terminal {
    pool: ItemPool,
}

impl Terminal {
    /// 創建新的暫存區
    pub fn new(capacity: usize) -> Self {
        Self {
            pool: ItemPool::new("Terminal".to_string(), capacity),
        }
    }

    /// 重新設定容量
    pub fn configure(&mut self, capacity: usize) -> Result<()> {
        self.pool.set_capacity(capacity)?;
        tracing::info!("暫存區容量已設定為 {}", capacity);
        Ok(())
    }

    pub fn add(&mut self, item: Uuid) -> Result<()> {
        self.pool.add(item)
    }

    pub fn remove(&mut self, item: Uuid) -> Result<()> {
        self.pool.remove(item)
    }

    pub fn snapshot(&self) -> Vec<Uuid> {
        self.pool.snapshot()
    }

    pub fn front(&self) -> Option<Uuid> {
        self.pool.front()
    }

    pub fn pop_front(&mut self) -> Option<Uuid> {
        self.pool.pop_front()
    }

    pub fn pool(&self) -> &ItemPool {
        &self.pool
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }
}

/// 貨架（只接受單一貨物類型）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shelf {
    /// 貨架ID
    pub id: String,

    /// 接受的貨物類型
    pub goods_type: GoodsType,

    /// 暫存區→貨架 的搬運成本（模擬時間）
    pub terminal_to_shelf_cost: Decimal,

    /// 貨架→暫存區 的搬運成本（模擬時間）
    pub shelf_to_terminal_cost: Decimal,

    pool: ItemPool,
}

impl Shelf {
    /// 創建新的貨架
    pub fn new(
        id: String,
        capacity: usize,
        goods_type: GoodsType,
        terminal_to_shelf_cost: Decimal,
        shelf_to_terminal_cost: Decimal,
    ) -> Self {
        let pool = ItemPool::new(format!("Shelf '{id}'"), capacity);
        Self {
            id,
            goods_type,
            terminal_to_shelf_cost,
            shelf_to_terminal_cost,
            pool,
        }
    }

    /// 檢查是否接受該貨物類型
    pub fn accepts(&self, goods_type: GoodsType) -> bool {
        self.goods_type == goods_type
    }

    pub fn add(&mut self, item: Uuid) -> Result<()> {
        self.pool.add(item)
    }

    pub fn remove(&mut self, item: Uuid) -> Result<()> {
        self.pool.remove(item)
    }

    pub fn snapshot(&self) -> Vec<Uuid> {
        self.pool.snapshot()
    }

    pub fn pool(&self) -> &ItemPool {
        &self.pool
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    pub fn free_space(&self) -> usize {
        self.pool.free_space()
    }
}
