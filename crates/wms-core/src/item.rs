//! 物品模型

use crate::GoodsType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 物品位置事件（依模擬日記錄）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationEvent {
    /// 卸貨至碼頭暫存區
    AddedToTerminal { day: u32 },
    /// 從暫存區上架
    MovedToShelf { day: u32, shelf_id: String },
    /// 從貨架下架回暫存區
    MovedToTerminal { day: u32, shelf_id: String },
    /// 出庫
    SentOut { day: u32 },
}

impl LocationEvent {
    /// 事件發生的模擬日
    pub fn day(&self) -> u32 {
        match self {
            LocationEvent::AddedToTerminal { day }
            | LocationEvent::MovedToShelf { day, .. }
            | LocationEvent::MovedToTerminal { day, .. }
            | LocationEvent::SentOut { day } => *day,
        }
    }

    /// 以物品名稱描述事件
    pub fn describe(&self, item_name: &str) -> String {
        match self {
            LocationEvent::AddedToTerminal { .. } => format!("{item_name} added to Terminal"),
            LocationEvent::MovedToShelf { shelf_id, .. } => {
                format!("{item_name} moved from terminal to Shelf: {shelf_id}")
            }
            LocationEvent::MovedToTerminal { shelf_id, .. } => {
                format!("{item_name} moved to Terminal from Shelf: {shelf_id}")
            }
            LocationEvent::SentOut { .. } => {
                format!("{item_name} has been sent out of the warehouse")
            }
        }
    }
}

/// 物品（每個實體單位一筆，不去重）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// 實體ID（同名物品以此區分）
    pub id: Uuid,

    /// 物品名稱
    pub name: String,

    /// 貨物類型
    pub goods_type: GoodsType,

    /// 位置歷史（只追加）
    pub location_history: Vec<LocationEvent>,
}

impl Item {
    /// 創建新的物品
    pub fn new(name: String, goods_type: GoodsType) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            goods_type,
            location_history: Vec::new(),
        }
    }

    /// 追加位置事件
    pub fn record(&mut self, event: LocationEvent) {
        self.location_history.push(event);
    }

    /// 最後已知位置
    pub fn last_location(&self) -> Option<&LocationEvent> {
        self.location_history.last()
    }

    /// 是否已出庫
    pub fn is_shipped(&self) -> bool {
        matches!(self.last_location(), Some(LocationEvent::SentOut { .. }))
    }

    /// 可讀的位置歷史
    pub fn history_lines(&self) -> Vec<String> {
        self.location_history
            .iter()
            .map(|event| event.describe(&self.name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_item() {
        let item = Item::new("Rice_1".to_string(), GoodsType::DryGoods);

        assert_eq!(item.name, "Rice_1");
        assert_eq!(item.goods_type, GoodsType::DryGoods);
        assert!(item.location_history.is_empty());
        assert!(!item.is_shipped());
    }

    #[test]
    fn test_items_with_same_name_are_distinct() {
        let a = Item::new("Milk_1".to_string(), GoodsType::Refrigerated);
        let b = Item::new("Milk_1".to_string(), GoodsType::Refrigerated);

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_history_lines() {
        let mut item = Item::new("Rice_7".to_string(), GoodsType::DryGoods);
        item.record(LocationEvent::AddedToTerminal { day: 1 });
        item.record(LocationEvent::MovedToShelf {
            day: 1,
            shelf_id: "A1".to_string(),
        });
        item.record(LocationEvent::SentOut { day: 2 });

        assert_eq!(
            item.history_lines(),
            vec![
                "Rice_7 added to Terminal".to_string(),
                "Rice_7 moved from terminal to Shelf: A1".to_string(),
                "Rice_7 has been sent out of the warehouse".to_string(),
            ]
        );
        assert_eq!(item.last_location().map(LocationEvent::day), Some(2));
        assert!(item.is_shipped());
    }
}
