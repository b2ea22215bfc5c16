//! 倉儲資源狀態

use crate::{ItemHistory, Shelf, Terminal};

/// 倉庫擁有的所有物品池與歷史記錄
///
/// 搬運演算法直接在這裡修改狀態；欄位公開以便同時借用不同部分。
#[derive(Debug, Clone)]
pub struct Storage {
    /// 碼頭暫存區
    pub terminal: Terminal,

    /// 貨架（依加入順序）
    pub shelves: Vec<Shelf>,

    /// 物品歷史記錄
    pub history: ItemHistory,
}

impl Storage {
    /// 創建空的倉儲狀態
    pub fn new(terminal_capacity: usize) -> Self {
        Self {
            terminal: Terminal::new(terminal_capacity),
            shelves: Vec::new(),
            history: ItemHistory::new(),
        }
    }

    /// 依ID查詢貨架（重複ID時返回第一個）
    pub fn shelf(&self, shelf_id: &str) -> Option<&Shelf> {
        self.shelves.iter().find(|shelf| shelf.id == shelf_id)
    }

    /// 移除貨架（不搬移其上的物品），返回被移除的貨架
    pub fn remove_shelf(&mut self, shelf_id: &str) -> Option<Shelf> {
        let pos = self.shelves.iter().position(|shelf| shelf.id == shelf_id)?;
        Some(self.shelves.remove(pos))
    }

    /// 所有貨架上的物品總數
    pub fn shelved_count(&self) -> usize {
        self.shelves.iter().map(Shelf::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GoodsType;
    use rust_decimal::Decimal;

    fn shelf(id: &str) -> Shelf {
        Shelf::new(id.to_string(), 10, GoodsType::DryGoods, Decimal::ONE, Decimal::ONE)
    }

    #[test]
    fn test_remove_shelf() {
        let mut storage = Storage::new(100);
        storage.shelves.push(shelf("A1"));
        storage.shelves.push(shelf("A2"));

        let removed = storage.remove_shelf("A1").unwrap();
        assert_eq!(removed.id, "A1");
        assert!(storage.shelf("A1").is_none());
        assert!(storage.shelf("A2").is_some());
    }

    #[test]
    fn test_remove_unknown_shelf_is_noop() {
        let mut storage = Storage::new(100);
        storage.shelves.push(shelf("A1"));

        assert!(storage.remove_shelf("Z9").is_none());
        assert_eq!(storage.shelves.len(), 1);
    }
}
