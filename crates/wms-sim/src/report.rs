//! 每日報表

use crate::TransferOutcome;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use wms_core::{GoodsType, ItemHistory, Shelf, Storage};

/// 貨架佔用快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShelfSnapshot {
    pub shelf_id: String,
    pub goods_type: GoodsType,
    pub capacity: usize,
    pub item_count: usize,

    /// 依物品名稱分組的數量
    pub item_counts: BTreeMap<String, usize>,
}

impl ShelfSnapshot {
    /// 擷取貨架當前狀態
    pub fn capture(shelf: &Shelf, history: &ItemHistory) -> Self {
        let mut item_counts = BTreeMap::new();
        for id in shelf.pool().items() {
            *item_counts.entry(history.name_of(*id)).or_insert(0) += 1;
        }

        Self {
            shelf_id: shelf.id.clone(),
            goods_type: shelf.goods_type,
            capacity: shelf.capacity(),
            item_count: shelf.len(),
            item_counts,
        }
    }
}

/// 單日模擬報表
#[derive(Debug, Clone, Serialize)]
pub struct DayReport {
    pub day: u32,

    /// 實際日期（有設定模擬起始日時）
    pub date: Option<NaiveDate>,

    pub deliveries: Vec<TransferOutcome>,
    pub pickups: Vec<TransferOutcome>,
    pub shelves: Vec<ShelfSnapshot>,
    pub terminal_count: usize,
    pub terminal_capacity: usize,
}

impl DayReport {
    /// 以當日事件結果與倉儲狀態建立報表
    pub fn capture(
        day: u32,
        date: Option<NaiveDate>,
        deliveries: Vec<TransferOutcome>,
        pickups: Vec<TransferOutcome>,
        storage: &Storage,
    ) -> Self {
        let shelves = storage
            .shelves
            .iter()
            .map(|shelf| ShelfSnapshot::capture(shelf, &storage.history))
            .collect();

        Self {
            day,
            date,
            deliveries,
            pickups,
            shelves,
            terminal_count: storage.terminal.len(),
            terminal_capacity: storage.terminal.capacity(),
        }
    }

    /// 當日所有事件結果
    pub fn outcomes(&self) -> impl Iterator<Item = &TransferOutcome> {
        self.deliveries.iter().chain(self.pickups.iter())
    }

    /// 當日累計搬運成本
    pub fn total_cost(&self) -> Decimal {
        self.outcomes().map(|o| o.elapsed_cost).sum()
    }

    /// 是否有未完成的事件
    pub fn has_shortfall(&self) -> bool {
        self.outcomes().any(TransferOutcome::is_partial)
    }

    pub fn shelf(&self, shelf_id: &str) -> Option<&ShelfSnapshot> {
        self.shelves.iter().find(|s| s.shelf_id == shelf_id)
    }

    /// 輸出為 JSON
    pub fn to_json(&self) -> wms_core::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for DayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date {
            Some(date) => writeln!(f, "Simulation Day: {} ({})", self.day, date)?,
            None => writeln!(f, "Simulation Day: {}", self.day)?,
        }

        for outcome in self.outcomes() {
            writeln!(
                f,
                "  {} {} x{}: {} transferred, {} shipped, {} dropped, cost {} ({:?})",
                outcome.kind,
                outcome.item_name,
                outcome.requested,
                outcome.transferred,
                outcome.shipped,
                outcome.dropped,
                outcome.elapsed_cost,
                outcome.status
            )?;
        }

        writeln!(f, "Daily Shelf Report:")?;
        for shelf in &self.shelves {
            writeln!(
                f,
                "Shelf '{}' - Capacity: {}, Goods Type: {}, Items: {}",
                shelf.shelf_id, shelf.capacity, shelf.goods_type, shelf.item_count
            )?;
            if shelf.item_counts.is_empty() {
                writeln!(f, "  No items in the shelf.")?;
            }
            for (name, count) in &shelf.item_counts {
                writeln!(f, "  - {name} x{count}")?;
            }
        }

        write!(
            f,
            "Terminal: {} / {}",
            self.terminal_count, self.terminal_capacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wms_core::Item;

    #[test]
    fn test_shelf_snapshot_groups_by_name() {
        let mut storage = Storage::new(10);
        storage.shelves.push(Shelf::new(
            "A1".to_string(),
            10,
            GoodsType::DryGoods,
            Decimal::ONE,
            Decimal::ONE,
        ));
        for name in ["Rice_1", "Rice_1", "Oats_1"] {
            let id = storage
                .history
                .register(Item::new(name.to_string(), GoodsType::DryGoods));
            storage.shelves[0].add(id).unwrap();
        }

        let report = DayReport::capture(5, None, Vec::new(), Vec::new(), &storage);
        let shelf = report.shelf("A1").unwrap();

        assert_eq!(shelf.item_count, 3);
        assert_eq!(shelf.item_counts.get("Rice_1"), Some(&2));
        assert_eq!(shelf.item_counts.get("Oats_1"), Some(&1));
        assert!(!report.has_shortfall());
        assert_eq!(report.total_cost(), Decimal::ZERO);
    }

    #[test]
    fn test_report_renders_and_serializes() {
        let storage = Storage::new(10);
        let report = DayReport::capture(
            1,
            NaiveDate::from_ymd_opt(2025, 11, 2),
            Vec::new(),
            Vec::new(),
            &storage,
        );

        let text = report.to_string();
        assert!(text.starts_with("Simulation Day: 1 (2025-11-02)"));
        assert!(text.ends_with("Terminal: 0 / 10"));

        let json = report.to_json().unwrap();
        assert!(json.contains("\"terminal_capacity\": 10"));
    }
}
