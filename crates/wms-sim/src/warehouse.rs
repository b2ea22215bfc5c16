//! 倉庫門面

use crate::{process_event, DayReport, Simulation, TransferOutcome};
use rust_decimal::Decimal;
use wms_core::{
    Event, EventKind, EventSchedule, GoodsType, Item, ItemHistory, Result, Shelf, Storage,
    Terminal, WarehouseConfig, WmsError,
};

/// 倉庫（擁有所有物品池、排程與模擬日計數器）
#[derive(Debug, Clone)]
pub struct Warehouse {
    config: WarehouseConfig,
    storage: Storage,
    deliveries: EventSchedule,
    pickups: EventSchedule,
    simulation: Simulation,
}

impl Warehouse {
    /// 依配置創建倉庫
    pub fn new(config: WarehouseConfig) -> Result<Self> {
        config.validate()?;

        let horizon = config.recurrence_horizon_days;
        Ok(Self {
            storage: Storage::new(config.terminal_capacity),
            deliveries: EventSchedule::new(EventKind::Delivery).with_horizon(horizon),
            pickups: EventSchedule::new(EventKind::Pickup).with_horizon(horizon),
            simulation: Simulation::new().with_start_date(config.start_date),
            config,
        })
    }

    /// 新增貨架
    pub fn add_shelf(
        &mut self,
        shelf_id: &str,
        capacity: usize,
        goods_type: GoodsType,
        terminal_to_shelf_cost: Decimal,
        shelf_to_terminal_cost: Decimal,
    ) {
        if !self.config.supports(goods_type) {
            tracing::warn!("倉庫未配置 {} 儲位，仍新增貨架 '{}'", goods_type, shelf_id);
        }
        if self.storage.shelf(shelf_id).is_some() {
            tracing::warn!("貨架ID '{}' 重複", shelf_id);
        }

        self.storage.shelves.push(Shelf::new(
            shelf_id.to_string(),
            capacity,
            goods_type,
            terminal_to_shelf_cost,
            shelf_to_terminal_cost,
        ));
        tracing::info!("貨架 '{}' 已加入倉庫", shelf_id);
    }

    /// 移除貨架（立即移除，不搬移其上物品）
    pub fn remove_shelf(&mut self, shelf_id: &str) -> Option<Shelf> {
        match self.storage.remove_shelf(shelf_id) {
            Some(shelf) => {
                tracing::info!("貨架 '{}' 已移除（{} 件物品隨之移除）", shelf_id, shelf.len());
                Some(shelf)
            }
            None => {
                tracing::warn!("{}", WmsError::ShelfNotFound(shelf_id.to_string()));
                None
            }
        }
    }

    /// 重新設定暫存區容量
    pub fn configure_terminal(&mut self, capacity: usize) -> Result<()> {
        self.storage.terminal.configure(capacity)
    }

    /// 新增單次進貨
    pub fn add_delivery(&mut self, day: u32, goods_type: GoodsType, quantity: u32, item_name: &str) {
        let event = Event::delivery(day, goods_type, quantity, item_name.to_string());
        self.warn_if_past(&event);
        self.deliveries.add_once(event);
        tracing::info!("已排程進貨 '{}'，第 {} 天", item_name, day);
    }

    /// 新增週期進貨，返回展開的事件數
    pub fn add_weekly_delivery(
        &mut self,
        interval_days: i64,
        day: u32,
        goods_type: GoodsType,
        quantity: u32,
        item_name: &str,
    ) -> Result<usize> {
        let event = Event::delivery(day, goods_type, quantity, item_name.to_string());
        self.warn_if_past(&event);
        let added = self.deliveries.add_weekly(interval_days, &event)?;
        tracing::info!(
            "已排程週期進貨 '{}'，每 {} 天，自第 {} 天起",
            item_name,
            interval_days,
            day
        );
        Ok(added)
    }

    /// 新增單次出貨
    pub fn add_pickup(&mut self, day: u32, goods_type: GoodsType, quantity: u32, item_name: &str) {
        let event = Event::pickup(day, goods_type, quantity, item_name.to_string());
        self.warn_if_past(&event);
        self.pickups.add_once(event);
        tracing::info!("已排程出貨 '{}'，第 {} 天", item_name, day);
    }

    /// 新增週期出貨，返回展開的事件數
    pub fn add_weekly_pickup(
        &mut self,
        interval_days: i64,
        day: u32,
        goods_type: GoodsType,
        quantity: u32,
        item_name: &str,
    ) -> Result<usize> {
        let event = Event::pickup(day, goods_type, quantity, item_name.to_string());
        self.warn_if_past(&event);
        let added = self.pickups.add_weekly(interval_days, &event)?;
        tracing::info!(
            "已排程週期出貨 '{}'，每 {} 天，自第 {} 天起",
            item_name,
            interval_days,
            day
        );
        Ok(added)
    }

    /// 立即以當前模擬日處理單一事件（不經排程）
    pub fn process_event(&mut self, event: &Event) -> TransferOutcome {
        process_event(event, &mut self.storage, self.simulation.current_day())
    }

    /// 立即處理進貨事件
    pub fn process_delivery(&mut self, event: &Event) -> Result<TransferOutcome> {
        Self::expect_kind(event, EventKind::Delivery)?;
        Ok(self.process_event(event))
    }

    /// 立即處理出貨事件
    pub fn process_pickup(&mut self, event: &Event) -> Result<TransferOutcome> {
        Self::expect_kind(event, EventKind::Pickup)?;
        Ok(self.process_event(event))
    }

    fn expect_kind(event: &Event, expected: EventKind) -> Result<()> {
        if event.kind == expected {
            Ok(())
        } else {
            Err(WmsError::EventKindMismatch {
                expected,
                actual: event.kind,
            })
        }
    }

    /// 模擬 `days` 天
    pub fn run_simulation(&mut self, days: u32) -> Vec<DayReport> {
        self.simulation
            .run(days, &mut self.storage, &self.deliveries, &self.pickups)
    }

    /// 依名稱查詢物品歷史（只返回第一筆）
    pub fn item_history(&self, item_name: &str) -> Option<&Item> {
        let item = self.storage.history.find_by_name(item_name);
        if item.is_none() {
            tracing::warn!("倉庫中找不到物品 '{}'", item_name);
        }
        item
    }

    pub fn current_day(&self) -> u32 {
        self.simulation.current_day()
    }

    pub fn config(&self) -> &WarehouseConfig {
        &self.config
    }

    pub fn shelves(&self) -> &[Shelf] {
        &self.storage.shelves
    }

    pub fn shelf(&self, shelf_id: &str) -> Option<&Shelf> {
        self.storage.shelf(shelf_id)
    }

    pub fn terminal(&self) -> &Terminal {
        &self.storage.terminal
    }

    pub fn history(&self) -> &ItemHistory {
        &self.storage.history
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn deliveries(&self) -> &EventSchedule {
        &self.deliveries
    }

    pub fn pickups(&self) -> &EventSchedule {
        &self.pickups
    }

    /// 事件排在已模擬過的日子時發出警告，返回是否已過期
    fn warn_if_past(&self, event: &Event) -> bool {
        let past = event.day <= self.current_day();
        if past {
            tracing::warn!(
                "{} '{}' 排在第 {} 天，但模擬已到第 {} 天，將不會被處理",
                event.kind,
                event.template.name,
                event.day,
                self.current_day()
            );
        }
        past
    }
}
