//! 逐日模擬驅動

use crate::{process_event, DayReport};
use chrono::{Days, NaiveDate};
use wms_core::{EventSchedule, Storage};

/// 模擬驅動（唯一的模擬日計數器）
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    current_day: u32,
    start_date: Option<NaiveDate>,
}

impl Simulation {
    /// 創建新的模擬，從第 0 天開始
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置模擬起始日
    pub fn with_start_date(mut self, start_date: Option<NaiveDate>) -> Self {
        self.start_date = start_date;
        self
    }

    /// 已模擬到的日數
    pub fn current_day(&self) -> u32 {
        self.current_day
    }

    /// 當前模擬日對應的日期
    pub fn current_date(&self) -> Option<NaiveDate> {
        self.start_date?
            .checked_add_days(Days::new(u64::from(self.current_day)))
    }

    /// 模擬一天：先處理當日進貨，再處理當日出貨
    pub fn simulate_day(
        &mut self,
        storage: &mut Storage,
        deliveries: &EventSchedule,
        pickups: &EventSchedule,
    ) -> DayReport {
        self.current_day += 1;
        let day = self.current_day;

        let delivery_outcomes: Vec<_> = deliveries
            .due_on(day)
            .map(|event| process_event(event, storage, day))
            .collect();

        let pickup_outcomes: Vec<_> = pickups
            .due_on(day)
            .map(|event| process_event(event, storage, day))
            .collect();

        let report = DayReport::capture(
            day,
            self.current_date(),
            delivery_outcomes,
            pickup_outcomes,
            storage,
        );

        tracing::info!(
            "第 {} 天模擬完成：進貨 {} 筆，出貨 {} 筆，貨架存量 {}，暫存區 {}",
            day,
            report.deliveries.len(),
            report.pickups.len(),
            storage.shelved_count(),
            report.terminal_count
        );

        report
    }

    /// 從當前模擬日起再模擬 `days` 天
    pub fn run(
        &mut self,
        days: u32,
        storage: &mut Storage,
        deliveries: &EventSchedule,
        pickups: &EventSchedule,
    ) -> Vec<DayReport> {
        (0..days)
            .map(|_| self.simulate_day(storage, deliveries, pickups))
            .collect()
    }
}
