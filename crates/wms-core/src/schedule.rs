//! 事件排程

use crate::{Event, EventKind, Result, WmsError};

/// 週期展開的預設時界（1000 週）
pub const DEFAULT_RECURRENCE_HORIZON_DAYS: u32 = 7 * 1000;

/// 事件排程（依加入順序保存，只追加）
#[derive(Debug, Clone)]
pub struct EventSchedule {
    kind: EventKind,
    horizon_days: u32,
    events: Vec<Event>,
}

impl EventSchedule {
    /// 創建空的排程
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            horizon_days: DEFAULT_RECURRENCE_HORIZON_DAYS,
            events: Vec::new(),
        }
    }

    /// 建構器模式：設置週期展開時界
    pub fn with_horizon(mut self, horizon_days: u32) -> Self {
        self.horizon_days = horizon_days;
        self
    }

    /// 加入單次事件
    pub fn add_once(&mut self, event: Event) {
        tracing::debug!(
            "排程 {}：'{}' x{} 於第 {} 天",
            self.kind,
            event.template.name,
            event.quantity,
            event.day
        );
        self.events.push(event);
    }

    /// 加入週期事件
    ///
    /// 從 `template.day` 起每隔 `interval_days` 天展開一次，直到時界為止。
    /// 返回展開的事件數量；間隔不為正時不修改排程。
    pub fn add_weekly(&mut self, interval_days: i64, template: &Event) -> Result<usize> {
        if interval_days <= 0 {
            return Err(WmsError::InvalidRecurrence(interval_days));
        }

        let step = interval_days.unsigned_abs();
        let horizon = u64::from(self.horizon_days);
        let mut day = u64::from(template.day);
        let mut added = 0;

        while day <= horizon {
            // day <= horizon_days，不會溢出 u32
            self.events.push(template.on_day(day as u32));
            added += 1;
            day += step;
        }

        tracing::debug!(
            "週期排程 {}：'{}' 每 {} 天，自第 {} 天起展開 {} 筆",
            self.kind,
            template.template.name,
            interval_days,
            template.day,
            added
        );

        Ok(added)
    }

    /// 指定模擬日到期的事件（依加入順序，不消耗排程）
    pub fn due_on(&self, day: u32) -> impl Iterator<Item = &Event> + '_ {
        self.events.iter().filter(move |event| event.day == day)
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
