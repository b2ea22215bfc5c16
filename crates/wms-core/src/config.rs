//! 倉庫配置模型

use crate::{GoodsType, Result, WmsError, DEFAULT_RECURRENCE_HORIZON_DAYS};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 倉庫靜態配置（建立倉庫後唯讀）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarehouseConfig {
    /// 是否具備冷藏儲位
    pub cool_storage: bool,

    /// 是否具備乾貨儲位
    pub dry_storage: bool,

    /// 是否可存放危險品
    pub hazardous: bool,

    /// 暫存區容量
    pub terminal_capacity: usize,

    /// 週期事件展開時界（天）
    pub recurrence_horizon_days: u32,

    /// 模擬起始日（用於將模擬日換算為日期）
    pub start_date: Option<NaiveDate>,
}

impl Default for WarehouseConfig {
    fn default() -> Self {
        Self {
            cool_storage: true,
            dry_storage: true,
            hazardous: false,
            terminal_capacity: 1000,
            recurrence_horizon_days: DEFAULT_RECURRENCE_HORIZON_DAYS,
            start_date: None,
        }
    }
}

impl WarehouseConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 從 JSON 載入並驗證
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 建構器模式：設置暫存區容量
    pub fn with_terminal_capacity(mut self, capacity: usize) -> Self {
        self.terminal_capacity = capacity;
        self
    }

    /// 建構器模式：設置冷藏儲位
    pub fn with_cool_storage(mut self, enabled: bool) -> Self {
        self.cool_storage = enabled;
        self
    }

    /// 建構器模式：設置乾貨儲位
    pub fn with_dry_storage(mut self, enabled: bool) -> Self {
        self.dry_storage = enabled;
        self
    }

    /// 建構器模式：設置危險品儲位
    pub fn with_hazardous(mut self, enabled: bool) -> Self {
        self.hazardous = enabled;
        self
    }

    /// 建構器模式：設置週期展開時界
    pub fn with_recurrence_horizon(mut self, days: u32) -> Self {
        self.recurrence_horizon_days = days;
        self
    }

    /// 建構器模式：設置模擬起始日
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// 檢查配置是否有效
    pub fn validate(&self) -> Result<()> {
        if self.recurrence_horizon_days == 0 {
            return Err(WmsError::InvalidConfig(
                "週期展開時界必須大於 0".to_string(),
            ));
        }
        Ok(())
    }

    /// 檢查倉庫是否具備該貨物類型的儲位
    pub fn supports(&self, goods_type: GoodsType) -> bool {
        match goods_type {
            GoodsType::DryGoods => self.dry_storage,
            GoodsType::Refrigerated => self.cool_storage,
            GoodsType::Hazardous => self.hazardous,
        }
    }
}
