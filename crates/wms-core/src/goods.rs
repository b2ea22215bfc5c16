//! 貨物類型

use serde::{Deserialize, Serialize};
use std::fmt;

/// 貨物類型（決定物品可以放上哪些貨架）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GoodsType {
    /// 乾貨
    DryGoods,
    /// 冷藏
    Refrigerated,
    /// 危險品
    Hazardous,
}

impl GoodsType {
    /// 所有貨物類型
    pub const ALL: [GoodsType; 3] = [
        GoodsType::DryGoods,
        GoodsType::Refrigerated,
        GoodsType::Hazardous,
    ];
}

impl fmt::Display for GoodsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GoodsType::DryGoods => "DryGoods",
            GoodsType::Refrigerated => "Refrigerated",
            GoodsType::Hazardous => "Hazardous",
        };
        f.write_str(name)
    }
}
