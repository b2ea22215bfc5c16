//! 倉儲模擬示例程式

use anyhow::Context;
use rust_decimal::Decimal;
use wms_core::{GoodsType, WarehouseConfig};
use wms_sim::Warehouse;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    // 可用第一個參數指定 JSON 配置檔
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("無法讀取配置檔 {path}"))?;
            WarehouseConfig::from_json_str(&json)?
        }
        None => WarehouseConfig::new()
            .with_cool_storage(true)
            .with_dry_storage(true)
            .with_hazardous(false)
            .with_terminal_capacity(1000),
    };

    let mut warehouse = Warehouse::new(config)?;

    warehouse.add_shelf("A1", 500, GoodsType::DryGoods, Decimal::ONE, Decimal::ONE);
    warehouse.add_shelf("A2", 500, GoodsType::DryGoods, Decimal::ONE, Decimal::ONE);
    warehouse.add_shelf("B1", 500, GoodsType::Refrigerated, Decimal::ONE, Decimal::ONE);

    warehouse.add_delivery(1, GoodsType::DryGoods, 200, "Rice");
    warehouse.add_delivery(3, GoodsType::Refrigerated, 150, "Milk");

    warehouse.add_pickup(2, GoodsType::DryGoods, 150, "Rice");
    warehouse.add_pickup(4, GoodsType::Refrigerated, 140, "Milk");

    warehouse.add_weekly_delivery(7, 7, GoodsType::DryGoods, 250, "Rice")?;
    warehouse.add_weekly_pickup(7, 7, GoodsType::DryGoods, 200, "Rice")?;
    warehouse.add_weekly_delivery(7, 7, GoodsType::Refrigerated, 250, "Milk")?;

    for report in warehouse.run_simulation(5) {
        println!("{report}\n");
    }

    match warehouse.item_history("Rice_100") {
        Some(item) => {
            println!("History for item '{}':", item.name);
            for line in item.history_lines() {
                println!("  - {line}");
            }
        }
        None => println!("Item 'Rice_100' not found in the warehouse."),
    }

    Ok(())
}
