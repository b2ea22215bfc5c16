//! 進貨處理

use crate::{ShortfallReason, TransferOutcome, TransferStatus};
use wms_core::{Event, Item, LocationEvent, Storage};

/// 進貨處理器
///
/// 流程：
/// 1. 依模板產生 `quantity` 個實體物品，逐一卸至暫存區（已滿則丟棄）
/// 2. 依貨架順序，將暫存區最前面的物品搬上同類型貨架
/// 3. 暫存區提前清空時立即停止；貨架空間不足時剩餘物品留在暫存區
pub struct DeliveryProcessor;

impl DeliveryProcessor {
    /// 處理進貨事件
    pub fn process(event: &Event, storage: &mut Storage, day: u32) -> TransferOutcome {
        let mut outcome = TransferOutcome::new(event, day);
        if event.quantity == 0 {
            return outcome;
        }

        tracing::debug!(
            "處理進貨：{} x{}（{}）",
            event.template.name,
            event.quantity,
            event.goods_type
        );

        let Storage {
            terminal,
            shelves,
            history,
        } = storage;

        // Step 1: 產生物品並卸至暫存區
        // 不預先檢查暫存區空間，被丟棄的物品仍留有歷史記錄
        for sequence in 1..=event.quantity {
            let item = Item::new(
                event.template.unit_name(sequence),
                event.template.goods_type,
            );
            let id = history.register(item);
            if terminal.add(id).is_err() {
                outcome.dropped += 1;
            }
            history.record(id, LocationEvent::AddedToTerminal { day });
        }

        if outcome.dropped > 0 {
            tracing::warn!(
                "暫存區已滿，進貨 {} 丟棄 {} 件",
                event.template.name,
                outcome.dropped
            );
        }

        // Step 2: 上架
        let mut remaining = event.quantity;
        for shelf in shelves
            .iter_mut()
            .filter(|shelf| shelf.accepts(event.goods_type))
        {
            let space = u32::try_from(shelf.free_space()).unwrap_or(u32::MAX);
            let to_transfer = remaining.min(space);

            for _ in 0..to_transfer {
                let Some(id) = terminal.pop_front() else {
                    tracing::warn!(
                        "暫存區物品不足，進貨 {} 尚有 {} 件未上架",
                        event.template.name,
                        remaining
                    );
                    outcome.transferred = event.quantity - remaining;
                    outcome.status = TransferStatus::Partial(ShortfallReason::TerminalExhausted);
                    return outcome;
                };

                if shelf.add(id).is_err() {
                    outcome.dropped += 1;
                    continue;
                }
                history.record(
                    id,
                    LocationEvent::MovedToShelf {
                        day,
                        shelf_id: shelf.id.clone(),
                    },
                );
                outcome.elapsed_cost += shelf.terminal_to_shelf_cost;
                remaining -= 1;
            }

            if remaining == 0 {
                break;
            }
        }

        outcome.transferred = event.quantity - remaining;
        if remaining > 0 {
            tracing::warn!(
                "{} 貨架空間不足，進貨 {} 只上架 {} / {} 件",
                event.goods_type,
                event.template.name,
                outcome.transferred,
                event.quantity
            );
            outcome.status = TransferStatus::Partial(ShortfallReason::ShelfSpaceExhausted);
        } else {
            tracing::debug!("進貨 {} 處理完成", event.template.name);
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use wms_core::{GoodsType, Shelf};

    fn storage_with_shelves(terminal_capacity: usize, shelves: &[(&str, usize, GoodsType)]) -> Storage {
        let mut storage = Storage::new(terminal_capacity);
        for &(id, capacity, goods_type) in shelves {
            storage.shelves.push(Shelf::new(
                id.to_string(),
                capacity,
                goods_type,
                Decimal::from(2),
                Decimal::ONE,
            ));
        }
        storage
    }

    #[test]
    fn test_zero_quantity_is_noop() {
        let mut storage = storage_with_shelves(10, &[("A1", 5, GoodsType::DryGoods)]);
        let event = Event::delivery(1, GoodsType::DryGoods, 0, "Rice".to_string());

        let outcome = DeliveryProcessor::process(&event, &mut storage, 1);

        assert!(outcome.is_completed());
        assert_eq!(outcome.transferred, 0);
        assert!(storage.terminal.is_empty());
        assert!(storage.shelves[0].is_empty());
        assert!(storage.history.is_empty());
    }

    #[test]
    fn test_full_delivery() {
        let mut storage = storage_with_shelves(10, &[("A1", 5, GoodsType::DryGoods)]);
        let event = Event::delivery(1, GoodsType::DryGoods, 4, "Rice".to_string());

        let outcome = DeliveryProcessor::process(&event, &mut storage, 1);

        assert!(outcome.is_completed());
        assert_eq!(outcome.transferred, 4);
        assert_eq!(outcome.elapsed_cost, Decimal::from(8));
        assert_eq!(storage.shelves[0].len(), 4);
        assert!(storage.terminal.is_empty());

        let names: Vec<String> = storage.shelves[0]
            .snapshot()
            .into_iter()
            .map(|id| storage.history.name_of(id))
            .collect();
        assert_eq!(names, vec!["Rice_1", "Rice_2", "Rice_3", "Rice_4"]);
    }

    #[test]
    fn test_partial_delivery_leaves_rest_in_terminal() {
        let mut storage = storage_with_shelves(10, &[("A1", 3, GoodsType::DryGoods)]);
        let event = Event::delivery(1, GoodsType::DryGoods, 5, "Rice".to_string());

        let outcome = DeliveryProcessor::process(&event, &mut storage, 1);

        assert_eq!(
            outcome.status,
            TransferStatus::Partial(ShortfallReason::ShelfSpaceExhausted)
        );
        assert_eq!(outcome.transferred, 3);
        assert_eq!(outcome.remaining(), 2);
        assert_eq!(storage.shelves[0].len(), 3);
        assert_eq!(storage.terminal.len(), 2);
    }

    #[rstest]
    #[case(10, 10, 5, 5, 0, TransferStatus::Completed)]
    #[case(3, 10, 5, 3, 2, TransferStatus::Partial(ShortfallReason::ShelfSpaceExhausted))]
    #[case(10, 2, 5, 2, 0, TransferStatus::Partial(ShortfallReason::TerminalExhausted))]
    #[case(0, 0, 5, 0, 0, TransferStatus::Partial(ShortfallReason::ShelfSpaceExhausted))]
    fn test_delivery_capacity_matrix(
        #[case] shelf_capacity: usize,
        #[case] terminal_capacity: usize,
        #[case] quantity: u32,
        #[case] shelved: usize,
        #[case] left_in_terminal: usize,
        #[case] status: TransferStatus,
    ) {
        let mut storage =
            storage_with_shelves(terminal_capacity, &[("A1", shelf_capacity, GoodsType::DryGoods)]);
        let event = Event::delivery(1, GoodsType::DryGoods, quantity, "Rice".to_string());

        let outcome = DeliveryProcessor::process(&event, &mut storage, 1);

        assert_eq!(outcome.status, status);
        assert_eq!(storage.shelves[0].len(), shelved);
        assert_eq!(storage.terminal.len(), left_in_terminal);
        assert_eq!(storage.history.len(), quantity as usize);
    }

    #[test]
    fn test_spills_over_to_next_matching_shelf() {
        let mut storage = storage_with_shelves(
            20,
            &[
                ("A1", 2, GoodsType::DryGoods),
                ("B1", 10, GoodsType::Refrigerated),
                ("A2", 10, GoodsType::DryGoods),
            ],
        );
        let event = Event::delivery(1, GoodsType::DryGoods, 5, "Rice".to_string());

        let outcome = DeliveryProcessor::process(&event, &mut storage, 1);

        assert!(outcome.is_completed());
        assert_eq!(storage.shelves[0].len(), 2);
        assert!(storage.shelves[1].is_empty());
        assert_eq!(storage.shelves[2].len(), 3);
    }

    #[test]
    fn test_terminal_overflow_drops_units_but_keeps_history() {
        let mut storage = storage_with_shelves(3, &[("A1", 10, GoodsType::DryGoods)]);
        let event = Event::delivery(1, GoodsType::DryGoods, 5, "Rice".to_string());

        let outcome = DeliveryProcessor::process(&event, &mut storage, 1);

        assert_eq!(outcome.dropped, 2);
        assert_eq!(outcome.transferred, 3);
        assert_eq!(
            outcome.status,
            TransferStatus::Partial(ShortfallReason::TerminalExhausted)
        );
        assert_eq!(storage.shelves[0].len(), 3);
        assert_eq!(storage.history.len(), 5);

        let dropped = storage.history.find_by_name("Rice_5").unwrap();
        assert_eq!(
            dropped.location_history,
            vec![LocationEvent::AddedToTerminal { day: 1 }]
        );
    }

    #[test]
    fn test_takes_oldest_terminal_items_first() {
        let mut storage = storage_with_shelves(10, &[("A1", 0, GoodsType::DryGoods)]);
        let first = Event::delivery(1, GoodsType::DryGoods, 2, "Flour".to_string());
        DeliveryProcessor::process(&first, &mut storage, 1);
        assert_eq!(storage.terminal.len(), 2);

        storage.shelves.push(Shelf::new(
            "A2".to_string(),
            2,
            GoodsType::DryGoods,
            Decimal::ONE,
            Decimal::ONE,
        ));
        let second = Event::delivery(2, GoodsType::DryGoods, 2, "Rice".to_string());
        let outcome = DeliveryProcessor::process(&second, &mut storage, 2);

        assert!(outcome.is_completed());
        let shelved: Vec<String> = storage.shelves[1]
            .snapshot()
            .into_iter()
            .map(|id| storage.history.name_of(id))
            .collect();
        assert_eq!(shelved, vec!["Flour_1", "Flour_2"]);
        assert_eq!(storage.terminal.len(), 2);
    }

    #[test]
    fn test_no_matching_shelf() {
        let mut storage = storage_with_shelves(10, &[("B1", 10, GoodsType::Refrigerated)]);
        let event = Event::delivery(1, GoodsType::Hazardous, 3, "Acid".to_string());

        let outcome = DeliveryProcessor::process(&event, &mut storage, 1);

        assert_eq!(outcome.transferred, 0);
        assert!(outcome.is_partial());
        assert_eq!(storage.terminal.len(), 3);
    }
}
