//! 出貨處理

use crate::{ShortfallReason, TransferOutcome, TransferStatus};
use uuid::Uuid;
use wms_core::{Event, LocationEvent, Storage};

/// 出貨處理器
///
/// 先依貨架順序把同類型物品下架到暫存區，再從暫存區最前面取出
/// `quantity` 件出庫。出庫步驟不篩選貨物類型，也不限於本次下架的物品。
pub struct PickupProcessor;

impl PickupProcessor {
    /// 處理出貨事件
    pub fn process(event: &Event, storage: &mut Storage, day: u32) -> TransferOutcome {
        let mut outcome = TransferOutcome::new(event, day);
        if event.quantity == 0 {
            return outcome;
        }

        tracing::debug!(
            "處理出貨：{} x{}（{}）",
            event.template.name,
            event.quantity,
            event.goods_type
        );

        let Storage {
            terminal,
            shelves,
            history,
        } = storage;

        // Step 1: 下架至暫存區
        let mut remaining = event.quantity;
        for shelf in shelves
            .iter_mut()
            .filter(|shelf| shelf.accepts(event.goods_type))
        {
            if remaining == 0 {
                break;
            }

            let picks: Vec<Uuid> = shelf
                .snapshot()
                .into_iter()
                .filter(|&id| {
                    history
                        .get(id)
                        .is_some_and(|item| item.goods_type == event.goods_type)
                })
                .take(remaining as usize)
                .collect();

            for id in picks {
                if shelf.remove(id).is_err() {
                    continue;
                }
                remaining -= 1;

                if terminal.add(id).is_err() {
                    outcome.dropped += 1;
                }
                history.record(
                    id,
                    LocationEvent::MovedToTerminal {
                        day,
                        shelf_id: shelf.id.clone(),
                    },
                );
                outcome.elapsed_cost += shelf.shelf_to_terminal_cost;
            }
        }
        outcome.transferred = event.quantity - remaining;

        // Step 2: 從暫存區前端出庫
        let outbound: Vec<Uuid> = terminal
            .snapshot()
            .into_iter()
            .take(event.quantity as usize)
            .collect();
        for id in outbound {
            if terminal.remove(id).is_ok() {
                history.record(id, LocationEvent::SentOut { day });
                outcome.shipped += 1;
            }
        }

        if remaining > 0 {
            tracing::warn!(
                "貨架庫存不足，出貨 {} 只下架 {} / {} 件",
                event.template.name,
                outcome.transferred,
                event.quantity
            );
            outcome.status = TransferStatus::Partial(ShortfallReason::ShelfStockExhausted);
        } else {
            tracing::debug!(
                "出貨 {} 處理完成，出庫 {} 件",
                event.template.name,
                outcome.shipped
            );
        }

        outcome
    }
}
