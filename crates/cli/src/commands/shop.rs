// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `kiosk buy`, `kiosk request-restock` - Customer actions

use super::Context;
use crate::error::KioskError;
use crate::output::OutputFormat;
use kiosk_core::ProductId;
use kiosk_storage::PurchaseOutcome;

pub fn buy(ctx: &Context, id: ProductId) -> anyhow::Result<()> {
    match ctx.inventory.purchase(id)? {
        PurchaseOutcome::Purchased { remaining } => {
            match ctx.format {
                OutputFormat::Text => println!("구매 완료! (남은 재고: {}개)", remaining),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({ "product_id": id, "remaining": remaining })
                ),
            }
            Ok(())
        }
        PurchaseOutcome::SoldOut => Err(KioskError::new("품절된 상품입니다.")
            .with_suggestion(format!(
                "Ask to be notified: kiosk request-restock {}",
                id
            ))
            .into()),
        PurchaseOutcome::NotFound => Err(KioskError::product_not_found(id).into()),
    }
}

pub fn request_restock(ctx: &Context, id: ProductId) -> anyhow::Result<()> {
    let notification = ctx
        .inventory
        .request_restock(id)?
        .ok_or_else(|| KioskError::product_not_found(id))?;
    match ctx.format {
        OutputFormat::Text => println!("입고 알림이 신청되었습니다. 입고 시 알림을 드리겠습니다."),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&notification)?),
    }
    Ok(())
}
