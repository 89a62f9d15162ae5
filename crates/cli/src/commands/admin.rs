// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `kiosk admin` - Password-gated stock management

use super::{notifications, products, Context};
use crate::error::KioskError;
use crate::output::{self, OutputFormat};
use crate::session::AdminSession;
use clap::{Args, Subcommand};
use kiosk_core::ProductId;

/// Notifications shown in the admin overview
const RECENT_NOTIFICATIONS: usize = 10;

#[derive(Args)]
pub struct AdminArgs {
    /// Admin password
    #[arg(long, env = "KIOSK_ADMIN_PASSWORD", hide_env_values = true)]
    pub password: String,

    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// Set the stock level of a product
    SetStock {
        /// Product ID
        id: ProductId,
        /// New stock quantity
        stock: u32,
    },
    /// Show the full ledger and the latest notifications
    List,
}

pub fn handle(ctx: &Context, args: AdminArgs) -> anyhow::Result<()> {
    let session = AdminSession::login(&args.password, &ctx.config)?;
    match args.command {
        AdminCommand::SetStock { id, stock } => set_stock(ctx, &session, id, stock),
        AdminCommand::List => overview(ctx, &session),
    }
}

fn set_stock(
    ctx: &Context,
    _session: &AdminSession,
    id: ProductId,
    stock: u32,
) -> anyhow::Result<()> {
    if !ctx.inventory.update_stock(id, stock)? {
        return Err(KioskError::product_not_found(id).into());
    }
    match ctx.format {
        OutputFormat::Text => println!("재고가 업데이트되었습니다! ({} -> {}개)", id, stock),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "product_id": id, "stock": stock })
        ),
    }
    Ok(())
}

fn overview(ctx: &Context, _session: &AdminSession) -> anyhow::Result<()> {
    let all = ctx.inventory.load_products()?;
    let recent = ctx.inventory.recent_notifications(RECENT_NOTIFICATIONS)?;

    match ctx.format {
        OutputFormat::Text => {
            println!("전체 상품 목록");
            output::print_list(&all, ctx.format, Some(products::LIST_HEADER), "상품이 없습니다.")?;
            println!();
            println!("알림 관리");
            if recent.is_empty() {
                println!("알림이 없습니다.");
            }
            for n in &recent {
                println!(
                    "  {} - {}: {} ({})",
                    n.kind,
                    notifications::product_name(&all, n),
                    n.message,
                    n.timestamp
                );
            }
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "products": all,
                "notifications": recent,
            }))?
        ),
    }
    Ok(())
}
