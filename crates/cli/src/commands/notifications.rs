// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `kiosk notifications` - Restock and sold-out alerts

use super::Context;
use crate::error::KioskError;
use crate::output::{self, OutputFormat};
use clap::{Args, Subcommand};
use kiosk_core::{Notification, NotificationId, Product};

/// Unread alerts shown above the product listing
const BANNER_LIMIT: usize = 3;

#[derive(Args)]
pub struct NotificationsArgs {
    /// Only show unread notifications
    #[arg(long)]
    pub unread: bool,

    #[command(subcommand)]
    pub command: Option<NotificationsCommand>,
}

#[derive(Subcommand)]
pub enum NotificationsCommand {
    /// Mark a notification as read
    Read {
        /// Notification ID
        id: NotificationId,
    },
}

pub fn handle(ctx: &Context, args: NotificationsArgs) -> anyhow::Result<()> {
    match args.command {
        Some(NotificationsCommand::Read { id }) => mark_read(ctx, id),
        None => list(ctx, args.unread),
    }
}

fn list(ctx: &Context, unread_only: bool) -> anyhow::Result<()> {
    let notifications = if unread_only {
        ctx.inventory.get_unread_notifications()?
    } else {
        ctx.inventory.load_notifications()?
    };
    output::print_list(&notifications, ctx.format, None, "알림이 없습니다.")
}

fn mark_read(ctx: &Context, id: NotificationId) -> anyhow::Result<()> {
    if !ctx.inventory.mark_notification_read(id)? {
        return Err(KioskError::notification_not_found(id).into());
    }
    if ctx.format == OutputFormat::Text {
        println!("알림 {}을(를) 읽음 처리했습니다.", id);
    }
    Ok(())
}

/// Name of the product a notification refers to
pub fn product_name<'a>(products: &'a [Product], notification: &Notification) -> &'a str {
    products
        .iter()
        .find(|p| p.id == notification.product_id)
        .map_or("알 수 없음", |p| p.name.as_str())
}

/// Print the unread count and the first few unread alerts, if any
pub fn print_banner(ctx: &Context) -> anyhow::Result<()> {
    let unread = ctx.inventory.get_unread_notifications()?;
    if unread.is_empty() {
        return Ok(());
    }

    let products = ctx.inventory.load_products()?;
    println!("새로운 알림 {}개", unread.len());
    for n in unread.iter().take(BANNER_LIMIT) {
        println!(
            "  [{}] {}: {} ({})",
            n.id,
            product_name(&products, n),
            n.message,
            n.timestamp
        );
    }
    println!();
    Ok(())
}
