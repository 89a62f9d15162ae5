// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification records kept in the notification log

use crate::product::ProductId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a notification record
pub type NotificationId = u64;

/// What a notification is about.
///
/// Serialized as the labels shown to shop staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationKind {
    #[serde(rename = "입고")]
    Restock,
    #[serde(rename = "품절")]
    OutOfStock,
    #[serde(rename = "입고 요청")]
    RestockRequest,
}

impl NotificationKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Restock => "입고",
            Self::OutOfStock => "품절",
            Self::RestockRequest => "입고 요청",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A persisted event record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub product_id: ProductId,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
    pub timestamp: String,
    #[serde(default)]
    pub read: bool,
}

impl Notification {
    /// Message for a customer asking to be told when a product is back
    pub fn restock_request_message(product_name: &str) -> String {
        format!("{} 입고 알림을 신청하셨습니다.", product_name)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.read { " " } else { "*" };
        write!(
            f,
            "{}{:<4} [{}] #{} {} ({})",
            marker, self.id, self.kind, self.product_id, self.message, self.timestamp
        )
    }
}

#[cfg(test)]
#[path = "notification_tests.rs"]
mod tests;
