// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stock-crossing events
//!
//! A stock update only produces an event when the old and new values differ
//! in their zero/non-zero classification.

use crate::notification::NotificationKind;

/// A stock update that crossed the zero boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockTransition {
    /// Stock went from zero to a positive level
    Restocked { stock: u32 },
    /// Stock went from a positive level to zero
    SoldOut,
}

impl StockTransition {
    /// Classify an update from `old` to `new`
    pub fn between(old: u32, new: u32) -> Option<Self> {
        match (old, new) {
            (0, n) if n > 0 => Some(Self::Restocked { stock: n }),
            (o, 0) if o > 0 => Some(Self::SoldOut),
            _ => None,
        }
    }

    pub fn kind(&self) -> NotificationKind {
        match self {
            Self::Restocked { .. } => NotificationKind::Restock,
            Self::SoldOut => NotificationKind::OutOfStock,
        }
    }

    /// Message recorded on the emitted notification
    pub fn message(&self) -> String {
        match self {
            Self::Restocked { stock } => format!("상품이 입고되었습니다. (재고: {}개)", stock),
            Self::SoldOut => "상품이 품절되었습니다.".to_string(),
        }
    }
}

#[cfg(test)]
#[path = "stock_tests.rs"]
mod tests;
