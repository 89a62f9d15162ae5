// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Product rows of the catalog ledger

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a product row
pub type ProductId = u32;

/// A single catalog entry.
///
/// Field order matches the ledger's column order:
/// `id,name,category,price,stock,ingredients,allergens,sales_count,last_updated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// Price in whole won
    pub price: u32,
    pub stock: u32,
    pub ingredients: String,
    pub allergens: String,
    pub sales_count: u32,
    pub last_updated: String,
}

impl Product {
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Human-readable stock status label
    pub fn stock_label(&self) -> &'static str {
        if self.is_in_stock() {
            "재고 있음"
        } else {
            "품절"
        }
    }
}

/// Format a price with thousands separators, e.g. `1,500원`
pub fn format_price(price: u32) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}원", grouped)
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<4} {:<12} {:<6} {:>9} {} ({}개)",
            self.id,
            self.name,
            self.category,
            format_price(self.price),
            self.stock_label(),
            self.stock
        )
    }
}

#[cfg(test)]
#[path = "product_tests.rs"]
mod tests;
