// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Derived catalog views: filtering, ordering and sales statistics
//!
//! These are pure functions over a loaded catalog; nothing here is persisted.

use crate::product::Product;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Stock availability filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StockFilter {
    #[default]
    All,
    InStock,
    SoldOut,
}

impl StockFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::InStock => product.stock > 0,
            Self::SoldOut => product.stock == 0,
        }
    }
}

/// Listing order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Best sellers first
    #[default]
    Popular,
    PriceAsc,
    PriceDesc,
    Name,
    /// By category, then name
    Category,
}

/// Category and stock filters applied together
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    /// `None` selects every category
    pub category: Option<String>,
    pub stock: StockFilter,
    pub order: SortOrder,
}

impl CatalogQuery {
    /// Filter then sort. Sorting is stable so ties keep ledger order.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut selected: Vec<Product> = products
            .iter()
            .filter(|p| self.category.as_deref().is_none_or(|c| p.category == c))
            .filter(|p| self.stock.matches(p))
            .cloned()
            .collect();
        sort(&mut selected, self.order);
        selected
    }
}

pub fn sort(products: &mut [Product], order: SortOrder) {
    match order {
        SortOrder::Popular => products.sort_by(|a, b| b.sales_count.cmp(&a.sales_count)),
        SortOrder::PriceAsc => products.sort_by_key(|p| p.price),
        SortOrder::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOrder::Name => products.sort_by(|a, b| a.name.cmp(&b.name)),
        SortOrder::Category => products.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then_with(|| a.name.cmp(&b.name))
        }),
    }
}

/// Sorted distinct categories
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut names: Vec<String> = products.iter().map(|p| p.category.clone()).collect();
    names.sort();
    names.dedup();
    names
}

/// Top `limit` products by sales, best first
pub fn popular(products: &[Product], limit: usize) -> Vec<Product> {
    let mut ranked = products.to_vec();
    sort(&mut ranked, SortOrder::Popular);
    ranked.truncate(limit);
    ranked
}

/// Per-category sales summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub category: String,
    pub total_sales: u64,
    /// Mean price rounded to the nearest won
    pub average_price: u32,
}

impl fmt::Display for CategoryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<8} 판매량 {:>6}  평균 가격 {}",
            self.category,
            self.total_sales,
            crate::product::format_price(self.average_price)
        )
    }
}

/// Sales totals and mean price per category, ordered by category name
pub fn category_stats(products: &[Product]) -> Vec<CategoryStats> {
    let mut groups: BTreeMap<&str, (u64, u64, u64)> = BTreeMap::new();
    for p in products {
        let entry = groups.entry(p.category.as_str()).or_default();
        entry.0 += u64::from(p.sales_count);
        entry.1 += u64::from(p.price);
        entry.2 += 1;
    }

    groups
        .into_iter()
        .map(|(category, (sales, price_sum, count))| CategoryStats {
            category: category.to_string(),
            total_sales: sales,
            average_price: rounded_mean(price_sum, count),
        })
        .collect()
}

fn rounded_mean(sum: u64, count: u64) -> u32 {
    if count == 0 {
        return 0;
    }
    let mean = (sum as f64 / count as f64).round_ties_even();
    mean as u32
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
