// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Product ledger backed by a CSV file
//!
//! The file is UTF-8 with a leading byte-order mark and a header row. Every
//! operation loads the full catalog and every mutation rewrites it.

use crate::file::{read_optional, write_atomic, StorageError};
use kiosk_core::{seed_catalog, Clock, Product, ProductId, StockTransition, SystemClock};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Ledger column order
pub const COLUMNS: [&str; 9] = [
    "id",
    "name",
    "category",
    "price",
    "stock",
    "ingredients",
    "allergens",
    "sales_count",
    "last_updated",
];

/// Result of a simulated purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased { remaining: u32 },
    SoldOut,
    NotFound,
}

/// Receives stock updates that cross the zero boundary
pub trait StockEvents {
    fn stock_crossed(
        &self,
        product_id: ProductId,
        transition: StockTransition,
    ) -> Result<(), StorageError>;
}

/// Durable product catalog
#[derive(Debug, Clone)]
pub struct ProductLedger<C: Clock = SystemClock> {
    path: PathBuf,
    clock: C,
}

impl ProductLedger<SystemClock> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_clock(path, SystemClock)
    }
}

impl<C: Clock> ProductLedger<C> {
    pub fn with_clock(path: impl Into<PathBuf>, clock: C) -> Self {
        Self {
            path: path.into(),
            clock,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the catalog, writing the seed catalog first if no ledger exists
    pub fn load_all(&self) -> Result<Vec<Product>, StorageError> {
        let bytes = match read_optional(&self.path)? {
            Some(bytes) => bytes,
            None => {
                let seed = seed_catalog(&self.clock.timestamp());
                info!(path = %self.path.display(), "no ledger found, writing seed catalog");
                self.save_all(&seed)?;
                return Ok(seed);
            }
        };

        let products = self.parse(&bytes)?;
        debug!(path = %self.path.display(), count = products.len(), "loaded ledger");
        Ok(products)
    }

    fn parse(&self, bytes: &[u8]) -> Result<Vec<Product>, StorageError> {
        let body = bytes.strip_prefix(BOM).unwrap_or(bytes);
        let mut reader = csv::Reader::from_reader(body);

        let mut products = Vec::new();
        let mut seen = HashSet::new();
        for row in reader.deserialize() {
            let product: Product = row?;
            if !seen.insert(product.id) {
                return Err(StorageError::Malformed {
                    path: self.path.clone(),
                    reason: format!("duplicate product id {}", product.id),
                });
            }
            products.push(product);
        }
        Ok(products)
    }

    /// Overwrite the ledger with `products`
    pub fn save_all(&self, products: &[Product]) -> Result<(), StorageError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(BOM.to_vec());
        writer.write_record(COLUMNS)?;
        for product in products {
            writer.serialize(product)?;
        }
        let bytes = writer.into_inner().map_err(|e| e.into_error())?;

        write_atomic(&self.path, &bytes)?;
        debug!(path = %self.path.display(), count = products.len(), "saved ledger");
        Ok(())
    }

    /// Look up a single product
    pub fn find(&self, id: ProductId) -> Result<Option<Product>, StorageError> {
        Ok(self.load_all()?.into_iter().find(|p| p.id == id))
    }

    /// Set the stock of product `id`.
    ///
    /// Returns `false` without writing when `id` is absent. Updates that
    /// cross the zero boundary are reported to `events` after the ledger is
    /// saved.
    pub fn update_stock(
        &self,
        id: ProductId,
        new_stock: u32,
        events: &impl StockEvents,
    ) -> Result<bool, StorageError> {
        let mut products = self.load_all()?;
        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            warn!(id, "update_stock: no such product");
            return Ok(false);
        };

        let old_stock = product.stock;
        product.stock = new_stock;
        product.last_updated = self.clock.timestamp();
        self.save_all(&products)?;
        info!(id, old_stock, new_stock, "stock updated");

        if let Some(transition) = StockTransition::between(old_stock, new_stock) {
            events.stock_crossed(id, transition)?;
        }
        Ok(true)
    }

    /// Record one sale of product `id`; `false` when `id` is absent
    pub fn increment_sales(&self, id: ProductId) -> Result<bool, StorageError> {
        let mut products = self.load_all()?;
        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            warn!(id, "increment_sales: no such product");
            return Ok(false);
        };

        product.sales_count = self.next_sales_count(product)?;
        let sales_count = product.sales_count;
        self.save_all(&products)?;
        debug!(id, sales_count, "sales incremented");
        Ok(true)
    }

    /// Sell one unit of product `id`.
    ///
    /// Stock and sales count change in a single rewrite of the ledger, so a
    /// failure never leaves one updated without the other. A sell-out is
    /// reported to `events` after the ledger is saved.
    pub fn sell(
        &self,
        id: ProductId,
        events: &impl StockEvents,
    ) -> Result<PurchaseOutcome, StorageError> {
        let mut products = self.load_all()?;
        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            warn!(id, "sell: no such product");
            return Ok(PurchaseOutcome::NotFound);
        };
        if !product.is_in_stock() {
            return Ok(PurchaseOutcome::SoldOut);
        }

        let old_stock = product.stock;
        let remaining = old_stock - 1;
        product.sales_count = self.next_sales_count(product)?;
        product.stock = remaining;
        product.last_updated = self.clock.timestamp();
        self.save_all(&products)?;
        info!(id, remaining, "sale recorded");

        if let Some(transition) = StockTransition::between(old_stock, remaining) {
            events.stock_crossed(id, transition)?;
        }
        Ok(PurchaseOutcome::Purchased { remaining })
    }

    fn next_sales_count(&self, product: &Product) -> Result<u32, StorageError> {
        product
            .sales_count
            .checked_add(1)
            .ok_or_else(|| StorageError::Malformed {
                path: self.path.clone(),
                reason: format!("sales_count of product {} is at its maximum", product.id),
            })
    }
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;
