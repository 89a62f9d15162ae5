// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Inventory facade: the data operations offered to the presentation layer
//!
//! Holds no state beyond file locations; every call reads fresh from disk.
//! Mutations run under [`DataLock`] so two processes sharing a data
//! directory do not interleave their read-modify-write cycles.

use crate::file::{DataLock, StorageError};
use crate::ledger::{ProductLedger, PurchaseOutcome};
use crate::notifications::NotificationStore;
use kiosk_core::{
    Clock, Config, Notification, NotificationId, NotificationKind, Product, ProductId,
    SystemClock,
};
use std::path::{Path, PathBuf};

/// Ledger plus notification log rooted in one data directory
#[derive(Debug, Clone)]
pub struct Inventory<C: Clock = SystemClock> {
    data_dir: PathBuf,
    ledger: ProductLedger<C>,
    notifications: NotificationStore<C>,
}

impl Inventory<SystemClock> {
    pub fn open(config: &Config) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Inventory<C> {
    pub fn with_clock(config: &Config, clock: C) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
            ledger: ProductLedger::with_clock(config.products_path(), clock.clone()),
            notifications: NotificationStore::with_clock(config.notifications_path(), clock),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn lock(&self) -> Result<DataLock, StorageError> {
        DataLock::acquire(&self.data_dir)
    }

    /// Write the seed catalog under the lock if no ledger exists yet.
    ///
    /// Reads of an existing ledger take no lock, so they work on a
    /// read-only data directory.
    fn ensure_seeded(&self) -> Result<(), StorageError> {
        if !self.ledger.path().exists() {
            let _lock = self.lock()?;
            self.ledger.load_all()?;
        }
        Ok(())
    }

    pub fn load_products(&self) -> Result<Vec<Product>, StorageError> {
        self.ensure_seeded()?;
        self.ledger.load_all()
    }

    pub fn save_products(&self, products: &[Product]) -> Result<(), StorageError> {
        let _lock = self.lock()?;
        self.ledger.save_all(products)
    }

    pub fn product(&self, id: ProductId) -> Result<Option<Product>, StorageError> {
        self.ensure_seeded()?;
        self.ledger.find(id)
    }

    /// Set stock, emitting restock/sold-out notifications on zero crossings
    pub fn update_stock(&self, id: ProductId, new_stock: u32) -> Result<bool, StorageError> {
        let _lock = self.lock()?;
        // A corrupt log must fail before the ledger is touched
        self.notifications.load_all()?;
        self.ledger.update_stock(id, new_stock, &self.notifications)
    }

    pub fn increment_sales(&self, id: ProductId) -> Result<bool, StorageError> {
        let _lock = self.lock()?;
        self.ledger.increment_sales(id)
    }

    /// Sell one unit: decrement stock and count the sale
    pub fn purchase(&self, id: ProductId) -> Result<PurchaseOutcome, StorageError> {
        let _lock = self.lock()?;
        self.notifications.load_all()?;
        self.ledger.sell(id, &self.notifications)
    }

    /// Ask to be notified when product `id` is back; `None` if it is unknown
    pub fn request_restock(&self, id: ProductId) -> Result<Option<Notification>, StorageError> {
        let _lock = self.lock()?;
        let Some(product) = self.ledger.find(id)? else {
            return Ok(None);
        };
        let message = Notification::restock_request_message(&product.name);
        self.notifications
            .create(id, NotificationKind::RestockRequest, message)
            .map(Some)
    }

    pub fn load_notifications(&self) -> Result<Vec<Notification>, StorageError> {
        self.notifications.load_all()
    }

    pub fn get_unread_notifications(&self) -> Result<Vec<Notification>, StorageError> {
        self.notifications.list_unread()
    }

    pub fn recent_notifications(&self, limit: usize) -> Result<Vec<Notification>, StorageError> {
        self.notifications.recent(limit)
    }

    /// Mark a notification read; `false` if no such id
    pub fn mark_notification_read(&self, id: NotificationId) -> Result<bool, StorageError> {
        let _lock = self.lock()?;
        self.notifications.mark_read(id)
    }

    pub fn create_notification(
        &self,
        product_id: ProductId,
        kind: NotificationKind,
        message: impl Into<String>,
    ) -> Result<Notification, StorageError> {
        let _lock = self.lock()?;
        self.notifications.create(product_id, kind, message)
    }
}

#[cfg(test)]
#[path = "inventory_tests.rs"]
mod tests;
