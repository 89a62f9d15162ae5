// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only notification log backed by a JSON file
//!
//! The file holds one pretty-printed JSON array. Every call reads the whole
//! file and every mutation rewrites it.

use crate::file::{read_optional, write_atomic, StorageError};
use crate::ledger::StockEvents;
use kiosk_core::{
    Clock, Notification, NotificationId, NotificationKind, ProductId, StockTransition,
    SystemClock,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Durable notification log
#[derive(Debug, Clone)]
pub struct NotificationStore<C: Clock = SystemClock> {
    path: PathBuf,
    clock: C,
}

impl NotificationStore<SystemClock> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_clock(path, SystemClock)
    }
}

impl<C: Clock> NotificationStore<C> {
    pub fn with_clock(path: impl Into<PathBuf>, clock: C) -> Self {
        Self {
            path: path.into(),
            clock,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All notifications in stored order; empty when the file is absent
    pub fn load_all(&self) -> Result<Vec<Notification>, StorageError> {
        let Some(bytes) = read_optional(&self.path)? else {
            return Ok(Vec::new());
        };
        let notifications: Vec<Notification> = serde_json::from_slice(&bytes)?;
        debug!(
            path = %self.path.display(),
            count = notifications.len(),
            "loaded notifications"
        );
        Ok(notifications)
    }

    /// Overwrite the log with `notifications`
    pub fn save_all(&self, notifications: &[Notification]) -> Result<(), StorageError> {
        let json = serde_json::to_vec_pretty(notifications)?;
        write_atomic(&self.path, &json)?;
        debug!(
            path = %self.path.display(),
            count = notifications.len(),
            "saved notifications"
        );
        Ok(())
    }

    /// Append a new unread notification and return it
    pub fn create(
        &self,
        product_id: ProductId,
        kind: NotificationKind,
        message: impl Into<String>,
    ) -> Result<Notification, StorageError> {
        let mut notifications = self.load_all()?;
        let notification = Notification {
            id: self.next_id(&notifications)?,
            product_id,
            kind,
            message: message.into(),
            timestamp: self.clock.timestamp(),
            read: false,
        };
        notifications.push(notification.clone());
        self.save_all(&notifications)?;

        info!(
            id = notification.id,
            product_id,
            kind = %kind,
            "notification created"
        );
        Ok(notification)
    }

    /// Unread notifications in insertion order
    pub fn list_unread(&self) -> Result<Vec<Notification>, StorageError> {
        let mut notifications = self.load_all()?;
        notifications.retain(|n| !n.read);
        Ok(notifications)
    }

    /// The last `limit` notifications, newest first
    pub fn recent(&self, limit: usize) -> Result<Vec<Notification>, StorageError> {
        let notifications = self.load_all()?;
        Ok(notifications.into_iter().rev().take(limit).collect())
    }

    /// Flag the first notification with `id` as read.
    ///
    /// Returns `false` without touching the file when no record matches.
    pub fn mark_read(&self, id: NotificationId) -> Result<bool, StorageError> {
        let mut notifications = self.load_all()?;
        let Some(notification) = notifications.iter_mut().find(|n| n.id == id) else {
            debug!(id, "mark_read: no such notification");
            return Ok(false);
        };
        notification.read = true;
        self.save_all(&notifications)?;
        Ok(true)
    }
}

impl<C: Clock> NotificationStore<C> {
    /// Next id: one past both the record count and the largest id present,
    /// so an id is never reused even if records were removed by hand.
    fn next_id(&self, notifications: &[Notification]) -> Result<NotificationId, StorageError> {
        let max_id = notifications.iter().map(|n| n.id).max().unwrap_or(0);
        max_id
            .max(notifications.len() as NotificationId)
            .checked_add(1)
            .ok_or_else(|| StorageError::Malformed {
                path: self.path.clone(),
                reason: "notification ids exhausted".to_string(),
            })
    }
}

impl<C: Clock> StockEvents for NotificationStore<C> {
    fn stock_crossed(
        &self,
        product_id: ProductId,
        transition: StockTransition,
    ) -> Result<(), StorageError> {
        self.create(product_id, transition.kind(), transition.message())?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "notifications_tests.rs"]
mod tests;
