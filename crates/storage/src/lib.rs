// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! kiosk-storage: flat-file persistence for the shop counter
//!
//! - [`ProductLedger`]: CSV product catalog, seeded on first use
//! - [`NotificationStore`]: JSON notification log
//! - [`Inventory`]: the two combined behind the operations the front end uses

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod file;
mod inventory;
mod ledger;
mod notifications;

pub use file::{DataLock, StorageError};
pub use inventory::Inventory;
pub use ledger::{ProductLedger, PurchaseOutcome, StockEvents, COLUMNS};
pub use notifications::NotificationStore;
