// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! kiosk-core: domain types for the shop counter inventory
//!
//! This crate provides:
//! - Product and notification records as persisted by `kiosk-storage`
//! - Stock-crossing classification that drives restock/sold-out alerts
//! - The seed catalog written on first run
//! - Derived catalog views (filtering, ordering, sales statistics)
//! - Configuration and a clock abstraction for testable timestamps

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod catalog;
pub mod clock;
pub mod config;
pub mod notification;
pub mod product;
pub mod seed;
pub mod stock;

pub use catalog::{CatalogQuery, CategoryStats, SortOrder, StockFilter};
pub use clock::{Clock, FakeClock, SystemClock, TIMESTAMP_FORMAT};
pub use config::{Config, ConfigError};
pub use notification::{Notification, NotificationId, NotificationKind};
pub use product::{format_price, Product, ProductId};
pub use seed::seed_catalog;
pub use stock::StockTransition;
