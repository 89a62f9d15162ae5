// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod admin;
pub mod notifications;
pub mod products;
pub mod ranking;
pub mod shop;

use crate::output::OutputFormat;
use kiosk_core::Config;
use kiosk_storage::Inventory;

/// Everything a command needs for one invocation
pub struct Context {
    pub config: Config,
    pub inventory: Inventory,
    pub format: OutputFormat,
}

impl Context {
    pub fn new(config: Config, format: OutputFormat) -> Self {
        let inventory = Inventory::open(&config);
        Self {
            config,
            inventory,
            format,
        }
    }
}
