// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-invocation admin session

use crate::error::KioskError;
use kiosk_core::Config;

/// Proof that the caller supplied the admin password for this invocation.
///
/// Admin handlers take `&AdminSession`, so they cannot run without a login.
#[derive(Debug)]
pub struct AdminSession {
    _private: (),
}

impl AdminSession {
    pub fn login(password: &str, config: &Config) -> Result<Self, KioskError> {
        if password == config.admin_password {
            Ok(Self { _private: () })
        } else {
            Err(KioskError::wrong_password())
        }
    }
}
