// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.

use kiosk_core::{NotificationId, ProductId};
use std::fmt;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct KioskError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
}

impl KioskError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn product_not_found(id: ProductId) -> Self {
        KioskError::new(format!("Product {} not found", id))
            .with_suggestion("List products: kiosk products")
    }

    pub fn notification_not_found(id: NotificationId) -> Self {
        KioskError::new(format!("Notification {} not found", id))
            .with_suggestion("List notifications: kiosk notifications")
    }

    pub fn wrong_password() -> Self {
        KioskError::new("Incorrect admin password")
            .with_context("Admin commands require the shared password from kiosk.toml")
            .with_suggestion("Pass it with: kiosk admin --password <PASSWORD> ...")
    }
}

impl fmt::Display for KioskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        for ctx in &self.context {
            write!(f, "\n  -> {}", ctx)?;
        }

        if !self.suggestions.is_empty() {
            write!(f, "\n\nsuggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                write!(f, "\n  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for KioskError {}
