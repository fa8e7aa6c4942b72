//! Error types for the modlog application.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors from
//! configuration, persistence, and Discord delivery so they can flow through
//! the service layer with `?`.

pub mod config;

use thiserror::Error;

use crate::{discord::MessengerError, error::config::ConfigError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most
/// variants use `#[from]` for automatic conversion; `WarningStore` is built
/// explicitly at its single call site to carry context about which write failed.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Raised from gateway client setup and other
    /// direct Serenity calls outside the messenger seam.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Message delivery error from the modlog messenger.
    ///
    /// Only non-recoverable delivery failures surface here; access-loss
    /// failures are absorbed by the service after disabling the log channel.
    #[error(transparent)]
    MessengerErr(#[from] MessengerError),

    /// A timeout warning could not be persisted.
    ///
    /// Raised before the notification is posted, so a failed warning write
    /// always means no message went out for that action.
    #[error("Failed to store timeout warning: {0}")]
    WarningStore(#[source] sea_orm::DbErr),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Internal error with custom message.
    ///
    /// # Fields
    /// - Detailed error message for logging
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
