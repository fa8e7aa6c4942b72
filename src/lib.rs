//! Moderation action notification and audit logging for Discord guilds.
//!
//! This crate records moderation actions (bans, kicks, mutes, timeouts, role
//! changes) as rich embeds in a per-guild log channel. Entries can be recorded
//! with or without a known author; authorless entries carry a placeholder that
//! a moderator can claim later by rewriting the reason. Timeouts additionally
//! put a warning on the target user's record.
//!
//! # Architecture
//!
//! The crate follows a layered architecture with clear separation of concerns:
//!
//! - **Bot Layer** (`bot/`) - Gateway event handlers feeding observed moderation events
//! - **Service Layer** (`service/`) - Modlog rules: entry composition, fallbacks, self-disable
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Discord Layer** (`discord/`) - Messenger seam over Serenity's HTTP client
//! - **Error Layer** (`error/`) - Application error types
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Startup** (`startup`) - Tracing setup, database connection, and migrations

pub mod bot;
pub mod config;
pub mod data;
pub mod discord;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
