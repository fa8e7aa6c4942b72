//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let config = factory::moderation_config::create_config(&db, 100, "200").await?;
//!     let warning = factory::warning::create_warning(&db, 100, "300").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory::warning::WarningFactory;
//!
//! let warning = WarningFactory::new(&db, 100, "300")
//!     .author_tag("Moderator#0001")
//!     .message("**USER TIMED OUT**: spamming")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `moderation_config` - Create per-guild moderation config entities
//! - `warning` - Create moderation warning entities
//! - `helpers` - Shared utilities such as unique id generation

pub mod helpers;
pub mod moderation_config;
pub mod warning;

// Re-export commonly used factory functions for concise usage
pub use moderation_config::create_config;
pub use warning::create_warning;
