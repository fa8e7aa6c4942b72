//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! for testing purposes. These factories create valid Serenity objects by
//! deserializing JSON, simulating what Discord's API would return.
//!
//! # Overview
//!
//! When testing code that interacts with Discord's API via Serenity, you often
//! need to create mock Serenity structs. These factories provide a consistent
//! way to create these objects with sensible defaults while allowing customization
//! of key fields.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::user::create_test_user;
//!
//! #[tokio::test]
//! async fn test_user_conversion() {
//!     // Classic username with discriminator and avatar
//!     let user = create_test_user(123456789, "TestUser", Some(1), Some("abc123"));
//!
//!     // New-style username (no discriminator)
//!     let user = create_test_user(123456789, "testuser", None, None);
//!
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects

pub mod user;

// Re-export commonly used functions for convenience
pub use user::create_test_user;
