//! Warning factory for creating test moderation warning entities.
//!
//! This module provides factory methods for creating warning entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test warnings with customizable fields.
///
/// Provides a builder pattern for creating warning entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::warning::WarningFactory;
///
/// let warning = WarningFactory::new(&db, 100, "300")
///     .author_tag("Moderator#0001")
///     .message("**USER TIMED OUT**: spamming")
///     .build()
///     .await?;
/// ```
pub struct WarningFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: u64,
    user_id: String,
    author_id: String,
    author_tag: String,
    message: String,
    created_at: DateTime<Utc>,
}

impl<'a> WarningFactory<'a> {
    /// Creates a new WarningFactory with default values.
    ///
    /// Defaults:
    /// - author_id: `"100000000000000000"`
    /// - author_tag: `"Moderator#0001"`
    /// - message: `"Test warning {id}"` where id is auto-incremented
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `guild_id` - Discord guild ID the warning belongs to
    /// - `user_id` - Discord ID of the warned user (as a decimal string)
    ///
    /// # Returns
    /// - `WarningFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, guild_id: u64, user_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id,
            user_id: user_id.into(),
            author_id: "100000000000000000".to_string(),
            author_tag: "Moderator#0001".to_string(),
            message: format!("Test warning {}", id),
            created_at: Utc::now(),
        }
    }

    /// Sets the warning author's Discord ID.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn author_id(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = author_id.into();
        self
    }

    /// Sets the warning author's display tag.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn author_tag(mut self, author_tag: impl Into<String>) -> Self {
        self.author_tag = author_tag.into();
        self
    }

    /// Sets the warning message.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the creation timestamp.
    ///
    /// Useful for tests that depend on warning ordering.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Inserts the warning entity into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created warning entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::moderation_warning::Model, DbErr> {
        entity::moderation_warning::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id as i64),
            user_id: ActiveValue::Set(self.user_id),
            author_id: ActiveValue::Set(self.author_id),
            author_tag: ActiveValue::Set(self.author_tag),
            message: ActiveValue::Set(self.message),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a warning with default values.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID the warning belongs to
/// - `user_id` - Discord ID of the warned user (as a decimal string)
///
/// # Returns
/// - `Ok(Model)` - The created warning entity
/// - `Err(DbErr)` - Database error during creation
pub async fn create_warning(
    db: &DatabaseConnection,
    guild_id: u64,
    user_id: &str,
) -> Result<entity::moderation_warning::Model, DbErr> {
    WarningFactory::new(db, guild_id, user_id).build().await
}
