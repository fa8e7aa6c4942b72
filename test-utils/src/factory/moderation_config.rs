//! Moderation config factory for creating test config entities.
//!
//! This module provides factory methods for creating per-guild moderation
//! config entities with sensible defaults, reducing boilerplate in tests.
//! The factory supports customization through a builder pattern.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test moderation configs with customizable fields.
///
/// Provides a builder pattern for creating moderation config entities with
/// default values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::moderation_config::ModerationConfigFactory;
///
/// let config = ModerationConfigFactory::new(&db, 100)
///     .action_channel("200")
///     .log_bans(false)
///     .build()
///     .await?;
/// ```
pub struct ModerationConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: u64,
    action_channel: String,
    log_bans: bool,
    log_unbans: bool,
    log_timeouts: bool,
}

impl<'a> ModerationConfigFactory<'a> {
    /// Creates a new ModerationConfigFactory with default values.
    ///
    /// Defaults:
    /// - action_channel: `""` (logging disabled)
    /// - log_bans: `true`
    /// - log_unbans: `true`
    /// - log_timeouts: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `guild_id` - Discord guild ID the config belongs to
    ///
    /// # Returns
    /// - `ModerationConfigFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, guild_id: u64) -> Self {
        Self {
            db,
            guild_id,
            action_channel: String::new(),
            log_bans: true,
            log_unbans: true,
            log_timeouts: true,
        }
    }

    /// Sets the action channel ID (as a decimal string).
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn action_channel(mut self, action_channel: impl Into<String>) -> Self {
        self.action_channel = action_channel.into();
        self
    }

    /// Sets whether bans are auto-logged.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn log_bans(mut self, log_bans: bool) -> Self {
        self.log_bans = log_bans;
        self
    }

    /// Sets whether unbans are auto-logged.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn log_unbans(mut self, log_unbans: bool) -> Self {
        self.log_unbans = log_unbans;
        self
    }

    /// Sets whether timeouts are auto-logged.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn log_timeouts(mut self, log_timeouts: bool) -> Self {
        self.log_timeouts = log_timeouts;
        self
    }

    /// Inserts the moderation config entity into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created moderation config entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::moderation_config::Model, DbErr> {
        let now = Utc::now();

        entity::moderation_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id as i64),
            action_channel: ActiveValue::Set(self.action_channel),
            log_bans: ActiveValue::Set(self.log_bans),
            log_unbans: ActiveValue::Set(self.log_unbans),
            log_timeouts: ActiveValue::Set(self.log_timeouts),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a moderation config with an action channel set.
///
/// Convenience function for the common case of a guild with logging enabled.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID the config belongs to
/// - `action_channel` - Action channel ID as a decimal string
///
/// # Returns
/// - `Ok(Model)` - The created moderation config entity
/// - `Err(DbErr)` - Database error during creation
pub async fn create_config(
    db: &DatabaseConnection,
    guild_id: u64,
    action_channel: &str,
) -> Result<entity::moderation_config::Model, DbErr> {
    ModerationConfigFactory::new(db, guild_id)
        .action_channel(action_channel)
        .build()
        .await
}
