//! Parameter models for moderation warning data operations.
//!
//! These models serve as the boundary between the data layer and the service
//! layer, with conversion from entity models at the repository edge.

use chrono::{DateTime, Utc};

/// A persisted moderation warning with full data from the database.
///
/// Warnings are written both by explicit warn commands and automatically when
/// a user is timed out, so a member's record keeps a durable trail even for
/// punishments that expire on their own.
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    /// Unique identifier for the warning record.
    pub id: i32,
    /// Discord guild ID the warning belongs to.
    pub guild_id: u64,
    /// Discord ID of the warned user (stored as String).
    pub user_id: String,
    /// Discord ID of the issuing moderator (stored as String).
    pub author_id: String,
    /// Display tag of the issuing moderator at the time of the warning.
    pub author_tag: String,
    /// Warning text shown when listing a user's record.
    pub message: String,
    /// Timestamp when the warning was recorded.
    pub created_at: DateTime<Utc>,
}

impl Warning {
    /// Converts an entity model to a warning.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Warning` - The converted warning
    pub fn from_entity(entity: entity::moderation_warning::Model) -> Self {
        Self {
            id: entity.id,
            guild_id: entity.guild_id as u64,
            user_id: entity.user_id,
            author_id: entity.author_id,
            author_tag: entity.author_tag,
            message: entity.message,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a new moderation warning.
#[derive(Debug, Clone)]
pub struct CreateWarningParam {
    /// Discord guild ID the warning belongs to.
    pub guild_id: u64,
    /// Discord ID of the warned user.
    pub user_id: u64,
    /// Discord ID of the issuing moderator; 0 when the author is unknown.
    pub author_id: u64,
    /// Display tag of the issuing moderator.
    pub author_tag: String,
    /// Warning text.
    pub message: String,
}
