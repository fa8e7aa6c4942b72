//! Moderation log service for Discord notification management.
//!
//! This module provides the `ModlogService` for recording moderation actions to
//! a guild's configured log channel. It orchestrates embed composition, timeout
//! warning persistence, message delivery, and the self-disable fallback when
//! the configured channel becomes unusable.
//!
//! The service is organized into separate modules by concern:
//! - `embed` - Embed composition and reason rewriting

pub mod embed;

#[cfg(test)]
mod test;

use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, MessageId};

use crate::{
    data::{moderation_config::ModerationConfigRepository, warning::WarningRepository},
    discord::ModlogMessenger,
    error::AppError,
    model::{
        action::ModAction, config::ModerationConfig, user::ModUser, warning::CreateWarningParam,
    },
};

use self::embed::{build_modlog_embed, update_embed_reason};

/// Service providing moderation log operations for a guild.
///
/// This struct holds references to the database connection and the messenger
/// used for Discord delivery. It provides methods for recording moderation
/// actions to the configured log channel and for amending the reason of an
/// already posted entry.
///
/// The service layer contains the logging rules and coordinates between
/// repositories (data layer) and Discord delivery. Delivery goes through the
/// [`ModlogMessenger`] seam so the flow is testable without a gateway
/// connection.
pub struct ModlogService<'a> {
    /// Database connection for config and warning persistence
    db: &'a DatabaseConnection,
    /// Messenger used to post, edit, and fetch log messages
    messenger: &'a dyn ModlogMessenger,
}

impl<'a> ModlogService<'a> {
    /// Creates a new ModlogService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `messenger` - Messenger implementation for Discord delivery
    ///
    /// # Returns
    /// - `ModlogService` - New service instance
    pub fn new(db: &'a DatabaseConnection, messenger: &'a dyn ModlogMessenger) -> Self {
        Self { db, messenger }
    }

    /// Records a moderation action to the guild's log channel.
    ///
    /// Composes the log entry and posts it to the configured action channel.
    /// When no channel is configured this is a no-op. A timeout additionally
    /// puts a warning on the target's record, persisted before the
    /// notification goes out; if that write fails, nothing is posted. When
    /// posting fails because the channel was deleted or the bot lost access,
    /// logging is disabled by clearing and persisting the config - the caller
    /// observes the cleared `action_channel`.
    ///
    /// Entries recorded without an author are posted and then edited to carry
    /// a placeholder reason naming the message ID, so a moderator can claim
    /// the entry later.
    ///
    /// # Arguments
    /// - `config` - Guild moderation config; `action_channel` may be cleared in place
    /// - `author` - Moderator who took the action, or `None` when unknown
    /// - `action` - Action kind to record
    /// - `target` - User the action was taken against
    /// - `reason` - Reason text; empty falls back to "(no reason specified)"
    /// - `log_link` - Optional URL of an external log view, appended to the entry
    ///
    /// # Returns
    /// - `Ok(())` - Entry posted, or logging not configured / just disabled
    /// - `Err(AppError::WarningStore)` - Timeout warning could not be persisted
    /// - `Err(AppError::DbErr)` - Failed to persist the disabled config
    /// - `Err(AppError::MessengerErr)` - Delivery failed for another reason
    pub async fn log_action(
        &self,
        config: &mut ModerationConfig,
        author: Option<&ModUser>,
        action: ModAction,
        target: &ModUser,
        reason: &str,
        log_link: Option<&str>,
    ) -> Result<(), AppError> {
        // Capture the destination up front; the config may be mutated below.
        let channel_id = config.int_action_channel();
        let guild_id = config.guild_id;
        if channel_id == 0 {
            return Ok(());
        }

        let empty_author = author.is_none();
        let author = author.cloned().unwrap_or_else(ModUser::unknown);

        let reason = if reason.is_empty() {
            "(no reason specified)"
        } else {
            reason
        };

        let descriptor = action.descriptor();
        let mut entry = build_modlog_embed(&author, &descriptor, target, reason, log_link);

        // A timeout doubles as a warning on the target's record. It must be
        // stored before the notification goes out, so a storage failure never
        // leaves a posted entry without its warning.
        if matches!(action, ModAction::TimeoutAdded) {
            WarningRepository::new(self.db)
                .create(CreateWarningParam {
                    guild_id,
                    user_id: target.id,
                    author_id: author.id,
                    author_tag: author.tag(),
                    message: format!("**USER TIMED OUT**: {}", reason),
                })
                .await
                .map_err(AppError::WarningStore)?;
        }

        let message_id = match self
            .messenger
            .send_embed(ChannelId::new(channel_id), &entry)
            .await
        {
            Ok(message_id) => message_id,
            Err(err) if err.is_access_loss() => {
                tracing::warn!(
                    "Lost access to modlog channel {} in guild {}, disabling logging: {}",
                    channel_id,
                    guild_id,
                    err
                );
                config.action_channel.clear();
                ModerationConfigRepository::new(self.db)
                    .save(guild_id, config)
                    .await?;
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        if empty_author {
            let placeholder = format!(
                "Assign an author and reason to this using **`reason {} your-reason-here`**",
                message_id
            );
            update_embed_reason(None, &placeholder, &mut entry);
            self.messenger
                .edit_embed(ChannelId::new(channel_id), message_id, &entry)
                .await?;
        }

        tracing::info!(
            "Logged {} against user {} in guild {}",
            descriptor,
            target.id,
            guild_id
        );

        Ok(())
    }

    /// Rewrites the reason of an already posted modlog entry.
    ///
    /// Fetches the message's embed, replaces everything after the reason
    /// marker with `reason`, and edits the message in place. When `author` is
    /// given the entry's author block is replaced too, which is how an
    /// unknown-author entry gets claimed.
    ///
    /// # Arguments
    /// - `channel_id` - Channel the entry was posted in
    /// - `message_id` - ID of the posted entry
    /// - `author` - New author block, or `None` to keep the existing one
    /// - `reason` - Replacement reason text
    ///
    /// # Returns
    /// - `Ok(())` - Entry rewritten and edited
    /// - `Err(AppError::NotFound)` - Message is not an amendable modlog entry
    /// - `Err(AppError::MessengerErr)` - Fetch or edit failed
    pub async fn amend_reason(
        &self,
        channel_id: u64,
        message_id: u64,
        author: Option<&ModUser>,
        reason: &str,
    ) -> Result<(), AppError> {
        let channel_id = ChannelId::new(channel_id);
        let message_id = MessageId::new(message_id);

        let mut entry = self.messenger.fetch_embed(channel_id, message_id).await?;

        if !update_embed_reason(author, reason, &mut entry) {
            return Err(AppError::NotFound(format!(
                "message {} is not an amendable modlog entry",
                message_id
            )));
        }

        self.messenger
            .edit_embed(channel_id, message_id, &entry)
            .await?;

        tracing::info!("Amended reason of modlog entry {}", message_id);

        Ok(())
    }
}
