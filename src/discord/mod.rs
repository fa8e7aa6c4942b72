//! Messenger seam between the modlog service and Discord delivery.
//!
//! The service needs exactly three message operations; putting them behind a
//! trait keeps the posting and amending flow testable without a gateway
//! connection and keeps delivery failure classification in one place.

pub mod http;

use serenity::all::{ChannelId, MessageId};
use serenity::async_trait;
use serenity::http::HttpError;
use thiserror::Error;

use crate::model::embed::ModlogEmbed;

pub use http::HttpMessenger;

// Discord error JSON codes that mean the configured log channel is unusable.
const ERROR_CODE_UNKNOWN_CHANNEL: isize = 10003;
const ERROR_CODE_MISSING_ACCESS: isize = 50001;
const ERROR_CODE_MISSING_PERMISSIONS: isize = 50013;

/// Message delivery errors, classified by how the modlog reacts to them.
#[derive(Debug, Error)]
pub enum MessengerError {
    /// Bot has no access to the log channel.
    #[error("Bot has no access to the log channel")]
    MissingAccess,

    /// Bot can see the log channel but may not post in it.
    #[error("Bot lacks permission to post in the log channel")]
    MissingPermissions,

    /// The configured log channel no longer exists.
    #[error("Log channel does not exist")]
    UnknownChannel,

    /// The fetched message carries no embed to amend.
    #[error("Message has no embed to amend")]
    MissingEmbed,

    /// Any other Serenity failure, boxed due to large size.
    #[error(transparent)]
    Other(Box<serenity::Error>),
}

impl MessengerError {
    /// True when the failure means the configured log channel is unusable
    /// and should be disabled rather than retried.
    pub fn is_access_loss(&self) -> bool {
        matches!(
            self,
            Self::MissingAccess | Self::MissingPermissions | Self::UnknownChannel
        )
    }
}

/// Classifies Serenity errors by the Discord error code they carry.
///
/// Only unsuccessful HTTP requests carry a code; everything else (gateway
/// failures, JSON errors, ...) lands in `Other`.
impl From<serenity::Error> for MessengerError {
    fn from(err: serenity::Error) -> Self {
        if let serenity::Error::Http(HttpError::UnsuccessfulRequest(ref response)) = err {
            if let Some(classified) = classify_error_code(response.error.code) {
                return classified;
            }
        }

        Self::Other(Box::new(err))
    }
}

fn classify_error_code(code: isize) -> Option<MessengerError> {
    match code {
        ERROR_CODE_UNKNOWN_CHANNEL => Some(MessengerError::UnknownChannel),
        ERROR_CODE_MISSING_ACCESS => Some(MessengerError::MissingAccess),
        ERROR_CODE_MISSING_PERMISSIONS => Some(MessengerError::MissingPermissions),
        _ => None,
    }
}

/// Message operations the modlog needs from Discord.
///
/// Implemented by [`HttpMessenger`] in production and by recording mocks in
/// service tests.
#[async_trait]
pub trait ModlogMessenger: Send + Sync {
    /// Posts an embed-only message and returns the new message's ID.
    async fn send_embed(
        &self,
        channel_id: ChannelId,
        embed: &ModlogEmbed,
    ) -> Result<MessageId, MessengerError>;

    /// Replaces the embed of an existing message.
    async fn edit_embed(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        embed: &ModlogEmbed,
    ) -> Result<(), MessengerError>;

    /// Fetches the first embed of an existing message.
    async fn fetch_embed(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<ModlogEmbed, MessengerError>;
}
