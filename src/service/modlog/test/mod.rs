use std::sync::Mutex;

use sea_orm::EntityTrait;
use serenity::all::{ChannelId, MessageId};
use serenity::async_trait;
use test_utils::{builder::TestBuilder, factory};

use crate::data::moderation_config::ModerationConfigRepository;
use crate::discord::{MessengerError, ModlogMessenger};
use crate::error::AppError;
use crate::model::{
    action::ModAction, config::ModerationConfig, embed::ModlogEmbed, user::ModUser,
};
use crate::service::modlog::embed::build_modlog_embed;
use crate::service::modlog::ModlogService;


/// Recording messenger double for service tests.
///
/// Captures every post and edit, hands out sequential message IDs starting at
/// 900, and can be primed with one-shot errors or a fetchable embed to drive
/// the failure and amendment paths.
struct RecordingMessenger {
    posts: Mutex<Vec<(ChannelId, ModlogEmbed)>>,
    edits: Mutex<Vec<(ChannelId, MessageId, ModlogEmbed)>>,
    send_error: Mutex<Option<MessengerError>>,
    edit_error: Mutex<Option<MessengerError>>,
    fetch_error: Mutex<Option<MessengerError>>,
    fetch_result: Mutex<Option<ModlogEmbed>>,
    next_message_id: u64,
}

impl RecordingMessenger {
    fn new() -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            edits: Mutex::new(Vec::new()),
            send_error: Mutex::new(None),
            edit_error: Mutex::new(None),
            fetch_error: Mutex::new(None),
            fetch_result: Mutex::new(None),
            next_message_id: 900,
        }
    }

    fn with_send_error(error: MessengerError) -> Self {
        let messenger = Self::new();
        *messenger.send_error.lock().unwrap() = Some(error);
        messenger
    }

    fn with_edit_error(error: MessengerError) -> Self {
        let messenger = Self::new();
        *messenger.edit_error.lock().unwrap() = Some(error);
        messenger
    }

    fn with_fetch_error(error: MessengerError) -> Self {
        let messenger = Self::new();
        *messenger.fetch_error.lock().unwrap() = Some(error);
        messenger
    }

    fn with_fetched(embed: ModlogEmbed) -> Self {
        let messenger = Self::new();
        *messenger.fetch_result.lock().unwrap() = Some(embed);
        messenger
    }

    fn posts(&self) -> Vec<(ChannelId, ModlogEmbed)> {
        self.posts.lock().unwrap().clone()
    }

    fn edits(&self) -> Vec<(ChannelId, MessageId, ModlogEmbed)> {
        self.edits.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModlogMessenger for RecordingMessenger {
    async fn send_embed(
        &self,
        channel_id: ChannelId,
        embed: &ModlogEmbed,
    ) -> Result<MessageId, MessengerError> {
        if let Some(error) = self.send_error.lock().unwrap().take() {
            return Err(error);
        }

        let mut posts = self.posts.lock().unwrap();
        posts.push((channel_id, embed.clone()));
        Ok(MessageId::new(self.next_message_id + posts.len() as u64 - 1))
    }

    async fn edit_embed(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        embed: &ModlogEmbed,
    ) -> Result<(), MessengerError> {
        if let Some(error) = self.edit_error.lock().unwrap().take() {
            return Err(error);
        }

        self.edits
            .lock()
            .unwrap()
            .push((channel_id, message_id, embed.clone()));
        Ok(())
    }

    async fn fetch_embed(
        &self,
        _channel_id: ChannelId,
        _message_id: MessageId,
    ) -> Result<ModlogEmbed, MessengerError> {
        if let Some(error) = self.fetch_error.lock().unwrap().take() {
            return Err(error);
        }

        self.fetch_result
            .lock()
            .unwrap()
            .clone()
            .ok_or(MessengerError::MissingEmbed)
    }
}

/// Returns a config pointing at the given action channel, all switches on.
fn configured(guild_id: u64, action_channel: &str) -> ModerationConfig {
    ModerationConfig {
        guild_id,
        action_channel: action_channel.to_string(),
        log_bans: true,
        log_unbans: true,
        log_timeouts: true,
    }
}

fn moderator() -> ModUser {
    ModUser {
        id: 100,
        name: "Moderator".to_string(),
        discriminator: "0001".to_string(),
        avatar: "modhash".to_string(),
    }
}

fn target_user() -> ModUser {
    ModUser {
        id: 200,
        name: "Target".to_string(),
        discriminator: "0002".to_string(),
        avatar: "targethash".to_string(),
    }
}
