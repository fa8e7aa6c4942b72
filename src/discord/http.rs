//! Production messenger backed by Serenity's HTTP client.

use std::sync::Arc;

use serenity::all::{ChannelId, CreateMessage, EditMessage, MessageId};
use serenity::async_trait;
use serenity::http::Http;

use crate::discord::{MessengerError, ModlogMessenger};
use crate::model::embed::ModlogEmbed;

/// Sends modlog messages through the bot's shared HTTP client.
pub struct HttpMessenger {
    http: Arc<Http>,
}

impl HttpMessenger {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ModlogMessenger for HttpMessenger {
    async fn send_embed(
        &self,
        channel_id: ChannelId,
        embed: &ModlogEmbed,
    ) -> Result<MessageId, MessengerError> {
        let message = channel_id
            .send_message(
                &self.http,
                CreateMessage::new().embed(embed.to_create_embed()),
            )
            .await?;

        Ok(message.id)
    }

    async fn edit_embed(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        embed: &ModlogEmbed,
    ) -> Result<(), MessengerError> {
        self.http
            .edit_message(
                channel_id,
                message_id,
                &EditMessage::new().embed(embed.to_create_embed()),
                vec![],
            )
            .await?;

        Ok(())
    }

    async fn fetch_embed(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<ModlogEmbed, MessengerError> {
        let message = self.http.get_message(channel_id, message_id).await?;

        let embed = message.embeds.first().ok_or(MessengerError::MissingEmbed)?;

        Ok(ModlogEmbed::from_embed(embed))
    }
}
