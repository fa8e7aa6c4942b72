use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::config::ModerationConfig;

pub struct ModerationConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModerationConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the stored moderation config for a guild.
    ///
    /// # Returns
    /// - `Ok(Some(ModerationConfig))`: The stored config if found
    /// - `Ok(None)`: No config stored for the guild
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Option<ModerationConfig>, DbErr> {
        let entity = entity::prelude::ModerationConfig::find_by_id(guild_id as i64)
            .one(self.db)
            .await?;

        Ok(entity.map(ModerationConfig::from_entity))
    }

    /// Gets the moderation config for a guild, or a default config when the
    /// guild has none stored.
    ///
    /// The default is not persisted; a row only appears once `save` is called
    /// for the guild.
    ///
    /// # Returns
    /// - `Ok(ModerationConfig)`: The stored or default config
    /// - `Err(DbErr)`: Database error
    pub async fn get_or_default(&self, guild_id: u64) -> Result<ModerationConfig, DbErr> {
        let config = self
            .get_by_guild_id(guild_id)
            .await?
            .unwrap_or_else(|| ModerationConfig::default_for_guild(guild_id));

        Ok(config)
    }

    /// Saves the moderation config for a guild, inserting or updating as needed.
    ///
    /// # Returns
    /// - `Ok(ModerationConfig)`: The persisted config
    /// - `Err(DbErr)`: Database error
    pub async fn save(
        &self,
        guild_id: u64,
        config: &ModerationConfig,
    ) -> Result<ModerationConfig, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::ModerationConfig::insert(
            entity::moderation_config::ActiveModel {
                guild_id: ActiveValue::Set(guild_id as i64),
                action_channel: ActiveValue::Set(config.action_channel.clone()),
                log_bans: ActiveValue::Set(config.log_bans),
                log_unbans: ActiveValue::Set(config.log_unbans),
                log_timeouts: ActiveValue::Set(config.log_timeouts),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            },
        )
        .on_conflict(
            OnConflict::column(entity::moderation_config::Column::GuildId)
                .update_columns([
                    entity::moderation_config::Column::ActionChannel,
                    entity::moderation_config::Column::LogBans,
                    entity::moderation_config::Column::LogUnbans,
                    entity::moderation_config::Column::LogTimeouts,
                    entity::moderation_config::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(ModerationConfig::from_entity(entity))
    }
}
