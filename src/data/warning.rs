use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::warning::{CreateWarningParam, Warning};

pub struct WarningRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WarningRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new warning record.
    ///
    /// User and author IDs are stringified at this boundary, matching how the
    /// platform's snowflake IDs are persisted.
    ///
    /// # Arguments
    /// - `param`: Warning creation parameters
    ///
    /// # Returns
    /// - `Ok(Warning)`: The created warning record
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, param: CreateWarningParam) -> Result<Warning, DbErr> {
        let entity = entity::moderation_warning::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id as i64),
            user_id: ActiveValue::Set(param.user_id.to_string()),
            author_id: ActiveValue::Set(param.author_id.to_string()),
            author_tag: ActiveValue::Set(param.author_tag),
            message: ActiveValue::Set(param.message),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Warning::from_entity(entity))
    }

    /// Gets paginated warnings for a user in a guild, newest first.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord ID of the warned user
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of warnings to return per page
    ///
    /// # Returns
    /// - `Ok((warnings, total))` - Vector of warnings and total count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user_paginated(
        &self,
        guild_id: u64,
        user_id: u64,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Warning>, u64), DbErr> {
        let paginator = entity::prelude::ModerationWarning::find()
            .filter(entity::moderation_warning::Column::GuildId.eq(guild_id as i64))
            .filter(entity::moderation_warning::Column::UserId.eq(user_id.to_string()))
            .order_by_desc(entity::moderation_warning::Column::CreatedAt)
            .order_by_desc(entity::moderation_warning::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let warnings = entities.into_iter().map(Warning::from_entity).collect();

        Ok((warnings, total))
    }
}
