use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ModerationWarning::Table)
                    .if_not_exists()
                    .col(pk_auto(ModerationWarning::Id))
                    .col(big_integer(ModerationWarning::GuildId))
                    .col(string(ModerationWarning::UserId))
                    .col(string(ModerationWarning::AuthorId))
                    .col(string(ModerationWarning::AuthorTag))
                    .col(text(ModerationWarning::Message))
                    .col(
                        timestamp(ModerationWarning::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index for per-user warning lookups within a guild
        manager
            .create_index(
                Index::create()
                    .name("idx_moderation_warning_guild_user")
                    .table(ModerationWarning::Table)
                    .col(ModerationWarning::GuildId)
                    .col(ModerationWarning::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_moderation_warning_guild_user")
                    .table(ModerationWarning::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ModerationWarning::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ModerationWarning {
    Table,
    Id,
    GuildId,
    UserId,
    AuthorId,
    AuthorTag,
    Message,
    CreatedAt,
}
