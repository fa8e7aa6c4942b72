use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ModerationConfig::Table)
                    .if_not_exists()
                    .col(big_integer(ModerationConfig::GuildId).primary_key())
                    .col(string(ModerationConfig::ActionChannel))
                    .col(boolean(ModerationConfig::LogBans).default(true))
                    .col(boolean(ModerationConfig::LogUnbans).default(true))
                    .col(boolean(ModerationConfig::LogTimeouts).default(true))
                    .col(
                        timestamp(ModerationConfig::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(ModerationConfig::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ModerationConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ModerationConfig {
    Table,
    GuildId,
    ActionChannel,
    LogBans,
    LogUnbans,
    LogTimeouts,
    CreatedAt,
    UpdatedAt,
}
