//! Ban event handlers for automatic modlog entries.
//!
//! Bans and unbans arrive on the gateway without any attribution, so the
//! entries recorded here carry no author and get the claim placeholder.
//! Guilds can switch this off per direction via their moderation config.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, GuildId, User};

use crate::data::moderation_config::ModerationConfigRepository;
use crate::discord::HttpMessenger;
use crate::model::{action::ModAction, user::ModUser};
use crate::service::modlog::ModlogService;

/// Handles the guild_ban_addition event when a user is banned from a guild
pub async fn handle_guild_ban_addition(
    db: &DatabaseConnection,
    ctx: Context,
    guild_id: GuildId,
    banned_user: User,
) {
    let guild_id = guild_id.get();

    let mut config = match ModerationConfigRepository::new(db)
        .get_or_default(guild_id)
        .await
    {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(
                "Failed to load moderation config for guild {}: {:?}",
                guild_id,
                e
            );
            return;
        }
    };
    if !config.log_bans {
        return;
    }

    let messenger = HttpMessenger::new(ctx.http.clone());
    let service = ModlogService::new(db, &messenger);
    let target = ModUser::from(&banned_user);

    if let Err(e) = service
        .log_action(&mut config, None, ModAction::Ban, &target, "", None)
        .await
    {
        tracing::error!(
            "Failed to log ban of user {} in guild {}: {:?}",
            target.id,
            guild_id,
            e
        );
    }
}

/// Handles the guild_ban_removal event when a user's ban is lifted
pub async fn handle_guild_ban_removal(
    db: &DatabaseConnection,
    ctx: Context,
    guild_id: GuildId,
    unbanned_user: User,
) {
    let guild_id = guild_id.get();

    let mut config = match ModerationConfigRepository::new(db)
        .get_or_default(guild_id)
        .await
    {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(
                "Failed to load moderation config for guild {}: {:?}",
                guild_id,
                e
            );
            return;
        }
    };
    if !config.log_unbans {
        return;
    }

    let messenger = HttpMessenger::new(ctx.http.clone());
    let service = ModlogService::new(db, &messenger);
    let target = ModUser::from(&unbanned_user);

    if let Err(e) = service
        .log_action(&mut config, None, ModAction::Unban, &target, "", None)
        .await
    {
        tracing::error!(
            "Failed to log unban of user {} in guild {}: {:?}",
            target.id,
            guild_id,
            e
        );
    }
}
