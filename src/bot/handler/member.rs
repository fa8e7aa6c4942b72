//! Member update handler for timeout detection.
//!
//! Discord does not deliver a dedicated timeout event; a timeout shows up as
//! a member update whose `communication_disabled_until` moved into the
//! future. Member updates fire for plenty of other changes (roles, nickname),
//! so the handler has to filter those out before recording anything.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{Context, GuildMemberUpdateEvent, Member};

use crate::data::moderation_config::ModerationConfigRepository;
use crate::discord::HttpMessenger;
use crate::model::{action::ModAction, user::ModUser};
use crate::service::modlog::ModlogService;

/// Handles the guild_member_update event, recording newly applied timeouts.
///
/// A timeout counts as new when the event carries a future
/// `communication_disabled_until` that differs from the previously cached
/// member's value. Expired timestamps linger on member objects after a
/// timeout runs out, and unrelated updates re-deliver the unchanged expiry;
/// both are skipped.
pub async fn handle_guild_member_update(
    db: &DatabaseConnection,
    ctx: Context,
    old: Option<Member>,
    _new: Option<Member>,
    event: GuildMemberUpdateEvent,
) {
    let Some(disabled_until) = event.communication_disabled_until else {
        return;
    };
    if disabled_until.unix_timestamp() <= Utc::now().timestamp() {
        return;
    }
    if old
        .as_ref()
        .and_then(|member| member.communication_disabled_until)
        .is_some_and(|previous| previous == disabled_until)
    {
        return;
    }

    let guild_id = event.guild_id.get();

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
    if !config.log_timeouts {
        return;
    }

    let messenger = HttpMessenger::new(ctx.http.clone());
    let service = ModlogService::new(db, &messenger);
    let target = ModUser::from(&event.user);

    if let Err(e) = service
        .log_action(&mut config, None, ModAction::TimeoutAdded, &target, "", None)
        .await
    {
        tracing::error!(
            "Failed to log timeout of user {} in guild {}: {:?}",
            target.id,
            guild_id,
            e
        );
    }
}
