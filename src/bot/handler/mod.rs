use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, GuildId, GuildMemberUpdateEvent, Member, Ready, User};
use serenity::async_trait;

pub mod ban;
pub mod member;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
}

impl Handler {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a user is banned from a guild
    async fn guild_ban_addition(&self, ctx: Context, guild_id: GuildId, banned_user: User) {
        ban::handle_guild_ban_addition(&self.db, ctx, guild_id, banned_user).await;
    }

    /// Called when a user's ban is lifted
    async fn guild_ban_removal(&self, ctx: Context, guild_id: GuildId, unbanned_user: User) {
        ban::handle_guild_ban_removal(&self.db, ctx, guild_id, unbanned_user).await;
    }

    /// Called when a member is updated in a guild (timeout, roles, nickname, etc.)
    async fn guild_member_update(
        &self,
        ctx: Context,
        old: Option<Member>,
        new: Option<Member>,
        event: GuildMemberUpdateEvent,
    ) {
        member::handle_guild_member_update(&self.db, ctx, old, new, event).await;
    }
}
