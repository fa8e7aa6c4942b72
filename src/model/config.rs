/// Per-guild moderation logging configuration.
///
/// The action channel is stored as a decimal string, matching how the
/// platform's snowflake IDs are persisted; an empty or unparsable value means
/// logging is disabled for the guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationConfig {
    pub guild_id: u64,
    /// Channel ID of the guild's modlog channel, as a decimal string.
    /// Empty when logging is disabled.
    pub action_channel: String,
    /// Whether bans observed on the gateway are logged automatically.
    pub log_bans: bool,
    /// Whether unbans observed on the gateway are logged automatically.
    pub log_unbans: bool,
    /// Whether timeouts observed on the gateway are logged automatically.
    pub log_timeouts: bool,
}

impl ModerationConfig {
    /// Returns a default config for a guild with no stored row.
    ///
    /// Logging starts disabled (no action channel); the gateway switches
    /// default to on so entries appear as soon as a channel is configured.
    pub fn default_for_guild(guild_id: u64) -> Self {
        Self {
            guild_id,
            action_channel: String::new(),
            log_bans: true,
            log_unbans: true,
            log_timeouts: true,
        }
    }

    /// Returns the action channel as a numeric ID, or 0 when logging is
    /// disabled or the stored value is not a valid ID.
    pub fn int_action_channel(&self) -> u64 {
        self.action_channel.parse().unwrap_or(0)
    }

    /// Converts an entity model to a domain config.
    ///
    /// This conversion happens at the data layer boundary to ensure entity
    /// models never leak into service or bot layers.
    pub fn from_entity(entity: entity::moderation_config::Model) -> Self {
        Self {
            guild_id: entity.guild_id as u64,
            action_channel: entity.action_channel,
            log_bans: entity.log_bans,
            log_unbans: entity.log_unbans,
            log_timeouts: entity.log_timeouts,
        }
    }
}
