pub use super::moderation_config::Entity as ModerationConfig;
pub use super::moderation_warning::Entity as ModerationWarning;
