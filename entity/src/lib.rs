pub mod prelude;

pub mod moderation_config;
pub mod moderation_warning;
