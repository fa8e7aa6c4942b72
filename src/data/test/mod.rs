mod moderation_config;
mod warning;
