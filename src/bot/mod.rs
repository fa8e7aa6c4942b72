//! Discord bot integration for automated moderation logging.
//!
//! This module provides the gateway side of the modlog: it listens for the
//! moderation events Discord delivers (bans, unbans, timeouts) and records
//! them to the guild's configured log channel. Actions observed this way have
//! no known author - audit log attribution is not available on these events -
//! so their entries are posted with the claim placeholder until a moderator
//! assigns themselves with the reason command.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive basic guild lifecycle events
//! - `GUILD_MODERATION` - Receive ban and unban events
//! - `GUILD_MEMBERS` - Receive member updates, which carry timeout changes (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
