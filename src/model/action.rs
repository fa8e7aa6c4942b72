//! Moderation action catalog.
//!
//! Every action kind the modlog can record, together with the presentation
//! data (verb prefix, emoji, embed color, optional footer) used to render its
//! log entry. Adding a new kind means adding a variant here and giving it a
//! descriptor arm; everything downstream renders from the descriptor alone.

use std::fmt;

use chrono::Duration;

/// A moderation action kind that can be recorded to a guild's log channel.
///
/// Temporary variants carry the punishment duration so the rendered entry can
/// say when the punishment expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModAction {
    Mute,
    TempMute(Duration),
    Unmute,
    Kick,
    Ban,
    TempBan(Duration),
    Unban,
    Warn,
    TimeoutAdded,
    TimeoutRemoved,
    GiveRole,
    RemoveRole,
}

impl ModAction {
    /// Returns the rendering descriptor for this action kind.
    ///
    /// The descriptor is pure presentation data; it never fails and performs
    /// no I/O. Temporary punishments produce an "Expires after" footer from
    /// their duration.
    pub fn descriptor(&self) -> ActionDescriptor {
        match self {
            Self::Mute => ActionDescriptor::new("Muted", "🔇", 0x57728e),
            Self::TempMute(duration) => {
                ActionDescriptor::new("Muted", "🔇", 0x57728e).with_footer(expiry_footer(*duration))
            }
            Self::Unmute => ActionDescriptor::new("Unmuted", "🔊", 0x62c65f),
            Self::Kick => ActionDescriptor::new("Kicked", "👢", 0xf2a013),
            Self::Ban => ActionDescriptor::new("Banned", "🔨", 0xd64848),
            Self::TempBan(duration) => {
                ActionDescriptor::new("Banned", "🔨", 0xd64848).with_footer(expiry_footer(*duration))
            }
            Self::Unban => ActionDescriptor::new("Unbanned", "🔓", 0x62c65f),
            Self::Warn => ActionDescriptor::new("Warned", "⚠", 0xfca253),
            Self::TimeoutAdded => ActionDescriptor::new("Timed out", "⏱", 0x9b59b6),
            Self::TimeoutRemoved => ActionDescriptor::new("Timeout removed from", "⏱", 0x9b59b6),
            // Role changes carry no verb; the emoji alone marks the direction.
            Self::GiveRole => ActionDescriptor::new("", "➕", 0x53fcf9),
            Self::RemoveRole => ActionDescriptor::new("", "➖", 0x53fcf9),
        }
    }
}

/// Presentation data for one moderation action kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDescriptor {
    /// Verb phrase rendered in bold at the start of the entry ("Kicked", ...).
    pub prefix: &'static str,
    /// Emoji rendered immediately before the prefix.
    pub emoji: &'static str,
    /// Embed accent color as 24-bit RGB.
    pub color: u32,
    /// Optional footer line, e.g. the expiry of a temporary punishment.
    pub footer: Option<String>,
}

impl ActionDescriptor {
    fn new(prefix: &'static str, emoji: &'static str, color: u32) -> Self {
        Self {
            prefix,
            emoji,
            color,
            footer: None,
        }
    }

    fn with_footer(mut self, footer: String) -> Self {
        self.footer = Some(footer);
        self
    }
}

impl fmt::Display for ActionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.emoji, self.prefix)?;
        if let Some(footer) = &self.footer {
            write!(f, " ({})", footer)?;
        }
        Ok(())
    }
}

fn expiry_footer(duration: Duration) -> String {
    format!("Expires after: {}", humanize_duration(duration))
}

/// Renders a duration as human-readable text, e.g. "1 hour and 30 minutes".
fn humanize_duration(duration: Duration) -> String {
    const UNITS: [(i64, &str); 5] = [
        (604_800, "week"),
        (86_400, "day"),
        (3_600, "hour"),
        (60, "minute"),
        (1, "second"),
    ];

    let mut seconds = duration.num_seconds().max(0);
    let mut parts = Vec::new();

    for (unit_seconds, name) in UNITS {
        let count = seconds / unit_seconds;
        if count > 0 {
            let plural = if count == 1 { "" } else { "s" };
            parts.push(format!("{} {}{}", count, name, plural));
            seconds %= unit_seconds;
        }
    }

    match parts.split_last() {
        None => "less than a second".to_string(),
        Some((only, [])) => only.clone(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_matches_catalog() {
        let ban = ModAction::Ban.descriptor();
        assert_eq!(ban.prefix, "Banned");
        assert_eq!(ban.emoji, "🔨");
        assert_eq!(ban.color, 0xd64848);
        assert_eq!(ban.footer, None);

        let kick = ModAction::Kick.descriptor();
        assert_eq!(kick.prefix, "Kicked");
        assert_eq!(kick.color, 0xf2a013);

        let timeout = ModAction::TimeoutAdded.descriptor();
        assert_eq!(timeout.prefix, "Timed out");
        assert_eq!(timeout.color, 0x9b59b6);
        assert_eq!(
            ModAction::TimeoutRemoved.descriptor().color,
            timeout.color
        );
    }

    #[test]
    fn role_actions_share_a_dedicated_color() {
        let give = ModAction::GiveRole.descriptor();
        let remove = ModAction::RemoveRole.descriptor();

        assert_eq!(give.color, remove.color);
        assert_eq!(give.prefix, "");
        assert_eq!(remove.prefix, "");

        let punitive = [
            ModAction::Mute,
            ModAction::Kick,
            ModAction::Ban,
            ModAction::Warn,
            ModAction::TimeoutAdded,
        ];
        for action in punitive {
            assert_ne!(action.descriptor().color, give.color);
        }
    }

    #[test]
    fn temp_variants_carry_expiry_footer() {
        let descriptor = ModAction::TempBan(Duration::hours(2)).descriptor();
        assert_eq!(descriptor.prefix, "Banned");
        assert_eq!(descriptor.color, 0xd64848);
        assert_eq!(
            descriptor.footer.as_deref(),
            Some("Expires after: 2 hours")
        );

        let descriptor = ModAction::TempMute(Duration::minutes(90)).descriptor();
        assert_eq!(
            descriptor.footer.as_deref(),
            Some("Expires after: 1 hour and 30 minutes")
        );
    }

    #[test]
    fn display_renders_emoji_prefix_and_footer() {
        assert_eq!(ModAction::Kick.descriptor().to_string(), "👢Kicked");
        assert_eq!(
            ModAction::TempBan(Duration::days(1)).descriptor().to_string(),
            "🔨Banned (Expires after: 1 day)"
        );
        assert_eq!(ModAction::GiveRole.descriptor().to_string(), "➕");
    }

    #[test]
    fn humanizes_compound_durations() {
        assert_eq!(humanize_duration(Duration::seconds(1)), "1 second");
        assert_eq!(humanize_duration(Duration::minutes(90)), "1 hour and 30 minutes");
        assert_eq!(
            humanize_duration(Duration::seconds(8 * 86_400 + 3 * 3_600 + 5)),
            "1 week, 1 day, 3 hours and 5 seconds"
        );
    }

    #[test]
    fn humanizes_empty_durations() {
        assert_eq!(humanize_duration(Duration::zero()), "less than a second");
        assert_eq!(humanize_duration(Duration::seconds(-30)), "less than a second");
    }
}
