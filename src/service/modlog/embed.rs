//! Modlog embed composition and reason rewriting.
//!
//! This module provides helper functions for constructing moderation log embeds
//! and for rewriting the reason segment of an already posted entry. They are
//! shared between the posting and amendment paths so the description format
//! lives in one place.

use regex::Regex;
use std::sync::LazyLock;

use crate::model::{action::ActionDescriptor, embed::ModlogEmbed, user::ModUser};

/// Marker introducing the reason segment of a modlog description. Text after
/// it is fair game for rewriting; text before it is preserved verbatim.
const REASON_MARKER: &str = "📄**Reason:**";

/// Matches the logs-link suffix of a description, e.g. `([Logs](https://...))`.
static LOGS_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\[Logs\]\(.*\)\)").expect("invalid regex"));

/// Builds the embed for a moderation log entry.
///
/// The description carries the action verb with its emoji, the target's tag
/// and ID, and the reason segment introduced by the reason marker. When a log
/// link is given it is appended as a `([Logs](...))` suffix, placed so that
/// later reason rewrites can carry it over.
///
/// # Arguments
/// - `author` - Moderator responsible for the action (possibly the unknown sentinel)
/// - `descriptor` - Presentation data of the action kind
/// - `target` - User the action was taken against
/// - `reason` - Reason text, already normalized by the caller
/// - `log_link` - Optional URL of an external log view
///
/// # Returns
/// - `ModlogEmbed` - Embed payload ready for posting
pub fn build_modlog_embed(
    author: &ModUser,
    descriptor: &ActionDescriptor,
    target: &ModUser,
    reason: &str,
    log_link: Option<&str>,
) -> ModlogEmbed {
    let mut description = format!(
        "**{}{}** {} *(ID {})*\n{} {}",
        descriptor.emoji,
        descriptor.prefix,
        target.tag(),
        target.id,
        REASON_MARKER,
        reason,
    );
    if let Some(link) = log_link {
        description.push_str(&format!(" ([Logs]({}))", link));
    }

    ModlogEmbed {
        author_name: author_block_name(author),
        author_icon_url: author.avatar_url(),
        thumbnail_url: target.avatar_url(),
        color: descriptor.color,
        description,
        footer: descriptor.footer.clone(),
    }
}

/// Rewrites the reason segment of a posted modlog embed in place.
///
/// Everything up to and including the reason marker is preserved; the text
/// after it is replaced with `reason`. A logs-link suffix anywhere in the old
/// description is re-appended. When `author` is given the embed's author block
/// is replaced as well, which turns an unknown-author entry into an attributed
/// one. Rewriting twice with the same inputs yields the same description.
///
/// # Arguments
/// - `author` - New author block, or `None` to leave the existing one untouched
/// - `reason` - Replacement reason text
/// - `embed` - Embed to rewrite
///
/// # Returns
/// - `true` - Description contained the marker and was rewritten
/// - `false` - No marker found; the embed is left untouched
pub fn update_embed_reason(author: Option<&ModUser>, reason: &str, embed: &mut ModlogEmbed) -> bool {
    let Some(marker_start) = embed.description.find(REASON_MARKER) else {
        return false;
    };
    let prefix = &embed.description[..marker_start + REASON_MARKER.len()];

    let mut description = format!("{} {}", prefix, reason);
    if let Some(link) = LOGS_LINK.find(&embed.description) {
        description.push(' ');
        description.push_str(link.as_str());
    }
    embed.description = description;

    if let Some(author) = author {
        embed.author_name = author_block_name(author);
        embed.author_icon_url = author.avatar_url();
    }

    true
}

fn author_block_name(author: &ModUser) -> String {
    format!("{} (ID {})", author.tag(), author.id)
}
