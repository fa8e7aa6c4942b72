//! Platform-neutral representation of a modlog entry's embed.
//!
//! Serenity's `CreateEmbed` is write-only, but amending a posted entry needs
//! to read the embed back, rewrite part of it, and send it again. `ModlogEmbed`
//! holds exactly the fields a modlog entry uses and converts in both
//! directions.

use serenity::all::{CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, Embed};

/// The embed payload of a single modlog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModlogEmbed {
    /// Author block name: the acting moderator's tag and ID.
    pub author_name: String,
    /// Author block icon: the acting moderator's avatar URL.
    pub author_icon_url: String,
    /// Thumbnail: the target user's avatar URL.
    pub thumbnail_url: String,
    /// Accent color from the action descriptor.
    pub color: u32,
    /// Entry text: action headline plus the reason segment.
    pub description: String,
    /// Optional footer, e.g. the expiry of a temporary punishment.
    pub footer: Option<String>,
}

impl ModlogEmbed {
    /// Converts to a Serenity embed builder for posting or editing.
    pub fn to_create_embed(&self) -> CreateEmbed {
        let mut embed = CreateEmbed::new()
            .author(CreateEmbedAuthor::new(&self.author_name).icon_url(&self.author_icon_url))
            .thumbnail(&self.thumbnail_url)
            .color(self.color)
            .description(&self.description);

        if let Some(footer) = &self.footer {
            embed = embed.footer(CreateEmbedFooter::new(footer));
        }

        embed
    }

    /// Builds a `ModlogEmbed` from an embed read back from a posted message.
    ///
    /// Fields a modlog entry never leaves empty (description, author, color)
    /// fall back to defaults when missing, so amendment of a non-modlog
    /// message degrades to a marker miss instead of an error here.
    pub fn from_embed(embed: &Embed) -> Self {
        let (author_name, author_icon_url) = match &embed.author {
            Some(author) => (
                author.name.clone(),
                author.icon_url.clone().unwrap_or_default(),
            ),
            None => (String::new(), String::new()),
        };

        Self {
            author_name,
            author_icon_url,
            thumbnail_url: embed
                .thumbnail
                .as_ref()
                .map(|thumbnail| thumbnail.url.clone())
                .unwrap_or_default(),
            color: embed.colour.map(|colour| colour.0).unwrap_or_default(),
            description: embed.description.clone().unwrap_or_default(),
            footer: embed.footer.as_ref().map(|footer| footer.text.clone()),
        }
    }
}
