use serenity::model::user::User;

/// Identity of a moderation actor or target as rendered in log entries.
///
/// Kept separate from Serenity's `User` so entries can be composed for users
/// the gateway no longer knows about (left the guild, deleted account), and so
/// the unknown-author sentinel has a concrete value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModUser {
    pub id: u64,
    pub name: String,
    /// Legacy four-digit discriminator; "0000" for new-style usernames.
    pub discriminator: String,
    /// Avatar image hash; empty when the user has none.
    pub avatar: String,
}

impl ModUser {
    /// The sentinel identity rendered when an action has no known author.
    pub fn unknown() -> Self {
        Self {
            id: 0,
            name: "Unknown".to_string(),
            discriminator: "????".to_string(),
            avatar: String::new(),
        }
    }

    /// Returns the `name#discriminator` display tag.
    pub fn tag(&self) -> String {
        format!("{}#{}", self.name, self.discriminator)
    }

    /// Returns the CDN URL of the user's avatar image.
    pub fn avatar_url(&self) -> String {
        format!(
            "https://cdn.discordapp.com/avatars/{}/{}.png",
            self.id, self.avatar
        )
    }
}

impl From<&User> for ModUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.get(),
            name: user.name.clone(),
            discriminator: user
                .discriminator
                .map(|d| format!("{:04}", d.get()))
                .unwrap_or_else(|| "0000".to_string()),
            avatar: user.avatar.map(|hash| hash.to_string()).unwrap_or_default(),
        }
    }
}
