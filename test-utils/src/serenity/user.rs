//! Test factory for creating Serenity User objects.
//!
//! This module provides factory functions for creating mock Serenity `User` structs
//! for testing purposes. These factories create valid User objects by deserializing
//! JSON, simulating what Discord's API would return.

use serenity::model::user::User;

/// Creates a test Serenity User with customizable fields.
///
/// Creates a User object by deserializing JSON with the provided values.
/// The avatar hash is automatically padded to 32 characters (Discord's image hash
/// format) if it's shorter. A `None` discriminator produces a new-style username
/// (Discord sends discriminator "0" for those, which Serenity models as `None`).
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `name` - Username
/// - `discriminator` - Optional legacy discriminator (1..=9999)
/// - `avatar` - Optional avatar hash (will be padded to 32 characters if shorter)
///
/// # Returns
/// - `User` - A valid Serenity User struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::user::create_test_user;
///
/// // Classic username with discriminator
/// let user = create_test_user(123456789, "TestUser", Some(42), Some("abc123"));
///
/// // New-style username without discriminator or avatar
/// let user = create_test_user(123456789, "testuser", None, None);
/// ```
pub fn create_test_user(
    user_id: u64,
    name: &str,
    discriminator: Option<u16>,
    avatar: Option<&str>,
) -> User {
    // Pad avatar hash to be 32 characters if provided (Discord image hash format)
    let formatted_avatar = avatar.map(|hash| {
        if hash.len() < 32 {
            format!("{:0<32}", hash)
        } else {
            hash.to_string()
        }
    });

    let mut value = serde_json::json!({
        "id": user_id.to_string(),
        "username": name,
        "global_name": null,
        "avatar": formatted_avatar,
        "bot": false,
    });

    // Serenity deserializes the discriminator from Discord's string form; the
    // key is left out entirely for new-style usernames.
    if let Some(discriminator) = discriminator {
        value["discriminator"] = serde_json::json!(format!("{:04}", discriminator));
    }

    serde_json::from_value(value).expect("Failed to create test user - invalid JSON structure")
}
