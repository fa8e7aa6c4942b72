use super::*;

/// Tests fetching a stored moderation config.
///
/// Verifies that the repository finds the config row for the guild and maps
/// all columns onto the domain model, including the gateway logging switches.
///
/// Expected: Ok with the stored config
#[tokio::test]
async fn gets_stored_config_by_guild_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ModerationConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::moderation_config::ModerationConfigFactory::new(db, 100)
        .action_channel("200")
        .log_bans(false)
        .build()
        .await?;

    let repo = ModerationConfigRepository::new(db);
    let config = repo.get_by_guild_id(100).await?;

    let config = config.expect("config should be stored");
    assert_eq!(config.guild_id, 100);
    assert_eq!(config.action_channel, "200");
    assert!(!config.log_bans);
    assert!(config.log_unbans);
    assert!(config.log_timeouts);

    Ok(())
}

/// Tests fetching a config for a guild without a stored row.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ModerationConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ModerationConfigRepository::new(db);
    let config = repo.get_by_guild_id(100).await?;

    assert_eq!(config, None);

    Ok(())
}

/// Tests the default fallback for guilds without a stored config.
///
/// Verifies that `get_or_default` returns a disabled-logging default without
/// persisting a row, so unconfigured guilds never accumulate state.
///
/// Expected: Ok with the default config; table still empty
#[tokio::test]
async fn get_or_default_falls_back_without_persisting() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ModerationConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ModerationConfigRepository::new(db);
    let config = repo.get_or_default(100).await?;

    assert_eq!(config, ModerationConfig::default_for_guild(100));

    let stored = entity::prelude::ModerationConfig::find().count(db).await?;
    assert_eq!(stored, 0);

    Ok(())
}

/// Tests that `get_or_default` prefers the stored config when one exists.
///
/// Expected: Ok with the stored config, not the default
#[tokio::test]
async fn get_or_default_returns_stored_config() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ModerationConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::moderation_config::create_config(db, 100, "200").await?;

    let repo = ModerationConfigRepository::new(db);
    let config = repo.get_or_default(100).await?;

    assert_eq!(config.action_channel, "200");

    Ok(())
}
