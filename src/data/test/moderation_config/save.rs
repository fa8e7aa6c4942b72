use super::*;

/// Tests saving a config for a guild without a stored row.
///
/// Verifies that the upsert inserts a new row and returns the persisted
/// config.
///
/// Expected: Ok with the config readable afterwards
#[tokio::test]
async fn save_inserts_new_config() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ModerationConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut config = ModerationConfig::default_for_guild(100);
    config.action_channel = "200".to_string();

    let repo = ModerationConfigRepository::new(db);
    let saved = repo.save(100, &config).await?;

    assert_eq!(saved, config);

    let stored = repo.get_by_guild_id(100).await?;
    assert_eq!(stored, Some(config));

    Ok(())
}

/// Tests saving a config for a guild that already has a stored row.
///
/// Verifies that the upsert updates the existing row in place rather than
/// failing on the primary key or inserting a duplicate.
///
/// Expected: Ok with one row holding the new values
#[tokio::test]
async fn save_updates_existing_config() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ModerationConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::moderation_config::create_config(db, 100, "200").await?;

    // Simulate the access-loss flow clearing the channel and flipping a switch
    let mut config = ModerationConfig::default_for_guild(100);
    config.action_channel = String::new();
    config.log_bans = false;

    let repo = ModerationConfigRepository::new(db);
    repo.save(100, &config).await?;

    let stored = repo
        .get_by_guild_id(100)
        .await?
        .expect("config should still be stored");
    assert_eq!(stored.action_channel, "");
    assert!(!stored.log_bans);

    let rows = entity::prelude::ModerationConfig::find().count(db).await?;
    assert_eq!(rows, 1);

    Ok(())
}
