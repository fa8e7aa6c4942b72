use super::*;

/// Tests that the listing only returns warnings for the requested guild and
/// user.
///
/// Expected: Ok with warnings from other guilds and users excluded
#[tokio::test]
async fn filters_to_guild_and_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ModerationWarning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::warning::create_warning(db, 100, "200").await?;
    factory::warning::create_warning(db, 100, "999").await?;
    factory::warning::create_warning(db, 555, "200").await?;

    let repo = WarningRepository::new(db);
    let (warnings, total) = repo.get_by_user_paginated(100, 200, 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].guild_id, 100);
    assert_eq!(warnings[0].user_id, "200");

    Ok(())
}

/// Tests warning ordering.
///
/// Verifies that warnings come back newest first so the most recent incident
/// leads a user's record.
///
/// Expected: Ok with reverse chronological order
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ModerationWarning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    for (hours_ago, message) in [(3, "oldest"), (2, "middle"), (1, "newest")] {
        factory::warning::WarningFactory::new(db, 100, "200")
            .message(message)
            .created_at(now - Duration::hours(hours_ago))
            .build()
            .await?;
    }

    let repo = WarningRepository::new(db);
    let (warnings, _) = repo.get_by_user_paginated(100, 200, 0, 10).await?;

    let messages: Vec<&str> = warnings.iter().map(|w| w.message.as_str()).collect();
    assert_eq!(messages, vec!["newest", "middle", "oldest"]);

    Ok(())
}

/// Tests page windows and the total count.
///
/// Expected: Ok with per_page items per page and the full total on every page
#[tokio::test]
async fn paginates_and_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ModerationWarning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::warning::create_warning(db, 100, "200").await?;
    }

    let repo = WarningRepository::new(db);

    let (first_page, total) = repo.get_by_user_paginated(100, 200, 0, 2).await?;
    assert_eq!(first_page.len(), 2);
    assert_eq!(total, 5);

    let (last_page, total) = repo.get_by_user_paginated(100, 200, 2, 2).await?;
    assert_eq!(last_page.len(), 1);
    assert_eq!(total, 5);

    Ok(())
}
