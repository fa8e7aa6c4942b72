use super::*;

/// Tests creating a warning record.
///
/// Verifies that the repository stringifies the user and author snowflakes,
/// stores the message verbatim, and stamps a creation time.
///
/// Expected: Ok with warning created
#[tokio::test]
async fn creates_warning_with_stringified_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ModerationWarning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let before = Utc::now();
    let repo = WarningRepository::new(db);
    let warning = repo
        .create(CreateWarningParam {
            guild_id: 100,
            user_id: 200,
            author_id: 300,
            author_tag: "Moderator#0001".to_string(),
            message: "**USER TIMED OUT**: spamming".to_string(),
        })
        .await?;

    assert_eq!(warning.guild_id, 100);
    assert_eq!(warning.user_id, "200");
    assert_eq!(warning.author_id, "300");
    assert_eq!(warning.author_tag, "Moderator#0001");
    assert_eq!(warning.message, "**USER TIMED OUT**: spamming");
    assert!(warning.created_at >= before);

    Ok(())
}

/// Tests creating a warning whose author is the unknown-author sentinel.
///
/// Verifies that the zero author ID round-trips as the literal string "0"
/// instead of being rejected or nulled.
///
/// Expected: Ok with sentinel identity stored
#[tokio::test]
async fn creates_warning_for_unknown_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ModerationWarning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WarningRepository::new(db);
    let warning = repo
        .create(CreateWarningParam {
            guild_id: 100,
            user_id: 200,
            author_id: 0,
            author_tag: "Unknown#????".to_string(),
            message: "**USER TIMED OUT**".to_string(),
        })
        .await?;

    assert_eq!(warning.author_id, "0");
    assert_eq!(warning.author_tag, "Unknown#????");

    Ok(())
}
