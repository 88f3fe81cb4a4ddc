use super::*;

/// Tests listing a user's messages.
///
/// Verifies that only the owner's messages are returned, newest first.
///
/// Expected: Ok with the owner's two messages in reverse creation order
#[tokio::test]
async fn returns_owner_messages_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let now = Utc::now();
    MessageFactory::new(db, &owner.discord_id)
        .public_id("older00")
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    MessageFactory::new(db, &owner.discord_id)
        .public_id("newer00")
        .created_at(now)
        .build()
        .await?;
    factory::create_message(db, &other.discord_id).await?;

    let repo = MessageRepository::new(db);
    let messages = repo
        .get_by_owner(owner.discord_id.parse().unwrap())
        .await?;

    let ids: Vec<&str> = messages.iter().map(|m| m.public_id.as_str()).collect();
    assert_eq!(ids, vec!["newer00", "older00"]);

    Ok(())
}

/// Tests listing for a user without messages.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_user_without_messages() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);
    let messages = repo.get_by_owner(42).await?;

    assert!(messages.is_empty());

    Ok(())
}
