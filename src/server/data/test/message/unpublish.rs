use super::*;

/// Tests unpublishing a public message.
///
/// Verifies that every public-only field is cleared while content stays untouched.
///
/// Expected: Ok(Some) private message with no gallery metadata
#[tokio::test]
async fn clears_public_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let entity = MessageFactory::new(db, &user.discord_id)
        .content("Keep me")
        .public("Shown", "announcement")
        .language("de")
        .tags(&["news"])
        .keywords(&["update"])
        .build()
        .await?;

    let repo = MessageRepository::new(db);
    let message = repo.unpublish(entity.id).await?.unwrap();

    assert_eq!(message.visibility, Visibility::Private);
    assert_eq!(message.title, None);
    assert_eq!(message.category, None);
    assert_eq!(message.language, None);
    assert!(message.tags.is_empty());
    assert!(message.keywords.is_empty());
    assert_eq!(message.published_at, None);
    assert_eq!(message.message.content.as_deref(), Some("Keep me"));

    Ok(())
}
