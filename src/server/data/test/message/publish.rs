use super::*;

/// Tests publishing a private message.
///
/// Expected: Ok(Some) with visibility public and all gallery metadata stored
#[tokio::test]
async fn publishes_with_metadata() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, entity) = factory::helpers::create_message_with_owner(db).await?;

    let repo = MessageRepository::new(db);
    let published = repo
        .publish(PublishMessageParam {
            id: entity.id,
            title: "Cozy welcome".to_string(),
            category: MessageType::Welcome,
            language: Some("en".to_string()),
            tags: vec!["cozy".to_string(), "gaming".to_string()],
            keywords: vec!["great".to_string(), "server".to_string()],
        })
        .await?
        .unwrap();

    assert_eq!(published.visibility, Visibility::Public);
    assert_eq!(published.title.as_deref(), Some("Cozy welcome"));
    assert_eq!(published.category, Some(MessageType::Welcome));
    assert_eq!(published.language.as_deref(), Some("en"));
    assert_eq!(published.tags, vec!["cozy", "gaming"]);
    assert_eq!(published.keywords, vec!["great", "server"]);
    assert!(published.published_at.is_some());

    Ok(())
}

/// Tests publishing a message that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_message() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);
    let result = repo
        .publish(PublishMessageParam {
            id: 7,
            title: "Ghost".to_string(),
            category: MessageType::Other,
            language: None,
            tags: Vec::new(),
            keywords: Vec::new(),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
