use super::*;

/// Tests publishing with free text keywords and mixed case tags.
///
/// Expected: Ok with keywords extracted and tags lowercased and deduplicated
#[tokio::test]
async fn processes_keywords_and_tags() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, entity) = factory::helpers::create_message_with_owner(db).await?;

    let service = MessageService::new(db);
    let published = service
        .publish(
            owner_id(&owner),
            &entity.public_id,
            PublishMessageDto {
                title: "  Cozy welcome ".to_string(),
                category: Some(MessageType::Welcome),
                language: Some(" en ".to_string()),
                tags: vec!["Gaming".to_string(), "gaming".to_string(), " Cozy".to_string()],
                keywords: "This is a Great Server".to_string(),
            },
        )
        .await?;

    assert_eq!(published.visibility, Visibility::Public);
    assert_eq!(published.title.as_deref(), Some("Cozy welcome"));
    assert_eq!(published.language.as_deref(), Some("en"));
    assert_eq!(published.tags, vec!["gaming", "cozy"]);
    assert_eq!(published.keywords, vec!["great", "server"]);

    Ok(())
}

/// Tests that publishing without a title leaves the message private.
///
/// Expected: Err(AppError::Validation) and visibility unchanged
#[tokio::test]
async fn rejects_missing_title() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, entity) = factory::helpers::create_message_with_owner(db).await?;

    let service = MessageService::new(db);
    let result = service
        .publish(
            owner_id(&owner),
            &entity.public_id,
            PublishMessageDto {
                title: " ".to_string(),
                category: Some(MessageType::Welcome),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    let message = service
        .get_for_viewer(&entity.public_id, Some(owner_id(&owner)))
        .await?;
    assert_eq!(message.visibility, Visibility::Private);

    Ok(())
}

/// Tests the community search through the service.
///
/// Expected: search text and comma separated tags are parsed before matching
#[tokio::test]
async fn searches_public_messages() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, entity) = factory::helpers::create_message_with_owner(db).await?;

    let service = MessageService::new(db);
    service
        .publish(
            owner_id(&owner),
            &entity.public_id,
            PublishMessageDto {
                title: "Server rules".to_string(),
                category: Some(MessageType::Announcement),
                language: None,
                tags: vec!["rules".to_string(), "moderation".to_string()],
                keywords: "strict friendly".to_string(),
            },
        )
        .await?;

    let hits = service
        .search_public(PublicSearchParams {
            search: Some("The FRIENDLY one".to_string()),
            category: Some(MessageType::Announcement),
            tags: Some("Rules, moderation".to_string()),
        })
        .await?;
    let misses = service
        .search_public(PublicSearchParams {
            search: None,
            category: Some(MessageType::Welcome),
            tags: None,
        })
        .await?;

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].public_id, entity.public_id);
    assert!(misses.is_empty());

    let unpublished = service
        .unpublish(owner_id(&owner), &entity.public_id)
        .await?;
    assert_eq!(unpublished.visibility, Visibility::Private);
    assert!(service.list_public().await?.is_empty());

    Ok(())
}
