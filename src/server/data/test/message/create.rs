use super::*;

/// Tests creating a private message.
///
/// Verifies that the repository stores the payload, encodes embeds as JSON and
/// starts the message private with no gallery metadata.
///
/// Expected: Ok with message created and readable by public id
#[tokio::test]
async fn creates_private_message() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let owner_id = user.discord_id.parse::<u64>().unwrap();

    let repo = MessageRepository::new(db);
    let created = repo
        .create(CreateMessageParam {
            public_id: "Ab3dE9z".to_string(),
            owner_id,
            message: titled("Welcome"),
            message_type: MessageType::Welcome,
        })
        .await?;

    assert_eq!(created.public_id, "Ab3dE9z");
    assert_eq!(created.owner_id, owner_id);
    assert_eq!(created.message, titled("Welcome"));
    assert_eq!(created.message_type, MessageType::Welcome);
    assert_eq!(created.visibility, Visibility::Private);
    assert!(created.tags.is_empty());
    assert!(created.published_at.is_none());

    let stored = entity::prelude::Message::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.embeds, r#"[{"title":"Welcome","color":3900150}]"#);

    Ok(())
}

/// Tests that public id collisions are reported.
///
/// Expected: Err(AppError::DbErr) and public_id_exists true
#[tokio::test]
async fn fails_on_duplicate_public_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    MessageFactory::new(db, &user.discord_id)
        .public_id("taken00")
        .build()
        .await?;

    let repo = MessageRepository::new(db);
    assert!(repo.public_id_exists("taken00").await?);
    assert!(!repo.public_id_exists("free000").await?);

    let result = repo
        .create(CreateMessageParam {
            public_id: "taken00".to_string(),
            owner_id: user.discord_id.parse().unwrap(),
            message: titled("Dup"),
            message_type: MessageType::Other,
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
