use super::*;

/// Tests creating a message from raw editor output.
///
/// Verifies that the payload is normalized before it is stored and that a 7 character
/// public id is assigned.
///
/// Expected: Ok with trimmed title, empty embed dropped and a valid public id
#[tokio::test]
async fn normalizes_and_assigns_public_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let service = MessageService::new(db);
    let created = service
        .create(
            owner_id(&user),
            CreateMessageDto {
                content: Some("   ".to_string()),
                embeds: vec![
                    Embed {
                        title: Some("  Welcome  ".to_string()),
                        ..Default::default()
                    },
                    Embed::default(),
                ],
                message_type: MessageType::Welcome,
            },
        )
        .await?;

    assert!(is_public_id(&created.public_id));
    assert_eq!(created.message, card("Welcome"));
    assert_eq!(created.message_type, MessageType::Welcome);
    assert_eq!(created.visibility, Visibility::Private);

    Ok(())
}

/// Tests that blank messages are rejected.
///
/// Expected: Err(AppError::Validation) and nothing stored
#[tokio::test]
async fn rejects_blank_message() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let service = MessageService::new(db);
    let result = service
        .create(
            owner_id(&user),
            CreateMessageDto {
                content: Some("\n".to_string()),
                embeds: vec![Embed {
                    color: Some(0xff0000),
                    ..Default::default()
                }],
                message_type: MessageType::Other,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(service.list_for_owner(owner_id(&user)).await?.is_empty());

    Ok(())
}

/// Tests that messages over Discord's limits are rejected.
///
/// Expected: Err(AppError::Validation) naming the content limit
#[tokio::test]
async fn rejects_oversized_content() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let service = MessageService::new(db);
    let result = service
        .create(
            owner_id(&user),
            CreateMessageDto {
                content: Some("x".repeat(2001)),
                embeds: Vec::new(),
                message_type: MessageType::Other,
            },
        )
        .await;

    let Err(AppError::Validation(message)) = result else {
        panic!("expected validation error, got {:?}", result.map(|m| m.public_id));
    };
    assert!(message.contains("2001"));

    Ok(())
}

/// Tests that colors outside 24 bits are rejected rather than dropped.
///
/// Expected: Err(AppError::Validation) naming the color and nothing stored
#[tokio::test]
async fn rejects_out_of_range_color() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let service = MessageService::new(db);
    let result = service
        .create(
            owner_id(&user),
            CreateMessageDto {
                content: None,
                embeds: vec![Embed {
                    title: Some("Hi".to_string()),
                    color: Some(0x1000000),
                    ..Default::default()
                }],
                message_type: MessageType::Other,
            },
        )
        .await;

    let Err(AppError::Validation(message)) = result else {
        panic!("expected validation error, got {:?}", result.map(|m| m.public_id));
    };
    assert!(message.contains("16777216"));
    assert!(service.list_for_owner(owner_id(&user)).await?.is_empty());

    Ok(())
}
