use super::*;

/// Tests overwriting a message payload.
///
/// Verifies that content, embeds and type are replaced wholesale while the public
/// metadata of a published message is kept.
///
/// Expected: Ok(Some) with new payload and unchanged gallery title
#[tokio::test]
async fn overwrites_payload() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let entity = MessageFactory::new(db, &user.discord_id)
        .public("Gallery card", "welcome")
        .build()
        .await?;

    let repo = MessageRepository::new(db);
    let replacement = Message {
        content: None,
        embeds: vec![Embed {
            description: Some("Bye {user.name}".to_string()),
            ..Default::default()
        }],
    };
    let updated = repo
        .update(UpdateMessageParam {
            id: entity.id,
            message: replacement.clone(),
            message_type: MessageType::Leave,
        })
        .await?
        .unwrap();

    assert_eq!(updated.message, replacement);
    assert_eq!(updated.message_type, MessageType::Leave);
    assert_eq!(updated.title.as_deref(), Some("Gallery card"));
    assert_eq!(updated.visibility, Visibility::Public);
    assert!(updated.updated_at >= updated.created_at);

    Ok(())
}

/// Tests updating a message that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_message() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);
    let result = repo
        .update(UpdateMessageParam {
            id: 999,
            message: titled("Nothing"),
            message_type: MessageType::Other,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
