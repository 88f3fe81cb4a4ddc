use super::*;

/// Tests finding a message by its public id.
///
/// Expected: Ok(Some) with embeds decoded from the JSON column
#[tokio::test]
async fn finds_message_by_public_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    MessageFactory::new(db, &user.discord_id)
        .public_id("xYz1234")
        .content("Hi")
        .embeds_json(r#"[{"title":"Rules","fields":[{"name":"1","value":"Be kind","inline":true}]}]"#)
        .build()
        .await?;

    let repo = MessageRepository::new(db);
    let message = repo.find_by_public_id("xYz1234").await?.unwrap();

    assert_eq!(message.message.content.as_deref(), Some("Hi"));
    assert_eq!(message.message.embeds.len(), 1);
    assert_eq!(message.message.embeds[0].fields[0].value, "Be kind");
    assert!(message.message.embeds[0].fields[0].inline);
    assert!(repo.find_by_public_id("missing").await?.is_none());

    Ok(())
}

/// Tests that a row whose embeds no longer decode is reported as corrupt.
///
/// Expected: Err(AppError::Internal(CorruptStoredJson)) naming the embeds column
#[tokio::test]
async fn fails_on_corrupt_embeds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    MessageFactory::new(db, &user.discord_id)
        .public_id("broken1")
        .embeds_json("{not json")
        .build()
        .await?;

    let repo = MessageRepository::new(db);
    let result = repo.find_by_public_id("broken1").await;

    assert!(matches!(
        result,
        Err(AppError::Internal(InternalError::CorruptStoredJson {
            column: "embeds",
            ..
        }))
    ));

    Ok(())
}

/// Tests that an unknown stored message type is reported instead of guessed.
///
/// Expected: Err(AppError::Internal(UnknownStoredValue))
#[tokio::test]
async fn fails_on_unknown_message_type() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    MessageFactory::new(db, &user.discord_id)
        .public_id("oddtype")
        .message_type("birthday")
        .build()
        .await?;

    let repo = MessageRepository::new(db);
    let result = repo.find_by_public_id("oddtype").await;

    assert!(matches!(
        result,
        Err(AppError::Internal(InternalError::UnknownStoredValue { .. }))
    ));

    Ok(())
}
