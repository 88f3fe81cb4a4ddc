use super::*;

/// Tests message visibility rules.
///
/// Verifies that owners see their private messages, strangers do not, and everyone
/// sees public messages.
///
/// Expected: private visible only to the owner, public visible to all
#[tokio::test]
async fn applies_visibility_rules() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    MessageFactory::new(db, &owner.discord_id)
        .public_id("private")
        .build()
        .await?;
    MessageFactory::new(db, &owner.discord_id)
        .public_id("shared0")
        .public("Shared", "other")
        .build()
        .await?;

    let service = MessageService::new(db);

    assert!(service
        .get_for_viewer("private", Some(owner_id(&owner)))
        .await
        .is_ok());
    assert!(matches!(
        service
            .get_for_viewer("private", Some(owner_id(&stranger)))
            .await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.get_for_viewer("private", None).await,
        Err(AppError::NotFound(_))
    ));
    assert!(service.get_for_viewer("shared0", None).await.is_ok());

    Ok(())
}

/// Tests lookup by internal numeric id.
///
/// Expected: Ok with the same message as the public id lookup
#[tokio::test]
async fn resolves_numeric_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, entity) = factory::helpers::create_message_with_owner(db).await?;

    let service = MessageService::new(db);
    let message = service
        .get_for_viewer(&entity.id.to_string(), Some(owner_id(&owner)))
        .await?;

    assert_eq!(message.public_id, entity.public_id);
    assert!(matches!(
        service.get_for_viewer("no-such-id", Some(owner_id(&owner))).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests that an all-digit 7 character id is only matched as a public id.
///
/// `0000001` parses to the internal id of the first row but has the shape of a public
/// id, so it must not fall back to the numeric lookup.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn digit_public_id_does_not_match_row_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, entity) = factory::helpers::create_message_with_owner(db).await?;
    assert_eq!(entity.id, 1);

    let service = MessageService::new(db);
    let result = service
        .get_for_viewer("0000001", Some(owner_id(&owner)))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
