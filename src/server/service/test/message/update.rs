use super::*;

/// Tests that only the owner may update or delete a message.
///
/// Verifies that a stranger gets 404 for a private message and 403 for a public one,
/// and that the owner's update replaces the payload.
///
/// Expected: owner succeeds, stranger rejected
#[tokio::test]
async fn restricts_writes_to_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    MessageFactory::new(db, &owner.discord_id)
        .public_id("mine000")
        .build()
        .await?;
    MessageFactory::new(db, &owner.discord_id)
        .public_id("public0")
        .public("Shown", "welcome")
        .build()
        .await?;

    let service = MessageService::new(db);
    let payload = UpdateMessageDto::new(card("Edited"), MessageType::Announcement);

    let private_result = service
        .update(owner_id(&stranger), "mine000", payload.clone())
        .await;
    let public_result = service.delete(owner_id(&stranger), "public0").await;
    let updated = service
        .update(owner_id(&owner), "mine000", payload)
        .await?;

    assert!(matches!(private_result, Err(AppError::NotFound(_))));
    assert!(matches!(
        public_result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert_eq!(updated.message, card("Edited"));
    assert_eq!(updated.message_type, MessageType::Announcement);

    Ok(())
}

/// Tests deleting an owned message.
///
/// Expected: Ok and the message is no longer found
#[tokio::test]
async fn deletes_owned_message() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, entity) = factory::helpers::create_message_with_owner(db).await?;

    let service = MessageService::new(db);
    service.delete(owner_id(&owner), &entity.public_id).await?;

    assert!(matches!(
        service
            .get_for_viewer(&entity.public_id, Some(owner_id(&owner)))
            .await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
