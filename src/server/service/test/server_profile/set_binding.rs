use super::*;

/// Tests binding the caller's own message as the welcome message.
///
/// Expected: Ok with the binding stored by public id and channel
#[tokio::test]
async fn binds_owned_message_to_channel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, message) = factory::helpers::create_message_with_owner(db).await?;

    let service = ServerProfileService::new(db);
    let profile = service
        .set_binding(
            owner.discord_id.parse().unwrap(),
            GUILD_ID,
            BindingKind::Welcome,
            body(&message.public_id, Some("123456")),
        )
        .await?;

    assert_eq!(
        profile.welcome,
        Some(Binding {
            message_id: message.public_id,
            channel_id: Some(123456),
        })
    );

    Ok(())
}

/// Tests that welcome and leave bindings need a channel while ban does not.
///
/// Expected: BadRequest without channel for leave; ban stored without channel
#[tokio::test]
async fn requires_channel_except_for_ban() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, message) = factory::helpers::create_message_with_owner(db).await?;
    let caller = owner.discord_id.parse().unwrap();

    let service = ServerProfileService::new(db);
    let missing = service
        .set_binding(
            caller,
            GUILD_ID,
            BindingKind::Leave,
            body(&message.public_id, None),
        )
        .await;
    let malformed = service
        .set_binding(
            caller,
            GUILD_ID,
            BindingKind::Leave,
            body(&message.public_id, Some("general")),
        )
        .await;
    let ban = service
        .set_binding(
            caller,
            GUILD_ID,
            BindingKind::Ban,
            body(&message.public_id, Some("999")),
        )
        .await?;

    assert!(matches!(missing, Err(AppError::BadRequest(_))));
    assert!(matches!(malformed, Err(AppError::BadRequest(_))));
    assert_eq!(ban.ban.and_then(|binding| binding.channel_id), None);

    Ok(())
}

/// Tests that another user's private message cannot be bound.
///
/// Expected: Err(AppError::NotFound), while a public message of another user binds
#[tokio::test]
async fn rejects_invisible_message() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let author = factory::create_user(db).await?;
    let caller = factory::create_user(db).await?;
    MessageFactory::new(db, &author.discord_id)
        .public_id("secret0")
        .build()
        .await?;
    MessageFactory::new(db, &author.discord_id)
        .public_id("gallery")
        .public("Shared welcome", "welcome")
        .build()
        .await?;
    let caller_id = caller.discord_id.parse().unwrap();

    let service = ServerProfileService::new(db);
    let private = service
        .set_binding(caller_id, GUILD_ID, BindingKind::Ban, body("secret0", None))
        .await;
    let public = service
        .set_binding(caller_id, GUILD_ID, BindingKind::Ban, body("gallery", None))
        .await?;

    assert!(matches!(private, Err(AppError::NotFound(_))));
    assert_eq!(
        public.ban.map(|binding| binding.message_id),
        Some("gallery".to_string())
    );

    Ok(())
}
