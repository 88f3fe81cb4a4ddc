use super::*;

/// Tests binding a message on a guild without a profile.
///
/// Expected: Ok with the profile created and the welcome binding stored
#[tokio::test]
async fn creates_profile_with_binding() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerProfileRepository::new(db);
    let profile = repo
        .set_binding(SetBindingParam {
            guild_id: 42,
            kind: BindingKind::Welcome,
            message_id: "abc1234".to_string(),
            channel_id: Some(9000),
        })
        .await?;

    assert_eq!(
        profile.welcome,
        Some(Binding {
            message_id: "abc1234".to_string(),
            channel_id: Some(9000),
        })
    );
    assert_eq!(repo.find_by_guild_id(42).await?, Some(profile));

    Ok(())
}

/// Tests replacing a binding and that ban bindings drop the channel.
///
/// Expected: Ok with the leave binding replaced and no channel stored for ban
#[tokio::test]
async fn replaces_binding_and_ignores_ban_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    ServerProfileFactory::new(db)
        .guild_id("42")
        .leave("oldleav", "1")
        .build()
        .await?;

    let repo = ServerProfileRepository::new(db);
    repo.set_binding(SetBindingParam {
        guild_id: 42,
        kind: BindingKind::Leave,
        message_id: "newleav".to_string(),
        channel_id: Some(2),
    })
    .await?;
    let profile = repo
        .set_binding(SetBindingParam {
            guild_id: 42,
            kind: BindingKind::Ban,
            message_id: "banmsg0".to_string(),
            channel_id: Some(3),
        })
        .await?;

    assert_eq!(
        profile.leave,
        Some(Binding {
            message_id: "newleav".to_string(),
            channel_id: Some(2),
        })
    );
    assert_eq!(
        profile.ban,
        Some(Binding {
            message_id: "banmsg0".to_string(),
            channel_id: None,
        })
    );

    Ok(())
}
