use super::*;

/// Tests removing a binding, including on a guild without a profile.
///
/// Expected: Ok with the binding cleared; an unknown guild gets an empty profile
#[tokio::test]
async fn removes_binding() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, message) = factory::helpers::create_message_with_owner(db).await?;

    let service = ServerProfileService::new(db);
    service
        .set_binding(
            owner.discord_id.parse().unwrap(),
            GUILD_ID,
            BindingKind::Leave,
            body(&message.public_id, Some("1")),
        )
        .await?;

    let profile = service.remove_binding(GUILD_ID, BindingKind::Leave).await?;
    let fresh = service.remove_binding(7, BindingKind::Welcome).await?;

    assert!(profile.leave.is_none());
    assert_eq!(fresh.guild_id, 7);
    assert!(fresh.welcome.is_none());

    Ok(())
}
