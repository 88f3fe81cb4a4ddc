use super::*;

/// Tests removing one binding.
///
/// Expected: Ok(Some) with the welcome binding cleared and the others untouched
#[tokio::test]
async fn clears_only_requested_binding() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    ServerProfileFactory::new(db)
        .guild_id("42")
        .welcome("welcome", "1")
        .leave("leave00", "2")
        .build()
        .await?;

    let repo = ServerProfileRepository::new(db);
    let profile = repo.clear_binding(42, BindingKind::Welcome).await?.unwrap();

    assert!(profile.welcome.is_none());
    assert_eq!(
        profile.leave.map(|binding| binding.message_id),
        Some("leave00".to_string())
    );

    Ok(())
}

/// Tests removing a binding of a guild without a profile.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerProfileRepository::new(db);
    let result = repo.clear_binding(42, BindingKind::Ban).await?;

    assert!(result.is_none());

    Ok(())
}
