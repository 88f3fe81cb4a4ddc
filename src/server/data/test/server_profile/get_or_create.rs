use super::*;

/// Tests lazily creating a profile for a new guild.
///
/// Expected: Ok with an empty profile, and the same profile on a second call
#[tokio::test]
async fn creates_empty_profile_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerProfileRepository::new(db);
    assert!(repo.find_by_guild_id(555).await?.is_none());

    let created = repo.get_or_create(555).await?;
    let again = repo.get_or_create(555).await?;

    assert_eq!(created.guild_id, 555);
    assert!(created.welcome.is_none());
    assert!(created.leave.is_none());
    assert!(created.ban.is_none());
    assert_eq!(created, again);

    Ok(())
}

/// Tests reading an existing profile with bindings.
///
/// Expected: Ok with channel ids parsed and the ban binding channel-less
#[tokio::test]
async fn returns_existing_bindings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    ServerProfileFactory::new(db)
        .guild_id("777")
        .welcome("welcome", "1001")
        .ban("banned0")
        .build()
        .await?;

    let repo = ServerProfileRepository::new(db);
    let profile = repo.get_or_create(777).await?;

    assert_eq!(
        profile.welcome,
        Some(Binding {
            message_id: "welcome".to_string(),
            channel_id: Some(1001),
        })
    );
    assert!(profile.leave.is_none());
    assert_eq!(
        profile.binding(BindingKind::Ban),
        Some(&Binding {
            message_id: "banned0".to_string(),
            channel_id: None,
        })
    );

    Ok(())
}
