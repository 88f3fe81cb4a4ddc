use super::*;

/// Tests creating a new user.
///
/// Verifies that the user repository creates a user record with the Discord ID,
/// name, avatar and access token from the login.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            avatar: Some("a1b2c3".to_string()),
            access_token: Some("token".to_string()),
            ..param(123456789, "TestUser")
        })
        .await?;

    assert_eq!(user.discord_id, 123456789);
    assert_eq!(user.name, "TestUser");
    assert_eq!(user.avatar.as_deref(), Some("a1b2c3"));
    assert_eq!(user.access_token.as_deref(), Some("token"));

    Ok(())
}

/// Tests logging in again with a changed profile.
///
/// Verifies that upserting an existing user refreshes name, avatar, token and
/// last login time while keeping the original creation time.
///
/// Expected: Ok with profile refreshed and created_at preserved
#[tokio::test]
async fn refreshes_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let original = repo.upsert(param(123456789, "OriginalName")).await?;

    let updated = repo
        .upsert(UpsertUserParam {
            access_token: Some("new-token".to_string()),
            ..param(123456789, "UpdatedName")
        })
        .await?;

    assert_eq!(updated.name, "UpdatedName");
    assert_eq!(updated.access_token.as_deref(), Some("new-token"));
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.last_login_at >= original.last_login_at);

    let count = entity::prelude::User::find().all(db).await?.len();
    assert_eq!(count, 1);

    Ok(())
}
