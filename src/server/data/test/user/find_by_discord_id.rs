use super::*;

/// Tests finding an existing user by Discord ID.
///
/// Expected: Ok(Some(User)) with matching user data
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.upsert(param(123456789, "TestUser")).await?;

    let user = repo.find_by_discord_id(123456789).await?;

    assert!(user.is_some());
    let user = user.unwrap();
    assert_eq!(user.discord_id, 123456789);
    assert_eq!(user.name, "TestUser");

    Ok(())
}

/// Tests querying for a non-existent user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.find_by_discord_id(999999999).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that a stored Discord ID which is not numeric surfaces as an internal error.
///
/// Expected: Err(AppError::Internal)
#[tokio::test]
async fn fails_on_corrupt_discord_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    test_utils::factory::user::create_user_with_id(db, "not-a-number").await?;

    let entity = entity::prelude::User::find_by_id("not-a-number".to_string())
        .one(db)
        .await?
        .unwrap();
    let result = crate::server::model::user::User::from_entity(entity);

    assert!(matches!(result, Err(AppError::Internal(_))));

    Ok(())
}
