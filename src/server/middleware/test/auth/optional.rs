use super::*;

/// Tests that anonymous requests resolve to no user instead of an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_anonymous() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).optional().await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that a stale session is treated as anonymous.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(55).await?;

    let result = AuthGuard::new(db, session).optional().await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that a logged in user is returned.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn returns_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::user::create_user_with_id(db, "42").await?;
    AuthSession::new(session).set_user_id(42).await?;

    let result = AuthGuard::new(db, session).optional().await?;

    assert_eq!(result.map(|user| user.discord_id), Some(42));

    Ok(())
}
