use super::*;

/// Tests deleting a message.
///
/// Expected: Ok(true) and the message is gone; a second delete returns Ok(false)
#[tokio::test]
async fn deletes_message() -> Result<(), AppError> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, entity) = factory::helpers::create_message_with_owner(db).await?;

    let repo = MessageRepository::new(db);

    assert!(repo.delete(entity.id).await?);
    assert!(repo.find_by_id(entity.id).await?.is_none());
    assert!(!repo.delete(entity.id).await?);

    Ok(())
}
