use super::*;

/// Tests that rating twice replaces the earlier rating.
///
/// Expected: Ok with a single stored rating holding the latest value
#[tokio::test]
async fn replaces_previous_rating() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rating)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RatingRepository::new(db);
    assert!(!repo.exists(10).await?);

    repo.upsert(10, 2).await?;
    repo.upsert(10, 5).await?;

    assert!(repo.exists(10).await?);
    assert_eq!(repo.average().await?, Some(5.0));

    Ok(())
}
