use super::*;

/// Tests that ratings outside 1 to 5 are rejected.
///
/// Expected: Err(AppError::Validation) and nothing stored
#[tokio::test]
async fn rejects_out_of_range_rating() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rating)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RatingService::new(db);

    assert!(matches!(
        service.submit(1, 0).await,
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        service.submit(1, 6).await,
        Err(AppError::Validation(_))
    ));
    assert!(!service.has_rated(1).await?);

    Ok(())
}

/// Tests a valid rating.
///
/// Expected: Ok and has_rated reports true
#[tokio::test]
async fn stores_valid_rating() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rating)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RatingService::new(db);
    service.submit(1, 4).await?;

    assert!(service.has_rated(1).await?);

    Ok(())
}
