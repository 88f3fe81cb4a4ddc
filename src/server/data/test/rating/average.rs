use super::*;

/// Tests averaging across users.
///
/// Expected: Ok(Some) mean of all stored ratings
#[tokio::test]
async fn averages_all_ratings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rating)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_rating(db, "1", 5).await?;
    factory::create_rating(db, "2", 4).await?;
    factory::create_rating(db, "3", 4).await?;

    let repo = RatingRepository::new(db);
    let average = repo.average().await?.unwrap();

    assert!((average - 13.0 / 3.0).abs() < f64::EPSILON);

    Ok(())
}

/// Tests averaging with no ratings.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_ratings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rating)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RatingRepository::new(db);

    assert_eq!(repo.average().await?, None);

    Ok(())
}
