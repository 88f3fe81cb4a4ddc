use sea_orm::DatabaseConnection;

use crate::{
    model::rating::{MAX_RATING, MIN_RATING},
    server::{data::rating::RatingRepository, error::AppError},
};

pub struct RatingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RatingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records the user's rating, replacing an earlier one.
    ///
    /// # Returns
    /// - `Ok(())` - Rating stored
    /// - `Err(AppError::Validation)` - Rating outside 1 to 5
    pub async fn submit(&self, discord_id: u64, rating: i32) -> Result<(), AppError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(AppError::Validation(format!(
                "Rating must be between {} and {}",
                MIN_RATING, MAX_RATING
            )));
        }

        RatingRepository::new(self.db).upsert(discord_id, rating).await
    }

    pub async fn has_rated(&self, discord_id: u64) -> Result<bool, AppError> {
        RatingRepository::new(self.db).exists(discord_id).await
    }
}
