//! Dashboard rating repository.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect,
};

use crate::server::error::AppError;

/// Repository for the 1 to 5 star ratings users give the dashboard.
pub struct RatingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RatingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a user's rating, replacing any earlier one.
    ///
    /// # Arguments
    /// - `discord_id` - Discord ID of the rating user
    /// - `rating` - Already range checked rating
    ///
    /// # Returns
    /// - `Ok(())` - Rating stored
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn upsert(&self, discord_id: u64, rating: i32) -> Result<(), AppError> {
        let now = Utc::now();

        entity::prelude::Rating::insert(entity::rating::ActiveModel {
            discord_id: ActiveValue::Set(discord_id.to_string()),
            rating: ActiveValue::Set(rating),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::rating::Column::DiscordId)
                .update_columns([
                    entity::rating::Column::Rating,
                    entity::rating::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Checks whether a user has rated.
    pub async fn exists(&self, discord_id: u64) -> Result<bool, AppError> {
        let count = entity::prelude::Rating::find()
            .filter(entity::rating::Column::DiscordId.eq(discord_id.to_string()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Average of all ratings, `None` when nobody has rated.
    pub async fn average(&self) -> Result<Option<f64>, AppError> {
        let ratings: Vec<i32> = entity::prelude::Rating::find()
            .select_only()
            .column(entity::rating::Column::Rating)
            .into_tuple()
            .all(self.db)
            .await?;

        if ratings.is_empty() {
            return Ok(None);
        }

        let total: i64 = ratings.iter().map(|&rating| i64::from(rating)).sum();
        Ok(Some(total as f64 / ratings.len() as f64))
    }
}
