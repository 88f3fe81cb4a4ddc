//! Rating factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a rating for the given Discord user.
pub async fn create_rating(
    db: &DatabaseConnection,
    discord_id: &str,
    rating: i32,
) -> Result<entity::rating::Model, DbErr> {
    let now = Utc::now();
    entity::rating::ActiveModel {
        discord_id: ActiveValue::Set(discord_id.to_string()),
        rating: ActiveValue::Set(rating),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
