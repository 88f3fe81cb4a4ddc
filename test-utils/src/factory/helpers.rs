//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with one private message they own.
///
/// # Returns
/// - `Ok((user, message))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_message_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::message::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let message = crate::factory::message::create_message(db, &user.discord_id).await?;

    Ok((user, message))
}
