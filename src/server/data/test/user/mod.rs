use crate::server::{data::user::UserRepository, error::AppError, model::user::UpsertUserParam};
use sea_orm::EntityTrait;
use test_utils::builder::TestBuilder;

mod find_by_discord_id;
mod upsert;

fn param(discord_id: u64, name: &str) -> UpsertUserParam {
    UpsertUserParam {
        discord_id,
        name: name.to_string(),
        avatar: None,
        access_token: None,
    }
}
