//! Server profile factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating server profiles with optional bindings.
pub struct ServerProfileFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    welcome: Option<(String, String)>,
    leave: Option<(String, String)>,
    ban_message_id: Option<String>,
}

impl<'a> ServerProfileFactory<'a> {
    /// Creates a factory for an unbound profile with a unique guild ID.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: (900_000_000 + next_id()).to_string(),
            welcome: None,
            leave: None,
            ban_message_id: None,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn welcome(mut self, message_id: impl Into<String>, channel_id: impl Into<String>) -> Self {
        self.welcome = Some((message_id.into(), channel_id.into()));
        self
    }

    pub fn leave(mut self, message_id: impl Into<String>, channel_id: impl Into<String>) -> Self {
        self.leave = Some((message_id.into(), channel_id.into()));
        self
    }

    pub fn ban(mut self, message_id: impl Into<String>) -> Self {
        self.ban_message_id = Some(message_id.into());
        self
    }

    pub async fn build(self) -> Result<entity::server_profile::Model, DbErr> {
        let now = Utc::now();
        let (welcome_message_id, welcome_channel_id) = self.welcome.unzip();
        let (leave_message_id, leave_channel_id) = self.leave.unzip();

        entity::server_profile::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            welcome_message_id: ActiveValue::Set(welcome_message_id),
            welcome_channel_id: ActiveValue::Set(welcome_channel_id),
            leave_message_id: ActiveValue::Set(leave_message_id),
            leave_channel_id: ActiveValue::Set(leave_channel_id),
            ban_message_id: ActiveValue::Set(self.ban_message_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unbound server profile for a unique guild.
pub async fn create_server_profile(
    db: &DatabaseConnection,
) -> Result<entity::server_profile::Model, DbErr> {
    ServerProfileFactory::new(db).build().await
}
