//! Server profile data repository.
//!
//! A server profile records which saved message is sent for each member lifecycle
//! event of a guild. Profiles are created lazily the first time a guild admin opens
//! the dashboard for that guild.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait};

use crate::{
    model::server_profile::BindingKind,
    server::{
        error::AppError,
        model::server_profile::{ServerProfile, SetBindingParam},
    },
};

/// Repository providing database operations for server profiles.
pub struct ServerProfileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerProfileRepository<'a> {
    /// Creates a new ServerProfileRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the profile of a guild.
    ///
    /// # Returns
    /// - `Ok(Some(ServerProfile))` - Profile exists
    /// - `Ok(None)` - Guild has no profile yet
    /// - `Err(AppError)` - Database error or corrupt stored id
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<ServerProfile>, AppError> {
        let entity = entity::prelude::ServerProfile::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        entity.map(ServerProfile::from_entity).transpose()
    }

    /// Gets the profile of a guild, creating an empty one if none exists.
    ///
    /// # Returns
    /// - `Ok(ServerProfile)` - Existing or newly created profile
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn get_or_create(&self, guild_id: u64) -> Result<ServerProfile, AppError> {
        let entity = self.find_or_insert(guild_id).await?;

        ServerProfile::from_entity(entity)
    }

    /// Binds a message to a lifecycle event, replacing any previous binding.
    ///
    /// Creates the profile if the guild has none. The channel is not stored for ban
    /// bindings.
    ///
    /// # Returns
    /// - `Ok(ServerProfile)` - Profile after the change
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn set_binding(&self, param: SetBindingParam) -> Result<ServerProfile, AppError> {
        let entity = self.find_or_insert(param.guild_id).await?;
        let channel_id = param.channel_id.map(|id| id.to_string());

        let mut active: entity::server_profile::ActiveModel = entity.into();
        match param.kind {
            BindingKind::Welcome => {
                active.welcome_message_id = ActiveValue::Set(Some(param.message_id));
                active.welcome_channel_id = ActiveValue::Set(channel_id);
            }
            BindingKind::Leave => {
                active.leave_message_id = ActiveValue::Set(Some(param.message_id));
                active.leave_channel_id = ActiveValue::Set(channel_id);
            }
            BindingKind::Ban => {
                active.ban_message_id = ActiveValue::Set(Some(param.message_id));
            }
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        ServerProfile::from_entity(entity)
    }

    /// Removes the binding of a lifecycle event.
    ///
    /// # Returns
    /// - `Ok(Some(ServerProfile))` - Profile after the change
    /// - `Ok(None)` - Guild has no profile
    pub async fn clear_binding(
        &self,
        guild_id: u64,
        kind: BindingKind,
    ) -> Result<Option<ServerProfile>, AppError> {
        let Some(entity) = entity::prelude::ServerProfile::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::server_profile::ActiveModel = entity.into();
        match kind {
            BindingKind::Welcome => {
                active.welcome_message_id = ActiveValue::Set(None);
                active.welcome_channel_id = ActiveValue::Set(None);
            }
            BindingKind::Leave => {
                active.leave_message_id = ActiveValue::Set(None);
                active.leave_channel_id = ActiveValue::Set(None);
            }
            BindingKind::Ban => {
                active.ban_message_id = ActiveValue::Set(None);
            }
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        ServerProfile::from_entity(entity).map(Some)
    }

    async fn find_or_insert(
        &self,
        guild_id: u64,
    ) -> Result<entity::server_profile::Model, AppError> {
        let existing = entity::prelude::ServerProfile::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;
        if let Some(entity) = existing {
            return Ok(entity);
        }

        let now = Utc::now();
        let entity = entity::server_profile::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            welcome_message_id: ActiveValue::Set(None),
            welcome_channel_id: ActiveValue::Set(None),
            leave_message_id: ActiveValue::Set(None),
            leave_channel_id: ActiveValue::Set(None),
            ban_message_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(entity)
    }
}
