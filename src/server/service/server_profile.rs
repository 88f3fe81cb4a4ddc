use sea_orm::DatabaseConnection;

use crate::{
    model::server_profile::{BindingKind, SetBindingDto},
    server::{
        data::server_profile::ServerProfileRepository,
        error::AppError,
        model::server_profile::{ServerProfile, SetBindingParam},
        service::message::MessageService,
        util::parse::parse_snowflake,
    },
};

/// Manages which saved message a guild sends on each member lifecycle event.
///
/// Guild admin checks happen in the controller; this service assumes the caller may
/// manage `guild_id`.
pub struct ServerProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_or_create(&self, guild_id: u64) -> Result<ServerProfile, AppError> {
        ServerProfileRepository::new(self.db)
            .get_or_create(guild_id)
            .await
    }

    /// Binds a message to a lifecycle event.
    ///
    /// The message must be visible to the caller (their own or a public one). Welcome
    /// and leave bindings need a channel; ban bindings are sent by direct message and
    /// any channel given is ignored.
    ///
    /// # Returns
    /// - `Ok(ServerProfile)` - Profile after the change
    /// - `Err(AppError::BadRequest)` - Channel missing or malformed
    /// - `Err(AppError::NotFound)` - Message missing or not visible to the caller
    pub async fn set_binding(
        &self,
        caller_id: u64,
        guild_id: u64,
        kind: BindingKind,
        payload: SetBindingDto,
    ) -> Result<ServerProfile, AppError> {
        let channel_id = if kind.requires_channel() {
            let channel = payload
                .channel_id
                .as_deref()
                .filter(|channel| !channel.trim().is_empty())
                .ok_or_else(|| {
                    AppError::BadRequest(format!("A channel is required for {} messages", kind))
                })?;
            Some(parse_snowflake(channel, "channel id")?)
        } else {
            None
        };

        let message = MessageService::new(self.db)
            .get_for_viewer(payload.message_id.trim(), Some(caller_id))
            .await?;

        ServerProfileRepository::new(self.db)
            .set_binding(SetBindingParam {
                guild_id,
                kind,
                message_id: message.public_id,
                channel_id,
            })
            .await
    }

    /// Removes a binding; a guild without a profile gets an empty one.
    pub async fn remove_binding(
        &self,
        guild_id: u64,
        kind: BindingKind,
    ) -> Result<ServerProfile, AppError> {
        let repo = ServerProfileRepository::new(self.db);

        match repo.clear_binding(guild_id, kind).await? {
            Some(profile) => Ok(profile),
            None => repo.get_or_create(guild_id).await,
        }
    }
}
