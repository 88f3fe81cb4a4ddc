//! Server profile domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::server_profile::{BindingDto, BindingKind, ServerProfileDto},
    server::{error::AppError, util::parse::parse_u64_from_string},
};

/// A saved message bound to a lifecycle event.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// Public id of the bound message.
    pub message_id: String,
    /// Target channel, `None` for ban messages which are sent by DM.
    pub channel_id: Option<u64>,
}

impl Binding {
    fn from_columns(
        message_id: Option<String>,
        channel_id: Option<String>,
    ) -> Result<Option<Self>, AppError> {
        let Some(message_id) = message_id else {
            return Ok(None);
        };

        let channel_id = channel_id.map(parse_u64_from_string).transpose()?;

        Ok(Some(Self {
            message_id,
            channel_id,
        }))
    }

    pub fn into_dto(self) -> BindingDto {
        BindingDto {
            message_id: self.message_id,
            channel_id: self.channel_id.map(|id| id.to_string()),
        }
    }
}

/// Per-guild lifecycle bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerProfile {
    pub guild_id: u64,
    pub welcome: Option<Binding>,
    pub leave: Option<Binding>,
    pub ban: Option<Binding>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ServerProfile {
    pub fn binding(&self, kind: BindingKind) -> Option<&Binding> {
        match kind {
            BindingKind::Welcome => self.welcome.as_ref(),
            BindingKind::Leave => self.leave.as_ref(),
            BindingKind::Ban => self.ban.as_ref(),
        }
    }

    pub fn into_dto(self) -> ServerProfileDto {
        ServerProfileDto {
            guild_id: self.guild_id.to_string(),
            welcome_message: self.welcome.map(Binding::into_dto),
            leave_message: self.leave.map(Binding::into_dto),
            ban_message: self.ban.map(Binding::into_dto),
        }
    }

    pub fn from_entity(entity: entity::server_profile::Model) -> Result<Self, AppError> {
        Ok(Self {
            guild_id: parse_u64_from_string(entity.guild_id)?,
            welcome: Binding::from_columns(entity.welcome_message_id, entity.welcome_channel_id)?,
            leave: Binding::from_columns(entity.leave_message_id, entity.leave_channel_id)?,
            ban: Binding::from_columns(entity.ban_message_id, None)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Parameters for binding a message to an event.
#[derive(Debug, Clone)]
pub struct SetBindingParam {
    pub guild_id: u64,
    pub kind: BindingKind,
    pub message_id: String,
    pub channel_id: Option<u64>,
}
