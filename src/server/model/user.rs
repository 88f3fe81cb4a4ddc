//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::UserDto,
    server::{error::AppError, util::parse::parse_u64_from_string},
};

/// Dashboard user identified by their Discord account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Display name of the user.
    pub name: String,
    /// Discord avatar hash.
    pub avatar: Option<String>,
    /// OAuth2 access token from the most recent login.
    pub access_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_login_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The access token never leaves the server.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            discord_id: self.discord_id.to_string(),
            name: self.name,
            avatar: self.avatar,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::Internal(ParseStringId))` - Stored Discord ID is not a u64
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let discord_id = parse_u64_from_string(entity.discord_id)?;

        Ok(Self {
            discord_id,
            name: entity.name,
            avatar: entity.avatar,
            access_token: entity.access_token,
            created_at: entity.created_at,
            last_login_at: entity.last_login_at,
        })
    }
}

/// Parameters for upserting a user on login.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Display name of the user.
    pub name: String,
    pub avatar: Option<String>,
    pub access_token: Option<String>,
}
