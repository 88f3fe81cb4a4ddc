use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UserDto {
    pub discord_id: String,
    pub name: String,
    pub avatar: Option<String>,
}

impl UserDto {
    /// Discord CDN url of the user's avatar, if they have one.
    pub fn avatar_url(&self) -> Option<String> {
        self.avatar.as_ref().map(|hash| {
            format!(
                "https://cdn.discordapp.com/avatars/{}/{}.png",
                self.discord_id, hash
            )
        })
    }
}

/// Body of `GET /api/auth/user`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CurrentUserDto {
    pub user: UserDto,
}
