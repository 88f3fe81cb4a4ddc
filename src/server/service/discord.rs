use dioxus_logger::tracing;
use serde::Deserialize;
use serenity::{all::GuildId, http::Http};
use std::collections::HashSet;

use crate::{
    model::discord::MutualGuildDto,
    server::{
        config::DISCORD_API_URL,
        error::{auth::AuthError, AppError},
        model::user::User,
    },
};

/// Discord's ADMINISTRATOR permission bit.
pub const ADMINISTRATOR: u64 = 0x8;

/// Guild served in place of Discord lookups when `TEST_MODE` is enabled.
pub const TEST_GUILD_ID: u64 = 1_000_000_000_000_000_001;

/// Guild entry of `GET /users/@me/guilds`.
#[derive(Debug, Deserialize)]
pub struct UserGuild {
    pub id: GuildId,
    pub name: String,
    pub icon: Option<String>,
    #[serde(default)]
    pub owner: bool,
    /// Permission bitset serialized as a string.
    #[serde(default)]
    pub permissions: String,
}

impl UserGuild {
    /// Owners and members with ADMINISTRATOR may manage the guild's messages.
    pub fn is_admin(&self) -> bool {
        self.owner
            || self
                .permissions
                .parse::<u64>()
                .is_ok_and(|bits| bits & ADMINISTRATOR == ADMINISTRATOR)
    }
}

/// Service answering which guilds a user may manage from the dashboard.
///
/// Combines the user's guild list (fetched with their OAuth2 token) with the guilds the
/// bot is in (fetched with the bot token).
pub struct DiscordGuildService<'a> {
    http_client: &'a reqwest::Client,
    discord_http: &'a Http,
    test_mode: bool,
}

impl<'a> DiscordGuildService<'a> {
    pub fn new(http_client: &'a reqwest::Client, discord_http: &'a Http, test_mode: bool) -> Self {
        Self {
            http_client,
            discord_http,
            test_mode,
        }
    }

    /// Guilds the user administers that the bot has joined, with approximate counts.
    ///
    /// # Returns
    /// - `Ok(Vec<MutualGuildDto>)` - Mutual guilds, empty if the user has no stored token
    /// - `Err(AppError::ReqwestErr)` - Failed to list the user's guilds
    /// - `Err(AppError::DiscordErr)` - Failed to list the bot's guilds
    pub async fn mutual_guilds(&self, user: &User) -> Result<Vec<MutualGuildDto>, AppError> {
        if self.test_mode {
            return Ok(vec![test_guild()]);
        }

        let admin_guilds: Vec<UserGuild> = self
            .user_guilds(user)
            .await?
            .into_iter()
            .filter(UserGuild::is_admin)
            .collect();
        if admin_guilds.is_empty() {
            return Ok(Vec::new());
        }

        let bot_guilds: HashSet<GuildId> = self
            .discord_http
            .get_guilds(None, None)
            .await?
            .into_iter()
            .map(|guild| guild.id)
            .collect();

        let mut mutual = Vec::new();
        for guild in admin_guilds
            .into_iter()
            .filter(|guild| bot_guilds.contains(&guild.id))
        {
            let (member_count, presence_count) =
                match self.discord_http.get_guild_with_counts(guild.id).await {
                    Ok(partial) => (
                        partial.approximate_member_count,
                        partial.approximate_presence_count,
                    ),
                    Err(e) => {
                        tracing::warn!("Failed to fetch counts for guild {}: {}", guild.id, e);
                        (None, None)
                    }
                };

            mutual.push(MutualGuildDto {
                id: guild.id.get(),
                name: guild.name,
                icon: guild.icon,
                member_count,
                presence_count,
            });
        }

        Ok(mutual)
    }

    /// Fails with 403 unless the user administers the guild.
    pub async fn require_admin(&self, user: &User, guild_id: u64) -> Result<(), AppError> {
        if self.is_guild_admin(user, guild_id).await? {
            return Ok(());
        }

        Err(AuthError::AccessDenied(
            user.discord_id,
            format!("User is not an administrator of guild {}", guild_id),
        )
        .into())
    }

    /// Checks whether the user owns or administers the guild.
    pub async fn is_guild_admin(&self, user: &User, guild_id: u64) -> Result<bool, AppError> {
        if self.test_mode {
            return Ok(guild_id == TEST_GUILD_ID);
        }

        let is_admin = self
            .user_guilds(user)
            .await?
            .iter()
            .any(|guild| guild.id.get() == guild_id && guild.is_admin());

        Ok(is_admin)
    }

    async fn user_guilds(&self, user: &User) -> Result<Vec<UserGuild>, AppError> {
        let Some(access_token) = user.access_token.as_deref() else {
            tracing::debug!("User {} has no stored access token", user.discord_id);
            return Ok(Vec::new());
        };

        let guilds = self
            .http_client
            .get(format!("{}/users/@me/guilds", DISCORD_API_URL))
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<UserGuild>>()
            .await?;

        Ok(guilds)
    }
}

fn test_guild() -> MutualGuildDto {
    MutualGuildDto {
        id: TEST_GUILD_ID,
        name: "Test Server".to_string(),
        icon: None,
        member_count: Some(42),
        presence_count: Some(7),
    }
}
