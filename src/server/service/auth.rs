use dioxus_logger::tracing;
use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serenity::all::User as DiscordUser;
use url::Url;

use crate::server::{
    config::DISCORD_API_URL,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
    state::OAuth2Client,
};

/// Service for the Discord OAuth2 login flow.
///
/// Exchanges authorization codes for access tokens, fetches the Discord profile and
/// records the user. The access token is kept so the dashboard can list the guilds the
/// user administers.
pub struct AuthService<'a> {
    /// Database connection for user operations.
    pub db: &'a DatabaseConnection,
    /// HTTP client for Discord API requests.
    pub http_client: &'a reqwest::Client,
    /// OAuth2 client for Discord authentication flow.
    pub oauth_client: &'a OAuth2Client,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `http_client` - Reference to the HTTP client for Discord API requests
    /// - `oauth_client` - Reference to the configured OAuth2 client
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
        }
    }

    /// Generates a Discord OAuth2 login URL with CSRF protection.
    ///
    /// Requests the `identify` and `guilds` scopes. Returns both the URL and the CSRF
    /// token the callback must present.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Tuple containing the authorization URL and CSRF state token
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .add_scope(Scope::new("guilds".to_string()))
            .url();

        (authorize_url, csrf_state)
    }

    /// Handles OAuth2 callback and authenticates user.
    ///
    /// Exchanges the authorization code for an access token, fetches the user's Discord
    /// profile and creates or refreshes the user record.
    ///
    /// # Arguments
    /// - `authorization_code` - OAuth2 authorization code from Discord callback
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user with updated information
    /// - `Err(AppError::AuthErr)` - OAuth2 token exchange failed
    /// - `Err(AppError::ReqwestErr)` - Failed to fetch user data from Discord API
    /// - `Err(AppError::DbErr)` - Database error during user upsert
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(AuthError::from)?;

        let discord_user = self.fetch_discord_user(&token).await?;
        let user = user_repo
            .upsert(UpsertUserParam {
                discord_id: discord_user.id.get(),
                name: discord_user
                    .global_name
                    .clone()
                    .unwrap_or_else(|| discord_user.name.clone()),
                avatar: discord_user.avatar.map(|hash| hash.to_string()),
                access_token: Some(token.access_token().secret().clone()),
            })
            .await?;

        tracing::info!("User {} ({}) logged in", user.name, user.discord_id);

        Ok(user)
    }

    /// Retrieves a Discord user's information using provided access token.
    ///
    /// # Arguments
    /// - `token` - OAuth2 access token for the authenticated user
    ///
    /// # Returns
    /// - `Ok(DiscordUser)` - Successfully retrieved user information
    /// - `Err(AppError::ReqwestErr)` - HTTP request failed or response parsing failed
    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordUser, AppError> {
        let access_token = token.access_token().secret();

        let user_info = self
            .http_client
            .get(format!("{}/users/@me", DISCORD_API_URL))
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .error_for_status()?
            .json::<DiscordUser>()
            .await?;

        Ok(user_info)
    }
}
