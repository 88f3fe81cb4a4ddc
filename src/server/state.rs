//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned into each handler through Axum's state
//! extraction. Every field is cheap to clone.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool.
    pub db: DatabaseConnection,

    /// Client for user-token Discord API calls. Redirects are disabled.
    pub http_client: reqwest::Client,

    pub oauth_client: OAuth2Client,

    /// Bot-token Discord client shared with the gateway connection.
    pub discord_http: Arc<Http>,

    /// Base URL of the dashboard, used for post-login redirects.
    pub app_url: String,

    /// See `Config::test_mode`.
    pub test_mode: bool,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        discord_http: Arc<Http>,
        app_url: String,
        test_mode: bool,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            discord_http,
            app_url,
            test_mode,
        }
    }
}
