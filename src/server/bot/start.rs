use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use std::sync::Arc;

use crate::server::{bot::handler::Handler, config::Config, error::AppError};

/// Builds the Discord client without connecting to the gateway.
///
/// Returns the client together with its HTTP handle so the API layer can share it.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `db` - Database connection handed to the event handler
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to be started
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
) -> Result<(Client, Arc<Http>), AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MODERATION;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(db))
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Connects to the gateway and processes events until shutdown.
///
/// Should be called from within a `tokio::spawn` task since it blocks.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
