mod client;
mod editor;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{bot, config::Config, startup, state::AppState};

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let session = startup::connect_to_session(&db).await?;
        let http_client = startup::setup_reqwest_client()?;
        let oauth_client = startup::setup_oauth_client(&config)?;
        let cors = startup::setup_cors(&config)?;

        tracing::info!("Starting server");
        if config.test_mode {
            tracing::warn!("TEST_MODE is enabled, guild lists are served from a fixed test guild");
        }

        // Initialize Discord bot and extract HTTP client
        let bot_db = db.clone();
        let (bot_client, discord_http) = bot::start::init_bot(&config, bot_db).await?;

        // Start Discord bot in a separate task
        tokio::spawn(async move {
            if let Err(e) = bot::start::start_bot(bot_client).await {
                tracing::error!("Discord bot error: {}", e);
            }
        });

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router()
            .with_state(AppState::new(
                db,
                http_client,
                oauth_client,
                discord_http,
                config.app_url.clone(),
                config.test_mode,
            ))
            .layer(session)
            .layer(cors);
        router = router.merge(server_routes);

        Ok(router)
    })
}
