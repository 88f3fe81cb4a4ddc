use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, discord::MutualGuildDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::discord::DiscordGuildService,
        state::AppState,
    },
};

pub static DISCORD_TAG: &str = "discord";

#[utoipa::path(
    get,
    path = "/api/guilds/mutual",
    tag = DISCORD_TAG,
    responses(
        (status = 200, description = "Guilds the user administers that the bot has joined", body = Vec<MutualGuildDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mutual_guilds(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let guilds = DiscordGuildService::new(&state.http_client, &state.discord_http, state.test_mode)
        .mutual_guilds(&user)
        .await?;

    Ok((StatusCode::OK, Json(guilds)))
}
