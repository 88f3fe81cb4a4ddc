use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        server_profile::{BindingKind, ServerProfileDto, SetBindingDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::User,
        service::{discord::DiscordGuildService, server_profile::ServerProfileService},
        state::AppState,
    },
};

pub static SERVER_PROFILE_TAG: &str = "server_profile";

/// Logged in user who administers the guild.
async fn require_guild_admin(
    state: &AppState,
    session: &Session,
    guild_id: u64,
) -> Result<User, AppError> {
    let user = AuthGuard::new(&state.db, session).require().await?;

    DiscordGuildService::new(&state.http_client, &state.discord_http, state.test_mode)
        .require_admin(&user, guild_id)
        .await?;

    Ok(user)
}

fn parse_kind(kind: &str) -> Result<BindingKind, AppError> {
    kind.parse::<BindingKind>().map_err(AppError::BadRequest)
}

#[utoipa::path(
    get,
    path = "/api/server-profile/{guild_id}",
    tag = SERVER_PROFILE_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Guild profile, created empty on first access", body = ServerProfileDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller does not administer the guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_server_profile(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    require_guild_admin(&state, &session, guild_id).await?;

    let profile = ServerProfileService::new(&state.db)
        .get_or_create(guild_id)
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/server-profile/{guild_id}",
    tag = SERVER_PROFILE_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 201, description = "Guild profile, existing one returned unchanged", body = ServerProfileDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller does not administer the guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_server_profile(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    require_guild_admin(&state, &session, guild_id).await?;

    let profile = ServerProfileService::new(&state.db)
        .get_or_create(guild_id)
        .await?;

    Ok((StatusCode::CREATED, Json(profile.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/server-profile/{guild_id}/{kind}",
    tag = SERVER_PROFILE_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("kind" = BindingKind, Path, description = "welcome, leave or ban")
    ),
    request_body = SetBindingDto,
    responses(
        (status = 200, description = "Binding stored", body = ServerProfileDto),
        (status = 400, description = "Unknown binding type or missing channel", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller does not administer the guild", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_binding(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, kind)): Path<(u64, String)>,
    Json(payload): Json<SetBindingDto>,
) -> Result<impl IntoResponse, AppError> {
    let kind = parse_kind(&kind)?;
    let user = require_guild_admin(&state, &session, guild_id).await?;

    let profile = ServerProfileService::new(&state.db)
        .set_binding(user.discord_id, guild_id, kind, payload)
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/server-profile/{guild_id}/{kind}",
    tag = SERVER_PROFILE_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("kind" = BindingKind, Path, description = "welcome, leave or ban")
    ),
    responses(
        (status = 200, description = "Binding removed", body = ServerProfileDto),
        (status = 400, description = "Unknown binding type", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller does not administer the guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_binding(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, kind)): Path<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let kind = parse_kind(&kind)?;
    require_guild_admin(&state, &session, guild_id).await?;

    let profile = ServerProfileService::new(&state.db)
        .remove_binding(guild_id, kind)
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}
