use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        message::{
            CreateMessageDto, MessageDto, PublicSearchParams, PublishMessageDto, UpdateMessageDto,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::message::SavedMessage,
        service::message::MessageService, state::AppState,
    },
};

pub static MESSAGE_TAG: &str = "message";
pub static COMMUNITY_TAG: &str = "community";

fn into_dtos(messages: Vec<SavedMessage>) -> Vec<MessageDto> {
    messages.into_iter().map(SavedMessage::into_dto).collect()
}

#[utoipa::path(
    post,
    path = "/api/messages",
    tag = MESSAGE_TAG,
    request_body = CreateMessageDto,
    responses(
        (status = 201, description = "Message created", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 422, description = "Message is blank or exceeds Discord limits", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_message(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let message = MessageService::new(&state.db)
        .create(user.discord_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/messages",
    tag = MESSAGE_TAG,
    responses(
        (status = 200, description = "Caller's messages, newest first; empty when logged out", body = Vec<MessageDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_messages(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let Some(user) = AuthGuard::new(&state.db, &session).optional().await? else {
        return Ok((StatusCode::OK, Json(Vec::new())));
    };

    let messages = MessageService::new(&state.db)
        .list_for_owner(user.discord_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(messages))))
}

#[utoipa::path(
    get,
    path = "/api/messages/{id}",
    tag = MESSAGE_TAG,
    params(
        ("id" = String, Path, description = "Public id or internal numeric id")
    ),
    responses(
        (status = 200, description = "Message owned by the caller or public", body = MessageDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_message(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let message = MessageService::new(&state.db)
        .get_for_viewer(&id, viewer.map(|user| user.discord_id))
        .await?;

    Ok((StatusCode::OK, Json(message.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/messages/{id}",
    tag = MESSAGE_TAG,
    params(
        ("id" = String, Path, description = "Public id or internal numeric id")
    ),
    request_body = UpdateMessageDto,
    responses(
        (status = 200, description = "Message overwritten", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Message belongs to another user", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 422, description = "Message is blank or exceeds Discord limits", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_message(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(payload): Json<UpdateMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let message = MessageService::new(&state.db)
        .update(user.discord_id, &id, payload)
        .await?;

    Ok((StatusCode::OK, Json(message.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/messages/{id}",
    tag = MESSAGE_TAG,
    params(
        ("id" = String, Path, description = "Public id or internal numeric id")
    ),
    responses(
        (status = 204, description = "Message deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Message belongs to another user", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_message(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    MessageService::new(&state.db)
        .delete(user.discord_id, &id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/messages/{id}/public",
    tag = COMMUNITY_TAG,
    params(
        ("id" = String, Path, description = "Public id or internal numeric id")
    ),
    request_body = PublishMessageDto,
    responses(
        (status = 200, description = "Message published", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Message belongs to another user", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 422, description = "Title or category missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn publish_message(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(payload): Json<PublishMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let message = MessageService::new(&state.db)
        .publish(user.discord_id, &id, payload)
        .await?;

    Ok((StatusCode::OK, Json(message.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/messages/{id}/public",
    tag = COMMUNITY_TAG,
    params(
        ("id" = String, Path, description = "Public id or internal numeric id")
    ),
    responses(
        (status = 200, description = "Message is private again", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Message belongs to another user", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unpublish_message(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let message = MessageService::new(&state.db)
        .unpublish(user.discord_id, &id)
        .await?;

    Ok((StatusCode::OK, Json(message.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/messages/public",
    tag = COMMUNITY_TAG,
    responses(
        (status = 200, description = "Community gallery, most recently published first", body = Vec<MessageDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_public_messages(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let messages = MessageService::new(&state.db).list_public().await?;

    Ok((StatusCode::OK, Json(into_dtos(messages))))
}

#[utoipa::path(
    get,
    path = "/api/messages/public/search",
    tag = COMMUNITY_TAG,
    params(PublicSearchParams),
    responses(
        (status = 200, description = "Public messages matching every filter", body = Vec<MessageDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_public_messages(
    State(state): State<AppState>,
    Query(params): Query<PublicSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let messages = MessageService::new(&state.db)
        .search_public(params)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(messages))))
}
