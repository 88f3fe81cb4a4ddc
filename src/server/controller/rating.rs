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
        rating::{RatingCheckDto, SubmitRatingDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::rating::RatingService,
        state::AppState, util::parse::parse_snowflake,
    },
};

pub static RATING_TAG: &str = "rating";

#[utoipa::path(
    post,
    path = "/api/rating/submit",
    tag = RATING_TAG,
    request_body = SubmitRatingDto,
    responses(
        (status = 204, description = "Rating stored, replacing any earlier one"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 422, description = "Rating outside 1 to 5", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_rating(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SubmitRatingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    RatingService::new(&state.db)
        .submit(user.discord_id, payload.rating)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/rating/check/{discord_id}",
    tag = RATING_TAG,
    params(
        ("discord_id" = String, Path, description = "Discord user ID")
    ),
    responses(
        (status = 200, description = "Whether the user has rated", body = RatingCheckDto),
        (status = 400, description = "Malformed Discord ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_rating(
    State(state): State<AppState>,
    Path(discord_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let discord_id = parse_snowflake(&discord_id, "Discord ID")?;

    let has_rated = RatingService::new(&state.db).has_rated(discord_id).await?;

    Ok((StatusCode::OK, Json(RatingCheckDto { has_rated })))
}
