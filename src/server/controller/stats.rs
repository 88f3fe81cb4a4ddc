use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, stats::StatsDto},
    server::{error::AppError, service::stats::StatsService, state::AppState},
};

pub static STATS_TAG: &str = "stats";

#[utoipa::path(
    get,
    path = "/api/stats",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Bot reach and average rating", body = StatsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stats = StatsService::new(&state.db, &state.discord_http)
        .stats()
        .await?;

    Ok((StatusCode::OK, Json(stats)))
}
