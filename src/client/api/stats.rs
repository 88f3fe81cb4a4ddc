use crate::{client::model::error::ApiError, model::stats::StatsDto};

use super::helper::{get, parse_response, send_request};

pub async fn get_stats() -> Result<StatsDto, ApiError> {
    let response = send_request(get("/api/stats")).await?;
    parse_response(response).await
}
