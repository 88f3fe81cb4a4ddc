use crate::{client::model::error::ApiError, model::discord::MutualGuildDto};

use super::helper::{get, parse_response, send_request};

/// Guilds the user administers that the bot has joined
pub async fn get_mutual_guilds() -> Result<Vec<MutualGuildDto>, ApiError> {
    let response = send_request(get("/api/guilds/mutual")).await?;
    parse_response(response).await
}
