use crate::{
    client::model::error::ApiError,
    model::rating::{RatingCheckDto, SubmitRatingDto},
};

use super::helper::{get, parse_empty_response, parse_response, post, send_request, serialize_json};

pub async fn submit_rating(rating: i32) -> Result<(), ApiError> {
    let body = serialize_json(&SubmitRatingDto { rating })?;
    let response = send_request(post("/api/rating/submit").body(body)).await?;
    parse_empty_response(response).await
}

pub async fn has_rated(discord_id: &str) -> Result<bool, ApiError> {
    let url = format!("/api/rating/check/{}", discord_id);
    let response = send_request(get(&url)).await?;
    let check: RatingCheckDto = parse_response(response).await?;
    Ok(check.has_rated)
}
