use crate::{
    client::model::error::ApiError,
    model::server_profile::{BindingKind, ServerProfileDto, SetBindingDto},
};

use super::helper::{delete, get, parse_response, put, send_request, serialize_json};

/// Get the guild's profile, created empty on first access
pub async fn get_server_profile(guild_id: u64) -> Result<ServerProfileDto, ApiError> {
    let url = format!("/api/server-profile/{}", guild_id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn set_binding(
    guild_id: u64,
    kind: BindingKind,
    payload: &SetBindingDto,
) -> Result<ServerProfileDto, ApiError> {
    let url = format!("/api/server-profile/{}/{}", guild_id, kind);
    let body = serialize_json(payload)?;
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn remove_binding(guild_id: u64, kind: BindingKind) -> Result<ServerProfileDto, ApiError> {
    let url = format!("/api/server-profile/{}/{}", guild_id, kind);
    let response = send_request(delete(&url)).await?;
    parse_response(response).await
}
