use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, put, send_request,
            serialize_json,
        },
        model::error::ApiError,
    },
    editor::SaveRequest,
    model::message::{
        CreateMessageDto, MessageDto, MessageType, PublishMessageDto, UpdateMessageDto,
    },
};

pub async fn get_messages() -> Result<Vec<MessageDto>, ApiError> {
    let response = send_request(get("/api/messages")).await?;
    parse_response(response).await
}

pub async fn get_message(id: &str) -> Result<MessageDto, ApiError> {
    let url = format!("/api/messages/{}", id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn create_message(payload: &CreateMessageDto) -> Result<MessageDto, ApiError> {
    let body = serialize_json(payload)?;
    let response = send_request(post("/api/messages").body(body)).await?;
    parse_response(response).await
}

pub async fn update_message(id: &str, payload: &UpdateMessageDto) -> Result<MessageDto, ApiError> {
    let url = format!("/api/messages/{}", id);
    let body = serialize_json(payload)?;
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

/// Sends what the editor asked to persist.
pub async fn save_message(request: &SaveRequest) -> Result<MessageDto, ApiError> {
    match request {
        SaveRequest::Create(payload) => create_message(payload).await,
        SaveRequest::Update { id, payload } => update_message(id, payload).await,
    }
}

pub async fn delete_message(id: &str) -> Result<(), ApiError> {
    let url = format!("/api/messages/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}

pub async fn publish_message(id: &str, payload: &PublishMessageDto) -> Result<MessageDto, ApiError> {
    let url = format!("/api/messages/{}/public", id);
    let body = serialize_json(payload)?;
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn unpublish_message(id: &str) -> Result<MessageDto, ApiError> {
    let url = format!("/api/messages/{}/public", id);
    let response = send_request(delete(&url)).await?;
    parse_response(response).await
}

/// Community gallery. Without filters this is the plain public listing.
pub async fn search_public_messages(
    search: &str,
    category: Option<MessageType>,
    tags: &str,
) -> Result<Vec<MessageDto>, ApiError> {
    let mut query = Vec::new();
    if !search.trim().is_empty() {
        query.push(format!("search={}", encode(search.trim())));
    }
    if let Some(category) = category {
        query.push(format!("category={}", category.as_str()));
    }
    if !tags.trim().is_empty() {
        query.push(format!("tags={}", encode(tags.trim())));
    }

    let url = if query.is_empty() {
        "/api/messages/public".to_string()
    } else {
        format!("/api/messages/public/search?{}", query.join("&"))
    };

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
