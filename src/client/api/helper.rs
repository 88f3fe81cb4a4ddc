use crate::{client::model::error::ApiError, model::api::ErrorDto};
use reqwasm::http::{Request, RequestCredentials, Response};
use serde::de::DeserializeOwned;

/// Decodes a 2xx JSON body, anything else becomes an [`ApiError`].
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(read_error(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::local(format!("Failed to parse response: {}", e)))
}

/// For endpoints answering 201/204 without a body worth reading.
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(read_error(response).await)
    }
}

/// Server errors carry an [`ErrorDto`]; proxies and panics may answer with plain text.
async fn read_error(response: Response) -> ApiError {
    let status = response.status() as u64;

    let message = match response.json::<ErrorDto>().await {
        Ok(error_dto) => error_dto.error,
        Err(_) => response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string()),
    };

    ApiError { status, message }
}

pub fn get(url: &str) -> Request {
    Request::get(url).credentials(RequestCredentials::Include)
}

pub fn post(url: &str) -> Request {
    with_json(Request::post(url))
}

pub fn put(url: &str) -> Request {
    with_json(Request::put(url))
}

pub fn delete(url: &str) -> Request {
    Request::delete(url).credentials(RequestCredentials::Include)
}

fn with_json(request: Request) -> Request {
    request
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::local(format!("Failed to send request: {}", e)))
}

pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload)
        .map_err(|e| ApiError::local(format!("Failed to serialize request: {}", e)))
}
