use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::user::{CurrentUserDto, UserDto},
};

/// Logged in user, `None` when there is no session.
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    let response = send_request(get("/api/auth/user")).await?;

    match parse_response::<CurrentUserDto>(response).await {
        Ok(current) => Ok(Some(current.user)),
        Err(err) if err.is_unauthorized() => Ok(None),
        Err(err) => Err(err),
    }
}
