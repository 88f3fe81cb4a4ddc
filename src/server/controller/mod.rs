//! HTTP request handlers.
//!
//! Each handler authenticates through [`AuthGuard`](crate::server::middleware::auth::AuthGuard)
//! where needed, delegates to a service and converts the result into a DTO.

pub mod auth;
pub mod discord;
pub mod message;
pub mod rating;
pub mod server_profile;
pub mod stats;
