//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Normalizing, validating and authorizing message operations
//! - **Orchestration**: Coordinating repository calls with the Discord API
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod delivery;
pub mod discord;
pub mod message;
pub mod rating;
pub mod server_profile;
pub mod stats;

#[cfg(test)]
mod test;
