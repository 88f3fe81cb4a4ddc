//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Discord ids are parsed to `u64`
//! and JSON columns decoded here so services never see storage encodings.

pub mod message;
pub mod server_profile;
pub mod user;
