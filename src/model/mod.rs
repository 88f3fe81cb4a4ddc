pub mod api;
pub mod discord;
pub mod message;
pub mod rating;
pub mod server_profile;
pub mod stats;
pub mod user;
