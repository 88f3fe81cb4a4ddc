#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod discord;

#[cfg(feature = "web")]
pub mod message;

#[cfg(feature = "web")]
pub mod rating;

#[cfg(feature = "web")]
pub mod server_profile;

#[cfg(feature = "web")]
pub mod stats;

#[cfg(feature = "web")]
pub mod user;
