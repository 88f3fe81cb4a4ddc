//! SeaORM entity definitions for the embedboard database.

pub mod prelude;

pub mod message;
pub mod rating;
pub mod server_profile;
pub mod user;
