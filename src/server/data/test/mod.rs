mod message;
mod rating;
mod server_profile;
mod user;
