pub use super::message::Entity as Message;
pub use super::rating::Entity as Rating;
pub use super::server_profile::Entity as ServerProfile;
pub use super::user::Entity as User;
