//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` function for
//! quick default creation. Factories insert into the database; defaults are unique per
//! call so tests can create several rows without collisions.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(db).await?;
//! let message = factory::message::MessageFactory::new(db, &user.discord_id)
//!     .content("Welcome {user}!")
//!     .public("Welcome card", "welcome")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `message` - Create saved message entities owned by a user
//! - `server_profile` - Create per-guild server profiles
//! - `rating` - Create dashboard ratings
//! - `helpers` - ID generation and multi-entity helpers

pub mod helpers;
pub mod message;
pub mod rating;
pub mod server_profile;
pub mod user;

pub use message::create_message;
pub use rating::create_rating;
pub use server_profile::create_server_profile;
pub use user::create_user;
