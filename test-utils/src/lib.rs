//! Embedboard Test Utils
//!
//! Shared testing utilities for the embedboard backend. Provides a builder for
//! in-memory SQLite test contexts with only the tables a test needs, a session
//! fixture backed by the same database, and entity factories with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//! use entity::prelude::{Message, User};
//!
//! #[tokio::test]
//! async fn lists_messages() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(User)
//!         .with_table(Message)
//!         .build()
//!         .await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::create_user(db).await?;
//!     let message = factory::create_message(db, &user.discord_id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
