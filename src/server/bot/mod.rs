//! Discord bot that delivers bound messages.
//!
//! The bot is initialized during server startup and runs in a separate tokio task so
//! it does not block the HTTP server. Its HTTP client is shared with the API layer,
//! which uses it to list the bot's guilds and fetch guild counts.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability
//! - `GUILD_MEMBERS` - Member join and leave events (privileged intent)
//! - `GUILD_MODERATION` - Ban events
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
