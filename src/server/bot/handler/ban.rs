use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{Context, GuildId, User};

use crate::{model::server_profile::BindingKind, server::service::delivery::DeliveryService};

/// Handles the guild_ban_addition event by messaging the banned user directly.
///
/// Users who share no other guild with the bot or block direct messages cannot be
/// reached; the failure is logged and otherwise ignored.
pub async fn handle_guild_ban_addition(
    db: &DatabaseConnection,
    ctx: Context,
    guild_id: GuildId,
    banned_user: User,
) {
    if let Err(e) = DeliveryService::new(db, &ctx.http)
        .deliver(guild_id, BindingKind::Ban, &banned_user)
        .await
    {
        tracing::warn!(
            "Failed to send ban message to user {} from guild {}: {}",
            banned_user.id,
            guild_id,
            e
        );
    }
}
