use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{Context, GuildId, Member, User};

use crate::{model::server_profile::BindingKind, server::service::delivery::DeliveryService};

/// Handles the guild_member_addition event by sending the guild's welcome message
pub async fn handle_guild_member_addition(
    db: &DatabaseConnection,
    ctx: Context,
    new_member: Member,
) {
    let guild_id = new_member.guild_id;
    let user = &new_member.user;

    if user.bot {
        return;
    }

    if let Err(e) = DeliveryService::new(db, &ctx.http)
        .deliver(guild_id, BindingKind::Welcome, user)
        .await
    {
        tracing::warn!(
            "Failed to send welcome message for user {} in guild {}: {}",
            user.id,
            guild_id,
            e
        );
    }
}

/// Handles the guild_member_removal event by sending the guild's leave message
pub async fn handle_guild_member_removal(
    db: &DatabaseConnection,
    ctx: Context,
    guild_id: GuildId,
    user: User,
    _member_data_if_available: Option<Member>,
) {
    if user.bot {
        return;
    }

    if let Err(e) = DeliveryService::new(db, &ctx.http)
        .deliver(guild_id, BindingKind::Leave, &user)
        .await
    {
        tracing::warn!(
            "Failed to send leave message for user {} in guild {}: {}",
            user.id,
            guild_id,
            e
        );
    }
}
