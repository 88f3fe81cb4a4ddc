//! Sends bound messages when members join, leave or are banned.

use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::{
    all::{
        ChannelId, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, CreateMessage, GuildId,
        Timestamp, User as DiscordUser,
    },
    http::Http,
};

use crate::{
    model::{
        message::{Embed, Message, PlaceholderContext},
        server_profile::BindingKind,
    },
    server::{
        data::{message::MessageRepository, server_profile::ServerProfileRepository},
        error::AppError,
    },
};

/// Delivers the message a guild bound to a lifecycle event.
pub struct DeliveryService<'a> {
    db: &'a DatabaseConnection,
    http: &'a Http,
}

impl<'a> DeliveryService<'a> {
    pub fn new(db: &'a DatabaseConnection, http: &'a Http) -> Self {
        Self { db, http }
    }

    /// Renders and sends the bound message for `kind`.
    ///
    /// Welcome and leave messages go to the bound channel, ban messages to the user by
    /// direct message.
    ///
    /// # Returns
    /// - `Ok(true)` - Message sent
    /// - `Ok(false)` - Nothing bound for this event, or the bound message is gone
    /// - `Err(AppError)` - Database failure or Discord rejected the message
    pub async fn deliver(
        &self,
        guild_id: GuildId,
        kind: BindingKind,
        user: &DiscordUser,
    ) -> Result<bool, AppError> {
        let Some(profile) = ServerProfileRepository::new(self.db)
            .find_by_guild_id(guild_id.get())
            .await?
        else {
            tracing::debug!("Guild {} has no server profile", guild_id);
            return Ok(false);
        };

        let Some(binding) = profile.binding(kind) else {
            tracing::debug!("Guild {} has no {} message bound", guild_id, kind);
            return Ok(false);
        };

        let Some(saved) = MessageRepository::new(self.db)
            .find_by_public_id(&binding.message_id)
            .await?
        else {
            tracing::debug!(
                "Bound {} message {} of guild {} no longer exists",
                kind,
                binding.message_id,
                guild_id
            );
            return Ok(false);
        };

        let ctx = self.placeholder_context(guild_id, user).await;
        let builder = create_message(&saved.message.render(&ctx));

        match (kind, binding.channel_id) {
            (BindingKind::Ban, _) => {
                user.direct_message(self.http, builder).await?;
            }
            (_, Some(channel_id)) => {
                ChannelId::new(channel_id)
                    .send_message(self.http, builder)
                    .await?;
            }
            (_, None) => {
                tracing::debug!("Guild {} {} binding has no channel", guild_id, kind);
                return Ok(false);
            }
        }

        tracing::debug!(
            "Sent {} message {} for user {} in guild {}",
            kind,
            saved.public_id,
            user.id,
            guild_id
        );

        Ok(true)
    }

    async fn placeholder_context(&self, guild_id: GuildId, user: &DiscordUser) -> PlaceholderContext {
        let (server_name, member_count) = match self.http.get_guild_with_counts(guild_id).await {
            Ok(guild) => (Some(guild.name), guild.approximate_member_count),
            Err(e) => {
                tracing::warn!("Failed to fetch guild {} for placeholders: {}", guild_id, e);
                (None, None)
            }
        };

        PlaceholderContext {
            user_id: Some(user.id.get()),
            user_name: Some(user.name.clone()),
            server_name,
            member_count,
            date: Some(Utc::now().format("%d/%m/%Y").to_string()),
            ticket_id: None,
        }
    }
}

/// Builds the Discord payload for a rendered message.
pub fn create_message(message: &Message) -> CreateMessage {
    let mut builder = CreateMessage::new();

    if let Some(content) = &message.content {
        builder = builder.content(content);
    }

    builder.embeds(message.embeds.iter().map(create_embed).collect())
}

fn create_embed(embed: &Embed) -> CreateEmbed {
    let mut builder = CreateEmbed::new();

    if let Some(title) = &embed.title {
        builder = builder.title(title);
    }
    if let Some(description) = &embed.description {
        builder = builder.description(description);
    }
    if let Some(url) = &embed.url {
        builder = builder.url(url);
    }
    if let Some(color) = embed.color {
        builder = builder.colour(color);
    }
    if let Some(name) = embed.author.as_ref().and_then(|author| author.name.as_ref()) {
        let mut author = CreateEmbedAuthor::new(name);
        if let Some(icon_url) = embed.author.as_ref().and_then(|a| a.icon_url.as_ref()) {
            author = author.icon_url(icon_url);
        }
        if let Some(url) = embed.author.as_ref().and_then(|a| a.url.as_ref()) {
            author = author.url(url);
        }
        builder = builder.author(author);
    }
    if let Some(url) = embed.thumbnail.as_ref().and_then(|media| media.url.as_ref()) {
        builder = builder.thumbnail(url);
    }
    if let Some(url) = embed.image.as_ref().and_then(|media| media.url.as_ref()) {
        builder = builder.image(url);
    }
    if let Some(text) = embed.footer.as_ref().and_then(|footer| footer.text.as_ref()) {
        let mut footer = CreateEmbedFooter::new(text);
        if let Some(icon_url) = embed.footer.as_ref().and_then(|f| f.icon_url.as_ref()) {
            footer = footer.icon_url(icon_url);
        }
        builder = builder.footer(footer);
    }
    if let Some(timestamp) = embed.timestamp.as_deref() {
        match Timestamp::parse(timestamp) {
            Ok(timestamp) => builder = builder.timestamp(timestamp),
            Err(_) => tracing::debug!("Skipping unparseable embed timestamp '{}'", timestamp),
        }
    }

    builder.fields(
        embed
            .fields
            .iter()
            .map(|field| (field.name.clone(), field.value.clone(), field.inline)),
    )
}
