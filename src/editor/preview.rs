//! Rendered preview of a message as Discord would show it.

use chrono::DateTime;
use pulldown_cmark::{html, Event, Options, Parser};

use crate::model::message::{format_hex_color, is_embed_empty, Embed, Message, DEFAULT_ACCENT_HEX};

/// Hint shown in place of empty message content.
pub const CONTENT_HINT: &str = "Type your message here...";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Preview {
    /// Content rendered to HTML, `None` when the message has no content.
    pub content_html: Option<String>,
    pub embeds: Vec<EmbedPreview>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmbedPreview {
    /// `#rrggbb` of the left border.
    pub accent: String,
    pub author: Option<AuthorPreview>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub description_html: Option<String>,
    pub fields: Vec<FieldPreview>,
    pub thumbnail_url: Option<String>,
    pub image_url: Option<String>,
    pub footer: Option<FooterPreview>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthorPreview {
    pub name: Option<String>,
    pub icon_url: Option<String>,
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldPreview {
    pub name: String,
    pub value_html: String,
    pub inline: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FooterPreview {
    pub text: Option<String>,
    pub icon_url: Option<String>,
    pub timestamp_label: Option<String>,
}

impl FooterPreview {
    /// Footer line: text and timestamp joined by a bullet.
    pub fn label(&self) -> String {
        [self.text.as_deref(), self.timestamp_label.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" • ")
    }
}

/// Renders a canonical message. Empty embeds are skipped.
pub fn render_preview(message: &Message) -> Preview {
    Preview {
        content_html: message
            .content
            .as_deref()
            .filter(|content| !content.trim().is_empty())
            .map(render_markdown),
        embeds: message
            .embeds
            .iter()
            .filter(|embed| !is_embed_empty(embed))
            .map(render_embed)
            .collect(),
    }
}

fn render_embed(embed: &Embed) -> EmbedPreview {
    let footer_text = embed.footer.as_ref().and_then(|f| f.text.clone());
    let timestamp_label = embed.timestamp.as_deref().map(timestamp_label);

    let footer = (footer_text.is_some() || timestamp_label.is_some()).then(|| FooterPreview {
        text: footer_text,
        icon_url: embed.footer.as_ref().and_then(|f| f.icon_url.clone()),
        timestamp_label,
    });

    EmbedPreview {
        accent: embed
            .color
            .map(format_hex_color)
            .unwrap_or_else(|| DEFAULT_ACCENT_HEX.to_string()),
        author: embed
            .author
            .as_ref()
            .filter(|author| author.name.is_some())
            .map(|author| AuthorPreview {
                name: author.name.clone(),
                icon_url: author.icon_url.clone(),
                url: author.url.clone(),
            }),
        title: embed.title.clone(),
        url: embed.url.clone(),
        description_html: embed.description.as_deref().map(render_markdown),
        fields: embed
            .fields
            .iter()
            .map(|field| FieldPreview {
                name: field.name.clone(),
                value_html: render_markdown(&field.value),
                inline: field.inline,
            })
            .collect(),
        thumbnail_url: embed.thumbnail.as_ref().and_then(|m| m.url.clone()),
        image_url: embed.image.as_ref().and_then(|m| m.url.clone()),
        footer,
    }
}

/// Markdown to HTML. Raw HTML in the source is escaped, never passed through.
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        _ => event,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

fn timestamp_label(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(instant) => instant.format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => timestamp.to_string(),
    }
}
