//! Canonical message model shared by the editor, the REST API and the bot.
//!
//! A [`Message`] is the structured form of a Discord message payload: optional text
//! content plus an ordered list of [`Embed`]s. The same type is produced by the form
//! editor, parsed from the JSON view, stored by the backend and rendered by the bot.
//!
//! [`normalize`] is the cleaning step every producer goes through. Serializing a
//! normalized message yields the minimal JSON Discord accepts: absent values and empty
//! collections are omitted rather than written as `null` or `[]`.

pub mod color;
pub mod dto;
pub mod keyword;
pub mod limit;
pub mod placeholder;

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

pub use color::{format_hex_color, parse_hex_color, DEFAULT_ACCENT, DEFAULT_ACCENT_HEX};
pub use dto::{
    CreateMessageDto, MessageDto, PublicSearchParams, PublishError, PublishMessageDto,
    UpdateMessageDto, Visibility,
};
pub use keyword::{extract_keywords, parse_tags};
pub use limit::{check_colors, validate, LimitViolation, MAX_COLOR};
pub use placeholder::{render_placeholders, MessageType, PlaceholderContext};

/// One message payload: text content plus embeds in display order.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(default)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(default)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// 24-bit RGB accent color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedMedia>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    /// RFC 3339 instant captured when the timestamp toggle was switched on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(default)]
pub struct EmbedAuthor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Thumbnail or image reference.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(default)]
pub struct EmbedMedia {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(default)]
pub struct EmbedFooter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(default)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub inline: bool,
}

/// Returns true if the embed has neither a title nor a description.
///
/// Empty embeds are never previewed or serialized, whatever else they carry.
pub fn is_embed_empty(embed: &Embed) -> bool {
    is_blank(embed.title.as_deref()) && is_blank(embed.description.as_deref())
}

/// Cleans a raw message into its canonical form.
///
/// - single line text is trimmed, blank becomes absent
/// - multi line text (content, description, field values) is kept verbatim unless blank
/// - sub-objects whose leaves are all absent are dropped
/// - `color` survives only when non-zero and within 24 bits
/// - fields with a blank name and a blank value are dropped
/// - embeds left empty by [`is_embed_empty`] are dropped
///
/// Total and idempotent.
pub fn normalize(raw: Message) -> Message {
    let embeds = raw
        .embeds
        .into_iter()
        .map(normalize_embed)
        .filter(|embed| !is_embed_empty(embed))
        .collect();

    Message {
        content: multi_line(raw.content),
        embeds,
    }
}

fn normalize_embed(raw: Embed) -> Embed {
    let author = raw.author.and_then(|author| {
        let author = EmbedAuthor {
            name: single_line(author.name),
            icon_url: single_line(author.icon_url),
            url: single_line(author.url),
        };
        (author != EmbedAuthor::default()).then_some(author)
    });

    let footer = raw.footer.and_then(|footer| {
        let footer = EmbedFooter {
            text: single_line(footer.text),
            icon_url: single_line(footer.icon_url),
        };
        (footer != EmbedFooter::default()).then_some(footer)
    });

    let fields = raw
        .fields
        .into_iter()
        .filter_map(|field| {
            let name = field.name.trim().to_string();
            let value = multi_line(Some(field.value)).unwrap_or_default();
            if name.is_empty() && value.is_empty() {
                return None;
            }
            Some(EmbedField {
                name,
                value,
                inline: field.inline,
            })
        })
        .collect();

    Embed {
        title: single_line(raw.title),
        description: multi_line(raw.description),
        url: single_line(raw.url),
        color: raw.color.filter(|color| (1..=MAX_COLOR).contains(color)),
        author,
        thumbnail: normalize_media(raw.thumbnail),
        image: normalize_media(raw.image),
        fields,
        footer,
        timestamp: single_line(raw.timestamp),
    }
}

fn normalize_media(media: Option<EmbedMedia>) -> Option<EmbedMedia> {
    media
        .and_then(|media| single_line(media.url))
        .map(|url| EmbedMedia { url: Some(url) })
}

fn single_line(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn multi_line(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

impl Message {
    /// Consumes the message and returns its canonical form.
    pub fn normalized(self) -> Self {
        normalize(self)
    }

    /// True when there is nothing worth sending: no content and no non-empty embed.
    pub fn is_blank(&self) -> bool {
        is_blank(self.content.as_deref()) && self.embeds.iter().all(is_embed_empty)
    }

    /// Compact JSON of the message, as sent over the wire.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Pretty JSON with two space indentation, as shown in the JSON editor.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Returns a copy with every placeholder token substituted from `ctx`.
    pub fn render(&self, ctx: &PlaceholderContext) -> Message {
        let render = |text: &Option<String>| text.as_deref().map(|t| render_placeholders(t, ctx));

        Message {
            content: render(&self.content),
            embeds: self
                .embeds
                .iter()
                .map(|embed| Embed {
                    title: render(&embed.title),
                    description: render(&embed.description),
                    author: embed.author.as_ref().map(|author| EmbedAuthor {
                        name: render(&author.name),
                        ..author.clone()
                    }),
                    fields: embed
                        .fields
                        .iter()
                        .map(|field| EmbedField {
                            name: render_placeholders(&field.name, ctx),
                            value: render_placeholders(&field.value, ctx),
                            inline: field.inline,
                        })
                        .collect(),
                    footer: embed.footer.as_ref().map(|footer| EmbedFooter {
                        text: render(&footer.text),
                        ..footer.clone()
                    }),
                    ..embed.clone()
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str) -> Embed {
        Embed {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn embed_with_only_color_is_empty() {
        let embed = Embed {
            color: Some(0xff00aa),
            footer: Some(EmbedFooter {
                text: Some("footer".to_string()),
                icon_url: None,
            }),
            ..Default::default()
        };

        assert!(is_embed_empty(&embed));

        let message = normalize(Message {
            content: None,
            embeds: vec![embed],
        });
        assert!(message.embeds.is_empty());
        assert_eq!(message.to_json().unwrap(), "{}");
    }

    #[test]
    fn keeps_only_24_bit_colors() {
        let raw = Message {
            content: None,
            embeds: vec![
                Embed {
                    color: Some(MAX_COLOR),
                    ..titled("max")
                },
                Embed {
                    color: Some(MAX_COLOR + 1),
                    ..titled("over")
                },
            ],
        };

        let message = normalize(raw);

        assert_eq!(message.embeds[0].color, Some(MAX_COLOR));
        assert_eq!(message.embeds[1].color, None);
        assert_eq!(normalize(message.clone()), message);
    }

    #[test]
    fn whitespace_title_counts_as_empty() {
        let embed = Embed {
            title: Some("   ".to_string()),
            description: Some("\n\t".to_string()),
            ..Default::default()
        };

        assert!(is_embed_empty(&embed));
    }

    #[test]
    fn collapses_empty_sub_objects() {
        let raw = Message {
            content: Some("  ".to_string()),
            embeds: vec![Embed {
                title: Some("  Rules ".to_string()),
                color: Some(0),
                author: Some(EmbedAuthor {
                    name: Some(" ".to_string()),
                    icon_url: Some(String::new()),
                    url: None,
                }),
                thumbnail: Some(EmbedMedia {
                    url: Some(String::new()),
                }),
                image: Some(EmbedMedia { url: None }),
                footer: Some(EmbedFooter::default()),
                fields: vec![EmbedField {
                    name: " ".to_string(),
                    value: "".to_string(),
                    inline: true,
                }],
                ..Default::default()
            }],
        };

        let message = normalize(raw);

        assert_eq!(
            message,
            Message {
                content: None,
                embeds: vec![titled("Rules")],
            }
        );
        assert_eq!(message.to_json().unwrap(), r#"{"embeds":[{"title":"Rules"}]}"#);
    }

    #[test]
    fn keeps_multi_line_whitespace() {
        let raw = Message {
            content: Some("  Hello\n  world  ".to_string()),
            embeds: vec![Embed {
                title: Some("Hi".to_string()),
                description: Some("  line one\n\n  line two ".to_string()),
                fields: vec![EmbedField {
                    name: " Rule 1 ".to_string(),
                    value: "  be nice ".to_string(),
                    inline: false,
                }],
                ..Default::default()
            }],
        };

        let message = normalize(raw);

        assert_eq!(message.content.as_deref(), Some("  Hello\n  world  "));
        let embed = &message.embeds[0];
        assert_eq!(embed.description.as_deref(), Some("  line one\n\n  line two "));
        assert_eq!(embed.fields[0].name, "Rule 1");
        assert_eq!(embed.fields[0].value, "  be nice ");
    }

    #[test]
    fn normalize_is_idempotent() {
        let raw = Message {
            content: Some(" Welcome {user}! ".to_string()),
            embeds: vec![
                Embed {
                    title: Some(" Rules ".to_string()),
                    description: Some(" Be nice. ".to_string()),
                    color: Some(3900150),
                    author: Some(EmbedAuthor {
                        name: Some("Mod team ".to_string()),
                        icon_url: Some(" ".to_string()),
                        url: None,
                    }),
                    fields: vec![
                        EmbedField {
                            name: "a".to_string(),
                            value: " ".to_string(),
                            inline: true,
                        },
                        EmbedField::default(),
                    ],
                    footer: Some(EmbedFooter {
                        text: None,
                        icon_url: Some(" https://example.com/f.png".to_string()),
                    }),
                    timestamp: Some("2026-01-01T00:00:00Z".to_string()),
                    ..Default::default()
                },
                Embed {
                    color: Some(5),
                    ..Default::default()
                },
            ],
        };

        let once = normalize(raw);
        let twice = normalize(once.clone());

        assert_eq!(once, twice);
        assert_eq!(once.embeds.len(), 1);
        assert_eq!(once.embeds[0].fields.len(), 1);
    }

    #[test]
    fn serializes_minimal_json() {
        let message = normalize(Message {
            content: Some("Hello {user}".to_string()),
            embeds: vec![titled("Hi")],
        });

        assert_eq!(
            message.to_json().unwrap(),
            r#"{"content":"Hello {user}","embeds":[{"title":"Hi"}]}"#
        );
    }

    #[test]
    fn parses_partial_json() {
        let message: Message =
            serde_json::from_str(r#"{"embeds":[{"title":"Rules","color":3910386,"fields":[{"name":"a","value":"b"}]}]}"#)
                .unwrap();

        assert_eq!(message.content, None);
        assert_eq!(message.embeds[0].color, Some(3910386));
        assert!(!message.embeds[0].fields[0].inline);
    }

    #[test]
    fn blank_message_detection() {
        assert!(Message::default().is_blank());
        assert!(Message {
            content: Some(" ".to_string()),
            embeds: vec![Embed {
                color: Some(1),
                ..Default::default()
            }],
        }
        .is_blank());
        assert!(!Message {
            content: None,
            embeds: vec![titled("x")],
        }
        .is_blank());
    }

    #[test]
    fn render_substitutes_text_but_not_urls() {
        let message = Message {
            content: Some("Welcome {user}!".to_string()),
            embeds: vec![Embed {
                title: Some("{server}".to_string()),
                url: Some("https://example.com/{server}".to_string()),
                fields: vec![EmbedField {
                    name: "Members".to_string(),
                    value: "{server.memberCount}".to_string(),
                    inline: false,
                }],
                ..Default::default()
            }],
        };
        let ctx = PlaceholderContext {
            user_id: Some(42),
            user_name: Some("alice".to_string()),
            server_name: Some("Cozy".to_string()),
            member_count: Some(10),
            ..Default::default()
        };

        let rendered = message.render(&ctx);

        assert_eq!(rendered.content.as_deref(), Some("Welcome <@42>!"));
        assert_eq!(rendered.embeds[0].title.as_deref(), Some("Cozy"));
        assert_eq!(
            rendered.embeds[0].url.as_deref(),
            Some("https://example.com/{server}")
        );
        assert_eq!(rendered.embeds[0].fields[0].value, "10");
    }
}
