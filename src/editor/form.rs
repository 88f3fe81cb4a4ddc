//! Form adapter: raw control values and their mapping to the canonical message.
//!
//! A [`FormState`] holds exactly what the inputs show. [`FormState::extract`] reads
//! it into a normalized [`Message`]; [`FormState::populate`] rebuilds the editors
//! from one. Embed and field editors live in [`Arena`]s so an index handed to the UI
//! keeps naming the same editor until it is removed.

use chrono::{SecondsFormat, Utc};

use crate::model::message::{
    format_hex_color, limit::MAX_EMBEDS, limit::MAX_FIELDS, normalize, parse_hex_color, Embed,
    EmbedAuthor, EmbedField, EmbedFooter, EmbedMedia, Message, DEFAULT_ACCENT_HEX,
};

use super::{
    arena::Arena,
    error::EditorError,
    path::{EmbedIndex, EmbedPath, FieldIndex, FieldPart, FieldValue, FormPath},
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldForm {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmbedForm {
    pub title: String,
    pub description: String,
    pub url: String,
    /// Picker value, always a valid `#rrggbb`.
    pub color_hex: String,
    /// Set once the user picks a colour or one is populated from a message.
    pub color_touched: bool,
    pub author_name: String,
    pub author_icon_url: String,
    pub author_url: String,
    pub thumbnail_url: String,
    pub image_url: String,
    pub footer_text: String,
    pub footer_icon_url: String,
    pub timestamp_enabled: bool,
    /// Instant captured when the toggle was switched on.
    pub timestamp: Option<String>,
    pub fields: Arena<FieldForm>,
}

impl Default for EmbedForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            url: String::new(),
            color_hex: DEFAULT_ACCENT_HEX.to_string(),
            color_touched: false,
            author_name: String::new(),
            author_icon_url: String::new(),
            author_url: String::new(),
            thumbnail_url: String::new(),
            image_url: String::new(),
            footer_text: String::new(),
            footer_icon_url: String::new(),
            timestamp_enabled: false,
            timestamp: None,
            fields: Arena::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub content: String,
    pub embeds: Arena<EmbedForm>,
}

impl FieldForm {
    fn from_field(field: &EmbedField) -> Self {
        Self {
            name: field.name.clone(),
            value: field.value.clone(),
            inline: field.inline,
        }
    }

    fn read(&self) -> EmbedField {
        EmbedField {
            name: self.name.clone(),
            value: self.value.clone(),
            inline: self.inline,
        }
    }
}

impl EmbedForm {
    fn from_embed(embed: &Embed) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        let author = embed.author.clone().unwrap_or_default();
        let footer = embed.footer.clone().unwrap_or_default();

        let mut fields = Arena::new();
        for field in &embed.fields {
            fields.insert(FieldForm::from_field(field));
        }

        Self {
            title: text(&embed.title),
            description: text(&embed.description),
            url: text(&embed.url),
            color_hex: embed
                .color
                .map(format_hex_color)
                .unwrap_or_else(|| DEFAULT_ACCENT_HEX.to_string()),
            color_touched: embed.color.is_some(),
            author_name: text(&author.name),
            author_icon_url: text(&author.icon_url),
            author_url: text(&author.url),
            thumbnail_url: text(&embed.thumbnail.as_ref().and_then(|m| m.url.clone())),
            image_url: text(&embed.image.as_ref().and_then(|m| m.url.clone())),
            footer_text: text(&footer.text),
            footer_icon_url: text(&footer.icon_url),
            timestamp_enabled: embed.timestamp.is_some(),
            timestamp: embed.timestamp.clone(),
            fields,
        }
    }

    /// Reads the controls into a raw, not yet normalized embed.
    fn read(&self) -> Embed {
        let media = |url: &str| Some(EmbedMedia { url: some(url) });

        Embed {
            title: some(&self.title),
            description: some(&self.description),
            url: some(&self.url),
            color: if self.color_touched {
                parse_hex_color(&self.color_hex).ok()
            } else {
                None
            },
            author: Some(EmbedAuthor {
                name: some(&self.author_name),
                icon_url: some(&self.author_icon_url),
                url: some(&self.author_url),
            }),
            thumbnail: media(&self.thumbnail_url),
            image: media(&self.image_url),
            fields: self.fields.values().map(FieldForm::read).collect(),
            footer: Some(EmbedFooter {
                text: some(&self.footer_text),
                icon_url: some(&self.footer_icon_url),
            }),
            timestamp: self
                .timestamp
                .clone()
                .filter(|_| self.timestamp_enabled),
        }
    }

    fn text_mut(&mut self, path: EmbedPath) -> Option<&mut String> {
        let text = match path {
            EmbedPath::Title => &mut self.title,
            EmbedPath::Description => &mut self.description,
            EmbedPath::Url => &mut self.url,
            EmbedPath::AuthorName => &mut self.author_name,
            EmbedPath::AuthorIconUrl => &mut self.author_icon_url,
            EmbedPath::AuthorUrl => &mut self.author_url,
            EmbedPath::ThumbnailUrl => &mut self.thumbnail_url,
            EmbedPath::ImageUrl => &mut self.image_url,
            EmbedPath::FooterText => &mut self.footer_text,
            EmbedPath::FooterIconUrl => &mut self.footer_icon_url,
            EmbedPath::Color | EmbedPath::Timestamp | EmbedPath::Field { .. } => return None,
        };
        Some(text)
    }

    fn text(&self, path: EmbedPath) -> Option<&str> {
        let text = match path {
            EmbedPath::Title => &self.title,
            EmbedPath::Description => &self.description,
            EmbedPath::Url => &self.url,
            EmbedPath::Color => &self.color_hex,
            EmbedPath::AuthorName => &self.author_name,
            EmbedPath::AuthorIconUrl => &self.author_icon_url,
            EmbedPath::AuthorUrl => &self.author_url,
            EmbedPath::ThumbnailUrl => &self.thumbnail_url,
            EmbedPath::ImageUrl => &self.image_url,
            EmbedPath::FooterText => &self.footer_text,
            EmbedPath::FooterIconUrl => &self.footer_icon_url,
            EmbedPath::Timestamp | EmbedPath::Field { .. } => return None,
        };
        Some(text)
    }

    fn set_color(&mut self, value: &str) -> Result<(), EditorError> {
        if value.trim().is_empty() {
            self.color_hex = DEFAULT_ACCENT_HEX.to_string();
            self.color_touched = false;
            return Ok(());
        }

        let color = parse_hex_color(value)?;
        self.color_hex = format_hex_color(color);
        self.color_touched = true;
        Ok(())
    }

    fn set_timestamp(&mut self, enabled: bool) {
        if !enabled {
            self.timestamp_enabled = false;
            self.timestamp = None;
        } else if !self.timestamp_enabled {
            self.timestamp_enabled = true;
            self.timestamp = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form holding one editor per embed and field of `message`.
    pub fn from_message(message: &Message) -> Self {
        let mut form = Self::new();
        form.populate(message);
        form
    }

    /// Reads every control into a normalized message.
    pub fn extract(&self) -> Message {
        normalize(Message {
            content: some_verbatim(&self.content),
            embeds: self.embeds.values().map(EmbedForm::read).collect(),
        })
    }

    /// Replaces every editor with fresh ones built from `message`.
    ///
    /// Cleared indices are retired, so the new editors receive indices above every
    /// index handed out before.
    pub fn populate(&mut self, message: &Message) {
        self.content = message.content.clone().unwrap_or_default();
        self.embeds.clear();
        for embed in &message.embeds {
            self.embeds.insert(EmbedForm::from_embed(embed));
        }
    }

    pub fn add_embed(&mut self) -> Result<EmbedIndex, EditorError> {
        if self.embeds.len() >= MAX_EMBEDS {
            return Err(EditorError::EmbedLimit);
        }
        Ok(self.embeds.insert(EmbedForm::default()))
    }

    pub fn remove_embed(&mut self, embed: EmbedIndex) -> Result<(), EditorError> {
        self.embeds
            .remove(embed)
            .map(|_| ())
            .ok_or(EditorError::UnknownEmbed(embed))
    }

    /// Adds an empty field editor. At the field ceiling nothing changes.
    pub fn add_field(&mut self, embed: EmbedIndex) -> Result<FieldIndex, EditorError> {
        let form = self.embed_mut(embed)?;
        if form.fields.len() >= MAX_FIELDS {
            return Err(EditorError::FieldLimit);
        }
        Ok(form.fields.insert(FieldForm::default()))
    }

    pub fn remove_field(&mut self, embed: EmbedIndex, field: FieldIndex) -> Result<(), EditorError> {
        self.embed_mut(embed)?
            .fields
            .remove(field)
            .map(|_| ())
            .ok_or(EditorError::UnknownField { embed, field })
    }

    /// Writes one control. A failed write leaves the form unchanged.
    pub fn set(&mut self, path: FormPath, value: FieldValue) -> Result<(), EditorError> {
        let mismatch = || EditorError::InvalidPath(path.to_string());

        let (embed, embed_path) = match path {
            FormPath::Content => {
                let FieldValue::Text(text) = value else {
                    return Err(mismatch());
                };
                self.content = text;
                return Ok(());
            }
            FormPath::Embed { embed, path } => (embed, path),
        };

        let form = self.embed_mut(embed)?;
        match (embed_path, value) {
            (EmbedPath::Color, FieldValue::Text(text)) => form.set_color(&text),
            (EmbedPath::Timestamp, FieldValue::Bool(enabled)) => {
                form.set_timestamp(enabled);
                Ok(())
            }
            (EmbedPath::Field { field, part }, value) => {
                let entry = form
                    .fields
                    .get_mut(field)
                    .ok_or(EditorError::UnknownField { embed, field })?;
                match (part, value) {
                    (FieldPart::Name, FieldValue::Text(text)) => entry.name = text,
                    (FieldPart::Value, FieldValue::Text(text)) => entry.value = text,
                    (FieldPart::Inline, FieldValue::Bool(inline)) => entry.inline = inline,
                    _ => return Err(mismatch()),
                }
                Ok(())
            }
            (path, FieldValue::Text(text)) => {
                let slot = form.text_mut(path).ok_or_else(mismatch)?;
                *slot = text;
                Ok(())
            }
            (_, FieldValue::Bool(_)) => Err(mismatch()),
        }
    }

    /// Current value of a control, or `None` if it does not exist.
    pub fn get(&self, path: FormPath) -> Option<FieldValue> {
        let (embed, path) = match path {
            FormPath::Content => return Some(FieldValue::Text(self.content.clone())),
            FormPath::Embed { embed, path } => (embed, path),
        };
        let form = self.embeds.get(embed)?;

        match path {
            EmbedPath::Timestamp => Some(FieldValue::Bool(form.timestamp_enabled)),
            EmbedPath::Field { field, part } => {
                let entry = form.fields.get(field)?;
                Some(match part {
                    FieldPart::Name => FieldValue::Text(entry.name.clone()),
                    FieldPart::Value => FieldValue::Text(entry.value.clone()),
                    FieldPart::Inline => FieldValue::Bool(entry.inline),
                })
            }
            path => form.text(path).map(|text| FieldValue::Text(text.to_string())),
        }
    }

    pub fn embed(&self, embed: EmbedIndex) -> Option<&EmbedForm> {
        self.embeds.get(embed)
    }

    fn embed_mut(&mut self, embed: EmbedIndex) -> Result<&mut EmbedForm, EditorError> {
        self.embeds
            .get_mut(embed)
            .ok_or(EditorError::UnknownEmbed(embed))
    }
}

/// Reads a form into its canonical message.
pub fn extract(form: &FormState) -> Message {
    form.extract()
}

/// Builds a fresh form from a message.
pub fn populate(message: &Message) -> FormState {
    FormState::from_message(message)
}

/// Splices `token` into `text` at the character offset `cursor`.
///
/// The cursor is clamped to the end of the text. Returns the new text and the
/// cursor positioned just after the inserted token.
pub fn insert_placeholder(text: &str, cursor: usize, token: &str) -> (String, usize) {
    let cursor = cursor.min(text.chars().count());
    let byte_offset = text
        .char_indices()
        .nth(cursor)
        .map_or(text.len(), |(offset, _)| offset);

    let mut spliced = String::with_capacity(text.len() + token.len());
    spliced.push_str(&text[..byte_offset]);
    spliced.push_str(token);
    spliced.push_str(&text[byte_offset..]);

    (spliced, cursor + token.chars().count())
}

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn some_verbatim(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_message() -> Message {
        normalize(Message {
            content: Some("Welcome {user}!\n  Read the rules.".to_string()),
            embeds: vec![
                Embed {
                    title: Some("Rules".to_string()),
                    description: Some("  1. Be nice\n  2. Have fun".to_string()),
                    url: Some("https://example.com".to_string()),
                    color: Some(16711850),
                    author: Some(EmbedAuthor {
                        name: Some("Mods".to_string()),
                        icon_url: Some("https://example.com/a.png".to_string()),
                        url: None,
                    }),
                    thumbnail: Some(EmbedMedia {
                        url: Some("https://example.com/t.png".to_string()),
                    }),
                    image: None,
                    fields: vec![
                        EmbedField {
                            name: "Rule 1".to_string(),
                            value: "No spam".to_string(),
                            inline: true,
                        },
                        EmbedField {
                            name: "".to_string(),
                            value: "  unnamed\nvalue".to_string(),
                            inline: false,
                        },
                    ],
                    footer: Some(EmbedFooter {
                        text: Some("Staff".to_string()),
                        icon_url: None,
                    }),
                    timestamp: Some("2026-03-01T12:00:00.000Z".to_string()),
                },
                Embed {
                    description: Some("Second".to_string()),
                    ..Default::default()
                },
            ],
        })
    }

    #[test]
    fn extract_after_populate_round_trips() {
        let message = sample_message();

        assert_eq!(extract(&populate(&message)), message);
    }

    fn titled(embed: Embed) -> Embed {
        Embed {
            title: Some("Title".to_string()),
            ..embed
        }
    }

    #[test]
    fn sparse_embeds_round_trip() {
        let cases = [
            titled(Embed {
                author: Some(EmbedAuthor {
                    name: None,
                    icon_url: None,
                    url: Some("https://example.com/me".to_string()),
                }),
                ..Default::default()
            }),
            titled(Embed {
                footer: Some(EmbedFooter {
                    text: None,
                    icon_url: Some("https://example.com/f.png".to_string()),
                }),
                ..Default::default()
            }),
            titled(Embed {
                fields: vec![EmbedField {
                    name: String::new(),
                    value: "value only".to_string(),
                    inline: true,
                }],
                ..Default::default()
            }),
            titled(Embed {
                timestamp: Some("2026-03-01T12:00:00.000Z".to_string()),
                ..Default::default()
            }),
            Embed {
                timestamp: Some("2026-03-01T12:00:00.000Z".to_string()),
                ..Default::default()
            },
            titled(Embed {
                color: Some(0xFFFFFF),
                ..Default::default()
            }),
            titled(Embed {
                color: Some(0x1000000),
                ..Default::default()
            }),
        ];

        for embed in cases {
            let message = normalize(Message {
                content: None,
                embeds: vec![embed.clone()],
            });

            assert_eq!(extract(&populate(&message)), message, "{:?}", embed);
        }
    }

    #[test]
    fn boundary_colors_after_normalize() {
        let colored = |color| {
            normalize(Message {
                content: None,
                embeds: vec![titled(Embed {
                    color: Some(color),
                    ..Default::default()
                })],
            })
        };

        let max = colored(0xFFFFFF);
        assert_eq!(populate(&max).embeds.values().next().unwrap().color_hex, "#ffffff");
        assert_eq!(extract(&populate(&max)).embeds[0].color, Some(0xFFFFFF));

        let over = colored(0x1000000);
        assert_eq!(over.embeds[0].color, None);
    }

    #[test]
    fn populate_retires_previous_indices() {
        let mut form = FormState::new();
        let first = form.add_embed().unwrap();
        form.populate(&sample_message());

        let indices = form.embeds.indices();
        assert_eq!(indices.len(), 2);
        assert!(indices.iter().all(|index| *index > first));
        assert_eq!(
            form.embed(indices[0]).unwrap().fields.indices(),
            vec![0, 1]
        );
    }

    #[test]
    fn color_picker_maps_to_integer() {
        let mut form = FormState::new();
        let embed = form.add_embed().unwrap();
        form.set(FormPath::embed(embed, EmbedPath::Title), FieldValue::text("Hi"))
            .unwrap();
        form.set(
            FormPath::embed(embed, EmbedPath::Color),
            FieldValue::text("#ff00aa"),
        )
        .unwrap();

        assert_eq!(form.extract().embeds[0].color, Some(16711850));

        let populated = populate(&form.extract());
        let index = populated.embeds.indices()[0];
        assert_eq!(populated.embed(index).unwrap().color_hex, "#ff00aa");
    }

    #[test]
    fn default_accent_is_not_serialized_until_picked() {
        let mut form = FormState::new();
        let embed = form.add_embed().unwrap();
        form.set(FormPath::embed(embed, EmbedPath::Title), FieldValue::text("Hi"))
            .unwrap();

        assert_eq!(
            form.get(FormPath::embed(embed, EmbedPath::Color)),
            Some(FieldValue::text(DEFAULT_ACCENT_HEX))
        );
        assert_eq!(form.extract().embeds[0].color, None);

        form.set(
            FormPath::embed(embed, EmbedPath::Color),
            FieldValue::text(DEFAULT_ACCENT_HEX),
        )
        .unwrap();
        assert_eq!(form.extract().embeds[0].color, Some(0x3b82f6));
    }

    #[test]
    fn invalid_color_leaves_form_unchanged() {
        let mut form = FormState::new();
        let embed = form.add_embed().unwrap();
        let before = form.clone();

        let result = form.set(
            FormPath::embed(embed, EmbedPath::Color),
            FieldValue::text("#12345"),
        );

        assert!(matches!(result, Err(EditorError::InvalidColor(_))));
        assert_eq!(form, before);
    }

    #[test]
    fn field_ceiling_rejects_twenty_sixth_field() {
        let mut form = FormState::new();
        let embed = form.add_embed().unwrap();
        for _ in 0..MAX_FIELDS {
            form.add_field(embed).unwrap();
        }
        let before = form.clone();

        assert_eq!(form.add_field(embed), Err(EditorError::FieldLimit));
        assert_eq!(form, before);
        assert_eq!(form.embed(embed).unwrap().fields.len(), MAX_FIELDS);
    }

    #[test]
    fn removed_field_frees_a_slot_without_reusing_its_index() {
        let mut form = FormState::new();
        let embed = form.add_embed().unwrap();
        for _ in 0..MAX_FIELDS {
            form.add_field(embed).unwrap();
        }

        form.remove_field(embed, 3).unwrap();
        assert_eq!(form.add_field(embed), Ok(MAX_FIELDS));
        assert_eq!(
            form.remove_field(embed, 3),
            Err(EditorError::UnknownField { embed, field: 3 })
        );
    }

    #[test]
    fn embed_ceiling() {
        let mut form = FormState::new();
        for _ in 0..MAX_EMBEDS {
            form.add_embed().unwrap();
        }

        assert_eq!(form.add_embed(), Err(EditorError::EmbedLimit));
    }

    #[test]
    fn set_trims_single_line_but_not_multi_line() {
        let mut form = FormState::new();
        let embed = form.add_embed().unwrap();
        let field = form.add_field(embed).unwrap();

        form.set(
            FormPath::embed(embed, EmbedPath::Title),
            FieldValue::text("  Title  "),
        )
        .unwrap();
        form.set(
            FormPath::embed(embed, EmbedPath::Description),
            FieldValue::text("  indented\n  text"),
        )
        .unwrap();
        form.set(
            FormPath::embed(embed, EmbedPath::field(field, FieldPart::Name)),
            FieldValue::text(" name "),
        )
        .unwrap();
        form.set(
            FormPath::embed(embed, EmbedPath::field(field, FieldPart::Value)),
            FieldValue::text(" value "),
        )
        .unwrap();
        form.set(
            FormPath::embed(embed, EmbedPath::field(field, FieldPart::Inline)),
            FieldValue::Bool(true),
        )
        .unwrap();

        let extracted = form.extract();
        let embed = &extracted.embeds[0];
        assert_eq!(embed.title.as_deref(), Some("Title"));
        assert_eq!(embed.description.as_deref(), Some("  indented\n  text"));
        assert_eq!(
            embed.fields,
            vec![EmbedField {
                name: "name".to_string(),
                value: " value ".to_string(),
                inline: true,
            }]
        );
    }

    #[test]
    fn mismatched_value_kind_is_rejected() {
        let mut form = FormState::new();
        let embed = form.add_embed().unwrap();

        assert_eq!(
            form.set(FormPath::embed(embed, EmbedPath::Title), FieldValue::Bool(true)),
            Err(EditorError::InvalidPath("embeds.0.title".to_string()))
        );
        assert_eq!(
            form.set(FormPath::embed(embed, EmbedPath::Timestamp), FieldValue::text("x")),
            Err(EditorError::InvalidPath("embeds.0.timestamp".to_string()))
        );
        assert_eq!(
            form.set(FormPath::embed(9, EmbedPath::Title), FieldValue::text("x")),
            Err(EditorError::UnknownEmbed(9))
        );
    }

    #[test]
    fn timestamp_is_captured_once_at_toggle() {
        let mut form = FormState::new();
        let embed = form.add_embed().unwrap();
        form.set(FormPath::embed(embed, EmbedPath::Title), FieldValue::text("Hi"))
            .unwrap();
        let toggle = FormPath::embed(embed, EmbedPath::Timestamp);

        form.set(toggle, FieldValue::Bool(true)).unwrap();
        let first = form.extract().embeds[0].timestamp.clone();
        assert!(first.is_some());

        form.set(toggle, FieldValue::Bool(true)).unwrap();
        assert_eq!(form.extract().embeds[0].timestamp, first);
        assert_eq!(form.extract(), form.extract());

        form.set(toggle, FieldValue::Bool(false)).unwrap();
        assert_eq!(form.extract().embeds[0].timestamp, None);
    }

    #[test]
    fn empty_embed_editors_are_not_extracted() {
        let mut form = FormState::new();
        let embed = form.add_embed().unwrap();
        form.set(
            FormPath::embed(embed, EmbedPath::Color),
            FieldValue::text("#ff0000"),
        )
        .unwrap();
        form.set(
            FormPath::embed(embed, EmbedPath::FooterText),
            FieldValue::text("footer"),
        )
        .unwrap();

        assert_eq!(form.extract(), Message::default());
    }

    #[test]
    fn placeholder_splices_at_cursor() {
        assert_eq!(
            insert_placeholder("Hello !", 6, "{user}"),
            ("Hello {user}!".to_string(), 12)
        );
        assert_eq!(
            insert_placeholder("Hi", 99, " {server}"),
            ("Hi {server}".to_string(), 11)
        );
        assert_eq!(
            insert_placeholder("héllo", 2, "{user}"),
            ("hé{user}llo".to_string(), 8)
        );
        assert_eq!(insert_placeholder("", 0, "{date}"), ("{date}".to_string(), 6));
    }
}
