//! Typed addressing of editor controls.
//!
//! Every control in the form is named by a [`FormPath`]. The dotted string form
//! (`content`, `embeds.3.author.icon_url`, `embeds.0.fields.2.inline`) is what UI
//! layers attach to their inputs; parsing it yields the typed path the form adapter
//! resolves against its explicit structures.

use std::{fmt, str::FromStr};

use super::error::EditorError;

/// Stable index of an embed editor within a session.
pub type EmbedIndex = usize;

/// Stable index of a field editor, scoped to its parent embed.
pub type FieldIndex = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldPart {
    Name,
    Value,
    Inline,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EmbedPath {
    Title,
    Description,
    Url,
    Color,
    AuthorName,
    AuthorIconUrl,
    AuthorUrl,
    ThumbnailUrl,
    ImageUrl,
    FooterText,
    FooterIconUrl,
    /// The "include timestamp" toggle.
    Timestamp,
    Field { field: FieldIndex, part: FieldPart },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormPath {
    Content,
    Embed { embed: EmbedIndex, path: EmbedPath },
}

/// Value carried by a control change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }
}

const SIMPLE_PATHS: [(&str, EmbedPath); 12] = [
    ("title", EmbedPath::Title),
    ("description", EmbedPath::Description),
    ("url", EmbedPath::Url),
    ("color", EmbedPath::Color),
    ("author.name", EmbedPath::AuthorName),
    ("author.icon_url", EmbedPath::AuthorIconUrl),
    ("author.url", EmbedPath::AuthorUrl),
    ("thumbnail.url", EmbedPath::ThumbnailUrl),
    ("image.url", EmbedPath::ImageUrl),
    ("footer.text", EmbedPath::FooterText),
    ("footer.icon_url", EmbedPath::FooterIconUrl),
    ("timestamp", EmbedPath::Timestamp),
];

impl FieldPart {
    fn as_str(&self) -> &'static str {
        match self {
            FieldPart::Name => "name",
            FieldPart::Value => "value",
            FieldPart::Inline => "inline",
        }
    }
}

impl EmbedPath {
    pub fn field(field: FieldIndex, part: FieldPart) -> Self {
        EmbedPath::Field { field, part }
    }

    /// Multi line controls keep their whitespace on extraction.
    pub fn is_multi_line(&self) -> bool {
        matches!(
            self,
            EmbedPath::Description
                | EmbedPath::Field {
                    part: FieldPart::Value,
                    ..
                }
        )
    }
}

impl FormPath {
    pub fn embed(embed: EmbedIndex, path: EmbedPath) -> Self {
        FormPath::Embed { embed, path }
    }

    /// Message content and the multi line embed controls render as text areas.
    pub fn is_multi_line(&self) -> bool {
        match self {
            FormPath::Content => true,
            FormPath::Embed { path, .. } => path.is_multi_line(),
        }
    }
}

impl fmt::Display for EmbedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let EmbedPath::Field { field, part } = self {
            return write!(f, "fields.{}.{}", field, part.as_str());
        }

        let name = SIMPLE_PATHS
            .iter()
            .find(|(_, path)| path == self)
            .map(|(name, _)| *name)
            .unwrap_or_default();
        f.write_str(name)
    }
}

impl fmt::Display for FormPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormPath::Content => f.write_str("content"),
            FormPath::Embed { embed, path } => write!(f, "embeds.{}.{}", embed, path),
        }
    }
}

impl FromStr for EmbedPath {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((_, path)) = SIMPLE_PATHS.iter().find(|(name, _)| *name == s) {
            return Ok(*path);
        }

        let invalid = || EditorError::InvalidPath(s.to_string());

        let rest = s.strip_prefix("fields.").ok_or_else(invalid)?;
        let (index, part) = rest.split_once('.').ok_or_else(invalid)?;
        let field = index.parse::<FieldIndex>().map_err(|_| invalid())?;
        let part = match part {
            "name" => FieldPart::Name,
            "value" => FieldPart::Value,
            "inline" => FieldPart::Inline,
            _ => return Err(invalid()),
        };

        Ok(EmbedPath::Field { field, part })
    }
}

impl FromStr for FormPath {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "content" {
            return Ok(FormPath::Content);
        }

        let invalid = || EditorError::InvalidPath(s.to_string());

        let rest = s.strip_prefix("embeds.").ok_or_else(invalid)?;
        let (index, path) = rest.split_once('.').ok_or_else(invalid)?;
        let embed = index.parse::<EmbedIndex>().map_err(|_| invalid())?;
        let path = path.parse::<EmbedPath>().map_err(|_| invalid())?;

        Ok(FormPath::Embed { embed, path })
    }
}
