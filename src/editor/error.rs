use thiserror::Error;

use crate::model::message::{color::InvalidColor, limit::MAX_EMBEDS, limit::MAX_FIELDS};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Message must have content or at least one embed with a title or description")]
    EmptyMessage,

    #[error("An embed can have at most {} fields", MAX_FIELDS)]
    FieldLimit,

    #[error("A message can have at most {} embeds", MAX_EMBEDS)]
    EmbedLimit,

    /// Save attempted while the JSON view holds text that does not parse.
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("{0}")]
    Validation(String),

    #[error("Embed {0} does not exist")]
    UnknownEmbed(usize),

    #[error("Field {field} does not exist in embed {embed}")]
    UnknownField { embed: usize, field: usize },

    #[error("Invalid path or value: {0}")]
    InvalidPath(String),

    #[error(transparent)]
    InvalidColor(#[from] InvalidColor),
}
