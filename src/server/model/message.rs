//! Saved message domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::message::{Embed, Message, MessageDto, MessageType, Visibility},
    server::{
        error::{internal::InternalError, AppError},
        util::parse::parse_u64_from_string,
    },
};

/// A message persisted by the backend.
///
/// Public-only fields (`title`, `category`, `language`, `tags`, `keywords`,
/// `published_at`) are populated while `visibility` is [`Visibility::Public`] and
/// cleared on unpublish.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedMessage {
    /// Internal row id.
    pub id: i32,
    /// 7 character id shared with users.
    pub public_id: String,
    /// Discord ID of the owning user.
    pub owner_id: u64,
    pub message: Message,
    pub message_type: MessageType,
    pub visibility: Visibility,
    pub title: Option<String>,
    pub category: Option<MessageType>,
    pub language: Option<String>,
    pub tags: Vec<String>,
    pub keywords: Vec<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SavedMessage {
    pub fn is_owned_by(&self, discord_id: u64) -> bool {
        self.owner_id == discord_id
    }

    /// Owners see their own messages, everyone sees public ones.
    pub fn is_visible_to(&self, viewer: Option<u64>) -> bool {
        self.visibility == Visibility::Public || viewer.is_some_and(|id| self.is_owned_by(id))
    }

    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            id: self.public_id,
            content: self.message.content,
            embeds: self.message.embeds,
            message_type: self.message_type,
            visibility: self.visibility,
            title: self.title,
            category: self.category,
            language: self.language,
            tags: self.tags,
            keywords: self.keywords,
            published_at: self.published_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(SavedMessage)` - Row decoded successfully
    /// - `Err(AppError::Internal(CorruptStoredJson))` - A JSON column no longer decodes
    /// - `Err(AppError::Internal(UnknownStoredValue))` - A stored type/category is unknown
    /// - `Err(AppError::Internal(ParseStringId))` - Owner ID is not a u64
    pub fn from_entity(entity: entity::message::Model) -> Result<Self, AppError> {
        let id = entity.id;

        let embeds: Vec<Embed> = decode_json_column("embeds", id, &entity.embeds)?;
        let tags: Vec<String> = decode_json_column("tags", id, &entity.tags)?;
        let keywords: Vec<String> = decode_json_column("keywords", id, &entity.keywords)?;

        let message_type = parse_message_type("message_type", entity.message_type)?;
        let category = entity
            .category
            .map(|value| parse_message_type("category", value))
            .transpose()?;

        let visibility = if entity.is_public {
            Visibility::Public
        } else {
            Visibility::Private
        };

        Ok(Self {
            id,
            public_id: entity.public_id,
            owner_id: parse_u64_from_string(entity.owner_id)?,
            message: Message {
                content: entity.content,
                embeds,
            },
            message_type,
            visibility,
            title: entity.title,
            category,
            language: entity.language,
            tags,
            keywords,
            published_at: entity.published_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

fn decode_json_column<T: serde::de::DeserializeOwned>(
    column: &'static str,
    id: i32,
    value: &str,
) -> Result<T, AppError> {
    serde_json::from_str(value)
        .map_err(|source| InternalError::CorruptStoredJson { column, id, source }.into())
}

fn parse_message_type(column: &'static str, value: String) -> Result<MessageType, AppError> {
    value
        .parse::<MessageType>()
        .map_err(|_| InternalError::UnknownStoredValue { column, value }.into())
}

/// Parameters for inserting a new message.
#[derive(Debug, Clone)]
pub struct CreateMessageParam {
    pub public_id: String,
    pub owner_id: u64,
    /// Already normalized and validated.
    pub message: Message,
    pub message_type: MessageType,
}

/// Parameters for overwriting a message's payload.
#[derive(Debug, Clone)]
pub struct UpdateMessageParam {
    pub id: i32,
    pub message: Message,
    pub message_type: MessageType,
}

/// Parameters for making a message public.
#[derive(Debug, Clone)]
pub struct PublishMessageParam {
    pub id: i32,
    pub title: String,
    pub category: MessageType,
    pub language: Option<String>,
    pub tags: Vec<String>,
    pub keywords: Vec<String>,
}

/// Filters of the community search.
///
/// Every populated filter must match: any search token against the title or
/// keywords, the exact category, and all tags.
#[derive(Debug, Clone, Default)]
pub struct SearchMessagesParam {
    /// Lowercased search tokens.
    pub tokens: Vec<String>,
    pub category: Option<MessageType>,
    /// Lowercased tags.
    pub tags: Vec<String>,
}

impl SearchMessagesParam {
    pub fn matches(&self, message: &SavedMessage) -> bool {
        if !self.tokens.is_empty() {
            let title = message.title.as_deref().unwrap_or_default().to_lowercase();
            let hit = self.tokens.iter().any(|token| {
                title.contains(token.as_str())
                    || message.keywords.iter().any(|keyword| keyword == token)
            });
            if !hit {
                return false;
            }
        }

        if self.category.is_some() && message.category != self.category {
            return false;
        }

        self.tags
            .iter()
            .all(|tag| message.tags.iter().any(|own| own.eq_ignore_ascii_case(tag)))
    }
}
