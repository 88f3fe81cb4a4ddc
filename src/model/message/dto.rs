use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "server")]
use utoipa::{IntoParams, ToSchema};

use super::{Embed, Message, MessageType};

pub const MAX_PUBLIC_TITLE_LENGTH: usize = 100;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Private,
    Public,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MessageDto {
    /// 7 character public id
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub embeds: Vec<Embed>,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub visibility: Visibility,
    pub title: Option<String>,
    pub category: Option<MessageType>,
    pub language: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MessageDto {
    /// The payload part of the saved message.
    pub fn message(&self) -> Message {
        Message {
            content: self.content.clone(),
            embeds: self.embeds.clone(),
        }
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateMessageDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub embeds: Vec<Embed>,
    #[serde(rename = "type", default)]
    pub message_type: MessageType,
}

/// Full overwrite of a saved message's payload and category.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateMessageDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub embeds: Vec<Embed>,
    #[serde(rename = "type", default)]
    pub message_type: MessageType,
}

impl CreateMessageDto {
    pub fn new(message: Message, message_type: MessageType) -> Self {
        Self {
            content: message.content,
            embeds: message.embeds,
            message_type,
        }
    }

    pub fn message(&self) -> Message {
        Message {
            content: self.content.clone(),
            embeds: self.embeds.clone(),
        }
    }
}

impl UpdateMessageDto {
    pub fn new(message: Message, message_type: MessageType) -> Self {
        Self {
            content: message.content,
            embeds: message.embeds,
            message_type,
        }
    }

    pub fn message(&self) -> Message {
        Message {
            content: self.content.clone(),
            embeds: self.embeds.clone(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PublishError {
    #[error("A title is required to publish a message")]
    MissingTitle,

    #[error("Title must be at most {0} characters")]
    TitleTooLong(usize),

    #[error("A category is required to publish a message")]
    MissingCategory,
}

/// Body of `PUT /api/messages/{id}/public`.
///
/// `keywords` is free text; the server derives the stored keyword list from it.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PublishMessageDto {
    #[serde(default)]
    pub title: String,
    pub category: Option<MessageType>,
    pub language: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub keywords: String,
}

impl PublishMessageDto {
    pub fn validate(&self) -> Result<(), PublishError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(PublishError::MissingTitle);
        }
        if title.chars().count() > MAX_PUBLIC_TITLE_LENGTH {
            return Err(PublishError::TitleTooLong(MAX_PUBLIC_TITLE_LENGTH));
        }
        if self.category.is_none() {
            return Err(PublishError::MissingCategory);
        }

        Ok(())
    }
}

/// Query of the community search endpoint. `tags` is comma separated.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema, IntoParams))]
pub struct PublicSearchParams {
    pub search: Option<String>,
    pub category: Option<MessageType>,
    pub tags: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn publish(title: &str, category: Option<MessageType>) -> PublishMessageDto {
        PublishMessageDto {
            title: title.to_string(),
            category,
            ..Default::default()
        }
    }

    #[test]
    fn publish_requires_title() {
        assert_eq!(
            publish("", Some(MessageType::Welcome)).validate(),
            Err(PublishError::MissingTitle)
        );
        assert_eq!(
            publish("   ", Some(MessageType::Welcome)).validate(),
            Err(PublishError::MissingTitle)
        );
    }

    #[test]
    fn publish_requires_category_and_short_title() {
        assert_eq!(
            publish("Welcome pack", None).validate(),
            Err(PublishError::MissingCategory)
        );
        assert_eq!(
            publish(&"x".repeat(101), Some(MessageType::Other)).validate(),
            Err(PublishError::TitleTooLong(100))
        );
        assert_eq!(
            publish("Welcome pack", Some(MessageType::Welcome)).validate(),
            Ok(())
        );
    }

    #[test]
    fn create_body_uses_type_key() {
        let dto: CreateMessageDto =
            serde_json::from_str(r#"{"content":"hi","type":"ticket"}"#).unwrap();

        assert_eq!(dto.message_type, MessageType::Ticket);
        assert!(dto.embeds.is_empty());
        assert_eq!(
            serde_json::to_string(&dto).unwrap(),
            r#"{"content":"hi","embeds":[],"type":"ticket"}"#
        );
    }
}
