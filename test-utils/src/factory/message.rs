//! Message factory for creating saved message entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test messages owned by a user.
///
/// Defaults to a private `welcome` message with content and a single titled embed.
pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: String,
    public_id: String,
    content: Option<String>,
    embeds: String,
    message_type: String,
    is_public: bool,
    title: Option<String>,
    category: Option<String>,
    language: Option<String>,
    tags: Vec<String>,
    keywords: Vec<String>,
    created_at: DateTime<Utc>,
}

impl<'a> MessageFactory<'a> {
    /// Creates a new MessageFactory with default values.
    ///
    /// Defaults:
    /// - public_id: `"t"` followed by a zero padded 6 digit counter
    /// - content: `"Test message {id}"`
    /// - embeds: `[{"title":"Test Embed"}]`
    /// - message_type: `"welcome"`
    /// - private with no public metadata
    pub fn new(db: &'a DatabaseConnection, owner_id: &str) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id: owner_id.to_string(),
            public_id: format!("t{:06}", id % 1_000_000),
            content: Some(format!("Test message {}", id)),
            embeds: r#"[{"title":"Test Embed"}]"#.to_string(),
            message_type: "welcome".to_string(),
            is_public: false,
            title: None,
            category: None,
            language: None,
            tags: Vec::new(),
            keywords: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn public_id(mut self, public_id: impl Into<String>) -> Self {
        self.public_id = public_id.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn no_content(mut self) -> Self {
        self.content = None;
        self
    }

    /// Sets the raw JSON array stored in the embeds column.
    pub fn embeds_json(mut self, embeds: impl Into<String>) -> Self {
        self.embeds = embeds.into();
        self
    }

    pub fn message_type(mut self, message_type: impl Into<String>) -> Self {
        self.message_type = message_type.into();
        self
    }

    /// Marks the message public with the given gallery title and category.
    pub fn public(mut self, title: impl Into<String>, category: impl Into<String>) -> Self {
        self.is_public = true;
        self.title = Some(title.into());
        self.category = Some(category.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the message entity into the database.
    pub async fn build(self) -> Result<entity::message::Model, DbErr> {
        let tags = serde_json::to_string(&self.tags).map_err(|e| DbErr::Custom(e.to_string()))?;
        let keywords =
            serde_json::to_string(&self.keywords).map_err(|e| DbErr::Custom(e.to_string()))?;
        let published_at = self.is_public.then_some(self.created_at);

        entity::message::ActiveModel {
            public_id: ActiveValue::Set(self.public_id),
            owner_id: ActiveValue::Set(self.owner_id),
            content: ActiveValue::Set(self.content),
            embeds: ActiveValue::Set(self.embeds),
            message_type: ActiveValue::Set(self.message_type),
            is_public: ActiveValue::Set(self.is_public),
            title: ActiveValue::Set(self.title),
            category: ActiveValue::Set(self.category),
            language: ActiveValue::Set(self.language),
            tags: ActiveValue::Set(tags),
            keywords: ActiveValue::Set(keywords),
            published_at: ActiveValue::Set(published_at),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a private message with default values owned by `owner_id`.
pub async fn create_message(
    db: &DatabaseConnection,
    owner_id: &str,
) -> Result<entity::message::Model, DbErr> {
    MessageFactory::new(db, owner_id).build().await
}
