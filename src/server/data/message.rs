//! Saved message data repository.
//!
//! Provides the `MessageRepository` for storing the messages users build in the editor.
//! Embeds, tags and keywords are stored as JSON text columns; they are encoded here on
//! write and decoded by [`SavedMessage::from_entity`] on read.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Select,
};

use crate::server::{
    error::AppError,
    model::message::{
        CreateMessageParam, PublishMessageParam, SavedMessage, SearchMessagesParam,
        UpdateMessageParam,
    },
};

/// Repository providing database operations for saved messages.
pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    /// Creates a new MessageRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new private message.
    ///
    /// # Arguments
    /// - `param` - Owner, public id and the normalized payload
    ///
    /// # Returns
    /// - `Ok(SavedMessage)` - The created message
    /// - `Err(AppError::DbErr)` - Database error, including a public id collision
    /// - `Err(AppError::JsonErr)` - Embeds failed to encode
    pub async fn create(&self, param: CreateMessageParam) -> Result<SavedMessage, AppError> {
        let now = Utc::now();

        let entity = entity::message::ActiveModel {
            public_id: ActiveValue::Set(param.public_id),
            owner_id: ActiveValue::Set(param.owner_id.to_string()),
            content: ActiveValue::Set(param.message.content),
            embeds: ActiveValue::Set(serde_json::to_string(&param.message.embeds)?),
            message_type: ActiveValue::Set(param.message_type.to_string()),
            is_public: ActiveValue::Set(false),
            title: ActiveValue::Set(None),
            category: ActiveValue::Set(None),
            language: ActiveValue::Set(None),
            tags: ActiveValue::Set("[]".to_string()),
            keywords: ActiveValue::Set("[]".to_string()),
            published_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        SavedMessage::from_entity(entity)
    }

    /// Finds a message by its 7 character public id.
    ///
    /// # Returns
    /// - `Ok(Some(SavedMessage))` - Message found
    /// - `Ok(None)` - No message with that id
    /// - `Err(AppError)` - Database error or corrupt stored row
    pub async fn find_by_public_id(&self, public_id: &str) -> Result<Option<SavedMessage>, AppError> {
        let entity = entity::prelude::Message::find()
            .filter(entity::message::Column::PublicId.eq(public_id))
            .one(self.db)
            .await?;

        entity.map(SavedMessage::from_entity).transpose()
    }

    /// Finds a message by its internal row id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<SavedMessage>, AppError> {
        let entity = entity::prelude::Message::find_by_id(id)
            .one(self.db)
            .await?;

        entity.map(SavedMessage::from_entity).transpose()
    }

    /// Checks whether a public id is already taken.
    pub async fn public_id_exists(&self, public_id: &str) -> Result<bool, AppError> {
        let count = entity::prelude::Message::find()
            .filter(entity::message::Column::PublicId.eq(public_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets every message owned by a user, newest first.
    ///
    /// # Arguments
    /// - `owner_id` - Discord ID of the owner
    ///
    /// # Returns
    /// - `Ok(Vec<SavedMessage>)` - The user's messages (empty if none)
    /// - `Err(AppError)` - Database error or corrupt stored row
    pub async fn get_by_owner(&self, owner_id: u64) -> Result<Vec<SavedMessage>, AppError> {
        let entities = entity::prelude::Message::find()
            .filter(entity::message::Column::OwnerId.eq(owner_id.to_string()))
            .order_by_desc(entity::message::Column::CreatedAt)
            .order_by_desc(entity::message::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(SavedMessage::from_entity).collect()
    }

    /// Overwrites the payload and type of a message.
    ///
    /// Public metadata is left untouched.
    ///
    /// # Returns
    /// - `Ok(Some(SavedMessage))` - The updated message
    /// - `Ok(None)` - No message with that id
    /// - `Err(AppError)` - Database or encoding error
    pub async fn update(&self, param: UpdateMessageParam) -> Result<Option<SavedMessage>, AppError> {
        let Some(existing) = entity::prelude::Message::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::message::ActiveModel = existing.into();
        active.content = ActiveValue::Set(param.message.content);
        active.embeds = ActiveValue::Set(serde_json::to_string(&param.message.embeds)?);
        active.message_type = ActiveValue::Set(param.message_type.to_string());
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        SavedMessage::from_entity(entity).map(Some)
    }

    /// Permanently deletes a message.
    ///
    /// # Returns
    /// - `Ok(true)` - A message was deleted
    /// - `Ok(false)` - No message with that id
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Message::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Makes a message public with gallery metadata.
    ///
    /// Republishing an already public message refreshes its metadata and publish time.
    ///
    /// # Returns
    /// - `Ok(Some(SavedMessage))` - The published message
    /// - `Ok(None)` - No message with that id
    /// - `Err(AppError)` - Database or encoding error
    pub async fn publish(&self, param: PublishMessageParam) -> Result<Option<SavedMessage>, AppError> {
        let Some(existing) = entity::prelude::Message::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let now = Utc::now();
        let mut active: entity::message::ActiveModel = existing.into();
        active.is_public = ActiveValue::Set(true);
        active.title = ActiveValue::Set(Some(param.title));
        active.category = ActiveValue::Set(Some(param.category.to_string()));
        active.language = ActiveValue::Set(param.language);
        active.tags = ActiveValue::Set(serde_json::to_string(&param.tags)?);
        active.keywords = ActiveValue::Set(serde_json::to_string(&param.keywords)?);
        active.published_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);

        let entity = active.update(self.db).await?;

        SavedMessage::from_entity(entity).map(Some)
    }

    /// Makes a message private again, clearing every public-only field.
    ///
    /// # Returns
    /// - `Ok(Some(SavedMessage))` - The unpublished message
    /// - `Ok(None)` - No message with that id
    pub async fn unpublish(&self, id: i32) -> Result<Option<SavedMessage>, AppError> {
        let Some(existing) = entity::prelude::Message::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::message::ActiveModel = existing.into();
        active.is_public = ActiveValue::Set(false);
        active.title = ActiveValue::Set(None);
        active.category = ActiveValue::Set(None);
        active.language = ActiveValue::Set(None);
        active.tags = ActiveValue::Set("[]".to_string());
        active.keywords = ActiveValue::Set("[]".to_string());
        active.published_at = ActiveValue::Set(None);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        SavedMessage::from_entity(entity).map(Some)
    }

    /// Gets every public message, most recently published first.
    pub async fn get_public(&self) -> Result<Vec<SavedMessage>, AppError> {
        let entities = Self::public_query().all(self.db).await?;

        entities.into_iter().map(SavedMessage::from_entity).collect()
    }

    /// Searches public messages.
    ///
    /// The category is filtered in SQL; search tokens and tags live in JSON columns and
    /// are matched after decoding.
    ///
    /// # Arguments
    /// - `param` - Search tokens, category and required tags
    ///
    /// # Returns
    /// - `Ok(Vec<SavedMessage>)` - Matching public messages, most recent first
    /// - `Err(AppError)` - Database error or corrupt stored row
    pub async fn search_public(
        &self,
        param: &SearchMessagesParam,
    ) -> Result<Vec<SavedMessage>, AppError> {
        let mut query = Self::public_query();
        if let Some(category) = param.category {
            query = query.filter(entity::message::Column::Category.eq(category.to_string()));
        }

        let entities = query.all(self.db).await?;

        let mut messages = Vec::new();
        for entity in entities {
            let message = SavedMessage::from_entity(entity)?;
            if param.matches(&message) {
                messages.push(message);
            }
        }

        Ok(messages)
    }

    fn public_query() -> Select<entity::prelude::Message> {
        entity::prelude::Message::find()
            .filter(entity::message::Column::IsPublic.eq(true))
            .order_by_desc(entity::message::Column::PublishedAt)
            .order_by_desc(entity::message::Column::Id)
    }
}
