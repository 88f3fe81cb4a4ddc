//! Saved message business logic.
//!
//! Every write runs the payload through `normalize` and the platform limit checks before
//! it reaches the repository, so stored messages are always in canonical form.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::message::{
        check_colors, extract_keywords, parse_tags, validate, CreateMessageDto, LimitViolation,
        Message, PublicSearchParams, PublishMessageDto, UpdateMessageDto,
    },
    server::{
        data::message::MessageRepository,
        error::{auth::AuthError, internal::InternalError, AppError},
        model::message::{
            CreateMessageParam, PublishMessageParam, SavedMessage, SearchMessagesParam,
            UpdateMessageParam,
        },
        util::id::{generate_public_id, is_public_id},
    },
};

/// Attempts at drawing an unused public id before giving up.
const MAX_ID_ATTEMPTS: usize = 5;

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new private message for `owner_id`.
    ///
    /// # Returns
    /// - `Ok(SavedMessage)` - Created message with a fresh public id
    /// - `Err(AppError::Validation)` - Message is blank or exceeds Discord limits
    /// - `Err(AppError::Internal(IdGenerationExhausted))` - No free public id found
    pub async fn create(
        &self,
        owner_id: u64,
        payload: CreateMessageDto,
    ) -> Result<SavedMessage, AppError> {
        let message = checked_message(payload.message())?;
        let public_id = self.unused_public_id().await?;

        let created = MessageRepository::new(self.db)
            .create(CreateMessageParam {
                public_id,
                owner_id,
                message,
                message_type: payload.message_type,
            })
            .await?;

        tracing::debug!("User {} created message {}", owner_id, created.public_id);

        Ok(created)
    }

    /// Gets a message the viewer may see: their own, or any public one.
    ///
    /// # Arguments
    /// - `id` - Public id or internal numeric id
    /// - `viewer` - Discord ID of the logged in user, if any
    ///
    /// # Returns
    /// - `Ok(SavedMessage)` - Visible message
    /// - `Err(AppError::NotFound)` - Message missing or not visible to the viewer
    pub async fn get_for_viewer(
        &self,
        id: &str,
        viewer: Option<u64>,
    ) -> Result<SavedMessage, AppError> {
        self.resolve(id)
            .await?
            .filter(|message| message.is_visible_to(viewer))
            .ok_or_else(not_found)
    }

    /// Messages owned by the user, newest first.
    pub async fn list_for_owner(&self, owner_id: u64) -> Result<Vec<SavedMessage>, AppError> {
        MessageRepository::new(self.db).get_by_owner(owner_id).await
    }

    /// Overwrites content, embeds and type of an owned message.
    pub async fn update(
        &self,
        owner_id: u64,
        id: &str,
        payload: UpdateMessageDto,
    ) -> Result<SavedMessage, AppError> {
        let existing = self.get_owned(owner_id, id).await?;
        let message = checked_message(payload.message())?;

        MessageRepository::new(self.db)
            .update(UpdateMessageParam {
                id: existing.id,
                message,
                message_type: payload.message_type,
            })
            .await?
            .ok_or_else(not_found)
    }

    /// Permanently deletes an owned message.
    pub async fn delete(&self, owner_id: u64, id: &str) -> Result<(), AppError> {
        let existing = self.get_owned(owner_id, id).await?;

        MessageRepository::new(self.db).delete(existing.id).await?;
        tracing::debug!("User {} deleted message {}", owner_id, existing.public_id);

        Ok(())
    }

    /// Publishes an owned message to the community gallery.
    ///
    /// Free text keywords are reduced to distinct search words and tags are lowercased
    /// and deduplicated.
    ///
    /// # Returns
    /// - `Ok(SavedMessage)` - The published message
    /// - `Err(AppError::Validation)` - Title missing or too long, or no category
    /// - `Err(AppError::NotFound)` / `Err(AppError::AuthErr)` - Not the caller's message
    pub async fn publish(
        &self,
        owner_id: u64,
        id: &str,
        payload: PublishMessageDto,
    ) -> Result<SavedMessage, AppError> {
        payload
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let category = payload
            .category
            .ok_or_else(|| AppError::Validation("A category is required".to_string()))?;
        let existing = self.get_owned(owner_id, id).await?;

        let language = payload
            .language
            .map(|language| language.trim().to_string())
            .filter(|language| !language.is_empty());

        MessageRepository::new(self.db)
            .publish(PublishMessageParam {
                id: existing.id,
                title: payload.title.trim().to_string(),
                category,
                language,
                tags: parse_tags(&payload.tags.join(",")),
                keywords: extract_keywords(&payload.keywords),
            })
            .await?
            .ok_or_else(not_found)
    }

    /// Removes an owned message from the gallery. Content is untouched.
    pub async fn unpublish(&self, owner_id: u64, id: &str) -> Result<SavedMessage, AppError> {
        let existing = self.get_owned(owner_id, id).await?;

        MessageRepository::new(self.db)
            .unpublish(existing.id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn list_public(&self) -> Result<Vec<SavedMessage>, AppError> {
        MessageRepository::new(self.db).get_public().await
    }

    /// Searches the gallery.
    ///
    /// Search text is split into the same keyword form used when publishing, and tags
    /// are comma separated.
    pub async fn search_public(
        &self,
        params: PublicSearchParams,
    ) -> Result<Vec<SavedMessage>, AppError> {
        let param = SearchMessagesParam {
            tokens: params
                .search
                .as_deref()
                .map(extract_keywords)
                .unwrap_or_default(),
            category: params.category,
            tags: params.tags.as_deref().map(parse_tags).unwrap_or_default(),
        };

        MessageRepository::new(self.db).search_public(&param).await
    }

    /// Finds a message by public id, or by internal numeric id when `id` cannot be a
    /// public id.
    ///
    /// A 7-character id is only ever a public id, even when it is all digits.
    pub async fn resolve(&self, id: &str) -> Result<Option<SavedMessage>, AppError> {
        let repo = MessageRepository::new(self.db);

        if is_public_id(id) {
            return repo.find_by_public_id(id).await;
        }

        match id.parse::<i32>() {
            Ok(numeric) => repo.find_by_id(numeric).await,
            Err(_) => Ok(None),
        }
    }

    async fn get_owned(&self, owner_id: u64, id: &str) -> Result<SavedMessage, AppError> {
        let message = self.get_for_viewer(id, Some(owner_id)).await?;

        if !message.is_owned_by(owner_id) {
            return Err(AuthError::AccessDenied(
                owner_id,
                format!("User does not own message {}", message.public_id),
            )
            .into());
        }

        Ok(message)
    }

    async fn unused_public_id(&self) -> Result<String, AppError> {
        let repo = MessageRepository::new(self.db);

        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = generate_public_id();
            if !repo.public_id_exists(&candidate).await? {
                return Ok(candidate);
            }
        }

        Err(InternalError::IdGenerationExhausted(MAX_ID_ATTEMPTS).into())
    }
}

/// Normalizes a payload and rejects blank or oversized messages.
///
/// Colors are checked before normalizing since normalizing drops the ones outside 24 bits.
fn checked_message(message: Message) -> Result<Message, AppError> {
    check_colors(&message).map_err(limit_error)?;

    let message = message.normalized();

    if message.is_blank() {
        return Err(AppError::Validation(
            "Message must have content or at least one embed".to_string(),
        ));
    }

    validate(&message).map_err(limit_error)?;

    Ok(message)
}

fn limit_error(violations: Vec<LimitViolation>) -> AppError {
    AppError::Validation(
        violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; "),
    )
}

fn not_found() -> AppError {
    AppError::NotFound("Message not found".to_string())
}
