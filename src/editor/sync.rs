//! Editor session: keeps the form, the JSON text and the preview consistent.
//!
//! The session starts in the GUI view. Every form command re-extracts the canonical
//! message and re-renders the preview; the JSON text is regenerated only when the
//! JSON view is activated. Edits in the JSON view rebuild the form when they parse
//! and are contained when they do not: the form and the canonical message keep their
//! last good state and saving is blocked until the text parses again.

use crate::model::message::{
    check_colors, normalize, placeholder::Placeholder, validate, CreateMessageDto, Message,
    MessageDto, MessageType, UpdateMessageDto,
};

use super::{
    error::EditorError,
    form::{insert_placeholder, FormState},
    path::{EmbedIndex, FieldIndex, FieldValue, FormPath},
    preview::{render_preview, Preview},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Gui,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JsonStatus {
    Valid,
    /// Parser message for the current text.
    Invalid(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }
}

/// What the persistence layer should do with a save.
#[derive(Clone, Debug, PartialEq)]
pub enum SaveRequest {
    Create(CreateMessageDto),
    Update { id: String, payload: UpdateMessageDto },
}

impl SaveRequest {
    pub fn message(&self) -> Message {
        match self {
            SaveRequest::Create(payload) => payload.message(),
            SaveRequest::Update { payload, .. } => payload.message(),
        }
    }
}

/// State of one open builder view.
#[derive(Clone, Debug)]
pub struct EditorSession {
    message_id: Option<String>,
    message_type: MessageType,
    form: FormState,
    message: Message,
    preview: Preview,
    view: View,
    json_text: String,
    last_good_json: String,
    json_status: JsonStatus,
    notifications: Vec<Notification>,
}

impl EditorSession {
    /// Session for a new, unsaved message.
    pub fn new(message_type: MessageType) -> Self {
        Self::with_message(None, message_type, Message::default())
    }

    /// Session editing a saved message.
    pub fn load(saved: &MessageDto) -> Self {
        Self::with_message(Some(saved.id.clone()), saved.message_type, saved.message())
    }

    /// Session for a new message pre-filled from another, e.g. a community template.
    pub fn from_template(message_type: MessageType, template: &Message) -> Self {
        Self::with_message(None, message_type, template.clone())
    }

    fn with_message(message_id: Option<String>, message_type: MessageType, message: Message) -> Self {
        let message = normalize(message);
        let form = FormState::from_message(&message);
        let preview = render_preview(&message);

        Self {
            message_id,
            message_type,
            form,
            message,
            preview,
            view: View::Gui,
            json_text: String::new(),
            last_good_json: String::new(),
            json_status: JsonStatus::Valid,
            notifications: Vec::new(),
        }
    }

    pub fn on_field_changed(&mut self, path: FormPath, value: FieldValue) -> bool {
        let result = self.form.set(path, value);
        self.apply(result).is_some()
    }

    pub fn on_add_embed(&mut self) -> Option<EmbedIndex> {
        let result = self.form.add_embed();
        self.apply(result)
    }

    pub fn on_remove_embed(&mut self, embed: EmbedIndex) -> bool {
        let result = self.form.remove_embed(embed);
        self.apply(result).is_some()
    }

    /// Adds a field editor. At the field ceiling an error notification is queued and
    /// nothing else changes.
    pub fn on_add_field(&mut self, embed: EmbedIndex) -> Option<FieldIndex> {
        let result = self.form.add_field(embed);
        self.apply(result)
    }

    pub fn on_remove_field(&mut self, embed: EmbedIndex, field: FieldIndex) -> bool {
        let result = self.form.remove_field(embed, field);
        self.apply(result).is_some()
    }

    /// Splices `token` into the content at `cursor`, returning the new cursor.
    pub fn on_placeholder_inserted(&mut self, token: &str, cursor: usize) -> usize {
        let (content, cursor) = insert_placeholder(&self.form.content, cursor, token);
        self.form.content = content;
        self.refresh();
        cursor
    }

    pub fn on_view_switched(&mut self, view: View) {
        if view == self.view {
            return;
        }

        if view == View::Json {
            match self.message.to_json_pretty() {
                Ok(text) => {
                    self.json_text = text.clone();
                    self.last_good_json = text;
                    self.json_status = JsonStatus::Valid;
                }
                Err(e) => {
                    self.notify(Notification::error(format!("Could not serialize message: {}", e)));
                    return;
                }
            }
        }

        self.view = view;
    }

    /// Parses edited JSON. Valid text rebuilds the form and preview; invalid text
    /// only flags the error.
    ///
    /// Text is only accepted while the JSON view is active. Colors outside 24 bits make
    /// the text invalid instead of being dropped.
    pub fn on_json_edited(&mut self, text: String) {
        if self.view != View::Json {
            self.notify(Notification::info("Switch to the JSON view to edit JSON"));
            return;
        }

        match parse_json(&text) {
            Ok(raw) => {
                self.message = normalize(raw);
                self.form.populate(&self.message);
                self.preview = render_preview(&self.message);
                self.last_good_json = text.clone();
                self.json_status = JsonStatus::Valid;
            }
            Err(reason) => {
                self.json_status = JsonStatus::Invalid(reason);
            }
        }
        self.json_text = text;
    }

    /// Throws away invalid JSON text and restores the last text that parsed.
    pub fn on_json_reverted(&mut self) {
        if self.view == View::Json {
            self.json_text = self.last_good_json.clone();
            self.json_status = JsonStatus::Valid;
        }
    }

    /// Builds the request for the persistence layer, or explains why not.
    ///
    /// Every rejection also queues an error notification. Nothing in the session
    /// changes either way.
    pub fn on_save_requested(&mut self) -> Result<SaveRequest, EditorError> {
        let result = self.save_request();
        if let Err(e) = &result {
            self.notify(Notification::error(e.to_string()));
        }
        result
    }

    fn save_request(&self) -> Result<SaveRequest, EditorError> {
        let message = match (self.view, &self.json_status) {
            (View::Json, JsonStatus::Invalid(reason)) => {
                return Err(EditorError::InvalidJson(reason.clone()))
            }
            (View::Json, JsonStatus::Valid) => self.message.clone(),
            (View::Gui, _) => self.form.extract(),
        };

        if message.is_blank() {
            return Err(EditorError::EmptyMessage);
        }
        if let Err(violations) = validate(&message) {
            let reasons: Vec<String> = violations.iter().map(ToString::to_string).collect();
            return Err(EditorError::Validation(reasons.join("; ")));
        }

        Ok(match &self.message_id {
            None => SaveRequest::Create(CreateMessageDto::new(message, self.message_type)),
            Some(id) => SaveRequest::Update {
                id: id.clone(),
                payload: UpdateMessageDto::new(message, self.message_type),
            },
        })
    }

    /// Records the outcome of a save. `Ok` carries the message id.
    ///
    /// A failure leaves every edit in place so the user can retry.
    pub fn on_save_completed(&mut self, result: Result<String, String>) {
        match result {
            Ok(id) => {
                let created = self.message_id.is_none();
                self.message_id = Some(id);
                self.notify(Notification::success(if created {
                    "Message created!"
                } else {
                    "Message updated!"
                }));
            }
            Err(e) => self.notify(Notification::error(format!("Failed to save message: {}", e))),
        }
    }

    pub fn on_type_changed(&mut self, message_type: MessageType) {
        self.message_type = message_type;
    }

    pub fn message_id(&self) -> Option<&str> {
        self.message_id.as_deref()
    }

    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    pub fn placeholders(&self) -> &'static [Placeholder] {
        self.message_type.placeholders()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Canonical message as of the last successful edit.
    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn json_text(&self) -> &str {
        &self.json_text
    }

    pub fn json_status(&self) -> &JsonStatus {
        &self.json_status
    }

    /// False while the JSON view holds text that does not parse.
    pub fn can_save(&self) -> bool {
        !(self.view == View::Json && matches!(self.json_status, JsonStatus::Invalid(_)))
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Drains queued notifications, oldest first.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn apply<T>(&mut self, result: Result<T, EditorError>) -> Option<T> {
        match result {
            Ok(value) => {
                self.refresh();
                Some(value)
            }
            Err(e) => {
                self.notify(Notification::error(e.to_string()));
                None
            }
        }
    }

    fn refresh(&mut self) {
        self.message = self.form.extract();
        self.preview = render_preview(&self.message);
    }
}

fn parse_json(text: &str) -> Result<Message, String> {
    let raw = serde_json::from_str::<Message>(text).map_err(|e| e.to_string())?;

    check_colors(&raw).map_err(|violations| {
        violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    })?;

    Ok(raw)
}
