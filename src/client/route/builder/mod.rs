//! Message builder: GUI form or raw JSON on the left, live preview on the right.
//!
//! Every edit goes through an [`EditorSession`] command. [`EditorHandle`] runs the
//! command and moves whatever the session queued into the toast stack.

mod gui;
mod json;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            MessagePreview, Page,
        },
        constant::SITE_NAME,
        model::{error::ApiError, toast::ToastContext},
        router::Route,
    },
    editor::{EditorSession, View},
    model::message::{MessageDto, MessageType},
};

use gui::GuiEditor;
use json::JsonEditor;

#[cfg(feature = "web")]
use crate::client::api::message::{get_message, save_message};

/// Shared by the builder's child components through context.
#[derive(Clone, Copy)]
pub struct EditorHandle {
    pub session: Signal<EditorSession>,
    toasts: ToastContext,
}

impl EditorHandle {
    /// Runs a session command and surfaces its notifications.
    pub fn apply<R>(&mut self, command: impl FnOnce(&mut EditorSession) -> R) -> R {
        let (result, notifications) = {
            let mut session = self.session.write();
            let result = command(&mut session);
            (result, session.take_notifications())
        };
        self.toasts.push_all(notifications);
        result
    }
}

/// Where a builder session starts from.
#[derive(Clone, PartialEq)]
pub enum Seed {
    Blank,
    /// Edit a saved message in place.
    Saved(MessageDto),
    /// Start a new message from a community one.
    Template(MessageDto),
}

impl Seed {
    fn session(&self) -> EditorSession {
        match self {
            Seed::Blank => EditorSession::new(MessageType::default()),
            Seed::Saved(dto) => EditorSession::load(dto),
            Seed::Template(dto) => EditorSession::from_template(dto.message_type, &dto.message()),
        }
    }
}

#[component]
pub fn Builder(guild_id: u64) -> Element {
    rsx! {
        Title { "Builder | {SITE_NAME}" }
        Editor { guild_id, seed: Seed::Blank }
    }
}

#[component]
pub fn EditBuilder(guild_id: u64, message_id: String) -> Element {
    rsx! {
        Title { "Builder | {SITE_NAME}" }
        SeededEditor { guild_id, message_id, template: false }
    }
}

#[component]
pub fn TemplateBuilder(message_id: String) -> Element {
    rsx! {
        Title { "Builder | {SITE_NAME}" }
        SeededEditor { message_id, template: true }
    }
}

/// Loads a message before opening the editor on it.
#[component]
fn SeededEditor(guild_id: Option<u64>, message_id: String, template: bool) -> Element {
    #[allow(unused_mut)]
    let mut loaded = use_signal(|| None::<Result<MessageDto, ApiError>>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(use_reactive!(|message_id| async move {
            get_message(&message_id).await
        }));

        use_effect(move || match &*future.read_unchecked() {
            Some(Ok(dto)) => loaded.set(Some(Ok(dto.clone()))),
            Some(Err(err)) => {
                tracing::error!("Failed to fetch message: {}", err);
                loaded.set(Some(Err(err.clone())));
            }
            None => (),
        });
    }

    match loaded() {
        Some(Ok(dto)) => {
            let key = dto.id.clone();
            let seed = if template {
                Seed::Template(dto)
            } else {
                Seed::Saved(dto)
            };
            rsx! { Editor { key: "{key}", guild_id, seed } }
        }
        Some(Err(err)) => rsx! { ErrorPage { status: err.status, message: err.message } },
        None => rsx! { LoadingPage {} },
    }
}

#[component]
fn Editor(guild_id: Option<u64>, seed: Seed) -> Element {
    let toasts = use_context::<ToastContext>();
    let session = use_signal(|| seed.session());
    let mut handle = use_context_provider(|| EditorHandle { session, toasts });
    #[allow(unused_mut)]
    let mut is_saving = use_signal(|| false);

    let view = session.read().view();
    let can_save = session.read().can_save();
    let message_type = session.read().message_type();
    let preview = session.read().preview().clone();
    let heading = if session.read().message_id().is_some() {
        "Edit Message"
    } else {
        "New Message"
    };

    #[allow(unused_variables)]
    let save = move |_| {
        let Ok(request) = handle.apply(|s| s.on_save_requested()) else {
            return;
        };

        #[cfg(feature = "web")]
        {
            is_saving.set(true);
            spawn(async move {
                let result = save_message(&request).await.map(|saved| saved.id).map_err(|err| {
                    tracing::error!("Failed to save message: {}", err);
                    err.message
                });
                handle.apply(|s| s.on_save_completed(result));
                is_saving.set(false);
            });
        }
    };

    rsx! {
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-7xl flex flex-col gap-4",
                div {
                    class: "flex flex-wrap justify-between items-center gap-2",
                    match guild_id {
                        Some(guild_id) => rsx! {
                            Link { to: Route::Dashboard { guild_id }, class: "btn btn-ghost", "← Back to Dashboard" }
                        },
                        None => rsx! {
                            Link { to: Route::Community {}, class: "btn btn-ghost", "← Back to Community" }
                        },
                    }
                    h1 { class: "text-2xl font-bold", {heading} }
                    div {
                        class: "flex items-center gap-2",
                        select {
                            class: "select select-bordered select-sm",
                            onchange: move |evt| {
                                if let Ok(kind) = evt.value().parse::<MessageType>() {
                                    handle.apply(|s| s.on_type_changed(kind));
                                }
                            },
                            for kind in MessageType::ALL {
                                option {
                                    value: kind.as_str(),
                                    selected: kind == message_type,
                                    {kind.label()}
                                }
                            }
                        }
                        div {
                            class: "join",
                            button {
                                class: if view == View::Gui { "btn btn-sm join-item btn-active" } else { "btn btn-sm join-item" },
                                onclick: move |_| handle.apply(|s| s.on_view_switched(View::Gui)),
                                "GUI"
                            }
                            button {
                                class: if view == View::Json { "btn btn-sm join-item btn-active" } else { "btn btn-sm join-item" },
                                onclick: move |_| handle.apply(|s| s.on_view_switched(View::Json)),
                                "JSON"
                            }
                        }
                        button {
                            class: "btn btn-sm btn-primary",
                            disabled: !can_save || is_saving(),
                            onclick: save,
                            if is_saving() {
                                span { class: "loading loading-spinner loading-sm mr-2" }
                                "Saving..."
                            } else {
                                "Save"
                            }
                        }
                    }
                }
                div {
                    class: "grid grid-cols-1 lg:grid-cols-2 gap-4",
                    div {
                        class: "flex flex-col gap-4",
                        match view {
                            View::Gui => rsx! { GuiEditor {} },
                            View::Json => rsx! { JsonEditor {} },
                        }
                    }
                    div {
                        class: "lg:sticky lg:top-24 self-start w-full",
                        MessagePreview { preview }
                    }
                }
            }
        }
    }
}
