use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::model::{error::ApiError, toast::ToastContext},
    model::{
        message::MessageDto,
        server_profile::{BindingKind, ServerProfileDto, SetBindingDto},
    },
};

use super::message_label;

#[cfg(feature = "web")]
use crate::client::api::server_profile::{get_server_profile, remove_binding, set_binding};

/// Welcome, leave and ban bindings of a guild.
#[component]
pub fn BindingPanel(guild_id: u64, messages: Vec<MessageDto>) -> Element {
    #[allow(unused_mut)]
    let mut profile = use_signal(|| None::<Result<ServerProfileDto, ApiError>>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move { get_server_profile(guild_id).await });

        use_effect(move || match &*future.read_unchecked() {
            Some(Ok(data)) => profile.set(Some(Ok(data.clone()))),
            Some(Err(err)) => {
                tracing::error!("Failed to fetch server profile: {}", err);
                profile.set(Some(Err(err.clone())));
            }
            None => (),
        });
    }

    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title mb-2", "Event Messages" }
                match profile() {
                    Some(Ok(data)) => rsx! {
                        div {
                            class: "grid grid-cols-1 lg:grid-cols-3 gap-4",
                            for kind in BindingKind::ALL {
                                BindingCard {
                                    key: "{kind}",
                                    guild_id,
                                    kind,
                                    current: data.binding(kind).cloned(),
                                    messages: messages.clone(),
                                    profile,
                                }
                            }
                        }
                    },
                    Some(Err(err)) => rsx! {
                        div {
                            class: "alert alert-error",
                            span { "Error loading server profile: {err.message}" }
                        }
                    },
                    None => rsx! {
                        div {
                            class: "text-center py-8",
                            span { class: "loading loading-spinner loading-lg" }
                        }
                    },
                }
            }
        }
    )
}

fn kind_title(kind: BindingKind) -> &'static str {
    match kind {
        BindingKind::Welcome => "Welcome",
        BindingKind::Leave => "Leave",
        BindingKind::Ban => "Ban",
    }
}

fn kind_hint(kind: BindingKind) -> &'static str {
    match kind {
        BindingKind::Welcome => "Sent to a channel when a member joins.",
        BindingKind::Leave => "Sent to a channel when a member leaves.",
        BindingKind::Ban => "Sent to the banned user by direct message.",
    }
}

#[component]
fn BindingCard(
    guild_id: u64,
    kind: BindingKind,
    current: Option<crate::model::server_profile::BindingDto>,
    messages: Vec<MessageDto>,
    mut profile: Signal<Option<Result<ServerProfileDto, ApiError>>>,
) -> Element {
    #[allow(unused_mut, unused_variables)]
    let mut toasts = use_context::<ToastContext>();
    let mut editing = use_signal(|| false);
    let mut message_id = use_signal(String::new);
    let mut channel_id = use_signal(String::new);
    #[allow(unused_mut)]
    let mut is_saving = use_signal(|| false);

    let start_editing = {
        let current = current.clone();
        move |_| {
            message_id.set(current.as_ref().map(|b| b.message_id.clone()).unwrap_or_default());
            channel_id.set(
                current
                    .as_ref()
                    .and_then(|b| b.channel_id.clone())
                    .unwrap_or_default(),
            );
            editing.set(true);
        }
    };

    #[allow(unused_variables)]
    let save = move |_| {
        let payload = SetBindingDto {
            message_id: message_id().trim().to_string(),
            channel_id: kind
                .requires_channel()
                .then(|| channel_id().trim().to_string()),
        };
        if payload.message_id.is_empty() {
            toasts.error("Choose a message first");
            return;
        }

        #[cfg(feature = "web")]
        {
            is_saving.set(true);
            spawn(async move {
                match set_binding(guild_id, kind, &payload).await {
                    Ok(updated) => {
                        profile.set(Some(Ok(updated)));
                        editing.set(false);
                        toasts.success(format!("{} message saved", kind_title(kind)));
                    }
                    Err(err) => {
                        tracing::error!("Failed to set {} binding: {}", kind, err);
                        toasts.error(format!("Failed to save: {}", err));
                    }
                }
                is_saving.set(false);
            });
        }
    };

    #[allow(unused_variables)]
    let remove = move |_| {
        #[cfg(feature = "web")]
        {
            is_saving.set(true);
            spawn(async move {
                match remove_binding(guild_id, kind).await {
                    Ok(updated) => {
                        profile.set(Some(Ok(updated)));
                        toasts.success(format!("{} message removed", kind_title(kind)));
                    }
                    Err(err) => {
                        tracing::error!("Failed to remove {} binding: {}", kind, err);
                        toasts.error(format!("Failed to remove: {}", err));
                    }
                }
                is_saving.set(false);
            });
        }
    };

    let bound_label = current.as_ref().map(|binding| {
        messages
            .iter()
            .find(|message| message.id == binding.message_id)
            .map(message_label)
            .unwrap_or_else(|| binding.message_id.clone())
    });
    let bound_channel = current.as_ref().and_then(|binding| binding.channel_id.clone());

    rsx!(
        div {
            class: "card bg-base-100",
            div {
                class: "card-body gap-3",
                h3 { class: "font-semibold", {kind_title(kind)} }
                p { class: "text-sm opacity-60", {kind_hint(kind)} }
                if editing() {
                    select {
                        class: "select select-bordered w-full",
                        disabled: is_saving(),
                        onchange: move |evt| message_id.set(evt.value()),
                        option { value: "", selected: message_id().is_empty(), "Choose one of your messages" }
                        for message in messages.iter() {
                            option {
                                key: "{message.id}",
                                value: "{message.id}",
                                selected: message_id() == message.id,
                                {message_label(message)}
                            }
                        }
                    }
                    input {
                        r#type: "text",
                        class: "input input-bordered w-full",
                        placeholder: "…or paste a public message id",
                        value: "{message_id}",
                        oninput: move |evt| message_id.set(evt.value()),
                        disabled: is_saving(),
                    }
                    if kind.requires_channel() {
                        input {
                            r#type: "text",
                            class: "input input-bordered w-full",
                            placeholder: "Channel ID",
                            value: "{channel_id}",
                            oninput: move |evt| channel_id.set(evt.value()),
                            disabled: is_saving(),
                        }
                    }
                    div {
                        class: "flex gap-2 justify-end",
                        button {
                            class: "btn btn-sm",
                            disabled: is_saving(),
                            onclick: move |_| editing.set(false),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-sm btn-primary",
                            disabled: is_saving(),
                            onclick: save,
                            "Save"
                        }
                    }
                } else if let Some(label) = bound_label {
                    p { class: "text-sm break-words", "{label}" }
                    if let Some(channel) = bound_channel {
                        p { class: "text-xs opacity-60", "Channel {channel}" }
                    }
                    div {
                        class: "flex gap-2 justify-end",
                        button {
                            class: "btn btn-sm",
                            disabled: is_saving(),
                            onclick: start_editing,
                            "Change"
                        }
                        button {
                            class: "btn btn-sm btn-error",
                            disabled: is_saving(),
                            onclick: remove,
                            "Remove"
                        }
                    }
                } else {
                    button {
                        class: "btn btn-sm btn-outline",
                        onclick: start_editing,
                        "Set up"
                    }
                }
            }
        }
    )
}
