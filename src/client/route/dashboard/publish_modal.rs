use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{component::Modal, model::toast::ToastContext},
    model::message::{parse_tags, MessageDto, MessageType, PublishMessageDto},
};

#[cfg(feature = "web")]
use crate::client::api::message::publish_message;

#[derive(Clone, Default, PartialEq)]
struct PublishForm {
    title: String,
    category: Option<MessageType>,
    language: String,
    tags: String,
    keywords: String,
}

impl PublishForm {
    fn for_message(message: &MessageDto) -> Self {
        Self {
            title: message.title.clone().unwrap_or_default(),
            category: Some(message.category.unwrap_or(message.message_type)),
            language: message.language.clone().unwrap_or_default(),
            tags: message.tags.join(", "),
            keywords: message.keywords.join(" "),
        }
    }

    fn payload(&self) -> PublishMessageDto {
        let language = self.language.trim();

        PublishMessageDto {
            title: self.title.trim().to_string(),
            category: self.category,
            language: (!language.is_empty()).then(|| language.to_string()),
            tags: parse_tags(&self.tags),
            keywords: self.keywords.clone(),
        }
    }
}

/// Collects the gallery metadata and publishes the message.
#[component]
pub fn PublishModal(
    show: Signal<bool>,
    message: Option<MessageDto>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    #[allow(unused_mut, unused_variables)]
    let mut toasts = use_context::<ToastContext>();
    let mut form = use_signal(PublishForm::default);
    let mut error = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut is_submitting = use_signal(|| false);

    // Reset the form whenever another message is opened
    let source = message.clone();
    use_effect(use_reactive!(|source| {
        if let Some(message) = source {
            form.set(PublishForm::for_message(&message));
            error.set(None);
        }
    }));

    let Some(message) = message else {
        return rsx! {};
    };
    let id = message.id.clone();

    #[allow(unused_variables)]
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let payload = form().payload();
        if let Err(reason) = payload.validate() {
            error.set(Some(reason.to_string()));
            return;
        }
        error.set(None);

        #[cfg(feature = "web")]
        {
            let id = id.clone();
            is_submitting.set(true);
            spawn(async move {
                match publish_message(&id, &payload).await {
                    Ok(_) => {
                        toasts.success("Message published to the community");
                        refetch_trigger.set(refetch_trigger() + 1);
                        show.set(false);
                    }
                    Err(err) => {
                        tracing::error!("Failed to publish message: {}", err);
                        error.set(Some(err.message));
                    }
                }
                is_submitting.set(false);
            });
        }
    };

    rsx!(
        Modal {
            show,
            title: "Publish to Community".to_string(),
            prevent_close: is_submitting(),
            form {
                class: "flex flex-col gap-3",
                onsubmit: on_submit,
                label {
                    class: "form-control w-full flex flex-col gap-1",
                    span { class: "label-text", "Title" }
                    input {
                        r#type: "text",
                        class: "input input-bordered w-full",
                        maxlength: 100,
                        value: "{form().title}",
                        oninput: move |evt| form.write().title = evt.value(),
                        disabled: is_submitting(),
                    }
                }
                label {
                    class: "form-control w-full flex flex-col gap-1",
                    span { class: "label-text", "Category" }
                    select {
                        class: "select select-bordered w-full",
                        disabled: is_submitting(),
                        onchange: move |evt| {
                            form.write().category = evt.value().parse::<MessageType>().ok();
                        },
                        for kind in MessageType::ALL {
                            option {
                                value: kind.as_str(),
                                selected: form().category == Some(kind),
                                {kind.label()}
                            }
                        }
                    }
                }
                label {
                    class: "form-control w-full flex flex-col gap-1",
                    span { class: "label-text", "Language" }
                    input {
                        r#type: "text",
                        class: "input input-bordered w-full",
                        placeholder: "e.g., English",
                        value: "{form().language}",
                        oninput: move |evt| form.write().language = evt.value(),
                        disabled: is_submitting(),
                    }
                }
                label {
                    class: "form-control w-full flex flex-col gap-1",
                    span { class: "label-text", "Tags" }
                    input {
                        r#type: "text",
                        class: "input input-bordered w-full",
                        placeholder: "gaming, rules, welcome",
                        value: "{form().tags}",
                        oninput: move |evt| form.write().tags = evt.value(),
                        disabled: is_submitting(),
                    }
                }
                label {
                    class: "form-control w-full flex flex-col gap-1",
                    span { class: "label-text", "Keywords" }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        placeholder: "Words people might search for",
                        value: "{form().keywords}",
                        oninput: move |evt| form.write().keywords = evt.value(),
                        disabled: is_submitting(),
                    }
                }
                if let Some(reason) = error() {
                    div { class: "alert alert-error", span { "{reason}" } }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        onclick: move |_| show.set(false),
                        disabled: is_submitting(),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_submitting(),
                        if is_submitting() {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                            "Publishing..."
                        } else {
                            "Publish"
                        }
                    }
                }
            }
        }
    )
}
