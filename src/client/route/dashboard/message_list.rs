use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{component::ConfirmationModal, model::toast::ToastContext, router::Route},
    model::message::MessageDto,
};

use super::{message_label, publish_modal::PublishModal};

#[cfg(feature = "web")]
use crate::client::api::message::{delete_message, unpublish_message};

#[component]
pub fn MessageList(
    guild_id: u64,
    messages: Vec<MessageDto>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    #[allow(unused_mut, unused_variables)]
    let mut toasts = use_context::<ToastContext>();

    let mut show_delete_modal = use_signal(|| false);
    let mut message_to_delete = use_signal(|| None::<MessageDto>);
    let mut is_deleting = use_signal(|| false);

    let mut show_publish_modal = use_signal(|| false);
    let mut message_to_publish = use_signal(|| None::<MessageDto>);

    // Handle deletion with use_resource
    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if is_deleting() {
            if let Some(message) = message_to_delete() {
                Some(delete_message(&message.id).await)
            } else {
                None
            }
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = delete_future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    toasts.success("Message deleted");
                    refetch_trigger.set(refetch_trigger() + 1);
                    show_delete_modal.set(false);
                    is_deleting.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to delete message: {}", err);
                    toasts.error(format!("Failed to delete message: {}", err));
                    is_deleting.set(false);
                }
            }
        }
    });

    #[allow(unused_variables)]
    let unpublish = move |id: String| {
        #[cfg(feature = "web")]
        spawn(async move {
            match unpublish_message(&id).await {
                Ok(_) => {
                    toasts.success("Message removed from the community");
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => {
                    tracing::error!("Failed to unpublish message: {}", err);
                    toasts.error(format!("Failed to unpublish message: {}", err));
                }
            }
        });
    };

    #[allow(unused_variables)]
    let mut copy_id = move |id: String| {
        #[cfg(feature = "web")]
        {
            document::eval(&format!("navigator.clipboard.writeText({:?})", id));
            toasts.success(format!("Copied {}", id));
        }
    };

    let delete_label = message_to_delete()
        .map(|message| message_label(&message))
        .unwrap_or_default();

    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title mb-2", "Your Messages" }
                if messages.is_empty() {
                    div {
                        class: "text-center py-8 opacity-50",
                        "No messages yet. Create one to bind it to an event."
                    }
                } else {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-zebra w-full",
                            thead {
                                tr {
                                    th { "Message" }
                                    th { "Type" }
                                    th { "Visibility" }
                                    th { class: "text-right", "Actions" }
                                }
                            }
                            tbody {
                                for message in messages.iter().cloned() {
                                    {
                                        let label = message_label(&message);
                                        let id = message.id.clone();
                                        let id_for_copy = id.clone();
                                        let id_for_unpublish = id.clone();
                                        let is_public = message.is_public();
                                        let for_publish = message.clone();
                                        let for_delete = message.clone();
                                        rsx! {
                                            tr {
                                                key: "{id}",
                                                td { class: "max-w-xs break-words", "{label}" }
                                                td { {message.message_type.label()} }
                                                td {
                                                    if is_public {
                                                        span { class: "badge badge-success", "Public" }
                                                    } else {
                                                        span { class: "badge badge-ghost", "Private" }
                                                    }
                                                }
                                                td {
                                                    div {
                                                        class: "flex gap-2 justify-end flex-wrap",
                                                        Link {
                                                            to: Route::EditBuilder { guild_id, message_id: id.clone() },
                                                            class: "btn btn-sm btn-primary",
                                                            "Edit"
                                                        }
                                                        button {
                                                            class: "btn btn-sm",
                                                            onclick: move |_| copy_id(id_for_copy.clone()),
                                                            "Copy ID"
                                                        }
                                                        if is_public {
                                                            button {
                                                                class: "btn btn-sm",
                                                                onclick: move |_| unpublish(id_for_unpublish.clone()),
                                                                "Unpublish"
                                                            }
                                                        } else {
                                                            button {
                                                                class: "btn btn-sm",
                                                                onclick: move |_| {
                                                                    message_to_publish.set(Some(for_publish.clone()));
                                                                    show_publish_modal.set(true);
                                                                },
                                                                "Publish"
                                                            }
                                                        }
                                                        button {
                                                            class: "btn btn-sm btn-error",
                                                            onclick: move |_| {
                                                                message_to_delete.set(Some(for_delete.clone()));
                                                                show_delete_modal.set(true);
                                                            },
                                                            "Delete"
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        ConfirmationModal {
            show: show_delete_modal,
            title: "Delete Message".to_string(),
            message: rsx!(
                p {
                    "Delete "
                    span { class: "font-bold", "{delete_label}" }
                    "? Event bindings that use it will stop sending."
                }
            ),
            confirm_text: "Delete".to_string(),
            is_processing: is_deleting(),
            processing_text: "Deleting...".to_string(),
            on_confirm: move |_| is_deleting.set(true),
        }

        PublishModal {
            show: show_publish_modal,
            message: message_to_publish(),
            refetch_trigger,
        }
    )
}
