use dioxus::prelude::*;

use super::Modal;

/// Cancel/confirm dialog for destructive actions. Both buttons lock while `is_processing`.
#[component]
pub fn ConfirmationModal(
    show: Signal<bool>,
    title: String,
    message: Element,
    confirm_text: String,
    #[props(default = "btn-error".to_string())] confirm_class: String,
    is_processing: bool,
    #[props(default = "Working...".to_string())] processing_text: String,
    on_confirm: EventHandler<()>,
) -> Element {
    let label = if is_processing {
        processing_text
    } else {
        confirm_text
    };

    rsx!(
        Modal {
            show,
            title,
            prevent_close: is_processing,
            {message}
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn btn-ghost",
                    disabled: is_processing,
                    onclick: move |_| show.set(false),
                    "Cancel"
                }
                button {
                    r#type: "button",
                    class: "btn {confirm_class}",
                    disabled: is_processing,
                    onclick: move |_| on_confirm.call(()),
                    if is_processing {
                        span { class: "loading loading-spinner loading-sm mr-2" }
                    }
                    "{label}"
                }
            }
        }
    )
}
