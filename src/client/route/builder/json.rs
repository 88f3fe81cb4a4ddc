use dioxus::prelude::*;

use crate::editor::JsonStatus;

use super::EditorHandle;

/// Raw JSON view. Text that fails to parse is kept as typed and blocks saving.
#[component]
pub fn JsonEditor() -> Element {
    let mut handle = use_context::<EditorHandle>();
    let text = handle.session.read().json_text().to_string();
    let status = handle.session.read().json_status().clone();

    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-3",
                textarea {
                    class: "textarea textarea-bordered w-full font-mono text-sm min-h-[32rem]",
                    spellcheck: false,
                    value: "{text}",
                    oninput: move |evt| handle.apply(|s| s.on_json_edited(evt.value())),
                }
                match status {
                    JsonStatus::Valid => rsx! {
                        span { class: "text-sm text-success", "Valid JSON" }
                    },
                    JsonStatus::Invalid(reason) => rsx! {
                        div {
                            class: "alert alert-error text-sm",
                            span { "Invalid JSON: {reason}. Saving is blocked and the preview shows the last valid version." }
                            button {
                                class: "btn btn-sm",
                                onclick: move |_| handle.apply(|s| s.on_json_reverted()),
                                "Revert"
                            }
                        }
                    },
                }
            }
        }
    )
}
