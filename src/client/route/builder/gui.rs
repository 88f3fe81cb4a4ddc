use dioxus::prelude::*;

use crate::{
    editor::{EmbedIndex, EmbedPath, FieldIndex, FieldPart, FieldValue, FormPath},
    model::message::limit::{
        MAX_AUTHOR_NAME_LENGTH, MAX_CONTENT_LENGTH, MAX_DESCRIPTION_LENGTH, MAX_FIELD_NAME_LENGTH, MAX_FIELD_VALUE_LENGTH,
        MAX_FOOTER_TEXT_LENGTH, MAX_TITLE_LENGTH,
    },
};

use super::EditorHandle;

const CONTENT_INPUT_ID: &str = "message-content";

#[component]
pub fn GuiEditor() -> Element {
    let mut handle = use_context::<EditorHandle>();
    let embeds = handle.session.read().form().embeds.indices();

    rsx!(
        ContentEditor {}
        for embed in embeds {
            EmbedEditor { key: "{embed}", embed }
        }
        button {
            class: "btn btn-outline",
            onclick: move |_| {
                handle.apply(|s| s.on_add_embed());
            },
            "Add Embed"
        }
    )
}

#[component]
fn ContentEditor() -> Element {
    let mut handle = use_context::<EditorHandle>();
    let placeholders = handle.session.read().placeholders();

    let insert = move |token: &'static str| {
        spawn(async move {
            let cursor = content_cursor().await;
            handle.apply(|s| s.on_placeholder_inserted(token, cursor));
        });
    };

    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-3",
                TextInput {
                    id: CONTENT_INPUT_ID,
                    caption: "Content",
                    path: FormPath::Content,
                    max_length: MAX_CONTENT_LENGTH,
                }
                div {
                    class: "flex flex-wrap gap-1",
                    for placeholder in placeholders.iter().copied() {
                        button {
                            key: "{placeholder.token}",
                            class: "btn btn-xs btn-ghost font-mono",
                            title: placeholder.description,
                            onclick: move |_| insert(placeholder.token),
                            {placeholder.token}
                        }
                    }
                }
            }
        }
    )
}

/// Caret position in the content box, or the end of the text when unknown.
async fn content_cursor() -> usize {
    #[cfg(feature = "web")]
    {
        let script = format!(
            "return document.getElementById('{}')?.selectionStart ?? null",
            CONTENT_INPUT_ID
        );
        if let Ok(Some(position)) = document::eval(&script).join::<Option<usize>>().await {
            return position;
        }
    }
    usize::MAX
}

#[component]
fn EmbedEditor(embed: EmbedIndex) -> Element {
    let mut handle = use_context::<EditorHandle>();
    let Some((fields, color_hex, timestamp_enabled)) =
        handle.session.read().form().embed(embed).map(|form| {
            (
                form.fields.indices(),
                form.color_hex.clone(),
                form.timestamp_enabled,
            )
        })
    else {
        return rsx! {};
    };

    let path = move |path: EmbedPath| FormPath::embed(embed, path);

    rsx!(
        div {
            class: "card bg-base-200 border-l-4",
            style: "border-left-color: {color_hex}",
            div {
                class: "card-body gap-3",
                div {
                    class: "flex justify-between items-center",
                    h3 { class: "font-semibold", "Embed" }
                    button {
                        class: "btn btn-sm btn-ghost",
                        onclick: move |_| {
                            handle.apply(|s| s.on_remove_embed(embed));
                        },
                        "Remove"
                    }
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-3",
                    TextInput {
                        caption: "Author name",
                        path: path(EmbedPath::AuthorName),
                        max_length: MAX_AUTHOR_NAME_LENGTH,
                    }
                    TextInput { caption: "Author icon URL", path: path(EmbedPath::AuthorIconUrl) }
                    TextInput { caption: "Author URL", path: path(EmbedPath::AuthorUrl) }
                    TextInput { caption: "Title URL", path: path(EmbedPath::Url) }
                }
                TextInput { caption: "Title", path: path(EmbedPath::Title), max_length: MAX_TITLE_LENGTH }
                TextInput {
                    caption: "Description",
                    path: path(EmbedPath::Description),
                    max_length: MAX_DESCRIPTION_LENGTH,
                }
                div {
                    class: "flex items-center gap-3",
                    span { class: "label-text", "Color" }
                    input {
                        r#type: "color",
                        value: "{color_hex}",
                        oninput: move |evt| {
                            handle.apply(|s| s.on_field_changed(path(EmbedPath::Color), FieldValue::Text(evt.value())));
                        },
                    }
                }
                div {
                    class: "flex flex-col gap-2",
                    for field in fields {
                        FieldEditor { key: "{field}", embed, field }
                    }
                    button {
                        class: "btn btn-sm btn-outline self-start",
                        onclick: move |_| {
                            handle.apply(|s| s.on_add_field(embed));
                        },
                        "Add Field"
                    }
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-3",
                    TextInput { caption: "Thumbnail URL", path: path(EmbedPath::ThumbnailUrl) }
                    TextInput { caption: "Image URL", path: path(EmbedPath::ImageUrl) }
                    TextInput {
                        caption: "Footer text",
                        path: path(EmbedPath::FooterText),
                        max_length: MAX_FOOTER_TEXT_LENGTH,
                    }
                    TextInput { caption: "Footer icon URL", path: path(EmbedPath::FooterIconUrl) }
                }
                label {
                    class: "label cursor-pointer justify-start gap-2",
                    input {
                        r#type: "checkbox",
                        class: "toggle toggle-sm",
                        checked: timestamp_enabled,
                        onchange: move |evt| {
                            handle.apply(|s| s.on_field_changed(path(EmbedPath::Timestamp), FieldValue::Bool(evt.checked())));
                        },
                    }
                    span { class: "label-text", "Include timestamp" }
                }
            }
        }
    )
}

#[component]
fn FieldEditor(embed: EmbedIndex, field: FieldIndex) -> Element {
    let mut handle = use_context::<EditorHandle>();
    let inline = handle
        .session
        .read()
        .form()
        .embed(embed)
        .and_then(|form| form.fields.get(field))
        .is_some_and(|field| field.inline);

    let path = move |part: FieldPart| FormPath::embed(embed, EmbedPath::field(field, part));

    rsx!(
        div {
            class: "rounded bg-base-100 p-3 flex flex-col gap-2",
            div {
                class: "flex gap-2 items-end",
                div {
                    class: "flex-1",
                    TextInput { caption: "Field name", path: path(FieldPart::Name), max_length: MAX_FIELD_NAME_LENGTH }
                }
                label {
                    class: "label cursor-pointer gap-2",
                    span { class: "label-text", "Inline" }
                    input {
                        r#type: "checkbox",
                        class: "checkbox checkbox-sm",
                        checked: inline,
                        onchange: move |evt| {
                            handle.apply(|s| s.on_field_changed(path(FieldPart::Inline), FieldValue::Bool(evt.checked())));
                        },
                    }
                }
                button {
                    class: "btn btn-sm btn-ghost",
                    onclick: move |_| {
                        handle.apply(|s| s.on_remove_field(embed, field));
                    },
                    "✕"
                }
            }
            TextInput {
                caption: "Field value",
                path: path(FieldPart::Value),
                max_length: MAX_FIELD_VALUE_LENGTH,
            }
        }
    )
}

/// Text control bound to one form path. Multi line paths get a text area.
#[component]
fn TextInput(
    caption: &'static str,
    path: FormPath,
    id: Option<&'static str>,
    max_length: Option<usize>,
) -> Element {
    let mut handle = use_context::<EditorHandle>();
    let value = match handle.session.read().form().get(path) {
        Some(FieldValue::Text(text)) => text,
        _ => String::new(),
    };
    let length = value.chars().count();
    let over_limit = max_length.is_some_and(|max| length > max);

    let onchange = move |evt: FormEvent| {
        handle.apply(|s| s.on_field_changed(path, FieldValue::Text(evt.value())));
    };

    rsx!(
        label {
            class: "form-control w-full flex flex-col gap-1",
            div {
                class: "flex justify-between",
                span { class: "label-text", {caption} }
                if let Some(max) = max_length {
                    span {
                        class: if over_limit { "label-text-alt text-error" } else { "label-text-alt opacity-50" },
                        "{length}/{max}"
                    }
                }
            }
            if path.is_multi_line() {
                textarea {
                    id,
                    class: "textarea textarea-bordered w-full min-h-24",
                    value: "{value}",
                    oninput: onchange,
                }
            } else {
                input {
                    id,
                    r#type: "text",
                    class: "input input-bordered input-sm w-full",
                    value: "{value}",
                    oninput: onchange,
                }
            }
        }
    )
}
