use dioxus::prelude::*;

use crate::editor::{
    preview::{EmbedPreview, FieldPreview},
    Preview, CONTENT_HINT,
};

/// Discord style rendering of a message.
///
/// Markdown is rendered by the editor with raw HTML escaped, so the generated markup
/// is injected as is.
#[component]
pub fn MessagePreview(preview: Preview) -> Element {
    rsx!(
        div {
            class: "rounded-lg bg-[#313338] text-[#dbdee1] p-4 flex flex-col gap-2",
            match preview.content_html.clone() {
                Some(html) => rsx! {
                    div { class: "prose prose-invert max-w-none", dangerous_inner_html: html }
                },
                None if preview.embeds.is_empty() => rsx! {
                    p { class: "opacity-40 italic", {CONTENT_HINT} }
                },
                None => rsx! {},
            }
            for (index, embed) in preview.embeds.iter().enumerate() {
                EmbedCard { key: "{index}", embed: embed.clone() }
            }
        }
    )
}

#[component]
fn EmbedCard(embed: EmbedPreview) -> Element {
    rsx!(
        div {
            class: "max-w-lg rounded bg-[#2b2d31] border-l-4 p-3 flex gap-3",
            style: "border-left-color: {embed.accent}",
            div {
                class: "flex flex-col gap-1 min-w-0 flex-1",
                if let Some(author) = embed.author.clone() {
                    div {
                        class: "flex items-center gap-2 text-sm font-semibold",
                        if let Some(icon) = author.icon_url {
                            img { class: "w-6 h-6 rounded-full", src: "{icon}" }
                        }
                        match (author.url, author.name) {
                            (Some(url), Some(name)) => rsx! { a { href: "{url}", target: "_blank", "{name}" } },
                            (None, Some(name)) => rsx! { span { "{name}" } },
                            _ => rsx! {},
                        }
                    }
                }
                if let Some(title) = embed.title.clone() {
                    match embed.url.clone() {
                        Some(url) => rsx! {
                            a { class: "font-bold text-[#00a8fc] hover:underline", href: "{url}", target: "_blank", "{title}" }
                        },
                        None => rsx! { p { class: "font-bold", "{title}" } },
                    }
                }
                if let Some(html) = embed.description_html.clone() {
                    div { class: "text-sm prose prose-invert max-w-none", dangerous_inner_html: html }
                }
                if !embed.fields.is_empty() {
                    div {
                        class: "grid grid-cols-3 gap-2 mt-1",
                        for (index, field) in embed.fields.iter().enumerate() {
                            Field { key: "{index}", field: field.clone() }
                        }
                    }
                }
                if let Some(image) = embed.image_url.clone() {
                    img { class: "rounded mt-2 max-w-full", src: "{image}" }
                }
                if let Some(footer) = embed.footer.clone() {
                    div {
                        class: "flex items-center gap-2 text-xs opacity-70 mt-1",
                        if let Some(icon) = footer.icon_url.clone() {
                            img { class: "w-5 h-5 rounded-full", src: "{icon}" }
                        }
                        span { {footer.label()} }
                    }
                }
            }
            if let Some(thumbnail) = embed.thumbnail_url.clone() {
                img { class: "w-20 h-20 rounded object-cover", src: "{thumbnail}" }
            }
        }
    )
}

#[component]
fn Field(field: FieldPreview) -> Element {
    let span = if field.inline { "col-span-1" } else { "col-span-3" };

    rsx!(
        div {
            class: "{span} text-sm",
            p { class: "font-semibold", "{field.name}" }
            div { class: "prose prose-invert max-w-none", dangerous_inner_html: field.value_html.clone() }
        }
    )
}
