use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{MessagePreview, Page},
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
    },
    editor::render_preview,
    model::message::{MessageDto, MessageType},
};

#[cfg(feature = "web")]
use crate::client::api::message::search_public_messages;

#[derive(Clone, Default, PartialEq)]
struct SearchQuery {
    search: String,
    category: Option<MessageType>,
    tags: String,
}

/// Gallery of published messages with search.
#[component]
pub fn Community() -> Element {
    let mut draft = use_signal(SearchQuery::default);
    let mut query = use_signal(SearchQuery::default);
    #[allow(unused_mut)]
    let mut results = use_signal(|| None::<Result<Vec<MessageDto>, ApiError>>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let query = query();
            search_public_messages(&query.search, query.category, &query.tags).await
        });

        use_effect(move || match &*future.read_unchecked() {
            Some(Ok(list)) => results.set(Some(Ok(list.clone()))),
            Some(Err(err)) => {
                tracing::error!("Failed to search community messages: {}", err);
                results.set(Some(Err(err.clone())));
            }
            None => (),
        });
    }

    rsx! {
        Title { "Community | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl flex flex-col gap-6",
                h1 { class: "text-2xl font-bold", "Community Messages" }
                form {
                    class: "flex flex-wrap gap-2 items-end",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        query.set(draft());
                    },
                    input {
                        r#type: "search",
                        class: "input input-bordered flex-1 min-w-48",
                        placeholder: "Search titles and keywords",
                        value: "{draft().search}",
                        oninput: move |evt| draft.write().search = evt.value(),
                    }
                    select {
                        class: "select select-bordered",
                        onchange: move |evt| draft.write().category = evt.value().parse::<MessageType>().ok(),
                        option { value: "", selected: draft().category.is_none(), "All categories" }
                        for kind in MessageType::ALL {
                            option {
                                value: kind.as_str(),
                                selected: draft().category == Some(kind),
                                {kind.label()}
                            }
                        }
                    }
                    input {
                        r#type: "text",
                        class: "input input-bordered",
                        placeholder: "Tags, comma separated",
                        value: "{draft().tags}",
                        oninput: move |evt| draft.write().tags = evt.value(),
                    }
                    button { r#type: "submit", class: "btn btn-primary", "Search" }
                }
                match results() {
                    Some(Ok(list)) if list.is_empty() => rsx! {
                        div { class: "text-center py-8 opacity-50", "No messages found" }
                    },
                    Some(Ok(list)) => rsx! {
                        div {
                            class: "grid grid-cols-1 lg:grid-cols-2 gap-4",
                            for message in list {
                                CommunityCard { key: "{message.id}", message: message.clone() }
                            }
                        }
                    },
                    Some(Err(err)) => rsx! {
                        div {
                            class: "alert alert-error",
                            span { "Error loading community messages: {err.message}" }
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
    }
}

#[component]
fn CommunityCard(message: MessageDto) -> Element {
    let preview = render_preview(&message.message());
    let title = message.title.clone().unwrap_or_else(|| message.id.clone());
    let category = message.category.unwrap_or(message.message_type);

    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-3",
                div {
                    class: "flex justify-between items-start gap-2",
                    div {
                        h2 { class: "card-title", "{title}" }
                        div {
                            class: "flex flex-wrap gap-1 mt-1",
                            span { class: "badge badge-primary", {category.label()} }
                            if let Some(language) = message.language.clone() {
                                span { class: "badge badge-ghost", "{language}" }
                            }
                            for tag in message.tags.iter() {
                                span { key: "{tag}", class: "badge badge-outline", "#{tag}" }
                            }
                        }
                    }
                    Link {
                        to: Route::TemplateBuilder { message_id: message.id.clone() },
                        class: "btn btn-sm btn-primary",
                        "Use message"
                    }
                }
                MessagePreview { preview }
            }
        }
    )
}
