mod binding_panel;
mod message_list;
mod publish_modal;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Page,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
    },
    model::message::MessageDto,
};

use binding_panel::BindingPanel;
use message_list::MessageList;

#[cfg(feature = "web")]
use crate::client::api::message::get_messages;

/// One guild: the user's saved messages and the guild's event bindings.
#[component]
pub fn Dashboard(guild_id: u64) -> Element {
    #[allow(unused_mut)]
    let mut messages = use_signal(|| None::<Result<Vec<MessageDto>, ApiError>>);
    let refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_messages().await
        });

        use_effect(move || match &*future.read_unchecked() {
            Some(Ok(list)) => messages.set(Some(Ok(list.clone()))),
            Some(Err(err)) => {
                tracing::error!("Failed to fetch messages: {}", err);
                messages.set(Some(Err(err.clone())));
            }
            None => (),
        });
    }

    rsx! {
        Title { "Dashboard | {SITE_NAME}" }
        match messages() {
            Some(Ok(list)) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full h-full",
                    div {
                        class: "w-full max-w-6xl flex flex-col gap-6",
                        div {
                            class: "flex justify-between items-center",
                            Link {
                                to: Route::Servers {},
                                class: "btn btn-ghost",
                                "← Back to Servers"
                            }
                            Link {
                                to: Route::Builder { guild_id },
                                class: "btn btn-primary",
                                "New Message"
                            }
                        }
                        MessageList { guild_id, messages: list.clone(), refetch_trigger }
                        BindingPanel { guild_id, messages: list }
                    }
                }
            },
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            None => rsx! { LoadingPage {} },
        }
    }
}

/// Short label for a saved message in lists and pickers.
fn message_label(message: &MessageDto) -> String {
    let headline = message
        .title
        .clone()
        .or_else(|| message.embeds.iter().find_map(|embed| embed.title.clone()))
        .or_else(|| message.content.clone())
        .unwrap_or_default();

    let headline: String = headline.chars().take(60).collect();
    if headline.trim().is_empty() {
        format!("{} ({})", message.message_type.label(), message.id)
    } else {
        format!("{} ({})", headline.trim(), message.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::message::{Embed, MessageType, Visibility};
    use chrono::Utc;

    fn message(content: Option<&str>, embed_title: Option<&str>) -> MessageDto {
        MessageDto {
            id: "Ab3dE9x".to_string(),
            content: content.map(str::to_string),
            embeds: embed_title
                .map(|title| {
                    vec![Embed {
                        title: Some(title.to_string()),
                        ..Default::default()
                    }]
                })
                .unwrap_or_default(),
            message_type: MessageType::Welcome,
            visibility: Visibility::Private,
            title: None,
            category: None,
            language: None,
            tags: Vec::new(),
            keywords: Vec::new(),
            published_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn label_prefers_embed_title_over_content() {
        let label = message_label(&message(Some("Hi {user}"), Some("Welcome aboard")));

        assert_eq!(label, "Welcome aboard (Ab3dE9x)");
    }

    #[test]
    fn label_falls_back_to_type() {
        let label = message_label(&message(Some("   "), None));

        assert_eq!(label, "Welcome (Ab3dE9x)");
    }
}
