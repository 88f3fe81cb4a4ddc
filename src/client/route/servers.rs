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
    model::discord::MutualGuildDto,
};

#[cfg(feature = "web")]
use crate::client::api::discord::get_mutual_guilds;

/// Picker of the guilds the user administers that the bot has joined.
#[component]
pub fn Servers() -> Element {
    #[allow(unused_mut)]
    let mut guilds = use_signal(|| None::<Result<Vec<MutualGuildDto>, ApiError>>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(get_mutual_guilds);

        use_effect(move || match &*future.read_unchecked() {
            Some(Ok(list)) => guilds.set(Some(Ok(list.clone()))),
            Some(Err(err)) => {
                tracing::error!("Failed to fetch guilds: {}", err);
                guilds.set(Some(Err(err.clone())));
            }
            None => (),
        });
    }

    rsx! {
        Title { "Servers | {SITE_NAME}" }
        match guilds() {
            Some(Ok(list)) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full h-full",
                    h1 {
                        class: "text-2xl font-bold mb-6",
                        "Select a server"
                    }
                    if list.is_empty() {
                        div {
                            class: "text-center opacity-60 max-w-md",
                            "No servers found. Invite the bot to a server where you have the Administrator permission."
                        }
                    } else {
                        div {
                            class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4 w-full max-w-5xl",
                            for guild in list {
                                GuildCard { key: "{guild.id}", guild: guild.clone() }
                            }
                        }
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

#[component]
fn GuildCard(guild: MutualGuildDto) -> Element {
    let icon_url = guild.icon_url();
    let initial = guild.name.chars().next().unwrap_or('?');

    rsx!(
        Link {
            to: Route::Dashboard { guild_id: guild.id },
            class: "card bg-base-200 hover:bg-base-300 transition-colors",
            div {
                class: "card-body flex-row items-center gap-4",
                if let Some(url) = icon_url {
                    img { class: "w-14 h-14 rounded-full", src: "{url}" }
                } else {
                    div {
                        class: "w-14 h-14 rounded-full bg-base-300 flex items-center justify-center text-xl",
                        "{initial}"
                    }
                }
                div {
                    p { class: "font-semibold", "{guild.name}" }
                    if let Some(members) = guild.member_count {
                        p {
                            class: "text-sm opacity-60",
                            "{members} members"
                            if let Some(online) = guild.presence_count {
                                " · {online} online"
                            }
                        }
                    }
                }
            }
        }
    )
}
