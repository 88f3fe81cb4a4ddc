use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::Page,
        constant::SITE_NAME,
        model::{auth::AuthContext, toast::ToastContext},
        router::Route,
    },
    model::{
        rating::{MAX_RATING, MIN_RATING},
        stats::StatsDto,
    },
};

#[cfg(feature = "web")]
use crate::client::api::{
    rating::{has_rated, submit_rating},
    stats::get_stats,
};

/// Landing page with bot reach and the rating widget.
#[component]
pub fn Home() -> Element {
    #[allow(unused_mut)]
    let mut stats = use_signal(|| None::<StatsDto>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(get_stats);

        use_effect(move || match &*future.read_unchecked() {
            Some(Ok(data)) => stats.set(Some(data.clone())),
            Some(Err(err)) => tracing::error!("Failed to fetch stats: {}", err),
            None => (),
        });
    }

    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "flex flex-col items-center gap-10 w-full h-full",
            div {
                class: "flex flex-col items-center gap-3 text-center max-w-2xl mt-10",
                h1 { class: "text-4xl font-bold", {SITE_NAME} }
                p {
                    class: "opacity-70",
                    "Design Discord embeds visually or as JSON, then let the bot greet, farewell and notify your members."
                }
                div {
                    class: "flex gap-2 mt-4",
                    Link { to: Route::Servers {}, class: "btn btn-primary", "Open dashboard" }
                    Link { to: Route::Community {}, class: "btn btn-outline", "Browse community" }
                }
            }
            if let Some(stats) = stats() {
                div {
                    class: "stats stats-vertical md:stats-horizontal bg-base-200",
                    Stat { title: "Servers", value: stats.total_servers.to_string() }
                    Stat { title: "Members", value: stats.total_members.to_string() }
                    Stat { title: "Online", value: stats.online_users.to_string() }
                    Stat { title: "Rating", value: stats.avg_rating.clone() }
                }
            }
            RatingWidget {}
        }
    }
}

#[component]
fn Stat(title: &'static str, value: String) -> Element {
    rsx!(
        div {
            class: "stat",
            div { class: "stat-title", "{title}" }
            div { class: "stat-value", "{value}" }
        }
    )
}

/// Lets a logged in user rate the dashboard once; later ratings replace the first.
#[component]
fn RatingWidget() -> Element {
    let auth_context = use_context::<AuthContext>();
    #[allow(unused_mut, unused_variables)]
    let mut toasts = use_context::<ToastContext>();
    #[allow(unused_mut)]
    let mut rated = use_signal(|| false);
    let user_id = auth_context.read().user().map(|user| user.discord_id.clone());

    #[cfg(feature = "web")]
    {
        let user_id = user_id.clone();
        let future = use_resource(use_reactive!(|user_id| async move {
            match user_id {
                Some(id) => has_rated(&id).await.map(Some),
                None => Ok(None),
            }
        }));

        use_effect(move || match &*future.read_unchecked() {
            Some(Ok(Some(has))) => rated.set(*has),
            Some(Err(err)) => tracing::error!("Failed to check rating: {}", err),
            _ => (),
        });
    }

    if user_id.is_none() {
        return rsx! {};
    }

    #[allow(unused_variables)]
    let submit = move |rating: i32| {
        #[cfg(feature = "web")]
        spawn(async move {
            match submit_rating(rating).await {
                Ok(()) => {
                    rated.set(true);
                    toasts.success("Thanks for rating!");
                }
                Err(err) => {
                    tracing::error!("Failed to submit rating: {}", err);
                    toasts.error(format!("Failed to submit rating: {}", err));
                }
            }
        });
    };

    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body items-center",
                p {
                    if rated() { "Thanks! You can change your rating any time." } else { "How do you like the dashboard?" }
                }
                div {
                    class: "flex gap-1",
                    for rating in MIN_RATING..=MAX_RATING {
                        button {
                            key: "{rating}",
                            class: "btn btn-sm btn-ghost",
                            onclick: move |_| submit(rating),
                            "{rating} ★"
                        }
                    }
                }
            }
        }
    )
}
