use dioxus::prelude::*;

use crate::client::{
    constant::SITE_NAME,
    model::{auth::AuthContext, toast::ToastContext},
    router::Route,
};

#[cfg(feature = "web")]
use crate::client::{api::user::get_user, model::auth::AuthState};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    #[allow(unused_mut)]
    let mut auth_context = use_context_provider(AuthContext::new);
    use_context_provider(ToastContext::new);

    // Fetch user on first load
    #[cfg(feature = "web")]
    {
        let future = use_resource(get_user);
        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                if let Err(err) = result {
                    dioxus_logger::tracing::error!("Failed to fetch user: {}", err);
                }
                auth_context.set(AuthState::from(result.clone()));
            }
        });
    }

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Build Discord embed messages and send them when members join, leave or get banned"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
