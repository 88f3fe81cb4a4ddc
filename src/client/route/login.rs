use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaDiscord, Icon};

use crate::client::{
    component::{page::LoadingPage, Page},
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[component]
pub fn Login() -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    // Handle redirect for authenticated users
    use_effect(move || {
        if auth_context.read().is_authenticated() {
            nav.push(Route::Servers {});
        }
    });

    let state = auth_context.read();

    rsx! {
        Title { "Login | {SITE_NAME}" }
        match &*state {
            AuthState::Initializing | AuthState::Authenticated(_) => rsx! {
                LoadingPage {}
            },
            AuthState::NotLoggedIn | AuthState::Error(_) => rsx! {
                Page {
                    class: "flex flex-col gap-6 items-center justify-center w-full h-full",
                    div {
                        class: "flex flex-col items-center gap-2",
                        p {
                            class: "text-3xl font-bold",
                            {SITE_NAME}
                        }
                        p {
                            class: "opacity-70",
                            "Log in to manage the messages of your servers"
                        }
                    }
                    div {
                        a {
                            href: "/api/auth/login",
                            div {
                                class: "btn btn-outline flex gap-2 items-center",
                                Icon {
                                    width: 24,
                                    height: 24,
                                    icon: FaDiscord
                                }
                                p {
                                    "Login with Discord"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
