use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaDiscord, Icon};

use crate::client::{
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[component]
pub fn Header() -> Element {
    let auth_context = use_context::<AuthContext>();
    let state = auth_context.read();

    let avatar_url = state.user().and_then(|user| user.avatar_url());
    let user_name = state.user().map(|user| user.name.clone());

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center gap-6",
            Link {
                to: Route::Home {},
                p {
                    class: "md:text-xl font-bold",
                    {SITE_NAME}
                }
            }
            Link {
                to: Route::Community {},
                class: "btn btn-ghost btn-sm",
                "Community"
            }
        }
        div {
            class: "flex items-center gap-2",
            match &*state {
                AuthState::Authenticated(_) => rsx! {
                    Link {
                        to: Route::Servers {},
                        class: "btn btn-outline",
                        "Servers"
                    }
                    if let Some(url) = avatar_url {
                        img {
                            class: "w-10 h-10 rounded-full",
                            src: "{url}",
                            alt: user_name.clone().unwrap_or_default(),
                        }
                    }
                    a {
                        href: "/api/auth/logout",
                        class: "btn btn-outline",
                        "Logout"
                    }
                },
                AuthState::NotLoggedIn | AuthState::Error(_) => rsx! {
                    a {
                        href: "/api/auth/login",
                        div {
                            class: "btn btn-outline flex gap-2 items-center",
                            Icon {
                                width: 22,
                                height: 22,
                                icon: FaDiscord
                            }
                            p {
                                "Login"
                            }
                        }
                    }
                },
                AuthState::Initializing => rsx! {},
            }
        }
    })
}
