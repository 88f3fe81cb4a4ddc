use dioxus::prelude::*;

use crate::client::{
    component::page::{ErrorPage, LoadingPage},
    model::auth::{AuthContext, AuthState},
    router::Route,
};

/// Renders the nested route only for logged in users; everyone else is sent to login.
#[component]
pub fn RequiresLoggedIn() -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    use_effect(move || {
        if matches!(&*auth_context.read(), AuthState::NotLoggedIn) {
            nav.push(Route::Login {});
        }
    });

    let state = auth_context.read();

    rsx! {
        match &*state {
            AuthState::Authenticated(_) => rsx! { Outlet::<Route> {} },
            AuthState::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message.clone() }
            },
            // Not logged in renders a spinner while the effect redirects
            AuthState::Initializing | AuthState::NotLoggedIn => rsx! { LoadingPage {} },
        }
    }
}
