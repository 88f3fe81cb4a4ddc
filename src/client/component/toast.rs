use dioxus::prelude::*;

use crate::{
    client::model::toast::{Toast, ToastContext},
    editor::NotificationKind,
};

#[cfg(feature = "web")]
use crate::client::constant::TOAST_DURATION_MS;

#[component]
pub fn Toaster() -> Element {
    let toasts = use_context::<ToastContext>().toasts();

    rsx!(
        div {
            class: "toast toast-end z-50",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    )
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let mut context = use_context::<ToastContext>();
    let id = toast.id;

    #[cfg(feature = "web")]
    use_future(move || async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
        context.dismiss(id);
    });

    let class = match toast.kind {
        NotificationKind::Success => "alert-success",
        NotificationKind::Error => "alert-error",
        NotificationKind::Info => "alert-info",
    };

    rsx!(
        div {
            class: "alert {class} cursor-pointer",
            onclick: move |_| context.dismiss(id),
            span { "{toast.message}" }
        }
    )
}
