//! Toast notifications

use dioxus::prelude::*;

use crate::config::ContactConfig;
use crate::contact::{MessageCatalog, MessageKey};
use crate::state::{ToastEntry, ToastState};

/// How long a toast stays up before it dismisses itself
#[cfg(feature = "web")]
const TOAST_TIMEOUT_MS: u32 = 6_000;

/// Provides [`ToastState`] to the wrapped components
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let current = use_signal(|| None::<ToastEntry>);
    let next_id = use_signal(|| 0u64);

    use_context_provider(|| ToastState::new(current, next_id));

    children
}

/// Hook to access the toast state
pub fn use_toasts() -> ToastState {
    use_context::<ToastState>()
}

/// Renders the current toast, if any
#[component]
pub fn Toasts() -> Element {
    let toasts = use_toasts();
    let config = use_context::<ContactConfig>();
    let catalog = MessageCatalog::new(config.locale);

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(id) = toasts.current.read().as_ref().map(|t| t.id) {
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
                toasts.dismiss(id);
            });
        }
    });

    let Some(entry) = toasts.current.read().clone() else {
        return rsx! {};
    };

    let id = entry.id;
    let text = entry.notice.text;
    let tone = if entry.notice.kind.is_error() {
        "bg-red-50 border-red-200 text-red-700"
    } else {
        "bg-green-50 border-green-200 text-green-700"
    };

    rsx! {
        div {
            role: "status",
            "aria-live": "polite",
            class: "fixed bottom-6 right-6 max-w-sm border p-4 rounded-lg shadow-sm flex items-start gap-4 {tone}",
            p { class: "text-sm flex-1", "{text}" }
            button {
                r#type: "button",
                class: "text-sm underline cursor-pointer",
                onclick: move |_| toasts.dismiss(id),
                {catalog.get(MessageKey::Dismiss)}
            }
        }
    }
}
