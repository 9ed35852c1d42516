//! Root application component

use dioxus::prelude::*;

use crate::components::{ContactSection, ToastProvider, Toasts};

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        ToastProvider {
            main {
                ContactSection {}
            }
            Toasts {}
        }
    }
}
