//! Portfolio site - Dioxus Web Application
//!
//! Renders the contact section and forwards messages to a Formspree form.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! FORMSPREE_FORM_ID=xyzabcd1 dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! FORMSPREE_FORM_ID=xyzabcd1 dx build --release --features web
//! ```
//!
//! `FORMSPREE_FORM_ID` is required. `FORMSPREE_URL` and `CONTACT_LOCALE`
//! (`en` or `ru`) are optional.

use anyhow::{Context, Result};
use portfolio_web::{app::App, config::ContactConfig};

fn main() -> Result<()> {
    init_logging();

    let config = ContactConfig::from_env().context("Failed to load contact configuration")?;
    tracing::info!(
        form_id = %config.form_id,
        backend_url = %config.backend_url,
        locale = %config.locale,
        "Configuration loaded"
    );

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(App);

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,portfolio_web=debug,formspree_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

// Browser builds log to the devtools console through dioxus' tracing bridge
#[cfg(target_arch = "wasm32")]
fn init_logging() {
    dioxus::logger::initialize_default();
}
