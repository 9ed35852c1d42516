//! Contact section configuration

use anyhow::{bail, Context, Result};
use formspree_client::{FormId, FormspreeClient, DEFAULT_BASE_URL};
use reqwest::Url;

use crate::contact::Locale;

/// Configuration resolved once at startup
#[derive(Debug, Clone)]
pub struct ContactConfig {
    pub form_id: FormId,
    pub backend_url: String,
    pub locale: Locale,
}

impl ContactConfig {
    /// Load configuration from the environment.
    ///
    /// Variables set in the process environment (or a `.env` file) win over
    /// values captured at build time, which is the only source available to
    /// browser builds.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        #[cfg(not(target_arch = "wasm32"))]
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| {
            runtime_var(key).or_else(|| build_time_var(key).map(str::to_string))
        })
    }

    /// Resolve configuration through `lookup`, which returns the value of a
    /// variable if it is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let form_id = lookup("FORMSPREE_FORM_ID")
            .filter(|v| !v.trim().is_empty())
            .context("FORMSPREE_FORM_ID must be set")?;
        let form_id = FormId::new(form_id).context("FORMSPREE_FORM_ID is invalid")?;

        let backend_url = lookup("FORMSPREE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let backend_url = parse_backend_url(&backend_url).context("FORMSPREE_URL is invalid")?;

        let locale = match lookup("CONTACT_LOCALE") {
            Some(code) => code.parse::<Locale>().context("CONTACT_LOCALE is invalid")?,
            None => Locale::default(),
        };

        Ok(Self {
            form_id,
            backend_url,
            locale,
        })
    }

    pub fn client(&self) -> FormspreeClient {
        FormspreeClient::new(self.form_id.clone()).with_base_url(&self.backend_url)
    }
}

/// Absolute http(s) URL with a host, without a trailing slash
fn parse_backend_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw.trim())?;

    if !matches!(url.scheme(), "http" | "https") {
        bail!("unsupported scheme {:?}, expected http or https", url.scheme());
    }
    if url.host_str().is_none() {
        bail!("{:?} has no host", raw);
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_var(_key: &str) -> Option<String> {
    None
}

fn build_time_var(key: &str) -> Option<&'static str> {
    match key {
        "FORMSPREE_FORM_ID" => option_env!("FORMSPREE_FORM_ID"),
        "FORMSPREE_URL" => option_env!("FORMSPREE_URL"),
        "CONTACT_LOCALE" => option_env!("CONTACT_LOCALE"),
        _ => None,
    }
}
