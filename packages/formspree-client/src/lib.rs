//! Pure Formspree REST API client.
//!
//! A minimal client for posting JSON submissions to a Formspree form
//! endpoint (`POST {base_url}/f/{form_id}`).
//!
//! # Example
//!
//! ```rust,ignore
//! use formspree_client::{FormId, FormspreeClient};
//!
//! let client = FormspreeClient::new(FormId::new("xyzabcd1")?);
//!
//! #[derive(serde::Serialize)]
//! struct Message { name: String, email: String, message: String }
//!
//! let receipt = client.submit(&message).await?;
//! ```

pub mod error;
pub mod types;

pub use error::{FormspreeError, Result};
pub use types::{ErrorBody, FieldError, FormId, Receipt, SubmissionResponse};

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;

pub const DEFAULT_BASE_URL: &str = "https://formspree.io";

/// Formspree form submission client.
#[derive(Clone)]
pub struct FormspreeClient {
    http_client: reqwest::Client,
    base_url: String,
    form_id: FormId,
}

impl FormspreeClient {
    pub fn new(form_id: FormId) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            form_id,
        }
    }

    /// Set a custom base URL (self-hosted proxies, tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn form_id(&self) -> &FormId {
        &self.form_id
    }

    /// Full URL submissions are posted to.
    pub fn endpoint(&self) -> String {
        format!("{}/f/{}", self.base_url, self.form_id)
    }

    /// Submit a payload to the form as JSON.
    ///
    /// Any 2xx status is an accepted submission. Other statuses become
    /// [`FormspreeError::Rejected`]; the rejection body is kept when it is
    /// valid JSON and dropped otherwise.
    pub async fn submit<T: Serialize + ?Sized>(&self, payload: &T) -> Result<Receipt> {
        let body = serde_json::to_vec(payload)?;
        let url = self.endpoint();

        tracing::debug!(form_id = %self.form_id, "Posting form submission");

        let resp = self
            .http_client
            .post(&url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.json::<serde_json::Value>().await.ok();
            return Err(FormspreeError::Rejected {
                status: status.as_u16(),
                reason: status.canonical_reason().map(str::to_string),
                body,
            });
        }

        let accepted = resp.json::<SubmissionResponse>().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), ok = accepted.ok, "Form submission accepted");

        Ok(Receipt {
            status: status.as_u16(),
            next: accepted.next,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> FormspreeClient {
        FormspreeClient::new(FormId::new("xyzabcd1").unwrap())
    }

    #[test]
    fn endpoint_uses_default_host() {
        assert_eq!(client().endpoint(), "https://formspree.io/f/xyzabcd1");
    }

    #[test]
    fn endpoint_with_custom_base_url() {
        let client = client().with_base_url("http://127.0.0.1:4000/");
        assert_eq!(client.endpoint(), "http://127.0.0.1:4000/f/xyzabcd1");
    }
}
