//! Submission handler for the contact form
//!
//! One submit action produces at most one request to the form backend. The
//! in-flight flag lives in the [`ContactStore`] so the presentation layer can
//! render from it, and is released by [`InFlight`]'s `Drop`, which covers
//! every exit path including a panicking transport.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use formspree_client::{FormspreeClient, FormspreeError, Receipt};

use super::form::{ContactForm, Field};
use super::messages::{MessageCatalog, Notice, NoticeKind};

/// Holder of the form record and the submission flag.
///
/// Methods take `&self` so implementations can sit on top of reactive
/// signals as well as plain cells.
pub trait ContactStore {
    fn snapshot(&self) -> ContactForm;
    fn replace(&self, form: ContactForm);
    fn is_submitting(&self) -> bool;
    fn set_submitting(&self, submitting: bool);
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct LocalStore {
    form: RefCell<ContactForm>,
    submitting: Cell<bool>,
}

impl LocalStore {
    pub fn new(form: ContactForm) -> Self {
        Self {
            form: RefCell::new(form),
            submitting: Cell::new(false),
        }
    }

    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        self.form.borrow_mut().set_field(field, value);
    }
}

impl ContactStore for LocalStore {
    fn snapshot(&self) -> ContactForm {
        self.form.borrow().clone()
    }

    fn replace(&self, form: ContactForm) {
        *self.form.borrow_mut() = form;
    }

    fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    fn set_submitting(&self, submitting: bool) {
        self.submitting.set(submitting);
    }
}

/// Where submissions go.
#[async_trait(?Send)]
pub trait ContactTransport {
    async fn deliver(&self, form: &ContactForm) -> formspree_client::Result<Receipt>;
}

#[async_trait(?Send)]
impl ContactTransport for FormspreeClient {
    async fn deliver(&self, form: &ContactForm) -> formspree_client::Result<Receipt> {
        self.submit(form).await
    }
}

/// Shows one notice to the visitor.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Holds the submission flag for the duration of one attempt.
pub struct InFlight<'a, S: ContactStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: ContactStore + ?Sized> InFlight<'a, S> {
    /// Raise the flag, or `None` if another attempt already holds it.
    pub fn acquire(store: &'a S) -> Option<Self> {
        if store.is_submitting() {
            return None;
        }
        store.set_submitting(true);
        Some(Self { store })
    }
}

impl<S: ContactStore + ?Sized> Drop for InFlight<'_, S> {
    fn drop(&mut self) {
        self.store.set_submitting(false);
    }
}

/// How a concluded attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered(Receipt),
    /// Backend answered with a non-2xx status
    Rejected { status: u16 },
    /// No response was obtained
    NetworkError,
}

impl SubmitOutcome {
    pub fn notice_kind(&self) -> NoticeKind {
        match self {
            SubmitOutcome::Delivered(_) => NoticeKind::Success,
            SubmitOutcome::Rejected { .. } => NoticeKind::Rejected,
            SubmitOutcome::NetworkError => NoticeKind::NetworkError,
        }
    }
}

pub struct ContactSubmitter<T, N> {
    transport: T,
    notifier: N,
    messages: MessageCatalog,
}

impl<T: ContactTransport, N: Notifier> ContactSubmitter<T, N> {
    pub fn new(transport: T, notifier: N, messages: MessageCatalog) -> Self {
        Self {
            transport,
            notifier,
            messages,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Send the current record to the backend and notify the visitor.
    ///
    /// Returns `None` without touching the store or the network when an
    /// attempt is already in flight. On delivery the record is reset to
    /// empty; on any failure it is left as the visitor typed it.
    pub async fn submit<S: ContactStore + ?Sized>(&self, store: &S) -> Option<SubmitOutcome> {
        let Some(_in_flight) = InFlight::acquire(store) else {
            tracing::debug!("Contact submission already in flight, ignoring submit");
            return None;
        };

        let form = store.snapshot();
        let outcome = match self.transport.deliver(&form).await {
            Ok(receipt) => {
                tracing::info!(status = receipt.status, "Contact message sent");
                store.replace(ContactForm::default());
                SubmitOutcome::Delivered(receipt)
            }
            Err(err) => match &err {
                FormspreeError::Rejected { status, .. } => {
                    tracing::error!(
                        status = *status,
                        details = %err.details(),
                        "Form backend rejected contact message"
                    );
                    SubmitOutcome::Rejected { status: *status }
                }
                // Anything without a backend verdict is reported as a connectivity problem
                _ => {
                    tracing::error!(error = %err, "Network error while sending contact message");
                    SubmitOutcome::NetworkError
                }
            },
        };

        self.notifier
            .notify(Notice::new(outcome.notice_kind(), &self.messages));

        Some(outcome)
    }
}
