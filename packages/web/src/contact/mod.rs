//! Contact section logic: form record, submission handling and messages

pub mod form;
pub mod messages;
pub mod submission;

#[cfg(test)]
pub mod testing;

pub use form::{ContactForm, Field};
pub use messages::{Locale, MessageCatalog, MessageKey, Notice, NoticeKind};
pub use submission::{
    ContactStore, ContactSubmitter, ContactTransport, InFlight, LocalStore, Notifier,
    SubmitOutcome,
};
