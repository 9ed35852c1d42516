//! Global state management

use dioxus::prelude::*;

use crate::contact::{ContactForm, ContactStore, Field, Notice, Notifier};

/// Contact form state backed by signals, so the view re-renders on change
#[derive(Clone, Copy, PartialEq)]
pub struct SignalStore {
    pub form: Signal<ContactForm>,
    pub submitting: Signal<bool>,
}

impl SignalStore {
    pub fn new(form: Signal<ContactForm>, submitting: Signal<bool>) -> Self {
        Self { form, submitting }
    }

    pub fn set_field(&self, field: Field, value: String) {
        let mut form = self.form;
        form.with_mut(|f| f.set_field(field, value));
    }
}

// Submissions are spawned tasks that can outlive the section. Once its signals
// are dropped, reads see an idle empty form and writes are ignored.
impl ContactStore for SignalStore {
    fn snapshot(&self) -> ContactForm {
        self.form
            .try_peek()
            .map(|form| (*form).clone())
            .unwrap_or_default()
    }

    fn replace(&self, form: ContactForm) {
        let mut signal = self.form;
        if let Ok(mut current) = signal.try_write() {
            *current = form;
        };
    }

    fn is_submitting(&self) -> bool {
        self.submitting.try_peek().map(|v| *v).unwrap_or(false)
    }

    fn set_submitting(&self, submitting: bool) {
        let mut signal = self.submitting;
        if let Ok(mut current) = signal.try_write() {
            *current = submitting;
        };
    }
}

/// A notice on screen, tagged so a stale dismiss timer can't clear a newer one
#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub notice: Notice,
}

/// Toast state shared through context
#[derive(Clone, Copy, PartialEq)]
pub struct ToastState {
    pub current: Signal<Option<ToastEntry>>,
    next_id: Signal<u64>,
}

impl ToastState {
    pub fn new(current: Signal<Option<ToastEntry>>, next_id: Signal<u64>) -> Self {
        Self { current, next_id }
    }

    pub fn show(&self, notice: Notice) -> u64 {
        let mut next_id = self.next_id;
        let id = *next_id.peek();
        next_id.set(id + 1);

        let mut current = self.current;
        current.set(Some(ToastEntry { id, notice }));
        id
    }

    /// Clear the toast if it is still the one identified by `id`
    pub fn dismiss(&self, id: u64) {
        let mut current = self.current;
        let is_current = current.peek().as_ref().map(|t| t.id) == Some(id);
        if is_current {
            current.set(None);
        }
    }
}

/// Routes submission notices into the toast area
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: ToastState,
}

impl ToastNotifier {
    pub fn new(toasts: ToastState) -> Self {
        Self { toasts }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        tracing::debug!(kind = ?notice.kind, "Showing contact notice");
        self.toasts.show(notice);
    }
}
