// Test doubles for the submission handler
//
// Mocks record every call so tests can assert on what the handler did.

use std::fmt;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use formspree_client::{FormspreeError, Receipt};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use super::form::ContactForm;
use super::messages::{Notice, NoticeKind};
use super::submission::{ContactStore, ContactTransport, LocalStore, Notifier};

// =============================================================================
// Mock Transport
// =============================================================================

/// Canned reply for every delivery.
#[derive(Debug, Clone)]
pub enum Reply {
    Accept,
    Reject {
        status: u16,
        body: Option<serde_json::Value>,
    },
    Network(String),
    Panic,
}

pub struct MockTransport {
    reply: Reply,
    yield_first: bool,
    probe: Option<Rc<LocalStore>>,
    calls: Arc<Mutex<Vec<ContactForm>>>,
    flag_during_calls: Arc<Mutex<Vec<bool>>>,
}

impl MockTransport {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            yield_first: false,
            probe: None,
            calls: Arc::new(Mutex::new(Vec::new())),
            flag_during_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Suspend once before replying, so other futures get polled mid-request.
    pub fn yielding(mut self) -> Self {
        self.yield_first = true;
        self
    }

    /// Record the store's submission flag whenever a delivery starts.
    pub fn with_probe(mut self, store: Rc<LocalStore>) -> Self {
        self.probe = Some(store);
        self
    }

    /// Records that were delivered, in order
    pub fn calls(&self) -> Vec<ContactForm> {
        self.calls.lock().unwrap().clone()
    }

    pub fn flag_during_calls(&self) -> Vec<bool> {
        self.flag_during_calls.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl ContactTransport for MockTransport {
    async fn deliver(&self, form: &ContactForm) -> formspree_client::Result<Receipt> {
        self.calls.lock().unwrap().push(form.clone());
        if let Some(store) = &self.probe {
            self.flag_during_calls
                .lock()
                .unwrap()
                .push(store.is_submitting());
        }

        if self.yield_first {
            tokio::task::yield_now().await;
        }

        match &self.reply {
            Reply::Accept => Ok(Receipt {
                status: 200,
                next: None,
            }),
            Reply::Reject { status, body } => Err(FormspreeError::Rejected {
                status: *status,
                reason: reason_phrase(*status),
                body: body.clone(),
            }),
            Reply::Network(message) => Err(FormspreeError::Network(message.clone())),
            Reply::Panic => panic!("transport exploded"),
        }
    }
}

fn reason_phrase(status: u16) -> Option<String> {
    match status {
        422 => Some("Unprocessable Entity".into()),
        500 => Some("Internal Server Error".into()),
        _ => None,
    }
}

// =============================================================================
// Recording Notifier
// =============================================================================

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn kinds(&self) -> Vec<NoticeKind> {
        self.notices().into_iter().map(|n| n.kind).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

// =============================================================================
// Log Capture
// =============================================================================

#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub fields: Vec<(String, String)>,
}

/// Tracing layer that keeps every event's fields.
#[derive(Clone, Default)]
pub struct LogCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl LogCapture {
    /// Route this thread's events into the capture until the guard drops.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        tracing::subscriber::set_default(tracing_subscriber::registry().with(self.clone()))
    }

    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Values of `field` across all error-level events
    pub fn error_field(&self, field: &str) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|e| e.level == Level::ERROR)
            .flat_map(|e| e.fields)
            .filter(|(name, _)| name == field)
            .map(|(_, value)| value)
            .collect()
    }
}

struct FieldRecorder(Vec<(String, String)>);

impl Visit for FieldRecorder {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{:?}", value)));
    }
}

impl<S: Subscriber> Layer<S> for LogCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut recorder = FieldRecorder(Vec::new());
        event.record(&mut recorder);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields: recorder.0,
        });
    }
}
