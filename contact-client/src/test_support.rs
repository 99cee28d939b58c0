//! Test doubles for the client

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use contact_core::{ContactSubmission, RelayResponse};

use crate::error::TransportError;
use crate::form::{ContactForm, FormFields, SubmitControl};
use crate::newsletter::NewsletterField;
use crate::presenter::{ElementId, Surface, Tone};
use crate::transport::RelayTransport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    MountBanner(ElementId, String, Tone),
    HideBanner(ElementId),
    MountPopup(ElementId, String),
    HidePopup(ElementId),
    Remove(ElementId),
}

/// Surface that records every call
#[derive(Default)]
pub struct RecordingSurface {
    events: Mutex<Vec<SurfaceEvent>>,
}

impl RecordingSurface {
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: SurfaceEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl Surface for RecordingSurface {
    fn mount_banner(&self, id: ElementId, message: &str, tone: Tone) {
        self.push(SurfaceEvent::MountBanner(id, message.to_string(), tone));
    }

    fn hide_banner(&self, id: ElementId) {
        self.push(SurfaceEvent::HideBanner(id));
    }

    fn mount_popup(&self, id: ElementId, title: &str, _body: &str) {
        self.push(SurfaceEvent::MountPopup(id, title.to_string()));
    }

    fn hide_popup(&self, id: ElementId) {
        self.push(SurfaceEvent::HidePopup(id));
    }

    fn remove(&self, id: ElementId) {
        self.push(SurfaceEvent::Remove(id));
    }
}

#[derive(Default)]
struct Button {
    label: String,
    enabled: bool,
    label_history: Vec<String>,
    enabled_history: Vec<bool>,
}

impl Button {
    fn new(label: &str) -> Mutex<Self> {
        Mutex::new(Self {
            label: label.to_string(),
            enabled: true,
            ..Default::default()
        })
    }
}

/// Contact form held in memory
pub struct FakeForm {
    fields: Mutex<FormFields>,
    button: Mutex<Button>,
    reset: Mutex<bool>,
}

impl FakeForm {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self::with_fields(FormFields {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            message: Some(message.to_string()),
        })
    }

    pub fn with_fields(fields: FormFields) -> Self {
        Self {
            fields: Mutex::new(fields),
            button: Button::new("Send Message"),
            reset: Mutex::new(false),
        }
    }

    pub fn was_reset(&self) -> bool {
        *self.reset.lock().unwrap()
    }

    pub fn is_enabled(&self) -> bool {
        self.button.lock().unwrap().enabled
    }

    pub fn label_history(&self) -> Vec<String> {
        self.button.lock().unwrap().label_history.clone()
    }

    pub fn enabled_history(&self) -> Vec<bool> {
        self.button.lock().unwrap().enabled_history.clone()
    }
}

impl SubmitControl for FakeForm {
    fn label(&self) -> String {
        self.button.lock().unwrap().label.clone()
    }

    fn set_label(&self, label: &str) {
        let mut button = self.button.lock().unwrap();
        button.label = label.to_string();
        button.label_history.push(label.to_string());
    }

    fn set_enabled(&self, enabled: bool) {
        let mut button = self.button.lock().unwrap();
        button.enabled = enabled;
        button.enabled_history.push(enabled);
    }
}

impl ContactForm for FakeForm {
    fn fields(&self) -> FormFields {
        self.fields.lock().unwrap().clone()
    }

    fn reset(&self) {
        *self.fields.lock().unwrap() = FormFields {
            name: Some(String::new()),
            email: Some(String::new()),
            message: Some(String::new()),
        };
        *self.reset.lock().unwrap() = true;
    }
}

/// Newsletter input held in memory
pub struct FakeNewsletterField {
    value: Mutex<String>,
    button: Mutex<Button>,
}

impl FakeNewsletterField {
    pub fn new(value: &str) -> Self {
        Self {
            value: Mutex::new(value.to_string()),
            button: Button::new("Subscribe"),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.button.lock().unwrap().enabled
    }
}

impl SubmitControl for FakeNewsletterField {
    fn label(&self) -> String {
        self.button.lock().unwrap().label.clone()
    }

    fn set_label(&self, label: &str) {
        self.button.lock().unwrap().label = label.to_string();
    }

    fn set_enabled(&self, enabled: bool) {
        self.button.lock().unwrap().enabled = enabled;
    }
}

impl NewsletterField for FakeNewsletterField {
    fn value(&self) -> String {
        self.value.lock().unwrap().clone()
    }

    fn clear(&self) {
        self.value.lock().unwrap().clear();
    }
}

#[derive(Clone)]
enum Behaviour {
    Reply(RelayResponse),
    Unreachable,
    Hang,
}

/// Transport with a scripted answer
#[derive(Clone)]
pub struct FakeTransport {
    behaviour: Behaviour,
    calls: Arc<AtomicUsize>,
    last: Arc<Mutex<Option<ContactSubmission>>>,
}

impl FakeTransport {
    fn with(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            calls: Arc::new(AtomicUsize::new(0)),
            last: Arc::new(Mutex::new(None)),
        }
    }

    pub fn replying(reply: RelayResponse) -> Self {
        Self::with(Behaviour::Reply(reply))
    }

    pub fn unreachable() -> Self {
        Self::with(Behaviour::Unreachable)
    }

    pub fn hanging() -> Self {
        Self::with(Behaviour::Hang)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_submission(&self) -> Option<ContactSubmission> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl RelayTransport for FakeTransport {
    async fn submit(&self, submission: &ContactSubmission) -> Result<RelayResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(submission.clone());

        match &self.behaviour {
            Behaviour::Reply(reply) => Ok(reply.clone()),
            Behaviour::Unreachable => {
                let err = serde_json::from_str::<RelayResponse>("").unwrap_err();
                Err(TransportError::Body(err))
            }
            Behaviour::Hang => std::future::pending().await,
        }
    }
}
