//! Transient banners and the success popup

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::scheduler::Scheduler;

/// How long a banner stays up on its own
pub const BANNER_LIFETIME: Duration = Duration::from_secs(5);

/// Length of the exit transition before an element is removed
pub const EXIT_TRANSITION: Duration = Duration::from_millis(300);

pub const POPUP_TITLE: &str = "Message Sent Successfully!";
pub const POPUP_BODY: &str = "Thank you for reaching out. I'll get back to you within 24 hours!";

/// Handle for an element mounted on a [`Surface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// Banner colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Info,
}

/// Rendering boundary for banners and popups
pub trait Surface: Send + Sync {
    /// Add a banner and slide it in
    fn mount_banner(&self, id: ElementId, message: &str, tone: Tone);

    /// Start a banner's exit transition
    fn hide_banner(&self, id: ElementId);

    /// Add the modal popup
    fn mount_popup(&self, id: ElementId, title: &str, body: &str);

    /// Start the popup's fade-out
    fn hide_popup(&self, id: ElementId);

    /// Take an element out of the page
    fn remove(&self, id: ElementId);
}

#[derive(Default)]
struct Mounted {
    /// Banners still in the page, including ones that are fading out
    banners: Vec<ElementId>,
    popup: Option<ElementId>,
    /// Popup playing its fade-out, still in the page
    fading_popup: Option<ElementId>,
}

struct Inner {
    surface: Arc<dyn Surface>,
    scheduler: Scheduler,
    mounted: Mutex<Mounted>,
    next_id: AtomicU64,
}

/// Shows at most one banner and at most one popup at a time.
///
/// Cloning is cheap; clones drive the same surface.
#[derive(Clone)]
pub struct Presenter {
    inner: Arc<Inner>,
}

impl Presenter {
    pub fn new(surface: Arc<dyn Surface>) -> Self {
        Self::with_scheduler(surface, Scheduler::new())
    }

    pub fn with_scheduler(surface: Arc<dyn Surface>, scheduler: Scheduler) -> Self {
        Self {
            inner: Arc::new(Inner {
                surface,
                scheduler,
                mounted: Mutex::new(Mounted::default()),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.inner.scheduler
    }

    /// Reserve an id for an element this presenter does not mount itself
    pub fn allocate_id(&self) -> ElementId {
        ElementId(self.inner.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Show a banner, replacing any banner already on the page
    pub fn notify(&self, message: &str, tone: Tone) -> ElementId {
        let id = self.allocate_id();
        let mut mounted = self.mounted();

        for old in mounted.banners.drain(..) {
            self.inner.scheduler.cancel(old);
            self.inner.surface.remove(old);
        }

        self.inner.surface.mount_banner(id, message, tone);
        mounted.banners.push(id);

        let presenter = self.clone();
        self.inner
            .scheduler
            .schedule(id, BANNER_LIFETIME, move || presenter.close_banner(id));

        id
    }

    /// Close a banner now. Does nothing if it is already gone or closing.
    pub fn close_banner(&self, id: ElementId) {
        let mounted = self.mounted();
        if !mounted.banners.contains(&id) {
            return;
        }

        self.inner.surface.hide_banner(id);

        let presenter = self.clone();
        self.inner
            .scheduler
            .schedule(id, EXIT_TRANSITION, move || presenter.remove_banner(id));
    }

    fn remove_banner(&self, id: ElementId) {
        let mut mounted = self.mounted();
        if let Some(pos) = mounted.banners.iter().position(|b| *b == id) {
            mounted.banners.remove(pos);
            self.inner.surface.remove(id);
        }
    }

    /// Show the success popup, replacing one that is already open
    pub fn show_success_popup(&self) -> ElementId {
        let id = self.allocate_id();
        let mut mounted = self.mounted();

        let open = mounted.popup.take();
        let fading = mounted.fading_popup.take();
        for old in open.into_iter().chain(fading) {
            self.inner.scheduler.cancel(old);
            self.inner.surface.remove(old);
        }

        self.inner.surface.mount_popup(id, POPUP_TITLE, POPUP_BODY);
        mounted.popup = Some(id);
        id
    }

    /// Fade out and remove the popup, if one is open
    pub fn close_popup(&self) {
        let mut mounted = self.mounted();
        let Some(id) = mounted.popup.take() else {
            return;
        };

        self.inner.surface.hide_popup(id);
        mounted.fading_popup = Some(id);

        let presenter = self.clone();
        self.inner
            .scheduler
            .schedule(id, EXIT_TRANSITION, move || presenter.remove_popup(id));
    }

    fn remove_popup(&self, id: ElementId) {
        let mut mounted = self.mounted();
        if mounted.fading_popup == Some(id) {
            mounted.fading_popup = None;
            self.inner.surface.remove(id);
        }
    }

    /// Banners currently in the page, oldest first
    pub fn banners(&self) -> Vec<ElementId> {
        self.mounted().banners.clone()
    }

    pub fn popup(&self) -> Option<ElementId> {
        self.mounted().popup
    }

    fn mounted(&self) -> MutexGuard<'_, Mounted> {
        self.inner
            .mounted
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
