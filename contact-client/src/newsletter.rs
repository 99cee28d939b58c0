//! Newsletter signup
//!
//! There is no subscription backend; the signup is acknowledged after a
//! short simulated delay.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use contact_core::is_valid_email;

use crate::form::SubmitControl;
use crate::presenter::{ElementId, Presenter, Tone};

pub const EMPTY_EMAIL: &str = "Please enter your email address";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const SUBSCRIBING_LABEL: &str = "Subscribing...";
pub const SUBSCRIBED_NOTICE: &str = "Successfully subscribed to newsletter!";

/// Simulated round trip before the signup is acknowledged
pub const SIGNUP_DELAY: Duration = Duration::from_millis(1500);

/// The email input together with its subscribe button
pub trait NewsletterField: SubmitControl {
    fn value(&self) -> String;
    fn clear(&self);
}

pub struct NewsletterSignup {
    presenter: Presenter,
    control_id: ElementId,
    /// Button label from before the pending signup, if one is pending
    idle_label: Arc<Mutex<Option<String>>>,
}

impl NewsletterSignup {
    pub fn new(presenter: Presenter) -> Self {
        let control_id = presenter.allocate_id();
        Self {
            presenter,
            control_id,
            idle_label: Arc::new(Mutex::new(None)),
        }
    }

    /// Handle a click on the subscribe button.
    ///
    /// Returns false if the address was refused. A second click while a
    /// signup is pending restarts the delay.
    pub fn on_subscribe<F>(&self, field: Arc<F>) -> bool
    where
        F: NewsletterField + 'static,
    {
        let email = field.value().trim().to_string();

        if email.is_empty() {
            self.presenter.notify(EMPTY_EMAIL, Tone::Error);
            return false;
        }
        if !is_valid_email(&email) {
            self.presenter.notify(INVALID_EMAIL, Tone::Error);
            return false;
        }

        lock(&self.idle_label).get_or_insert_with(|| field.label());
        field.set_label(SUBSCRIBING_LABEL);
        field.set_enabled(false);

        let presenter = self.presenter.clone();
        let idle_label = self.idle_label.clone();
        self.presenter
            .scheduler()
            .schedule(self.control_id, SIGNUP_DELAY, move || {
                presenter.notify(SUBSCRIBED_NOTICE, Tone::Success);
                field.clear();
                if let Some(label) = lock(&idle_label).take() {
                    field.set_label(&label);
                }
                field.set_enabled(true);
            });

        true
    }
}

fn lock(label: &Mutex<Option<String>>) -> std::sync::MutexGuard<'_, Option<String>> {
    label.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
