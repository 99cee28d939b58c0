//! Contact Form Client
//!
//! The browser side of the contact form, written against small traits so it
//! can drive any rendering surface:
//! - `SubmissionHandler` validates the form and talks to the relay
//! - `Presenter` shows transient banners and the success popup
//! - `Scheduler` runs the timers, keyed by the element they act on

pub mod error;
pub mod form;
pub mod handler;
pub mod newsletter;
pub mod presenter;
pub mod scheduler;
pub mod transport;

pub use error::TransportError;
pub use form::{ContactForm, FormFields, SubmitControl};
pub use handler::{SubmissionHandler, SubmitOutcome};
pub use newsletter::{NewsletterField, NewsletterSignup};
pub use presenter::{ElementId, Presenter, Surface, Tone};
pub use scheduler::Scheduler;
pub use transport::{HttpRelayTransport, RelayTransport};

#[cfg(test)]
mod test_support;
