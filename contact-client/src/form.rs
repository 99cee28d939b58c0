//! Form controls the handlers drive

/// Raw values as read from the form; `None` for a field that is not there
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// A button that can show a pending state
pub trait SubmitControl: Send + Sync {
    fn label(&self) -> String;
    fn set_label(&self, label: &str);
    fn set_enabled(&self, enabled: bool);
}

/// The contact form
pub trait ContactForm: SubmitControl {
    fn fields(&self) -> FormFields;

    /// Clear every field
    fn reset(&self);
}

/// Puts a control into its pending state and restores it on drop.
pub(crate) struct PendingState<'a, C: SubmitControl + ?Sized> {
    control: &'a C,
    original_label: String,
}

impl<'a, C: SubmitControl + ?Sized> PendingState<'a, C> {
    pub(crate) fn enter(control: &'a C, pending_label: &str) -> Self {
        let original_label = control.label();
        control.set_label(pending_label);
        control.set_enabled(false);
        Self {
            control,
            original_label,
        }
    }
}

impl<C: SubmitControl + ?Sized> Drop for PendingState<'_, C> {
    fn drop(&mut self) {
        self.control.set_label(&self.original_label);
        self.control.set_enabled(true);
    }
}
