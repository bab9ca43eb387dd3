use super::{
    ContactFields, ContactSubmission, ContactSubmitter, Field, FormStatus, Notification,
    SUBMIT_LABEL, SUBMITTING_LABEL, SUCCESS_MESSAGE, SubmitError, SubmitOutcome, validate,
};
use serde::Serialize;
use tracing::{debug, info, warn};

pub type CompletionCallback = Box<dyn FnMut() + Send>;

/// Local state of one contact form: the typed fields, whether a submission
/// is in flight, and the last notification shown.
pub struct ContactForm {
    fields: ContactFields,
    status: FormStatus,
    notification: Option<Notification>,
    on_success: Option<CompletionCallback>,
}

/// Puts the form back to `Idle` when dropped, whatever happened to the
/// request it was guarding.
struct BusyGuard<'a> {
    status: &'a mut FormStatus,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        *self.status = FormStatus::Idle;
    }
}

/// Everything a template needs to draw the form.
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub fields: ContactFields,
    pub disabled: bool,
    pub submit_label: &'static str,
    /// Label the page script swaps in while a post is in flight.
    pub submitting_label: &'static str,
    pub notification: Option<Notification>,
}

impl Default for FormView {
    fn default() -> Self {
        ContactForm::new().view()
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: ContactFields::default(),
            status: FormStatus::Idle,
            notification: None,
            on_success: None,
        }
    }

    pub fn with_fields(fields: ContactFields) -> Self {
        Self {
            fields,
            ..Self::new()
        }
    }

    pub fn on_success(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn is_disabled(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_disabled() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Returns false when the edit was ignored because inputs are disabled.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.is_disabled() {
            debug!(?field, "Ignoring edit while submitting");
            return false;
        }
        self.fields.set(field, value);
        true
    }

    /// Validates the current fields and, on success, moves to `Submitting`.
    ///
    /// The caller must hand the backend result to [`ContactForm::complete`].
    pub fn begin(&mut self) -> Result<ContactSubmission, SubmitOutcome> {
        if self.is_disabled() {
            return Err(SubmitOutcome::Ignored);
        }

        match validate(&self.fields) {
            Ok(submission) => {
                self.status = FormStatus::Submitting;
                Ok(submission)
            }
            Err(rule) => {
                warn!(rule = ?rule, "Contact form rejected");
                self.notification = Some(Notification::error(rule.to_string()));
                Err(SubmitOutcome::Rejected(rule))
            }
        }
    }

    /// Applies the backend result and returns the form to `Idle`.
    pub fn complete(&mut self, result: Result<(), SubmitError>) -> SubmitOutcome {
        self.status = FormStatus::Idle;

        match result {
            Ok(()) => {
                info!("Contact form submitted");
                self.notification = Some(Notification::success(SUCCESS_MESSAGE));
                self.fields = ContactFields::default();
                if let Some(callback) = self.on_success.as_mut() {
                    callback();
                }
                SubmitOutcome::Sent
            }
            Err(e) => {
                warn!("Contact form submission failed: {}", e);
                self.notification = Some(Notification::error(format!("Ошибка: {}", e.message)));
                SubmitOutcome::Failed(e.message)
            }
        }
    }

    /// Runs one full submit attempt against `submitter`.
    ///
    /// At most one request is issued. If the returned future is dropped
    /// while the request is in flight, the form still returns to `Idle`.
    pub async fn submit(&mut self, submitter: &dyn ContactSubmitter) -> SubmitOutcome {
        let submission = match self.begin() {
            Ok(submission) => submission,
            Err(outcome) => return outcome,
        };

        let result = {
            let _busy = BusyGuard {
                status: &mut self.status,
            };
            submitter.submit(&submission).await
        };

        self.complete(result)
    }

    pub fn view(&self) -> FormView {
        FormView {
            fields: self.fields.clone(),
            disabled: self.is_disabled(),
            submit_label: self.submit_label(),
            submitting_label: SUBMITTING_LABEL,
            notification: self.notification.clone(),
        }
    }
}

impl std::fmt::Debug for ContactForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactForm")
            .field("fields", &self.fields)
            .field("status", &self.status)
            .field("notification", &self.notification)
            .field("on_success", &self.on_success.is_some())
            .finish()
    }
}
