use super::*;
use crate::email::{
    EmailBody, EmailConfig, EmailError, EmailMessage, EmailProvider, EmailProviderConfig,
};
use async_trait::async_trait;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

#[derive(Default)]
struct RecordingSubmitter {
    calls: Mutex<Vec<ContactSubmission>>,
    fail_with: Option<String>,
}

impl RecordingSubmitter {
    fn failing(message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    fn calls(&self) -> Vec<ContactSubmission> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactSubmitter for RecordingSubmitter {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        self.calls.lock().unwrap().push(submission.clone());
        match &self.fail_with {
            Some(message) => Err(SubmitError::new(message.clone())),
            None => Ok(()),
        }
    }
}

struct HungSubmitter;

#[async_trait]
impl ContactSubmitter for HungSubmitter {
    async fn submit(&self, _submission: &ContactSubmission) -> Result<(), SubmitError> {
        std::future::pending::<()>().await;
        Ok(())
    }
}

fn filled(name: &str, phone: &str, email: &str, message: &str) -> ContactForm {
    ContactForm::with_fields(ContactFields {
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}

#[tokio::test]
async fn test_missing_name_makes_no_call() {
    let submitter = RecordingSubmitter::default();
    let mut form = filled("", "9159765579", "a@b.com", "");

    let outcome = form.submit(&submitter).await;

    assert_eq!(outcome, SubmitOutcome::Rejected(ValidationError::MissingName));
    assert!(submitter.calls().is_empty());
    let notification = form.notification().unwrap();
    assert!(notification.is_error());
    assert_eq!(notification.message, "Пожалуйста, введите ваше имя");
    assert_eq!(form.fields().phone, "9159765579");
    assert_eq!(form.status(), FormStatus::Idle);
}

#[tokio::test]
async fn test_bad_email_rejected_after_presence_checks() {
    let submitter = RecordingSubmitter::default();
    let mut form = filled("Ann", "123", "not-an-email", "");

    let outcome = form.submit(&submitter).await;

    assert_eq!(outcome, SubmitOutcome::Rejected(ValidationError::InvalidEmail));
    assert!(submitter.calls().is_empty());
    assert_eq!(
        form.notification().unwrap().message,
        "Пожалуйста, введите корректный email"
    );
}

#[tokio::test]
async fn test_successful_submit_clears_fields_and_fires_callback() {
    let submitter = RecordingSubmitter::default();
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = fired.clone();
    let mut form = filled("Ann", "123", "a@b.com", "").on_success(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let outcome = form.submit(&submitter).await;

    assert_eq!(outcome, SubmitOutcome::Sent);
    let calls = submitter.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].name, "Ann");
    assert_eq!(calls[0].phone, "123");
    assert_eq!(calls[0].email, "a@b.com");
    assert_eq!(calls[0].message, "");

    assert!(form.fields().is_empty());
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    let notification = form.notification().unwrap();
    assert!(!notification.is_error());
    assert_eq!(notification.message, SUCCESS_MESSAGE);
    assert_eq!(form.status(), FormStatus::Idle);
    assert!(!form.is_disabled());
}

#[tokio::test]
async fn test_failed_submit_keeps_fields() {
    let submitter = RecordingSubmitter::failing("network down");
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = fired.clone();
    let mut form = filled("Ann", "123", "a@b.com", "Hello").on_success(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let outcome = form.submit(&submitter).await;

    assert_eq!(outcome, SubmitOutcome::Failed("network down".to_string()));
    assert_eq!(submitter.calls().len(), 1);
    let notification = form.notification().unwrap();
    assert!(notification.is_error());
    assert!(notification.message.contains("network down"));
    assert_eq!(form.fields().name, "Ann");
    assert_eq!(form.fields().message, "Hello");
    assert_eq!(fired.load(Ordering::SeqCst), 0);
    assert!(!form.is_disabled());
    assert_eq!(form.submit_label(), SUBMIT_LABEL);
}

#[test]
fn test_inputs_disabled_while_submitting() {
    let mut form = filled("Ann", "123", "a@b.com", "");

    let submission = form.begin().unwrap();
    assert_eq!(submission.email, "a@b.com");
    assert!(form.is_disabled());
    assert_eq!(form.submit_label(), SUBMITTING_LABEL);
    assert!(!form.set_field(Field::Name, "Bob"));
    assert_eq!(form.fields().name, "Ann");
    assert_eq!(form.begin().unwrap_err(), SubmitOutcome::Ignored);

    let outcome = form.complete(Err(SubmitError::new("timeout")));
    assert_eq!(outcome, SubmitOutcome::Failed("timeout".to_string()));
    assert!(form.set_field(Field::Name, "Bob"));
    assert_eq!(form.fields().get(Field::Name), "Bob");
}

#[tokio::test]
async fn test_dropped_submission_releases_form() {
    let mut form = filled("Ann", "123", "a@b.com", "");

    let result = tokio::time::timeout(Duration::from_millis(20), form.submit(&HungSubmitter)).await;

    assert!(result.is_err());
    assert_eq!(form.status(), FormStatus::Idle);
    assert_eq!(form.fields().name, "Ann");
}

#[test]
fn test_view_reflects_state() {
    let form = filled("Ann", "", "", "");
    let view = form.view();
    assert!(!view.disabled);
    assert_eq!(view.submit_label, SUBMIT_LABEL);
    assert_eq!(view.fields.name, "Ann");
    assert!(view.notification.is_none());
}

struct CapturingProvider {
    sent: Mutex<Vec<EmailMessage>>,
    fail: bool,
}

#[async_trait]
impl EmailProvider for CapturingProvider {
    async fn send_email(&self, message: EmailMessage) -> Result<(), EmailError> {
        if self.fail {
            return Err(EmailError::ProviderError("network down".to_string()));
        }
        self.sent.lock().unwrap().push(message);
        Ok(())
    }

    fn name(&self) -> &str {
        "capturing"
    }
}

fn email_config() -> EmailConfig {
    EmailConfig {
        from_address: "site@dva-kadra.ru".to_string(),
        from_name: Some("Два-Кадра".to_string()),
        provider: EmailProviderConfig::Null,
    }
}

#[tokio::test]
async fn test_email_submitter_formats_message() {
    let provider = Arc::new(CapturingProvider {
        sent: Mutex::new(Vec::new()),
        fail: false,
    });
    let submitter = EmailContactSubmitter::new(
        provider.clone(),
        &email_config(),
        vec!["studio@example.com".to_string()],
        "Новая заявка",
    );
    let mut form = filled("Ann <b>", "123", "a@b.com", "");

    assert_eq!(form.submit(&submitter).await, SubmitOutcome::Sent);

    let sent = provider.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, vec!["studio@example.com".to_string()]);
    assert_eq!(sent[0].from, "Два-Кадра <site@dva-kadra.ru>");
    assert_eq!(sent[0].reply_to.as_deref(), Some("a@b.com"));
    match &sent[0].body {
        EmailBody::Both { text, html } => {
            assert!(text.contains("Имя: Ann <b>"));
            assert!(text.contains("(не указано)"));
            assert!(html.contains("Ann &lt;b&gt;"));
        }
        other => panic!("unexpected body: {:?}", other),
    }
}

#[tokio::test]
async fn test_email_submitter_surfaces_provider_error() {
    let provider = Arc::new(CapturingProvider {
        sent: Mutex::new(Vec::new()),
        fail: true,
    });
    let submitter = EmailContactSubmitter::new(
        provider,
        &email_config(),
        vec!["studio@example.com".to_string()],
        "Новая заявка",
    );
    let mut form = filled("Ann", "123", "a@b.com", "");

    let outcome = form.submit(&submitter).await;

    assert!(matches!(outcome, SubmitOutcome::Failed(ref m) if m.contains("network down")));
    assert!(form.notification().unwrap().message.starts_with("Ошибка: "));
}

#[tokio::test]
async fn test_email_submitter_requires_recipients() {
    let provider = Arc::new(CapturingProvider {
        sent: Mutex::new(Vec::new()),
        fail: false,
    });
    let submitter = EmailContactSubmitter::new(provider.clone(), &email_config(), Vec::new(), "x");
    let mut form = filled("Ann", "123", "a@b.com", "");

    assert!(matches!(form.submit(&submitter).await, SubmitOutcome::Failed(_)));
    assert!(provider.sent.lock().unwrap().is_empty());
}
