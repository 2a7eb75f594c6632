#![allow(dead_code)]

use std::fmt;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use db_outage::models::{AppState, Settings, TestInvocation};
use db_outage::services::email::{EmailError, EmailService};
use db_outage::services::guard::RequestGuard;
use db_outage::services::notifier::AdminNotifier;
use db_outage::services::probe::{DatabaseProbe, ProbeError};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

pub const ADMIN: &str = "ops@example.com";

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("db_outage=debug")
            .with_test_writer()
            .init();
    });
}

/// A mock email service that stores sent emails for testing purposes.
#[derive(Debug, Default)]
pub struct MockEmailer {
    sent_emails: Mutex<Vec<SentEmail>>,
}

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub recipients: Vec<String>,
    pub subject: String,
    pub body_html: String,
}

impl MockEmailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the count of sent emails
    pub fn sent_count(&self) -> usize {
        self.sent_emails.lock().unwrap().len()
    }

    /// Get the last sent email
    pub fn last_sent_email(&self) -> Option<SentEmail> {
        self.sent_emails.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl EmailService for MockEmailer {
    async fn send_email(
        &self,
        recipients: &[String],
        subject: &str,
        body_html: &str,
    ) -> Result<(), EmailError> {
        let email = SentEmail {
            recipients: recipients.to_vec(),
            subject: subject.to_string(),
            body_html: body_html.to_string(),
        };

        self.sent_emails.lock().unwrap().push(email);
        Ok(())
    }
}

/// An email service whose provider is always down. Counts attempts.
#[derive(Debug, Default)]
pub struct FailingEmailer {
    attempts: AtomicUsize,
}

impl FailingEmailer {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmailService for FailingEmailer {
    async fn send_email(
        &self,
        _recipients: &[String],
        _subject: &str,
        _body_html: &str,
    ) -> Result<(), EmailError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(EmailError::SendFailed("smtp relay refused connection".to_string()))
    }
}

/// What [`MockProbe`] answers to every ping.
#[derive(Debug, Clone, Copy)]
pub enum ProbeOutcome {
    Up,
    /// Connection dropped with the given driver message
    Down(&'static str),
    /// A failure that does not mean the database is unavailable
    Misconfigured,
}

#[derive(Debug)]
pub struct MockProbe {
    outcome: ProbeOutcome,
    calls: AtomicUsize,
}

impl MockProbe {
    pub fn new(outcome: ProbeOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DatabaseProbe for MockProbe {
    async fn ping(&self, _connection: &str) -> Result<(), ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.outcome {
            ProbeOutcome::Up => Ok(()),
            ProbeOutcome::Down(message) => {
                let io_err = io::Error::new(io::ErrorKind::ConnectionReset, message);
                Err(ProbeError::Database(sqlx::Error::Io(io_err)))
            }
            ProbeOutcome::Misconfigured => {
                let config_err = sqlx::Error::Configuration("invalid connection string".into());
                Err(ProbeError::Database(config_err))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub message: String,
}

/// A `tracing` layer that records every event it sees.
#[derive(Debug, Clone, Default)]
pub struct LogCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl LogCapture {
    /// Installs the capture as the default subscriber for the current thread.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        use tracing_subscriber::layer::SubscriberExt;
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::set_default(subscriber)
    }

    pub fn errors(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| event.level == Level::ERROR)
            .map(|event| event.message.clone())
            .collect()
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for LogCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            message: visitor.0,
        });
    }
}

/// Settings used across tests: one administrator, default static prefix, not a test run.
pub fn test_settings() -> Settings {
    Settings {
        admins: vec![ADMIN.to_string()],
        ..Settings::default()
    }
}

pub fn test_settings_with(test_invocation: TestInvocation) -> Settings {
    test_settings().with_test_invocation(test_invocation)
}

pub fn build_guard(
    settings: &Settings,
    probe: Arc<dyn DatabaseProbe>,
    email_service: Arc<dyn EmailService>,
) -> RequestGuard {
    let notifier = AdminNotifier::new(
        email_service,
        settings.admins.clone(),
        settings.email_subject_prefix.clone(),
    );
    RequestGuard::new(settings, probe, notifier)
}

async fn serve(app: axum::Router) -> String {
    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://127.0.0.1:{port}")
}

/// Spawns the router around a mock probe and returns its address and mock emailer.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app_with_probe(
    probe: Arc<dyn DatabaseProbe>,
    settings: Settings,
) -> (String, Arc<MockEmailer>) {
    init_tracing_once();

    let mock_emailer = Arc::new(MockEmailer::new());
    let guard = build_guard(&settings, probe, mock_emailer.clone());
    let app = db_outage::router(Arc::new(AppState::new(guard)), &settings);

    (serve(app).await, mock_emailer)
}

/// Spawns the full application over a real pool and returns its address and mock emailer.
pub async fn spawn_app(db_pool: PgPool) -> (String, Arc<MockEmailer>) {
    init_tracing_once();

    let mock_emailer = Arc::new(MockEmailer::new());
    let mock_cloned = Arc::clone(&mock_emailer);
    let app = db_outage::app_with_email_service(db_pool, test_settings(), Some(mock_cloned));

    (serve(app).await, mock_emailer)
}
