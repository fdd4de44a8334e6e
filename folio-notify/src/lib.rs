pub mod mail;
mod template;

use crate::mail::{MailTransport, SmtpMailer};
use folio_error::NotifyResult;
use folio_models::{domain::prelude::ContactInfo, settings::Settings};
use std::{sync::Arc, time::Duration};
use tokio::{
    sync::{
        mpsc::{self, error::TrySendError},
        RwLock,
    },
    task::JoinHandle,
    time::sleep,
};
use tracing::{debug, error, info, instrument, warn};

/// Queued notifications; delivery never blocks a request handler.
const NOTIFY_QUEUE_CAPACITY: usize = 128;

#[derive(Debug, Clone)]
pub enum Notification {
    ContactReceived(ContactInfo),
}

/// Submit-and-forget handle over the background mail worker.
///
/// Requests hand a [`Notification`] to `dispatch` and move on; the worker
/// renders and sends the mails on its own time. Send failures are logged
/// and never reach the request path.
pub struct Notifier {
    tx: RwLock<Option<mpsc::Sender<Notification>>>,
    worker: RwLock<Option<JoinHandle<()>>>,
}

impl Notifier {
    /// Spawn the worker; the SMTP transport is only built when mail is
    /// enabled in the settings.
    pub fn start(settings: Settings) -> NotifyResult<Self> {
        let transport: Option<Arc<dyn MailTransport>> = if settings.mail.enabled {
            Some(Arc::new(SmtpMailer::new(&settings.mail)?))
        } else {
            None
        };
        Ok(Self::with_transport(settings, transport))
    }

    /// Spawn the worker over an explicit transport.
    pub fn with_transport(
        settings: Settings,
        transport: Option<Arc<dyn MailTransport>>,
    ) -> Self {
        let (tx, mut rx) = mpsc::channel(NOTIFY_QUEUE_CAPACITY);

        let handle = tokio::spawn(async move {
            info!("Starting mail notification worker");
            while let Some(notification) = rx.recv().await {
                match notification {
                    Notification::ContactReceived(contact) => {
                        if let Err(e) =
                            deliver_contact_mail(&settings, transport.as_ref(), &contact).await
                        {
                            error!(
                                error = %e,
                                contact_id = contact.id,
                                "Failed to deliver contact notification"
                            );
                        }
                    }
                }
            }
            info!("Mail notification worker stopped");
        });

        Self {
            tx: RwLock::new(Some(tx)),
            worker: RwLock::new(Some(handle)),
        }
    }

    /// Queue a notification without waiting for delivery.
    pub async fn dispatch(&self, notification: Notification) {
        let guard = self.tx.read().await;
        let Some(tx) = guard.as_ref() else {
            warn!("Notifier already closed; dropping notification");
            return;
        };
        if let Err(e) = tx.try_send(notification) {
            match e {
                TrySendError::Full(_) => warn!("Notification queue full; dropping notification"),
                TrySendError::Closed(_) => {
                    warn!("Notification channel closed; dropping notification")
                }
            }
        }
    }

    /// Close the queue and wait for the worker to drain what is in flight.
    #[instrument(name = "notifier_close", skip_all)]
    pub async fn close(&self) {
        info!("🛑 Closing mail notifier...");
        self.tx.write().await.take();
        if let Some(mut handle) = self.worker.write().await.take() {
            tokio::select! {
                _ = &mut handle => {}
                _ = sleep(Duration::from_secs(5)) => {
                    handle.abort();
                }
            }
        }
        info!("✅ Mail notifier closed successfully");
    }
}

async fn deliver_contact_mail(
    settings: &Settings,
    transport: Option<&Arc<dyn MailTransport>>,
    contact: &ContactInfo,
) -> NotifyResult<()> {
    if !settings.mail.enabled {
        debug!("Mail delivery disabled; skipping contact notification");
        return Ok(());
    }
    let Some(transport) = transport else {
        debug!("No mail transport configured; skipping contact notification");
        return Ok(());
    };

    transport
        .send(template::admin_notification(settings, contact)?)
        .await?;
    if settings.mail.auto_reply {
        transport
            .send(template::auto_reply(settings, contact)?)
            .await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use folio_error::notify::NotifyError;
    use folio_models::settings::{Admin, Inner, Mail};
    use lettre::Message;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<Message>>,
    }

    #[async_trait]
    impl MailTransport for RecordingTransport {
        async fn send(&self, message: Message) -> NotifyResult<()> {
            self.sent.lock().await.push(message);
            Ok(())
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl MailTransport for FailingTransport {
        async fn send(&self, _message: Message) -> NotifyResult<()> {
            Err(NotifyError::Closed)
        }
    }

    fn settings(enabled: bool, auto_reply: bool) -> Settings {
        Settings::from(Inner {
            mail: Mail {
                enabled,
                smtp_host: "smtp.example.com".into(),
                username: "owner@example.com".into(),
                auto_reply,
                ..Default::default()
            },
            admin: Admin {
                email: "owner@example.com".into(),
                password: "unused".into(),
                name: "Owner".into(),
            },
            ..Default::default()
        })
    }

    fn contact() -> ContactInfo {
        ContactInfo {
            id: 1,
            name: "Ann".into(),
            email: "visitor@example.com".into(),
            subject: "Question".into(),
            message: "I would like to know more.".into(),
            is_read: false,
            created_at: None,
            updated_at: None,
        }
    }

    fn recipients(message: &Message) -> Vec<String> {
        message
            .envelope()
            .to()
            .iter()
            .map(|a| a.to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_notification_and_auto_reply_are_sent() {
        let transport = Arc::new(RecordingTransport::default());
        let notifier = Notifier::with_transport(
            settings(true, true),
            Some(transport.clone() as Arc<dyn MailTransport>),
        );

        notifier
            .dispatch(Notification::ContactReceived(contact()))
            .await;
        notifier.close().await;

        let sent = transport.sent.lock().await;
        assert_eq!(sent.len(), 2);
        assert_eq!(recipients(&sent[0]), ["owner@example.com"]);
        assert_eq!(recipients(&sent[1]), ["visitor@example.com"]);
    }

    #[tokio::test]
    async fn test_auto_reply_is_opt_in() {
        let transport = Arc::new(RecordingTransport::default());
        let notifier = Notifier::with_transport(
            settings(true, false),
            Some(transport.clone() as Arc<dyn MailTransport>),
        );

        notifier
            .dispatch(Notification::ContactReceived(contact()))
            .await;
        notifier.close().await;

        let sent = transport.sent.lock().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(recipients(&sent[0]), ["owner@example.com"]);
    }

    #[tokio::test]
    async fn test_disabled_mail_sends_nothing() {
        let transport = Arc::new(RecordingTransport::default());
        let notifier = Notifier::with_transport(
            settings(false, true),
            Some(transport.clone() as Arc<dyn MailTransport>),
        );

        notifier
            .dispatch(Notification::ContactReceived(contact()))
            .await;
        notifier.close().await;

        assert!(transport.sent.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_never_escapes_the_worker() {
        let notifier = Notifier::with_transport(
            settings(true, true),
            Some(Arc::new(FailingTransport) as Arc<dyn MailTransport>),
        );

        notifier
            .dispatch(Notification::ContactReceived(contact()))
            .await;
        notifier.close().await;
    }
}
