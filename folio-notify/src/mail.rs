use async_trait::async_trait;
use folio_error::NotifyResult;
use folio_models::settings::Mail;
use lettre::{
    transport::smtp::authentication::Credentials, AsyncSmtpTransport, AsyncTransport, Message,
    Tokio1Executor,
};

/// Seam between the notification worker and the actual mail delivery.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, message: Message) -> NotifyResult<()>;
}

/// SMTP delivery over STARTTLS with username/password authentication.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(mail: &Mail) -> NotifyResult<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&mail.smtp_host)?
            .port(mail.smtp_port)
            .credentials(Credentials::new(
                mail.username.clone(),
                mail.password.clone(),
            ))
            .build();
        Ok(Self { transport })
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, message: Message) -> NotifyResult<()> {
        self.transport.send(message).await?;
        Ok(())
    }
}
