use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials as SmtpCredentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::domain::ports::Notifier;
use crate::utils::error::Result;

pub const SMTP_HOST: &str = "smtp-mail.outlook.com";
pub const SMTP_PORT: u16 = 587;

const SUBJECT: &str = "Placement iitk!!";
const BODY: &str = "You have new notifications!";

/// Sends the fixed notification message over authenticated STARTTLS SMTP,
/// from and to the notification address itself.
pub struct SmtpNotifier {
    host: String,
    port: u16,
}

impl SmtpNotifier {
    pub fn new() -> Self {
        Self {
            host: SMTP_HOST.to_owned(),
            port: SMTP_PORT,
        }
    }
}

impl Default for SmtpNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn notify(&self, email: &str, password: &str) -> Result<()> {
        let mailbox: Mailbox = email.parse()?;
        let message = Message::builder()
            .from(mailbox.clone())
            .to(mailbox)
            .subject(SUBJECT)
            .body(BODY.to_owned())?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.host)?
            .port(self.port)
            .credentials(SmtpCredentials::new(email.to_owned(), password.to_owned()))
            .build();

        transport.send(message).await?;
        Ok(())
    }
}
