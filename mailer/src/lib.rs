use common::env_config::SmtpConfig;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

const REGISTRATION_SUBJECT: &str = "Thanks for registering!";
const REGISTRATION_BODY: &str = "Thank you for signing up for our dispatch service.\n";

/// Outbound registration-notification sender. Delivery is best-effort and
/// fire-and-forget: every outcome, including failure, is reported as a
/// descriptive string and logged. Nothing here can fail a registration.
#[derive(Clone)]
pub struct Mailer {
    config: SmtpConfig,
}

impl Mailer {
    pub fn new(config: SmtpConfig) -> Self {
        Mailer { config }
    }

    pub async fn send_registration_email(&self, recipient: &str) -> String {
        if !self.config.enabled {
            let outcome = format!("Mail delivery disabled, skipped notification to {recipient}");
            log::debug!("{outcome}");
            return outcome;
        }

        let outcome = match self.deliver(recipient).await {
            Ok(()) => format!("Registration notification sent to {recipient}"),
            Err(e) => format!("Failed to send registration notification to {recipient}: {e}"),
        };
        log::info!("{outcome}");
        outcome
    }

    async fn deliver(&self, recipient: &str) -> Result<(), Box<dyn std::error::Error>> {
        let message = Message::builder()
            .from(self.config.from.parse()?)
            .to(recipient.parse()?)
            .subject(REGISTRATION_SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(REGISTRATION_BODY.to_string())?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.host)?
            .port(self.config.port)
            .credentials(Credentials::new(
                self.config.username.clone(),
                self.config.password.clone(),
            ))
            .build();

        transport.send(message).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disabled_config() -> SmtpConfig {
        SmtpConfig {
            enabled: false,
            host: "smtp.example.org".to_string(),
            port: 465,
            username: "relay".to_string(),
            password: "secret".to_string(),
            from: "noreply@example.org".to_string(),
        }
    }

    #[tokio::test]
    async fn disabled_mailer_skips_without_touching_the_network() {
        let mailer = Mailer::new(disabled_config());
        let outcome = mailer.send_registration_email("a@x.com").await;
        assert!(outcome.contains("skipped"));
        assert!(outcome.contains("a@x.com"));
    }
}
