//! Order email composition

use crate::models::{OrderEmail, OrderSummary};

/// Prepares order emails for the counter's fixed recipients.
///
/// Dispatch belongs to the platform mailer; this only assembles the
/// recipients, subject and summary body.
pub struct EmailComposer {
    /// Recipient addresses for every order email
    to: Vec<String>,
    /// Subject line used for every order email
    subject: String,
}

impl EmailComposer {
    /// Creates a composer with the given recipients and subject
    pub fn new(to: Vec<String>, subject: String) -> Self {
        Self { to, subject }
    }

    /// Assembles the email for one summarized order
    pub fn compose(&self, summary: &OrderSummary) -> OrderEmail {
        log::debug!("Composed order email for {} recipient(s)", self.to.len());
        OrderEmail::new(self.to.clone(), self.subject.clone(), summary.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_uses_recipients_subject_and_summary_body() {
        let composer = EmailComposer::new(
            vec!["pablopato@example.com".to_string()],
            "New coffee order".to_string(),
        );
        let summary = OrderSummary::new(
            "Client: Ada".to_string(),
            "Toppings: Chocolate".to_string(),
            "2 coffees".to_string(),
            "Total: 14,00 €".to_string(),
        );

        let email = composer.compose(&summary);

        assert_eq!(email.to, vec!["pablopato@example.com".to_string()]);
        assert_eq!(email.subject, "New coffee order");
        assert_eq!(email.body, summary.to_string());
    }
}
