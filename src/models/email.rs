use crate::Result;
use serde::{Deserialize, Serialize};

/// An order summary prepared for dispatch by the platform mailer
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OrderEmail {
    /// Recipient addresses
    pub to: Vec<String>,
    /// Subject line
    pub subject: String,
    /// Message body (the rendered order summary)
    pub body: String,
}

impl OrderEmail {
    /// Creates a new OrderEmail
    pub fn new(to: Vec<String>, subject: String, body: String) -> Self {
        Self { to, subject, body }
    }

    /// Serializes the email to a JSON payload for the mailer
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_json_payload() {
        let email = OrderEmail::new(
            vec!["pablopato@example.com".to_string()],
            "New coffee order".to_string(),
            "Client: Ada\nToppings: \n1 coffee\nTotal: 5,00 €".to_string(),
        );

        let json = email.to_json().unwrap();
        let decoded: OrderEmail = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, email);
        assert!(json.contains("pablopato@example.com"));
    }
}
