//! Order summary text composition

use crate::models::{OrderSummary, ToppingSelection};
use serde::{Deserialize, Serialize};

/// Display names for the toppings
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ToppingLabels {
    /// Label for the whipped cream topping
    pub whipped_cream: String,
    /// Label for the chocolate topping
    pub chocolate: String,
}

impl Default for ToppingLabels {
    fn default() -> Self {
        Self {
            whipped_cream: "Whipped Cream".to_string(),
            chocolate: "Chocolate".to_string(),
        }
    }
}

/// Labels used when composing the summary lines
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SummaryLabels {
    /// Prefix of the client-name line
    pub client_prefix: String,
    /// Prefix of the toppings line
    pub toppings_prefix: String,
    /// Prefix of the total-price line
    pub total_prefix: String,
    /// Display names for the toppings
    pub toppings: ToppingLabels,
}

impl Default for SummaryLabels {
    fn default() -> Self {
        Self {
            client_prefix: "Client".to_string(),
            toppings_prefix: "Toppings".to_string(),
            total_prefix: "Total".to_string(),
            toppings: ToppingLabels::default(),
        }
    }
}

/// Renders a whole-unit amount as localized currency text
pub trait CurrencyFormatter {
    /// Formats `amount` currency units for display
    fn format(&self, amount: u32) -> String;
}

/// Chooses the word form for a number of cups
pub trait QuantityPluralizer {
    /// Returns the full quantity phrase, e.g. "2 coffees"
    fn phrase(&self, count: u32) -> String;
}

/// Spanish-locale euro rendering, e.g. "1.250,00 €"
#[derive(Debug, Clone, Default)]
pub struct EuroFormatter;

impl CurrencyFormatter for EuroFormatter {
    fn format(&self, amount: u32) -> String {
        format!("{},00 €", group_thousands(amount))
    }
}

// Dot-grouped integer digits, Spanish style
fn group_thousands(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

/// English cup phrases, e.g. "1 coffee" / "3 coffees"
#[derive(Debug, Clone, Default)]
pub struct EnglishCoffeePlurals;

impl QuantityPluralizer for EnglishCoffeePlurals {
    fn phrase(&self, count: u32) -> String {
        if count == 1 {
            format!("{} coffee", count)
        } else {
            format!("{} coffees", count)
        }
    }
}

/// Spanish cup phrases, e.g. "1 café" / "3 cafés"
#[derive(Debug, Clone, Default)]
pub struct SpanishCoffeePlurals;

impl QuantityPluralizer for SpanishCoffeePlurals {
    fn phrase(&self, count: u32) -> String {
        if count == 1 {
            format!("{} café", count)
        } else {
            format!("{} cafés", count)
        }
    }
}

/// Builds the toppings fragment of a summary.
///
/// The whipped cream label always carries a trailing ", ", even when
/// chocolate is not selected. With no toppings selected the fragment is
/// empty.
pub fn toppings_description(toppings: &ToppingSelection, labels: &ToppingLabels) -> String {
    let mut text = String::new();
    if toppings.whipped_cream {
        text.push_str(&labels.whipped_cream);
        text.push_str(", ");
    }
    if toppings.chocolate {
        text.push_str(&labels.chocolate);
    }
    text
}

/// Composes the four-line summary shown on screen and emailed out.
///
/// Currency formatting and pluralization are owned by the injected
/// collaborators, not by this function.
pub fn compose_summary(
    client_name: &str,
    quantity: u32,
    total_price: u32,
    toppings_text: &str,
    currency: &dyn CurrencyFormatter,
    plurals: &dyn QuantityPluralizer,
    labels: &SummaryLabels,
) -> OrderSummary {
    OrderSummary::new(
        format!("{}: {}", labels.client_prefix, client_name),
        format!("{}: {}", labels.toppings_prefix, toppings_text),
        plurals.phrase(quantity),
        format!("{}: {}", labels.total_prefix, currency.format(total_price)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toppings_description_combinations() {
        let labels = ToppingLabels::default();

        assert_eq!(
            toppings_description(&ToppingSelection::new(false, false), &labels),
            ""
        );
        assert_eq!(
            toppings_description(&ToppingSelection::new(true, false), &labels),
            "Whipped Cream, "
        );
        assert_eq!(
            toppings_description(&ToppingSelection::new(false, true), &labels),
            "Chocolate"
        );
        assert_eq!(
            toppings_description(&ToppingSelection::new(true, true), &labels),
            "Whipped Cream, Chocolate"
        );
    }

    #[test]
    fn test_toppings_description_with_custom_labels() {
        let labels = ToppingLabels {
            whipped_cream: "Nata".to_string(),
            chocolate: "Chocolate".to_string(),
        };

        assert_eq!(
            toppings_description(&ToppingSelection::new(true, true), &labels),
            "Nata, Chocolate"
        );
    }

    #[test]
    fn test_euro_formatting() {
        let formatter = EuroFormatter;

        assert_eq!(formatter.format(5), "5,00 €");
        assert_eq!(formatter.format(18), "18,00 €");
        assert_eq!(formatter.format(800), "800,00 €");
        assert_eq!(formatter.format(1250), "1.250,00 €");
    }

    #[test]
    fn test_quantity_phrases() {
        assert_eq!(EnglishCoffeePlurals.phrase(1), "1 coffee");
        assert_eq!(EnglishCoffeePlurals.phrase(2), "2 coffees");
        assert_eq!(SpanishCoffeePlurals.phrase(1), "1 café");
        assert_eq!(SpanishCoffeePlurals.phrase(3), "3 cafés");
    }

    #[test]
    fn test_compose_summary_lines() {
        let summary = compose_summary(
            "Ada",
            3,
            18,
            "Whipped Cream, ",
            &EuroFormatter,
            &EnglishCoffeePlurals,
            &SummaryLabels::default(),
        );

        assert_eq!(summary.client_line, "Client: Ada");
        assert_eq!(summary.toppings_line, "Toppings: Whipped Cream, ");
        assert_eq!(summary.quantity_line, "3 coffees");
        assert_eq!(summary.total_line, "Total: 18,00 €");
    }
}
