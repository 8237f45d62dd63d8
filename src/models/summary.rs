use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Human-readable summary of a finished order
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    /// Line naming the client
    pub client_line: String,
    /// Line listing the selected toppings
    pub toppings_line: String,
    /// Line with the pluralized cup count
    pub quantity_line: String,
    /// Line with the formatted total price
    pub total_line: String,
}

impl OrderSummary {
    /// Creates a new OrderSummary from its four lines
    pub fn new(
        client_line: String,
        toppings_line: String,
        quantity_line: String,
        total_line: String,
    ) -> Self {
        Self {
            client_line,
            toppings_line,
            quantity_line,
            total_line,
        }
    }
}

impl Display for OrderSummary {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{}\n{}\n{}\n{}",
            self.client_line, self.toppings_line, self.quantity_line, self.total_line
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_renders_four_lines() {
        let summary = OrderSummary::new(
            "Client: Ada".to_string(),
            "Toppings: Chocolate".to_string(),
            "2 coffees".to_string(),
            "Total: 14,00 €".to_string(),
        );

        assert_eq!(
            summary.to_string(),
            "Client: Ada\nToppings: Chocolate\n2 coffees\nTotal: 14,00 €"
        );
    }
}
