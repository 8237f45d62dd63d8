use serde::{Deserialize, Serialize};

/// Price computed for an order at its current quantity and toppings
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PriceQuote {
    /// Price of one cup with the selected toppings, in whole currency units
    pub unit_price: u32,
    /// Price of the whole order, in whole currency units
    pub total_price: u32,
}

impl PriceQuote {
    /// Creates a new PriceQuote
    pub fn new(unit_price: u32, total_price: u32) -> Self {
        Self {
            unit_price,
            total_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_creation() {
        let quote = PriceQuote::new(6, 18);

        assert_eq!(quote.unit_price, 6);
        assert_eq!(quote.total_price, 18);
    }
}
