use crate::models::ToppingSelection;
use serde::{Deserialize, Serialize};

/// Represents one screen's coffee order as the client builds it
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Number of cups of coffee
    pub quantity: u32,
    /// Toppings selected for every cup
    pub toppings: ToppingSelection,
    /// Name of the client placing the order (possibly empty)
    pub client_name: String,
}

impl Order {
    /// Creates a new order with one cup, no toppings and no client name
    pub fn new() -> Self {
        Self {
            quantity: 1,
            toppings: ToppingSelection::none(),
            client_name: String::new(),
        }
    }

    /// Sets the quantity
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the toppings
    pub fn with_toppings(mut self, toppings: ToppingSelection) -> Self {
        self.toppings = toppings;
        self
    }

    /// Sets the client name
    pub fn with_client_name(mut self, client_name: String) -> Self {
        self.client_name = client_name;
        self
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_order_defaults() {
        let order = Order::new();

        assert_eq!(order.quantity, 1);
        assert!(!order.toppings.whipped_cream);
        assert!(!order.toppings.chocolate);
        assert_eq!(order.client_name, "");
    }

    #[test]
    fn test_order_builder() {
        let order = Order::new()
            .with_quantity(3)
            .with_toppings(ToppingSelection::new(true, false))
            .with_client_name("Ada".to_string());

        assert_eq!(order.quantity, 3);
        assert!(order.toppings.whipped_cream);
        assert!(!order.toppings.chocolate);
        assert_eq!(order.client_name, "Ada");
    }
}
