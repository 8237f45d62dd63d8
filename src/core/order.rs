//! Order commands and their application

use crate::core::pricing::PriceList;
use crate::core::quantity::QuantityBounds;
use crate::models::{Order, PriceQuote};
use crate::Result;
use serde::{Deserialize, Serialize};

/// A change requested from the ordering screen
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum OrderCommand {
    /// Add one cup
    IncreaseQuantity,
    /// Remove one cup
    DecreaseQuantity,
    /// Select or clear the whipped cream topping
    SetWhippedCream(bool),
    /// Select or clear the chocolate topping
    SetChocolate(bool),
    /// Replace the client name
    SetClientName(String),
}

/// Applies ordering-screen commands to a caller-owned order
pub struct OrderManager {
    /// Prices used to re-quote the order after every change
    price_list: PriceList,
    /// Bounds enforced on quantity changes
    bounds: QuantityBounds,
}

impl OrderManager {
    /// Creates a manager with the standing prices and bounds
    pub fn new() -> Self {
        Self::with_rules(PriceList::default(), QuantityBounds::default())
    }

    /// Creates a manager with the given prices and bounds
    pub fn with_rules(price_list: PriceList, bounds: QuantityBounds) -> Self {
        Self { price_list, bounds }
    }

    /// Applies a command to the order and returns the recomputed price.
    ///
    /// A rejected command leaves the order unchanged.
    pub fn apply(&self, order: &mut Order, command: &OrderCommand) -> Result<PriceQuote> {
        match command {
            OrderCommand::IncreaseQuantity => match self.bounds.increment(order.quantity) {
                Ok(quantity) => order.quantity = quantity,
                Err(e) => {
                    log::warn!("Rejected quantity increase: {}", e);
                    return Err(e);
                }
            },
            OrderCommand::DecreaseQuantity => match self.bounds.decrement(order.quantity) {
                Ok(quantity) => order.quantity = quantity,
                Err(e) => {
                    log::warn!("Rejected quantity decrease: {}", e);
                    return Err(e);
                }
            },
            OrderCommand::SetWhippedCream(selected) => {
                order.toppings.whipped_cream = *selected;
            }
            OrderCommand::SetChocolate(selected) => {
                order.toppings.chocolate = *selected;
            }
            OrderCommand::SetClientName(client_name) => {
                order.client_name = client_name.clone();
            }
        }

        let quote = self.quote(order);
        log::debug!(
            "Applied {:?}: {} cup(s) at {} each",
            command,
            order.quantity,
            quote.unit_price
        );

        Ok(quote)
    }

    /// Prices the order as it currently stands
    pub fn quote(&self, order: &Order) -> PriceQuote {
        self.price_list.quote(order.quantity, &order.toppings)
    }

    /// Returns the bounds enforced on quantity changes
    pub fn bounds(&self) -> &QuantityBounds {
        &self.bounds
    }

    /// Returns the price list used to quote orders
    pub fn price_list(&self) -> &PriceList {
        &self.price_list
    }
}

impl Default for OrderManager {
    fn default() -> Self {
        Self::new()
    }
}
