//! Unit and total price arithmetic for a cup of coffee

use crate::models::{PriceQuote, Topping, ToppingSelection};
use serde::{Deserialize, Serialize};

/// Prices for a cup of coffee and its toppings, in whole currency units
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PriceList {
    /// Price of one cup with no toppings
    pub base_price: u32,
    /// Surcharge for whipped cream
    pub whipped_cream_price: u32,
    /// Surcharge for chocolate
    pub chocolate_price: u32,
}

impl PriceList {
    /// Creates a price list with the given prices
    pub fn new(base_price: u32, whipped_cream_price: u32, chocolate_price: u32) -> Self {
        Self {
            base_price,
            whipped_cream_price,
            chocolate_price,
        }
    }

    /// Returns the surcharge for a single topping
    pub fn topping_price(&self, topping: Topping) -> u32 {
        match topping {
            Topping::WhippedCream => self.whipped_cream_price,
            Topping::Chocolate => self.chocolate_price,
        }
    }

    /// Price of one cup with the selected toppings
    pub fn unit_price(&self, toppings: &ToppingSelection) -> u32 {
        let mut price = self.base_price;
        for topping in toppings.selected() {
            price += self.topping_price(topping);
        }
        price
    }

    /// Price of the whole order.
    ///
    /// `quantity` must already be within the order bounds; this does not
    /// validate or clamp it.
    pub fn total_price(&self, quantity: u32, toppings: &ToppingSelection) -> u32 {
        self.unit_price(toppings) * quantity
    }

    /// Unit and total price bundled for the caller
    pub fn quote(&self, quantity: u32, toppings: &ToppingSelection) -> PriceQuote {
        let unit_price = self.unit_price(toppings);
        PriceQuote::new(unit_price, unit_price * quantity)
    }
}

impl Default for PriceList {
    /// The counter's standing prices: 5 per cup, 1 for whipped cream,
    /// 2 for chocolate
    fn default() -> Self {
        Self::new(5, 1, 2)
    }
}
