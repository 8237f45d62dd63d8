//! API for the ordering screen to drive one order at a time

use crate::config::CounterConfig;
use crate::core::email::EmailComposer;
use crate::core::order::{OrderCommand, OrderManager};
use crate::core::summary::{
    self, CurrencyFormatter, EnglishCoffeePlurals, EuroFormatter, QuantityPluralizer, SummaryLabels,
};
use crate::models::{Order, OrderEmail, OrderSummary, PriceQuote};
use crate::Result;
use chrono::Utc;
use uuid::Uuid;

/// A placed order, ready to hand to the display and the platform mailer
#[derive(Debug, Clone)]
pub struct PlacedOrder {
    /// Unique identifier for the placed order
    pub order_id: String,
    /// Unix timestamp when the order was placed
    pub placed_timestamp: u64,
    /// Summary shown on screen
    pub summary: OrderSummary,
    /// Email handed to the platform mailer
    pub email: OrderEmail,
}

/// Screen-facing API wiring pricing, commands and composition together
pub struct CashierApi {
    /// Command application and pricing rules
    order_manager: OrderManager,
    /// Labels used for summary lines
    labels: SummaryLabels,
    /// Currency rendering collaborator
    currency: Box<dyn CurrencyFormatter>,
    /// Quantity phrase collaborator
    plurals: Box<dyn QuantityPluralizer>,
    /// Email composition with the counter's recipients
    email_composer: EmailComposer,
}

impl CashierApi {
    /// Creates an API with the default configuration and collaborators
    pub fn new() -> Self {
        Self::with_config(CounterConfig::default())
    }

    /// Creates an API from a counter configuration, with euro formatting
    /// and English cup phrases
    pub fn with_config(config: CounterConfig) -> Self {
        Self::with_collaborators(config, Box::new(EuroFormatter), Box::new(EnglishCoffeePlurals))
    }

    /// Creates an API with caller-supplied locale collaborators
    pub fn with_collaborators(
        config: CounterConfig,
        currency: Box<dyn CurrencyFormatter>,
        plurals: Box<dyn QuantityPluralizer>,
    ) -> Self {
        Self {
            order_manager: OrderManager::with_rules(config.prices, config.bounds),
            labels: config.labels,
            currency,
            plurals,
            email_composer: EmailComposer::new(config.email_to, config.email_subject),
        }
    }

    /// Starts a new order with the default quantity and no toppings
    pub fn new_order(&self) -> Order {
        Order::new()
    }

    /// Adds one cup; fails when the order is already at the maximum
    pub fn increase_quantity(&self, order: &mut Order) -> Result<PriceQuote> {
        self.order_manager
            .apply(order, &OrderCommand::IncreaseQuantity)
    }

    /// Removes one cup; fails when the order is already at the minimum
    pub fn decrease_quantity(&self, order: &mut Order) -> Result<PriceQuote> {
        self.order_manager
            .apply(order, &OrderCommand::DecreaseQuantity)
    }

    /// Selects or clears the whipped cream topping
    pub fn set_whipped_cream(&self, order: &mut Order, selected: bool) -> Result<PriceQuote> {
        self.order_manager
            .apply(order, &OrderCommand::SetWhippedCream(selected))
    }

    /// Selects or clears the chocolate topping
    pub fn set_chocolate(&self, order: &mut Order, selected: bool) -> Result<PriceQuote> {
        self.order_manager
            .apply(order, &OrderCommand::SetChocolate(selected))
    }

    /// Replaces the client name
    pub fn set_client_name(&self, order: &mut Order, client_name: &str) -> Result<PriceQuote> {
        self.order_manager
            .apply(order, &OrderCommand::SetClientName(client_name.to_string()))
    }

    /// Prices the order as it currently stands
    pub fn quote(&self, order: &Order) -> PriceQuote {
        self.order_manager.quote(order)
    }

    /// Composes the on-screen summary; the client name is trimmed for display
    pub fn summarize(&self, order: &Order) -> OrderSummary {
        self.compose(order, order.client_name.trim())
    }

    /// Places the order: stamps an id and a timestamp and composes the email.
    ///
    /// The email body carries the client name exactly as entered.
    pub fn place_order(&self, order: &Order) -> PlacedOrder {
        let summary = self.summarize(order);
        let email = self
            .email_composer
            .compose(&self.compose(order, &order.client_name));

        let order_id = Uuid::new_v4().to_string();
        let placed_timestamp = Utc::now().timestamp() as u64;
        log::info!("Placed order {}: {} cup(s)", order_id, order.quantity);

        PlacedOrder {
            order_id,
            placed_timestamp,
            summary,
            email,
        }
    }

    fn compose(&self, order: &Order, client_name: &str) -> OrderSummary {
        let quote = self.order_manager.quote(order);
        let toppings_text = summary::toppings_description(&order.toppings, &self.labels.toppings);

        summary::compose_summary(
            client_name,
            order.quantity,
            quote.total_price,
            &toppings_text,
            self.currency.as_ref(),
            self.plurals.as_ref(),
            &self.labels,
        )
    }
}

impl Default for CashierApi {
    fn default() -> Self {
        Self::new()
    }
}
