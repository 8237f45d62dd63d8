//! Counter configuration

use crate::core::pricing::PriceList;
use crate::core::quantity::QuantityBounds;
use crate::core::summary::SummaryLabels;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Configuration for one ordering counter
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CounterConfig {
    /// Prices for cups and toppings
    pub prices: PriceList,
    /// Allowed quantity range per order
    pub bounds: QuantityBounds,
    /// Labels used when composing summaries
    pub labels: SummaryLabels,
    /// Recipients of the order email
    pub email_to: Vec<String>,
    /// Subject of the order email
    pub email_subject: String,
}

impl CounterConfig {
    /// Parses a configuration from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            prices: PriceList::default(),
            bounds: QuantityBounds::default(),
            labels: SummaryLabels::default(),
            email_to: vec!["pablopato@example.com".to_string()],
            email_subject: "New coffee order".to_string(),
        }
    }
}
