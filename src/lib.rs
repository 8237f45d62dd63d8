pub mod api;
pub mod config;
pub mod core;
pub mod models;

/// Re-export important types for easier access
pub use crate::models::{Order, OrderEmail, OrderSummary, PriceQuote, Topping, ToppingSelection};

pub use crate::core::error::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
