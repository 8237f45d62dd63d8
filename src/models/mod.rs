mod email;
mod order;
mod quote;
mod summary;
mod topping;

pub use email::OrderEmail;
pub use order::Order;
pub use quote::PriceQuote;
pub use summary::OrderSummary;
pub use topping::{Topping, ToppingSelection};
