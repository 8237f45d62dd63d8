//! Custom error types for the crate

use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// The quantity bound that rejected a change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityBound {
    /// The smallest orderable quantity
    Minimum,
    /// The largest orderable quantity
    Maximum,
}

impl QuantityBound {
    /// Converts the enum to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            QuantityBound::Minimum => "minimum",
            QuantityBound::Maximum => "maximum",
        }
    }
}

impl Display for QuantityBound {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum Error {
    /// Quantity change rejected because the order is already at a bound.
    /// Recovered by the caller (show a warning, leave the order as is).
    #[error("quantity already at the {bound} of {limit}")]
    OutOfRange {
        /// Which bound was hit
        bound: QuantityBound,
        /// Value of that bound
        limit: u32,
    },

    /// Serialization or deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
