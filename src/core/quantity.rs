//! Checked quantity changes for an order

use crate::core::error::{Error, QuantityBound};
use crate::Result;
use serde::{Deserialize, Serialize};

/// Inclusive bounds for the number of cups in one order
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityBounds {
    /// Smallest orderable quantity
    pub min: u32,
    /// Largest orderable quantity
    pub max: u32,
}

impl QuantityBounds {
    /// Creates bounds with the given minimum and maximum
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Returns `current + 1`, or fails when the maximum is already reached
    pub fn increment(&self, current: u32) -> Result<u32> {
        if current < self.max {
            Ok(current + 1)
        } else {
            Err(Error::OutOfRange {
                bound: QuantityBound::Maximum,
                limit: self.max,
            })
        }
    }

    /// Returns `current - 1`, or fails when the minimum is already reached
    pub fn decrement(&self, current: u32) -> Result<u32> {
        if current > self.min {
            Ok(current - 1)
        } else {
            Err(Error::OutOfRange {
                bound: QuantityBound::Minimum,
                limit: self.min,
            })
        }
    }

    /// Returns true when `quantity` lies within the bounds
    pub fn contains(&self, quantity: u32) -> bool {
        self.min <= quantity && quantity <= self.max
    }
}

impl Default for QuantityBounds {
    /// One to one hundred cups per order
    fn default() -> Self {
        Self::new(1, 100)
    }
}
