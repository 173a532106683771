//! Status enums for orders.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a status label is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} status: {value}")]
pub struct ParseStatusError {
    kind: &'static str,
    value: String,
}

/// Order payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentStatus {
    #[default]
    Paid,
    Pending,
    Failed,
}

impl PaymentStatus {
    /// Display label shown in badges.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
            Self::Failed => "Failed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Paid" => Ok(Self::Paid),
            "Pending" => Ok(Self::Pending),
            "Failed" => Ok(Self::Failed),
            _ => Err(ParseStatusError {
                kind: "payment",
                value: s.to_string(),
            }),
        }
    }
}

/// Order fulfillment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FulfillmentStatus {
    #[default]
    Unfulfilled,
    Fulfilled,
    Cancelled,
}

impl FulfillmentStatus {
    /// Display label shown in badges.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unfulfilled => "Unfulfilled",
            Self::Fulfilled => "Fulfilled",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for FulfillmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FulfillmentStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Unfulfilled" => Ok(Self::Unfulfilled),
            "Fulfilled" => Ok(Self::Fulfilled),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseStatusError {
                kind: "fulfillment",
                value: s.to_string(),
            }),
        }
    }
}
