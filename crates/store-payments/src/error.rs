//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// The processor rejected the request
    #[error("Processor error: {message}")]
    Processor {
        /// HTTP status reported by the processor, if any
        status: Option<u16>,
        message: String,
    },

    /// The processor could not be reached
    #[error("Payment processor unavailable: {0}")]
    ProcessorUnavailable(String),

    /// A cart line could not be converted into a checkout line
    #[error("Invalid line item {id}: {reason}")]
    InvalidLineItem { id: String, reason: String },

    /// Nothing to check out
    #[error("Cart is empty")]
    EmptyCart,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PaymentError {
    /// HTTP status to answer the checkout request with
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Processor { status, .. } => status.unwrap_or(500),
            Self::ProcessorUnavailable(_) => 502,
            Self::InvalidLineItem { .. } | Self::EmptyCart => 400,
            Self::Config(_) => 500,
        }
    }

    /// Message returned to the caller; processor messages pass through as-is
    pub fn message(&self) -> String {
        match self {
            Self::Processor { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Processor { .. } => "PROCESSOR_ERROR",
            Self::ProcessorUnavailable(_) => "PROCESSOR_UNAVAILABLE",
            Self::InvalidLineItem { .. } => "INVALID_LINE_ITEM",
            Self::EmptyCart => "EMPTY_CART",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}
