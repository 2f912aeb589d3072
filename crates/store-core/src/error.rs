//! Error Types

use thiserror::Error;

/// Result type alias for cart operations
pub type Result<T> = std::result::Result<T, CartError>;

/// Cart operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// No line item carries this identifier
    #[error("Item not found in cart: {0}")]
    ItemNotFound(String),

    /// Quantity is zero or would overflow the line item
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// Line subtotal or cart total does not fit in a decimal
    #[error("Cart total out of range")]
    TotalOverflow,

    /// Two line items share one identifier
    #[error("Duplicate line item: {0}")]
    DuplicateItem(String),
}

impl CartError {
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::ItemNotFound(_) => "That item is no longer in your cart.".into(),
            Self::InvalidQuantity(_) => "Please choose a quantity of at least 1.".into(),
            Self::TotalOverflow => "Your cart total is too large.".into(),
            Self::DuplicateItem(_) => "Your cart could not be restored.".into(),
        }
    }
}

/// CDN image URL errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageUrlError {
    /// Asset reference does not have the `image-<id>-<w>x<h>-<format>` shape
    #[error("Malformed image asset reference: {0}")]
    MalformedAssetRef(String),

    /// Configured CDN base is not a usable URL
    #[error("Invalid CDN base URL: {0}")]
    InvalidBase(String),

    /// Project id or dataset is empty or contains a path separator
    #[error("Invalid CDN path segment: {0:?}")]
    InvalidSegment(String),
}
