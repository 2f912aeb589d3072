//! Cart Store
//!
//! An ordered list of line items, unique by product id, plus totals that
//! are always recomputed from that list.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CartError, Result};
use crate::model::{CartLineItem, Product};

/// Direction of a single-step quantity change
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityChange {
    #[serde(alias = "inc")]
    Increment,
    #[serde(alias = "dec")]
    Decrement,
}

/// Aggregates over all line items
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    /// Σ unit price × quantity
    pub total_price: Decimal,

    /// Σ quantity
    pub total_quantity: u64,
}

impl CartTotals {
    /// Fold the totals over a set of line items, `None` on overflow
    pub fn from_items(items: &[CartLineItem]) -> Option<Self> {
        items.iter().try_fold(Self::default(), |acc, item| {
            Some(Self {
                total_price: acc.total_price.checked_add(item.subtotal()?)?,
                total_quantity: acc.total_quantity.checked_add(u64::from(item.quantity))?,
            })
        })
    }
}

/// Shopping cart
///
/// Deserializes from its items alone; totals in the input are ignored and
/// recomputed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CartItems")]
pub struct Cart {
    items: Vec<CartLineItem>,
    totals: CartTotals,
}

#[derive(Deserialize)]
struct CartItems {
    items: Vec<CartLineItem>,
}

impl TryFrom<CartItems> for Cart {
    type Error = CartError;

    fn try_from(raw: CartItems) -> Result<Self> {
        for (index, item) in raw.items.iter().enumerate() {
            if item.quantity == 0 {
                return Err(CartError::InvalidQuantity(0));
            }
            if raw.items[..index].iter().any(|other| other.id == item.id) {
                return Err(CartError::DuplicateItem(item.id.clone()));
            }
        }

        let mut cart = Self::new();
        cart.commit(raw.items)?;
        Ok(cart)
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of a product, merging into an existing line
    pub fn add(&mut self, product: &Product, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }

        let mut items = self.items.clone();
        match items.iter_mut().find(|item| item.id == product.id) {
            Some(item) => {
                item.quantity = item
                    .quantity
                    .checked_add(quantity)
                    .ok_or(CartError::InvalidQuantity(quantity))?;
            }
            None => items.push(product.line_item(quantity)),
        }

        self.commit(items)?;
        tracing::debug!(product_id = %product.id, quantity, "Added to cart");
        Ok(())
    }

    /// Remove a line item entirely, returning it
    pub fn remove(&mut self, id: &str) -> Result<CartLineItem> {
        let index = self.position(id)?;
        let mut items = self.items.clone();
        let removed = items.remove(index);

        self.commit(items)?;
        tracing::debug!(product_id = %id, quantity = removed.quantity, "Removed from cart");
        Ok(removed)
    }

    /// Step a line item's quantity by one
    ///
    /// Decrementing never takes a line below one unit; at one unit the call
    /// leaves the cart unchanged.
    pub fn adjust_quantity(&mut self, id: &str, change: QuantityChange) -> Result<()> {
        let index = self.position(id)?;
        let mut items = self.items.clone();
        let Some(item) = items.get_mut(index) else {
            return Err(CartError::ItemNotFound(id.to_string()));
        };

        match change {
            QuantityChange::Increment => {
                item.quantity = item
                    .quantity
                    .checked_add(1)
                    .ok_or(CartError::InvalidQuantity(item.quantity))?;
            }
            QuantityChange::Decrement if item.quantity > 1 => item.quantity -= 1,
            QuantityChange::Decrement => return Ok(()),
        }

        let quantity = item.quantity;
        self.commit(items)?;
        tracing::debug!(product_id = %id, quantity, "Adjusted quantity");
        Ok(())
    }

    /// Empty the cart
    pub fn clear(&mut self) {
        self.items.clear();
        self.totals = CartTotals::default();
    }

    /// Line items in insertion order
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub const fn totals(&self) -> CartTotals {
        self.totals
    }

    pub const fn total_price(&self) -> Decimal {
        self.totals.total_price
    }

    pub const fn total_quantity(&self) -> u64 {
        self.totals.total_quantity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| CartError::ItemNotFound(id.to_string()))
    }

    /// Replace the items and their totals together; on overflow nothing changes
    fn commit(&mut self, items: Vec<CartLineItem>) -> Result<()> {
        let totals = CartTotals::from_items(&items).ok_or(CartError::TotalOverflow)?;
        self.items = items;
        self.totals = totals;
        Ok(())
    }
}
