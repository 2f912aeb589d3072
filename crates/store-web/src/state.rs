//! Front End State
//!
//! The cart lives in one reactive signal owned by [`CartHandle`]. Components
//! receive the handle as a prop and can only use the operations it exposes;
//! every change to items and totals lands in a single signal update.

use leptos::prelude::*;
use store_core::{Cart, CartError, CartLineItem, Product, QuantityChange};

/// Kind of a user-facing notification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Loading,
}

/// A user-facing notification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Current notification (at most one shown at a time)
#[derive(Clone, Copy, Debug)]
pub struct Notices(RwSignal<Option<Notice>>);

impl Default for Notices {
    fn default() -> Self {
        Self::new()
    }
}

impl Notices {
    pub fn new() -> Self {
        Self(RwSignal::new(None))
    }

    fn show(&self, kind: NoticeKind, message: impl Into<String>) {
        self.0.set(Some(Notice {
            kind,
            message: message.into(),
        }));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(NoticeKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(NoticeKind::Error, message);
    }

    pub fn loading(&self, message: impl Into<String>) {
        self.show(NoticeKind::Loading, message);
    }

    pub fn dismiss(&self) {
        self.0.set(None);
    }

    pub fn current(&self) -> Option<Notice> {
        self.0.get()
    }
}

/// Handle to the shopping cart
#[derive(Clone, Copy, Debug)]
pub struct CartHandle {
    cart: RwSignal<Cart>,
    notices: Notices,
}

impl CartHandle {
    pub fn new(notices: Notices) -> Self {
        Self {
            cart: RwSignal::new(Cart::new()),
            notices,
        }
    }

    pub const fn notices(&self) -> Notices {
        self.notices
    }

    /// Add units of a product and confirm with a notice
    pub fn add(&self, product: &Product, quantity: u32) -> bool {
        let mut outcome = Ok(());
        self.cart.update(|cart| outcome = cart.add(product, quantity));

        match outcome {
            Ok(()) => {
                self.notices
                    .success(format!("{quantity} {} added to the cart.", product.name));
                true
            }
            Err(e) => self.report(&e),
        }
    }

    pub fn remove(&self, id: &str) -> bool {
        let mut outcome = Ok(());
        self.cart
            .update(|cart| outcome = cart.remove(id).map(|_| ()));

        outcome.map_or_else(|e| self.report(&e), |()| true)
    }

    pub fn adjust_quantity(&self, id: &str, change: QuantityChange) -> bool {
        let mut outcome = Ok(());
        self.cart
            .update(|cart| outcome = cart.adjust_quantity(id, change));

        outcome.map_or_else(|e| self.report(&e), |()| true)
    }

    pub fn clear(&self) {
        self.cart.update(Cart::clear);
    }

    pub fn items(&self) -> Vec<CartLineItem> {
        self.cart.with(|cart| cart.items().to_vec())
    }

    /// Current quantity of one line, tracked
    pub fn quantity(&self, id: &str) -> Option<u32> {
        self.cart.with(|cart| cart.get(id).map(|item| item.quantity))
    }

    /// Items without subscribing the caller to changes
    pub fn snapshot(&self) -> Vec<CartLineItem> {
        self.cart.with_untracked(|cart| cart.items().to_vec())
    }

    pub fn total_price(&self) -> String {
        self.cart.with(|cart| format!("{:.2}", cart.total_price()))
    }

    pub fn total_quantity(&self) -> u64 {
        self.cart.with(Cart::total_quantity)
    }

    pub fn is_empty(&self) -> bool {
        self.cart.with(Cart::is_empty)
    }

    fn report(&self, error: &CartError) -> bool {
        self.notices.error(error.user_message());
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn with_owner(test: impl FnOnce()) {
        let owner = Owner::new();
        owner.with(test);
    }

    #[test]
    fn test_add_shows_success() {
        with_owner(|| {
            let cart = CartHandle::new(Notices::new());
            let product = Product::new("p1", "Speaker", "speaker", dec!(10));

            assert!(cart.add(&product, 2));
            assert!(cart.add(&product, 1));
            assert_eq!(cart.items().len(), 1);
            assert_eq!(cart.total_quantity(), 3);
            assert_eq!(cart.total_price(), "30.00");
            assert_eq!(
                cart.notices().current().map(|n| n.kind),
                Some(NoticeKind::Success)
            );
        });
    }

    #[test]
    fn test_failures_become_notices() {
        with_owner(|| {
            let cart = CartHandle::new(Notices::new());

            assert!(!cart.remove("missing"));
            let notice = cart.notices().current().unwrap();
            assert_eq!(notice.kind, NoticeKind::Error);
            assert_eq!(notice.message, "That item is no longer in your cart.");

            assert!(!cart.add(&Product::new("p", "P", "p", dec!(1)), 0));
            assert!(cart.is_empty());
        });
    }

    #[test]
    fn test_decrement_floor_and_clear() {
        with_owner(|| {
            let cart = CartHandle::new(Notices::new());
            cart.add(&Product::new("p", "P", "p", dec!(4.5)), 1);

            assert!(cart.adjust_quantity("p", QuantityChange::Decrement));
            assert_eq!(cart.total_quantity(), 1);

            assert!(cart.adjust_quantity("p", QuantityChange::Increment));
            assert_eq!(cart.quantity("p"), Some(2));
            assert_eq!(cart.total_price(), "9.00");

            cart.clear();
            assert!(cart.snapshot().is_empty());
            assert_eq!(cart.quantity("p"), None);
        });
    }
}
