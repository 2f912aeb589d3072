//! Pending quantity chosen on a product page before adding to the cart.

/// Quantity picker with a floor of one unit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuantitySelector(u32);

impl Default for QuantitySelector {
    fn default() -> Self {
        Self::new()
    }
}

impl QuantitySelector {
    pub const fn new() -> Self {
        Self(1)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub const fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub const fn decrement(&mut self) {
        if self.0 > 1 {
            self.0 -= 1;
        }
    }

    pub const fn reset(&mut self) {
        self.0 = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_floor() {
        let mut qty = QuantitySelector::new();
        qty.decrement();
        assert_eq!(qty.get(), 1);

        qty.increment();
        qty.increment();
        assert_eq!(qty.get(), 3);

        qty.decrement();
        assert_eq!(qty.get(), 2);

        qty.reset();
        assert_eq!(qty.get(), 1);
    }
}
