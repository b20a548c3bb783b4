//! Read-only views over the cart.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartQuery {
    /// Total price and item count, answered as a [`CartTotals`](crate::model::CartTotals).
    Totals,
}
