//! Cart lines.

use super::{Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One cart line. Keyed by the product it was added from; name, price and
/// image are copied at add time and never refreshed from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub quantity: u32,
}

impl CartItem {
    /// Price times quantity, saturating at [`Decimal::MAX`].
    pub fn line_total(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// DTO for adding one unit of a product to the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItemCreate {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image: String,
}

impl From<&Product> for CartItemCreate {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
        }
    }
}

/// Requested quantity for a cart line. Zero or less removes the line; above
/// `u32::MAX` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetQuantity(pub i64);

/// Derived cart values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of price times quantity.
    pub total: Decimal,
    /// Sum of quantities. Wider than a line quantity so it cannot wrap.
    pub item_count: u64,
}

impl CartTotals {
    pub fn of(items: &[CartItem]) -> Self {
        items.iter().fold(Self::default(), |acc, item| Self {
            total: acc.total.saturating_add(item.line_total()),
            item_count: acc.item_count + u64::from(item.quantity),
        })
    }
}
