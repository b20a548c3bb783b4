//! [`ActorEntity`] implementation for the [`CartItem`] domain type.

use super::error::CartError;
use super::queries::CartQuery;
use crate::model::{CartItem, CartItemCreate, CartTotals, ProductId, SetQuantity};
use actor_store::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for CartItem {
    type Id = ProductId;
    type Create = CartItemCreate;
    type Update = SetQuantity;
    type Action = ();
    type ActionResult = ();
    type Query = CartQuery;
    type QueryResult = CartTotals;
    type Context = ();
    type Error = CartError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn from_create_params(id: ProductId, params: CartItemCreate) -> Result<Self, CartError> {
        Ok(CartItem {
            id,
            name: params.name,
            price: params.price,
            image: params.image,
            quantity: 1,
        })
    }

    fn natural_id(params: &CartItemCreate) -> Option<ProductId> {
        Some(params.product_id.clone())
    }

    fn is_retained(&self) -> bool {
        self.quantity >= 1
    }

    /// Re-adding a product only bumps the quantity; the stored snapshot wins.
    async fn on_merge(&mut self, _params: CartItemCreate, _ctx: &()) -> Result<(), CartError> {
        self.quantity = self.quantity.saturating_add(1);
        Ok(())
    }

    async fn on_update(&mut self, update: SetQuantity, _ctx: &()) -> Result<(), CartError> {
        self.quantity = u32::try_from(update.0.max(0)).map_err(|_| {
            CartError::Validation(format!("{} exceeds the maximum of {}", update.0, u32::MAX))
        })?;
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), CartError> {
        Ok(())
    }

    fn handle_query(items: &[Self], query: CartQuery) -> CartTotals {
        match query {
            CartQuery::Totals => CartTotals::of(items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn line() -> CartItem {
        CartItem::from_create_params(
            "3".into(),
            CartItemCreate {
                product_id: "3".into(),
                name: "Tênis".into(),
                price: Decimal::new(24999, 2),
                image: String::new(),
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_quantity_updates_and_retention() {
        let mut item = line();
        assert_eq!(item.quantity, 1);

        item.on_update(SetQuantity(4), &()).await.unwrap();
        assert_eq!(item.quantity, 4);
        assert!(item.is_retained());

        item.on_update(SetQuantity(0), &()).await.unwrap();
        assert!(!item.is_retained());

        item.on_update(SetQuantity(-1), &()).await.unwrap();
        assert_eq!(item.quantity, 0);
        assert!(!item.is_retained());
    }

    #[tokio::test]
    async fn test_over_range_quantity_is_rejected_unchanged() {
        let mut item = line();
        item.on_update(SetQuantity(7), &()).await.unwrap();

        let result = item
            .on_update(SetQuantity(i64::from(u32::MAX) + 1), &())
            .await;
        assert!(matches!(result, Err(CartError::Validation(_))));
        assert_eq!(item.quantity, 7);

        item.on_update(SetQuantity(i64::from(u32::MAX)), &()).await.unwrap();
        assert_eq!(item.quantity, u32::MAX);
    }

    #[tokio::test]
    async fn test_merge_keeps_original_snapshot() {
        let mut item = line();
        let repriced = CartItemCreate {
            product_id: "3".into(),
            name: "Renamed".into(),
            price: Decimal::ONE,
            image: "new.jpg".into(),
        };
        item.on_merge(repriced, &()).await.unwrap();
        assert_eq!(item.quantity, 2);
        assert_eq!(item.name, "Tênis");
        assert_eq!(item.price, Decimal::new(24999, 2));
    }
}
