//! # Cart Client
//!
//! Provides a high‑level API for interacting with the cart actor.
//! Operations on product ids that are not in the cart do nothing.
use crate::cart_actor::{CartError, CartQuery};
use crate::model::{CartItem, CartItemCreate, CartTotals, Product, ProductId, SetQuantity};
use actor_store::ActorClient;
use actor_store::{FrameworkError, ResourceClient};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<CartItem>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<CartItem>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<CartItem> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<CartItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<CartError>() {
                Ok(e) => *e,
                Err(other) => CartError::ActorCommunicationError(other.to_string()),
            },
            FrameworkError::Storage(e) => CartError::Storage(e.to_string()),
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CartClient {
    /// Adds one unit of a product, creating its line on first add.
    #[instrument(skip(self))]
    pub async fn add(
        &self,
        product_id: ProductId,
        name: &str,
        price: Decimal,
        image: &str,
    ) -> Result<(), CartError> {
        self.add_line(CartItemCreate {
            product_id,
            name: name.to_string(),
            price,
            image: image.to_string(),
        })
        .await
    }

    /// Adds one unit of `product`, copying its current name, price and image.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_product(&self, product: &Product) -> Result<(), CartError> {
        self.add_line(CartItemCreate::from(product)).await
    }

    async fn add_line(&self, line: CartItemCreate) -> Result<(), CartError> {
        debug!("Sending request");
        self.inner
            .create(line)
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }

    /// Sets the quantity of a line; zero or below removes it. Quantities above
    /// `u32::MAX` fail with [`CartError::Validation`] and change nothing.
    #[instrument(skip(self))]
    pub async fn set_quantity(&self, id: ProductId, quantity: i64) -> Result<(), CartError> {
        debug!("Sending request");
        match self.inner.update(id, SetQuantity(quantity)).await {
            Ok(_) => Ok(()),
            Err(FrameworkError::NotFound(id)) => {
                debug!(%id, "Not in cart, quantity change skipped");
                Ok(())
            }
            Err(e) => Err(Self::map_error(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: ProductId) -> Result<(), CartError> {
        debug!("Sending request");
        match self.inner.delete(id).await {
            Ok(()) => Ok(()),
            Err(FrameworkError::NotFound(id)) => {
                debug!(%id, "Not in cart, remove skipped");
                Ok(())
            }
            Err(e) => Err(Self::map_error(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<(), CartError> {
        debug!("Sending request");
        self.inner
            .clear()
            .await
            .map(|removed| debug!(removed, "Cart cleared"))
            .map_err(Self::map_error)
    }

    /// Snapshot of the cart lines in the order they were first added.
    pub async fn items(&self) -> Result<Vec<CartItem>, CartError> {
        self.list().await
    }

    pub async fn total(&self) -> Result<Decimal, CartError> {
        Ok(self.totals().await?.total)
    }

    pub async fn item_count(&self) -> Result<u64, CartError> {
        Ok(self.totals().await?.item_count)
    }

    /// Total and item count from one read of the cart.
    #[instrument(skip(self))]
    pub async fn totals(&self) -> Result<CartTotals, CartError> {
        debug!("Sending request");
        self.inner
            .query(CartQuery::Totals)
            .await
            .map_err(Self::map_error)
    }
}
