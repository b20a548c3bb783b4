//! # Catalog Client
//!
//! Provides a high‑level API for interacting with the catalog actor.
//! It wraps a `ResourceClient<Product>` and exposes domain‑specific methods.
//! Lookups by id come from [`ActorClient::get`].
use crate::catalog_actor::{CatalogError, CatalogQuery, CatalogQueryResult};
use crate::model::{Product, ProductCreate, ProductFilter, ProductId, ProductUpdate};
use actor_store::ActorClient;
use actor_store::{FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Product>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<CatalogError>() {
                Ok(e) => *e,
                Err(other) => CatalogError::ActorCommunicationError(other.to_string()),
            },
            FrameworkError::Storage(e) => CatalogError::Storage(e.to_string()),
            other => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CatalogClient {
    /// Adds a product under a fresh id.
    #[instrument(skip(self))]
    pub async fn add(&self, params: ProductCreate) -> Result<ProductId, CatalogError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Merges `update` into the product. Resolves to `None` when no product
    /// has this id.
    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Option<Product>, CatalogError> {
        debug!("Sending request");
        match self.inner.update(id, update).await {
            Ok(product) => Ok(product),
            Err(FrameworkError::NotFound(id)) => {
                debug!(%id, "No such product, update skipped");
                Ok(None)
            }
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Removes the product. Cart lines and orders keep their copies.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: ProductId) -> Result<(), CatalogError> {
        debug!("Sending request");
        match self.inner.delete(id).await {
            Ok(()) => Ok(()),
            Err(FrameworkError::NotFound(id)) => {
                debug!(%id, "No such product, delete skipped");
                Ok(())
            }
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Distinct categories, in order of first appearance.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        match self.query(CatalogQuery::Categories).await? {
            CatalogQueryResult::Categories(categories) => Ok(categories),
            _ => unreachable!("Categories query must return Categories result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn count(&self) -> Result<usize, CatalogError> {
        match self.query(CatalogQuery::Count).await? {
            CatalogQueryResult::Count(count) => Ok(count),
            _ => unreachable!("Count query must return Count result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn search(&self, filter: ProductFilter) -> Result<Vec<Product>, CatalogError> {
        match self.query(CatalogQuery::Search(filter)).await? {
            CatalogQueryResult::Products(products) => Ok(products),
            _ => unreachable!("Search query must return Products result"),
        }
    }

    async fn query(&self, query: CatalogQuery) -> Result<CatalogQueryResult, CatalogError> {
        debug!("Sending request");
        self.inner.query(query).await.map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_store::mock::{create_mock_client, expect_query, MockClient};
    use actor_store::StorageError;

    #[tokio::test]
    async fn test_update_of_missing_product_is_a_no_op() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_update()
            .return_err(FrameworkError::NotFound("404".into()));
        mock.expect_delete()
            .return_err(FrameworkError::NotFound("404".into()));

        let client = CatalogClient::new(mock.client());
        let updated = client
            .update("404".into(), ProductUpdate::default())
            .await
            .unwrap();
        assert!(updated.is_none());
        client.delete("404".into()).await.unwrap();
        mock.verify();
    }

    #[tokio::test]
    async fn test_entity_errors_keep_their_type() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(
                CatalogError::Validation("price must not be negative".into()),
            )));
        mock.expect_delete()
            .return_err(FrameworkError::Storage(StorageError::Unavailable(
                "disk full".into(),
            )));

        let client = CatalogClient::new(mock.client());
        let params = ProductCreate {
            name: "Broken".into(),
            description: String::new(),
            price: rust_decimal::Decimal::NEGATIVE_ONE,
            category: "Misc".into(),
            image: String::new(),
            rating: rust_decimal::Decimal::ZERO,
            reviews: 0,
            in_stock: false,
        };
        assert!(matches!(
            client.add(params).await,
            Err(CatalogError::Validation(_))
        ));
        assert!(matches!(
            client.delete("1".into()).await,
            Err(CatalogError::Storage(_))
        ));
    }

    #[tokio::test]
    async fn test_categories_sends_categories_query() {
        let (generic, mut receiver) = create_mock_client::<Product>(10);
        let client = CatalogClient::new(generic);

        let task = tokio::spawn(async move { client.categories().await });

        let (query, responder) = expect_query(&mut receiver)
            .await
            .expect("Expected Query request");
        assert_eq!(query, CatalogQuery::Categories);
        responder
            .send(Ok(CatalogQueryResult::Categories(vec!["Roupas".into()])))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap(), vec!["Roupas".to_string()]);
    }
}
