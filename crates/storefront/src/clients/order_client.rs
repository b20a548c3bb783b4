//! # Order Client
//!
//! Provides a high‑level API for interacting with the order ledger.
use crate::model::{CartItem, Order, OrderCreate, OrderId, OrderSummary, ShippingInfo, UserId};
use crate::order_actor::{OrderError, OrderQuery, OrderQueryResult};
use actor_store::ActorClient;
use actor_store::{FrameworkError, ResourceClient};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::Storage(e) => OrderError::Storage(e.to_string()),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl OrderClient {
    /// Appends a confirmed order stamped with the current time.
    #[instrument(skip(self, items, shipping_info), fields(lines = items.len()))]
    pub async fn submit(
        &self,
        user_id: UserId,
        items: Vec<CartItem>,
        total: Decimal,
        shipping_info: ShippingInfo,
    ) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        let params = OrderCreate {
            user_id,
            items,
            total,
            shipping_info,
        };
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Orders placed by `user_id`, newest first.
    #[instrument(skip(self))]
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, OrderError> {
        match self.query(OrderQuery::ForUser(user_id)).await? {
            OrderQueryResult::Orders(orders) => Ok(orders),
            _ => unreachable!("ForUser query must return Orders result"),
        }
    }

    /// Order count and revenue over the whole ledger.
    #[instrument(skip(self))]
    pub async fn aggregate(&self) -> Result<OrderSummary, OrderError> {
        match self.query(OrderQuery::Summary).await? {
            OrderQueryResult::Summary(summary) => Ok(summary),
            _ => unreachable!("Summary query must return Summary result"),
        }
    }

    /// The `limit` newest orders across all users.
    #[instrument(skip(self))]
    pub async fn recent(&self, limit: usize) -> Result<Vec<Order>, OrderError> {
        match self.query(OrderQuery::Recent(limit)).await? {
            OrderQueryResult::Orders(orders) => Ok(orders),
            _ => unreachable!("Recent query must return Orders result"),
        }
    }

    async fn query(&self, query: OrderQuery) -> Result<OrderQueryResult, OrderError> {
        debug!("Sending request");
        self.inner.query(query).await.map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_store::mock::{create_mock_client, expect_create, expect_query, MockClient};
    use actor_store::StorageError;

    fn line(id: &str, price: i64, quantity: u32) -> CartItem {
        CartItem {
            id: id.into(),
            name: format!("product {id}"),
            price: Decimal::new(price, 2),
            image: String::new(),
            quantity,
        }
    }

    #[tokio::test]
    async fn test_submit_sends_owned_snapshot() {
        let (generic, mut receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(generic);
        let items = vec![line("1", 1000, 2), line("2", 500, 1)];

        let task = {
            let items = items.clone();
            tokio::spawn(async move {
                client
                    .submit(
                        "u1".into(),
                        items,
                        Decimal::new(2500, 2),
                        ShippingInfo::default(),
                    )
                    .await
            })
        };

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.user_id, UserId::from("u1"));
        assert_eq!(params.items, items);
        assert_eq!(params.total, Decimal::new(2500, 2));
        responder.send(Ok("o1".into())).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), OrderId::from("o1"));
    }

    #[tokio::test]
    async fn test_list_for_user_sends_user_filter() {
        let (generic, mut receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(generic);

        let task = tokio::spawn(async move { client.list_for_user("u7".into()).await });

        let (query, responder) = expect_query(&mut receiver)
            .await
            .expect("Expected Query request");
        assert_eq!(query, OrderQuery::ForUser("u7".into()));
        responder.send(Ok(OrderQueryResult::Orders(Vec::new()))).unwrap();

        assert!(task.await.unwrap().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_storage_failure_is_reported() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create()
            .return_err(FrameworkError::Storage(StorageError::Unavailable(
                "read-only".into(),
            )));

        let client = OrderClient::new(mock.client());
        let result = client
            .submit("u1".into(), Vec::new(), Decimal::ZERO, ShippingInfo::default())
            .await;
        assert!(matches!(result, Err(OrderError::Storage(_))));
        mock.verify();
    }
}
