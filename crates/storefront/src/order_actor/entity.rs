//! [`ActorEntity`] implementation for the [`Order`] domain type.

use super::error::OrderError;
use super::queries::{OrderQuery, OrderQueryResult};
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, OrderSummary, OrderUpdate};
use actor_store::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

/// Orders matching `keep`, newest first. Orders sharing a timestamp come out
/// latest-submitted first.
fn newest_first<'a>(items: &'a [Order], keep: impl Fn(&Order) -> bool) -> Vec<Order> {
    let mut orders: Vec<&'a Order> = items.iter().rev().filter(|order| keep(*order)).collect();
    orders.sort_by(|a, b| b.date.cmp(&a.date));
    orders.into_iter().cloned().collect()
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = ();
    type ActionResult = ();
    type Query = OrderQuery;
    type QueryResult = OrderQueryResult;
    type Context = ();
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// Stamps the order with the current time in `confirmed` state.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Order {
            id,
            user_id: params.user_id,
            items: params.items,
            total: params.total,
            date: Utc::now(),
            status: OrderStatus::Confirmed,
            shipping_info: params.shipping_info,
        })
    }

    async fn on_update(&mut self, update: OrderUpdate, _ctx: &()) -> Result<(), OrderError> {
        match update {}
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), OrderError> {
        Ok(())
    }

    fn handle_query(items: &[Self], query: OrderQuery) -> OrderQueryResult {
        match query {
            OrderQuery::ForUser(user_id) => {
                OrderQueryResult::Orders(newest_first(items, |order| order.user_id == user_id))
            }
            OrderQuery::Summary => OrderQueryResult::Summary(OrderSummary {
                count: items.len(),
                total_revenue: items
                    .iter()
                    .fold(Decimal::ZERO, |acc, order| acc.saturating_add(order.total)),
            }),
            OrderQuery::Recent(limit) => {
                let mut orders = newest_first(items, |_| true);
                orders.truncate(limit);
                OrderQueryResult::Orders(orders)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ShippingInfo, UserId};
    use chrono::{Duration, TimeZone};
    use rust_decimal::Decimal;

    fn order(id: &str, user: &str, total: i64, minutes: i64) -> Order {
        let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        Order {
            id: id.into(),
            user_id: user.into(),
            items: Vec::new(),
            total: Decimal::new(total, 2),
            date: base + Duration::minutes(minutes),
            status: OrderStatus::Confirmed,
            shipping_info: ShippingInfo::default(),
        }
    }

    fn ids(result: OrderQueryResult) -> Vec<String> {
        match result {
            OrderQueryResult::Orders(orders) => orders.into_iter().map(|o| o.id.0).collect(),
            other => panic!("expected orders, got {other:?}"),
        }
    }

    #[test]
    fn test_for_user_filters_and_sorts_newest_first() {
        let ledger = vec![
            order("a", "u1", 100, 0),
            order("b", "u2", 200, 5),
            order("c", "u1", 300, 10),
            order("d", "u1", 400, 10),
        ];
        let result = Order::handle_query(&ledger, OrderQuery::ForUser(UserId::from("u1")));
        assert_eq!(ids(result), ["d", "c", "a"]);
    }

    #[test]
    fn test_summary_and_recent() {
        let ledger = vec![
            order("a", "u1", 1000, 0),
            order("b", "u2", 2550, 5),
            order("c", "u3", 50, 10),
        ];
        assert_eq!(
            Order::handle_query(&ledger, OrderQuery::Summary),
            OrderQueryResult::Summary(OrderSummary {
                count: 3,
                total_revenue: Decimal::new(3600, 2),
            })
        );
        assert_eq!(ids(Order::handle_query(&ledger, OrderQuery::Recent(2))), ["c", "b"]);
        assert!(ids(Order::handle_query(&[], OrderQuery::Recent(10))).is_empty());
    }

    #[test]
    fn test_created_orders_are_confirmed() {
        let created = Order::from_create_params(
            "o1".into(),
            OrderCreate {
                user_id: "ghost".into(),
                items: Vec::new(),
                total: Decimal::ZERO,
                shipping_info: ShippingInfo::default(),
            },
        )
        .unwrap();
        assert_eq!(created.status, OrderStatus::Confirmed);
        assert_eq!(created.user_id, UserId::from("ghost"));
    }
}
