//! Read-only views over the ledger.

use crate::model::{Order, OrderSummary, UserId};

#[derive(Debug, Clone, PartialEq)]
pub enum OrderQuery {
    /// Orders placed by one user, newest first.
    ForUser(UserId),
    /// Order count and revenue over the whole ledger.
    Summary,
    /// The newest orders across all users, at most `limit` of them.
    Recent(usize),
}

/// Results of ledger queries.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderQueryResult {
    Orders(Vec<Order>),
    Summary(OrderSummary),
}
