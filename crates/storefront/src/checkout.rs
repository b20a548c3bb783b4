//! # Checkout
//!
//! Turns the cart into an order. The sequence is:
//!
//! 1. Check preconditions: a signed-in user, a complete shipping form, no
//!    checkout already processing, and a non-empty cart.
//! 2. Snapshot the cart lines and their total, and move to
//!    [`CheckoutState::Processing`].
//! 3. After the configured delay, submit the order and clear the cart, then
//!    move to [`CheckoutState::Confirmed`].
//!
//! Step 3 runs as one spawned task with a single suspension point (the
//! timer). Dropping the caller's future does not cancel it. If the task is
//! aborted or the process exits during the delay, nothing has been written:
//! the cart is intact, no order exists and the state returns to
//! [`CheckoutState::Idle`].
//!
//! Once the order is persisted the checkout is confirmed. A failure to clear
//! the cart afterwards is logged and leaves the lines in place; it does not
//! undo or repeat the order.

use crate::cart_actor::CartError;
use crate::clients::{CartClient, IdentityClient, OrderClient};
use crate::model::{CartItem, CartTotals, Order, OrderId, ShippingInfo, User};
use crate::order_actor::OrderError;
use actor_store::ActorClient;
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, info_span, instrument, Instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutState {
    Idle,
    Processing,
    Confirmed(OrderId),
}

/// Errors that can occur during checkout.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    #[error("No user is signed in")]
    NotAuthenticated,
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Shipping form incomplete, missing: {}", .0.join(", "))]
    IncompleteShipping(Vec<&'static str>),
    #[error("A checkout is already processing")]
    InProgress,
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error("Checkout task did not finish: {0}")]
    Interrupted(String),
}

/// Checkout coordinator over the identity, cart and order clients.
#[derive(Clone)]
pub struct Checkout {
    identity: IdentityClient,
    cart: CartClient,
    orders: OrderClient,
    delay: Duration,
    state: Arc<watch::Sender<CheckoutState>>,
}

impl Checkout {
    pub fn new(
        identity: IdentityClient,
        cart: CartClient,
        orders: OrderClient,
        delay: Duration,
    ) -> Self {
        let (state, _) = watch::channel(CheckoutState::Idle);
        Self {
            identity,
            cart,
            orders,
            delay,
            state: Arc::new(state),
        }
    }

    pub fn state(&self) -> CheckoutState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CheckoutState> {
        self.state.subscribe()
    }

    /// Runs the whole checkout and waits for the confirmed order.
    pub async fn place_order(&self, shipping_info: ShippingInfo) -> Result<Order, CheckoutError> {
        let task = self.start(shipping_info).await?;
        task.await
            .map_err(|e| CheckoutError::Interrupted(e.to_string()))?
    }

    /// Checks preconditions, snapshots the cart and schedules the submission.
    ///
    /// Returns once the checkout is processing; the handle resolves to the
    /// confirmed order.
    #[instrument(skip(self, shipping_info))]
    pub async fn start(
        &self,
        shipping_info: ShippingInfo,
    ) -> Result<JoinHandle<Result<Order, CheckoutError>>, CheckoutError> {
        let user = self
            .identity
            .current_user()
            .ok_or(CheckoutError::NotAuthenticated)?;
        let missing = shipping_info.missing_fields();
        if !missing.is_empty() {
            return Err(CheckoutError::IncompleteShipping(missing));
        }
        let Some(reset) = self.begin() else {
            return Err(CheckoutError::InProgress);
        };

        let items = self.cart.items().await?;
        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let totals = CartTotals::of(&items);
        info!(
            user_id = %user.id,
            lines = items.len(),
            item_count = totals.item_count,
            total = %totals.total,
            "Checkout processing"
        );

        let span = info_span!("checkout", user_id = %user.id);
        let checkout = self.clone();
        Ok(tokio::spawn(
            async move {
                checkout
                    .complete(reset, user, items, totals.total, shipping_info)
                    .await
            }
            .instrument(span),
        ))
    }

    /// Moves to `Processing` unless a checkout already is. The returned guard
    /// moves back to `Idle` when dropped without being disarmed.
    fn begin(&self) -> Option<ResetOnDrop> {
        let started = self.state.send_if_modified(|state| {
            if *state == CheckoutState::Processing {
                false
            } else {
                *state = CheckoutState::Processing;
                true
            }
        });
        started.then(|| ResetOnDrop {
            state: self.state.clone(),
            armed: true,
        })
    }

    async fn complete(
        self,
        reset: ResetOnDrop,
        user: User,
        items: Vec<CartItem>,
        total: Decimal,
        shipping_info: ShippingInfo,
    ) -> Result<Order, CheckoutError> {
        tokio::time::sleep(self.delay).await;

        match self.submit(user, items, total, shipping_info).await {
            Ok(order) => {
                info!(order_id = %order.id, total = %order.total, "Checkout confirmed");
                self.state
                    .send_replace(CheckoutState::Confirmed(order.id.clone()));
                reset.disarm();
                Ok(order)
            }
            Err(e) => {
                error!(error = %e, "Checkout failed");
                Err(e)
            }
        }
    }

    async fn submit(
        &self,
        user: User,
        items: Vec<CartItem>,
        total: Decimal,
        shipping_info: ShippingInfo,
    ) -> Result<Order, CheckoutError> {
        let id = self
            .orders
            .submit(user.id, items, total, shipping_info)
            .await?;
        if let Err(e) = self.cart.clear().await {
            error!(order_id = %id, error = %e, "Order placed but cart not cleared");
        }
        self.orders.get(id.clone()).await?.ok_or_else(|| {
            CheckoutError::Order(OrderError::ActorCommunicationError(format!(
                "order {id} missing after submit"
            )))
        })
    }
}

/// Returns the checkout state to `Idle` when dropped while armed.
struct ResetOnDrop {
    state: Arc<watch::Sender<CheckoutState>>,
    armed: bool,
}

impl ResetOnDrop {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for ResetOnDrop {
    fn drop(&mut self) {
        if self.armed {
            debug!("Checkout abandoned, back to idle");
            self.state.send_replace(CheckoutState::Idle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ADMIN_EMAIL, ADMIN_PASSWORD};
    use crate::{account_actor, cart_actor, order_actor};
    use crate::clients::CartClient;
    use actor_store::mock::MockClient;
    use actor_store::{FrameworkError, KeyValueStore, MemoryStore, StorageError};

    fn form() -> ShippingInfo {
        ShippingInfo {
            name: "Admin".into(),
            email: ADMIN_EMAIL.into(),
            phone: "555-0100".into(),
            address: "1 Main St".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            zip_code: "62701".into(),
            card_number: "4111111111111111".into(),
            expiry_date: "12/30".into(),
            cvv: "123".into(),
            card_name: "ADMIN".into(),
        }
    }

    fn checkout() -> Checkout {
        let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let (directory, identity) = account_actor::new(kv.clone(), 8);
        let (lines, cart) = cart_actor::new(kv.clone(), 8);
        let (ledger, orders) = order_actor::new(kv, 8);
        tokio::spawn(directory.run(()));
        tokio::spawn(lines.run(()));
        tokio::spawn(ledger.run(()));
        Checkout::new(identity, cart, orders, Duration::from_millis(3000))
    }

    #[tokio::test]
    async fn test_preconditions() {
        let checkout = checkout();
        assert!(matches!(
            checkout.start(form()).await,
            Err(CheckoutError::NotAuthenticated)
        ));

        assert!(checkout.identity.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap());
        let partial = ShippingInfo {
            city: String::new(),
            ..form()
        };
        assert_eq!(
            checkout.start(partial).await.unwrap_err(),
            CheckoutError::IncompleteShipping(vec!["city"])
        );
        assert_eq!(
            checkout.start(form()).await.unwrap_err(),
            CheckoutError::EmptyCart
        );
        assert_eq!(checkout.state(), CheckoutState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_checkout_while_processing_is_rejected() {
        let checkout = checkout();
        checkout.identity.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();
        checkout
            .cart
            .add("1".into(), "Smartphone", Decimal::new(129999, 2), "")
            .await
            .unwrap();

        let task = checkout.start(form()).await.unwrap();
        assert_eq!(checkout.state(), CheckoutState::Processing);
        assert_eq!(
            checkout.start(form()).await.unwrap_err(),
            CheckoutError::InProgress
        );

        let order = task.await.unwrap().unwrap();
        assert_eq!(checkout.state(), CheckoutState::Confirmed(order.id.clone()));
        assert_eq!(order.total, Decimal::new(129999, 2));
        assert!(checkout.cart.items().await.unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_aborted_checkout_can_be_started_again() {
        let checkout = checkout();
        checkout.identity.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();
        checkout
            .cart
            .add("1".into(), "Smartphone", Decimal::new(129999, 2), "")
            .await
            .unwrap();

        let task = checkout.start(form()).await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        task.abort();
        assert!(task.await.unwrap_err().is_cancelled());
        assert_eq!(checkout.state(), CheckoutState::Idle);

        let order = checkout.place_order(form()).await.unwrap();
        assert_eq!(checkout.state(), CheckoutState::Confirmed(order.id));
    }

    #[tokio::test(start_paused = true)]
    async fn test_order_stands_when_cart_clear_fails() {
        let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let (directory, identity) = account_actor::new(kv.clone(), 8);
        let (ledger, orders) = order_actor::new(kv, 8);
        tokio::spawn(directory.run(()));
        tokio::spawn(ledger.run(()));

        let line = CartItem {
            id: "1".into(),
            name: "Smartphone".into(),
            price: Decimal::new(129999, 2),
            image: String::new(),
            quantity: 1,
        };
        let mut mock = MockClient::<CartItem>::new();
        mock.expect_list().return_ok(vec![line.clone()]);
        mock.expect_clear()
            .return_err(FrameworkError::Storage(StorageError::Unavailable(
                "disk full".into(),
            )));

        let cart = CartClient::new(mock.client());
        let checkout = Checkout::new(identity, cart, orders.clone(), Duration::from_millis(3000));
        checkout.identity.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();

        let order = checkout.place_order(form()).await.unwrap();
        assert_eq!(order.items, vec![line]);
        assert_eq!(checkout.state(), CheckoutState::Confirmed(order.id.clone()));
        assert_eq!(orders.list().await.unwrap(), vec![order]);
        mock.verify();
    }
}
