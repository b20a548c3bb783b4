use actor_store::{ActorClient, KeyValueStore, MemoryStore};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use storefront::checkout::{CheckoutError, CheckoutState};
use storefront::config::StoreConfig;
use storefront::lifecycle::StoreSystem;
use storefront::model::{OrderStatus, ShippingInfo, ADMIN_EMAIL, ADMIN_PASSWORD};

fn form() -> ShippingInfo {
    ShippingInfo {
        name: "Alice".into(),
        email: "alice@example.com".into(),
        phone: "555-0100".into(),
        address: "1 Main St".into(),
        city: "Springfield".into(),
        state: "IL".into(),
        zip_code: "62701".into(),
        card_number: "4111111111111111".into(),
        expiry_date: "12/30".into(),
        cvv: "123".into(),
        card_name: "ALICE".into(),
    }
}

async fn shopping_system(kv: &MemoryStore) -> StoreSystem {
    let system = StoreSystem::with_store(Arc::new(kv.clone()), &StoreConfig::default());
    assert!(system
        .identity
        .register("Alice", "alice@example.com", "pw")
        .await
        .unwrap());

    let cart = &system.cart;
    cart.add("1".into(), "Ten", Decimal::new(1000, 2), "").await.unwrap();
    cart.add("1".into(), "Ten", Decimal::new(1000, 2), "").await.unwrap();
    cart.add("2".into(), "Five", Decimal::new(500, 2), "").await.unwrap();
    system
}

#[tokio::test(start_paused = true)]
async fn test_checkout_turns_cart_into_one_order() {
    let kv = MemoryStore::new();
    let system = shopping_system(&kv).await;
    let user = system.identity.current_user().unwrap();

    let snapshot = system.cart.items().await.unwrap();
    assert_eq!(system.cart.total().await.unwrap(), Decimal::new(2500, 2));

    let order = system.checkout.place_order(form()).await.unwrap();

    assert_eq!(order.total, Decimal::new(2500, 2));
    assert_eq!(order.items, snapshot);
    assert_eq!(order.user_id, user.id);
    assert_eq!(order.status, OrderStatus::Confirmed);
    assert_eq!(order.shipping_info, form());

    let ledger = system.orders.list().await.unwrap();
    assert_eq!(ledger, vec![order.clone()]);
    assert!(system.cart.items().await.unwrap().is_empty());
    assert_eq!(
        system.checkout.state(),
        CheckoutState::Confirmed(order.id.clone())
    );
    assert_eq!(
        system.orders.list_for_user(user.id).await.unwrap(),
        vec![order]
    );
}

#[tokio::test(start_paused = true)]
async fn test_checkout_waits_for_the_configured_delay() {
    let kv = MemoryStore::new();
    let system = shopping_system(&kv).await;
    let mut states = system.checkout.subscribe();

    let started = tokio::time::Instant::now();
    let task = system.checkout.start(form()).await.unwrap();
    assert_eq!(*states.borrow_and_update(), CheckoutState::Processing);

    // Nothing is written while the delay runs
    tokio::time::sleep(Duration::from_millis(2999)).await;
    assert!(kv.get("orders").unwrap().is_none());
    assert_eq!(system.cart.item_count().await.unwrap(), 3);

    let order = task.await.unwrap().unwrap();
    assert!(started.elapsed() >= Duration::from_millis(3000));
    states.changed().await.unwrap();
    assert_eq!(*states.borrow(), CheckoutState::Confirmed(order.id));
}

#[tokio::test(start_paused = true)]
async fn test_interrupted_checkout_leaves_no_trace() {
    let kv = MemoryStore::new();
    let system = shopping_system(&kv).await;
    let cart_before = kv.get("cartItems").unwrap();

    let task = system.checkout.start(form()).await.unwrap();
    tokio::time::sleep(Duration::from_millis(1000)).await;
    task.abort();
    assert!(task.await.unwrap_err().is_cancelled());
    assert_eq!(system.checkout.state(), CheckoutState::Idle);

    // The same checkout accepts a new attempt, which can be interrupted too
    let retry = system.checkout.start(form()).await.unwrap();
    assert_eq!(system.checkout.state(), CheckoutState::Processing);
    retry.abort();
    assert!(retry.await.unwrap_err().is_cancelled());
    assert_eq!(system.checkout.state(), CheckoutState::Idle);
    system.shutdown().await.unwrap();

    // A fresh process over the same storage sees the cart and no order
    let restarted = StoreSystem::with_store(Arc::new(kv.clone()), &StoreConfig::default());
    assert_eq!(restarted.cart.item_count().await.unwrap(), 3);
    assert!(restarted.orders.list().await.unwrap().is_empty());
    assert_eq!(kv.get("cartItems").unwrap(), cart_before);
    assert_eq!(restarted.checkout.state(), CheckoutState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_checkout_preconditions() {
    let kv = MemoryStore::new();
    let system = StoreSystem::with_store(Arc::new(kv.clone()), &StoreConfig::default());

    assert_eq!(
        system.checkout.place_order(form()).await.unwrap_err(),
        CheckoutError::NotAuthenticated
    );

    system
        .identity
        .login(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .unwrap();
    assert_eq!(
        system.checkout.place_order(form()).await.unwrap_err(),
        CheckoutError::EmptyCart
    );
    assert_eq!(
        system
            .checkout
            .place_order(ShippingInfo::default())
            .await
            .unwrap_err(),
        CheckoutError::IncompleteShipping(vec![
            "name",
            "email",
            "phone",
            "address",
            "city",
            "state",
            "zipCode",
            "cardNumber",
            "expiryDate",
            "cvv",
            "cardName",
        ])
    );
    assert!(kv.get("orders").unwrap().is_none());
}
