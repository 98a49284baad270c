use kitchen_orders::clients::ClientDirectory;
use kitchen_orders::framework::ActorClient;
use kitchen_orders::identity::Principal;
use kitchen_orders::lifecycle::{KitchenConfig, KitchenSystem};
use kitchen_orders::model::{
    Client, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate, NewClient, OrderId, OrderLine,
    OrderStatus, PlaceOrderRequest,
};
use kitchen_orders::order_actor::OrderError;
use rust_decimal::Decimal;
use std::collections::HashSet;

struct Kitchen {
    system: KitchenSystem,
    burger: MenuItem,
    fries: MenuItem,
    client: Client,
}

/// Starts a system with a Burger at 10.00, Fries at 5.00 and one client.
async fn kitchen() -> Kitchen {
    let system = KitchenSystem::new(&KitchenConfig::default());
    let burger = system
        .menu_client
        .create_menu_item(MenuItemCreate::new("Burger", Decimal::new(1000, 2)))
        .await
        .expect("Failed to create burger");
    let fries = system
        .menu_client
        .create_menu_item(MenuItemCreate::new("Fries", Decimal::new(500, 2)))
        .await
        .expect("Failed to create fries");
    let client = system
        .client_directory
        .create_client(NewClient::named("Alice"))
        .await
        .expect("Failed to create client");
    Kitchen {
        system,
        burger,
        fries,
        client,
    }
}

fn by_passcode(passcode: &str, lines: Vec<OrderLine>) -> PlaceOrderRequest {
    PlaceOrderRequest {
        passcode: Some(passcode.to_string()),
        order_items: lines,
        ..Default::default()
    }
}

/// Full end-to-end placement with all real actors.
#[tokio::test]
async fn test_place_order_prices_lines() {
    let k = kitchen().await;

    let request = by_passcode(
        &k.client.passcode,
        vec![OrderLine::new(k.burger.id, 2), OrderLine::new(k.fries.id, 1)],
    );
    let details = k
        .system
        .order_client
        .place_order(Principal::SelfService, request)
        .await
        .expect("Failed to place order");

    let order = &details.order;
    assert_eq!(order.total_amount, Decimal::new(2500, 2));
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.client_id, k.client.id);
    assert_eq!(order.order_items.len(), 2);
    assert_eq!(order.order_items[0].item_name, "Burger");
    assert_eq!(order.order_items[0].subtotal, Decimal::new(2000, 2));
    assert_eq!(order.order_items[1].subtotal, Decimal::new(500, 2));
    assert!(order.order_items.iter().all(|item| item.order_id == order.id));
    assert_eq!(details.client.as_ref().map(|c| c.id), Some(k.client.id));

    let stored = k.system.order_client.get_order(order.id).await.unwrap();
    assert_eq!(stored, details);

    k.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_admin_places_order_by_client_id() {
    let k = kitchen().await;

    let request = PlaceOrderRequest {
        client_id: Some(k.client.id),
        notes: Some("table 4".into()),
        order_items: vec![OrderLine::new(k.fries.id, 3)],
        ..Default::default()
    };
    let details = k
        .system
        .order_client
        .place_order(Principal::Administrator, request)
        .await
        .unwrap();

    assert_eq!(details.order.total_amount, Decimal::new(1500, 2));
    assert_eq!(details.order.notes.as_deref(), Some("table 4"));
}

#[tokio::test]
async fn test_unavailable_item_leaves_no_order() {
    let k = kitchen().await;
    k.system
        .menu_client
        .update_menu_item(
            k.fries.id,
            MenuItemUpdate {
                available: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let request = by_passcode(
        &k.client.passcode,
        vec![OrderLine::new(k.burger.id, 2), OrderLine::new(k.fries.id, 1)],
    );
    let result = k
        .system
        .order_client
        .place_order(Principal::SelfService, request)
        .await;

    assert_eq!(
        result,
        Err(OrderError::ItemUnavailable {
            id: k.fries.id,
            name: "Fries".into()
        })
    );
    assert!(k.system.order_client.list_orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_menu_item_leaves_no_order() {
    let k = kitchen().await;

    let request = by_passcode(
        &k.client.passcode,
        vec![OrderLine::new(k.burger.id, 1), OrderLine::new(MenuItemId(99), 1)],
    );
    let result = k
        .system
        .order_client
        .place_order(Principal::SelfService, request)
        .await;

    assert_eq!(result, Err(OrderError::InvalidReference(MenuItemId(99))));
    assert!(k.system.order_client.list_orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_passcode_is_rejected() {
    let k = kitchen().await;
    // Pick a passcode nobody holds
    let passcode = if k.client.passcode == "9999" { "0000" } else { "9999" };

    let request = by_passcode(passcode, vec![OrderLine::new(k.burger.id, 1)]);
    let result = k
        .system
        .order_client
        .place_order(Principal::SelfService, request)
        .await;

    assert_eq!(result, Err(OrderError::InvalidCredential));
    assert!(k.system.order_client.list_orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_admin_unknown_client_is_not_found() {
    let k = kitchen().await;

    let request = PlaceOrderRequest {
        client_id: Some(kitchen_orders::model::ClientId(42)),
        order_items: vec![OrderLine::new(k.burger.id, 1)],
        ..Default::default()
    };
    let result = k
        .system
        .order_client
        .place_order(Principal::Administrator, request)
        .await;

    assert_eq!(result, Err(OrderError::NotFound("client_42".into())));
}

#[tokio::test]
async fn test_set_status_changes_only_status() {
    let k = kitchen().await;
    let request = by_passcode(
        &k.client.passcode,
        vec![OrderLine::new(k.burger.id, 2), OrderLine::new(k.fries.id, 1)],
    );
    let placed = k
        .system
        .order_client
        .place_order(Principal::SelfService, request)
        .await
        .unwrap();

    let delivered = k
        .system
        .order_client
        .set_status(placed.order.id, "Delivered")
        .await
        .unwrap();

    assert_eq!(delivered.order.status, OrderStatus::Delivered);
    assert_eq!(delivered.order.total_amount, placed.order.total_amount);
    assert_eq!(delivered.order.order_items, placed.order.order_items);
    assert_eq!(delivered.order.order_date, placed.order.order_date);

    // Any allowed status may follow any other
    let back = k
        .system
        .order_client
        .set_status(placed.order.id, "Pending")
        .await
        .unwrap();
    assert_eq!(back.order.status, OrderStatus::Pending);
}

#[tokio::test]
async fn test_invalid_status_leaves_order_unchanged() {
    let k = kitchen().await;
    let request = by_passcode(&k.client.passcode, vec![OrderLine::new(k.burger.id, 1)]);
    let placed = k
        .system
        .order_client
        .place_order(Principal::SelfService, request)
        .await
        .unwrap();

    let result = k.system.order_client.set_status(placed.order.id, "Shipped").await;
    assert_eq!(result, Err(OrderError::InvalidStatus("Shipped".into())));

    let stored = k.system.order_client.get_order(placed.order.id).await.unwrap();
    assert_eq!(stored.order.status, OrderStatus::Pending);

    let missing = k.system.order_client.set_status(OrderId(99), "Ready").await;
    assert_eq!(missing, Err(OrderError::NotFound("order_99".into())));
}

#[tokio::test]
async fn test_configured_status_set_is_enforced() {
    let mut config = KitchenConfig::default();
    config.orders.allowed_statuses = vec![OrderStatus::Pending, OrderStatus::Delivered];
    let system = KitchenSystem::new(&config);
    let item = system
        .menu_client
        .create_menu_item(MenuItemCreate::new("Tea", Decimal::new(250, 2)))
        .await
        .unwrap();
    let client = system
        .client_directory
        .create_client(NewClient::named("Bob"))
        .await
        .unwrap();
    let placed = system
        .order_client
        .place_order(
            Principal::SelfService,
            by_passcode(&client.passcode, vec![OrderLine::new(item.id, 1)]),
        )
        .await
        .unwrap();

    let result = system.order_client.set_status(placed.order.id, "Ready").await;
    assert_eq!(result, Err(OrderError::InvalidStatus("Ready".into())));
    assert!(system
        .order_client
        .set_status(placed.order.id, "Delivered")
        .await
        .is_ok());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_menu_price_change_does_not_touch_orders() {
    let k = kitchen().await;
    let request = by_passcode(&k.client.passcode, vec![OrderLine::new(k.burger.id, 2)]);
    let placed = k
        .system
        .order_client
        .place_order(Principal::SelfService, request)
        .await
        .unwrap();

    k.system
        .menu_client
        .update_menu_item(
            k.burger.id,
            MenuItemUpdate {
                price: Some(Decimal::new(1500, 2)),
                name: Some("Deluxe Burger".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let stored = k.system.order_client.get_order(placed.order.id).await.unwrap();
    assert_eq!(stored.order.total_amount, Decimal::new(2000, 2));
    assert_eq!(stored.order.order_items[0].item_price, Decimal::new(1000, 2));
    assert_eq!(stored.order.order_items[0].item_name, "Burger");
}

#[tokio::test]
async fn test_passcodes_are_unique_four_digits() {
    let system = KitchenSystem::new(&KitchenConfig::default());
    let mut seen = HashSet::new();

    for i in 0..200 {
        let client = system
            .client_directory
            .create_client(NewClient::named(format!("Guest {i}")))
            .await
            .unwrap();
        assert_eq!(client.passcode.len(), 4);
        assert!(client.passcode.chars().all(|c| c.is_ascii_digit()));
        assert!(seen.insert(client.passcode), "passcode reused");
    }
    assert_eq!(system.client_directory.list().await.unwrap().len(), 200);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_registrations_get_distinct_passcodes() {
    let system = KitchenSystem::new(&KitchenConfig::default());

    let tasks: Vec<_> = (0..50)
        .map(|i| {
            let directory: ClientDirectory = system.client_directory.clone();
            tokio::spawn(async move { directory.create_client(NewClient::named(format!("C{i}"))).await })
        })
        .collect();

    let mut passcodes = HashSet::new();
    for task in tasks {
        let client = task.await.unwrap().unwrap();
        assert!(passcodes.insert(client.passcode));
    }
    assert_eq!(passcodes.len(), 50);
}

#[tokio::test]
async fn test_delete_order_removes_it() {
    let k = kitchen().await;
    let request = by_passcode(&k.client.passcode, vec![OrderLine::new(k.fries.id, 1)]);
    let placed = k
        .system
        .order_client
        .place_order(Principal::SelfService, request)
        .await
        .unwrap();

    k.system.order_client.delete_order(placed.order.id).await.unwrap();

    assert_eq!(
        k.system.order_client.get_order(placed.order.id).await,
        Err(OrderError::NotFound(placed.order.id.to_string()))
    );
    assert_eq!(
        k.system.order_client.delete_order(placed.order.id).await,
        Err(OrderError::NotFound(placed.order.id.to_string()))
    );
}

#[tokio::test]
async fn test_client_orders_returns_only_own_orders() {
    let k = kitchen().await;
    let other = k
        .system
        .client_directory
        .create_client(NewClient::named("Bob"))
        .await
        .unwrap();

    for passcode in [&k.client.passcode, &other.passcode, &k.client.passcode] {
        k.system
            .order_client
            .place_order(
                Principal::SelfService,
                by_passcode(passcode, vec![OrderLine::new(k.burger.id, 1)]),
            )
            .await
            .unwrap();
    }

    let mine = k.system.order_client.client_orders(&k.client.passcode).await.unwrap();
    assert_eq!(mine.len(), 2);
    for details in &mine {
        assert_eq!(details.order.client_id, k.client.id);
        assert_eq!(details.client.as_ref(), Some(&k.client));
    }

    let all = k.system.order_client.list_orders().await.unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|details| details.client.is_some()));

    let nobody = if k.client.passcode == "9999" || other.passcode == "9999" { "0000" } else { "9999" };
    let rejected = k.system.order_client.client_orders(nobody).await;
    assert_eq!(rejected, Err(OrderError::InvalidCredential));
}

#[tokio::test]
async fn test_identical_requests_create_distinct_orders() {
    let k = kitchen().await;

    let tasks: Vec<_> = (0..10)
        .map(|_| {
            let orders = k.system.order_client.clone();
            let request = by_passcode(&k.client.passcode, vec![OrderLine::new(k.burger.id, 1)]);
            tokio::spawn(async move { orders.place_order(Principal::SelfService, request).await })
        })
        .collect();

    let mut ids = HashSet::new();
    for task in tasks {
        ids.insert(task.await.unwrap().unwrap().order.id);
    }
    assert_eq!(ids.len(), 10);
}

#[tokio::test]
async fn test_dashboard_statistics() {
    let k = kitchen().await;

    let empty = k.system.stats.snapshot().await;
    assert_eq!(empty.revenue_today, Decimal::ZERO);
    assert_eq!(empty.total_orders, 0);
    assert!(empty.orders_by_status.is_empty());

    let orders = &k.system.order_client;
    let first = orders
        .place_order(
            Principal::SelfService,
            by_passcode(
                &k.client.passcode,
                vec![OrderLine::new(k.burger.id, 2), OrderLine::new(k.fries.id, 1)],
            ),
        )
        .await
        .unwrap();
    orders
        .place_order(
            Principal::SelfService,
            by_passcode(&k.client.passcode, vec![OrderLine::new(k.fries.id, 1)]),
        )
        .await
        .unwrap();
    orders.set_status(first.order.id, "Delivered").await.unwrap();

    let stats = k.system.stats.snapshot().await;
    assert_eq!(stats.total_menus, 2);
    assert_eq!(stats.total_clients, 1);
    assert_eq!(stats.total_orders, 2);
    assert_eq!(stats.pending_orders, 1);
    assert_eq!(stats.revenue_today, Decimal::new(3000, 2));

    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["orders_by_status"][0]["status"], "Pending");
    assert_eq!(json["orders_by_status"][0]["count"], 1);
    assert_eq!(json["orders_by_status"][1]["status"], "Delivered");
}
