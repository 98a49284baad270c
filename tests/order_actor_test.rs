use kitchen_orders::clients::{ClientDirectory, MenuClient, OrderClient};
use kitchen_orders::framework::mock::MockClient;
use kitchen_orders::framework::{ActorClient, FrameworkError};
use kitchen_orders::identity::{IdentityResolver, PasscodeResolver, Principal};
use kitchen_orders::model::{
    Client, ClientId, MenuItem, MenuItemId, OrderLine, OrderStatus, PlaceOrderRequest,
};
use kitchen_orders::order_actor::{self, OrderError, PlacementContext};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Real Order actor with mocked Client and Menu tables.
///
/// The placement logic runs in `Order::from_create_params`; the mocks script
/// exactly which client and menu rows it sees.
struct Harness {
    clients: MockClient<Client>,
    menu: MockClient<MenuItem>,
    orders: OrderClient,
    handle: tokio::task::JoinHandle<()>,
}

fn harness() -> Harness {
    let clients = MockClient::<Client>::new();
    let menu = MockClient::<MenuItem>::new();

    let directory = ClientDirectory::new(clients.client());
    let resolver: Arc<dyn IdentityResolver> = Arc::new(PasscodeResolver::new(directory.clone()));
    let menu_client = MenuClient::new(menu.client());

    let (order_actor, generic) = order_actor::new(8);
    let handle = tokio::spawn(order_actor.run(PlacementContext::new(resolver.clone(), menu_client)));
    let orders = OrderClient::new(generic, directory, resolver, OrderStatus::ALL.to_vec());

    Harness {
        clients,
        menu,
        orders,
        handle,
    }
}

fn request(lines: Vec<OrderLine>) -> PlaceOrderRequest {
    PlaceOrderRequest {
        passcode: Some("4821".into()),
        order_items: lines,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_order_actor_with_mocked_dependencies() {
    let mut h = harness();
    let ana = Client::new(ClientId(1), "Ana", "4821");

    h.clients.expect_find_unique().return_ok(Some(ana.clone()));
    h.menu
        .expect_get(MenuItemId(1))
        .return_ok(Some(MenuItem::new(MenuItemId(1), "Burger", Decimal::new(1000, 2))));
    h.menu
        .expect_get(MenuItemId(2))
        .return_ok(Some(MenuItem::new(MenuItemId(2), "Fries", Decimal::new(500, 2))));
    // Attaching the client to the response
    h.clients.expect_get(ClientId(1)).return_ok(Some(ana));

    let details = h
        .orders
        .place_order(
            Principal::SelfService,
            request(vec![
                OrderLine::new(MenuItemId(1), 2),
                OrderLine::new(MenuItemId(2), 1),
            ]),
        )
        .await
        .expect("Order placement failed");

    assert_eq!(details.order.total_amount, Decimal::new(2500, 2));
    assert_eq!(details.order.status, OrderStatus::Pending);
    assert_eq!(details.client.map(|c| c.name), Some("Ana".to_string()));

    // The order is stored in the real actor
    let stored = h.orders.get(details.order.id).await.unwrap().unwrap();
    assert_eq!(stored.order_items.len(), 2);

    h.clients.verify();
    h.menu.verify();

    drop(h.orders);
    h.handle.await.unwrap();
}

#[tokio::test]
async fn test_first_bad_line_aborts_placement() {
    let mut h = harness();

    h.clients
        .expect_find_unique()
        .return_ok(Some(Client::new(ClientId(1), "Ana", "4821")));
    h.menu.expect_get(MenuItemId(1)).return_ok(None);

    let result = h
        .orders
        .place_order(
            Principal::SelfService,
            request(vec![
                OrderLine::new(MenuItemId(1), 1),
                OrderLine::new(MenuItemId(2), 1),
            ]),
        )
        .await;

    assert_eq!(result, Err(OrderError::InvalidReference(MenuItemId(1))));
    assert!(h.orders.list().await.unwrap().is_empty());
    // The second line was never looked up
    h.menu.verify();
}

#[tokio::test]
async fn test_unavailable_item_names_the_item() {
    let mut h = harness();

    h.clients
        .expect_find_unique()
        .return_ok(Some(Client::new(ClientId(1), "Ana", "4821")));
    let mut soup = MenuItem::new(MenuItemId(3), "Soup", Decimal::new(450, 2));
    soup.available = false;
    h.menu.expect_get(MenuItemId(3)).return_ok(Some(soup));

    let result = h
        .orders
        .place_order(
            Principal::SelfService,
            request(vec![OrderLine::new(MenuItemId(3), 1)]),
        )
        .await;

    assert_eq!(
        result,
        Err(OrderError::ItemUnavailable {
            id: MenuItemId(3),
            name: "Soup".into()
        })
    );
    assert!(h.orders.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_bad_credential_skips_menu() {
    let mut h = harness();
    h.clients.expect_find_unique().return_ok(None);

    let result = h
        .orders
        .place_order(
            Principal::SelfService,
            request(vec![OrderLine::new(MenuItemId(1), 1)]),
        )
        .await;

    assert_eq!(result, Err(OrderError::InvalidCredential));
    h.clients.verify();
    h.menu.verify();
}

#[tokio::test]
async fn test_menu_failure_is_opaque_storage_failure() {
    let mut h = harness();

    h.clients
        .expect_find_unique()
        .return_ok(Some(Client::new(ClientId(1), "Ana", "4821")));
    h.menu
        .expect_get(MenuItemId(1))
        .return_err(FrameworkError::ActorClosed);

    let result = h
        .orders
        .place_order(
            Principal::SelfService,
            request(vec![OrderLine::new(MenuItemId(1), 1)]),
        )
        .await;

    match result {
        Err(e @ OrderError::StorageFailure(_)) => assert_eq!(e.to_string(), "Storage failure"),
        other => panic!("Expected StorageFailure, got {other:?}"),
    }
    assert!(h.orders.list().await.unwrap().is_empty());
}
