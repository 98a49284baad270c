//! Demo run: seeds a small menu, registers a walk-in client, places an order
//! with the client's passcode, moves it through the kitchen and prints the
//! dashboard.

use kitchen_orders::identity::Principal;
use kitchen_orders::lifecycle::{setup_tracing, KitchenConfig, KitchenSystem};
use kitchen_orders::model::{MenuItemCreate, MenuItemUpdate, NewClient, OrderLine, PlaceOrderRequest};
use rust_decimal::Decimal;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = KitchenConfig::load().map_err(|e| e.to_string())?;
    setup_tracing(config.log.format);

    info!("Starting kitchen order system");
    let system = KitchenSystem::new(&config);

    let span = tracing::info_span!("menu_setup");
    let (burger, fries) = async {
        let burger = system
            .menu_client
            .create_menu_item(MenuItemCreate::new("Burger", Decimal::new(1000, 2)))
            .await?;
        let fries = system
            .menu_client
            .create_menu_item(MenuItemCreate::new("Fries", Decimal::new(500, 2)))
            .await?;
        Ok::<_, kitchen_orders::menu_actor::MenuError>((burger, fries))
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let client = system
        .client_directory
        .create_client(NewClient::named("Walk-in"))
        .await
        .map_err(|e| e.to_string())?;
    info!(client_id = %client.id, "Client registered");

    let request = PlaceOrderRequest {
        passcode: Some(client.passcode.clone()),
        notes: Some("no onions".to_string()),
        order_items: vec![OrderLine::new(burger.id, 2), OrderLine::new(fries.id, 1)],
        ..Default::default()
    };

    let span = tracing::info_span!("order_processing");
    let placed = system
        .order_client
        .place_order(Principal::SelfService, request)
        .instrument(span)
        .await;

    match placed {
        Ok(details) => {
            let id = details.order.id;
            info!(order_id = %id, total = %details.order.total_amount, "Order placed");

            // Price changes never reach an order already placed
            let update = MenuItemUpdate {
                price: Some(Decimal::new(1200, 2)),
                ..Default::default()
            };
            if let Err(e) = system.menu_client.update_menu_item(burger.id, update).await {
                error!(error = %e, "Menu update failed");
            }

            for status in ["Accepted", "Ready", "Delivered"] {
                if let Err(e) = system.order_client.set_status(id, status).await {
                    error!(error = %e, status, "Status update failed");
                }
            }
        }
        Err(e) => error!(error = %e, "Order placement failed"),
    }

    let stats = system.stats.snapshot().await;
    match serde_json::to_string_pretty(&stats) {
        Ok(json) => println!("{json}"),
        Err(e) => error!(error = %e, "Could not render statistics"),
    }

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
