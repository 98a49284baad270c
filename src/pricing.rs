//! # Order Pricing
//!
//! Turns (menu item, quantity) pairs into priced order items. Each subtotal
//! is `price × quantity` and the total is their sum, all in exact decimals.
//! Name and price are copied out of the menu item, so later menu edits never
//! reach a placed order.

use crate::model::{MenuItem, OrderId, OrderItem};
use crate::order_actor::OrderError;
use rust_decimal::Decimal;

/// Items and total of an order, before it is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedOrder {
    pub items: Vec<OrderItem>,
    pub total: Decimal,
}

/// Prices one line.
pub fn line_subtotal(price: Decimal, quantity: u32) -> Result<Decimal, OrderError> {
    price
        .checked_mul(Decimal::from(quantity))
        .ok_or_else(|| OrderError::ValidationError(format!("subtotal overflows for quantity {quantity}")))
}

/// Prices every line of order `order_id`.
///
/// Fails only on decimal overflow.
pub fn price_lines(order_id: OrderId, lines: &[(MenuItem, u32)]) -> Result<PricedOrder, OrderError> {
    let mut items = Vec::with_capacity(lines.len());
    let mut total = Decimal::ZERO;

    for (menu_item, quantity) in lines {
        let subtotal = line_subtotal(menu_item.price, *quantity)?;
        total = total
            .checked_add(subtotal)
            .ok_or_else(|| OrderError::ValidationError("order total overflows".to_string()))?;
        items.push(OrderItem {
            order_id,
            menu_item_id: menu_item.id,
            item_name: menu_item.name.clone(),
            item_price: menu_item.price,
            quantity: *quantity,
            subtotal,
        });
    }

    Ok(PricedOrder { items, total })
}
