//! [`ActorEntity`] implementation for [`MenuItem`].

use super::error::MenuError;
use crate::framework::ActorEntity;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::convert::Infallible;

fn check_price(price: Decimal) -> Result<Decimal, MenuError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(MenuError::InvalidPrice(price.to_string()));
    }
    Ok(price)
}

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = MenuError;

    async fn from_create_params(id: MenuItemId, params: MenuItemCreate, _ctx: &()) -> Result<Self, MenuError> {
        if params.name.trim().is_empty() {
            return Err(MenuError::ValidationError("name must not be empty".to_string()));
        }
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            image_url: params.image_url,
            category: params.category,
            price: check_price(params.price)?,
            available: params.available,
        })
    }

    /// Handles updates to the MenuItem entity.
    ///
    /// # Fields Updated
    /// - `name`, `description`, `category`
    /// - `price`: must not be negative
    /// - `available`: whether new orders may include the item
    async fn on_update(&mut self, update: MenuItemUpdate, _ctx: &()) -> Result<(), MenuError> {
        if let Some(price) = update.price {
            self.price = check_price(price)?;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(category) = update.category {
            self.category = Some(category);
        }
        if let Some(available) = update.available {
            self.available = available;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), MenuError> {
        match action {}
    }
}
