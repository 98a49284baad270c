use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

entity_id!(
    /// Type-safe identifier for menu items.
    MenuItemId,
    "menu_item"
);

/// A dish on the menu.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// Orders only read menu items. The price is an exact decimal and is never
/// negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub price: Decimal,
    pub available: bool,
}

impl MenuItem {
    /// Creates an available MenuItem with no description, image or category.
    pub fn new(id: MenuItemId, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            image_url: None,
            category: None,
            price,
            available: true,
        }
    }
}

/// Payload for creating a menu item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub price: Decimal,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl MenuItemCreate {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            description: None,
            image_url: None,
            category: None,
            price,
            available: true,
        }
    }
}

/// Payload for updating a menu item. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub available: Option<bool>,
}
