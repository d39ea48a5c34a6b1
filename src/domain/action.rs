use super::item::CartItem;
use serde::{Deserialize, Serialize};

/// A cart transition request.
///
/// Serialized as `{ "type": "ADD_ITEM", "payload": ... }`, the shape the
/// storefront views dispatch.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    /// Add an item, or accumulate its quantity if the id is already present.
    AddItem(CartItem),
    /// Remove the item with the given id.
    RemoveItem(String),
    /// Set an absolute quantity. Values below 1 remove the item.
    UpdateQuantity { id: String, quantity: i64 },
}

impl CartAction {
    pub fn kind(&self) -> &'static str {
        match self {
            CartAction::AddItem(_) => "ADD_ITEM",
            CartAction::RemoveItem(_) => "REMOVE_ITEM",
            CartAction::UpdateQuantity { .. } => "UPDATE_QUANTITY",
        }
    }

    /// The product id the action targets.
    pub fn id(&self) -> &str {
        match self {
            CartAction::AddItem(item) => &item.id,
            CartAction::RemoveItem(id) => id,
            CartAction::UpdateQuantity { id, .. } => id,
        }
    }
}
