use super::money::{Money, Price};
use serde::{Deserialize, Serialize};

/// A product record as supplied by the catalog and product detail views.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Price,
    pub image: String,
}

/// One product line in the cart.
///
/// `name`, `price` and `image` are snapshots taken when the product was first
/// added. Only `quantity` changes afterwards.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct CartItem {
    /// Stable product identifier, unique within a cart.
    pub id: String,
    /// Display name at add-time.
    pub name: String,
    /// Unit price at add-time.
    pub price: Price,
    /// Number of units, at least 1 while the item is in a cart.
    pub quantity: u32,
    /// Image URL at add-time.
    pub image: String,
}

impl CartItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Price,
        quantity: u32,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity,
            image: image.into(),
        }
    }

    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            quantity,
            image: product.image.clone(),
        }
    }

    /// `price × quantity`, or `None` if it cannot be represented.
    pub fn line_total(&self) -> Option<Money> {
        self.price.times(self.quantity)
    }
}
