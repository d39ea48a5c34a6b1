use super::action::CartAction;
use super::item::CartItem;
use super::money::Money;
use serde::Serialize;

/// The full contents of a cart.
///
/// Items keep the order in which they were first added and are unique by `id`.
/// `total` is recomputed from `items` by every transition and cannot be set
/// on its own, so it always equals `Σ price × quantity`.
#[derive(Debug, Serialize, PartialEq, Clone, Default)]
pub struct CartState {
    items: Vec<CartItem>,
    total: Money,
}

impl CartState {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state from `items`, or `None` if the total overflows `Money`.
    fn from_items(items: Vec<CartItem>) -> Option<Self> {
        let total = items.iter().try_fold(Money::ZERO, |total, item| {
            total.checked_add(item.line_total()?)
        })?;
        Some(Self { items, total })
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products in the cart.
    pub fn distinct_item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of units across all products.
    pub fn total_unit_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Computes the state that follows `action`.
    ///
    /// This never fails: unknown ids are ignored, quantities that would
    /// fall below 1 remove the item, and a change whose total cannot be
    /// represented leaves the cart as it was.
    pub fn apply(&self, action: CartAction) -> CartState {
        match action {
            CartAction::AddItem(item) => self.add_item(item),
            CartAction::RemoveItem(id) => self.remove_item(&id),
            CartAction::UpdateQuantity { id, quantity } => self.update_quantity(&id, quantity),
        }
    }

    fn add_item(&self, item: CartItem) -> CartState {
        // A zero-quantity line must never enter the cart.
        if item.quantity == 0 {
            return self.clone();
        }

        let mut items = self.items.clone();
        match items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
            }
            None => items.push(item),
        }
        Self::from_items(items).unwrap_or_else(|| self.clone())
    }

    fn remove_item(&self, id: &str) -> CartState {
        let items = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        Self::from_items(items).unwrap_or_else(|| self.clone())
    }

    fn update_quantity(&self, id: &str, quantity: i64) -> CartState {
        if quantity < 1 {
            return self.remove_item(id);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        let mut items = self.items.clone();
        if let Some(existing) = items.iter_mut().find(|existing| existing.id == id) {
            existing.quantity = quantity;
        }
        Self::from_items(items).unwrap_or_else(|| self.clone())
    }
}
