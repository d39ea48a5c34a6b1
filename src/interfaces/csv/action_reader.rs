use crate::domain::action::CartAction;
use crate::domain::item::CartItem;
use crate::domain::money::Price;
use crate::error::{CartError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;
use std::str::FromStr;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
pub enum ActionType {
    #[serde(rename = "add", alias = "ADD_ITEM")]
    Add,
    #[serde(rename = "remove", alias = "REMOVE_ITEM")]
    Remove,
    #[serde(rename = "update", alias = "UPDATE_QUANTITY")]
    Update,
}

/// One row of an action CSV (`type,id,name,price,quantity,image`).
///
/// Columns a given action type does not use may be left empty. `price` is kept
/// as text and parsed as a `Decimal` so no digits are lost on the way in.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ActionRecord {
    pub r#type: ActionType,
    pub id: String,
    pub name: Option<String>,
    pub price: Option<String>,
    pub quantity: Option<i64>,
    pub image: Option<String>,
}

impl TryFrom<ActionRecord> for CartAction {
    type Error = CartError;

    fn try_from(record: ActionRecord) -> Result<Self> {
        if record.id.is_empty() {
            return Err(CartError::ValidationError("Action missing id".to_string()));
        }

        match record.r#type {
            ActionType::Add => {
                let name = record.name.ok_or_else(|| {
                    CartError::ValidationError(format!("Add of {} missing name", record.id))
                })?;
                let price = record.price.ok_or_else(|| {
                    CartError::ValidationError(format!("Add of {} missing price", record.id))
                })?;
                let price = Decimal::from_str(&price).map_err(|e| {
                    CartError::ValidationError(format!(
                        "Add of {} has an invalid price: {}",
                        record.id, e
                    ))
                })?;
                // List views add a single unit unless told otherwise.
                let quantity = u32::try_from(record.quantity.unwrap_or(1)).map_err(|_| {
                    CartError::ValidationError(format!(
                        "Add of {} has an invalid quantity",
                        record.id
                    ))
                })?;

                Ok(CartAction::AddItem(CartItem::new(
                    record.id,
                    name,
                    Price::new(price)?,
                    quantity,
                    record.image.unwrap_or_default(),
                )))
            }
            ActionType::Remove => Ok(CartAction::RemoveItem(record.id)),
            ActionType::Update => {
                let quantity = record.quantity.ok_or_else(|| {
                    CartError::ValidationError(format!("Update of {} missing quantity", record.id))
                })?;
                Ok(CartAction::UpdateQuantity {
                    id: record.id,
                    quantity,
                })
            }
        }
    }
}

/// Reads cart actions from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<CartAction>`.
/// It trims whitespace and accepts records shorter than the header.
pub struct ActionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ActionReader<R> {
    /// Creates a new `ActionReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and validates actions.
    pub fn actions(self) -> impl Iterator<Item = Result<CartAction>> {
        self.reader
            .into_deserialize::<ActionRecord>()
            .map(|result| result.map_err(CartError::from).and_then(CartAction::try_from))
    }
}
