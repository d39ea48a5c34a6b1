use crate::domain::state::CartState;
use crate::domain::summary::CartSummary;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct ItemRow<'a> {
    id: &'a str,
    name: &'a str,
    price: String,
    quantity: u32,
    line_total: String,
}

#[derive(Debug, Serialize)]
struct SummaryRow {
    subtotal: String,
    tax: String,
    total: String,
    distinct_items: usize,
    total_units: u64,
    badge: u64,
}

const ITEM_HEADER: [&str; 5] = ["id", "name", "price", "quantity", "line_total"];

/// Writes the final cart as CSV: the item rows, a blank line, then a single
/// summary row. Money columns are printed with two decimals.
pub struct CartWriter<W: Write> {
    inner: W,
}

impl<W: Write> CartWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write_cart(&mut self, state: &CartState, summary: &CartSummary) -> Result<()> {
        self.write_items(state)?;
        self.inner.write_all(b"\n")?;
        self.write_summary(summary)?;
        self.inner.flush()?;
        Ok(())
    }

    fn write_items(&mut self, state: &CartState) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut self.inner);

        writer.write_record(ITEM_HEADER)?;
        for item in state.items() {
            writer.serialize(ItemRow {
                id: &item.id,
                name: &item.name,
                price: item.price.to_string(),
                quantity: item.quantity,
                line_total: item
                    .line_total()
                    .map(|total| total.to_string())
                    .unwrap_or_default(),
            })?;
        }
        writer.flush()?;
        Ok(())
    }

    fn write_summary(&mut self, summary: &CartSummary) -> Result<()> {
        let mut writer = csv::Writer::from_writer(&mut self.inner);
        writer.serialize(SummaryRow {
            subtotal: summary.subtotal.to_string(),
            tax: summary.tax.to_string(),
            total: summary.grand_total.to_string(),
            distinct_items: summary.distinct_item_count,
            total_units: summary.total_unit_count,
            badge: summary.badge_count,
        })?;
        writer.flush()?;
        Ok(())
    }
}
