#![allow(dead_code)]

use cart_engine::domain::action::CartAction;
use cart_engine::domain::item::CartItem;
use cart_engine::domain::money::Price;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use std::io::Error;
use std::path::Path;

pub const PRODUCT_IDS: [&str; 5] = ["1", "2", "3", "4", "5"];

pub fn item(id: &str, price: Decimal, quantity: u32) -> CartItem {
    CartItem::new(
        id,
        format!("Product {}", id),
        Price::new(price).unwrap(),
        quantity,
        format!("https://img.example/{}.jpg", id),
    )
}

/// Generates a reproducible sequence of actions over a small set of ids so
/// that adds, updates and removes collide often.
pub fn random_actions(seed: u64, len: usize) -> Vec<CartAction> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            let id = PRODUCT_IDS[rng.gen_range(0..PRODUCT_IDS.len())];
            match rng.gen_range(0..3) {
                0 => {
                    let cents: i64 = rng.gen_range(0..50_000);
                    CartAction::AddItem(item(id, Decimal::new(cents, 2), rng.gen_range(1..=5)))
                }
                1 => CartAction::RemoveItem(id.to_string()),
                _ => CartAction::UpdateQuantity {
                    id: id.to_string(),
                    quantity: rng.gen_range(-2..=10),
                },
            }
        })
        .collect()
}

pub fn write_action_csv(path: &Path, rows: &[[&str; 6]]) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["type", "id", "name", "price", "quantity", "image"])?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
