use crate::domain::action::CartAction;
use crate::error::{CartError, Result};
use std::io::{BufRead, BufReader, Read};

/// Reads cart actions from a JSON-lines source.
///
/// Each non-blank line holds one dispatch object, e.g.
/// `{"type":"REMOVE_ITEM","payload":"1"}`.
pub struct JsonActionReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> JsonActionReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: BufReader::new(source),
        }
    }

    pub fn actions(self) -> impl Iterator<Item = Result<CartAction>> {
        self.reader.lines().filter_map(|line| match line {
            Ok(line) if line.trim().is_empty() => None,
            Ok(line) => Some(serde_json::from_str(&line).map_err(CartError::from)),
            Err(e) => Some(Err(CartError::from(e))),
        })
    }
}
