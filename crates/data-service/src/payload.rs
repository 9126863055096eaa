//! Request and response bodies.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::dataset::Item;

/// Confirmation returned by a successful save.
pub const SAVE_CONFIRMATION: &str = "Data successfully saved to JSON file";

/// Listing envelope returned by the read endpoints.
///
/// Only constructible from its items, so `count` always equals
/// `items.len()`.
#[derive(Debug, Serialize)]
pub struct ResponsePayload<'a> {
    items: Vec<&'a Item>,
    count: usize,
}

impl<'a> ResponsePayload<'a> {
    pub fn new(items: Vec<&'a Item>) -> Self {
        let count = items.len();
        Self { items, count }
    }

    pub fn items(&self) -> &[&'a Item] {
        &self.items
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl<'a> FromIterator<&'a Item> for ResponsePayload<'a> {
    fn from_iter<I: IntoIterator<Item = &'a Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Query parameters of the filter endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FilterParams {
    pub min_value: f64,
    pub max_value: f64,
}

/// Body of the save endpoint: an arbitrary JSON object under `data`.
#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    pub data: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct SaveConfirmation {
    pub message: &'static str,
}

impl Default for SaveConfirmation {
    fn default() -> Self {
        Self {
            message: SAVE_CONFIRMATION,
        }
    }
}
