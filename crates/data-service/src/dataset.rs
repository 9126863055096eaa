//! Generated in-memory dataset.
//!
//! The dataset is built once at startup and never mutated afterwards, so it
//! can be shared between request handlers behind an `Arc` without locking.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Number of items generated when no size is configured.
pub const DEFAULT_DATASET_SIZE: usize = 1000;

/// Half-open range generated values are drawn from.
pub const VALUE_RANGE: Range<f64> = 10.0..100.0;

/// A single generated record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub value: f64,
}

impl Item {
    fn generate<R: Rng>(id: u64, rng: &mut R) -> Self {
        Self {
            id,
            name: format!("Item {}", id),
            value: rng.gen_range(VALUE_RANGE),
        }
    }

    /// Inclusive on both ends.
    pub fn in_range(&self, min_value: f64, max_value: f64) -> bool {
        min_value <= self.value && self.value <= max_value
    }
}

/// Fixed, ordered collection of generated items.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    items: Vec<Item>,
}

impl Dataset {
    /// Generate `size` items using the thread-local RNG.
    pub fn generate(size: usize) -> Self {
        Self::generate_with(size, &mut rand::thread_rng())
    }

    /// Generate `size` items with ids `0..size` drawing values from `rng`.
    pub fn generate_with<R: Rng>(size: usize, rng: &mut R) -> Self {
        let items = (0..size as u64).map(|id| Item::generate(id, rng)).collect();
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items whose value lies in `[min_value, max_value]`, in dataset order.
    ///
    /// An inverted range yields nothing rather than an error.
    pub fn filter_by_value(&self, min_value: f64, max_value: f64) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.in_range(min_value, max_value))
            .collect()
    }
}

impl From<Vec<Item>> for Dataset {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(size: usize) -> Dataset {
        Dataset::generate_with(size, &mut StdRng::seed_from_u64(42))
    }

    fn item(id: u64, value: f64) -> Item {
        Item {
            id,
            name: format!("Item {}", id),
            value,
        }
    }

    #[test]
    fn test_generate_default_size() {
        let dataset = Dataset::generate(DEFAULT_DATASET_SIZE);
        assert_eq!(dataset.len(), 1000);
        assert!(!dataset.is_empty());
    }

    #[test]
    fn test_generate_sequential_ids_and_names() {
        let dataset = seeded(50);
        for (i, item) in dataset.items().iter().enumerate() {
            assert_eq!(item.id, i as u64);
            assert_eq!(item.name, format!("Item {}", i));
        }
    }

    #[test]
    fn test_generate_values_in_range() {
        let dataset = seeded(5000);
        assert!(dataset
            .items()
            .iter()
            .all(|item| item.value >= 10.0 && item.value < 100.0));
    }

    #[test]
    fn test_generate_zero_items() {
        let dataset = seeded(0);
        assert!(dataset.is_empty());
        assert!(dataset.filter_by_value(0.0, 1000.0).is_empty());
    }

    #[test]
    fn test_same_seed_same_values() {
        assert_eq!(seeded(20).items(), seeded(20).items());
    }

    #[test]
    fn test_filter_inclusive_bounds() {
        let dataset = Dataset::from(vec![item(0, 10.0), item(1, 20.0), item(2, 30.0)]);
        let ids: Vec<u64> = dataset
            .filter_by_value(10.0, 20.0)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn test_filter_exact_point() {
        let dataset = Dataset::from(vec![item(0, 15.5), item(1, 15.5), item(2, 16.0)]);
        assert_eq!(dataset.filter_by_value(15.5, 15.5).len(), 2);
    }

    #[test]
    fn test_filter_inverted_range_is_empty() {
        let dataset = seeded(100);
        assert!(dataset.filter_by_value(60.0, 40.0).is_empty());
    }

    #[test]
    fn test_filter_wide_range_returns_all() {
        let dataset = seeded(100);
        assert_eq!(dataset.filter_by_value(0.0, 1000.0).len(), 100);
    }

    #[test]
    fn test_filter_is_sound_complete_and_ordered() {
        let dataset = seeded(1000);
        let (min, max) = (35.0, 62.5);
        let filtered = dataset.filter_by_value(min, max);

        let expected: Vec<&Item> = dataset
            .items()
            .iter()
            .filter(|i| min <= i.value && i.value <= max)
            .collect();
        assert_eq!(filtered, expected);
        assert!(filtered.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_filter_nan_bound_matches_nothing() {
        let dataset = seeded(10);
        assert!(dataset.filter_by_value(f64::NAN, 1000.0).is_empty());
    }
}
