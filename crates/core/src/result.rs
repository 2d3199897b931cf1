//! Organize result representation.

use crate::item::{InstanceId, PlacedItem};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of packing a set of items into a grid.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrganizeResult {
    /// Items that were placed, with their new coordinates, in placement order.
    pub items: Vec<PlacedItem>,

    /// Instance ids that found no position, in placement order.
    pub unplaced: Vec<InstanceId>,

    /// Number of grid cells covered by placed items.
    pub occupied_cells: usize,

    /// Covered cells over total grid cells (0.0 - 1.0).
    pub utilization: f64,
}

impl OrganizeResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if every input item was placed.
    pub fn all_placed(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Returns the number of placed items.
    pub fn placed_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of dropped items.
    pub fn unplaced_count(&self) -> usize {
        self.unplaced.len()
    }

    /// Returns the placed item with instance id `id`.
    pub fn get(&self, id: &str) -> Option<&PlacedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization * 100.0)
    }

    /// Consumes the result, returning the placed items.
    pub fn into_items(self) -> Vec<PlacedItem> {
        self.items
    }
}

/// Summary statistics for an organize result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrganizeSummary {
    /// Items passed in.
    pub total_requested: usize,
    /// Items placed.
    pub total_placed: usize,
    /// Utilization percentage.
    pub utilization_percent: f64,
}

impl From<&OrganizeResult> for OrganizeSummary {
    fn from(result: &OrganizeResult) -> Self {
        Self {
            total_requested: result.items.len() + result.unplaced.len(),
            total_placed: result.items.len(),
            utilization_percent: result.utilization * 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_new() {
        let result = OrganizeResult::new();
        assert!(result.items.is_empty());
        assert_eq!(result.utilization, 0.0);
        assert!(result.all_placed());
    }

    #[test]
    fn test_result_lookup_and_percent() {
        let mut result = OrganizeResult::new();
        result.items.push(PlacedItem::new("a", "gem", 1, 0));
        result.unplaced.push("b".to_string());
        result.occupied_cells = 1;
        result.utilization = 0.25;

        assert_eq!(result.placed_count(), 1);
        assert_eq!(result.unplaced_count(), 1);
        assert!(!result.all_placed());
        assert_eq!(result.get("a").map(|i| i.position()), Some((1, 0)));
        assert!(result.get("b").is_none());
        assert_eq!(result.utilization_percent(), "25.0%");
    }

    #[test]
    fn test_organize_summary() {
        let mut result = OrganizeResult::new();
        result.items.push(PlacedItem::new("a", "gem", 0, 0));
        result.unplaced.push("b".to_string());
        result.unplaced.push("c".to_string());
        result.utilization = 0.75;

        let summary = OrganizeSummary::from(&result);
        assert_eq!(summary.total_requested, 3);
        assert_eq!(summary.total_placed, 1);
        assert_eq!(summary.utilization_percent, 75.0);
    }
}
