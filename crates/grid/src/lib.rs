//! # Backpack Grid
//!
//! Placement and packing engine for Tetris-style grid inventories.
//!
//! Every operation is a pure function of its inputs: the grid dimensions, the
//! current item list and an injected [`ShapeCatalog`]. Occupancy is rebuilt on each
//! call, so nothing is shared between calls.
//!
//! ## Operations
//!
//! - [`build_occupancy`]: per-cell owner map, optionally leaving one item out
//! - [`can_place`] / [`check_placement`]: bounds and collision check for a candidate
//! - [`organize`] / [`organize_report`]: largest-area-first, first-fit packing
//! - [`Backpack`]: committed item list with place/remove/organize and two-phase moves
//!
//! ## Quick Start
//!
//! ```rust
//! use backpack_grid::{can_place, organize, Catalog, GridConfig, ItemType, PlacedItem, Shape};
//!
//! let catalog = Catalog::new()
//!     .with_item(ItemType::new("potion", Shape::parse("#\n#").unwrap()))
//!     .with_item(ItemType::new("boots", Shape::parse("##\n#.").unwrap()))
//!     .with_item(ItemType::new("gem", Shape::unit()));
//! let grid = GridConfig::default();
//!
//! let items = vec![PlacedItem::new("boots-1", "boots", 0, 0)];
//!
//! // The notch of the L-shape is free.
//! assert!(can_place(&Shape::unit(), 1, 1, &grid, &items, &catalog, None));
//! assert!(!can_place(&Shape::unit(), 0, 1, &grid, &items, &catalog, None));
//!
//! let bag = vec![
//!     PlacedItem::new("gem-1", "gem", 0, 0),
//!     PlacedItem::new("potion-1", "potion", 0, 0),
//! ];
//! let packed = organize(&bag, &catalog, &grid);
//! assert_eq!(packed[0].id, "potion-1");
//! assert_eq!(packed[1].position(), (1, 0));
//! ```

pub mod backpack;
pub mod occupancy;
pub mod organizer;
pub mod placement;

// Re-exports
pub use backpack::{Backpack, DetachedItem, MoveRejected};
pub use occupancy::{build_occupancy, OccupancyGrid};
pub use organizer::{organize, organize_report};
pub use placement::{can_place, check_placement, in_bounds, PlacementVerdict};
pub use backpack_core::{
    Catalog, Error, GridConfig, InstanceId, ItemType, ItemTypeId, OrganizeResult,
    OrganizeSummary, PlacedItem, Result, Rotation, Shape, ShapeCatalog,
};
