//! # Backpack Core
//!
//! Domain types shared by the backpack grid engine.
//!
//! ## Core Components
//!
//! - **Shapes**: [`Shape`] boolean occupancy matrices and the explicit [`Rotation`] transform
//! - **Catalog**: [`ItemType`], [`Catalog`] and the [`ShapeCatalog`] lookup trait
//! - **Instances**: [`PlacedItem`] with its [`InstanceId`]
//! - **Configuration**: [`GridConfig`] grid dimensions (8 x 8 by default)
//! - **Results**: [`OrganizeResult`], [`OrganizeSummary`]
//! - **Errors**: [`Error`], [`Result`]
//!
//! ## Example
//!
//! ```rust
//! use backpack_core::{Catalog, GridConfig, ItemType, PlacedItem, Shape};
//!
//! let catalog = Catalog::new()
//!     .with_item(ItemType::new("potion", Shape::parse("#\n#").unwrap()).with_name("Potion"))
//!     .with_item(ItemType::new("boots", Shape::parse("##\n#.").unwrap()).with_name("Boots"));
//!
//! let grid = GridConfig::default();
//! let item = PlacedItem::new("potion-1", "potion", 0, 0);
//!
//! assert!(grid.validate().is_ok());
//! assert_eq!(catalog.get(&item.item_type).unwrap().name(), "Potion");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization of configuration and catalog types

pub mod catalog;
pub mod config;
pub mod error;
pub mod item;
pub mod result;
pub mod shape;

// Re-exports
pub use catalog::{Catalog, ItemType, ItemTypeId, ShapeCatalog};
pub use config::{GridConfig, DEFAULT_COLS, DEFAULT_ROWS};
pub use error::{Error, Result};
pub use item::{InstanceId, PlacedItem};
pub use result::{OrganizeResult, OrganizeSummary};
pub use shape::{Rotation, Shape};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_catalog_from_json() {
        let json = r#"[
            {"id": "potion", "name": "Potion", "color": "red", "shape": [[true], [true]]},
            {"id": "boots", "name": "Boots", "shape": [[true, true], [true, false]]}
        ]"#;

        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("potion").unwrap().color(), Some("red"));
        assert_eq!(catalog.shape("boots").unwrap().cell_count(), 3);
    }

    #[test]
    fn test_ragged_shape_rejected() {
        let json = r#"[{"id": "bad", "name": "Bad", "shape": [[true, true], [true]]}]"#;
        assert!(serde_json::from_str::<Catalog>(json).is_err());
    }

    #[test]
    fn test_grid_config_json() {
        let grid: GridConfig = serde_json::from_str(r#"{"rows": 4, "cols": 6}"#).unwrap();
        assert_eq!(grid, GridConfig::with_size(4, 6));
    }
}
