//! Placement validation.
//!
//! A candidate shape at `(x, y)` is legal when its bounding box lies inside the grid
//! and none of its occupied cells lands on a cell owned by another item.

use crate::occupancy::build_occupancy;
use backpack_core::{GridConfig, InstanceId, PlacedItem, Shape, ShapeCatalog};

/// Outcome of validating a candidate placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementVerdict {
    /// Placement is legal.
    Fits,
    /// Bounding box leaves the grid.
    OutOfBounds,
    /// An occupied cell lands on a cell owned by `with`.
    Collides {
        /// Owner of the first contested cell.
        with: InstanceId,
        /// First contested cell as `(x, y)`, in shape row-major order.
        cell: (usize, usize),
    },
}

impl PlacementVerdict {
    /// Returns true for [`PlacementVerdict::Fits`].
    pub fn fits(&self) -> bool {
        matches!(self, Self::Fits)
    }
}

/// Returns whether `shape`'s bounding box at `(x, y)` lies inside `grid`.
pub fn in_bounds(shape: &Shape, x: i32, y: i32, grid: &GridConfig) -> bool {
    if x < 0 || y < 0 {
        return false;
    }
    let (x, y) = (x as usize, y as usize);
    x + shape.width() <= grid.cols && y + shape.height() <= grid.rows
}

/// Validates `shape` at `(x, y)` against the committed `items`, naming the reason
/// for a rejection.
///
/// Bounds are checked before any occupancy is built. The item with id `ignore` is
/// left out of the occupancy, so an item being moved never collides with itself.
pub fn check_placement<C>(
    shape: &Shape,
    x: i32,
    y: i32,
    grid: &GridConfig,
    items: &[PlacedItem],
    catalog: &C,
    ignore: Option<&str>,
) -> PlacementVerdict
where
    C: ShapeCatalog + ?Sized,
{
    if !in_bounds(shape, x, y, grid) {
        return PlacementVerdict::OutOfBounds;
    }

    let occupancy = build_occupancy(items, catalog, grid, ignore);
    let (x, y) = (x as usize, y as usize);

    for (r, c) in shape.cells() {
        let (cx, cy) = (x + c, y + r);
        if let Some(owner) = occupancy.owner_at(cx as i64, cy as i64) {
            return PlacementVerdict::Collides {
                with: owner.to_string(),
                cell: (cx, cy),
            };
        }
    }

    PlacementVerdict::Fits
}

/// Returns whether `shape` can be placed at `(x, y)`.
///
/// ```rust
/// use backpack_grid::{can_place, Catalog, GridConfig, ItemType, PlacedItem, Shape};
///
/// let catalog = Catalog::new()
///     .with_item(ItemType::new("potion", Shape::parse("#\n#").unwrap()));
/// let grid = GridConfig::default();
/// let items = vec![PlacedItem::new("p1", "potion", 0, 0)];
/// let chest = Shape::rectangle(2, 2).unwrap();
///
/// assert!(!can_place(&chest, 0, 0, &grid, &items, &catalog, None));
/// assert!(can_place(&chest, 1, 0, &grid, &items, &catalog, None));
/// ```
pub fn can_place<C>(
    shape: &Shape,
    x: i32,
    y: i32,
    grid: &GridConfig,
    items: &[PlacedItem],
    catalog: &C,
    ignore: Option<&str>,
) -> bool
where
    C: ShapeCatalog + ?Sized,
{
    check_placement(shape, x, y, grid, items, catalog, ignore).fits()
}
