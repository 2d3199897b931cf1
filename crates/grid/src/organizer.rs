//! First-fit packing ("organize").
//!
//! Items are sorted by descending bounding-box area (stable, so equal areas keep
//! their input order) and each one is dropped into the first row-major position
//! where all of its occupied cells are free. Items that fit nowhere are left out.
//!
//! The sort key is the bounding box, not the occupied-cell count: a sparse shape
//! with a large box is packed as if it were large.

use backpack_core::{GridConfig, OrganizeResult, PlacedItem, Shape, ShapeCatalog};
use std::cmp::Reverse;

/// Boolean working grid used while packing.
struct CellMask {
    cols: usize,
    cells: Vec<bool>,
}

impl CellMask {
    fn new(grid: &GridConfig) -> Self {
        Self {
            cols: grid.cols,
            cells: vec![false; grid.cell_count()],
        }
    }

    /// Returns whether every occupied cell of `shape` at `(x, y)` is free.
    /// The caller guarantees the bounding box is inside the grid.
    fn fits(&self, shape: &Shape, x: usize, y: usize) -> bool {
        shape
            .cells()
            .all(|(r, c)| !self.cells[(y + r) * self.cols + x + c])
    }

    fn fill(&mut self, shape: &Shape, x: usize, y: usize) {
        for (r, c) in shape.cells() {
            self.cells[(y + r) * self.cols + x + c] = true;
        }
    }
}

/// Returns the first row-major `(x, y)` where `shape` fits, if any.
fn first_fit(mask: &CellMask, shape: &Shape, grid: &GridConfig) -> Option<(usize, usize)> {
    if shape.width() > grid.cols || shape.height() > grid.rows {
        return None;
    }

    for y in 0..=grid.rows - shape.height() {
        for x in 0..=grid.cols - shape.width() {
            if mask.fits(shape, x, y) {
                return Some((x, y));
            }
        }
    }
    None
}

/// Packs `items` into an empty `grid` and reports what was placed and dropped.
///
/// Items whose type is missing from `catalog` have no footprint and are dropped.
/// Rotation values are carried through untouched. The output is fully determined
/// by the input order.
pub fn organize_report<C>(items: &[PlacedItem], catalog: &C, grid: &GridConfig) -> OrganizeResult
where
    C: ShapeCatalog + ?Sized,
{
    let mut order: Vec<(&PlacedItem, Option<&Shape>)> = items
        .iter()
        .map(|item| (item, catalog.shape(&item.item_type)))
        .collect();
    // `sort_by_key` is stable
    order.sort_by_key(|(_, shape)| Reverse(shape.map_or(0, Shape::area)));

    let mut mask = CellMask::new(grid);
    let mut result = OrganizeResult::new();

    for (item, shape) in order {
        let Some(shape) = shape else {
            log::debug!(
                "Dropping {}: unknown item type '{}'",
                item.id,
                item.item_type
            );
            result.unplaced.push(item.id.clone());
            continue;
        };

        match first_fit(&mask, shape, grid) {
            Some((x, y)) => {
                mask.fill(shape, x, y);
                result.occupied_cells += shape.cell_count();
                result.items.push(item.at(x as i32, y as i32));
                log::trace!("Placed {} at ({}, {})", item.id, x, y);
            }
            None => {
                log::debug!("Dropping {}: no free position for {}", item.id, item.item_type);
                result.unplaced.push(item.id.clone());
            }
        }
    }

    let total = grid.cell_count();
    result.utilization = if total > 0 {
        result.occupied_cells as f64 / total as f64
    } else {
        0.0
    };

    if !result.unplaced.is_empty() {
        log::debug!(
            "Organize placed {} of {} items",
            result.items.len(),
            items.len()
        );
    }

    result
}

/// Packs `items` into an empty `grid`, returning the items that fit with their new
/// coordinates.
///
/// ```rust
/// use backpack_grid::{organize, Catalog, GridConfig, ItemType, PlacedItem, Shape};
///
/// let catalog = Catalog::new().with_item(ItemType::new("gem", Shape::unit()));
/// let items: Vec<_> = ["a", "b", "c", "d"]
///     .iter()
///     .map(|id| PlacedItem::new(*id, "gem", 0, 0))
///     .collect();
///
/// let packed = organize(&items, &catalog, &GridConfig::with_size(2, 2));
/// let positions: Vec<_> = packed.iter().map(|i| i.position()).collect();
/// assert_eq!(positions, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
/// ```
pub fn organize<C>(items: &[PlacedItem], catalog: &C, grid: &GridConfig) -> Vec<PlacedItem>
where
    C: ShapeCatalog + ?Sized,
{
    organize_report(items, catalog, grid).into_items()
}
