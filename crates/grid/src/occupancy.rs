//! Occupancy resolution.
//!
//! Builds a per-cell map from grid coordinate to owning instance. The map is rebuilt
//! from the item list on every call; nothing is cached between calls.

use backpack_core::{GridConfig, InstanceId, PlacedItem, ShapeCatalog};
use std::collections::HashMap;
use std::fmt;

/// Per-cell owner map of a `rows x cols` grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    rows: usize,
    cols: usize,
    /// Row-major owners, `rows * cols` long.
    cells: Vec<Option<InstanceId>>,
}

impl OccupancyGrid {
    /// Creates an all-free grid.
    pub fn empty(grid: &GridConfig) -> Self {
        Self {
            rows: grid.rows,
            cols: grid.cols,
            cells: vec![None; grid.cell_count()],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u64, y as u64);
        if x >= self.cols as u64 || y >= self.rows as u64 {
            return None;
        }
        Some(y as usize * self.cols + x as usize)
    }

    /// Returns the instance owning `(x, y)`, or `None` if the cell is free or off-grid.
    pub fn owner_at(&self, x: i64, y: i64) -> Option<&str> {
        self.index(x, y).and_then(|i| self.cells[i].as_deref())
    }

    /// Returns whether `(x, y)` is on the grid and free.
    pub fn is_free(&self, x: i64, y: i64) -> bool {
        matches!(self.index(x, y), Some(i) if self.cells[i].is_none())
    }

    /// Marks `(x, y)` as owned by `owner`. Off-grid cells are ignored.
    ///
    /// Returns whether the cell was on the grid.
    pub(crate) fn mark(&mut self, x: i64, y: i64, owner: &str) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = Some(owner.to_string());
                true
            }
            None => false,
        }
    }

    /// Number of owned cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of free cells.
    pub fn free_count(&self) -> usize {
        self.cells.len() - self.occupied_count()
    }

    /// Iterates `((x, y), owner)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), Option<&str>)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, owner)| ((i % cols, i / cols), owner.as_deref()))
    }

    /// Returns the cells owned by `id` as `(x, y)`, row-major.
    pub fn cells_of<'a>(&'a self, id: &'a str) -> impl Iterator<Item = (usize, usize)> + 'a {
        self.iter()
            .filter(move |(_, owner)| *owner == Some(id))
            .map(|(cell, _)| cell)
    }

    /// Returns the owners as a row-major matrix (`rows` rows of `cols` cells).
    pub fn to_rows(&self) -> Vec<Vec<Option<InstanceId>>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.cells.chunks(self.cols).map(<[_]>::to_vec).collect()
    }
}

/// Glyphs handed out to instances in the diagnostic overlay, in order of first
/// appearance. Instances beyond the alphabet share `*`.
const OVERLAY_GLYPHS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut glyphs: HashMap<&str, char> = HashMap::new();
        let mut palette = OVERLAY_GLYPHS.chars();

        for y in 0..self.rows {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.cols {
                let glyph = match self.cells[y * self.cols + x].as_deref() {
                    None => '.',
                    Some(owner) => *glyphs
                        .entry(owner)
                        .or_insert_with(|| palette.next().unwrap_or('*')),
                };
                write!(f, "{}", glyph)?;
            }
        }
        Ok(())
    }
}

/// Builds the occupancy of `items` on `grid`.
///
/// The item whose id equals `ignore` is skipped, as is any item whose type is
/// missing from `catalog`. Occupied shape cells that fall outside the grid are
/// dropped. Overlapping items resolve last-write-wins in slice order.
pub fn build_occupancy<C>(
    items: &[PlacedItem],
    catalog: &C,
    grid: &GridConfig,
    ignore: Option<&str>,
) -> OccupancyGrid
where
    C: ShapeCatalog + ?Sized,
{
    let mut occupancy = OccupancyGrid::empty(grid);

    for item in items {
        if ignore == Some(item.id.as_str()) {
            continue;
        }

        let Some(shape) = catalog.shape(&item.item_type) else {
            log::debug!(
                "Skipping {}: unknown item type '{}'",
                item.id,
                item.item_type
            );
            continue;
        };

        let mut clipped = 0usize;
        for (x, y) in item.footprint(shape) {
            if !occupancy.mark(x, y, &item.id) {
                clipped += 1;
            }
        }

        if clipped > 0 {
            log::trace!("{} has {} cell(s) outside the grid", item.id, clipped);
        }
    }

    occupancy
}

#[cfg(test)]
mod tests {
    use super::*;
    use backpack_core::{Catalog, ItemType, Shape};

    fn catalog() -> Catalog {
        Catalog::new()
            .with_item(ItemType::new("potion", Shape::parse("#\n#").unwrap()))
            .with_item(ItemType::new("boots", Shape::parse("##\n#.").unwrap()))
            .with_item(ItemType::new("gem", Shape::unit()))
    }

    #[test]
    fn test_empty_items() {
        let grid = GridConfig::default();
        let occupancy = build_occupancy(&[], &catalog(), &grid, None);
        assert_eq!(occupancy.rows(), 8);
        assert_eq!(occupancy.cols(), 8);
        assert_eq!(occupancy.occupied_count(), 0);
        assert_eq!(occupancy.free_count(), 64);
    }

    #[test]
    fn test_marks_only_occupied_cells() {
        let grid = GridConfig::default();
        let items = vec![PlacedItem::new("b1", "boots", 0, 0)];
        let occupancy = build_occupancy(&items, &catalog(), &grid, None);

        assert_eq!(occupancy.owner_at(0, 0), Some("b1"));
        assert_eq!(occupancy.owner_at(1, 0), Some("b1"));
        assert_eq!(occupancy.owner_at(0, 1), Some("b1"));
        assert_eq!(occupancy.owner_at(1, 1), None);
        assert!(occupancy.is_free(1, 1));
        assert_eq!(occupancy.occupied_count(), 3);

        let cells: Vec<_> = occupancy.cells_of("b1").collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (0, 1)]);
    }

    #[test]
    fn test_ignore_skips_item() {
        let grid = GridConfig::default();
        let items = vec![
            PlacedItem::new("p1", "potion", 0, 0),
            PlacedItem::new("g1", "gem", 3, 3),
        ];
        let occupancy = build_occupancy(&items, &catalog(), &grid, Some("p1"));
        assert!(occupancy.is_free(0, 0));
        assert_eq!(occupancy.owner_at(3, 3), Some("g1"));
    }

    #[test]
    fn test_unknown_type_contributes_nothing() {
        let grid = GridConfig::default();
        let items = vec![PlacedItem::new("x1", "sword", 0, 0)];
        let occupancy = build_occupancy(&items, &catalog(), &grid, None);
        assert_eq!(occupancy.occupied_count(), 0);
    }

    #[test]
    fn test_out_of_bounds_cells_dropped() {
        let grid = GridConfig::with_size(2, 2);
        let items = vec![
            PlacedItem::new("p1", "potion", 1, 1),
            PlacedItem::new("b1", "boots", -1, -1),
        ];
        let occupancy = build_occupancy(&items, &catalog(), &grid, None);
        assert_eq!(occupancy.owner_at(1, 1), Some("p1"));
        // boots at (-1, -1) covers (-1, -1), (0, -1) and (-1, 0), all off-grid
        assert_eq!(occupancy.occupied_count(), 1);
        assert_eq!(occupancy.owner_at(1, 2), None);
        assert_eq!(occupancy.owner_at(-1, 0), None);
    }

    #[test]
    fn test_overlap_last_write_wins() {
        let grid = GridConfig::default();
        let items = vec![
            PlacedItem::new("g1", "gem", 2, 2),
            PlacedItem::new("g2", "gem", 2, 2),
        ];
        let occupancy = build_occupancy(&items, &catalog(), &grid, None);
        assert_eq!(occupancy.owner_at(2, 2), Some("g2"));
        assert_eq!(occupancy.occupied_count(), 1);
    }

    #[test]
    fn test_to_rows_shape() {
        let grid = GridConfig::with_size(2, 3);
        let items = vec![PlacedItem::new("g1", "gem", 2, 1)];
        let rows = build_occupancy(&items, &catalog(), &grid, None).to_rows();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.len() == 3));
        assert_eq!(rows[1][2].as_deref(), Some("g1"));
        assert_eq!(rows[0][2], None);
    }

    #[test]
    fn test_display_overlay() {
        let grid = GridConfig::with_size(3, 3);
        let items = vec![
            PlacedItem::new("b1", "boots", 0, 0),
            PlacedItem::new("p1", "potion", 2, 1),
        ];
        let occupancy = build_occupancy(&items, &catalog(), &grid, None);
        assert_eq!(occupancy.to_string(), "AA.\nA.B\n..B");
    }
}
