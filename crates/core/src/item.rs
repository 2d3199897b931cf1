//! Placed item instances.

use crate::catalog::ItemTypeId;
use crate::shape::{Rotation, Shape};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a placed instance. Unique among the items of one grid.
pub type InstanceId = String;

/// One concrete occurrence of an item type on the grid.
///
/// `x` and `y` address the top-left cell of the shape's bounding box. They are
/// signed because an item being dragged may sit partly off the grid; committed
/// items are always fully inside.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedItem {
    /// Instance identifier, caller generated.
    pub id: InstanceId,

    /// Catalog key of the item type.
    pub item_type: ItemTypeId,

    /// Column of the top-left cell.
    pub x: i32,

    /// Row of the top-left cell.
    pub y: i32,

    /// Rotation kept for the caller. Never applied by the engine.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotation: Rotation,
}

impl PlacedItem {
    /// Creates an unrotated item at `(x, y)`.
    pub fn new(id: impl Into<InstanceId>, item_type: impl Into<ItemTypeId>, x: i32, y: i32) -> Self {
        Self {
            id: id.into(),
            item_type: item_type.into(),
            x,
            y,
            rotation: Rotation::Deg0,
        }
    }

    /// Sets the rotation value.
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Returns a copy moved to `(x, y)`.
    pub fn at(&self, x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            ..self.clone()
        }
    }

    /// Returns the top-left coordinate as `(x, y)`.
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Iterates the absolute `(x, y)` cells covered by `shape` placed at this item's
    /// position. Cells may lie outside the grid.
    pub fn footprint<'a>(&self, shape: &'a Shape) -> impl Iterator<Item = (i64, i64)> + 'a {
        let (x, y) = (self.x as i64, self.y as i64);
        shape
            .cells()
            .map(move |(r, c)| (x + c as i64, y + r as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placed_item_defaults() {
        let item = PlacedItem::new("p1", "potion", 2, 3);
        assert_eq!(item.position(), (2, 3));
        assert_eq!(item.rotation, Rotation::Deg0);
    }

    #[test]
    fn test_at_keeps_identity() {
        let item = PlacedItem::new("p1", "potion", 2, 3).with_rotation(Rotation::Deg90);
        let moved = item.at(-1, 0);
        assert_eq!(moved.id, "p1");
        assert_eq!(moved.item_type, "potion");
        assert_eq!(moved.position(), (-1, 0));
        assert_eq!(moved.rotation, Rotation::Deg90);
    }

    #[test]
    fn test_footprint() {
        let boots = Shape::parse("##\n#.").unwrap();
        let item = PlacedItem::new("b1", "boots", 3, -1);
        let cells: Vec<_> = item.footprint(&boots).collect();
        assert_eq!(cells, vec![(3, -1), (4, -1), (3, 0)]);
    }
}
