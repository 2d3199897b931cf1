//! Stateful backpack holding the committed item list.
//!
//! [`Backpack`] owns the authoritative list of placed items and only ever commits
//! placements that validate, so the committed set never contains a collision or an
//! out-of-bounds footprint. Interactive moves go through a two-phase transaction:
//! [`Backpack::begin_move`] detaches the item, then [`Backpack::commit_move`] or
//! [`Backpack::cancel_move`] puts it back.

use crate::occupancy::{build_occupancy, OccupancyGrid};
use crate::organizer::organize_report;
use crate::placement::{check_placement, PlacementVerdict};
use backpack_core::{
    Catalog, Error, GridConfig, OrganizeResult, PlacedItem, Result, ShapeCatalog,
};
use thiserror::Error as ThisError;

/// An item taken out of the committed set by [`Backpack::begin_move`].
///
/// Must be handed back through [`Backpack::commit_move`] or
/// [`Backpack::cancel_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a detached item is lost unless committed or cancelled"]
pub struct DetachedItem {
    item: PlacedItem,
}

impl DetachedItem {
    /// Returns the item as it was before the move started.
    pub fn original(&self) -> &PlacedItem {
        &self.item
    }

    /// Returns the instance id.
    pub fn id(&self) -> &str {
        &self.item.id
    }

    /// Gives up the transaction and returns the item.
    pub fn into_inner(self) -> PlacedItem {
        self.item
    }
}

/// A rejected move. Carries the detached item back so the caller can retry or cancel.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("{error}")]
pub struct MoveRejected {
    /// The item, still detached.
    pub detached: DetachedItem,
    /// Why the placement was refused.
    pub error: Error,
}

/// A grid of committed items bound to a catalog.
///
/// `C` is any [`ShapeCatalog`]; pass `&Catalog` or `Arc<Catalog>` to share one
/// catalog between backpacks.
///
/// ```rust
/// use backpack_grid::{Backpack, Catalog, GridConfig, ItemType, PlacedItem, Shape};
///
/// let catalog = Catalog::new()
///     .with_item(ItemType::new("potion", Shape::parse("#\n#").unwrap()));
/// let mut backpack = Backpack::new(GridConfig::default(), &catalog).unwrap();
///
/// backpack.place(PlacedItem::new("p1", "potion", 0, 0)).unwrap();
///
/// let drag = backpack.begin_move("p1").unwrap();
/// backpack.commit_move(drag, 3, 2).unwrap();
/// assert_eq!(backpack.get("p1").unwrap().position(), (3, 2));
/// ```
#[derive(Debug, Clone)]
pub struct Backpack<C: ShapeCatalog = Catalog> {
    grid: GridConfig,
    catalog: C,
    items: Vec<PlacedItem>,
}

impl<C: ShapeCatalog> Backpack<C> {
    /// Creates an empty backpack.
    pub fn new(grid: GridConfig, catalog: C) -> Result<Self> {
        grid.validate()?;
        Ok(Self {
            grid,
            catalog,
            items: Vec::new(),
        })
    }

    /// Creates a backpack and commits `items` one by one, failing on the first
    /// item that does not validate.
    pub fn with_items(
        grid: GridConfig,
        catalog: C,
        items: impl IntoIterator<Item = PlacedItem>,
    ) -> Result<Self> {
        let mut backpack = Self::new(grid, catalog)?;
        for item in items {
            backpack.place(item)?;
        }
        Ok(backpack)
    }

    /// Returns the grid dimensions.
    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// Returns the catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Returns the committed items in insertion order.
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    /// Number of committed items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is committed.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the committed item with instance id `id`.
    pub fn get(&self, id: &str) -> Option<&PlacedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns whether an item with instance id `id` is committed.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Builds the current occupancy.
    pub fn occupancy(&self) -> OccupancyGrid {
        build_occupancy(&self.items, &self.catalog, &self.grid, None)
    }

    /// Returns whether an item of `item_type` could be committed at `(x, y)`.
    ///
    /// `ignore` leaves one committed item out of the check. Unknown types never fit.
    pub fn can_place_type(&self, item_type: &str, x: i32, y: i32, ignore: Option<&str>) -> bool {
        match self.catalog.shape(item_type) {
            Some(shape) => check_placement(
                shape,
                x,
                y,
                &self.grid,
                &self.items,
                &self.catalog,
                ignore,
            )
            .fits(),
            None => false,
        }
    }

    /// Validates `item` against the committed set, skipping `ignore`.
    fn validate(&self, item: &PlacedItem, ignore: Option<&str>) -> Result<()> {
        let shape = self
            .catalog
            .shape(&item.item_type)
            .ok_or_else(|| Error::UnknownItemType(item.item_type.clone()))?;

        match check_placement(
            shape,
            item.x,
            item.y,
            &self.grid,
            &self.items,
            &self.catalog,
            ignore,
        ) {
            PlacementVerdict::Fits => Ok(()),
            PlacementVerdict::OutOfBounds => Err(Error::OutOfBounds {
                instance: item.id.clone(),
                x: item.x,
                y: item.y,
            }),
            PlacementVerdict::Collides { with, cell } => Err(Error::Collision {
                instance: item.id.clone(),
                other: with,
                x: cell.0,
                y: cell.1,
            }),
        }
    }

    /// Commits `item` if its id is new and its placement validates.
    pub fn place(&mut self, item: PlacedItem) -> Result<()> {
        if self.contains(&item.id) {
            return Err(Error::DuplicateInstance(item.id));
        }
        if let Err(e) = self.validate(&item, None) {
            log::debug!("Rejected placement of {}: {}", item.id, e);
            return Err(e);
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the item with instance id `id`.
    pub fn remove(&mut self, id: &str) -> Result<PlacedItem> {
        let pos = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| Error::UnknownInstance(id.to_string()))?;
        Ok(self.items.remove(pos))
    }

    /// Removes every item, returning them in insertion order.
    pub fn clear(&mut self) -> Vec<PlacedItem> {
        std::mem::take(&mut self.items)
    }

    /// Repacks every committed item with the first-fit packer.
    ///
    /// Items that no longer fit are removed from the backpack; their ids are listed
    /// in the returned result's `unplaced`.
    pub fn organize(&mut self) -> OrganizeResult {
        let result = organize_report(&self.items, &self.catalog, &self.grid);
        if !result.unplaced.is_empty() {
            log::warn!(
                "Organize dropped {} item(s): {:?}",
                result.unplaced.len(),
                result.unplaced
            );
        }
        self.items = result.items.clone();
        result
    }

    /// Starts moving the item with instance id `id`.
    ///
    /// The item leaves the committed set until the returned token is passed to
    /// [`commit_move`](Self::commit_move) or [`cancel_move`](Self::cancel_move).
    pub fn begin_move(&mut self, id: &str) -> Result<DetachedItem> {
        let item = self.remove(id)?;
        log::trace!("Detached {} from ({}, {})", item.id, item.x, item.y);
        Ok(DetachedItem { item })
    }

    /// Returns whether `detached` could be committed at `(x, y)` right now.
    pub fn can_commit_move(&self, detached: &DetachedItem, x: i32, y: i32) -> bool {
        self.can_place_type(&detached.item.item_type, x, y, None)
    }

    /// Commits `detached` at `(x, y)`. On rejection the item stays detached and is
    /// returned inside the error.
    pub fn commit_move(
        &mut self,
        detached: DetachedItem,
        x: i32,
        y: i32,
    ) -> std::result::Result<(), MoveRejected> {
        let moved = detached.item.at(x, y);
        self.place(moved)
            .map_err(|error| MoveRejected { detached, error })
    }

    /// Puts `detached` back at its original coordinates.
    ///
    /// Fails only if something was committed over the original slot while the item
    /// was detached; the item is then returned inside the error.
    pub fn cancel_move(&mut self, detached: DetachedItem) -> std::result::Result<(), MoveRejected> {
        let original = detached.item.clone();
        self.place(original)
            .map_err(|error| MoveRejected { detached, error })
    }
}
