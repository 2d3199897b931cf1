//! Item-type catalog.
//!
//! The catalog maps item-type ids to their shapes and display metadata. It is built
//! once and passed by reference into every grid operation; nothing in the engine
//! keeps a process-wide copy.

use crate::shape::Shape;
use crate::{Error, Result};
use std::collections::HashMap;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of an item type (catalog key).
pub type ItemTypeId = String;

/// Shape lookup used by the occupancy, placement and packing operations.
///
/// Implemented by [`Catalog`] and by plain maps from item-type id to shape.
pub trait ShapeCatalog {
    /// Returns the shape of `item_type`, or `None` if the type is unknown.
    fn shape(&self, item_type: &str) -> Option<&Shape>;

    /// Returns whether `item_type` is known.
    fn contains_type(&self, item_type: &str) -> bool {
        self.shape(item_type).is_some()
    }
}

impl ShapeCatalog for HashMap<ItemTypeId, Shape> {
    fn shape(&self, item_type: &str) -> Option<&Shape> {
        self.get(item_type)
    }
}

impl<C: ShapeCatalog + ?Sized> ShapeCatalog for &C {
    fn shape(&self, item_type: &str) -> Option<&Shape> {
        (**self).shape(item_type)
    }
}

impl<C: ShapeCatalog + ?Sized> ShapeCatalog for Arc<C> {
    fn shape(&self, item_type: &str) -> Option<&Shape> {
        (**self).shape(item_type)
    }
}

/// A catalog entry: identifier, display metadata and shape.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemType {
    /// Unique identifier.
    id: ItemTypeId,

    /// Display name. Defaults to the id.
    name: String,

    /// Display color, opaque to the engine.
    #[cfg_attr(feature = "serde", serde(default))]
    color: Option<String>,

    /// Occupancy shape.
    shape: Shape,
}

impl ItemType {
    /// Creates an item type with the given id and shape.
    pub fn new(id: impl Into<ItemTypeId>, shape: Shape) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            color: None,
            shape,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Returns the id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display color, if any.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Returns the shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

/// Immutable mapping from item-type id to [`ItemType`].
///
/// Entries keep their insertion order for iteration.
///
/// ```rust
/// use backpack_core::{Catalog, ItemType, Shape, ShapeCatalog};
///
/// let catalog = Catalog::new()
///     .with_item(ItemType::new("potion", Shape::parse("#\n#").unwrap()))
///     .with_item(ItemType::new("boots", Shape::parse("##\n#.").unwrap()).with_color("brown"));
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.shape("potion").unwrap().height(), 2);
/// assert!(catalog.shape("sword").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<ItemType>", into = "Vec<ItemType>")
)]
pub struct Catalog {
    items: Vec<ItemType>,
    index: HashMap<ItemTypeId, usize>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from entries, rejecting duplicate ids.
    pub fn try_from_items(items: impl IntoIterator<Item = ItemType>) -> Result<Self> {
        let mut catalog = Self::new();
        for item in items {
            if catalog.index.contains_key(item.id()) {
                return Err(Error::InvalidCatalog(format!(
                    "Duplicate item type id: {}",
                    item.id()
                )));
            }
            catalog.insert(item);
        }
        Ok(catalog)
    }

    /// Adds an entry. A later entry with the same id replaces the earlier one.
    pub fn with_item(mut self, item: ItemType) -> Self {
        if let Some(&slot) = self.index.get(item.id()) {
            log::warn!("Catalog entry '{}' redefined", item.id());
            self.items[slot] = item;
        } else {
            self.insert(item);
        }
        self
    }

    fn insert(&mut self, item: ItemType) {
        self.index.insert(item.id.clone(), self.items.len());
        self.items.push(item);
    }

    /// Returns the entry for `id`.
    pub fn get(&self, id: &str) -> Option<&ItemType> {
        self.index.get(id).map(|&slot| &self.items[slot])
    }

    /// Returns whether `id` is defined.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemType> {
        self.items.iter()
    }
}

impl ShapeCatalog for Catalog {
    fn shape(&self, item_type: &str) -> Option<&Shape> {
        self.get(item_type).map(ItemType::shape)
    }
}

impl TryFrom<Vec<ItemType>> for Catalog {
    type Error = Error;

    fn try_from(items: Vec<ItemType>) -> Result<Self> {
        Self::try_from_items(items)
    }
}

impl From<Catalog> for Vec<ItemType> {
    fn from(catalog: Catalog) -> Self {
        catalog.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn potion() -> ItemType {
        ItemType::new("potion", Shape::parse("#\n#").unwrap())
            .with_name("Potion")
            .with_color("red")
    }

    #[test]
    fn test_item_type_metadata() {
        let item = potion();
        assert_eq!(item.id(), "potion");
        assert_eq!(item.name(), "Potion");
        assert_eq!(item.color(), Some("red"));

        let plain = ItemType::new("gem", Shape::unit());
        assert_eq!(plain.name(), "gem");
        assert_eq!(plain.color(), None);
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::new()
            .with_item(potion())
            .with_item(ItemType::new("gem", Shape::unit()));

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("gem"));
        assert!(catalog.contains_type("potion"));
        assert!(!catalog.contains_type("sword"));
        assert_eq!(catalog.get("potion").unwrap().name(), "Potion");

        let ids: Vec<_> = catalog.iter().map(ItemType::id).collect();
        assert_eq!(ids, vec!["potion", "gem"]);
    }

    #[test]
    fn test_with_item_replaces() {
        let catalog = Catalog::new()
            .with_item(potion())
            .with_item(ItemType::new("potion", Shape::unit()));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.shape("potion").unwrap().area(), 1);
    }

    #[test]
    fn test_try_from_items_rejects_duplicates() {
        let result = Catalog::try_from_items(vec![potion(), potion()]);
        assert!(matches!(result, Err(Error::InvalidCatalog(_))));
    }

    #[test]
    fn test_hash_map_catalog() {
        let mut shapes: HashMap<ItemTypeId, Shape> = HashMap::new();
        shapes.insert("gem".into(), Shape::unit());
        assert!(shapes.shape("gem").is_some());
        assert!(shapes.shape("potion").is_none());
    }
}
