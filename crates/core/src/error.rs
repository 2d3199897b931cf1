//! Error types for the backpack engine.

use thiserror::Error;

/// Errors raised while constructing domain values or mutating a backpack.
///
/// Core queries (`can_place`, `build_occupancy`, `organize`) never return these;
/// they answer with booleans and omissions instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Shape matrix is empty, ragged, or has no occupied cell.
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// Grid dimensions are unusable.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// Catalog definition is inconsistent.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Item type id is not present in the catalog.
    #[error("Unknown item type: {0}")]
    UnknownItemType(String),

    /// Instance id is already committed to the grid.
    #[error("Duplicate instance: {0}")]
    DuplicateInstance(String),

    /// Instance id is not committed to the grid.
    #[error("Unknown instance: {0}")]
    UnknownInstance(String),

    /// Footprint would leave the grid.
    #[error("Instance {instance} out of bounds at ({x}, {y})")]
    OutOfBounds {
        /// Instance being placed.
        instance: String,
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
    },

    /// Footprint would overlap a committed item.
    #[error("Instance {instance} collides with {other} at cell ({x}, {y})")]
    Collision {
        /// Instance being placed.
        instance: String,
        /// Committed instance owning the contested cell.
        other: String,
        /// Column of the first contested cell.
        x: usize,
        /// Row of the first contested cell.
        y: usize,
    },
}

/// Result type alias using the crate error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Collision {
            instance: "boots-1".into(),
            other: "potion-1".into(),
            x: 0,
            y: 1,
        };
        assert_eq!(
            err.to_string(),
            "Instance boots-1 collides with potion-1 at cell (0, 1)"
        );

        let err = Error::OutOfBounds {
            instance: "sword".into(),
            x: -1,
            y: 3,
        };
        assert_eq!(err.to_string(), "Instance sword out of bounds at (-1, 3)");
    }
}
