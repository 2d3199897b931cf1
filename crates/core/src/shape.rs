//! Item shapes and the explicit rotation transform.
//!
//! A [`Shape`] is a dense rectangular boolean matrix. Occupied cells are `true`;
//! the matrix bounds are the item's bounding box. Shapes are immutable once built.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Quarter-turn rotation carried by placed items.
///
/// Nothing in the engine applies a rotation on its own. Callers that want a rotated
/// footprint call [`Shape::rotated`] and validate the returned shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rotation {
    /// Original orientation.
    #[default]
    Deg0,
    /// One clockwise quarter turn.
    Deg90,
    /// Half turn.
    Deg180,
    /// Three clockwise quarter turns.
    Deg270,
}

impl Rotation {
    /// All rotations in clockwise order.
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    /// Parses a rotation from degrees. Accepts any multiple of 90, including negatives.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        if degrees % 90 != 0 {
            return None;
        }
        Some(Self::from_quarter_turns(degrees / 90))
    }

    /// Builds a rotation from a (possibly negative) count of clockwise quarter turns.
    pub fn from_quarter_turns(turns: i32) -> Self {
        match turns.rem_euclid(4) {
            0 => Self::Deg0,
            1 => Self::Deg90,
            2 => Self::Deg180,
            _ => Self::Deg270,
        }
    }

    /// Returns the rotation in degrees (0, 90, 180 or 270).
    pub fn degrees(self) -> i32 {
        self.quarter_turns() as i32 * 90
    }

    /// Returns the number of clockwise quarter turns (0..4).
    pub fn quarter_turns(self) -> u8 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 1,
            Self::Deg180 => 2,
            Self::Deg270 => 3,
        }
    }

    /// Returns the rotation one quarter turn further clockwise.
    pub fn clockwise(self) -> Self {
        Self::from_quarter_turns(self.quarter_turns() as i32 + 1)
    }

    /// Returns the rotation one quarter turn counter-clockwise.
    pub fn counter_clockwise(self) -> Self {
        Self::from_quarter_turns(self.quarter_turns() as i32 - 1)
    }
}

/// Rectangular boolean occupancy matrix of an item type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")
)]
pub struct Shape {
    width: usize,
    height: usize,
    /// Row-major cells, `width * height` long.
    cells: Vec<bool>,
}

impl Shape {
    /// Creates a shape from rows of cells.
    ///
    /// Fails if the matrix is empty, ragged, or has no occupied cell.
    pub fn new(rows: Vec<Vec<bool>>) -> Result<Self> {
        let height = rows.len();
        if height == 0 {
            return Err(Error::InvalidShape("Shape must have at least one row".into()));
        }

        let width = rows[0].len();
        if width == 0 {
            return Err(Error::InvalidShape(
                "Shape must have at least one column".into(),
            ));
        }

        let mut cells = Vec::with_capacity(width * height);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(Error::InvalidShape(format!(
                    "Row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    width
                )));
            }
            cells.extend(row);
        }

        if !cells.iter().any(|&c| c) {
            return Err(Error::InvalidShape(
                "Shape must have at least one occupied cell".into(),
            ));
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Creates a fully occupied `width x height` shape.
    pub fn rectangle(width: usize, height: usize) -> Result<Self> {
        Self::new(vec![vec![true; width]; height])
    }

    /// Creates a single-cell shape.
    pub fn unit() -> Self {
        Self {
            width: 1,
            height: 1,
            cells: vec![true],
        }
    }

    /// Parses a shape from a text pattern, one row per line.
    ///
    /// `#`, `X`, `x` and `1` mark occupied cells; `.`, `_` and `0` mark free ones.
    /// Blank lines and surrounding whitespace are ignored.
    ///
    /// ```rust
    /// use backpack_core::Shape;
    ///
    /// let boots = Shape::parse("##\n#.").unwrap();
    /// assert_eq!((boots.width(), boots.height()), (2, 2));
    /// assert_eq!(boots.cell_count(), 3);
    /// ```
    pub fn parse(pattern: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for line in pattern.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let row = line
                .chars()
                .map(|ch| match ch {
                    '#' | 'X' | 'x' | '1' => Ok(true),
                    '.' | '_' | '0' => Ok(false),
                    other => Err(Error::InvalidShape(format!(
                        "Unexpected character '{}' in shape pattern",
                        other
                    ))),
                })
                .collect::<Result<Vec<bool>>>()?;
            rows.push(row);
        }
        Self::new(rows)
    }

    /// Bounding-box width (column count).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Bounding-box height (row count).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bounding-box area, `width * height`. Used as the packing sort key.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Number of occupied cells.
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Returns whether the cell at `(row, col)` is occupied. Out-of-range is free.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }

    /// Iterates occupied cells as `(row, col)` offsets in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &occupied)| occupied)
            .map(move |(i, _)| (i / width, i % width))
    }

    /// Returns the matrix as rows of cells.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells.chunks(self.width).map(<[bool]>::to_vec).collect()
    }

    /// Returns a copy rotated clockwise by `rotation`.
    ///
    /// Each quarter turn transposes the matrix and reverses its rows, so a
    /// `w x h` shape becomes `h x w`.
    pub fn rotated(&self, rotation: Rotation) -> Shape {
        let mut shape = self.clone();
        for _ in 0..rotation.quarter_turns() {
            shape = shape.quarter_turn();
        }
        shape
    }

    fn quarter_turn(&self) -> Shape {
        let (w, h) = (self.width, self.height);
        let mut cells = vec![false; w * h];
        // new[r][c] = old[h - 1 - c][r], new matrix is h wide and w tall.
        for r in 0..w {
            for c in 0..h {
                cells[r * h + c] = self.cells[(h - 1 - c) * w + r];
            }
        }
        Shape {
            width: h,
            height: w,
            cells,
        }
    }
}

impl TryFrom<Vec<Vec<bool>>> for Shape {
    type Error = Error;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<Shape> for Vec<Vec<bool>> {
    fn from(shape: Shape) -> Self {
        shape.to_rows()
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.chunks(self.width).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                write!(f, "{}", if cell { '#' } else { '.' })?;
            }
        }
        Ok(())
    }
}
