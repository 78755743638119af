//! Pixel-space layout of the board canvas.

use crate::types::{Coord, OutOfRangeError};
use derive_more::{Add, AddAssign, Sub, SubAssign};
use std::fmt;

/// Number of squares along each edge of the board
pub const BOARD_DIM: u32 = 8;

/// A position on the canvas, in pixels
///
/// The origin is the top-left corner of the board, `x` grows to the right
/// and `y` grows downward. Positions outside the canvas (including negative
/// ones) are representable; they simply map to no square.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Add, AddAssign, Sub, SubAssign,
)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Pixel metrics of a rendered board
///
/// Everything derives from the square size, which in turn is the board
/// height divided by [`BOARD_DIM`]. The same metrics are used to resolve
/// pointer positions to squares and to place sprites when drawing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BoardMetrics {
    square_size: u32,
}

impl BoardMetrics {
    pub const fn from_square_size(px: u32) -> BoardMetrics {
        assert!(px > 0, "square size must be positive");
        BoardMetrics { square_size: px }
    }

    pub const fn from_board_size(px: u32) -> BoardMetrics {
        Self::from_square_size(px / BOARD_DIM)
    }

    pub const fn square_size(&self) -> u32 {
        self.square_size
    }

    pub const fn board_size(&self) -> u32 {
        self.square_size * BOARD_DIM
    }

    /// Resolves a pointer position to the square under it
    ///
    /// `row = y div square_size`, `col = x div square_size`, with floor
    /// division so that positions left of or above the canvas land out of
    /// range instead of on row or column zero.
    pub fn coord_at(&self, p: Point) -> Result<Coord, OutOfRangeError> {
        let sq = self.square_size as i32;
        Coord::from_indices(p.y.div_euclid(sq), p.x.div_euclid(sq))
    }

    /// Top-left pixel of a square
    pub fn origin_of(&self, c: Coord) -> Point {
        let sq = self.square_size as i32;
        Point::new(c.col() as i32 * sq, c.row() as i32 * sq)
    }

    /// Center pixel of a square, used to place rank and file labels
    pub fn center_of(&self, c: Coord) -> Point {
        let half = self.square_size as i32 / 2;
        self.origin_of(c) + Point::new(half, half)
    }

    /// Top-left corner for a sprite carried under the cursor
    ///
    /// The sprite is centered on the pointer, so the anchor sits half a
    /// square up and to the left of it.
    pub fn sprite_anchor(&self, cursor: Point) -> Point {
        let half = self.square_size as i32 / 2;
        cursor - Point::new(half, half)
    }
}
