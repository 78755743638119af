//! Core value types, re-exported from `boardwalk_base`.

pub use boardwalk_base::types::{
    Cell, Color, Coord, CoordParseError, File, OutOfRangeError, Piece, Rank,
};
