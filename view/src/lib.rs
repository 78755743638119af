//! # boardwalk
//!
//! A minimal drag-and-drop chessboard viewer core.
//!
//! The crate owns the parts of a board viewer that have any logic in them:
//! the 8×8 [`Board`] with free piece placement, the [`DragController`]
//! state machine that turns pointer-down/pointer-up pairs into moves, the
//! pixel↔square [`geometry`], and the per-frame [`Viewer`] session the
//! render loop drives. Windowing, asset decoding and actual drawing stay in
//! the embedding application; [`SpriteSet`] and [`Cell::sprite_key()`] are
//! the seam the renderer hangs its textures on.
//!
//! There is deliberately no rules engine here: no legality, no turn order,
//! no history. A drag from any occupied square to any square on the board
//! succeeds.

pub mod board;
pub mod drag;
pub mod sprites;
pub mod types;
pub mod viewer;

pub use boardwalk_base as base;
pub use boardwalk_base::geometry::{self, BoardMetrics, Point};

pub use board::Board;
pub use drag::{AppliedMove, DragController, DragState, PointerEvent};
pub use sprites::SpriteSet;
pub use types::{Cell, Color, Coord, File, OutOfRangeError, Piece, Rank};
pub use viewer::Viewer;
