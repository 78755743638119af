//! Per-frame session tying the board to its drag controller.

use crate::board::Board;
use crate::drag::{AppliedMove, DragController, DragState, PointerEvent};
use crate::types::Cell;
use boardwalk_base::geometry::{BoardMetrics, Point};

/// A board plus its interaction state, driven one frame at a time
///
/// The owning loop follows a strict per-iteration contract: drain all
/// pending pointer events through [`Viewer::drain()`], then let the
/// renderer read [`Viewer::board()`] and [`Viewer::drag()`]. Everything
/// runs synchronously on the loop's thread, so the renderer never observes
/// a half-applied move.
///
/// # Example
///
/// ```
/// # use boardwalk::{BoardMetrics, Point, PointerEvent, Viewer};
/// #
/// let mut viewer = Viewer::new(BoardMetrics::from_board_size(512));
///
/// // One frame's worth of input: pick the a8 rook up, drop it on a6.
/// let moves = viewer.drain([
///     PointerEvent::Down(Point::new(10, 10)),
///     PointerEvent::Up(Point::new(10, 138)),
/// ]);
/// assert_eq!(moves.len(), 1);
/// assert_eq!(moves[0].to.row(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Viewer {
    board: Board,
    drag: DragController,
}

impl Viewer {
    /// Creates a viewer over the standard starting position
    pub fn new(metrics: BoardMetrics) -> Viewer {
        Viewer::with_board(Board::initial(), metrics)
    }

    /// Creates a viewer over an arbitrary board
    pub fn with_board(board: Board, metrics: BoardMetrics) -> Viewer {
        Viewer {
            board,
            drag: DragController::new(metrics),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the board, for collaborators that place pieces
    /// outside the drag flow
    #[inline]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Returns the current gesture state, for the renderer
    #[inline]
    pub fn drag(&self) -> DragState {
        self.drag.state()
    }

    #[inline]
    pub fn metrics(&self) -> BoardMetrics {
        self.drag.metrics()
    }

    /// Feeds a single pointer event through the controller
    pub fn apply(&mut self, ev: PointerEvent) -> Option<AppliedMove> {
        self.drag.apply(&mut self.board, ev)
    }

    /// Drains one frame's worth of pointer events, in order
    ///
    /// Returns the moves completed during this frame (usually zero or one;
    /// more if several full gestures queued up between frames).
    pub fn drain<I>(&mut self, events: I) -> Vec<AppliedMove>
    where
        I: IntoIterator<Item = PointerEvent>,
    {
        events.into_iter().filter_map(|ev| self.apply(ev)).collect()
    }

    /// The sprite to draw under the cursor, if a drag is in progress
    ///
    /// Returns the carried piece and the top-left pixel to draw it at for
    /// the given cursor position. The origin square meanwhile still holds
    /// the piece; renderers that want it to look vacated can compare
    /// squares against [`DragState::origin()`].
    pub fn floating_sprite(&self, cursor: Point) -> Option<(Cell, Point)> {
        let piece = self.drag.state().piece()?;
        Some((piece, self.metrics().sprite_anchor(cursor)))
    }

    /// Restores the starting position and abandons any gesture in progress
    pub fn reset(&mut self) {
        self.board.reset();
        self.drag.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Coord, Piece};

    fn viewer() -> Viewer {
        Viewer::new(BoardMetrics::from_board_size(512))
    }

    fn sq_center(row: i32, col: i32) -> Point {
        Point::new(col * 64 + 32, row * 64 + 32)
    }

    #[test]
    fn test_corner_gesture_scenario() {
        // Down at (10, 10) grabs the back-rank piece in the top-left
        // corner; up one square size lower drops it on (1, 0).
        let mut v = viewer();
        let rook = Cell::from_parts(Color::Black, Piece::Rook);

        assert_eq!(v.apply(PointerEvent::Down(Point::new(10, 10))), None);
        let applied = v.apply(PointerEvent::Up(Point::new(10, 10 + 64))).unwrap();

        assert_eq!(applied.from, Coord::from_row_col(0, 0));
        assert_eq!(applied.to, Coord::from_row_col(1, 0));
        assert_eq!(v.board().get(Coord::from_row_col(1, 0)), rook);
        assert!(v.board().get(Coord::from_row_col(0, 0)).is_empty());
    }

    #[test]
    fn test_empty_square_scenario() {
        // Down on a known-empty mid-board square leaves the viewer idle and
        // the following up mutates nothing.
        let mut v = viewer();
        let before = *v.board();

        v.apply(PointerEvent::Down(sq_center(4, 4)));
        assert_eq!(v.drag(), DragState::Idle);
        v.apply(PointerEvent::Up(sq_center(7, 7)));
        assert_eq!(*v.board(), before);
    }

    #[test]
    fn test_drain_multiple_gestures() {
        let mut v = viewer();
        let moves = v.drain([
            PointerEvent::Down(sq_center(6, 4)),
            PointerEvent::Up(sq_center(4, 4)),
            PointerEvent::Down(sq_center(1, 4)),
            PointerEvent::Up(sq_center(3, 4)),
        ]);

        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0].from, Coord::from_row_col(6, 4));
        assert_eq!(moves[1].from, Coord::from_row_col(1, 4));
        assert_eq!(v.drag(), DragState::Idle);
    }

    #[test]
    fn test_drain_keeps_gesture_across_frames() {
        // A frame can end mid-gesture; the next frame's release resolves it.
        let mut v = viewer();

        let moves = v.drain([PointerEvent::Down(sq_center(7, 1))]);
        assert!(moves.is_empty());
        assert!(v.drag().is_dragging());

        let moves = v.drain([PointerEvent::Up(sq_center(5, 2))]);
        assert_eq!(moves.len(), 1);
        assert_eq!(
            v.board().get(Coord::from_row_col(5, 2)),
            Cell::from_parts(Color::White, Piece::Knight)
        );
    }

    #[test]
    fn test_floating_sprite() {
        let mut v = viewer();
        assert_eq!(v.floating_sprite(Point::new(100, 100)), None);

        v.apply(PointerEvent::Down(sq_center(0, 0)));
        let (piece, anchor) = v.floating_sprite(Point::new(100, 100)).unwrap();
        assert_eq!(piece, Cell::from_parts(Color::Black, Piece::Rook));
        // Centered on the cursor: anchored half a square up and left.
        assert_eq!(anchor, Point::new(68, 68));
    }

    #[test]
    fn test_reset() {
        let mut v = viewer();
        v.drain([
            PointerEvent::Down(sq_center(6, 0)),
            PointerEvent::Up(sq_center(3, 0)),
            PointerEvent::Down(sq_center(7, 0)),
        ]);
        assert!(v.drag().is_dragging());

        v.reset();
        assert_eq!(v.drag(), DragState::Idle);
        assert_eq!(*v.board(), Board::initial());
    }

    #[test]
    fn test_random_events_never_add_pieces() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        // Whatever the pointer does, pieces can only disappear (captures
        // and identity drops), never multiply.
        let mut rng = StdRng::seed_from_u64(0xB0A2D);
        let mut v = viewer();
        let mut count = 32;
        for _ in 0..2000 {
            let pos = Point::new(rng.gen_range(-64..576), rng.gen_range(-64..576));
            let ev = if rng.gen_bool(0.5) {
                PointerEvent::Down(pos)
            } else {
                PointerEvent::Up(pos)
            };
            v.apply(ev);
            let now = v.board().cells.iter().filter(|c| c.is_occupied()).count();
            assert!(now <= count);
            count = now;
        }
    }

    #[test]
    fn test_board_mut_free_placement() {
        let mut v = viewer();
        let c = Coord::from_row_col(4, 4);
        v.board_mut()
            .put(c, Cell::from_parts(Color::White, Piece::Queen));
        assert_eq!(
            v.board().get(c),
            Cell::from_parts(Color::White, Piece::Queen)
        );
    }
}
