//! Drag gesture tracking: pointer events in, at most one board mutation out.

use crate::board::Board;
use crate::types::{Cell, Coord};
use boardwalk_base::geometry::{BoardMetrics, Point};

/// A discrete pointer event with its pixel position
///
/// This is the whole input surface of the core. Whoever owns the window
/// translates its native mouse or touch events into this shape; anything
/// else (motion, scroll, secondary buttons) never reaches the controller.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    /// Primary button pressed at the given position
    Down(Point),
    /// Primary button released at the given position
    Up(Point),
}

impl PointerEvent {
    pub const fn pos(&self) -> Point {
        match *self {
            PointerEvent::Down(p) | PointerEvent::Up(p) => p,
        }
    }
}

/// State of the in-progress gesture, if any
///
/// The origin and the carried piece travel together in one variant, so
/// there is no way to observe a "dragging without an origin" state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DragState {
    /// No gesture in progress
    Idle,
    /// A piece is being carried, picked up from `origin`
    ///
    /// `piece` is a snapshot of what occupied the origin when the gesture
    /// started. The origin square itself stays occupied until the drop
    /// lands, so an abandoned gesture needs no undo.
    Dragging { origin: Coord, piece: Cell },
}

impl DragState {
    pub const fn is_dragging(&self) -> bool {
        matches!(*self, DragState::Dragging { .. })
    }

    pub const fn origin(&self) -> Option<Coord> {
        match *self {
            DragState::Idle => None,
            DragState::Dragging { origin, .. } => Some(origin),
        }
    }

    pub const fn piece(&self) -> Option<Cell> {
        match *self {
            DragState::Idle => None,
            DragState::Dragging { piece, .. } => Some(piece),
        }
    }
}

impl Default for DragState {
    #[inline]
    fn default() -> DragState {
        DragState::Idle
    }
}

/// Record of one completed drag gesture
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AppliedMove {
    pub from: Coord,
    pub to: Coord,
    /// The piece that was carried
    pub piece: Cell,
    /// Whatever the drop overwrote at `to`
    pub taken: Cell,
}

/// Converts pointer-down/pointer-up pairs into board mutations
///
/// The controller is a two-state machine over [`DragState`]. A press on an
/// occupied square starts a gesture; the matching release either applies
/// [`Board::move_piece()`] (release on the board) or abandons the gesture
/// (release outside it). Exactly one mutation happens per completed
/// gesture, and none otherwise.
#[derive(Debug, Clone)]
pub struct DragController {
    metrics: BoardMetrics,
    state: DragState,
}

impl DragController {
    pub fn new(metrics: BoardMetrics) -> DragController {
        DragController {
            metrics,
            state: DragState::Idle,
        }
    }

    /// Returns the current gesture state
    #[inline]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[inline]
    pub fn metrics(&self) -> BoardMetrics {
        self.metrics
    }

    /// Feeds one pointer event through the state machine
    ///
    /// Returns the move that was applied to `board`, if the event completed
    /// a gesture.
    pub fn apply(&mut self, board: &mut Board, ev: PointerEvent) -> Option<AppliedMove> {
        match ev {
            PointerEvent::Down(pos) => {
                self.press(board, pos);
                None
            }
            PointerEvent::Up(pos) => self.release(board, pos),
        }
    }

    /// Abandons the gesture in progress, if any
    ///
    /// Equivalent to a release outside the board: the carried piece stays
    /// at its origin. Collaborators call this when pointer capture is lost,
    /// e.g. on window focus loss.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    fn press(&mut self, board: &Board, pos: Point) {
        if self.state.is_dragging() {
            // A second press mid-gesture is dropped; the single-button
            // model has no nested drags. `cancel()` is the explicit way out.
            return;
        }
        let origin = match self.metrics.coord_at(pos) {
            Ok(c) => c,
            // Presses outside the canvas grab nothing.
            Err(_) => return,
        };
        let piece = board.get(origin);
        if piece.is_occupied() {
            self.state = DragState::Dragging { origin, piece };
        }
    }

    fn release(&mut self, board: &mut Board, pos: Point) -> Option<AppliedMove> {
        let (origin, piece) = match self.state {
            DragState::Dragging { origin, piece } => (origin, piece),
            DragState::Idle => return None,
        };
        self.state = DragState::Idle;
        // An out-of-range release abandons the gesture. The origin square
        // was never cleared, so the piece is simply still there.
        let to = match self.metrics.coord_at(pos) {
            Ok(c) => c,
            Err(_) => return None,
        };
        let taken = board.move_piece(origin, to);
        Some(AppliedMove {
            from: origin,
            to,
            piece,
            taken,
        })
    }
}
