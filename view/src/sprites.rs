//! Read-only sprite lookup, built once at startup and handed to the renderer.

use crate::types::Cell;

/// An immutable table of the 12 piece sprites
///
/// `T` is whatever handle the rendering collaborator keeps per texture; the
/// core never looks inside it. The table is populated exactly once via
/// [`SpriteSet::build()`] during bootstrap and then only read, so the
/// renderer can hold it by shared reference for the life of the process.
///
/// # Example
///
/// ```
/// # use boardwalk::{Cell, Color, Piece, SpriteSet};
/// #
/// // A renderer would decode image files here; the asset names are the
/// // cells' sprite keys.
/// let set: SpriteSet<String> =
///     SpriteSet::build(|cell| -> Result<String, std::io::Error> {
///         Ok(format!("images/{}.png", cell.sprite_key().unwrap()))
///     })
///     .unwrap();
///
/// let wq = Cell::from_parts(Color::White, Piece::Queen);
/// assert_eq!(set.get(wq), Some(&"images/wQ.png".to_string()));
/// assert_eq!(set.get(Cell::EMPTY), None);
/// ```
#[derive(Debug, Clone)]
pub struct SpriteSet<T> {
    // Indexed by `cell.index() - 1`; empty has no sprite.
    sprites: [T; 12],
}

impl<T> SpriteSet<T> {
    /// Builds the table by invoking `loader` once per occupied cell value
    ///
    /// The first loader failure aborts the build and is returned unchanged,
    /// so decoding errors keep their own type.
    pub fn build<F, E>(mut loader: F) -> Result<SpriteSet<T>, E>
    where
        F: FnMut(Cell) -> Result<T, E>,
    {
        let mut loaded = Vec::with_capacity(12);
        for cell in Cell::iter().filter(|c| c.is_occupied()) {
            loaded.push(loader(cell)?);
        }
        let sprites = match loaded.try_into() {
            Ok(arr) => arr,
            Err(_) => unreachable!("there are exactly 12 occupied cell values"),
        };
        Ok(SpriteSet { sprites })
    }

    /// Returns the sprite for `cell`, or `None` for the empty cell
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<&T> {
        if cell.is_empty() {
            return None;
        }
        Some(&self.sprites[cell.index() - 1])
    }

    /// Iterates over all 12 (cell, sprite) pairs
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &T)> {
        self.sprites
            .iter()
            .enumerate()
            .map(|(i, t)| (Cell::from_index(i + 1), t))
    }
}
