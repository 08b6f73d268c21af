//! Symétrie gauche/droite des cellules, pour la lecture côté embossé.
//!
//! ```text
//!  1 4      4 1
//!  2 5  ->  5 2
//!  3 6      6 3
//! ```

use br_core::cell::{Cell, CellSequence};
use br_core::error::CellError;

/// Reflected position of each dot, indexed by dot number. Slot 0 is unused.
const MIRROR: [u8; 7] = [0, 4, 5, 6, 1, 2, 3];

/// Reflect one dot position.
///
/// # Errors
/// [`CellError::DotOutOfRange`] for a dot outside `1..=6`.
pub fn mirror_dot(dot: u8) -> Result<u8, CellError> {
    MIRROR
        .get(usize::from(dot))
        .copied()
        .filter(|&d| d != 0)
        .ok_or(CellError::DotOutOfRange { dot })
}

/// Reflect every dot of `cell` about the vertical axis.
///
/// # Errors
/// Only if `cell` holds a dot outside `1..=6`, which a [`Cell`] built by
/// this workspace never does.
///
/// # Example
/// ```
/// use br_codec::mirror::mirror_cell;
/// use br_core::cell::Cell;
/// let left = Cell::from_dots(&[1, 2, 3]).unwrap();
/// assert_eq!(mirror_cell(left).unwrap().to_vec(), vec![4, 5, 6]);
/// ```
pub fn mirror_cell(cell: Cell) -> Result<Cell, CellError> {
    cell.dots()
        .try_fold(Cell::EMPTY, |acc, dot| acc.with_dot(mirror_dot(dot)?))
}

/// Mirror every cell; cell order is kept.
///
/// # Errors
/// See [`mirror_cell`].
pub fn mirror(cells: &[Cell]) -> Result<CellSequence, CellError> {
    cells.iter().map(|&c| mirror_cell(c)).collect()
}

/// Mirror every cell and reverse their order: a whole line as it reads
/// from the back of the sheet.
///
/// # Errors
/// See [`mirror_cell`].
pub fn mirror_line(cells: &[Cell]) -> Result<CellSequence, CellError> {
    cells.iter().rev().map(|&c| mirror_cell(c)).collect()
}
