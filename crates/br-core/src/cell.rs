//! Cellule Braille six points.
//!
//! Disposition des points :
//! ```text
//! +---+---+
//! | 1 | 4 |
//! +---+---+
//! | 2 | 5 |
//! +---+---+
//! | 3 | 6 |
//! +---+---+
//! ```
//!
//! Dot *n* is stored as bit *n − 1*, the same layout as the Unicode Braille
//! Patterns block, so a cell's glyph is simply `U+2800 + bits`.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CellError;

/// Number of dot positions in a six-dot cell.
pub const DOT_COUNT: u8 = 6;

/// Braille Patterns base codepoint (U+2800).
pub const BRAILLE_BASE: u32 = 0x2800;

const DOT_MASK: u8 = 0b0011_1111;

/// Ordered list of cells in reading order.
pub type CellSequence = Vec<Cell>;

/// A single Braille cell: a set of raised dots in `1..=6`.
///
/// Equality is set equality, whatever the order the dots were supplied in.
///
/// # Example
/// ```
/// use br_core::cell::Cell;
/// let a = Cell::from_dots(&[5, 1, 2]).unwrap();
/// let b = Cell::from_dots(&[1, 2, 5]).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.to_vec(), vec![1, 2, 5]);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell(u8);

impl Cell {
    /// Cell with no raised dot. Used as the space glyph.
    pub const EMPTY: Cell = Cell(0);

    /// Cell with all six dots raised.
    pub const FULL: Cell = Cell(DOT_MASK);

    /// Build a cell from its raw 6-bit mask.
    ///
    /// # Errors
    /// Returns [`CellError::DotOutOfRange`] if bit 6 or 7 (dots 7/8 of
    /// eight-dot Braille) is set.
    ///
    /// # Example
    /// ```
    /// use br_core::cell::Cell;
    /// assert_eq!(Cell::from_bits(0b0001_0011).unwrap().to_vec(), vec![1, 2, 5]);
    /// assert!(Cell::from_bits(0b0100_0000).is_err());
    /// ```
    pub fn from_bits(bits: u8) -> Result<Self, CellError> {
        let extra = bits & !DOT_MASK;
        if extra != 0 {
            // Report the highest offending dot (7 or 8).
            let dot = 8 - extra.leading_zeros() as u8;
            return Err(CellError::DotOutOfRange { dot });
        }
        Ok(Self(bits))
    }

    /// Build a cell from dot numbers in any order.
    ///
    /// # Errors
    /// [`CellError::DotOutOfRange`] for a dot outside `1..=6`,
    /// [`CellError::DuplicateDot`] when a dot is listed twice.
    pub fn from_dots(dots: &[u8]) -> Result<Self, CellError> {
        let mut bits = 0u8;
        for &dot in dots {
            let bit = dot_bit(dot)?;
            if bits & bit != 0 {
                return Err(CellError::DuplicateDot { dot });
            }
            bits |= bit;
        }
        Ok(Self(bits))
    }

    /// Raw 6-bit mask.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns a copy of this cell with `dot` raised as well (set union).
    ///
    /// # Errors
    /// [`CellError::DotOutOfRange`] for a dot outside `1..=6`.
    pub fn with_dot(self, dot: u8) -> Result<Self, CellError> {
        Ok(Self(self.0 | dot_bit(dot)?))
    }

    /// Whether `dot` is raised. Out-of-range dots are never raised.
    #[must_use]
    pub fn contains(self, dot: u8) -> bool {
        dot_bit(dot).is_ok_and(|bit| self.0 & bit != 0)
    }

    /// Raised dots in canonical (ascending) order.
    pub fn dots(self) -> impl Iterator<Item = u8> {
        (1..=DOT_COUNT).filter(move |&d| self.0 & (1 << (d - 1)) != 0)
    }

    /// Canonical list form, as exchanged on the wire.
    #[must_use]
    pub fn to_vec(self) -> Vec<u8> {
        self.dots().collect()
    }

    /// Number of raised dots.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Unicode Braille Patterns glyph for this cell.
    ///
    /// # Example
    /// ```
    /// use br_core::cell::Cell;
    /// assert_eq!(Cell::EMPTY.to_unicode(), '\u{2800}');
    /// assert_eq!(Cell::FULL.to_unicode(), '\u{283F}');
    /// ```
    #[must_use]
    pub const fn to_unicode(self) -> char {
        match char::from_u32(BRAILLE_BASE + self.0 as u32) {
            Some(c) => c,
            None => ' ',
        }
    }

    /// Inverse of [`Cell::to_unicode`]. Eight-dot patterns (U+2840..) and
    /// non-Braille chars yield `None`.
    #[must_use]
    pub fn from_unicode(ch: char) -> Option<Self> {
        let offset = u32::from(ch).checked_sub(BRAILLE_BASE)?;
        if offset > u32::from(DOT_MASK) {
            return None;
        }
        Some(Self(offset as u8))
    }
}

#[inline]
fn dot_bit(dot: u8) -> Result<u8, CellError> {
    if (1..=DOT_COUNT).contains(&dot) {
        Ok(1 << (dot - 1))
    } else {
        Err(CellError::DotOutOfRange { dot })
    }
}

/// Canonical notation: the raised dots concatenated (`125`), `_` for the
/// empty cell.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("_");
        }
        for dot in self.dots() {
            write!(f, "{dot}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.dots()).finish()
    }
}

/// Wire format: ordered list of dot numbers, e.g. `[1, 2, 5]`.
impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.dots())
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dots = Vec::<u8>::deserialize(deserializer)?;
        Cell::from_dots(&dots).map_err(D::Error::custom)
    }
}
