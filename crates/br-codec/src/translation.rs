use br_core::cell::{Cell, CellSequence};
use serde::Serialize;

/// What a translator emits for a unit it cannot map.
///
/// The encoder uses `Fallback<Cell>`, the decoder `Fallback<char>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fallback<T> {
    /// Emit nothing; the output is shorter than the input.
    Skip,
    /// Emit this value in place of the unit.
    Placeholder(T),
}

impl<T: Copy> Fallback<T> {
    #[must_use]
    pub fn placeholder(&self) -> Option<T> {
        match self {
            Fallback::Skip => None,
            Fallback::Placeholder(p) => Some(*p),
        }
    }
}

/// An input unit that had no counterpart, with its position in the input
/// (char index for text, cell index for sequences).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Unmapped<U> {
    pub index: usize,
    pub unit: U,
}

/// Result of a full translation: input, output, and the units that went
/// through the fallback policy.
///
/// # Example
/// ```
/// use br_codec::alphabet;
/// use br_codec::encoder::Encoder;
///
/// let result = Encoder::new(alphabet::standard().unwrap()).encode("a@b");
/// assert!(!result.is_exact());
/// assert!(result.is_unmapped(1));
/// assert_eq!(result.unmapped[0].unit, '@');
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Translation<I, O, U> {
    pub input: I,
    pub output: O,
    pub unmapped: Vec<Unmapped<U>>,
}

/// Text → Braille.
pub type TextTranslation = Translation<String, CellSequence, char>;

/// Braille → text.
pub type CellTranslation = Translation<CellSequence, String, Cell>;

impl<I, O, U> Translation<I, O, U> {
    /// No unit needed the fallback policy.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.unmapped.is_empty()
    }

    #[must_use]
    pub fn is_unmapped(&self, index: usize) -> bool {
        self.unmapped.iter().any(|u| u.index == index)
    }

    /// Per-unit fallback flags for an input of `len` units.
    #[must_use]
    pub fn fallback_flags(&self, len: usize) -> Vec<bool> {
        let mut flags = vec![false; len];
        for u in &self.unmapped {
            if let Some(flag) = flags.get_mut(u.index) {
                *flag = true;
            }
        }
        flags
    }
}
