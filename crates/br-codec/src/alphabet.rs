//! Table bidirectionnelle caractère ↔ cellule (Braille espagnol).
//!
//! The table is closed and built once. Both indices are filled in one pass
//! and checked against each other: a cell may belong to one symbol only,
//! indicator cells included.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use br_core::cell::Cell;

use crate::error::AlphabetError;

/// Prefix cells that change how the following cells are read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Indicator {
    /// Following `a`–`j` cells are digits.
    Numeric,
    /// Following letter is uppercase.
    Capital,
    /// Ends numeric mode so the next `a`–`j` cell reads as a letter.
    Letter,
}

impl Indicator {
    pub const ALL: [Indicator; 3] = [Indicator::Numeric, Indicator::Capital, Indicator::Letter];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Indicator::Numeric => "numeric sign",
            Indicator::Capital => "capital sign",
            Indicator::Letter => "letter sign",
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

/// What a cell stands for in an [`Alphabet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    Char(char),
    Indicator(Indicator),
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Char(c) => write!(f, "{c:?}"),
            Symbol::Indicator(i) => f.write_str(i.name()),
        }
    }
}

/// Series 1, the generator of the whole alphabet. Top four dots only.
const SERIES_1: [(char, &[u8]); 10] = [
    ('a', &[1]),
    ('b', &[1, 2]),
    ('c', &[1, 4]),
    ('d', &[1, 4, 5]),
    ('e', &[1, 5]),
    ('f', &[1, 2, 4]),
    ('g', &[1, 2, 4, 5]),
    ('h', &[1, 2, 5]),
    ('i', &[2, 4]),
    ('j', &[2, 4, 5]),
];

/// Series 2 = series 1 + dot 3, in the same order.
const SERIES_2: [char; 10] = ['k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't'];

/// Series 3 = series 1 + dots 3 and 6. `w` is not part of it.
const SERIES_3: [(char, char); 5] = [('u', 'a'), ('v', 'b'), ('x', 'c'), ('y', 'd'), ('z', 'e')];

const EXTRA_LETTERS: [(char, &[u8]); 8] = [
    ('w', &[2, 4, 5, 6]),
    ('ñ', &[1, 2, 4, 5, 6]),
    ('á', &[1, 2, 3, 5, 6]),
    ('é', &[2, 3, 4, 6]),
    ('í', &[3, 4]),
    ('ó', &[3, 4, 6]),
    ('ú', &[2, 3, 4, 5, 6]),
    ('ü', &[1, 2, 5, 6]),
];

const PUNCTUATION: [(char, &[u8]); 12] = [
    ('.', &[3]),
    (',', &[2]),
    (':', &[2, 5]),
    (';', &[2, 3]),
    ('"', &[2, 3, 6]),
    ('?', &[2, 6]),
    ('!', &[2, 3, 5]),
    ('-', &[3, 6]),
    ('(', &[1, 2, 6]),
    (')', &[3, 4, 5]),
    ('/', &[2, 5, 6]),
    ('=', &[2, 3, 5, 6]),
];

const INDICATORS: [(Indicator, &[u8]); 3] = [
    (Indicator::Numeric, &[3, 4, 5, 6]),
    (Indicator::Capital, &[4, 6]),
    (Indicator::Letter, &[5, 6]),
];

/// Digits reuse the cells of `a`–`j` behind the numeric sign: 1→a … 9→i, 0→j.
const DIGIT_LETTERS: [(char, char); 10] = [
    ('1', 'a'),
    ('2', 'b'),
    ('3', 'c'),
    ('4', 'd'),
    ('5', 'e'),
    ('6', 'f'),
    ('7', 'g'),
    ('8', 'h'),
    ('9', 'i'),
    ('0', 'j'),
];

/// Characters that keep a number going (`3,5` / `1.000`).
#[must_use]
pub const fn is_numeric_separator(ch: char) -> bool {
    matches!(ch, '.' | ',')
}

/// Digit a letter stands for inside a number (`'a'` → `'1'`).
#[must_use]
pub fn digit_for(letter: char) -> Option<char> {
    DIGIT_LETTERS
        .iter()
        .find(|(_, l)| *l == letter)
        .map(|(d, _)| *d)
}

/// Whether `ch` is one of `a`–`j`, the letters digits borrow.
#[must_use]
pub fn is_digit_letter(ch: char) -> bool {
    digit_for(ch).is_some()
}

/// Normalisation appliquée avant toute recherche.
///
/// Char by char: the Spanish opening marks `¿` `¡` fold to their closing
/// counterparts. A char is lowercased only when the lowercase form is a
/// single char that upper-cases back to exactly `ch`, so decoding a capital
/// sign restores the original. Anything else is returned untouched.
///
/// # Example
/// ```
/// use br_codec::alphabet::normalize_char;
/// assert_eq!(normalize_char('Ñ'), 'ñ');
/// assert_eq!(normalize_char('¿'), '?');
/// assert_eq!(normalize_char('7'), '7');
/// // Kelvin sign: lowercases to `k`, which upper-cases to ASCII `K`
/// assert_eq!(normalize_char('\u{212A}'), '\u{212A}');
/// ```
#[must_use]
pub fn normalize_char(ch: char) -> char {
    match ch {
        '¿' => '?',
        '¡' => '!',
        _ => match single(ch.to_lowercase()) {
            Some(lower) if lower == ch || single(lower.to_uppercase()) == Some(ch) => lower,
            _ => ch,
        },
    }
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Immutable dual-index Braille table.
///
/// # Example
/// ```
/// use br_codec::alphabet;
/// use br_core::cell::Cell;
///
/// let table = alphabet::standard().unwrap();
/// let h = table.cell_for('H').unwrap();
/// assert_eq!(h, Cell::from_dots(&[1, 2, 5]).unwrap());
/// assert_eq!(table.char_for(h), Some('h'));
/// ```
#[derive(Clone, Debug)]
pub struct Alphabet {
    forward: BTreeMap<char, Cell>,
    reverse: [Option<Symbol>; 64],
    indicators: [Cell; 3],
}

impl Alphabet {
    /// Cell for `ch`, after [`normalize_char`]. Digits are not in the table:
    /// they need the numeric sign, see [`Alphabet::digit_cell`].
    #[must_use]
    pub fn cell_for(&self, ch: char) -> Option<Cell> {
        self.forward.get(&normalize_char(ch)).copied()
    }

    /// Lowercase character for `cell`. Indicator cells yield `None`.
    #[must_use]
    pub fn char_for(&self, cell: Cell) -> Option<char> {
        match self.symbol_for(cell)? {
            Symbol::Char(c) => Some(c),
            Symbol::Indicator(_) => None,
        }
    }

    /// Whatever `cell` stands for, character or indicator.
    #[must_use]
    pub fn symbol_for(&self, cell: Cell) -> Option<Symbol> {
        self.reverse[usize::from(cell.bits())]
    }

    #[must_use]
    pub fn indicator(&self, indicator: Indicator) -> Cell {
        self.indicators[indicator.slot()]
    }

    /// Cell used for an ASCII digit inside a number.
    #[must_use]
    pub fn digit_cell(&self, digit: char) -> Option<Cell> {
        let (_, letter) = DIGIT_LETTERS.iter().find(|(d, _)| *d == digit)?;
        self.forward.get(letter).copied()
    }

    /// Whether `ch` (already normalized) is in the character domain.
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.forward.contains_key(&ch)
    }

    /// Number of character entries, indicators excluded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Character entries in codepoint order.
    pub fn entries(&self) -> impl Iterator<Item = (char, Cell)> + '_ {
        self.forward.iter().map(|(&c, &cell)| (c, cell))
    }
}

/// Assembles an [`Alphabet`], checking injectivity on [`AlphabetBuilder::build`].
///
/// # Example
/// ```
/// use br_codec::alphabet::AlphabetBuilder;
/// use br_codec::error::AlphabetError;
/// use br_core::cell::Cell;
///
/// let a = Cell::from_dots(&[1]).unwrap();
/// let err = AlphabetBuilder::new()
///     .entry('a', a)
///     .entry('z', a)
///     .build()
///     .unwrap_err();
/// assert!(matches!(err, AlphabetError::BuildConflict { .. }));
/// ```
#[derive(Clone, Debug, Default)]
pub struct AlphabetBuilder {
    entries: Vec<(char, Cell)>,
    indicators: [Option<Cell>; 3],
}

impl AlphabetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `ch` (normalized) to `cell`.
    #[must_use]
    pub fn entry(mut self, ch: char, cell: Cell) -> Self {
        self.entries.push((normalize_char(ch), cell));
        self
    }

    #[must_use]
    pub fn indicator(mut self, indicator: Indicator, cell: Cell) -> Self {
        self.indicators[indicator.slot()] = Some(cell);
        self
    }

    /// Validate and freeze the table.
    ///
    /// # Errors
    /// [`AlphabetError::BuildConflict`] if two symbols share a cell,
    /// [`AlphabetError::DuplicateSymbol`] if a character is listed twice,
    /// [`AlphabetError::MissingIndicator`] if an indicator was never set.
    pub fn build(self) -> Result<Alphabet, AlphabetError> {
        let mut forward = BTreeMap::new();
        let mut reverse: [Option<Symbol>; 64] = [None; 64];

        let mut claim = |cell: Cell, symbol: Symbol| -> Result<(), AlphabetError> {
            let slot = &mut reverse[usize::from(cell.bits())];
            if let Some(first) = *slot {
                return Err(AlphabetError::BuildConflict {
                    cell,
                    first,
                    second: symbol,
                });
            }
            *slot = Some(symbol);
            Ok(())
        };

        for (ch, cell) in self.entries {
            if forward.insert(ch, cell).is_some() {
                return Err(AlphabetError::DuplicateSymbol { symbol: ch });
            }
            claim(cell, Symbol::Char(ch))?;
        }

        let mut indicators = [Cell::EMPTY; 3];
        for indicator in Indicator::ALL {
            let cell = self.indicators[indicator.slot()]
                .ok_or(AlphabetError::MissingIndicator(indicator.name()))?;
            claim(cell, Symbol::Indicator(indicator))?;
            indicators[indicator.slot()] = cell;
        }

        Ok(Alphabet {
            forward,
            reverse,
            indicators,
        })
    }
}

/// Spanish Braille table, derived from series 1 the way it is taught:
/// series 2 adds dot 3, series 3 adds dots 3 and 6.
///
/// # Errors
/// Any [`AlphabetError`]; the built-in table never produces one, which the
/// tests assert.
pub fn spanish() -> Result<Alphabet, AlphabetError> {
    let mut builder = AlphabetBuilder::new();

    for (ch, dots) in SERIES_1 {
        builder = builder.entry(ch, Cell::from_dots(dots)?);
    }
    for ((_, dots), ch) in SERIES_1.iter().zip(SERIES_2) {
        builder = builder.entry(ch, Cell::from_dots(dots)?.with_dot(3)?);
    }
    for (ch, base) in SERIES_3 {
        let dots = SERIES_1
            .iter()
            .find(|(c, _)| *c == base)
            .map_or(&[][..], |(_, d)| *d);
        builder = builder.entry(ch, Cell::from_dots(dots)?.with_dot(3)?.with_dot(6)?);
    }
    for (ch, dots) in EXTRA_LETTERS.into_iter().chain(PUNCTUATION) {
        builder = builder.entry(ch, Cell::from_dots(dots)?);
    }
    builder = builder.entry(' ', Cell::EMPTY);
    for (indicator, dots) in INDICATORS {
        builder = builder.indicator(indicator, Cell::from_dots(dots)?);
    }

    builder.build()
}

static STANDARD: LazyLock<Result<Alphabet, AlphabetError>> = LazyLock::new(|| {
    let table = spanish();
    match &table {
        Ok(t) => log::debug!("Braille alphabet ready: {} entries", t.len()),
        Err(e) => log::error!("Braille alphabet rejected: {e}"),
    }
    table
});

/// Process-wide Spanish table, built on first access.
///
/// # Errors
/// The build error, on every call, if the table is inconsistent.
pub fn standard() -> Result<&'static Alphabet, AlphabetError> {
    STANDARD.as_ref().map_err(Clone::clone)
}
