//! Compact numeric notation: `"125 135 123 1"`.
//!
//! Purely syntactic. Nothing here looks at the alphabet.

use br_core::cell::{Cell, CellSequence, DOT_COUNT};

use crate::error::NotationError;

/// Cell notation parser.
///
/// Strict by default: every token must be one to six distinct digits in
/// `1..=6`. [`NotationParser::with_blank`] additionally accepts a one-char
/// token for the empty cell.
///
/// # Example
/// ```
/// use br_codec::notation::NotationParser;
/// let cells = NotationParser::with_blank('_').parse("1 _ 12").unwrap();
/// assert!(cells[1].is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NotationParser {
    blank: Option<char>,
}

impl NotationParser {
    #[must_use]
    pub const fn new() -> Self {
        Self { blank: None }
    }

    #[must_use]
    pub const fn with_blank(blank: char) -> Self {
        Self { blank: Some(blank) }
    }

    /// Parse whitespace-separated tokens into cells, in order.
    ///
    /// # Errors
    /// [`NotationError::EmptyInput`] if `input` is blank, otherwise the first
    /// [`NotationError::InvalidDigit`] / [`NotationError::DuplicateDot`]
    /// encountered, left to right.
    pub fn parse(&self, input: &str) -> Result<CellSequence, NotationError> {
        let tokens = tokens(input);
        if tokens.is_empty() {
            return Err(NotationError::EmptyInput);
        }
        tokens
            .into_iter()
            .map(|(offset, token)| self.parse_token(token, offset))
            .collect()
    }

    fn parse_token(&self, token: &str, offset: usize) -> Result<Cell, NotationError> {
        if let Some(blank) = self.blank {
            let mut chars = token.chars();
            if chars.next() == Some(blank) && chars.next().is_none() {
                return Ok(Cell::EMPTY);
            }
        }

        let mut cell = Cell::EMPTY;
        for (i, ch) in token.char_indices() {
            let invalid = || NotationError::InvalidDigit {
                token: token.to_string(),
                digit: ch,
                offset: offset + i,
            };
            let dot = ch
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .filter(|d| (1..=DOT_COUNT).contains(d))
                .ok_or_else(invalid)?;
            if cell.contains(dot) {
                return Err(NotationError::DuplicateDot {
                    token: token.to_string(),
                    digit: ch,
                    offset: offset + i,
                });
            }
            cell = cell.with_dot(dot).map_err(|_| invalid())?;
        }
        Ok(cell)
    }
}

/// Strict parse, see [`NotationParser::parse`].
///
/// # Errors
/// See [`NotationParser::parse`].
///
/// # Example
/// ```
/// use br_codec::notation::parse_notation;
/// let cells = parse_notation("125 135 123 1").unwrap();
/// let dots: Vec<Vec<u8>> = cells.iter().map(|c| c.to_vec()).collect();
/// assert_eq!(dots, vec![vec![1, 2, 5], vec![1, 3, 5], vec![1, 2, 3], vec![1]]);
/// ```
pub fn parse_notation(input: &str) -> Result<CellSequence, NotationError> {
    NotationParser::new().parse(input)
}

/// Parse Unicode Braille Patterns glyphs (`⠓⠕⠇⠁`). Whitespace is ignored;
/// U+2800 is the empty cell.
///
/// # Errors
/// [`NotationError::EmptyInput`] or [`NotationError::InvalidGlyph`].
pub fn parse_unicode(input: &str) -> Result<CellSequence, NotationError> {
    let mut cells = Vec::new();
    for (offset, glyph) in input.char_indices() {
        if glyph.is_whitespace() {
            continue;
        }
        let cell = Cell::from_unicode(glyph).ok_or(NotationError::InvalidGlyph { glyph, offset })?;
        cells.push(cell);
    }
    if cells.is_empty() {
        return Err(NotationError::EmptyInput);
    }
    Ok(cells)
}

/// Canonical notation: ascending dots, one space between cells, `_` for an
/// empty cell.
#[must_use]
pub fn format_notation(cells: &[Cell]) -> String {
    format_notation_with(cells, '_')
}

/// [`format_notation`] with a custom blank token.
#[must_use]
pub fn format_notation_with(cells: &[Cell], blank: char) -> String {
    let mut out = String::with_capacity(cells.len() * 4);
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        if cell.is_empty() {
            out.push(blank);
        } else {
            out.push_str(&cell.to_string());
        }
    }
    out
}

/// Debug form used in logs and JSON responses: `"46|125|135|1"`, `_` for a
/// space.
#[must_use]
pub fn format_debug(cells: &[Cell]) -> String {
    cells
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("|")
}

/// Tokens with their byte offset in `input`.
fn tokens(input: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut start = None;
    for (i, ch) in input.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(s)) => {
                out.push((s, &input[s..i]));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        out.push((s, &input[s..]));
    }
    out
}
