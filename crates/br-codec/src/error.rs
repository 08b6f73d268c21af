use br_core::cell::Cell;
use br_core::error::CellError;
use thiserror::Error;

use crate::alphabet::Symbol;

/// Malformed cell notation. Every variant names the offending input so a
/// caller can highlight it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Nothing but whitespace was supplied.
    #[error("no Braille cells supplied")]
    EmptyInput,

    /// A character other than `1`..`6` inside a cell token.
    #[error("invalid digit '{digit}' in cell \"{token}\" at byte {offset}: dots are numbered 1 to 6")]
    InvalidDigit {
        /// The whole offending token.
        token: String,
        /// The offending character.
        digit: char,
        /// Byte offset of `digit` in the input.
        offset: usize,
    },

    /// The same dot listed twice inside one token.
    #[error("dot '{digit}' repeated in cell \"{token}\" at byte {offset}")]
    DuplicateDot {
        /// The whole offending token.
        token: String,
        /// The repeated digit.
        digit: char,
        /// Byte offset of the second occurrence in the input.
        offset: usize,
    },

    /// A character outside the six-dot Braille Patterns range U+2800..U+283F.
    #[error("'{glyph}' at byte {offset} is not a six-dot Braille pattern")]
    InvalidGlyph {
        /// The offending character.
        glyph: char,
        /// Byte offset of `glyph` in the input.
        offset: usize,
    },
}

/// Alphabet table construction errors. Fatal: a table that fails here must
/// never serve a request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// Two symbols share one cell, so reverse lookup would be ambiguous.
    #[error("alphabet conflict: {first} and {second} both map to cell {cell}")]
    BuildConflict {
        /// The shared cell.
        cell: Cell,
        /// Symbol registered first.
        first: Symbol,
        /// Symbol that collided with it.
        second: Symbol,
    },

    /// The same character defined twice.
    #[error("character {symbol:?} is defined twice")]
    DuplicateSymbol {
        /// The duplicated character, after normalization.
        symbol: char,
    },

    /// A numeric, capital or letter sign was never assigned a cell.
    #[error("alphabet has no cell for the {0}")]
    MissingIndicator(&'static str),

    /// A table entry lists an invalid dot.
    #[error("invalid cell in alphabet table: {0}")]
    InvalidCell(#[from] CellError),
}

/// Errors surfaced by the translation boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// No text, or no cells, supplied.
    #[error("input is empty")]
    EmptyInput,

    /// Input or output exceeds a configured limit.
    #[error("{unit} count {len} exceeds the limit of {max}")]
    InputTooLong {
        /// "characters" or "cells".
        unit: &'static str,
        /// Observed size.
        len: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The configured placeholder is itself part of the alphabet.
    #[error("placeholder {placeholder} is already used by {symbol}")]
    PlaceholderConflict {
        /// Placeholder as written in the configuration.
        placeholder: String,
        /// Alphabet symbol already using it.
        symbol: Symbol,
    },

    /// The configured placeholder cell is not a single cell.
    #[error("placeholder cell {0:?} must be exactly one cell")]
    InvalidPlaceholder(String),

    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error(transparent)]
    Cell(#[from] CellError),

    #[error(transparent)]
    Alphabet(#[from] AlphabetError),
}
