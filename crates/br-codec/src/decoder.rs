use br_core::cell::Cell;

use crate::alphabet::{Alphabet, Indicator, Symbol, digit_for, is_numeric_separator};
use crate::error::CodecError;
use crate::translation::{CellTranslation, Fallback, Unmapped};

/// Cellules → texte.
///
/// State machine over the indicator cells:
/// - numeric sign: following `a`–`j` cells are digits, `.`/`,` keep the
///   number open, anything else closes it; a pending capital is dropped;
/// - capital sign: the next character is uppercased if it is a letter;
/// - letter sign: closes the number.
///
/// # Example
/// ```
/// use br_codec::alphabet;
/// use br_codec::decoder::Decoder;
/// use br_codec::notation::NotationParser;
///
/// let cells = NotationParser::with_blank('_')
///     .parse("46 12 136 234 _ 3456 1 15")
///     .unwrap();
/// let result = Decoder::new(alphabet::standard().unwrap()).decode(&cells);
/// assert_eq!(result.output, "Bus 15");
/// ```
#[derive(Clone, Debug)]
pub struct Decoder<'a> {
    alphabet: &'a Alphabet,
    fallback: Fallback<char>,
}

impl<'a> Decoder<'a> {
    /// Decoder with [`Fallback::Skip`].
    #[must_use]
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Self {
            alphabet,
            fallback: Fallback::Skip,
        }
    }

    /// Set the unmapped-cell policy.
    ///
    /// # Errors
    /// [`CodecError::PlaceholderConflict`] if the placeholder char is itself
    /// encodable, which would make decoded text ambiguous.
    pub fn with_fallback(mut self, fallback: Fallback<char>) -> Result<Self, CodecError> {
        if let Some(ch) = fallback.placeholder() {
            let encodable = self
                .alphabet
                .cell_for(ch)
                .or_else(|| self.alphabet.digit_cell(ch));
            if let Some(cell) = encodable {
                return Err(CodecError::PlaceholderConflict {
                    placeholder: format!("{ch:?}"),
                    symbol: self.alphabet.symbol_for(cell).unwrap_or(Symbol::Char(ch)),
                });
            }
        }
        self.fallback = fallback;
        Ok(self)
    }

    #[must_use]
    pub fn fallback(&self) -> Fallback<char> {
        self.fallback
    }

    /// Decode `cells` in order. Never fails: unknown cells are reported in
    /// [`Translation::unmapped`](crate::translation::Translation) and handled
    /// by the fallback policy. A dangling indicator at the end is dropped.
    #[must_use]
    pub fn decode(&self, cells: &[Cell]) -> CellTranslation {
        let mut text = String::with_capacity(cells.len());
        let mut unmapped = Vec::new();
        let mut numeric = false;
        let mut capital = false;

        for (index, &cell) in cells.iter().enumerate() {
            let ch = match self.alphabet.symbol_for(cell) {
                Some(Symbol::Indicator(Indicator::Numeric)) => {
                    numeric = true;
                    capital = false;
                    continue;
                }
                Some(Symbol::Indicator(Indicator::Capital)) => {
                    numeric = false;
                    capital = true;
                    continue;
                }
                Some(Symbol::Indicator(Indicator::Letter)) => {
                    numeric = false;
                    continue;
                }
                Some(Symbol::Char(ch)) => ch,
                None => {
                    log::debug!("no character for cell {cell} at {index}");
                    numeric = false;
                    capital = false;
                    unmapped.push(Unmapped { index, unit: cell });
                    if let Some(placeholder) = self.fallback.placeholder() {
                        text.push(placeholder);
                    }
                    continue;
                }
            };

            if numeric {
                if let Some(digit) = digit_for(ch) {
                    text.push(digit);
                    continue;
                }
                if is_numeric_separator(ch) {
                    text.push(ch);
                    continue;
                }
                numeric = false;
            }

            if std::mem::take(&mut capital) && ch.is_alphabetic() {
                text.extend(ch.to_uppercase());
            } else {
                text.push(ch);
            }
        }

        CellTranslation {
            input: cells.to_vec(),
            output: text,
            unmapped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet;
    use crate::notation::NotationParser;

    fn decode(notation: &str) -> String {
        let cells = NotationParser::with_blank('_').parse(notation).unwrap();
        Decoder::new(alphabet::standard().unwrap())
            .decode(&cells)
            .output
    }

    #[test]
    fn plain_word() {
        assert_eq!(decode("125 135 123 1"), "hola");
    }

    #[test]
    fn numeric_sign() {
        assert_eq!(decode("3456 1"), "1");
        assert_eq!(decode("3456 1 12"), "12");
        assert_eq!(decode("3456 1 3456 12"), "12");
        assert_eq!(decode("3456 1 _ 3456 12"), "1 2");
    }

    #[test]
    fn capital_sign() {
        assert_eq!(decode("46 1"), "A");
        assert_eq!(decode("46 1 15"), "Ae");
        assert_eq!(decode("46 12456"), "Ñ");
    }

    #[test]
    fn numeric_sign_drops_pending_capital() {
        assert_eq!(decode("46 3456 1 56 12"), "1b");
    }

    #[test]
    fn capital_before_punctuation_is_dropped() {
        assert_eq!(decode("46 3 1"), ".a");
    }

    #[test]
    fn number_with_separator_and_letter_sign() {
        assert_eq!(decode("3456 14 2 15"), "3,5");
        assert_eq!(decode("3456 1 56 1"), "1a");
        assert_eq!(decode("3456 1 13"), "1k");
    }

    #[test]
    fn dangling_indicator_is_ignored() {
        assert_eq!(decode("1 46"), "a");
    }

    #[test]
    fn unknown_cell_skip() {
        let cells = NotationParser::new().parse("1 123456 12").unwrap();
        let result = Decoder::new(alphabet::standard().unwrap()).decode(&cells);
        assert_eq!(result.output, "ab");
        assert_eq!(
            result.unmapped,
            vec![Unmapped {
                index: 1,
                unit: Cell::FULL
            }]
        );
    }

    #[test]
    fn unknown_cell_placeholder() {
        let cells = NotationParser::new().parse("1 123456 12").unwrap();
        let result = Decoder::new(alphabet::standard().unwrap())
            .with_fallback(Fallback::Placeholder('\u{FFFD}'))
            .unwrap()
            .decode(&cells);
        assert_eq!(result.output, "a\u{FFFD}b");
    }

    #[test]
    fn unknown_cell_ends_number() {
        let cells = NotationParser::new().parse("3456 1 123456 12").unwrap();
        let result = Decoder::new(alphabet::standard().unwrap()).decode(&cells);
        assert_eq!(result.output, "1b");
    }

    #[test]
    fn encodable_placeholder_rejected() {
        let alphabet = alphabet::standard().unwrap();
        assert!(Decoder::new(alphabet).with_fallback(Fallback::Placeholder('?')).is_err());
        assert!(Decoder::new(alphabet).with_fallback(Fallback::Placeholder('7')).is_err());
        assert!(Decoder::new(alphabet).with_fallback(Fallback::Placeholder('#')).is_ok());
    }
}
