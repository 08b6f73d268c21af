use br_core::cell::Cell;
use br_core::config::CasePolicy;

use crate::alphabet::{
    Alphabet, Indicator, is_digit_letter, is_numeric_separator, normalize_char,
};
use crate::error::CodecError;
use crate::translation::{Fallback, TextTranslation, Unmapped};

/// Texte → cellules.
///
/// Pure: the output depends only on the text, the alphabet and the two
/// policies.
///
/// Numbers: a digit run is opened by the numeric sign and written with the
/// cells of `a`–`j`. `.` and `,` keep the run open; any other character
/// closes it. A letter `a`–`j` that would otherwise be read as a digit gets
/// the letter sign first.
///
/// # Example
/// ```
/// use br_codec::alphabet;
/// use br_codec::encoder::Encoder;
/// use br_codec::notation::format_notation;
///
/// let encoder = Encoder::new(alphabet::standard().unwrap());
/// let result = encoder.encode("Bus 15");
/// assert_eq!(format_notation(&result.output), "46 12 136 234 _ 3456 1 15");
/// ```
#[derive(Clone, Debug)]
pub struct Encoder<'a> {
    alphabet: &'a Alphabet,
    fallback: Fallback<Cell>,
    case: CasePolicy,
}

impl<'a> Encoder<'a> {
    /// Encoder with [`Fallback::Skip`] and [`CasePolicy::Mark`].
    #[must_use]
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Self {
            alphabet,
            fallback: Fallback::Skip,
            case: CasePolicy::Mark,
        }
    }

    /// Set the unmapped-character policy.
    ///
    /// # Errors
    /// [`CodecError::PlaceholderConflict`] if the placeholder cell already
    /// means something in the alphabet (the empty cell is the space).
    pub fn with_fallback(mut self, fallback: Fallback<Cell>) -> Result<Self, CodecError> {
        if let Some(cell) = fallback.placeholder()
            && let Some(symbol) = self.alphabet.symbol_for(cell)
        {
            return Err(CodecError::PlaceholderConflict {
                placeholder: cell.to_string(),
                symbol,
            });
        }
        self.fallback = fallback;
        Ok(self)
    }

    #[must_use]
    pub fn with_case_policy(mut self, case: CasePolicy) -> Self {
        self.case = case;
        self
    }

    #[must_use]
    pub fn alphabet(&self) -> &'a Alphabet {
        self.alphabet
    }

    #[must_use]
    pub fn fallback(&self) -> Fallback<Cell> {
        self.fallback
    }

    #[must_use]
    pub fn case_policy(&self) -> CasePolicy {
        self.case
    }

    /// Encode `text`, one char at a time, in order. Never fails: chars
    /// outside the alphabet are reported in
    /// [`Translation::unmapped`](crate::translation::Translation) and
    /// handled by the fallback policy.
    #[must_use]
    pub fn encode(&self, text: &str) -> TextTranslation {
        let numeric_sign = self.alphabet.indicator(Indicator::Numeric);
        let capital_sign = self.alphabet.indicator(Indicator::Capital);
        let letter_sign = self.alphabet.indicator(Indicator::Letter);

        let mut cells = Vec::with_capacity(text.len() + text.len() / 4);
        let mut unmapped = Vec::new();
        let mut numeric = false;

        for (index, ch) in text.chars().enumerate() {
            if let Some(cell) = self.alphabet.digit_cell(ch) {
                if !numeric {
                    cells.push(numeric_sign);
                    numeric = true;
                }
                cells.push(cell);
                continue;
            }

            let folded = normalize_char(ch);
            let Some(cell) = self.alphabet.cell_for(folded) else {
                log::debug!("no Braille cell for {ch:?} at {index}");
                unmapped.push(Unmapped { index, unit: ch });
                // a skipped char writes nothing, so an open number stays open
                if let Some(placeholder) = self.fallback.placeholder() {
                    cells.push(placeholder);
                    numeric = false;
                }
                continue;
            };

            if numeric {
                if is_numeric_separator(folded) {
                    cells.push(cell);
                    continue;
                }
                numeric = false;
                if is_digit_letter(folded) {
                    cells.push(letter_sign);
                }
            }

            if self.case == CasePolicy::Mark && ch != folded && ch.is_uppercase() {
                cells.push(capital_sign);
            }
            cells.push(cell);
        }

        TextTranslation {
            input: text.to_string(),
            output: cells,
            unmapped,
        }
    }
}
