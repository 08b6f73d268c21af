//! Point d'entrée du codec: encoder, decoder and notation parser wired
//! from a [`CodecConfig`], with the input limits enforced.

use br_core::cell::Cell;
use br_core::config::{CasePolicy, CodecConfig, FallbackMode};
use rayon::prelude::*;

use crate::alphabet::{self, Alphabet};
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::CodecError;
use crate::mirror;
use crate::notation::{self, NotationParser};
use crate::translation::{CellTranslation, Fallback, TextTranslation};

/// Configured codec.
///
/// Cheap to share: everything it holds is either `Copy` or a reference to an
/// immutable alphabet, so one instance can serve many threads.
///
/// # Example
/// ```
/// use br_codec::translator::Translator;
/// use br_core::config::CodecConfig;
///
/// let translator = Translator::from_config(&CodecConfig::default()).unwrap();
/// let cells = translator.text_to_braille("Hola").unwrap().output;
/// assert_eq!(translator.braille_to_text(&cells).unwrap().output, "Hola");
/// ```
#[derive(Clone, Debug)]
pub struct Translator<'a> {
    encoder: Encoder<'a>,
    decoder: Decoder<'a>,
    parser: NotationParser,
    max_text_length: usize,
    max_cells: usize,
}

impl Translator<'static> {
    /// Translator over the standard alphabet.
    ///
    /// # Errors
    /// - [`CodecError::Alphabet`] if the standard table is inconsistent;
    /// - [`CodecError::Notation`] or [`CodecError::InvalidPlaceholder`] if
    ///   `placeholder_cell` is not one valid cell;
    /// - [`CodecError::PlaceholderConflict`] if a placeholder is in the alphabet.
    pub fn from_config(config: &CodecConfig) -> Result<Self, CodecError> {
        Translator::with_alphabet(alphabet::standard()?, config)
    }
}

impl<'a> Translator<'a> {
    /// Translator over a custom alphabet.
    ///
    /// # Errors
    /// Same as [`Translator::from_config`], minus the alphabet build.
    pub fn with_alphabet(alphabet: &'a Alphabet, config: &CodecConfig) -> Result<Self, CodecError> {
        let (cell_fallback, char_fallback) = match config.fallback {
            FallbackMode::Skip => (Fallback::Skip, Fallback::Skip),
            FallbackMode::Placeholder => {
                let cell = parse_single_cell(&config.placeholder_cell)?;
                (
                    Fallback::Placeholder(cell),
                    Fallback::Placeholder(config.placeholder_char),
                )
            }
        };

        let encoder = Encoder::new(alphabet)
            .with_fallback(cell_fallback)?
            .with_case_policy(config.case_policy);
        let decoder = Decoder::new(alphabet).with_fallback(char_fallback)?;

        log::debug!(
            "translator ready: fallback {:?}, case {:?}, limits {}/{}",
            config.fallback,
            config.case_policy,
            config.max_text_length,
            config.max_cells
        );

        Ok(Self {
            encoder,
            decoder,
            parser: NotationParser::with_blank(config.blank_token),
            max_text_length: config.max_text_length,
            max_cells: config.max_cells,
        })
    }

    #[must_use]
    pub fn alphabet(&self) -> &'a Alphabet {
        self.encoder.alphabet()
    }

    /// Parser accepting the configured blank token.
    #[must_use]
    pub fn parser(&self) -> NotationParser {
        self.parser
    }

    /// Encode `text`.
    ///
    /// # Errors
    /// - [`CodecError::EmptyInput`] for empty or all-whitespace text;
    /// - [`CodecError::InputTooLong`] if the text, or the encoded output,
    ///   exceeds the configured limit.
    pub fn text_to_braille(&self, text: &str) -> Result<TextTranslation, CodecError> {
        if text.trim().is_empty() {
            return Err(CodecError::EmptyInput);
        }
        let len = text.chars().count();
        if len > self.max_text_length {
            log::info!("text rejected: {len} chars > {}", self.max_text_length);
            return Err(CodecError::InputTooLong {
                unit: "characters",
                len,
                max: self.max_text_length,
            });
        }

        let result = self.encoder.encode(text);
        self.check_cells(result.output.len())?;
        if !result.is_exact() {
            log::warn!("{} character(s) had no Braille cell", result.unmapped.len());
        }
        Ok(result)
    }

    /// Decode `cells`.
    ///
    /// # Errors
    /// [`CodecError::EmptyInput`] or [`CodecError::InputTooLong`].
    pub fn braille_to_text(&self, cells: &[Cell]) -> Result<CellTranslation, CodecError> {
        if cells.is_empty() {
            return Err(CodecError::EmptyInput);
        }
        self.check_cells(cells.len())?;

        let result = self.decoder.decode(cells);
        if !result.is_exact() {
            log::warn!("{} cell(s) had no character", result.unmapped.len());
        }
        Ok(result)
    }

    /// Parse notation (blank token allowed) then decode.
    ///
    /// # Errors
    /// Any [`NotationError`](crate::error::NotationError), or see
    /// [`Translator::braille_to_text`].
    pub fn notation_to_text(&self, input: &str) -> Result<CellTranslation, CodecError> {
        let cells = self.parser.parse(input)?;
        self.braille_to_text(&cells)
    }

    /// Parse Unicode Braille glyphs then decode.
    ///
    /// # Errors
    /// See [`notation::parse_unicode`] and [`Translator::braille_to_text`].
    pub fn unicode_to_text(&self, input: &str) -> Result<CellTranslation, CodecError> {
        let cells = notation::parse_unicode(input)?;
        self.braille_to_text(&cells)
    }

    /// Parse notation and mirror it; `reverse_order` also reverses the cells.
    ///
    /// # Errors
    /// Parse errors, [`CodecError::InputTooLong`].
    pub fn mirror_notation(&self, input: &str, reverse_order: bool) -> Result<Vec<Cell>, CodecError> {
        let cells = self.parser.parse(input)?;
        self.check_cells(cells.len())?;
        let mirrored = if reverse_order {
            mirror::mirror_line(&cells)?
        } else {
            mirror::mirror(&cells)?
        };
        Ok(mirrored)
    }

    /// Encode many texts in parallel. Results keep the input order.
    #[must_use]
    pub fn encode_batch<S>(&self, texts: &[S]) -> Vec<Result<TextTranslation, CodecError>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|t| self.text_to_braille(t.as_ref()))
            .collect()
    }

    /// Parse and decode many notation lines in parallel, input order kept.
    #[must_use]
    pub fn decode_batch<S>(&self, lines: &[S]) -> Vec<Result<CellTranslation, CodecError>>
    where
        S: AsRef<str> + Sync,
    {
        lines
            .par_iter()
            .map(|l| self.notation_to_text(l.as_ref()))
            .collect()
    }

    #[must_use]
    pub fn case_policy(&self) -> CasePolicy {
        self.encoder.case_policy()
    }

    fn check_cells(&self, len: usize) -> Result<(), CodecError> {
        if len > self.max_cells {
            log::info!("sequence rejected: {len} cells > {}", self.max_cells);
            return Err(CodecError::InputTooLong {
                unit: "cells",
                len,
                max: self.max_cells,
            });
        }
        Ok(())
    }
}

/// The placeholder must be exactly one strict-notation token.
fn parse_single_cell(notation: &str) -> Result<Cell, CodecError> {
    let cells = notation::parse_notation(notation)?;
    match cells.as_slice() {
        [cell] => Ok(*cell),
        _ => Err(CodecError::InvalidPlaceholder(notation.to_string())),
    }
}
