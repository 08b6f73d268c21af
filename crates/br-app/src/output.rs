//! Formats de sortie : texte brut ou JSON.

use std::io::Write;

use anyhow::Result;
use br_codec::notation::{format_debug, format_notation_with};
use br_codec::translation::{CellTranslation, TextTranslation, Unmapped};
use br_codec::unicode::to_unicode_string;
use br_core::cell::Cell;
use serde::Serialize;

/// Text → Braille response.
#[derive(Serialize, Debug)]
pub struct EncodeResponse<'a> {
    pub original_text: &'a str,
    pub braille_cells: &'a [Cell],
    pub braille_string_repr: String,
    pub braille_unicode: String,
    pub unmapped: &'a [Unmapped<char>],
}

impl<'a> From<&'a TextTranslation> for EncodeResponse<'a> {
    fn from(t: &'a TextTranslation) -> Self {
        Self {
            original_text: &t.input,
            braille_cells: &t.output,
            braille_string_repr: format_debug(&t.output),
            braille_unicode: to_unicode_string(&t.output),
            unmapped: &t.unmapped,
        }
    }
}

/// Braille → text response.
#[derive(Serialize, Debug)]
pub struct DecodeResponse<'a> {
    pub braille_cells: &'a [Cell],
    pub translated_text: &'a str,
    pub unmapped: &'a [Unmapped<Cell>],
}

impl<'a> From<&'a CellTranslation> for DecodeResponse<'a> {
    fn from(t: &'a CellTranslation) -> Self {
        Self {
            braille_cells: &t.input,
            translated_text: &t.output,
            unmapped: &t.unmapped,
        }
    }
}

/// Mirror response.
#[derive(Serialize, Debug)]
pub struct MirrorResponse<'a> {
    pub braille_cells: &'a [Cell],
    pub braille_string_repr: String,
    pub braille_unicode: String,
}

impl<'a> MirrorResponse<'a> {
    pub fn new(cells: &'a [Cell]) -> Self {
        Self {
            braille_cells: cells,
            braille_string_repr: format_debug(cells),
            braille_unicode: to_unicode_string(cells),
        }
    }
}

/// Writes results either as plain lines or as one JSON document per result.
pub struct Printer {
    pub json: bool,
    pub blank: char,
}

impl Printer {
    /// Encoded text: notation line then glyph line.
    ///
    /// # Errors
    /// I/O or serialization failure.
    pub fn encoded(&self, out: &mut dyn Write, t: &TextTranslation) -> Result<()> {
        if self.json {
            return Self::json_line(out, &EncodeResponse::from(t));
        }
        writeln!(out, "{}", format_notation_with(&t.output, self.blank))?;
        writeln!(out, "{}", to_unicode_string(&t.output))?;
        Ok(())
    }

    /// Decoded text on one line.
    ///
    /// # Errors
    /// I/O or serialization failure.
    pub fn decoded(&self, out: &mut dyn Write, t: &CellTranslation) -> Result<()> {
        if self.json {
            return Self::json_line(out, &DecodeResponse::from(t));
        }
        writeln!(out, "{}", t.output)?;
        Ok(())
    }

    /// Mirrored cells: notation line then glyph line.
    ///
    /// # Errors
    /// I/O or serialization failure.
    pub fn mirrored(&self, out: &mut dyn Write, cells: &[Cell]) -> Result<()> {
        if self.json {
            return Self::json_line(out, &MirrorResponse::new(cells));
        }
        writeln!(out, "{}", format_notation_with(cells, self.blank))?;
        writeln!(out, "{}", to_unicode_string(cells))?;
        Ok(())
    }

    fn json_line<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<()> {
        serde_json::to_writer(&mut *out, value)?;
        writeln!(out)?;
        Ok(())
    }
}
