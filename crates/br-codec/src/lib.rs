//! Six-dot Braille codec: alphabet, notation, encoder, decoder, mirror.
//!
//! The [`translator::Translator`] facade wires everything from a
//! [`br_core::CodecConfig`]; the individual pieces are usable on their own.

pub mod alphabet;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod mirror;
pub mod notation;
pub mod translation;
pub mod translator;
pub mod unicode;

pub use alphabet::{Alphabet, AlphabetBuilder, Indicator, Symbol};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{AlphabetError, CodecError, NotationError};
pub use translation::{CellTranslation, Fallback, TextTranslation, Translation, Unmapped};
pub use translator::Translator;
pub use unicode::UnicodeRenderer;
