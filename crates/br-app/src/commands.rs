use std::io::Write;

use anyhow::{Context, Result};
use br_codec::mirror;
use br_codec::translator::Translator;
use br_codec::unicode::UnicodeRenderer;
use br_core::cell::CellSequence;
use br_core::traits::Renderer;

use crate::batch;
use crate::cli::Command;
use crate::output::Printer;

/// Exécute une sous-commande et écrit le résultat dans `out`.
///
/// # Errors
/// Codec, renderer, and I/O errors, with the failing command as context.
pub fn run(
    command: &Command,
    translator: &Translator<'_>,
    printer: &Printer,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Command::Encode { text } => {
            let t = translator
                .text_to_braille(text)
                .context("encoding failed")?;
            printer.encoded(out, &t)
        }
        Command::Decode { notation } => {
            let t = translator
                .notation_to_text(notation)
                .context("decoding notation failed")?;
            printer.decoded(out, &t)
        }
        Command::DecodeUnicode { glyphs } => {
            let t = translator
                .unicode_to_text(glyphs)
                .context("decoding glyphs failed")?;
            printer.decoded(out, &t)
        }
        Command::DecodeJson { cells } => {
            let cells: CellSequence =
                serde_json::from_str(cells).context("expected a JSON list of dot lists")?;
            let t = translator
                .braille_to_text(&cells)
                .context("decoding cells failed")?;
            printer.decoded(out, &t)
        }
        Command::Mirror {
            notation,
            reverse_order,
        } => {
            let cells = translator
                .mirror_notation(notation, *reverse_order)
                .context("mirroring failed")?;
            printer.mirrored(out, &cells)
        }
        Command::Render {
            text,
            mirror: mirrored,
            reverse_order,
            width,
            caption,
        } => {
            let mut cells = translator
                .text_to_braille(text)
                .context("encoding failed")?
                .output;
            if *mirrored {
                cells = if *reverse_order {
                    mirror::mirror_line(&cells)?
                } else {
                    mirror::mirror(&cells)?
                };
            }
            let renderer = UnicodeRenderer {
                line_width: *width,
                caption: *caption,
            };
            log::debug!("rendering {} cell(s) with {}", cells.len(), renderer.name());
            let bytes = renderer.render(text, &cells)?;
            out.write_all(&bytes)?;
            Ok(())
        }
        Command::Batch {
            file,
            direction,
            out: path,
        } => match path {
            Some(path) => {
                let mut file_out = std::fs::File::create(path)
                    .with_context(|| format!("cannot create {}", path.display()))?;
                batch::run_batch(file, *direction, translator, printer, &mut file_out)
            }
            None => batch::run_batch(file, *direction, translator, printer, out),
        },
    }
}
