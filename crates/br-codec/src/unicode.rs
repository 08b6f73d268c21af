//! Rendu texte en Braille Unicode (U+2800–U+283F).

use br_core::cell::Cell;
use br_core::error::RenderError;
use br_core::traits::Renderer;

/// Cells as Unicode Braille glyphs, one per cell.
///
/// # Example
/// ```
/// use br_codec::notation::parse_notation;
/// use br_codec::unicode::to_unicode_string;
/// let cells = parse_notation("125 135 123 1").unwrap();
/// assert_eq!(to_unicode_string(&cells), "⠓⠕⠇⠁");
/// ```
#[must_use]
pub fn to_unicode_string(cells: &[Cell]) -> String {
    cells.iter().map(|c| c.to_unicode()).collect()
}

/// UTF-8 glyph text, optionally wrapped every `line_width` cells.
///
/// Lines break after the last empty cell (space) that fits, or hard at the
/// width when a line has none. Output always ends with a newline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnicodeRenderer {
    /// Cells per line; `None` renders a single line.
    pub line_width: Option<usize>,
    /// Prefix the output with the original text on its own line.
    pub caption: bool,
}

impl UnicodeRenderer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            line_width: None,
            caption: false,
        }
    }

    #[must_use]
    pub const fn with_width(line_width: usize) -> Self {
        Self {
            line_width: Some(line_width),
            caption: false,
        }
    }

    fn lines<'c>(&self, cells: &'c [Cell], width: usize) -> Vec<&'c [Cell]> {
        let mut lines = Vec::new();
        let mut rest = cells;
        while rest.len() > width {
            // break on a space inside the window, dropping the space itself
            let window = &rest[..=width];
            match window.iter().rposition(|c| c.is_empty()) {
                Some(at) if at > 0 => {
                    lines.push(&rest[..at]);
                    rest = &rest[at + 1..];
                }
                _ => {
                    lines.push(&rest[..width]);
                    rest = &rest[width..];
                }
            }
        }
        lines.push(rest);
        lines
    }
}

impl Renderer for UnicodeRenderer {
    fn render(&self, text: &str, cells: &[Cell]) -> Result<Vec<u8>, RenderError> {
        let mut out = String::with_capacity(cells.len() * 3 + text.len() + 2);
        if self.caption {
            out.push_str(text);
            out.push('\n');
        }

        match self.line_width {
            Some(0) => {
                return Err(RenderError::RenderingFailed {
                    renderer: self.name(),
                    reason: "line width must be at least 1".to_string(),
                });
            }
            Some(width) => {
                for line in self.lines(cells, width) {
                    out.push_str(&to_unicode_string(line));
                    out.push('\n');
                }
            }
            None => {
                out.push_str(&to_unicode_string(cells));
                out.push('\n');
            }
        }
        Ok(out.into_bytes())
    }

    fn name(&self) -> &'static str {
        "unicode"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::NotationParser;

    fn cells(notation: &str) -> Vec<Cell> {
        NotationParser::with_blank('_').parse(notation).unwrap()
    }

    fn render(renderer: UnicodeRenderer, notation: &str) -> String {
        let bytes = renderer.render("", &cells(notation)).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn single_line() {
        assert_eq!(render(UnicodeRenderer::new(), "1 _ 12"), "⠁⠀⠃\n");
    }

    #[test]
    fn wraps_at_space() {
        // a b _ c d, width 3: break on the space
        assert_eq!(
            render(UnicodeRenderer::with_width(3), "1 12 _ 14 145"),
            "⠁⠃\n⠉⠙\n"
        );
    }

    #[test]
    fn hard_wrap_without_space() {
        assert_eq!(
            render(UnicodeRenderer::with_width(2), "1 12 14 145 15"),
            "⠁⠃\n⠉⠙\n⠑\n"
        );
    }

    #[test]
    fn exact_fit_is_one_line() {
        assert_eq!(render(UnicodeRenderer::with_width(3), "1 12 14"), "⠁⠃⠉\n");
    }

    #[test]
    fn caption_line() {
        let renderer = UnicodeRenderer {
            caption: true,
            ..UnicodeRenderer::new()
        };
        let out = renderer.render("ab", &cells("1 12")).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ab\n⠁⠃\n");
    }

    #[test]
    fn zero_width_fails() {
        let err = UnicodeRenderer::with_width(0)
            .render("", &cells("1"))
            .unwrap_err();
        assert!(err.to_string().contains("unicode"));
    }
}
