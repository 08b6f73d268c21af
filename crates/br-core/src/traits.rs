use crate::cell::Cell;
use crate::error::RenderError;

/// Produit une sortie binaire opaque à partir d'une séquence de cellules.
///
/// Implementors are the collaborators that turn cells into something a
/// person can read or emboss: glyph text, images, paginated documents.
///
/// # Example
/// ```
/// use br_core::cell::Cell;
/// use br_core::error::RenderError;
/// use br_core::traits::Renderer;
///
/// struct CountingRenderer;
/// impl Renderer for CountingRenderer {
///     fn render(&self, _text: &str, cells: &[Cell]) -> Result<Vec<u8>, RenderError> {
///         Ok(cells.len().to_string().into_bytes())
///     }
///     fn name(&self) -> &'static str { "counting" }
/// }
///
/// let out = CountingRenderer.render("ab", &[Cell::EMPTY, Cell::FULL]).unwrap();
/// assert_eq!(out, b"2");
/// ```
pub trait Renderer: Send + Sync {
    /// Render `cells`; `text` is the original input, for captions or titles.
    ///
    /// # Errors
    /// [`RenderError::RenderingFailed`] when no output can be produced.
    fn render(&self, text: &str, cells: &[Cell]) -> Result<Vec<u8>, RenderError>;

    /// Nom lisible pour le debug/logs.
    fn name(&self) -> &'static str;
}
