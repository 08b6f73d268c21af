use thiserror::Error;

/// Errors raised while building a [`Cell`](crate::cell::Cell) from raw dots.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CellError {
    /// Dot number outside `1..=6`.
    #[error("dot {dot} is outside the six-dot range 1-6")]
    DotOutOfRange {
        /// The offending dot number.
        dot: u8,
    },

    /// Same dot listed twice in one cell.
    #[error("dot {dot} appears more than once in the same cell")]
    DuplicateDot {
        /// The repeated dot number.
        dot: u8,
    },
}

/// Failure reported by a [`Renderer`](crate::traits::Renderer).
///
/// Kept apart from codec errors: a renderer failing says nothing about the
/// validity of the cells it was given.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The renderer could not produce its output.
    #[error("rendering failed in {renderer}: {reason}")]
    RenderingFailed {
        /// Name of the renderer that failed.
        renderer: &'static str,
        /// Human-readable cause.
        reason: String,
    },
}
