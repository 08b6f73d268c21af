//! Shared types, traits, and configuration for braillec.
//!
//! This crate holds the cell value type and its wire format, the error
//! types shared across the workspace, the renderer seam, and the TOML
//! configuration layer.

pub mod cell;
pub mod config;
pub mod error;
pub mod traits;

pub use cell::{Cell, CellSequence};
pub use config::{CasePolicy, CodecConfig, FallbackMode};
pub use error::{CellError, RenderError};
pub use traits::Renderer;
