//! Host-side support for regenerating the font and icon assets used by the xiaozhi display code.
//!
//! Glyph rasterization itself is done by `lv_font_conv`. This crate builds the symbol repertoire
//! handed to it, derives the output paths and argument vectors for each artifact, and renders the
//! icon name header consumed by the C side.

pub mod command;
pub mod config;
pub mod encoding_table;
pub mod error;
pub mod generate;
pub mod header;
pub mod request;
pub mod symbols;

pub use config::ToolConfig;
pub use error::{FontGenError, FontGenResult};
pub use generate::{generate, CommandRunner};
pub use request::{ArtifactType, FontFamily, GenerationRequest};
