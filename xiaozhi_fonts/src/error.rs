use crate::request::{ArtifactType, FontFamily};
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a single artifact from being generated.
#[derive(Error, Debug)]
pub enum FontGenError {
    #[error("malformed encoding table at line {line}: {reason}")]
    MalformedEncodingTable { line: usize, reason: String },

    #[error("invalid code point for '{name}': {value:#x}")]
    InvalidCodePoint { name: String, value: u32 },

    #[error("duplicate symbol name: {0}")]
    DuplicateSymbolName(String),

    #[error("the {family} font does not support the {artifact} artifact")]
    UnsupportedArtifact { family: FontFamily, artifact: ArtifactType },

    #[error("rasterizer failed with status {}", fmt_status(.status))]
    ToolFailure { status: Option<i32> },

    #[error("could not access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config '{}': {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
impl FontGenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FontGenError::Io { path: path.into(), source }
    }

    /// The exit status reported by the rasterizer, if this is a tool failure.
    pub fn tool_status(&self) -> Option<Option<i32>> {
        match self {
            FontGenError::ToolFailure { status } => Some(*status),
            _ => None,
        }
    }
}

fn fmt_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "<terminated by signal>".to_string(),
    }
}

pub type FontGenResult<T> = Result<T, FontGenError>;
