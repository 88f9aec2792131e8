use crate::error::{FontGenError, FontGenResult};
use derive_setters::Setters;
use std::fmt;

/// The kind of artifact a generation request produces.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum ArtifactType {
    /// An LVGL font source module compiled into the firmware.
    BitmapSource,
    /// A rasterized preview written by the rasterizer's `dump` format.
    DebugDump,
    /// A C header mapping icon names to UTF-8 string literals.
    Header,
}
impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArtifactType::BitmapSource => "bitmap-source",
            ArtifactType::DebugDump => "debug-dump",
            ArtifactType::Header => "header",
        })
    }
}

/// Which font the artifact is built from.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum FontFamily {
    /// The PuHuiTi text font covering ASCII, the baseline symbols and the GB2312 repertoire.
    Text,
    /// The Font Awesome icon font covering the emoji and icon tables.
    Icon,
}
impl FontFamily {
    pub fn supports(self, artifact: ArtifactType) -> bool {
        !(self == FontFamily::Text && artifact == ArtifactType::Header)
    }
}
impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FontFamily::Text => "text",
            FontFamily::Icon => "icon",
        })
    }
}

pub const DEFAULT_FONT_SIZE: u32 = 14;
// The icon tool documents 2 as its default but has always used 4.
pub const DEFAULT_BPP: u32 = 4;

/// A single artifact to generate.
#[derive(Clone, Debug, PartialEq, Eq, Setters)]
pub struct GenerationRequest {
    #[setters(skip)]
    pub family: FontFamily,
    #[setters(skip)]
    pub artifact: ArtifactType,
    pub font_size: u32,
    pub bpp: u32,
}
impl GenerationRequest {
    /// Creates a request with the default size and bit depth.
    ///
    /// Fails if the family cannot produce the given artifact type.
    pub fn new(family: FontFamily, artifact: ArtifactType) -> FontGenResult<Self> {
        if !family.supports(artifact) {
            return Err(FontGenError::UnsupportedArtifact { family, artifact });
        }
        Ok(GenerationRequest { family, artifact, font_size: DEFAULT_FONT_SIZE, bpp: DEFAULT_BPP })
    }
}
