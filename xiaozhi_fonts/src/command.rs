//! Output paths and argument vectors for the `lv_font_conv` rasterizer.

use crate::{
    config::ToolConfig,
    request::{ArtifactType, FontFamily, GenerationRequest},
    symbols::ASCII_RANGE,
};
use std::{ffi::OsString, fmt, path::PathBuf};

/// Flags passed on every invocation.
pub const FIXED_FLAGS: [&str; 3] = ["--force-fast-kern-format", "--no-compress", "--no-prefilter"];

/// The symbols requested from the rasterizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SymbolPayload {
    /// Passed literally through `--symbols`, alongside the ASCII range.
    Literal(Vec<char>),
    /// Passed by value as a comma separated `-r` list.
    CodePoints(Vec<char>),
}
impl SymbolPayload {
    pub fn for_family(family: FontFamily, symbols: Vec<char>) -> Self {
        match family {
            FontFamily::Text => SymbolPayload::Literal(symbols),
            FontFamily::Icon => SymbolPayload::CodePoints(symbols),
        }
    }

    pub fn symbols(&self) -> &[char] {
        match self {
            SymbolPayload::Literal(symbols) | SymbolPayload::CodePoints(symbols) => symbols,
        }
    }

    fn push_args(&self, args: &mut Vec<OsString>) {
        match self {
            SymbolPayload::Literal(symbols) => {
                args.push("-r".into());
                args.push(ASCII_RANGE.into());
                args.push("--symbols".into());
                args.push(symbols.iter().collect::<String>().into());
            }
            SymbolPayload::CodePoints(symbols) => {
                let list: Vec<_> = symbols.iter().map(|x| format!("{:#x}", *x as u32)).collect();
                args.push("-r".into());
                args.push(list.join(",").into());
            }
        }
    }
}

/// A fully derived rasterizer invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalCommand {
    pub program: String,
    pub args: Vec<OsString>,
    pub output: PathBuf,
}
impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// The file (or directory, for dumps) an artifact is written to.
pub fn output_path(request: &GenerationRequest) -> PathBuf {
    let (size, bpp) = (request.font_size, request.bpp);
    match (request.artifact, request.family) {
        (ArtifactType::BitmapSource, FontFamily::Text) => {
            PathBuf::from(format!("src/font_puhui_{size}_{bpp}.c"))
        }
        (ArtifactType::BitmapSource, FontFamily::Icon) => {
            PathBuf::from(format!("src/font_awesome_{size}_{bpp}.c"))
        }
        (ArtifactType::DebugDump, FontFamily::Text) => PathBuf::from("./dump"),
        (ArtifactType::DebugDump, FontFamily::Icon) => PathBuf::from("./build"),
        (ArtifactType::Header, _) => PathBuf::from(format!("font_awesome_{size}_{bpp}.h")),
    }
}

/// The source font for a family at the given size.
pub fn font_file(config: &ToolConfig, family: FontFamily, font_size: u32) -> PathBuf {
    match family {
        FontFamily::Text => config.text_font.clone(),
        FontFamily::Icon if font_size == config.light_icon_size => config.icon_font_light.clone(),
        FontFamily::Icon => config.icon_font_regular.clone(),
    }
}

/// Builds the rasterizer invocation for a request.
///
/// Returns `None` for artifacts that are not produced by the rasterizer.
pub fn build_command(
    config: &ToolConfig,
    request: &GenerationRequest,
    payload: &SymbolPayload,
) -> Option<ExternalCommand> {
    let format = match request.artifact {
        ArtifactType::BitmapSource => "lvgl",
        ArtifactType::DebugDump => "dump",
        ArtifactType::Header => return None,
    };
    let output = output_path(request);
    let font = font_file(config, request.family, request.font_size);

    let mut args: Vec<OsString> = FIXED_FLAGS.iter().map(OsString::from).collect();
    args.push("--font".into());
    args.push(font.into_os_string());
    args.push("--format".into());
    args.push(format.into());
    if request.artifact == ArtifactType::BitmapSource {
        args.push("--lv-include".into());
        args.push(config.lv_include.clone().into());
    }
    args.push("--bpp".into());
    args.push(request.bpp.to_string().into());
    args.push("-o".into());
    args.push(output.clone().into_os_string());
    args.push("--size".into());
    args.push(request.font_size.to_string().into());
    payload.push_args(&mut args);

    Some(ExternalCommand { program: config.tool.clone(), args, output })
}
