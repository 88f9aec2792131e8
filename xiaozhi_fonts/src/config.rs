use crate::error::{FontGenError, FontGenResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Paths and settings shared by every generation request.
///
/// Every field may be omitted from the TOML file, in which case the default is used.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// The rasterizer executable.
    pub tool: String,
    /// The legacy charset table supplying the text font repertoire.
    pub encoding_table: PathBuf,
    pub text_font: PathBuf,
    pub icon_font_regular: PathBuf,
    pub icon_font_light: PathBuf,
    /// The icon font size rendered from the light weight.
    pub light_icon_size: u32,
    /// The header passed to `--lv-include` for bitmap sources.
    pub lv_include: String,
    /// `(font size, bpp)` pairs generated by the batch command.
    pub batch: Vec<(u32, u32)>,
}
impl Default for ToolConfig {
    fn default() -> Self {
        ToolConfig {
            tool: "lv_font_conv".to_string(),
            encoding_table: PathBuf::from("GB2312.TXT"),
            text_font: PathBuf::from("AlibabaPuHuiTi-3-55-Regular.ttf"),
            icon_font_regular: PathBuf::from("../../tmp/fa-regular-400.ttf"),
            icon_font_light: PathBuf::from("../../tmp/fa-light-300.ttf"),
            light_icon_size: 30,
            lv_include: "lvgl.h".to_string(),
            batch: vec![(14, 1), (16, 4), (20, 4), (30, 4)],
        }
    }
}
impl ToolConfig {
    pub fn parse(path: &Path, data: &str) -> FontGenResult<Self> {
        toml::from_str(data)
            .map_err(|source| FontGenError::Config { path: path.to_path_buf(), source })
    }

    pub fn load(path: &Path) -> FontGenResult<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| FontGenError::io(path, e))?;
        Self::parse(path, &data)
    }
}
