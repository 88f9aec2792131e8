//! The symbol repertoires handed to the rasterizer, and the icon name tables they are built from.

use crate::error::{FontGenError, FontGenResult};
use log::{debug, log_enabled, warn, Level};
use std::collections::{BTreeMap, HashSet};
use unic_ucd_block::Block;

/// Symbols always included in the text font ahead of the encoding table contents.
pub const BASELINE_SYMBOLS: [char; 7] = ['•', '·', '÷', '×', '©', '¥', '®'];

/// The ASCII block, passed to the rasterizer as a range rather than as explicit symbols.
pub const ASCII_RANGE: &str = "0x20-0x7F";

/// Sample sentence rendered by the text font's debug dump instead of the full repertoire.
pub const PREVIEW_TEXT: &str = "欢迎使用小智聊天机器人，这是一个纯手工打造的人工智能硬件产品。";

/// Emotion names mapped onto Font Awesome code points.
pub const EMOJI_MAPPING: &[(&str, u32)] = &[
    ("neutral", 0xf5a4),
    ("happy", 0xf118),
    ("laughing", 0xf59b),
    ("funny", 0xf588),
    ("sad", 0xe384),
    ("angry", 0xf556),
    ("crying", 0xf5b3),
    ("loving", 0xf584),
    ("embarrassed", 0xf579),
    ("surprised", 0xe36b),
    ("shocked", 0xe375),
    ("thinking", 0xe39b),
    ("winking", 0xf4da),
    ("cool", 0xe398),
    ("relaxed", 0xe392),
    ("delicious", 0xe372),
    ("kissy", 0xf598),
    ("confident", 0xe409),
    ("sleepy", 0xe38d),
    ("silly", 0xe3a4),
    ("confused", 0xe36d),
];

/// Status bar and control icons mapped onto Font Awesome code points.
pub const ICON_MAPPING: &[(&str, u32)] = &[
    // battery
    ("battery_full", 0xf240),
    ("battery_3", 0xf241),
    ("battery_2", 0xf242),
    ("battery_1", 0xf243),
    ("battery_empty", 0xf244),
    ("battery_slash", 0xf377),
    ("battery_charging", 0xf376),
    // wifi
    ("wifi", 0xf1eb),
    ("wifi_fair", 0xf6ab),
    ("wifi_weak", 0xf6aa),
    ("wifi_off", 0xf6ac),
    // signal
    ("signal_full", 0xf012),
    ("signal_4", 0xf68f),
    ("signal_3", 0xf68e),
    ("signal_2", 0xf68d),
    ("signal_1", 0xf68c),
    ("signal_off", 0xf695),
    // volume
    ("volume_high", 0xf028),
    ("volume_medium", 0xf6a8),
    ("volume_low", 0xf027),
    ("volume_mute", 0xf6a9),
    // media controls
    ("music", 0xf001),
    ("check", 0xf00c),
    ("xmark", 0xf00d),
    ("power", 0xf011),
    ("gear", 0xf013),
    ("trash", 0xf1f8),
    ("home", 0xf015),
    ("image", 0xf03e),
    ("edit", 0xf044),
    ("prev", 0xf048),
    ("next", 0xf051),
    ("play", 0xf04b),
    ("pause", 0xf04c),
    ("stop", 0xf04d),
    // TODO: `mic` has no code point in the upstream table; add it once the intended glyph is known.
    // arrows
    ("arrow_left", 0xf060),
    ("arrow_right", 0xf061),
    ("arrow_up", 0xf062),
    ("arrow_down", 0xf063),
    // misc
    ("warning", 0xf071),
    ("bell", 0xf0f3),
    ("location", 0xf3c5),
    ("globe", 0xf0ac),
    ("location_arrow", 0xf124),
    ("sd_card", 0xf7c2),
    ("bluetooth", 0xf293),
    ("comment", 0xf075),
    ("ai_chip", 0xe1ec),
    ("user", 0xf007),
    ("user_robot", 0xe04b),
    ("download", 0xf019),
];

/// Prefix applied to emoji names when both tables share one namespace.
pub const EMOJI_PREFIX: &str = "emoji_";

fn to_char(name: &str, value: u32) -> FontGenResult<char> {
    char::from_u32(value)
        .ok_or_else(|| FontGenError::InvalidCodePoint { name: name.to_string(), value })
}

/// An ordered, validated name to character mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolMap {
    entries: Vec<(String, char)>,
}
impl SymbolMap {
    /// Builds a map from a raw table, validating every code point and name.
    pub fn new(table: &[(&str, u32)]) -> FontGenResult<Self> {
        let mut map = SymbolMap::default();
        map.extend_from("", table)?;
        Ok(map)
    }

    /// Merges the emoji and icon tables, emoji first, with emoji names prefixed by `emoji_`.
    pub fn merged(emoji: &[(&str, u32)], icon: &[(&str, u32)]) -> FontGenResult<Self> {
        let mut map = SymbolMap::default();
        map.extend_from(EMOJI_PREFIX, emoji)?;
        map.extend_from("", icon)?;
        Ok(map)
    }

    fn extend_from(&mut self, prefix: &str, table: &[(&str, u32)]) -> FontGenResult<()> {
        for (name, value) in table {
            let name = format!("{prefix}{name}");
            if self.entries.iter().any(|(x, _)| *x == name) {
                return Err(FontGenError::DuplicateSymbolName(name));
            }
            let ch = to_char(&name, *value)?;
            self.entries.push((name, ch));
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, char)> {
        self.entries.iter().map(|(name, ch)| (name.as_str(), *ch))
    }

    pub fn get(&self, name: &str) -> Option<char> {
        self.iter().find(|(x, _)| *x == name).map(|(_, ch)| ch)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the text font repertoire: the baseline symbols followed by the encoding table, in order.
///
/// Duplicates are passed through untouched; they are only reported.
pub fn text_symbol_set(table: &[char]) -> Vec<char> {
    let mut symbols = Vec::with_capacity(BASELINE_SYMBOLS.len() + table.len());
    symbols.extend_from_slice(&BASELINE_SYMBOLS);
    symbols.extend_from_slice(table);

    let duplicates = count_duplicates(&symbols);
    if duplicates != 0 {
        warn!("Text symbol set contains {duplicates} duplicate symbols.");
    }
    symbols
}

/// Builds the icon font repertoire: every emoji value followed by every icon value, in order.
pub fn icon_symbol_set(emoji: &[(&str, u32)], icon: &[(&str, u32)]) -> FontGenResult<Vec<char>> {
    let mut symbols = Vec::with_capacity(emoji.len() + icon.len());
    for (name, value) in emoji.iter().chain(icon) {
        symbols.push(to_char(name, *value)?);
    }
    Ok(symbols)
}

/// Counts symbols that already appeared earlier in the list.
pub fn count_duplicates(symbols: &[char]) -> usize {
    let mut seen = HashSet::new();
    symbols.iter().filter(|x| !seen.insert(**x)).count()
}

fn block_name(ch: char) -> &'static str {
    match Block::of(ch) {
        None => "Unknown Block",
        Some(block) => block.name,
    }
}

/// Logs how many symbols fall into each Unicode block.
pub fn log_block_statistics(symbols: &[char]) {
    if !log_enabled!(Level::Debug) {
        return;
    }

    let mut blocks = BTreeMap::new();
    for ch in symbols {
        *blocks.entry(block_name(*ch)).or_insert(0usize) += 1;
    }
    for (block, count) in blocks {
        debug!("{block}: {count} symbols");
    }
}
