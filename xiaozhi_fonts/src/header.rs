//! Rendering of the icon name header used by the C side of the firmware.
//!
//! Each symbol becomes a `#define FONT_AWESOME_<NAME> "<utf-8 escapes>"` line, so that icons can
//! be placed into LVGL label text by name.

use crate::symbols::SymbolMap;
use std::fmt::Write;

pub const INCLUDE_GUARD: &str = "FONT_AWESOME_SYMBOLS_H";
pub const MACRO_PREFIX: &str = "FONT_AWESOME_";

/// Renders the UTF-8 encoding of a character as `\xHH` escapes.
pub fn escape_utf8(ch: char) -> String {
    let mut buf = [0; 4];
    let mut escaped = String::new();
    for byte in ch.encode_utf8(&mut buf).as_bytes() {
        write!(escaped, "\\x{byte:02x}").ok();
    }
    escaped
}

/// The macro name for a (namespaced) symbol name.
pub fn macro_name(name: &str) -> String {
    format!("{MACRO_PREFIX}{}", name.to_uppercase())
}

/// Generates the header text, with one macro per symbol in map order.
pub fn generate_header(symbols: &SymbolMap) -> String {
    let mut header = String::new();
    header.push_str(&format!("#ifndef {INCLUDE_GUARD}\n"));
    header.push_str(&format!("#define {INCLUDE_GUARD}\n"));
    header.push('\n');
    for (name, ch) in symbols.iter() {
        header.push_str(&format!("#define {} \"{}\"\n", macro_name(name), escape_utf8(ch)));
    }
    header.push('\n');
    header.push_str("#endif\n");
    header
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::symbols::{EMOJI_MAPPING, ICON_MAPPING};

    #[test]
    fn escapes() {
        assert_eq!(escape_utf8(' '), "\\x20");
        assert_eq!(escape_utf8('©'), "\\xc2\\xa9");
        assert_eq!(escape_utf8('\u{f118}'), "\\xef\\x84\\x98");
        assert_eq!(escape_utf8('\u{1f600}'), "\\xf0\\x9f\\x98\\x80");
        assert_eq!(escape_utf8('\u{10ffff}'), "\\xf4\\x8f\\xbf\\xbf");
    }

    #[test]
    fn header_layout() {
        let map = SymbolMap::merged(&[("happy", 0xf118)], &[("wifi_off", 0xf6ac)]).unwrap();
        assert_eq!(
            generate_header(&map),
            "#ifndef FONT_AWESOME_SYMBOLS_H\n\
             #define FONT_AWESOME_SYMBOLS_H\n\
             \n\
             #define FONT_AWESOME_EMOJI_HAPPY \"\\xef\\x84\\x98\"\n\
             #define FONT_AWESOME_WIFI_OFF \"\\xef\\x9a\\xac\"\n\
             \n\
             #endif\n"
        );
    }

    #[test]
    fn builtin_header() {
        let map = SymbolMap::merged(EMOJI_MAPPING, ICON_MAPPING).unwrap();
        let header = generate_header(&map);
        assert_eq!(header, generate_header(&map));

        let defines: Vec<_> =
            header.lines().filter(|x| x.starts_with("#define ") && x.contains(" \"")).collect();
        assert_eq!(defines.len(), map.len());
        assert_eq!(header.lines().filter(|x| x.contains(INCLUDE_GUARD)).count(), 2);
        assert_eq!(defines[0], "#define FONT_AWESOME_EMOJI_NEUTRAL \"\\xef\\x96\\xa4\"");
        assert_eq!(defines[EMOJI_MAPPING.len()], "#define FONT_AWESOME_BATTERY_FULL \"\\xef\\x89\\x80\"");
    }
}
