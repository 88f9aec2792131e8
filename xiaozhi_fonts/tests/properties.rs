use quickcheck::quickcheck;
use xiaozhi_fonts::{
    encoding_table::parse_encoding_table,
    header::{escape_utf8, generate_header},
    symbols::SymbolMap,
};

/// Decodes a run of `\xHH` escapes back into bytes.
fn unescape(escaped: &str) -> Vec<u8> {
    escaped
        .split("\\x")
        .filter(|x| !x.is_empty())
        .map(|x| {
            assert_eq!(x.len(), 2, "escape is not two digits: {x}");
            assert!(x.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
            u8::from_str_radix(x, 16).unwrap()
        })
        .collect()
}

/// Checks that the escaped macro value decodes to exactly the original character.
fn check_round_trip(ch: char) -> bool {
    let bytes = unescape(&escape_utf8(ch));
    bytes.len() == ch.len_utf8() && std::str::from_utf8(&bytes).ok() == Some(ch.to_string().as_str())
}

quickcheck! {
    fn escape_round_trip(ch: char) -> bool {
        check_round_trip(ch)
    }
}

quickcheck! {
    fn header_macro_round_trip(value: u32) -> bool {
        let value = 0x20 + value % (0x110000 - 0x20);
        let Some(ch) = char::from_u32(value) else {
            return true;
        };
        let map = SymbolMap::new(&[("glyph", value)]).unwrap();
        let header = generate_header(&map);
        let line = header.lines().find(|x| x.starts_with("#define FONT_AWESOME_GLYPH ")).unwrap();
        let literal = line.trim_start_matches("#define FONT_AWESOME_GLYPH ").trim_matches('"');
        std::str::from_utf8(&unescape(literal)).ok() == Some(ch.to_string().as_str())
    }
}

quickcheck! {
    fn loader_counts_data_lines(entries: Vec<(u16, char, bool)>) -> bool {
        let mut table = String::new();
        let mut expected = Vec::new();
        for (code, ch, comment) in entries {
            if comment {
                table.push_str(&format!("# 0x{code:04X} 0x{:04X}\n\n", ch as u32));
            } else {
                table.push_str(&format!("0x{code:04X}\t0x{:04X}\t# entry\n", ch as u32));
                expected.push(ch);
            }
        }
        parse_encoding_table(&table).unwrap() == expected
    }
}

#[test]
fn supplementary_planes_use_four_bytes() {
    for value in [0x10000, 0x1f600, 0x10ffff] {
        let ch = char::from_u32(value).unwrap();
        assert_eq!(unescape(&escape_utf8(ch)).len(), 4);
        assert!(check_round_trip(ch));
    }
}

#[test]
fn every_scalar_value_round_trips() {
    for value in 0x20..0x110000 {
        if let Some(ch) = char::from_u32(value) {
            assert!(check_round_trip(ch), "failed for {value:#x}");
        }
    }
}

#[test]
fn happy_emoji_macro() {
    let map = SymbolMap::merged(&[("happy", 0xf118)], &[]).unwrap();
    assert!(generate_header(&map).contains("#define FONT_AWESOME_EMOJI_HAPPY \"\\xef\\x84\\x98\"\n"));
}
