//! Loader for the legacy double-byte charset mapping tables (`GB2312.TXT` and friends).
//!
//! The table is line oriented. Lines starting with `#` are comments and blank lines are ignored.
//! Every other line holds whitespace separated fields, of which the second is the Unicode code
//! point in hexadecimal (with or without a `0x` prefix).

use crate::error::{FontGenError, FontGenResult};
use log::debug;
use std::path::Path;

fn parse_hex(field: &str) -> Result<u32, String> {
    let digits = field
        .strip_prefix("0x")
        .or_else(|| field.strip_prefix("0X"))
        .unwrap_or(field);
    if digits.is_empty() || !digits.bytes().all(|x| x.is_ascii_hexdigit()) {
        return Err(format!("'{field}' is not a hexadecimal code point"));
    }
    u32::from_str_radix(digits, 16)
        .map_err(|_| format!("'{field}' is out of range for a code point"))
}

/// Parses the contents of an encoding table into the characters it maps to, in file order.
pub fn parse_encoding_table(data: &str) -> FontGenResult<Vec<char>> {
    let mut chars = Vec::new();
    for (idx, line) in data.lines().enumerate() {
        let line_no = idx + 1;
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        fields.next();
        let Some(field) = fields.next() else {
            return Err(FontGenError::MalformedEncodingTable {
                line: line_no,
                reason: "expected at least two fields".to_string(),
            });
        };
        let value = parse_hex(field)
            .map_err(|reason| FontGenError::MalformedEncodingTable { line: line_no, reason })?;
        let Some(ch) = char::from_u32(value) else {
            return Err(FontGenError::InvalidCodePoint { name: format!("line {line_no}"), value });
        };
        chars.push(ch);
    }
    Ok(chars)
}

/// Reads and parses the encoding table at `path`.
pub fn load_encoding_table(path: &Path) -> FontGenResult<Vec<char>> {
    let data = std::fs::read_to_string(path).map_err(|e| FontGenError::io(path, e))?;
    let chars = parse_encoding_table(&data)?;
    debug!("Loaded {} characters from '{}'", chars.len(), path.display());
    Ok(chars)
}
