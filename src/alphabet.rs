//! Genie code alphabet
//!
//! Maps 5-bit field values to code characters and back. Decoding accepts
//! look-alike characters (lowercase letters, `O` for `0`, `I` for `1`).
//!
// Copyright (c) 2025 Tommy Olsen
// Licensed under the MIT License.

/// Characters used when rendering a field, indexed by field value
pub const CANONICAL: &[u8; 32] = b"ABCDEFGHJKLMNPRSTVWXYZ0123456789";

/// Extended table accepted when decoding: entry `i` decodes to `i >> 1`
pub const EXTENDED: &[u8; 64] =
    b"AaBbCcDdEeFfGgHhJjKkLlMmNnPpRrSsTtVvWwXxYyZz0O1I2233445566778899";

const NONE: u8 = 0xFF;

/* ======================= Decode table ======================= */

const fn build_decode_table() -> [u8; 128] {
    let mut table = [NONE; 128];
    let mut i = 0;
    while i < EXTENDED.len() {
        let ch = EXTENDED[i] as usize;
        // First occurrence wins
        if table[ch] == NONE {
            table[ch] = (i >> 1) as u8;
        }
        i += 1;
    }
    table
}

static DECODE: [u8; 128] = build_decode_table();

/// Render a 5-bit field value as its canonical character
///
/// Only the low 5 bits of `value` are used.
pub fn render(value: u8) -> char {
    CANONICAL[(value & 0x1F) as usize] as char
}

/// Look up the field value of a code character
///
/// Returns `None` for anything outside the extended table.
pub fn lookup(ch: char) -> Option<u8> {
    if !ch.is_ascii() {
        return None;
    }
    match DECODE[ch as usize] {
        NONE => None,
        value => Some(value),
    }
}
