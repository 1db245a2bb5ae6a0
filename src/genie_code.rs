//! Genesis Game Genie code <-> address/value permutation
//!
//! An 8-character code carries 40 bits: a 24-bit address and a 16-bit value.
//! Each character is one 5-bit field, and the bits of address and value are
//! scattered over the fields in a fixed order:
//!
//! ```text
//! field:  F0    F1    F2    F3    F4    F5    F6    F7
//!         ijklm nopIJ KLMNO PABCD EFGHd efgha bcQRS TUVWX
//!
//! address ABCDEFGH IJKLMNOP QRSTUVWX   value abcdefgh ijklmnop
//!         MSB                   LSB         MSB           LSB
//! ```
//!
// Copyright (c) 2025 Tommy Olsen
// Licensed under the MIT License.

use std::str::FromStr;

use crate::alphabet;
use crate::annotation::Annotation;
use crate::error::CodecError;

/// Significant address bits
pub const ADDRESS_MASK: u32 = 0x00FF_FFFF;

/// Number of characters (fields) in a code
pub const CODE_LEN: usize = 8;

/* ======================= Address/value pair ======================= */

/// A 24-bit address and the 16-bit word written there
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Patch {
    pub address: u32,
    pub value: u16,
}

impl Patch {
    /// Address bits above 23 are dropped
    pub fn new(address: u32, value: u16) -> Self {
        Self {
            address: address & ADDRESS_MASK,
            value,
        }
    }
}

impl std::fmt::Display for Patch {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:06x}: {:04x}", self.address, self.value)
    }
}

/* ======================= Code ======================= */

/// Eight 5-bit fields, the intermediate form between text and [`Patch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenieCode {
    fields: [u8; CODE_LEN],
}

impl GenieCode {
    /// Build a code from raw field values (each masked to 5 bits)
    pub fn from_fields(fields: [u8; CODE_LEN]) -> Self {
        Self {
            fields: fields.map(|f| f & 0x1F),
        }
    }

    pub fn fields(&self) -> [u8; CODE_LEN] {
        self.fields
    }

    /// Scatter address and value bits into the eight fields
    pub fn from_patch(patch: Patch) -> Self {
        let addr = patch.address;
        let instr = patch.value as u32;

        let fields = [
            (instr >> 3) & 0x1F,
            ((instr << 2) & 0x1C) | ((addr >> 14) & 0x03),
            (addr >> 9) & 0x1F,
            ((addr >> 4) & 0x10) | ((addr >> 20) & 0x0F),
            ((addr >> 15) & 0x1E) | ((instr >> 12) & 0x01),
            ((instr >> 7) & 0x1E) | ((instr >> 15) & 0x01),
            ((instr >> 10) & 0x18) | ((addr >> 5) & 0x07),
            addr & 0x1F,
        ];

        Self {
            fields: fields.map(|f| f as u8),
        }
    }

    /// Gather the fields back into address and value
    pub fn to_patch(&self) -> Patch {
        let b = self.fields.map(|f| f as u32);

        let address = ((b[3] & 0x0F) << 20)
            | ((b[4] & 0x1E) << 15)
            | ((b[1] & 0x03) << 14)
            | ((b[2] & 0x1F) << 9)
            | ((b[3] & 0x10) << 4)
            | ((b[6] & 0x07) << 5)
            | (b[7] & 0x1F);

        let value = ((b[5] & 0x01) << 15)
            | ((b[6] & 0x18) << 10)
            | ((b[4] & 0x01) << 12)
            | ((b[5] & 0x1E) << 7)
            | ((b[0] & 0x1F) << 3)
            | ((b[1] & 0x1C) >> 2);

        Patch::new(address, value as u16)
    }

    /// Read one code from the start of `text`
    ///
    /// Dashes and whitespace between characters are skipped. Stops right
    /// after the 8th code character and returns the rest of the text.
    pub fn scan(text: &str) -> Result<(Self, &str), CodecError> {
        let mut fields = [0u8; CODE_LEN];
        let mut found = 0;
        let mut end = text.len();

        for (pos, ch) in text.char_indices() {
            if found == CODE_LEN {
                end = pos;
                break;
            }
            if ch == '-' || ch.is_whitespace() {
                continue;
            }
            match alphabet::lookup(ch) {
                Some(value) => {
                    fields[found] = value;
                    found += 1;
                }
                None => {
                    return Err(CodecError::BadCharacter {
                        code: text.trim().to_string(),
                        ch,
                    });
                }
            }
        }

        if found < CODE_LEN {
            return Err(CodecError::TooShort {
                code: text.trim().to_string(),
                found,
            });
        }

        Ok((Self { fields }, &text[end..]))
    }
}

impl std::fmt::Display for GenieCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, &field) in self.fields.iter().enumerate() {
            if i == 4 {
                write!(f, "-")?;
            }
            write!(f, "{}", alphabet::render(field))?;
        }
        Ok(())
    }
}

impl FromStr for GenieCode {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (code, rest) = Self::scan(s)?;
        if !rest.trim().is_empty() {
            return Err(CodecError::TrailingInput { code: s.trim().to_string() });
        }
        Ok(code)
    }
}

/* ======================= Encode / decode ======================= */

/// A code together with the annotation derived from its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoded {
    pub code: GenieCode,
    pub annotation: Option<Annotation>,
}

impl std::fmt::Display for Encoded {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.annotation {
            Some(annotation) => write!(f, "{} {}", self.code, annotation),
            None => write!(f, "{}", self.code),
        }
    }
}

/// Encode an address (low 24 bits used) and value into a code
pub fn encode(address: u32, value: u16) -> Encoded {
    Encoded {
        code: GenieCode::from_patch(Patch::new(address, value)),
        annotation: Annotation::derive(value),
    }
}

/// Decode a standalone code, then apply the annotation if given
pub fn decode(code: &str, annotation: Option<Annotation>) -> Result<Patch, CodecError> {
    let code: GenieCode = code.parse()?;
    Ok(decode_fields(&code, annotation))
}

/// Decode an already scanned code
pub fn decode_fields(code: &GenieCode, annotation: Option<Annotation>) -> Patch {
    let patch = code.to_patch();
    match annotation {
        Some(annotation) => Patch::new(patch.address, annotation.apply(patch.value)),
        None => patch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// (field, bit) each address bit lands in, address bit 0 first
    const ADDRESS_WIRING: [(usize, u32); 24] = [
        (7, 0), (7, 1), (7, 2), (7, 3), (7, 4),
        (6, 0), (6, 1), (6, 2),
        (3, 4),
        (2, 0), (2, 1), (2, 2), (2, 3), (2, 4),
        (1, 0), (1, 1),
        (4, 1), (4, 2), (4, 3), (4, 4),
        (3, 0), (3, 1), (3, 2), (3, 3),
    ];

    /// (field, bit) each value bit lands in, value bit 0 first
    const VALUE_WIRING: [(usize, u32); 16] = [
        (1, 2), (1, 3), (1, 4),
        (0, 0), (0, 1), (0, 2), (0, 3), (0, 4),
        (5, 1), (5, 2), (5, 3), (5, 4),
        (4, 0),
        (6, 3), (6, 4),
        (5, 0),
    ];

    fn flipped(a: GenieCode, b: GenieCode) -> Vec<(usize, u32)> {
        let mut out = Vec::new();
        for field in 0..CODE_LEN {
            let diff = a.fields()[field] ^ b.fields()[field];
            for bit in 0..5 {
                if diff & (1 << bit) != 0 {
                    out.push((field, bit));
                }
            }
        }
        out
    }

    #[test]
    fn test_known_vector_encode() {
        let encoded = encode(0x009C76, 0x5478);
        assert_eq!(encoded.code.to_string(), "SCRA-BJX0");
        assert_eq!(encoded.code.fields(), [15, 2, 14, 0, 1, 8, 19, 22]);
        // 0x5478 is ADDQ.W #2,(xxx).W
        assert_eq!(encoded.annotation, Some(Annotation::Quick { negative: false, data: 2 }));
    }

    #[test]
    fn test_known_vector_decode() {
        assert_eq!(decode("SCRA-BJX0", None).unwrap(), Patch { address: 0x009C76, value: 0x5478 });
        // Aliases and missing dash
        assert_eq!(decode("scrabjxO", None).unwrap(), Patch { address: 0x009C76, value: 0x5478 });
    }

    #[test]
    fn test_address_wiring() {
        for (bit, &expected) in ADDRESS_WIRING.iter().enumerate() {
            let base = GenieCode::from_patch(Patch::new(0, 0));
            let one = GenieCode::from_patch(Patch::new(1 << bit, 0));
            assert_eq!(flipped(base, one), vec![expected], "address bit {}", bit);
        }
    }

    #[test]
    fn test_value_wiring() {
        for (bit, &expected) in VALUE_WIRING.iter().enumerate() {
            let base = GenieCode::from_patch(Patch::new(0x123456, 0));
            let one = GenieCode::from_patch(Patch::new(0x123456, 1 << bit));
            assert_eq!(flipped(base, one), vec![expected], "value bit {}", bit);
        }
    }

    #[test]
    fn test_wiring_covers_every_field_bit_once() {
        let mut seen = [[false; 5]; CODE_LEN];
        for &(field, bit) in ADDRESS_WIRING.iter().chain(VALUE_WIRING.iter()) {
            assert!(!seen[field][bit as usize], "F{} bit {} used twice", field, bit);
            seen[field][bit as usize] = true;
        }
        assert!(seen.iter().flatten().all(|&s| s));
    }

    #[test]
    fn test_boundary_round_trip() {
        for address in [0, 1, 0x00FF_FFFE, 0x00FF_FFFF] {
            for value in [0, 1, 0x8000, 0xFFFF] {
                let encoded = encode(address, value);
                let patch = decode(&encoded.code.to_string(), encoded.annotation).unwrap();
                assert_eq!(patch, Patch { address, value });
            }
        }
    }

    #[test]
    fn test_high_address_bits_dropped() {
        assert_eq!(encode(0xFF00_9C76, 0x5478).code, encode(0x009C76, 0x5478).code);
    }

    #[test]
    fn test_decode_applies_annotation() {
        // AAAA-AAAA is 000000: 0000; [99] fills the low byte
        assert_eq!(
            decode("AAAA-AAAA", Some(Annotation::Byte(99))).unwrap(),
            Patch { address: 0, value: 99 }
        );
    }

    #[test]
    fn test_all_ones() {
        let code = GenieCode::from_fields([0x1F; CODE_LEN]);
        assert_eq!(code.to_string(), "9999-9999");
        assert_eq!(code.to_patch(), Patch { address: 0xFF_FFFF, value: 0xFFFF });
    }

    #[test]
    fn test_rejects_bad_character() {
        let err = decode("SCRA#BJX0", None).unwrap_err();
        assert_eq!(err, CodecError::BadCharacter { code: "SCRA#BJX0".to_string(), ch: '#' });
        assert!(decode("SCRA-BJX#", None).is_err());
    }

    #[test]
    fn test_rejects_short_and_long_codes() {
        assert!(matches!(decode("SCRA-BJX", None), Err(CodecError::TooShort { found: 7, .. })));
        assert!(matches!(decode("", None), Err(CodecError::TooShort { found: 0, .. })));
        assert!(matches!(decode("SCRA-BJX0A", None), Err(CodecError::TrailingInput { .. })));
    }

    #[test]
    fn test_scan_returns_rest() {
        let (code, rest) = GenieCode::scan("  SCRA-BJX0 [5] AAAA-AAAA").unwrap();
        assert_eq!(code.to_string(), "SCRA-BJX0");
        assert_eq!(rest, " [5] AAAA-AAAA");
    }

    #[test]
    fn test_patch_display() {
        assert_eq!(Patch::new(0x9C76, 0x5478).to_string(), "009c76: 5478");
    }
}
