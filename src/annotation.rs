//! Decimal and quick-increment annotations
//!
//! Re-expresses part of a 68000 instruction word in a friendlier form:
//! the immediate byte of a MOVEQ (or a word with a zero high byte) as a
//! decimal literal `[N]`, and the 3-bit data field of ADDQ/SUBQ as `+N`/`-N`.
//!
// Copyright (c) 2025 Tommy Olsen
// Licensed under the MIT License.

use crate::error::CodecError;

/// ADDQ/SUBQ data field: bits 9-11, where 000 means 8
const QUICK_DATA_MASK: u16 = 0x0E00;
const QUICK_DATA_SHIFT: u16 = 9;
/// Set for SUBQ, clear for ADDQ
const QUICK_SUB_BIT: u16 = 0x0100;

/// Instruction word shapes that carry an annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionShape {
    /// `0111 rrr0 dddddddd`
    MoveQuick,
    /// High byte zero, most likely the data word of a move immediate
    ZeroHighByte,
    /// `0101 ddd s ss mmmrrr` with size bits not 11 (that encoding is Scc/DBcc)
    AddSubQuick,
}

impl InstructionShape {
    /// Classify an instruction word, MOVEQ and zero-high-byte taking priority
    pub fn classify(value: u16) -> Option<Self> {
        if value & 0xF100 == 0x7000 {
            Some(InstructionShape::MoveQuick)
        } else if value & 0xFF00 == 0x0000 {
            Some(InstructionShape::ZeroHighByte)
        } else if value & 0xF000 == 0x5000 && value & 0x00C0 != 0x00C0 {
            Some(InstructionShape::AddSubQuick)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation {
    /// Replaces the low 8 bits of the value
    Byte(u8),
    /// Sign goes to bit 8, `data & 7` to bits 9-11
    Quick { negative: bool, data: u8 },
}

impl Annotation {
    /// Annotation to show next to a code for `value`, if its shape has one
    pub fn derive(value: u16) -> Option<Self> {
        match InstructionShape::classify(value)? {
            InstructionShape::MoveQuick | InstructionShape::ZeroHighByte => {
                Some(Annotation::Byte((value & 0xFF) as u8))
            }
            InstructionShape::AddSubQuick => {
                let data = ((value & QUICK_DATA_MASK) >> QUICK_DATA_SHIFT) as u8;
                Some(Annotation::Quick {
                    negative: value & QUICK_SUB_BIT != 0,
                    data: if data == 0 { 8 } else { data },
                })
            }
        }
    }

    /// Overwrite the bits of `value` this annotation stands for
    pub fn apply(self, value: u16) -> u16 {
        match self {
            Annotation::Byte(n) => (value & 0xFF00) | n as u16,
            Annotation::Quick { negative, data } => {
                let value = if negative {
                    value | QUICK_SUB_BIT
                } else {
                    value & !QUICK_SUB_BIT
                };
                // 8 and 9 are taken raw, so they wrap to 0 and 1
                (value & !QUICK_DATA_MASK) | (((data as u16) << QUICK_DATA_SHIFT) & QUICK_DATA_MASK)
            }
        }
    }

    /// Parse an annotation at the start of `text`, after optional blanks
    ///
    /// Returns the annotation (if one is there) and the remaining text.
    /// Anything that does not start with `[`, `+` or `-` is left untouched.
    pub fn parse(text: &str) -> Result<(Option<Self>, &str), CodecError> {
        let trimmed = text.trim_start();
        let mut chars = trimmed.char_indices();

        match chars.next() {
            Some((_, '[')) => {
                let body = trimmed[1..].trim_start_matches(' ');
                let digits_end = body
                    .find(|c: char| !c.is_ascii_digit())
                    .unwrap_or(body.len());

                // Extra digits are accepted and masked to 8 bits
                let n = body[..digits_end].bytes().fold(0u32, |acc, d| {
                    acc.wrapping_mul(10).wrapping_add((d - b'0') as u32)
                });

                let mut rest = body[digits_end..].trim_start_matches(' ');
                if let Some(after) = rest.strip_prefix(']') {
                    rest = after;
                }
                Ok((Some(Annotation::Byte((n & 0xFF) as u8)), rest))
            }
            Some((_, sign @ ('+' | '-'))) => match chars.next() {
                Some((pos, d)) if d.is_ascii_digit() => Ok((
                    Some(Annotation::Quick {
                        negative: sign == '-',
                        data: d as u8 - b'0',
                    }),
                    &trimmed[pos + 1..],
                )),
                _ => {
                    let token = trimmed.split_whitespace().next().unwrap_or(trimmed);
                    Err(CodecError::BadAnnotation { text: token.to_string() })
                }
            },
            _ => Ok((None, text)),
        }
    }
}

impl std::fmt::Display for Annotation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Annotation::Byte(n) => write!(f, "[{}]", n),
            Annotation::Quick { negative, data } => {
                write!(f, "{}{}", if *negative { '-' } else { '+' }, data)
            }
        }
    }
}
