//! Hex address/value lexer
//!
//! Reads lines such as `009c76: 5478 4e71` into records. A token ending in
//! `:` moves the running address; every other token is a 16-bit value
//! written two bytes past the previous one.
//!
// Copyright (c) 2025 Tommy Olsen
// Licensed under the MIT License.

use crate::error::{CodecError, Diagnostic, RangeWarning};
use crate::genie_code::Patch;

const ADDRESS_OVERFLOW: u32 = 0xFF00_0000;

/// Running address carried from record to record and line to line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressCursor {
    current: u32,
}

impl AddressCursor {
    /// `current` is the address before the first record, so a bare value
    /// lands at `current + 2`
    pub fn new(current: u32) -> Self {
        Self { current }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    /// The next value record lands exactly at `address`
    pub fn set_origin(&mut self, address: u32) {
        self.current = address.wrapping_sub(2);
    }

    /// Step to the next word and return its address
    pub fn advance(&mut self) -> u32 {
        self.current = self.current.wrapping_add(2);
        self.current
    }
}

impl Default for AddressCursor {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Output of the lexer, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexEvent {
    Record(Patch),
    Diagnostic(Diagnostic),
}

fn is_separator(c: char) -> bool {
    c == ' ' || c == ':' || c == '\t'
}

/// Parse a hex token, wrapping past 32 bits
fn parse_hex(token: &str) -> Option<u32> {
    token.chars().try_fold(0u32, |acc, c| {
        c.to_digit(16).map(|d| acc.wrapping_mul(16).wrapping_add(d))
    })
}

/// Warnings for an address given in hex input
pub fn check_address(address: u32) -> Vec<RangeWarning> {
    let mut warnings = Vec::new();
    if address & ADDRESS_OVERFLOW != 0 {
        warnings.push(RangeWarning::AddressTooLarge(address));
    }
    if address & 1 != 0 {
        warnings.push(RangeWarning::OddAddress(address & crate::genie_code::ADDRESS_MASK));
    }
    warnings
}

/// Truncate a value to 16 bits, warning if anything was lost
pub fn truncate_value(value: u32) -> (u16, Option<RangeWarning>) {
    if value > 0xFFFF {
        ((value & 0xFFFF) as u16, Some(RangeWarning::ValueTooLarge(value)))
    } else {
        (value as u16, None)
    }
}

/// Lex one line of hex input, moving `cursor` as records are produced
///
/// A bad token is reported and skipped; the cursor does not move for it.
pub fn scan_line(line: &str, cursor: &mut AddressCursor) -> Vec<HexEvent> {
    let mut events = Vec::new();
    let mut rest = line;

    loop {
        rest = rest.trim_start_matches(is_separator);
        if rest.is_empty() {
            break;
        }

        let end = rest.find(is_separator).unwrap_or(rest.len());
        let (token, after) = rest.split_at(end);

        match parse_hex(token) {
            Some(address) if after.starts_with(':') => {
                for w in check_address(address) {
                    events.push(HexEvent::Diagnostic(w.into()));
                }
                cursor.set_origin(address);
            }
            Some(raw) => {
                let (value, warning) = truncate_value(raw);
                if let Some(w) = warning {
                    events.push(HexEvent::Diagnostic(w.into()));
                }
                let address = cursor.advance();
                events.push(HexEvent::Record(Patch::new(address, value)));
            }
            None => {
                let err = CodecError::BadHex { text: rest.trim_end().to_string() };
                events.push(HexEvent::Diagnostic(err.into()));
            }
        }

        rest = after;
    }

    events
}
