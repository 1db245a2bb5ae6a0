//! Conversion errors and range warnings
//!
// Copyright (c) 2025 Tommy Olsen
// Licensed under the MIT License.

use thiserror::Error;

/// A record that cannot be converted. The caller reports it and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Bad Genie code '{code}': '{ch}' is not a code character")]
    BadCharacter { code: String, ch: char },

    #[error("Bad Genie code '{code}': expected 8 code characters, found {found}")]
    TooShort { code: String, found: usize },

    #[error("Bad Genie code '{code}': unexpected text after the 8th character")]
    TrailingInput { code: String },

    #[error("Bad annotation '{text}': expected +N or -N with a single digit")]
    BadAnnotation { text: String },

    #[error("Bad hex code '{text}'")]
    BadHex { text: String },
}

/// Bad settings, reported before any conversion starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a hex address: '{text}'")]
    BadStartAddress { var: String, text: String },
}

/// The error a malformed code decodes to
pub type MalformedCodeError = CodecError;

/// Advisory range problems. Conversion still produces output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeWarning {
    AddressTooLarge(u32),
    OddAddress(u32),
    ValueTooLarge(u32),
}

impl std::fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RangeWarning::AddressTooLarge(a) => write!(f, "address too large: {:x}", a),
            RangeWarning::OddAddress(a) => write!(f, "odd address: {:06x}", a),
            RangeWarning::ValueTooLarge(v) => write!(f, "instruction too large: {:x}", v),
        }
    }
}

/// Something to report about a line, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    Warning(RangeWarning),
    Error(CodecError),
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Diagnostic::Warning(w) => write!(f, "Warning: {}", w),
            Diagnostic::Error(e) => write!(f, "Error: {}", e),
        }
    }
}

impl From<RangeWarning> for Diagnostic {
    fn from(w: RangeWarning) -> Self {
        Diagnostic::Warning(w)
    }
}

impl From<CodecError> for Diagnostic {
    fn from(e: CodecError) -> Self {
        Diagnostic::Error(e)
    }
}
