//! Genesis Game Genie Converter Library
//!
//! Translates between Game Genie codes for the Sega Genesis / Mega Drive and
//! the 24-bit address and 16-bit value they patch.
//!
// Copyright (c) 2025 Tommy Olsen
// Licensed under the MIT License.

pub mod alphabet;
pub mod annotation;
pub mod config;
pub mod convert_line;
pub mod error;
pub mod genie_code;
pub mod hex_record;

pub use annotation::Annotation;
pub use error::{CodecError, ConfigError, Diagnostic, MalformedCodeError, RangeWarning};
pub use genie_code::{decode, encode, Encoded, GenieCode, Patch};
