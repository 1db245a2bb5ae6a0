//! Global configuration for the Genie code converter
//!
//! Controls where the running address starts and how records are shown.
//!
// Copyright (c) 2025 Tommy Olsen
// Licensed under the MIT License.

use crate::error::ConfigError;

/// Application version
pub const VERSION: &str = "1.0.0";

/// Environment variable holding the start address (hex)
pub const START_ADDRESS_ENV: &str = "GENIE_START_ADDRESS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Running address before the first hex record. A value given
    /// without an address lands two bytes after it.
    pub start_address: u32,
    /// Show `[N]` / `+N` next to codes
    pub annotate: bool,
    /// Print the usage banner before reading standard input
    pub show_banner: bool,
}

impl Config {
    pub fn new(start_address: u32) -> Self {
        Self {
            start_address,
            annotate: true,
            show_banner: true,
        }
    }

    pub fn with_annotate(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }

    pub fn with_banner(mut self, show_banner: bool) -> Self {
        self.show_banner = show_banner;
        self
    }

    /// Create a Config with the start address taken from the environment
    ///
    /// Falls back to 0 if the variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_start_text(std::env::var(START_ADDRESS_ENV).ok().as_deref())
    }

    /// Create a Config from the start address text, if any was given
    fn from_start_text(text: Option<&str>) -> Result<Self, ConfigError> {
        match text {
            Some(text) => {
                let address = parse_hex_address(text).ok_or_else(|| ConfigError::BadStartAddress {
                    var: START_ADDRESS_ENV.to_string(),
                    text: text.to_string(),
                })?;
                Ok(Self::new(address))
            }
            None => Ok(Self::default()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Parse hex address string with or without `$` / `0x` prefix
pub fn parse_hex_address(text: &str) -> Option<u32> {
    let cleaned = text.trim()
        .trim_start_matches('$')
        .trim_start_matches("0x")
        .trim_start_matches("0X");
    if cleaned.is_empty() {
        return None;
    }
    u32::from_str_radix(cleaned, 16).ok()
}
