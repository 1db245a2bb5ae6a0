//! Line converter main API
//!
//! Decides per line whether it holds Genie codes or hex records, converts
//! every record on it, and renders the result the same way for both
//! directions:
//!
//! ```text
//! SCRA-BJX0 +2    = 009c76: 5478
//! ```
//!
// Copyright (c) 2025 Tommy Olsen
// Licensed under the MIT License.

use log::debug;

use crate::annotation::Annotation;
use crate::config::Config;
use crate::error::{Diagnostic, RangeWarning};
use crate::genie_code::{self, Encoded, GenieCode, Patch};
use crate::hex_record::{self, AddressCursor, HexEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    /// Contains a dash
    Code,
    Hex,
}

impl LineKind {
    pub fn classify(line: &str) -> Self {
        if line.trim().is_empty() {
            LineKind::Blank
        } else if line.contains('-') {
            LineKind::Code
        } else {
            LineKind::Hex
        }
    }
}

/// One converted record: the pair and its canonical code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub patch: Patch,
    pub encoded: Encoded,
}

impl Record {
    fn new(patch: Patch, annotate: bool) -> Self {
        let mut encoded = genie_code::encode(patch.address, patch.value);
        if !annotate {
            encoded.annotation = None;
        }
        Self { patch, encoded }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        // Annotation column is always six characters wide
        let column = match self.encoded.annotation {
            Some(Annotation::Byte(n)) => format!(" [{:3}]", n),
            Some(quick) => format!(" {:<5}", quick.to_string()),
            None => " ".repeat(6),
        };
        write!(f, "{}{} = {}", self.encoded.code, column, self.patch)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Record(Record),
    Diagnostic(Diagnostic),
}

/// Everything one input line produced, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineReport {
    pub entries: Vec<Entry>,
}

impl LineReport {
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Record(r) => Some(r),
            Entry::Diagnostic(_) => None,
        })
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Diagnostic(d) => Some(d),
            Entry::Record(_) => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push_record(&mut self, patch: Patch, annotate: bool) {
        let record = Record::new(patch, annotate);
        debug!("{} -> {}", record.encoded.code, record.patch);
        self.entries.push(Entry::Record(record));
    }

    fn push_diagnostic(&mut self, diagnostic: impl Into<Diagnostic>) {
        self.entries.push(Entry::Diagnostic(diagnostic.into()));
    }
}

/// Converts lines one after another, keeping the running address
pub struct LineConverter {
    config: Config,
    cursor: AddressCursor,
}

impl LineConverter {
    /// Create a new converter with the given configuration
    pub fn new(config: Config) -> Self {
        let cursor = AddressCursor::new(config.start_address);
        Self { config, cursor }
    }

    /// Running address after the last converted record
    pub fn cursor(&self) -> AddressCursor {
        self.cursor
    }

    /// Convert one line of input
    pub fn convert(&mut self, line: &str) -> LineReport {
        match LineKind::classify(line) {
            LineKind::Blank => LineReport::default(),
            LineKind::Code => self.convert_codes(line),
            LineKind::Hex => self.convert_hex(line),
        }
    }

    /// Convert a block of text line by line
    pub fn convert_text(&mut self, text: &str) -> Vec<LineReport> {
        text.lines().map(|line| self.convert(line)).collect()
    }

    /// Codes, each optionally followed by its annotation
    ///
    /// A malformed code ends the line, since the position of anything after
    /// it can no longer be trusted.
    fn convert_codes(&mut self, line: &str) -> LineReport {
        let mut report = LineReport::default();
        let mut rest = line;

        while !rest.trim().is_empty() {
            let (code, after) = match GenieCode::scan(rest) {
                Ok(scanned) => scanned,
                Err(e) => {
                    report.push_diagnostic(e);
                    break;
                }
            };

            let (annotation, after) = match Annotation::parse(after) {
                Ok(parsed) => parsed,
                Err(e) => {
                    report.push_diagnostic(e);
                    break;
                }
            };

            let patch = genie_code::decode_fields(&code, annotation);
            if patch.address & 1 != 0 {
                report.push_diagnostic(RangeWarning::OddAddress(patch.address));
            }
            report.push_record(patch, self.config.annotate);

            rest = after;
        }

        report
    }

    fn convert_hex(&mut self, line: &str) -> LineReport {
        let mut report = LineReport::default();
        for event in hex_record::scan_line(line, &mut self.cursor) {
            match event {
                HexEvent::Record(patch) => report.push_record(patch, self.config.annotate),
                HexEvent::Diagnostic(d) => report.push_diagnostic(d),
            }
        }
        report
    }
}

impl Default for LineConverter {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
