//! Command-line interface for the Genesis Game Genie Converter
//!
//! Usage: genesis-genie-converter-cli [CODE or ADDRESS: VALUE]...
//!
//! With no arguments, lines are read from standard input until EOF.
//!
// Copyright (c) 2025 Tommy Olsen
// Licensed under the MIT License.

use std::io::{self, BufRead};
use std::process;

use clap::Parser;
use log::{error, info, warn};

// Import the library crate modules
use genesis_genie_converter::config::{parse_hex_address, Config, VERSION};
use genesis_genie_converter::convert_line::{Entry, LineConverter, LineReport};
use genesis_genie_converter::error::Diagnostic;

#[derive(Parser)]
#[command(author, version, about = "Translate between Genesis Game Genie codes and address: value pairs")]
struct Args {
    /// Codes (SCRA-BJX0 [5], SCRA-BJX0 +2) or hex records (009c76: 5478).
    /// All arguments are joined into one line; read stdin if none are given.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    input: Vec<String>,

    /// Running address before the first hex record (hex, e.g. $FF0000)
    #[arg(short, long, value_parser = parse_start)]
    start: Option<u32>,

    /// Do not show [N] / +N annotations
    #[arg(long)]
    no_annotate: bool,

    /// Do not print the banner when reading stdin
    #[arg(short, long)]
    quiet: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Command-line input as one text, or `None` to read stdin
    fn input_text(&self) -> Option<String> {
        if self.input.is_empty() {
            None
        } else {
            Some(self.input.join(" "))
        }
    }
}

fn parse_start(text: &str) -> Result<u32, String> {
    parse_hex_address(text).ok_or_else(|| format!("'{}' is not a hex address", text))
}

fn main() {
    let args = Args::parse();

    let default_level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let mut config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    if let Some(start) = args.start {
        config.start_address = start;
    }
    let config = config
        .with_annotate(!args.no_annotate)
        .with_banner(!args.quiet);

    info!("Genie converter v{}, start address {:06x}", VERSION, config.start_address);

    let show_banner = config.show_banner;
    let mut converter = LineConverter::new(config);

    if let Some(text) = args.input_text() {
        for line in text.lines() {
            print_report(&converter.convert(line));
        }
        return;
    }

    if show_banner {
        print_banner();
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        match line {
            Ok(line) => print_report(&converter.convert(&line)),
            Err(e) => {
                error!("Failed to read standard input: {}", e);
                process::exit(1);
            }
        }
    }
}

/// Records go to stdout, diagnostics to the log (stderr)
fn print_report(report: &LineReport) {
    for entry in &report.entries {
        match entry {
            Entry::Record(record) => println!("{}", record),
            Entry::Diagnostic(Diagnostic::Warning(w)) => warn!("{}", w),
            Entry::Diagnostic(Diagnostic::Error(e)) => error!("{}", e),
        }
    }
}

fn print_banner() {
    println!("Genesis Game Genie Converter v{} (CLI)", VERSION);
    println!();
    println!("Translates between Game Genie for Genesis codes and the 24-bit");
    println!("address and 16-bit data that the code represents.");
    println!();
    println!("Enter a Game Genie code, e.g. SCRA-BJX0, to get the address and");
    println!("data as 009c76: 5478. You may then disassemble the data as a");
    println!("68000 instruction.");
    println!();
    println!("This also works in reverse: enter the address and data to get the");
    println!("8-letter code. Several values after one address go to consecutive");
    println!("words (009c76: 5478 4e71).");
    println!();
    println!("A number in square brackets after a code changes the lower 8 bits");
    println!("(number of starting lives, for example): SCRA-BJX0 [99]");
    println!("+N or -N (N=1..8) after a code changes ADDQ/SUBQ increments.");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_annotation_argument() {
        let args = Args::try_parse_from(["genie", "SCRA-BJX0", "-5"]).unwrap();
        assert_eq!(args.input, vec!["SCRA-BJX0", "-5"]);
        assert_eq!(args.input_text().as_deref(), Some("SCRA-BJX0 -5"));
    }

    #[test]
    fn test_flags_before_input() {
        let args = Args::try_parse_from(["genie", "-q", "--start", "$1000", "4e71", "-3"]).unwrap();
        assert!(args.quiet);
        assert_eq!(args.start, Some(0x1000));
        assert_eq!(args.input, vec!["4e71", "-3"]);
    }

    #[test]
    fn test_no_input_reads_stdin() {
        let args = Args::try_parse_from(["genie"]).unwrap();
        assert_eq!(args.input_text(), None);
    }

    #[test]
    fn test_joined_arguments_convert_as_one_line() {
        let args = Args::try_parse_from(["genie", "SCRA-BJX0", "-5", "AAAA-AAAA", "[7]"]).unwrap();
        let text = args.input_text().unwrap();
        let mut converter = LineConverter::new(Config::default());
        let report = converter.convert(&text);
        let values: Vec<u16> = report.records().map(|r| r.patch.value).collect();
        assert_eq!(values, vec![0x5B78, 0x0007]);
    }
}
