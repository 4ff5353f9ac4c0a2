//! Slip Codec CLI
//!
//! Streams payment records from a CSV file and writes the encoded slip
//! codes and PIX payloads as CSV, to stdout or to an optional output file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- records.csv > encoded.csv
//! cargo run -- records.csv encoded.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use slip_codec::{CodecError, Result, SlipEngine};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(CodecError::MissingArgument);
    }

    let file = File::open(&args[1])?;
    let reader = BufReader::new(file);

    let mut engine = SlipEngine::new();
    engine.process_csv(reader)?;

    match args.get(2) {
        Some(path) => {
            let output = File::create(path)?;
            engine.write_output(output)?;
        }
        None => {
            let stdout = io::stdout();
            engine.write_output(stdout.lock())?;
        }
    }

    Ok(())
}
