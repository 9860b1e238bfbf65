// SPDX-License-Identifier: Apache-2.0

//! Reformat a JSON file: parse it, then print it compact or pretty.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use treejson::JsonError;

#[derive(Parser)]
#[command(name = "jsonfmt", about = "Parse a JSON file and re-emit it")]
struct Args {
    /// Input file
    input: PathBuf,

    /// Pretty-print with two-space indentation
    #[arg(long)]
    pretty: bool,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let value = match treejson::parse_file(&args.input) {
        Ok(value) => value,
        Err(JsonError::Io(e)) => {
            eprintln!("Error: unable to read '{}': {}", args.input.display(), e);
            process::exit(1);
        }
        Err(JsonError::Parse(e)) => {
            eprintln!("Error: '{}' is not valid JSON: {}", args.input.display(), e);
            process::exit(1);
        }
    };
    log::debug!("parsed {} root value", value.type_name());

    match args.output {
        Some(path) => {
            if let Err(e) = treejson::write_file(&value, &path, args.pretty) {
                eprintln!("Error: unable to write '{}': {}", path.display(), e);
                process::exit(1);
            }
        }
        None => println!("{}", treejson::stringify(&value, args.pretty)),
    }
}
