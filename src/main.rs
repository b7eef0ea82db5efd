//! Orthocase CLI
//!
//! Usage:
//!   orthocase [OPTIONS] [FILE]
//!
//! Options:
//!   -o, --output <FILE>   Write the expanded document to a file
//!   -c, --check           Parse and expand without emitting the result
//!       --options <FILE>  Formatting options file (TOML)
//!   -h, --help            Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use orthocase::{expand_document, parse, write_document, FormatOptions};

#[derive(Parser)]
#[command(name = "orthocase")]
#[command(about = "Expands parameterized test cases over orthogonal factors")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Write the expanded document to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Parse and expand without emitting the result
    #[arg(short, long)]
    check: bool,

    /// Formatting options file (TOML)
    #[arg(long)]
    options: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load formatting options
    let options = match &cli.options {
        Some(path) => match FormatOptions::from_file(path) {
            Ok(o) => o,
            Err(e) => {
                eprintln!("Error loading options '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => FormatOptions::default(),
    };

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    // Parse, with ariadne-rendered syntax errors
    let doc = match parse(&source) {
        Ok(doc) => doc,
        Err(errors) => {
            for err in &errors {
                eprintln!("{}", err.format(&source, &filename));
            }
            std::process::exit(1);
        }
    };

    // Expand
    let doc = match expand_document(doc) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.check {
        return;
    }

    let rendered = write_document(&doc, &options);
    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, rendered) {
                eprintln!("Error writing file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => print!("{}", rendered),
    }
}

fn print_intro() {
    println!(
        r#"Orthocase - orthogonal expansion of parameterized test cases

USAGE:
    orthocase [OPTIONS] [FILE]
    echo '<definitions>' | orthocase

OPTIONS:
    -o, --output <FILE>   Write the expanded document to a file
    -c, --check           Parse and expand without emitting the result
        --options <FILE>  Formatting options file (TOML)
    -h, --help            Print help

QUICK START:
    echo 'factors {{ A: ["x", "y"] }}
    cases {{ case "t" {{ do "use $${{A}}" }} }}' | orthocase

Every case multiplies into one concrete case per combination of the
factors it references via $${{NAME}} placeholders."#
    );
}
