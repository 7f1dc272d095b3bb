//! Lexitag command-line tool
//!
//! Builds search documents from JSON requests and exposes each text transform
//! for ad-hoc inspection.
//!
//! ## Usage
//!
//! ```bash
//! # Build a document from a request file and print it as JSON
//! lexitag build request.json
//!
//! # Same, reading the request from stdin
//! cat request.json | lexitag build -
//!
//! # Build and emit newline-delimited index writes
//! lexitag index request.json
//!
//! # Inspect single transforms
//! lexitag normalize "Coffee, SHOP!"
//! lexitag tokenize "The Coffee-Shop of Paris"
//! lexitag translit "سلام"
//! lexitag variants "سس"
//!
//! # Load tagging options
//! lexitag --config tagger.json build request.json
//! ```
//!
//! Logs go to stderr and are filtered with `RUST_LOG`
//! (e.g. `RUST_LOG=lexitag=debug`).

use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, Read};

use lexitag_core::analyzer::phonetic::PhoneticVariantGenerator;
use lexitag_core::{
    build_document, IndexRequest, Indexer, JsonLinesSink, TagConfig, TextAnalyzer,
};
use tracing_subscriber::EnvFilter;

const USAGE: &str =
    "Usage: lexitag [--config <path>] <build|index|normalize|tokenize|translit|variants> <input>";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let config = match args.iter().position(|a| a == "--config") {
        Some(i) => {
            if i + 1 >= args.len() {
                eprintln!("{USAGE}");
                std::process::exit(2);
            }
            let path = args.remove(i + 1);
            args.remove(i);
            TagConfig::from_path(&path)?
        }
        None => TagConfig::default(),
    };

    if args.len() < 2 {
        eprintln!("{USAGE}");
        std::process::exit(2);
    }

    let command = args[0].as_str();
    let input = args[1..].join(" ");
    let analyzer = TextAnalyzer::from_config(&config);

    match command {
        "build" => {
            let request = read_request(&input)?;
            let document = build_document(&request, &config);
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
        "index" => {
            let request = read_request(&input)?;
            let mut indexer = Indexer::new(JsonLinesSink::new(io::stdout().lock()), config);
            indexer.index(&request)?;
        }
        "normalize" => println!("{}", analyzer.normalizer.normalize(&input)),
        "tokenize" => {
            let mut tokens: Vec<String> =
                analyzer.tokenizer().tokenize(&input).into_iter().collect();
            tokens.sort_unstable();
            for token in tokens {
                println!("{token}");
            }
        }
        "translit" => {
            let [latin, normalized, persian] = analyzer.transliteration_forms(&input);
            println!("latin      : {latin}");
            println!("normalized : {normalized}");
            println!("persian    : {persian}");
        }
        "variants" => {
            println!("# {} combinations", PhoneticVariantGenerator::variant_count(&input));
            let mut variants: Vec<String> = analyzer
                .phonetic
                .generate_variants(&input)
                .into_iter()
                .collect();
            variants.sort_unstable();
            for variant in variants {
                println!("{variant}");
            }
        }
        other => {
            eprintln!("unknown command: {other}\n{USAGE}");
            std::process::exit(2);
        }
    }

    Ok(())
}

fn read_request(source: &str) -> Result<IndexRequest, Box<dyn Error>> {
    let raw = if source == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(source)?
    };
    Ok(serde_json::from_str(&raw)?)
}
