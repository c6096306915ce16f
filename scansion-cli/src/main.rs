//! Command-line interface for scansion
//! This binary derives the optimal metrical parse of an annotated word by
//! serial Optimality Theory and prints each step's candidate tableau.
//!
//! Usage:
//!   scansion `<word>` [--ranking `<list>`] [--max-steps `<n>`] [--format `<format>`]
//!   scansion --config `<path>`                - Layer a TOML file over the built-in defaults
//!   echo HL | scansion                        - Read the word from stdin

use clap::{Arg, Command};
use scansion_config::{Loader, ScansionConfig};
use scansion_parser::derivation::{Derivation, DerivationOutcome};
use scansion_parser::lexing::parse_word;
use std::io::BufRead;

fn main() {
    let matches = Command::new("scansion")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Serial Optimality Theory derivation of metrical stress")
        .arg(
            Arg::new("word")
                .help("Stress/weight annotated word (e.g. 'HLL); read from stdin when omitted")
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a TOML configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("ranking")
                .long("ranking")
                .short('r')
                .help("Comma-separated constraint ranking (default: trochee,parse-left,iamb,parse-right)"),
        )
        .arg(
            Arg::new("max-steps")
                .long("max-steps")
                .value_parser(clap::value_parser!(usize))
                .help("Abort if the derivation has not converged after this many steps"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .default_value("text")
                .value_parser(["text", "json", "final"])
                .help("Output format: per-step tableaus, a JSON report, or only the final parse"),
        )
        .get_matches();

    let mut config = load_config(matches.get_one::<String>("config"));

    // Command-line settings override the layered configuration.
    if let Some(&max_steps) = matches.get_one::<usize>("max-steps") {
        config.derivation.max_steps = max_steps;
    }
    if let Some(ranking) = matches.get_one::<String>("ranking") {
        config.derivation.ranking = ranking.split(',').map(str::to_string).collect();
    }

    let ranking = config.derivation.ranking_kinds().unwrap_or_else(|error| {
        eprintln!("Configuration error: {}", error);
        std::process::exit(1);
    });

    let source = match matches.get_one::<String>("word") {
        Some(word) => word.clone(),
        None => read_word_from_stdin(),
    };

    let word = parse_word(source.trim()).unwrap_or_else(|error| {
        eprintln!("Input error: {}", error);
        std::process::exit(1);
    });

    let derivation = Derivation::new(ranking, config.derivation.max_steps);
    let outcome = derivation.run(word).unwrap_or_else(|error| {
        eprintln!("Derivation error: {}", error);
        std::process::exit(1);
    });

    let format = matches
        .get_one::<String>("format")
        .expect("format has a default value");
    print_outcome(&outcome, format);
}

/// Load the layered configuration, treating an explicit file as required.
fn load_config(path: Option<&String>) -> ScansionConfig {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    loader.build().unwrap_or_else(|error| {
        eprintln!("Configuration error: {}", error);
        std::process::exit(1);
    })
}

/// Read one line from stdin; an empty stream is an empty word.
fn read_word_from_stdin() -> String {
    let mut line = String::new();
    if let Err(error) = std::io::stdin().lock().read_line(&mut line) {
        eprintln!("Failed to read from stdin: {}", error);
        std::process::exit(1);
    }
    line
}

/// Format and print a converged derivation.
fn print_outcome(outcome: &DerivationOutcome, format: &str) {
    match format {
        "text" => {
            for tableau in outcome.steps() {
                print!("{}", tableau);
            }
        }
        "json" => {
            let report = serde_json::to_string_pretty(outcome).unwrap_or_else(|error| {
                eprintln!("Error formatting report: {}", error);
                std::process::exit(1);
            });
            println!("{}", report);
        }
        "final" => println!("{}", outcome.final_word()),
        // clap's value parser only admits the three formats above.
        other => unreachable!("unhandled format '{}'", other),
    }
}
