use std::env;
use std::fs;
use std::io::{self, Read};

use generalize_core::{generalize_json, GeneralizeConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_cli()
}

fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut config = GeneralizeConfig::default();
    let mut input_file = None;
    let mut compact = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--no-ignore-array" => {
                config.ignore_outer_array = false;
            }
            "--ndjson" => {
                config.delimiter = Some(b'\n');
            }
            "--compact" => {
                compact = true;
            }
            "--debug" => {
                config.debug = true;
            }
            "--max-depth" => {
                if i + 1 < args.len() {
                    config.max_depth = args[i + 1]
                        .parse::<usize>()
                        .map_err(|_| format!("Invalid value for --max-depth: {}", args[i + 1]))?;
                    i += 1;
                } else {
                    return Err("Missing value for --max-depth".into());
                }
            }
            _ => {
                if !args[i].starts_with('-') && input_file.is_none() {
                    input_file = Some(args[i].clone());
                }
            }
        }
        i += 1;
    }

    // Read input from file or stdin
    let input = if let Some(path) = input_file {
        fs::read_to_string(path)?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    // The entire input is one JSON string; NDJSON splitting and outer
    // array streaming happen inside generalize-core
    let json_strings = vec![input];

    let result = generalize_json(&json_strings, Some(config))
        .map_err(|e| format!("Schema generalization failed: {}", e))?;

    if compact {
        println!("{}", serde_json::to_string(&result.schema)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&result.schema)?);
    }

    eprintln!("Processed {} instance(s)", result.processed_count);
    Ok(())
}

fn print_help() {
    println!("generalize-cli - JSON schema generalization tool");
    println!();
    println!("USAGE:");
    println!("    generalize-cli [OPTIONS] [FILE]");
    println!();
    println!("ARGS:");
    println!("    <FILE>    Input JSON file (reads from stdin if not provided)");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help            Print this help message");
    println!("    --no-ignore-array     Don't treat top-level arrays as instance streams");
    println!("    --ndjson              Treat input as newline-delimited JSON");
    println!("    --compact             Print the schema on one line instead of pretty-printing");
    println!("    --max-depth <N>       Fail on instances nested deeper than N levels (default 64)");
    println!("    --debug               Print tag-widening decisions to stderr");
    println!();
    println!("EXAMPLES:");
    println!("    generalize-cli data.json");
    println!("    echo '{{\"name\": \"test\"}}' | generalize-cli");
    println!("    generalize-cli --ndjson multi-line.jsonl");
}
