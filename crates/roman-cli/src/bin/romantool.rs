use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use serde_json::json;

use roman_cli::commands::codec_ops::{check_cmd, decode_cmd, encode_cmd, range_cmd, table_cmd};
use roman_cli::commands::config_ops::{settings_export, settings_load, settings_validate};
use roman_cli::commands::print_outcomes;
use roman_core::settings::settings;
use roman_core::DecodeMode;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "romantool", about = "Roman numeral encoder/decoder")]
struct Cli {
    /// Path to a settings TOML file (see `settings export`)
    #[arg(long = "settings", global = true)]
    settings_file: Option<PathBuf>,
    /// Output as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Log to stderr (filter with RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode integers as Roman numerals
    Encode {
        /// Integers to encode
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },
    /// Decode Roman numerals to integers
    Decode {
        /// Numerals to decode
        #[arg(required = true)]
        numerals: Vec<String>,
        /// Reject numerals that are not in canonical form
        #[arg(long)]
        strict: bool,
    },
    /// Print the symbol table
    Table,
    /// Print the encoding of every value from 1 to MAX
    Range {
        /// Upper bound, at most 3999 (default: encode.max_value from settings)
        #[arg(long)]
        max: Option<u64>,
    },
    /// Round-trip every value from 0 to MAX
    Check {
        /// Upper bound, at most 3999 (default: encode.max_value from settings)
        #[arg(long)]
        max: Option<u64>,
    },
    /// Settings file operations
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the embedded default settings
    Export,
    /// Parse and validate a settings file
    Validate { file: PathBuf },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("roman_core=debug,roman_cli=info")
            }),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    if cli.verbose {
        init_logging();
    }
    if let Some(ref path) = cli.settings_file {
        die!(settings_load(path), "Error loading settings: {}");
    }

    let ok = match cli.command {
        Command::Encode { values } => print_outcomes(&encode_cmd(&values), cli.json),
        Command::Decode { numerals, strict } => {
            let mode = if strict {
                DecodeMode::Strict
            } else {
                settings().decode.mode
            };
            print_outcomes(&decode_cmd(&numerals, mode), cli.json)
        }
        Command::Table => {
            println!("{}", die!(table_cmd(cli.json), "Error: {}"));
            true
        }
        Command::Range { max } => {
            let max = max.unwrap_or(settings().encode.max_value);
            let outcomes = die!(range_cmd(max), "Error: {}");
            print_outcomes(&outcomes, cli.json)
        }
        Command::Check { max } => {
            let max = max.unwrap_or(settings().encode.max_value);
            let failures = die!(check_cmd(max), "Error: {}");
            if cli.json {
                println!("{}", json!({ "max": max, "failures": failures }));
            } else {
                for f in &failures {
                    eprintln!("{}: {}", f.value, f.reason);
                }
                println!("checked 0..={max}: {} failure(s)", failures.len());
            }
            failures.is_empty()
        }
        Command::Settings { action } => match action {
            SettingsAction::Export => {
                print!("{}", settings_export());
                true
            }
            SettingsAction::Validate { file } => {
                println!("{}", die!(settings_validate(&file), "Error: {}"));
                true
            }
        },
    };

    if !ok {
        process::exit(1);
    }
}
