//! CLI tool for credit card field validation.
//!
//! # Usage
//!
//! ```bash
//! # Validate records from a JSON file with the default field names
//! ccfields check records.json
//!
//! # With a JSON options file and a pinned date
//! ccfields check --config options.json --today 2026-10-16 records.json
//!
//! # Detect the provider of a card number
//! ccfields detect "4111 1111 1111 1111"
//!
//! # Check if a card passes the Luhn algorithm
//! ccfields luhn 4111111111111111
//! ```
//!
//! Records are a JSON object or an array of objects. String values are
//! validated, `null` counts as blank, and any other JSON type is a usage
//! error. Set `RUST_LOG=debug` to see which rule rejected each field.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use cc_fields::{detect, luhn, CreditCardFieldsValidator, FieldMap, FieldTypeError, Options};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{json, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ccfields")]
#[command(author, version, about = "Credit card form field validation tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the card fields of JSON records
    Check {
        /// JSON file holding one record object or an array of them
        records: PathBuf,

        /// JSON options file (field names, providers, messages)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Date to validate expiry against (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        today: Option<NaiveDate>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Detect the card provider from a number
    Detect {
        /// Card number (spaces allowed)
        card_number: String,
    },

    /// Check if a card passes the Luhn algorithm
    Luhn {
        /// Card number to check (spaces allowed)
        card_number: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Exit code for records with validation errors.
const EXIT_INVALID: u8 = 1;
/// Exit code for unreadable input or non-text field values.
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            records,
            config,
            today,
            output,
        } => {
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            cmd_check(&records, config.as_deref(), today, output)
        }
        Commands::Detect { card_number } => cmd_detect(&card_number),
        Commands::Luhn { card_number } => cmd_luhn(&card_number),
    }
}

fn cmd_check(
    records_path: &Path,
    config_path: Option<&Path>,
    today: NaiveDate,
    output: OutputFormat,
) -> ExitCode {
    let validator = match load_validator(config_path) {
        Ok(validator) => validator,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let objects = match load_records(records_path) {
        Ok(objects) => objects,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let mut any_invalid = false;
    let mut reports = Vec::with_capacity(objects.len());

    for (index, object) in objects.iter().enumerate() {
        let mut record = FieldMap::from_json(object);
        if let Err(e) = validator.validate_at(&mut record, today) {
            report_type_error(index, &e, output);
            return ExitCode::from(EXIT_USAGE);
        }

        any_invalid |= !record.errors().is_empty();
        match output {
            OutputFormat::Text => print_text(index, &record),
            OutputFormat::Json => reports.push(json_report(index, &record)),
        }
    }

    if let OutputFormat::Json = output {
        println!("{}", Value::Array(reports));
    }

    if any_invalid {
        ExitCode::from(EXIT_INVALID)
    } else {
        ExitCode::SUCCESS
    }
}

fn load_validator(path: Option<&Path>) -> Result<CreditCardFieldsValidator, String> {
    let options = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
            Options::from_json(&text)
                .map_err(|e| format!("invalid options in {}: {}", path.display(), e))?
        }
        None => Options::new(),
    };
    CreditCardFieldsValidator::from_options(options).map_err(|e| e.to_string())
}

fn load_records(path: &Path) -> Result<Vec<serde_json::Map<String, Value>>, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    let value: Value = serde_json::from_str(&text)
        .map_err(|e| format!("invalid JSON in {}: {}", path.display(), e))?;

    let items = match value {
        Value::Array(items) => items,
        object @ Value::Object(_) => vec![object],
        _ => return Err("records must be a JSON object or an array of objects".into()),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(object) => Ok(object),
            _ => Err(format!("record {} is not a JSON object", index)),
        })
        .collect()
}

fn print_text(index: usize, record: &FieldMap) {
    if record.errors().is_empty() {
        println!("Record {}: valid", index);
        return;
    }
    println!("Record {}: invalid", index);
    for (field, error) in record.errors().iter() {
        println!("  {}: {} ({})", field, error.message, error.kind);
    }
}

fn json_report(index: usize, record: &FieldMap) -> Value {
    let errors: serde_json::Map<String, Value> = record
        .errors()
        .iter()
        .map(|(field, error)| (field.to_string(), json!(error)))
        .collect();
    json!({
        "record": index,
        "valid": errors.is_empty(),
        "errors": errors,
    })
}

fn report_type_error(index: usize, error: &FieldTypeError, output: OutputFormat) {
    match output {
        OutputFormat::Text => eprintln!("Record {}: {}", index, error),
        OutputFormat::Json => println!(
            "{}",
            json!({ "record": index, "type_error": error.to_string() })
        ),
    }
}

fn cmd_detect(card_number: &str) -> ExitCode {
    match detect::detect_provider(card_number) {
        Some(provider) => {
            println!("Detected Provider: {} ({})", provider.name(), provider.id());
            ExitCode::SUCCESS
        }
        None => {
            println!("Detected Provider: Unknown");
            ExitCode::from(EXIT_INVALID)
        }
    }
}

fn cmd_luhn(card_number: &str) -> ExitCode {
    let digits: String = card_number.chars().filter(|c| *c != ' ').collect();
    if luhn::is_valid(&digits) {
        println!("Luhn check: PASS");
        ExitCode::SUCCESS
    } else {
        println!("Luhn check: FAIL");
        ExitCode::from(EXIT_INVALID)
    }
}
