//! poker-settle CLI
//!
//! Settle a recorded poker session from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Settle a session from a JSON file
//! poker-settle settle --input session.json
//!
//! # Output as JSON, or render the report in Hebrew
//! poker-settle settle --input session.json --format json
//! poker-settle settle --input session.json --lang he
//!
//! # Show per-player net balances without transfers
//! poker-settle balances --input session.json
//!
//! # Generate a random balanced session for testing
//! poker-settle generate --players 8 --output session.json
//! ```

use chrono::{DateTime, Utc};
use log::debug;
use poker_settle::core::balance::compute_balances;
use poker_settle::core::session::Session;
use poker_settle::engine::settle::{SettlementEngine, SettlementResult};
use poker_settle::engine::validate::validate;
use poker_settle::report::{self, Locale, ReportOptions};
use poker_settle::simulation::stress_test::{generate_random_session, SessionConfig};
use rust_decimal::Decimal;
use std::fs;
use std::process;
use uuid::Uuid;

fn print_usage() {
    eprintln!(
        r#"poker-settle — settle a home poker session with minimal transfers

USAGE:
    poker-settle <COMMAND> [OPTIONS]

COMMANDS:
    settle      Compute the transfers that square the session up
    balances    Show per-player net balances only
    generate    Generate a random balanced session (for testing)
    help        Show this message

OPTIONS (settle, balances):
    --input <FILE>       Path to JSON session file
    --format <FORMAT>    Output format: text (default) or json
    --lang <LANG>        Report language: en (default) or he
    --currency <SYMBOL>  Currency symbol for the report (default per language)

OPTIONS (generate):
    --players <N>        Number of players (default: 8)
    --min-buy-in <N>     Minimum buy-in (default: 50)
    --max-buy-in <N>     Maximum buy-in (default: 500)
    --output <FILE>      Write to file instead of stdout

EXAMPLES:
    poker-settle settle --input session.json
    poker-settle settle --input session.json --format json
    poker-settle settle --input session.json --lang he
    poker-settle balances --input session.json
    poker-settle generate --players 6 --output friday.json"#
    );
}

/// JSON output schema for settlement results.
#[derive(serde::Serialize)]
struct SettlementOutput {
    transfer_count: usize,
    total_transferred: String,
    transfers: Vec<TransferOutput>,
    balances: Vec<BalanceOutput>,
}

#[derive(serde::Serialize)]
struct TransferOutput {
    from: String,
    to: String,
    amount: String,
}

#[derive(serde::Serialize)]
struct BalanceOutput {
    name: String,
    net: String,
    status: String,
}

/// JSON schema written by `generate`. The settlement commands ignore the
/// extra metadata fields when reading such a file back.
#[derive(serde::Serialize)]
struct GeneratedSession {
    session_id: Uuid,
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    session: Session,
}

fn load_session(path: &str) -> Session {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });

    let session: Session = serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "players": [
    {{ "name": "Alice", "buy_in": "100", "cash_out": "150" }}
  ]
}}"#
        );
        process::exit(1);
    });

    debug!("loaded {} players from '{}'", session.len(), path);
    session
}

struct DisplayArgs {
    input: Option<String>,
    format: String,
    options: ReportOptions,
}

fn parse_display_args(args: &[String]) -> DisplayArgs {
    let mut input = None;
    let mut format = "text".to_string();
    let mut locale = Locale::En;
    let mut currency: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            "--lang" => {
                i += 1;
                let tag = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--lang requires 'en' or 'he'");
                    process::exit(1);
                });
                locale = Locale::parse(&tag).unwrap_or_else(|| {
                    eprintln!("Unknown language: {}", tag);
                    process::exit(1);
                });
            }
            "--currency" => {
                i += 1;
                currency = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--currency requires a symbol");
                    process::exit(1);
                }));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let mut options = ReportOptions::for_locale(locale);
    if let Some(symbol) = currency {
        options = options.with_currency(symbol);
    }

    DisplayArgs {
        input,
        format,
        options,
    }
}

fn required_input(input: Option<String>) -> String {
    input.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    })
}

fn display_amount(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

fn settlement_to_json(result: &SettlementResult) -> SettlementOutput {
    SettlementOutput {
        transfer_count: result.transfer_count(),
        total_transferred: display_amount(result.total_transferred()),
        transfers: result
            .transfers()
            .iter()
            .map(|t| TransferOutput {
                from: t.from.to_string(),
                to: t.to.to_string(),
                amount: display_amount(t.amount),
            })
            .collect(),
        balances: result
            .balances()
            .iter()
            .map(|b| BalanceOutput {
                name: b.name.to_string(),
                net: display_amount(b.net),
                status: balance_status(b.net).to_string(),
            })
            .collect(),
    }
}

fn balance_status(net: Decimal) -> &'static str {
    if net > Decimal::ZERO {
        "WINNER"
    } else if net < Decimal::ZERO {
        "LOSER"
    } else {
        "FLAT"
    }
}

fn cmd_settle(args: &[String]) {
    let parsed = parse_display_args(args);
    let path = required_input(parsed.input);
    let session = load_session(&path);

    let result = SettlementEngine::run(&session).unwrap_or_else(|e| {
        debug!("validation failed: {}", e);
        eprintln!("{}", report::error_message(&e, &parsed.options));
        process::exit(1);
    });

    debug!(
        "settled {} players with {} transfers",
        session.len(),
        result.transfer_count()
    );

    if parsed.format == "json" {
        let output = settlement_to_json(&result);
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        println!("{}", report::render(&result, &parsed.options));
    }
}

fn cmd_balances(args: &[String]) {
    let parsed = parse_display_args(args);
    let path = required_input(parsed.input);
    let session = load_session(&path);

    let validated = validate(&session).unwrap_or_else(|e| {
        debug!("validation failed: {}", e);
        eprintln!("{}", report::error_message(&e, &parsed.options));
        process::exit(1);
    });
    let balances = compute_balances(&validated);

    if parsed.format == "json" {
        let output: Vec<BalanceOutput> = balances
            .iter()
            .map(|b| BalanceOutput {
                name: b.name.to_string(),
                net: display_amount(b.net),
                status: balance_status(b.net).to_string(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        for balance in &balances {
            println!(
                "  {:<16} {:>12}  [{}]",
                balance.name.to_string(),
                display_amount(balance.net),
                balance_status(balance.net)
            );
        }
    }
}

fn cmd_generate(args: &[String]) {
    let mut config = SessionConfig::default();
    let mut output_path: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--players" => {
                i += 1;
                config.player_count = args
                    .get(i)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| {
                        eprintln!("--players requires a number");
                        process::exit(1);
                    });
            }
            "--min-buy-in" => {
                i += 1;
                config.min_buy_in = args
                    .get(i)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| {
                        eprintln!("--min-buy-in requires an amount");
                        process::exit(1);
                    });
            }
            "--max-buy-in" => {
                i += 1;
                config.max_buy_in = args
                    .get(i)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| {
                        eprintln!("--max-buy-in requires an amount");
                        process::exit(1);
                    });
            }
            "--output" => {
                i += 1;
                output_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--output requires a file path");
                    process::exit(1);
                }));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let session = generate_random_session(&config);
    let output = GeneratedSession {
        session_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        session,
    };

    let json = serde_json::to_string_pretty(&output).unwrap();

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!(
            "Generated a balanced session of {} players -> {}",
            config.player_count, path
        );
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "settle" => cmd_settle(rest),
        "balances" => cmd_balances(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
