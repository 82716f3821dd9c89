//! Basic settlement example.
//!
//! Demonstrates the full pipeline on a three-player session: validation,
//! balance derivation, and the greedy transfer matching.

use poker_settle::core::player::PlayerEntry;
use poker_settle::core::session::Session;
use poker_settle::engine::settle::SettlementEngine;
use poker_settle::report::{self, Locale, ReportOptions};

fn main() {
    println!("╔══════════════════════════════════════════╗");
    println!("║  poker-settle: Basic Settlement Example  ║");
    println!("╚══════════════════════════════════════════╝\n");

    let session: Session = vec![
        PlayerEntry::new("Alice", "100", "150"),
        PlayerEntry::new("Bob", "100", "50"),
        PlayerEntry::new("Carol", "100", "100"),
    ]
    .into_iter()
    .collect();

    let result = SettlementEngine::run(&session).expect("session balances");

    println!("{}", result);

    println!("━━━ English report ━━━\n");
    println!("{}", report::render(&result, &ReportOptions::default()));

    println!("━━━ Hebrew report ━━━\n");
    println!(
        "{}",
        report::render(&result, &ReportOptions::for_locale(Locale::He))
    );
}
