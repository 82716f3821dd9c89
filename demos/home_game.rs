//! Multi-way settlement example.
//!
//! A six-player home game with several winners and losers, showing how
//! the greedy matcher pairs the largest credit with the largest debt.

use poker_settle::core::balance::{compute_balances, total_to_settle};
use poker_settle::core::player::PlayerEntry;
use poker_settle::core::session::Session;
use poker_settle::engine::settle::SettlementEngine;
use poker_settle::engine::validate::validate;

fn main() {
    println!("╔══════════════════════════════════════════╗");
    println!("║  poker-settle: Home Game Example         ║");
    println!("╚══════════════════════════════════════════╝\n");

    let session: Session = vec![
        PlayerEntry::new("Alice", "200", "455"),
        PlayerEntry::new("Bob", "150", "30"),
        PlayerEntry::new("Carol", "100", "0"),
        PlayerEntry::new("Dana", "300", "285"),
        PlayerEntry::new("Eve", "250", "230"),
        PlayerEntry::new("Frank", "100", "100"),
    ]
    .into_iter()
    .collect();

    let validated = validate(&session).expect("session balances");
    println!(
        "Pot: {} bought in, {} cashed out\n",
        validated.total_buy_in(),
        validated.total_cash_out()
    );

    let balances = compute_balances(&validated);
    println!("Money that has to change hands: {}\n", total_to_settle(&balances));

    for balance in &balances {
        let status = if balance.is_winner() {
            "WINNER"
        } else if balance.is_loser() {
            "LOSER"
        } else {
            "FLAT"
        };
        println!("  {:<8} {:>10}  [{}]", balance.name.as_str(), balance.net.to_string(), status);
    }

    let result = SettlementEngine::settle(balances);
    println!("\n{}", result);
}
