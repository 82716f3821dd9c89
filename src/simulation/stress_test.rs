//! Stress testing utilities for the settlement engine.
//!
//! Generates random balanced sessions to exercise the pipeline at sizes
//! far beyond a real table.

use rand::Rng;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::core::player::PlayerEntry;
use crate::core::session::Session;

/// Configuration for generating a random session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Number of players at the table.
    pub player_count: usize,
    /// Minimum buy-in per player.
    pub min_buy_in: Decimal,
    /// Maximum buy-in per player.
    pub max_buy_in: Decimal,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_count: 8,
            min_buy_in: Decimal::from(50),
            max_buy_in: Decimal::from(500),
        }
    }
}

/// Generate a random session that conserves money exactly.
///
/// Buy-ins are drawn uniformly at cent precision; the resulting pot is
/// then redistributed as cash-outs by random splits in integer cents, so
/// the totals always match and the session always validates.
pub fn generate_random_session(config: &SessionConfig) -> Session {
    let mut rng = rand::thread_rng();
    let count = config.player_count;
    if count == 0 {
        return Session::new();
    }

    let min_cents = to_cents(config.min_buy_in);
    let max_cents = to_cents(config.max_buy_in).max(min_cents);

    let buy_ins: Vec<i64> = (0..count)
        .map(|_| rng.gen_range(min_cents..=max_cents))
        .collect();
    let pot: i64 = buy_ins.iter().sum();

    let mut cash_outs = vec![0i64; count];
    let mut remaining = pot;
    for slot in cash_outs.iter_mut().take(count - 1) {
        let share = rng.gen_range(0..=remaining);
        *slot = share;
        remaining -= share;
    }
    cash_outs[count - 1] = remaining;

    buy_ins
        .into_iter()
        .zip(cash_outs)
        .enumerate()
        .map(|(index, (buy_in, cash_out))| {
            PlayerEntry::new(
                format!("PLAYER-{:02}", index),
                Decimal::new(buy_in, 2),
                Decimal::new(cash_out, 2),
            )
        })
        .collect()
}

fn to_cents(amount: Decimal) -> i64 {
    (amount * Decimal::from(100)).trunc().to_i64().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::settle::SettlementEngine;
    use crate::engine::validate::validate;

    #[test]
    fn test_generated_session_has_requested_size() {
        let config = SessionConfig {
            player_count: 5,
            ..Default::default()
        };
        let session = generate_random_session(&config);
        assert_eq!(session.len(), 5);
    }

    #[test]
    fn test_generated_session_validates() {
        let session = generate_random_session(&SessionConfig::default());
        let validated = validate(&session).expect("generated session must conserve money");
        assert_eq!(validated.total_buy_in(), validated.total_cash_out());
    }

    #[test]
    fn test_generated_session_settles_fully() {
        for _ in 0..10 {
            let session = generate_random_session(&SessionConfig {
                player_count: 12,
                ..Default::default()
            });
            let result = SettlementEngine::run(&session).unwrap();
            assert!(result.fully_discharges());
        }
    }

    #[test]
    fn test_zero_players_yields_empty_session() {
        let config = SessionConfig {
            player_count: 0,
            ..Default::default()
        };
        assert!(generate_random_session(&config).is_empty());
    }
}
