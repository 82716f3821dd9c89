use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money;
use crate::core::player::PlayerName;
use crate::core::session::{ValidPlayer, ValidatedSession};

/// Signed net outcome for one player.
///
/// A positive net means the player leaves the table a winner and is owed
/// money; a negative net means they owe. Nets within [`money::TOLERANCE`]
/// of zero are considered flat and take no part in settlement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub name: PlayerName,
    pub net: Decimal,
}

impl Balance {
    pub fn new(name: impl Into<PlayerName>, net: Decimal) -> Self {
        Self {
            name: name.into(),
            net,
        }
    }

    /// Neither owed nor owing at tolerance.
    pub fn is_flat(&self) -> bool {
        money::is_settled(self.net)
    }

    pub fn is_winner(&self) -> bool {
        self.net > money::TOLERANCE
    }

    pub fn is_loser(&self) -> bool {
        self.net < -money::TOLERANCE
    }

    /// Copy with the net rounded for reporting.
    pub fn rounded(&self) -> Balance {
        Balance {
            name: self.name.clone(),
            net: money::display_round(self.net),
        }
    }
}

/// Derive per-player net balances from a validated session.
///
/// Total and order-preserving: one balance per player, same order as the
/// input, `net = cash_out - buy_in`. There is no error path — the session
/// has already been validated.
pub fn compute_balances(session: &ValidatedSession) -> Vec<Balance> {
    session
        .players()
        .iter()
        .map(|player: &ValidPlayer| Balance {
            name: player.name().clone(),
            net: player.net(),
        })
        .collect()
}

/// Sum of positive nets: the total amount that has to change hands.
pub fn total_to_settle(balances: &[Balance]) -> Decimal {
    balances
        .iter()
        .map(|b| b.net)
        .filter(|net| *net > Decimal::ZERO)
        .sum()
}

/// Conservation check: nets sum to zero within tolerance.
pub fn is_conserved(balances: &[Balance]) -> bool {
    money::is_settled(money::total(balances.iter().map(|b| b.net)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn session() -> ValidatedSession {
        ValidatedSession::new(vec![
            ValidPlayer::new(PlayerName::new("Alice"), dec!(100), dec!(150)),
            ValidPlayer::new(PlayerName::new("Bob"), dec!(100), dec!(50)),
            ValidPlayer::new(PlayerName::new("Carol"), dec!(100), dec!(100)),
        ])
    }

    #[test]
    fn test_balances_preserve_order() {
        let balances = compute_balances(&session());
        let names: Vec<&str> = balances.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob", "Carol"]);
        assert_eq!(balances[0].net, dec!(50));
        assert_eq!(balances[1].net, dec!(-50));
        assert_eq!(balances[2].net, Decimal::ZERO);
    }

    #[test]
    fn test_classification_at_tolerance() {
        let flat = Balance::new("Dana", dec!(0.01));
        assert!(flat.is_flat());
        assert!(!flat.is_winner());

        let winner = Balance::new("Eve", dec!(0.02));
        assert!(winner.is_winner());

        let loser = Balance::new("Frank", dec!(-0.02));
        assert!(loser.is_loser());
    }

    #[test]
    fn test_conservation() {
        let balances = compute_balances(&session());
        assert!(is_conserved(&balances));
        assert_eq!(total_to_settle(&balances), dec!(50));
    }

    #[test]
    fn test_rounded_for_reporting() {
        let b = Balance::new("Alice", dec!(33.3333));
        assert_eq!(b.rounded().net, dec!(33.33));
    }
}
