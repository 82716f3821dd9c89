use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money;
use crate::core::player::{PlayerEntry, PlayerName};

/// An ordered collection of raw player entries for one poker session.
///
/// This is the input to the settlement pipeline. Order matters: it is
/// preserved through balance computation and used as the deterministic
/// tie-break when sorting winners and losers.
///
/// # Examples
///
/// ```
/// use poker_settle::core::player::PlayerEntry;
/// use poker_settle::core::session::Session;
///
/// let mut session = Session::new();
/// session.add(PlayerEntry::new("Alice", "100", "150"));
/// session.add(PlayerEntry::new("Bob", "100", "50"));
/// assert_eq!(session.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    players: Vec<PlayerEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
        }
    }

    pub fn add(&mut self, entry: PlayerEntry) {
        self.players.push(entry);
    }

    pub fn players(&self) -> &[PlayerEntry] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl FromIterator<PlayerEntry> for Session {
    fn from_iter<T: IntoIterator<Item = PlayerEntry>>(iter: T) -> Self {
        Self {
            players: iter.into_iter().collect(),
        }
    }
}

/// A player record whose fields have been checked and parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidPlayer {
    name: PlayerName,
    buy_in: Decimal,
    cash_out: Decimal,
}

impl ValidPlayer {
    pub fn new(name: PlayerName, buy_in: Decimal, cash_out: Decimal) -> Self {
        Self {
            name,
            buy_in,
            cash_out,
        }
    }

    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    pub fn buy_in(&self) -> Decimal {
        self.buy_in
    }

    pub fn cash_out(&self) -> Decimal {
        self.cash_out
    }

    /// Signed session outcome: cash-out minus buy-in.
    pub fn net(&self) -> Decimal {
        self.cash_out - self.buy_in
    }
}

/// A session that passed validation: every name is non-empty, every
/// amount parsed, and recorded money is conserved within tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedSession {
    players: Vec<ValidPlayer>,
}

impl ValidatedSession {
    pub fn new(players: Vec<ValidPlayer>) -> Self {
        Self { players }
    }

    pub fn players(&self) -> &[ValidPlayer] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Total money put on the table.
    pub fn total_buy_in(&self) -> Decimal {
        money::total(self.players.iter().map(ValidPlayer::buy_in))
    }

    /// Total money taken off the table.
    pub fn total_cash_out(&self) -> Decimal {
        money::total(self.players.iter().map(ValidPlayer::cash_out))
    }
}
