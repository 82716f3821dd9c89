use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::balance::{compute_balances, Balance};
use crate::core::money;
use crate::core::player::PlayerName;
use crate::core::session::Session;
use crate::engine::validate::{validate, SettlementError};

/// Amount still owed *to* a net winner while matching runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Credit {
    pub name: PlayerName,
    pub amount: Decimal,
}

/// Amount still owed *by* a net loser, stored as a positive magnitude.
#[derive(Debug, Clone, PartialEq)]
pub struct Debit {
    pub name: PlayerName,
    pub amount: Decimal,
}

/// One proposed payment from a net loser to a net winner.
///
/// The amount is kept at full precision; rounding to 2 decimals happens
/// only when the transfer is displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: PlayerName,
    pub to: PlayerName,
    pub amount: Decimal,
}

/// Outcome of settling a session: the ordered transfer list plus the
/// per-player balances (rounded for reporting).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementResult {
    transfers: Vec<Transfer>,
    balances: Vec<Balance>,
}

impl SettlementResult {
    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    pub fn balances(&self) -> &[Balance] {
        &self.balances
    }

    pub fn transfer_count(&self) -> usize {
        self.transfers.len()
    }

    /// Total amount changing hands.
    pub fn total_transferred(&self) -> Decimal {
        self.transfers.iter().map(|t| t.amount).sum()
    }

    /// Sum of payments this player makes.
    pub fn paid_by(&self, name: &PlayerName) -> Decimal {
        self.transfers
            .iter()
            .filter(|t| &t.from == name)
            .map(|t| t.amount)
            .sum()
    }

    /// Sum of payments this player receives.
    pub fn received_by(&self, name: &PlayerName) -> Decimal {
        self.transfers
            .iter()
            .filter(|t| &t.to == name)
            .map(|t| t.amount)
            .sum()
    }

    /// Winners by net descending, for display.
    pub fn winners(&self) -> Vec<&Balance> {
        let mut winners: Vec<&Balance> = self.balances.iter().filter(|b| b.net > Decimal::ZERO).collect();
        winners.sort_by(|a, b| b.net.cmp(&a.net));
        winners
    }

    /// Losers by most negative first, for display.
    pub fn losers(&self) -> Vec<&Balance> {
        let mut losers: Vec<&Balance> = self.balances.iter().filter(|b| b.net < Decimal::ZERO).collect();
        losers.sort_by(|a, b| a.net.cmp(&b.net));
        losers
    }

    /// Verify the transfers discharge every balance within tolerance:
    /// after applying them, no player is still owed or owing.
    pub fn fully_discharges(&self) -> bool {
        self.balances.iter().all(|balance| {
            let moved = self.received_by(&balance.name) - self.paid_by(&balance.name);
            money::is_settled(balance.net - moved)
        })
    }
}

impl fmt::Display for SettlementResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Settlement ===")?;
        writeln!(f, "Transfers: {}", self.transfer_count())?;
        for transfer in &self.transfers {
            writeln!(
                f,
                "  {} -> {}  {:.2}",
                transfer.from, transfer.to, transfer.amount
            )?;
        }
        writeln!(f, "--- Balances ---")?;
        for balance in &self.balances {
            writeln!(f, "  {:<12} {:>10.2}", balance.name, balance.net)?;
        }
        Ok(())
    }
}

/// The settlement engine.
///
/// Matches the largest outstanding credit against the largest outstanding
/// debt until everything is discharged. The greedy pairing does not
/// guarantee the theoretical minimum number of transfers (that is a hard
/// combinatorial problem) but it always settles fully and yields a small,
/// intuitive transfer list.
pub struct SettlementEngine;

impl SettlementEngine {
    /// Run the full pipeline: validate, derive balances, settle.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_settle::core::player::PlayerEntry;
    /// use poker_settle::core::session::Session;
    /// use poker_settle::engine::settle::SettlementEngine;
    ///
    /// let session: Session = vec![
    ///     PlayerEntry::new("Alice", "100", "150"),
    ///     PlayerEntry::new("Bob", "100", "50"),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let result = SettlementEngine::run(&session).unwrap();
    /// assert_eq!(result.transfer_count(), 1);
    /// assert_eq!(result.transfers()[0].from.as_str(), "Bob");
    /// assert_eq!(result.transfers()[0].to.as_str(), "Alice");
    /// ```
    pub fn run(session: &Session) -> Result<SettlementResult, SettlementError> {
        let validated = validate(session)?;
        let balances = compute_balances(&validated);
        Ok(Self::settle(balances))
    }

    /// Settle a list of net balances.
    ///
    /// # Algorithm
    ///
    /// 1. Partition into creditors (net > ε) and debtors (net < -ε);
    ///    flat balances are already settled and drop out.
    /// 2. Sort both lists by amount descending. The sort is stable, so
    ///    equal amounts keep their input order and the output is
    ///    deterministic.
    /// 3. Walk both lists with independent cursors, each step emitting
    ///    `min(credit remaining, debit remaining)` from the current
    ///    debtor to the current creditor.
    /// 4. A cursor advances once its remainder falls below ε; both may
    ///    advance in the same step.
    ///
    /// With balances that sum to zero the two cursors exhaust together
    /// and every balance is discharged.
    pub fn settle(balances: Vec<Balance>) -> SettlementResult {
        let (creditors, debtors) = partition(&balances);
        let transfers = match_transfers(&creditors, &debtors);
        let balances = balances.iter().map(Balance::rounded).collect();
        SettlementResult {
            transfers,
            balances,
        }
    }
}

/// Split balances into creditors and debtors, both sorted by amount
/// descending, dropping balances that are flat at tolerance.
pub fn partition(balances: &[Balance]) -> (Vec<Credit>, Vec<Debit>) {
    let mut creditors: Vec<Credit> = balances
        .iter()
        .filter(|b| b.is_winner())
        .map(|b| Credit {
            name: b.name.clone(),
            amount: b.net,
        })
        .collect();
    let mut debtors: Vec<Debit> = balances
        .iter()
        .filter(|b| b.is_loser())
        .map(|b| Debit {
            name: b.name.clone(),
            amount: -b.net,
        })
        .collect();

    creditors.sort_by(|a, b| b.amount.cmp(&a.amount));
    debtors.sort_by(|a, b| b.amount.cmp(&a.amount));
    (creditors, debtors)
}

/// Greedy two-cursor matching loop.
///
/// Remaining amounts are carried as explicit accumulators rather than
/// written back into the sorted lists, so the inputs stay untouched.
fn match_transfers(creditors: &[Credit], debtors: &[Debit]) -> Vec<Transfer> {
    let mut transfers = Vec::new();
    let mut i = 0;
    let mut j = 0;
    let mut credit_left = creditors.first().map_or(Decimal::ZERO, |c| c.amount);
    let mut debit_left = debtors.first().map_or(Decimal::ZERO, |d| d.amount);

    while i < creditors.len() && j < debtors.len() {
        let amount = credit_left.min(debit_left);
        transfers.push(Transfer {
            from: debtors[j].name.clone(),
            to: creditors[i].name.clone(),
            amount,
        });
        credit_left -= amount;
        debit_left -= amount;

        if credit_left < money::TOLERANCE {
            i += 1;
            if let Some(next) = creditors.get(i) {
                credit_left = next.amount;
            }
        }
        if debit_left < money::TOLERANCE {
            j += 1;
            if let Some(next) = debtors.get(j) {
                debit_left = next.amount;
            }
        }
    }

    transfers
}
