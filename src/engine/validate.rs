use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

use crate::core::money;
use crate::core::player::{AmountInput, PlayerName};
use crate::core::session::{Session, ValidPlayer, ValidatedSession};

/// Which input field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    BuyIn,
    CashOut,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Name => "name",
            Field::BuyIn => "buy-in",
            Field::CashOut => "cash-out",
        };
        write!(f, "{}", label)
    }
}

/// Errors a session can be rejected with.
///
/// Both are recoverable: the caller surfaces a message, the user corrects
/// the input and retries. Once validation passes, the rest of the
/// pipeline cannot fail.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SettlementError {
    #[error("no players in session")]
    EmptySession,
    #[error("player {index}: missing or invalid {field}")]
    MissingField { index: usize, field: Field },
    #[error("session does not balance: buy-in total {total_buy_in}, cash-out total {total_cash_out}")]
    Imbalance {
        total_buy_in: Decimal,
        total_cash_out: Decimal,
    },
}

/// Check a raw session and parse its amounts.
///
/// Field checks run first, in input order, so the reported entry is
/// deterministic. Buy-in and cash-out totals are then summed in two
/// independent passes and compared; a discrepancy beyond
/// [`money::TOLERANCE`] means the recorded money is not conserved and the
/// whole session is rejected with both totals attached.
///
/// # Examples
///
/// ```
/// use poker_settle::core::player::PlayerEntry;
/// use poker_settle::core::session::Session;
/// use poker_settle::engine::validate::validate;
///
/// let session: Session = vec![
///     PlayerEntry::new("Alice", "100", "150"),
///     PlayerEntry::new("Bob", "100", "50"),
/// ]
/// .into_iter()
/// .collect();
///
/// let validated = validate(&session).unwrap();
/// assert_eq!(validated.len(), 2);
/// ```
pub fn validate(session: &Session) -> Result<ValidatedSession, SettlementError> {
    if session.is_empty() {
        return Err(SettlementError::EmptySession);
    }

    let mut players = Vec::with_capacity(session.len());
    for (index, entry) in session.players().iter().enumerate() {
        let name = entry.name.trim();
        if name.is_empty() {
            return Err(SettlementError::MissingField {
                index,
                field: Field::Name,
            });
        }
        let buy_in = parse_field(entry.buy_in.as_ref(), index, Field::BuyIn)?;
        let cash_out = parse_field(entry.cash_out.as_ref(), index, Field::CashOut)?;
        players.push(ValidPlayer::new(PlayerName::new(name), buy_in, cash_out));
    }

    let total_buy_in = money::total(players.iter().map(ValidPlayer::buy_in));
    let total_cash_out = money::total(players.iter().map(ValidPlayer::cash_out));
    if !money::totals_match(total_buy_in, total_cash_out) {
        return Err(SettlementError::Imbalance {
            total_buy_in,
            total_cash_out,
        });
    }

    Ok(ValidatedSession::new(players))
}

/// Missing, empty, unparseable, non-finite and negative amounts all
/// collapse into the same missing-field rejection.
fn parse_field(
    input: Option<&AmountInput>,
    index: usize,
    field: Field,
) -> Result<Decimal, SettlementError> {
    input
        .and_then(AmountInput::parse)
        .filter(|amount| *amount >= Decimal::ZERO)
        .ok_or(SettlementError::MissingField { index, field })
}
