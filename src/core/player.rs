use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::money;

/// Display name identifying a player at the table.
///
/// Names are the only identity the engine needs; the host UI may track
/// rows with its own ids, but those never reach the settlement logic.
///
/// # Examples
///
/// ```
/// use poker_settle::core::player::PlayerName;
///
/// let alice = PlayerName::new("Alice");
/// let bob = PlayerName::new("Bob");
/// assert_ne!(alice, bob);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A monetary field as it arrives from the caller.
///
/// Form inputs deliver amounts as formatted strings; programmatic callers
/// pass numbers. Both shapes deserialize transparently from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    /// Parse into a decimal amount.
    ///
    /// Empty or whitespace-only text counts as missing, not zero.
    /// Unparseable text and non-finite numbers yield `None` as well;
    /// the validator reports all of these as a missing/invalid field.
    pub fn parse(&self) -> Option<Decimal> {
        match self {
            AmountInput::Number(value) => money::amount_from_f64(*value),
            AmountInput::Text(text) => money::parse_amount(text),
        }
    }
}

impl From<Decimal> for AmountInput {
    fn from(value: Decimal) -> Self {
        AmountInput::Text(value.to_string())
    }
}

impl From<&str> for AmountInput {
    fn from(text: &str) -> Self {
        AmountInput::Text(text.to_string())
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        AmountInput::Number(value)
    }
}

/// Raw input record for one player: display name plus total buy-in and
/// final cash-out, exactly as collected by the caller.
///
/// Nothing here is trusted; [`crate::engine::validate::validate`] turns a
/// list of these into typed, parsed records or a tagged error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_in: Option<AmountInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_out: Option<AmountInput>,
}

impl PlayerEntry {
    pub fn new(
        name: impl Into<String>,
        buy_in: impl Into<AmountInput>,
        cash_out: impl Into<AmountInput>,
    ) -> Self {
        Self {
            name: name.into(),
            buy_in: Some(buy_in.into()),
            cash_out: Some(cash_out.into()),
        }
    }

    /// Entry with no amounts filled in yet.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            buy_in: None,
            cash_out: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_player_name_equality() {
        let a = PlayerName::new("Alice");
        let b = PlayerName::new("Alice");
        assert_eq!(a, b);
    }

    #[test]
    fn test_player_name_display() {
        let p = PlayerName::new("Dana");
        assert_eq!(format!("{}", p), "Dana");
    }

    #[test]
    fn test_amount_input_from_text() {
        assert_eq!(AmountInput::from("150").parse(), Some(dec!(150)));
        assert_eq!(AmountInput::from("").parse(), None);
        assert_eq!(AmountInput::from("12x").parse(), None);
    }

    #[test]
    fn test_amount_input_from_number() {
        assert_eq!(AmountInput::from(99.5).parse(), Some(dec!(99.5)));
        assert_eq!(AmountInput::Number(f64::NAN).parse(), None);
    }

    #[test]
    fn test_amount_input_decimal_round_trip() {
        let amount = dec!(123.45);
        assert_eq!(AmountInput::from(amount).parse(), Some(amount));
    }

    #[test]
    fn test_entry_deserializes_mixed_shapes() {
        let entry: PlayerEntry =
            serde_json::from_str(r#"{"name": "Alice", "buy_in": 100, "cash_out": "150.00"}"#)
                .unwrap();
        assert_eq!(entry.buy_in.unwrap().parse(), Some(dec!(100)));
        assert_eq!(entry.cash_out.unwrap().parse(), Some(dec!(150.00)));
    }

    #[test]
    fn test_entry_missing_fields_deserialize_as_none() {
        let entry: PlayerEntry = serde_json::from_str(r#"{"name": "Bob"}"#).unwrap();
        assert!(entry.buy_in.is_none());
        assert!(entry.cash_out.is_none());
    }
}
