//! Presentation glue: localized text rendering of settlement results and
//! errors.
//!
//! The engine guarantees numeric correctness only; everything about
//! display — language, currency symbol, 2-decimal formatting — lives
//! here, outside the settlement logic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::engine::settle::SettlementResult;
use crate::engine::validate::SettlementError;

/// Display language for rendered reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    He,
}

impl Locale {
    /// Parse a language tag as accepted on the command line.
    pub fn parse(tag: &str) -> Option<Locale> {
        match tag.to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "he" => Some(Locale::He),
            _ => None,
        }
    }

    /// Currency symbol conventionally shown for this locale.
    pub fn default_currency(self) -> &'static str {
        match self {
            Locale::En => "$",
            Locale::He => "₪",
        }
    }
}

struct Catalog {
    title: &'static str,
    pays: &'static str,
    receives: &'static str,
    winners: &'static str,
    losers: &'static str,
    fill_all: &'static str,
    no_players: &'static str,
}

const EN: Catalog = Catalog {
    title: "Settlement Instructions",
    pays: "pays",
    receives: "receives",
    winners: "Winners",
    losers: "Losers",
    fill_all: "Please fill in all player details",
    no_players: "No players to settle",
};

const HE: Catalog = Catalog {
    title: "הוראות העברה",
    pays: "משלם",
    receives: "מקבל",
    winners: "מנצחים",
    losers: "מפסידים",
    fill_all: "אנא מלא את כל פרטי השחקנים",
    no_players: "אין שחקנים לחישוב",
};

fn catalog(locale: Locale) -> &'static Catalog {
    match locale {
        Locale::En => &EN,
        Locale::He => &HE,
    }
}

fn transfers_needed(locale: Locale, count: usize) -> String {
    match locale {
        Locale::En => format!(
            "{} transfer{} needed to settle up",
            count,
            if count == 1 { "" } else { "s" }
        ),
        Locale::He => format!("נדרשות {} העברות", count),
    }
}

fn imbalance_line(locale: Locale, currency: &str, buy_in: Decimal, cash_out: Decimal) -> String {
    match locale {
        Locale::En => format!(
            "Money doesn't balance! Buy-in: {}{:.2}, Cash-out: {}{:.2}",
            currency, buy_in, currency, cash_out
        ),
        Locale::He => format!(
            "הכסף לא מאוזן! כניסה: {}{:.2}, יציאה: {}{:.2}",
            currency, buy_in, currency, cash_out
        ),
    }
}

/// How a report should be rendered: language plus currency symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    pub locale: Locale,
    pub currency: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::for_locale(Locale::En)
    }
}

impl ReportOptions {
    /// Options using the locale's conventional currency symbol.
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            locale,
            currency: locale.default_currency().to_string(),
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    fn amount(&self, value: Decimal) -> String {
        format!("{}{:.2}", self.currency, value)
    }
}

/// Render a settlement result as a localized text report: the transfer
/// instructions followed by winners and losers sections.
pub fn render(result: &SettlementResult, options: &ReportOptions) -> String {
    let messages = catalog(options.locale);
    let mut out = String::new();

    out.push_str(messages.title);
    out.push('\n');
    out.push_str(&transfers_needed(options.locale, result.transfer_count()));
    out.push_str("\n\n");

    for transfer in result.transfers() {
        out.push_str(&format!(
            "  {} ({}) -> {} ({}): {}\n",
            transfer.from,
            messages.pays,
            transfer.to,
            messages.receives,
            options.amount(transfer.amount),
        ));
    }

    let winners = result.winners();
    if !winners.is_empty() {
        out.push('\n');
        out.push_str(messages.winners);
        out.push('\n');
        for balance in winners {
            out.push_str(&format!(
                "  {}  +{}\n",
                balance.name,
                options.amount(balance.net)
            ));
        }
    }

    let losers = result.losers();
    if !losers.is_empty() {
        out.push('\n');
        out.push_str(messages.losers);
        out.push('\n');
        for balance in losers {
            out.push_str(&format!(
                "  {}  -{}\n",
                balance.name,
                options.amount(-balance.net)
            ));
        }
    }

    out
}

/// Localized one-line message for a validation error.
pub fn error_message(error: &SettlementError, options: &ReportOptions) -> String {
    let messages = catalog(options.locale);
    match error {
        SettlementError::EmptySession => messages.no_players.to_string(),
        SettlementError::MissingField { .. } => messages.fill_all.to_string(),
        SettlementError::Imbalance {
            total_buy_in,
            total_cash_out,
        } => imbalance_line(
            options.locale,
            &options.currency,
            *total_buy_in,
            *total_cash_out,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::balance::Balance;
    use crate::engine::settle::SettlementEngine;
    use crate::engine::validate::Field;
    use rust_decimal_macros::dec;

    fn sample_result() -> SettlementResult {
        SettlementEngine::settle(vec![
            Balance::new("Alice", dec!(50)),
            Balance::new("Bob", dec!(-50)),
        ])
    }

    #[test]
    fn test_english_report() {
        let report = render(&sample_result(), &ReportOptions::default());
        assert!(report.contains("Settlement Instructions"));
        assert!(report.contains("1 transfer needed to settle up"));
        assert!(report.contains("Bob (pays) -> Alice (receives): $50.00"));
        assert!(report.contains("Winners"));
        assert!(report.contains("Alice  +$50.00"));
        assert!(report.contains("Bob  -$50.00"));
    }

    #[test]
    fn test_hebrew_report() {
        let report = render(&sample_result(), &ReportOptions::for_locale(Locale::He));
        assert!(report.contains("הוראות העברה"));
        assert!(report.contains("₪50.00"));
        assert!(report.contains("משלם"));
        assert!(report.contains("מנצחים"));
    }

    #[test]
    fn test_plural_transfers() {
        let result = SettlementEngine::settle(vec![
            Balance::new("Alice", dec!(100)),
            Balance::new("Bob", dec!(-60)),
            Balance::new("Carol", dec!(-40)),
        ]);
        let report = render(&result, &ReportOptions::default());
        assert!(report.contains("2 transfers needed to settle up"));
    }

    #[test]
    fn test_custom_currency() {
        let options = ReportOptions::for_locale(Locale::En).with_currency("€");
        let report = render(&sample_result(), &options);
        assert!(report.contains("€50.00"));
    }

    #[test]
    fn test_error_messages() {
        let options = ReportOptions::default();
        assert_eq!(
            error_message(
                &SettlementError::MissingField {
                    index: 2,
                    field: Field::BuyIn,
                },
                &options
            ),
            "Please fill in all player details"
        );

        let message = error_message(
            &SettlementError::Imbalance {
                total_buy_in: dec!(200),
                total_cash_out: dec!(250),
            },
            &options,
        );
        assert_eq!(
            message,
            "Money doesn't balance! Buy-in: $200.00, Cash-out: $250.00"
        );
    }

    #[test]
    fn test_hebrew_error_uses_shekel() {
        let message = error_message(
            &SettlementError::Imbalance {
                total_buy_in: dec!(300),
                total_cash_out: dec!(310),
            },
            &ReportOptions::for_locale(Locale::He),
        );
        assert!(message.contains("₪300.00"));
        assert!(message.contains("₪310.00"));
    }
}
