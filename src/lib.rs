//! # poker-settle
//!
//! Settlement engine for home poker sessions.
//!
//! Given each player's total buy-in and final cash-out, the engine checks
//! that the table's money is conserved, derives per-player net balances,
//! and greedily matches net winners against net losers to produce a small
//! set of transfers that squares everyone up.
//!
//! ## Architecture
//!
//! - **core** — Foundational types: players, sessions, balances, money utilities
//! - **engine** — Validation and the greedy settlement algorithm
//! - **report** — Localized text rendering of results and errors
//! - **simulation** — Random balanced-session generation for stress testing

pub mod core;
pub mod engine;
pub mod report;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::balance::{compute_balances, Balance};
    pub use crate::core::player::{AmountInput, PlayerEntry, PlayerName};
    pub use crate::core::session::{Session, ValidPlayer, ValidatedSession};
    pub use crate::engine::settle::{SettlementEngine, SettlementResult, Transfer};
    pub use crate::engine::validate::{validate, SettlementError};
    pub use crate::report::{Locale, ReportOptions};
}
