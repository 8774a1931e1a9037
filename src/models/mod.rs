//! Core data models for moneygrid
//!
//! This module contains the value types the rest of the crate works in:
//! money amounts and typed transaction rows.

pub mod entry;
pub mod money;

pub use entry::{LedgerEntry, TxKind};
pub use money::{Money, MoneyParseError};
