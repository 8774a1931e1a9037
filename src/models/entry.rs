//! Typed transaction row
//!
//! A `LedgerEntry` is a grid row that survived coercion: its amount parsed
//! as money and its date/type fields were non-empty. Date text stays raw
//! here; only the balance derivation parses it.

use std::fmt;

use super::money::Money;

/// Classification of a transaction's Type field
///
/// Anything that is not "income" (case-insensitive, untrimmed) counts
/// against the balance. "Expense", "expense", "savings", and typos all
/// land on the negative side, matching how bank-style CSVs are read here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    /// Adds to the running balance
    Income,
    /// Subtracts from the running balance
    Expense,
    /// Unrecognized free text; treated like an expense
    Other,
}

impl TxKind {
    /// Classify raw Type text
    pub fn classify(text: &str) -> Self {
        if text.eq_ignore_ascii_case("income") {
            Self::Income
        } else if text.eq_ignore_ascii_case("expense") {
            Self::Expense
        } else {
            Self::Other
        }
    }

    /// Check if this kind contributes positively
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A typed transaction row
///
/// Field text is kept exactly as imported so displays and exports
/// round-trip the user's data; classification happens on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    /// Free-text description, also the grouping key
    pub description: String,

    /// Date exactly as it appeared in the grid
    pub date_text: String,

    /// Type exactly as it appeared in the grid
    pub type_text: String,

    /// Parsed amount, unsigned in source data
    pub amount: Money,
}

impl LedgerEntry {
    /// Create an entry from raw cell text plus a parsed amount
    pub fn new(
        description: impl Into<String>,
        date_text: impl Into<String>,
        type_text: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            description: description.into(),
            date_text: date_text.into(),
            type_text: type_text.into(),
            amount,
        }
    }

    /// Classify the Type text
    pub fn kind(&self) -> TxKind {
        TxKind::classify(&self.type_text)
    }

    /// Amount with sign applied by type: positive for income, negative
    /// for everything else
    pub fn signed_amount(&self) -> Money {
        if self.kind().is_income() {
            self.amount
        } else {
            -self.amount
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(TxKind::classify("Income"), TxKind::Income);
        assert_eq!(TxKind::classify("income"), TxKind::Income);
        assert_eq!(TxKind::classify("INCOME"), TxKind::Income);
        assert_eq!(TxKind::classify("Expense"), TxKind::Expense);
        assert_eq!(TxKind::classify("savings"), TxKind::Other);
        assert_eq!(TxKind::classify(" income"), TxKind::Other);
    }

    #[test]
    fn test_signed_amount() {
        let income = LedgerEntry::new("Salary", "2024-01-01", "Income", Money::from_cents(10000));
        assert_eq!(income.signed_amount().cents(), 10000);

        let expense = LedgerEntry::new("Rent", "2024-01-02", "Expense", Money::from_cents(3000));
        assert_eq!(expense.signed_amount().cents(), -3000);

        // Unrecognized type text counts against the balance
        let other = LedgerEntry::new("Vault", "2024-01-03", "savings", Money::from_cents(500));
        assert_eq!(other.signed_amount().cents(), -500);
    }

    #[test]
    fn test_raw_text_preserved() {
        let entry = LedgerEntry::new("Coffee", "01/05/2024", "expense", Money::from_cents(450));
        assert_eq!(entry.date_text, "01/05/2024");
        assert_eq!(entry.type_text, "expense");
        assert_eq!(entry.kind(), TxKind::Expense);
    }
}
