use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::money::Money;
use super::month::Month;

/// The ordered text lines of one source document, as handed over by the
/// text-extraction collaborator. `source` is the originating file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentLines {
    pub source: String,
    pub lines: Vec<String>,
}

impl DocumentLines {
    pub fn new(source: impl Into<String>, lines: Vec<String>) -> Self {
        DocumentLines { source: source.into(), lines }
    }
}

/// One extracted statement movement, before categorization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    /// Residual line text after the date and amount tokens are stripped.
    pub description: String,
    pub amount: Money,
    pub source: String,
}

impl Transaction {
    pub fn month(&self) -> Month {
        Month::from_date(self.date)
    }
}

/// A [`Transaction`] with its assigned spending category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorizedTransaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Money,
    pub category: Category,
    pub source: String,
}

impl CategorizedTransaction {
    pub fn new(tx: Transaction, category: Category) -> Self {
        CategorizedTransaction {
            date: tx.date,
            description: tx.description,
            amount: tx.amount,
            category,
            source: tx.source,
        }
    }

    pub fn month(&self) -> Month {
        Month::from_date(self.date)
    }
}
