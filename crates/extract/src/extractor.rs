use gastos_core::{Money, Transaction};
use serde::Serialize;
use thiserror::Error;

use crate::amount::{parse_amount, AmountParseError};
use crate::date::{find_date, DateError};

// Trailing monetary token: optional sign, `$`, accounting parentheses,
// 1-3 digit clusters separated by `.`/`,`, optional 2-decimal suffix and a
// trailing credit marker.
crate::re!(
    re_amount,
    r"(?i)([+-]?\s*\$?\s*\(?\s*\d{1,3}(?:[.,]\d{3})*(?:[.,]\d{2})?\s*\)?)\s*(CR)?\s*$"
);
crate::re!(re_whitespace, r"\s{2,}");

/// Payment wording on the line forces the amount negative even when the
/// numeric token prints without a sign.
const CREDIT_KEYWORDS: [&str; 3] = ["abono", "pago", "payment"];

/// Why a line contributed no transaction. `NoAmount` marks a non-transaction
/// line (headers, balances, addresses), not a fault.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum SkipReason {
    #[error("no trailing amount token")]
    NoAmount,
    #[error(transparent)]
    Amount(#[from] AmountParseError),
    #[error(transparent)]
    Date(#[from] DateError),
}

/// Extract one transaction from a reassembled line, or report why not.
pub(crate) fn extract_line(
    raw: &str,
    fallback_year: i32,
    source: &str,
) -> Result<Transaction, SkipReason> {
    let line = re_whitespace().replace_all(raw, " ").trim().to_string();

    let caps = re_amount().captures(&line).ok_or(SkipReason::NoAmount)?;
    let token = caps.get(1).ok_or(SkipReason::NoAmount)?;
    let credit_marker = caps.get(2).is_some();

    let mut amount = parse_amount(token.as_str())?;
    let lowered = line.to_lowercase();
    if credit_marker || CREDIT_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        amount = -amount.abs();
    }

    let date = find_date(&line, fallback_year)?;

    let matched = caps.get(0).ok_or(SkipReason::NoAmount)?;
    let mut description = line[..matched.start()].to_string();
    if date.end <= matched.start() {
        description.replace_range(date.start..date.end, "");
    }
    let description = description
        .trim_matches(&[' ', '-', '–', '—', '|'][..])
        .to_string();

    Ok(Transaction {
        date: date.date,
        description,
        amount: Money::from_decimal(amount),
        source: source.to_string(),
    })
}
