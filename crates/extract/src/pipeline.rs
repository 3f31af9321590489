use chrono::Datelike;
use gastos_core::{CategorizedTransaction, DocumentLines, Transaction};
use gastos_rules::RuleSet;
use serde::Serialize;

use crate::extractor::{extract_line, SkipReason};
use crate::reassemble::reassemble_lines;
use crate::year::infer_year;

/// A line that contributed no transaction, with its position in the
/// reassembled sequence and the reason it was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    pub index: usize,
    pub line: String,
    pub reason: SkipReason,
}

/// Extraction output for one document, diagnostics included.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub source: String,
    pub transactions: Vec<Transaction>,
    pub skipped: Vec<SkippedLine>,
}

/// Extract every recognizable transaction from one document's lines.
///
/// Never fails: malformed lines only shrink the output. An empty document is
/// valid input and produces an empty list.
pub fn extract_transactions(lines: &[String], source: &str) -> Vec<Transaction> {
    extract_with_report(lines, source).transactions
}

/// [`extract_transactions`] plus the skipped-line diagnostics the silent
/// default discards.
pub fn extract_with_report(lines: &[String], source: &str) -> DocumentReport {
    // Year inference is document-level and runs over the raw text, before
    // continuation lines are merged.
    let fallback_year = infer_year(&lines.join("\n")).unwrap_or_else(current_year);

    let merged = reassemble_lines(lines.iter().map(String::as_str));
    let mut transactions = Vec::new();
    let mut skipped = Vec::new();
    for (index, line) in merged.iter().enumerate() {
        match extract_line(line, fallback_year, source) {
            Ok(tx) => transactions.push(tx),
            Err(reason) => skipped.push(SkippedLine { index, line: line.clone(), reason }),
        }
    }
    DocumentReport { source: source.to_string(), transactions, skipped }
}

/// Extract across all documents and classify the merged list.
///
/// The only multi-document entry point: per-document extraction concatenated
/// in input order, then one classification pass over every transaction.
pub fn process_batch(documents: &[DocumentLines], rules: &RuleSet) -> Vec<CategorizedTransaction> {
    documents
        .iter()
        .flat_map(|doc| extract_transactions(&doc.lines, &doc.source))
        .map(|tx| {
            let category = rules.classify(&tx.description);
            CategorizedTransaction::new(tx, category)
        })
        .collect()
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}
