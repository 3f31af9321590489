use std::collections::BTreeMap;

use gastos_core::{Category, CategorizedTransaction, Money, Month};

/// Whether a transaction belongs in spending summaries: charges only, with
/// the payments/credits sentinel hidden.
fn is_reportable(tx: &CategorizedTransaction) -> bool {
    tx.amount.is_charge() && !tx.category.is_payments()
}

/// Total spending per category, largest first.
pub fn category_totals(transactions: &[CategorizedTransaction]) -> Vec<(Category, Money)> {
    let mut totals: BTreeMap<&Category, Money> = BTreeMap::new();
    for tx in transactions.iter().filter(|tx| is_reportable(tx)) {
        let entry = totals.entry(&tx.category).or_insert_with(Money::zero);
        *entry = *entry + tx.amount;
    }
    let mut out: Vec<(Category, Money)> =
        totals.into_iter().map(|(c, m)| (c.clone(), m)).collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// Month-by-category spending pivot. Rows are chronological; absent cells
/// mean no spending, not zero rows.
pub fn month_pivot(
    transactions: &[CategorizedTransaction],
) -> BTreeMap<Month, BTreeMap<Category, Money>> {
    let mut pivot: BTreeMap<Month, BTreeMap<Category, Money>> = BTreeMap::new();
    for tx in transactions.iter().filter(|tx| is_reportable(tx)) {
        let cell = pivot
            .entry(tx.month())
            .or_default()
            .entry(tx.category.clone())
            .or_insert_with(Money::zero);
        *cell = *cell + tx.amount;
    }
    pivot
}
