use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gastos_core::{CategorizedTransaction, DocumentLines};
use gastos_extract::{extract_with_report, SkippedLine};
use gastos_rules::{default_rules, RuleSet};

mod export;
mod summary;

/// Classify bank/credit-card statement movements by category and month.
///
/// Input files hold the text a PDF-extraction step already produced, one
/// document per file; the filename becomes the transaction source label.
#[derive(Parser)]
#[command(name = "gastos", version, about)]
struct Cli {
    /// Statement text files, one document per file.
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Category rule TOML overriding the embedded taxonomy.
    #[arg(long, value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Write the categorized transactions to a CSV file.
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Emit the categorized transactions as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// List dropped lines with the reason each one was skipped.
    #[arg(long)]
    skipped: bool,

    /// Print spending totals per category and the month pivot.
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let custom_rules;
    let rules: &RuleSet = match &cli.rules {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading rule file {}", path.display()))?;
            custom_rules = RuleSet::from_toml(&text)
                .with_context(|| format!("parsing rule file {}", path.display()))?;
            &custom_rules
        }
        None => default_rules(),
    };

    let mut documents = Vec::new();
    for path in &cli.files {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading statement text {}", path.display()))?;
        let source = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("statement")
            .to_string();
        documents.push(DocumentLines::new(
            source,
            text.lines().map(str::to_string).collect(),
        ));
    }

    let mut transactions: Vec<CategorizedTransaction> = Vec::new();
    let mut skipped_by_doc: Vec<(String, Vec<SkippedLine>)> = Vec::new();
    for doc in &documents {
        let report = extract_with_report(&doc.lines, &doc.source);
        tracing::info!(
            source = %report.source,
            extracted = report.transactions.len(),
            skipped = report.skipped.len(),
            "document processed"
        );
        if report.transactions.is_empty() {
            tracing::warn!(source = %report.source, "no transactions found");
        }
        transactions.extend(report.transactions.into_iter().map(|tx| {
            let category = rules.classify(&tx.description);
            CategorizedTransaction::new(tx, category)
        }));
        skipped_by_doc.push((report.source, report.skipped));
    }

    if cli.json {
        println!("{}", export::to_json(&transactions)?);
    } else {
        print_table(&transactions);
    }

    if let Some(path) = &cli.csv {
        let file = fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        export::write_csv(file, &transactions)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    if cli.skipped {
        print_skipped(&skipped_by_doc);
    }
    if cli.summary {
        print_summary(&transactions);
    }

    Ok(())
}

fn print_table(transactions: &[CategorizedTransaction]) {
    if transactions.is_empty() {
        println!("(sin transacciones)");
        return;
    }
    println!(
        "{:<12} {:<9} {:<44} {:<24} {:>12} {}",
        "FECHA", "MES", "DESCRIPCION", "CATEGORIA", "MONTO", "ARCHIVO"
    );
    for tx in transactions {
        println!(
            "{:<12} {:<9} {:<44} {:<24} {:>12} {}",
            tx.date.to_string(),
            tx.month().to_string(),
            truncate(&tx.description, 44),
            tx.category.to_string(),
            tx.amount.to_string(),
            tx.source
        );
    }
}

fn print_skipped(reports: &[(String, Vec<SkippedLine>)]) {
    println!();
    println!("Líneas descartadas:");
    for (source, skipped) in reports {
        for s in skipped {
            println!("  {}:{} [{}] {}", source, s.index + 1, s.reason, s.line);
        }
    }
}

fn print_summary(transactions: &[CategorizedTransaction]) {
    println!();
    println!("Gasto por categoría (solo cargos):");
    for (category, total) in summary::category_totals(transactions) {
        println!("  {:<24} {:>12}", category.to_string(), total.to_string());
    }

    println!();
    println!("Gasto por mes y categoría:");
    for (month, cells) in summary::month_pivot(transactions) {
        for (category, total) in cells {
            println!("  {} {:<24} {:>12}", month, category.to_string(), total.to_string());
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
