use std::io::Write;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ledger_analytics::{
    ledger::{AccountCategory, LedgerDocument, LedgerEntry, ValueType},
    storage::load_entries_from_path,
    FinancialReport,
};
use tempfile::NamedTempFile;

fn build_sample_ledger(entry_count: usize) -> LedgerDocument {
    let categories = [
        (AccountCategory::Revenue, "sales"),
        (AccountCategory::Expense, "payroll"),
        (AccountCategory::Assets, "bank"),
        (AccountCategory::Assets, "current_accounts_receivable"),
        (AccountCategory::Liability, "current_accounts_payable"),
    ];
    let data = (0..entry_count)
        .map(|idx| {
            let (category, account_type) = categories[idx % categories.len()].clone();
            let value_type = if idx % 3 == 0 {
                ValueType::Credit
            } else {
                ValueType::Debit
            };
            LedgerEntry::new(
                category,
                account_type,
                value_type,
                50.0 + (idx % 100) as f64,
            )
        })
        .collect();
    LedgerDocument::new(data)
}

fn bench_report(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(100_000));

    c.bench_function("financial_report_100k", |b| {
        b.iter(|| {
            let report = FinancialReport::compute(ledger.entries()).expect("report");
            black_box(report);
        })
    });
}

fn bench_ledger_io(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));
    let mut fixture = NamedTempFile::new().expect("tempfile");
    serde_json::to_writer(&mut fixture, &ledger).expect("seed");
    fixture.flush().expect("flush fixture");
    let file_path = fixture.path().to_path_buf();

    c.bench_function("ledger_load_10k", |b| {
        b.iter(|| {
            let loaded = load_entries_from_path(&file_path).expect("load ledger");
            black_box(loaded);
        })
    });
}

criterion_group!(benches, bench_report, bench_ledger_io);
criterion_main!(benches);
