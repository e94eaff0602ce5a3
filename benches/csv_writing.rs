//! Benchmark suite for comparing row quoting modes
//!
//! Compares raw and standard (RFC 4180) quoting when writing flattened
//! expenses to an in-memory buffer, using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use splitwise_export::cli::QuoteMode;
use splitwise_export::core::EXPENSE_FETCH_LIMIT;
use splitwise_export::{write_expenses_csv, FlatExpense};

fn main() {
    divan::main();
}

fn records(count: usize) -> Vec<FlatExpense> {
    (0..count as u64)
        .map(|id| FlatExpense {
            id,
            description: format!("Expense number {}", id),
            details: if id % 3 == 0 {
                "split, as usual".to_string()
            } else {
                String::new()
            },
            cost: format!("{}.{:02}", id % 500, id % 100),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            category_name: "General".to_string(),
        })
        .collect()
}

/// Raw quoting, 100 expenses
#[divan::bench]
fn raw_small(bencher: divan::Bencher) {
    let records = records(100);
    bencher.bench_local(|| {
        let mut output = Vec::new();
        write_expenses_csv(&records, QuoteMode::Raw, &mut output).expect("Writing failed");
        output
    });
}

/// Standard quoting, 100 expenses
#[divan::bench]
fn standard_small(bencher: divan::Bencher) {
    let records = records(100);
    bencher.bench_local(|| {
        let mut output = Vec::new();
        write_expenses_csv(&records, QuoteMode::Standard, &mut output).expect("Writing failed");
        output
    });
}

/// Raw quoting, a full fetch (10,000 expenses)
#[divan::bench]
fn raw_full_fetch(bencher: divan::Bencher) {
    let records = records(EXPENSE_FETCH_LIMIT);
    bencher.bench_local(|| {
        let mut output = Vec::new();
        write_expenses_csv(&records, QuoteMode::Raw, &mut output).expect("Writing failed");
        output
    });
}

/// Standard quoting, a full fetch (10,000 expenses)
#[divan::bench]
fn standard_full_fetch(bencher: divan::Bencher) {
    let records = records(EXPENSE_FETCH_LIMIT);
    bencher.bench_local(|| {
        let mut output = Vec::new();
        write_expenses_csv(&records, QuoteMode::Standard, &mut output).expect("Writing failed");
        output
    });
}
