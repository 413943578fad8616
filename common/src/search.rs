use std::collections::HashMap;
use std::hint::black_box;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::schema::Transaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMethod {
    Linear,
    Indexed,
}

#[derive(Debug, Clone, Serialize)]
pub struct IdTiming {
    pub id: i64,
    pub found: bool,
    pub linear_secs: f64,
    pub indexed_secs: f64,
    pub speedup: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub record_count: usize,
    pub iterations: u32,
    pub timings: Vec<IdTiming>,
    pub average_linear_secs: f64,
    pub average_indexed_secs: f64,
    pub overall_speedup: f64,
}

/// Compares a scan of the record list against a lookup in an id index.
pub struct SearchComparison<'a> {
    transactions: &'a [Transaction],
    index: HashMap<i64, &'a Transaction>,
}

impl<'a> SearchComparison<'a> {
    pub fn new(transactions: &'a [Transaction]) -> Self {
        let index = transactions.iter().map(|t| (t.id, t)).collect();
        SearchComparison {
            transactions,
            index,
        }
    }

    pub fn linear_search(&self, id: i64) -> Option<&'a Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn indexed_lookup(&self, id: i64) -> Option<&'a Transaction> {
        self.index.get(&id).copied()
    }

    /// Average wall time of one lookup over `iterations` runs.
    pub fn measure(&self, method: SearchMethod, id: i64, iterations: u32) -> Duration {
        let iterations = iterations.max(1);
        let started = Instant::now();
        for _ in 0..iterations {
            let found = match method {
                SearchMethod::Linear => self.linear_search(black_box(id)),
                SearchMethod::Indexed => self.indexed_lookup(black_box(id)),
            };
            black_box(found);
        }
        started.elapsed() / iterations
    }

    pub fn compare(&self, test_ids: &[i64], iterations: u32) -> ComparisonReport {
        let timings: Vec<IdTiming> = test_ids
            .iter()
            .map(|&id| {
                let linear = self.measure(SearchMethod::Linear, id, iterations).as_secs_f64();
                let indexed = self.measure(SearchMethod::Indexed, id, iterations).as_secs_f64();
                IdTiming {
                    id,
                    found: self.indexed_lookup(id).is_some(),
                    linear_secs: linear,
                    indexed_secs: indexed,
                    speedup: ratio(linear, indexed),
                }
            })
            .collect();

        let average = |f: fn(&IdTiming) -> f64| {
            if timings.is_empty() {
                0.0
            } else {
                timings.iter().map(f).sum::<f64>() / timings.len() as f64
            }
        };
        let average_linear_secs = average(|t| t.linear_secs);
        let average_indexed_secs = average(|t| t.indexed_secs);

        ComparisonReport {
            record_count: self.transactions.len(),
            iterations: iterations.max(1),
            average_linear_secs,
            average_indexed_secs,
            overall_speedup: ratio(average_linear_secs, average_indexed_secs),
            timings,
        }
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{NewTransaction, TransactionStatus, TransactionType};

    fn records(count: i64) -> Vec<Transaction> {
        (1..=count)
            .map(|id| {
                Transaction::new(
                    id,
                    NewTransaction {
                        kind: TransactionType::Transfer,
                        amount: id as u64 * 10,
                        sender: "a".into(),
                        receiver: "b".into(),
                        timestamp: "2024-01-01T00:00:00".into(),
                        status: TransactionStatus::Completed,
                        description: String::new(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn both_methods_find_the_same_record() {
        let transactions = records(50);
        let comparison = SearchComparison::new(&transactions);
        for id in [1, 25, 50] {
            let linear = comparison.linear_search(id).unwrap();
            let indexed = comparison.indexed_lookup(id).unwrap();
            assert_eq!(linear, indexed);
            assert_eq!(linear.id, id);
        }
        assert!(comparison.linear_search(51).is_none());
        assert!(comparison.indexed_lookup(51).is_none());
    }

    #[test]
    fn report_covers_every_test_id() {
        let transactions = records(20);
        let comparison = SearchComparison::new(&transactions);
        let report = comparison.compare(&[3, 9, 99], 5);

        assert_eq!(report.record_count, 20);
        assert_eq!(report.iterations, 5);
        let ids: Vec<i64> = report.timings.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 9, 99]);
        assert!(report.timings[0].found);
        assert!(!report.timings[2].found);
        assert!(report.average_linear_secs >= 0.0);
    }

    #[test]
    fn empty_comparison_reports_zeros() {
        let comparison = SearchComparison::new(&[]);
        let report = comparison.compare(&[], 10);
        assert!(report.timings.is_empty());
        assert_eq!(report.average_linear_secs, 0.0);
        assert_eq!(report.overall_speedup, 0.0);
    }
}
