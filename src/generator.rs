// User Intake - Random Record Generator
// Produces synthetic records for seeding and demos. Values are drawn from
// process entropy, so repeated runs produce different batches.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

use crate::record::{UserRecord, EXPENSE_CATEGORIES, GENDER_OPTIONS};

/// Generate one synthetic record:
/// - age uniform in [18, 80]
/// - gender uniform over the canonical options
/// - income uniform in [20000, 150000], rounded to 2 decimals
/// - 1-5 distinct expense categories, each amount uniform in [100, 5000]
///   rounded to 2 decimals
pub fn generate_record(rng: &mut impl Rng) -> UserRecord {
    let age = rng.gen_range(18..=80);
    let gender = GENDER_OPTIONS[rng.gen_range(0..GENDER_OPTIONS.len())];
    let income = round2(rng.gen_range(20_000.0..=150_000.0));

    let count = rng.gen_range(1..=EXPENSE_CATEGORIES.len());
    let mut expenses = BTreeMap::new();
    for category in EXPENSE_CATEGORIES.choose_multiple(rng, count) {
        expenses.insert(category.to_string(), round2(rng.gen_range(100.0..=5_000.0)));
    }

    UserRecord::new(age, gender, income, expenses)
}

/// Generate a batch of `count` synthetic records with thread-local entropy.
pub fn generate_batch(count: usize) -> Vec<UserRecord> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| generate_record(&mut rng)).collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_two_decimal(value: f64) -> bool {
        (value * 100.0 - (value * 100.0).round()).abs() < 1e-9
    }

    #[test]
    fn test_generated_record_within_bounds() {
        let mut rng = rand::thread_rng();

        // Generators are probabilistic; sample a batch to exercise the ranges.
        for _ in 0..200 {
            let record = generate_record(&mut rng);

            assert!((18..=80).contains(&record.age));
            assert!(GENDER_OPTIONS.contains(&record.gender.as_str()));
            assert!((20_000.0..=150_000.0).contains(&record.income));
            assert!(is_two_decimal(record.income));

            assert!((1..=5).contains(&record.expenses.len()));
            for (category, amount) in &record.expenses {
                assert!(EXPENSE_CATEGORIES.contains(&category.as_str()));
                assert!((100.0..=5_000.0).contains(amount));
                assert!(is_two_decimal(*amount));
            }
        }
    }

    #[test]
    fn test_generated_categories_are_distinct() {
        // BTreeMap keys are unique by construction; assert the draw never
        // collapses below one category either.
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let record = generate_record(&mut rng);
            assert!(!record.expenses.is_empty());
        }
    }

    #[test]
    fn test_batch_size() {
        let batch = generate_batch(100);
        assert_eq!(batch.len(), 100);
    }
}
