// User Intake - Record Model
// The canonical shape of one collected entry: demographics plus an expense map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The expense categories offered on the intake form.
///
/// The stored document model is open: export and display must handle any key
/// that shows up in a record's expense map, not just these five.
pub const EXPENSE_CATEGORIES: [&str; 5] = [
    "utilities",
    "entertainment",
    "school_fees",
    "shopping",
    "healthcare",
];

/// Gender options offered on the intake form. The stored value is an open set;
/// this list drives the form and the generator, not a storage constraint.
pub const GENDER_OPTIONS: [&str; 3] = ["Male", "Female", "Other"];

/// Fixed columns that lead every flattened row, before expense categories.
pub const FIXED_COLUMNS: [&str; 3] = ["age", "gender", "income"];

/// A single user's entry: demographics plus amounts spent per category.
///
/// Immutable once constructed. Carries no identity - the store assigns an
/// internal document id that is never surfaced back through reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub age: u32,
    pub gender: String,
    pub income: f64,

    /// Category name -> amount. Empty when no expenses were entered.
    #[serde(default)]
    pub expenses: BTreeMap<String, f64>,
}

impl UserRecord {
    pub fn new(age: u32, gender: impl Into<String>, income: f64, expenses: BTreeMap<String, f64>) -> Self {
        Self {
            age,
            gender: gender.into(),
            income,
            expenses,
        }
    }

    /// Flatten into a column -> value mapping for tabular output.
    ///
    /// Fixed columns `age`, `gender`, `income` are always present; each expense
    /// entry becomes its own column keyed by category name. Categories the
    /// record does not carry are simply absent (not zero-filled).
    pub fn to_row(&self) -> BTreeMap<String, String> {
        let mut row = BTreeMap::new();
        row.insert("age".to_string(), self.age.to_string());
        row.insert("gender".to_string(), self.gender.clone());
        row.insert("income".to_string(), format_amount(self.income));

        for (category, amount) in &self.expenses {
            row.insert(category.clone(), format_amount(*amount));
        }

        row
    }
}

/// Render a monetary amount the way it entered the system: two decimals by
/// convention, but without inventing precision (`120.0` -> "120", `120.5` ->
/// "120.5", `120.55` -> "120.55").
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> UserRecord {
        let mut expenses = BTreeMap::new();
        expenses.insert("utilities".to_string(), 120.0);
        expenses.insert("healthcare".to_string(), 89.99);
        UserRecord::new(34, "Female", 55000.50, expenses)
    }

    #[test]
    fn test_to_row_contains_fixed_and_expense_columns() {
        let record = sample_record();
        let row = record.to_row();

        assert_eq!(row.len(), FIXED_COLUMNS.len() + 2);
        assert_eq!(row.get("age").map(String::as_str), Some("34"));
        assert_eq!(row.get("gender").map(String::as_str), Some("Female"));
        assert_eq!(row.get("income").map(String::as_str), Some("55000.5"));
        assert_eq!(row.get("utilities").map(String::as_str), Some("120"));
        assert_eq!(row.get("healthcare").map(String::as_str), Some("89.99"));
    }

    #[test]
    fn test_to_row_omits_absent_categories() {
        let record = UserRecord::new(40, "Male", 70000.0, BTreeMap::new());
        let row = record.to_row();

        assert_eq!(row.len(), FIXED_COLUMNS.len());
        for category in EXPENSE_CATEGORIES {
            assert!(!row.contains_key(category));
        }
    }

    #[test]
    fn test_empty_expense_map_is_valid() {
        let record = UserRecord::new(25, "Other", 0.0, BTreeMap::new());
        assert!(record.expenses.is_empty());
        assert_eq!(record.to_row().len(), 3);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(120.0), "120");
        assert_eq!(format_amount(120.5), "120.5");
        assert_eq!(format_amount(120.55), "120.55");
        assert_eq!(format_amount(0.0), "0");
    }
}
