// User Intake - Form Ingestion
// Turns raw submitted field strings into a validated UserRecord.

use std::collections::BTreeMap;

use crate::error::{IntakeError, Result};
use crate::record::UserRecord;

/// Raw form field values as received from a submission, before validation.
///
/// Per-category amounts arrive as an explicit category -> amount-string
/// mapping built by the HTTP layer, so ingestion never reconstructs dynamic
/// `<category>_amount` field names itself. A category selected without an
/// amount appears here with an empty string.
#[derive(Debug, Clone, Default)]
pub struct RawSubmission {
    pub age: String,
    pub gender: String,
    pub income: String,
    pub expenses: BTreeMap<String, String>,
}

/// Validate and normalize a raw submission into a `UserRecord`.
///
/// Policy (tightened relative to the collected HTML form, documented here):
/// age must be a well-formed integer >= 1, income a well-formed float >= 0.
/// Gender must be non-empty but is NOT restricted to the canonical option
/// list - the stored set is open.
///
/// Selected categories with an empty amount are silently dropped; selecting a
/// category without entering an amount is not an error.
///
/// Pure transform: persisting the returned record is the caller's job.
pub fn parse_submission(raw: &RawSubmission) -> Result<UserRecord> {
    let age: u32 = raw
        .age
        .trim()
        .parse()
        .map_err(|_| IntakeError::validation(format!("age is not a whole number: {:?}", raw.age)))?;
    if age == 0 {
        return Err(IntakeError::validation("age must be at least 1"));
    }

    let gender = raw.gender.trim();
    if gender.is_empty() {
        return Err(IntakeError::validation("gender is required"));
    }

    let income: f64 = raw.income.trim().parse().map_err(|_| {
        IntakeError::validation(format!("income is not a number: {:?}", raw.income))
    })?;
    if income < 0.0 {
        return Err(IntakeError::validation("income must not be negative"));
    }

    let mut expenses = BTreeMap::new();
    for (category, amount) in &raw.expenses {
        let amount = amount.trim();
        if amount.is_empty() {
            continue;
        }
        let parsed: f64 = amount.parse().map_err(|_| {
            IntakeError::validation(format!("amount for {} is not a number: {:?}", category, amount))
        })?;
        expenses.insert(category.clone(), parsed);
    }

    Ok(UserRecord::new(age, gender, income, expenses))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(age: &str, gender: &str, income: &str, expenses: &[(&str, &str)]) -> RawSubmission {
        RawSubmission {
            age: age.to_string(),
            gender: gender.to_string(),
            income: income.to_string(),
            expenses: expenses
                .iter()
                .map(|(c, a)| (c.to_string(), a.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_valid_submission() {
        let record = parse_submission(&raw(
            "34",
            "Female",
            "55000.50",
            &[("utilities", "120.00"), ("shopping", "")],
        ))
        .unwrap();

        assert_eq!(record.age, 34);
        assert_eq!(record.gender, "Female");
        assert_eq!(record.income, 55000.50);
        // Shopping was selected with no amount: contributes nothing.
        assert_eq!(record.expenses.len(), 1);
        assert_eq!(record.expenses.get("utilities"), Some(&120.00));
    }

    #[test]
    fn test_malformed_age_rejected() {
        let err = parse_submission(&raw("abc", "Male", "1000", &[])).unwrap_err();
        assert!(err.is_validation(), "expected validation error, got {:?}", err);
    }

    #[test]
    fn test_zero_age_rejected() {
        let err = parse_submission(&raw("0", "Male", "1000", &[])).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_missing_gender_rejected() {
        let err = parse_submission(&raw("30", "  ", "1000", &[])).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_malformed_income_rejected() {
        let err = parse_submission(&raw("30", "Other", "lots", &[])).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_negative_income_rejected() {
        let err = parse_submission(&raw("30", "Other", "-5", &[])).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_malformed_expense_amount_rejected() {
        let err =
            parse_submission(&raw("30", "Other", "1000", &[("utilities", "oops")])).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_no_categories_selected() {
        let record = parse_submission(&raw("30", "Other", "1000", &[])).unwrap();
        assert!(record.expenses.is_empty());
    }

    #[test]
    fn test_whitespace_trimmed() {
        let record =
            parse_submission(&raw(" 42 ", " Male ", " 250.75 ", &[("healthcare", " 10.5 ")]))
                .unwrap();
        assert_eq!(record.age, 42);
        assert_eq!(record.gender, "Male");
        assert_eq!(record.income, 250.75);
        assert_eq!(record.expenses.get("healthcare"), Some(&10.5));
    }
}
