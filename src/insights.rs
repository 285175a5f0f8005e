//! Missing-expense detection for the expense log
//!
//! Flags common recurring expenses the user has not recorded yet, using
//! case-insensitive substring matching against the logged expense names.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A typical recurring expense most households carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonExpense {
    pub name: &'static str,
    pub category: &'static str,
}

/// Common expenses checked against the user's records, in display order
pub const COMMON_EXPENSES: &[CommonExpense] = &[
    CommonExpense { name: "Council Tax", category: "Housing" },
    CommonExpense { name: "Electricity", category: "Utilities" },
    CommonExpense { name: "Gas", category: "Utilities" },
    CommonExpense { name: "Water", category: "Utilities" },
    CommonExpense { name: "Internet", category: "Utilities" },
    CommonExpense { name: "Mobile Phone", category: "Utilities" },
    CommonExpense { name: "Home Insurance", category: "Insurance" },
    CommonExpense { name: "Car Insurance", category: "Insurance" },
    CommonExpense { name: "TV License", category: "Entertainment" },
    CommonExpense { name: "Mortgage/Rent", category: "Housing" },
    CommonExpense { name: "Groceries", category: "Food & Dining" },
    CommonExpense { name: "Petrol", category: "Transportation" },
];

/// A logged expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub expense_name: String,
    pub category: String,
    #[serde(default)]
    pub amount: f64,
}

/// A record covers a common expense when its name contains the common name,
/// or when it shares the category and the common name contains the record name.
fn is_covered(common: &CommonExpense, records: &[ExpenseRecord]) -> bool {
    let common_name = common.name.to_lowercase();
    records.iter().any(|record| {
        let record_name = record.expense_name.to_lowercase();
        record_name.contains(&common_name)
            || (record.category == common.category && common_name.contains(&record_name))
    })
}

/// Common expenses absent from the records and not dismissed by the user,
/// in table order.
pub fn missing_common_expenses(
    records: &[ExpenseRecord],
    dismissed: &HashSet<String>,
) -> Vec<&'static CommonExpense> {
    COMMON_EXPENSES
        .iter()
        .filter(|common| !is_covered(common, records) && !dismissed.contains(common.name))
        .collect()
}
