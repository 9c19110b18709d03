//! Category display formatting

use crate::models::ExpenseCategory;

/// Format the fixed category list
pub fn format_category_list() -> String {
    let mut output = String::from("Categories\n");
    for category in ExpenseCategory::ALL {
        output.push_str(&format!("  {} {}\n", category.icon(), category.name()));
    }
    output
}
