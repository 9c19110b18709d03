//! Expense categories
//!
//! The category set is fixed; every expense belongs to exactly one of them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of an expense
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum ExpenseCategory {
    Education,
    Food,
    Housing,
    Transportation,
    Entertainment,
    Utilities,
    Shopping,
    #[default]
    Other,
}

impl ExpenseCategory {
    /// All categories, in display order
    pub const ALL: [ExpenseCategory; 8] = [
        Self::Education,
        Self::Food,
        Self::Housing,
        Self::Transportation,
        Self::Entertainment,
        Self::Utilities,
        Self::Shopping,
        Self::Other,
    ];

    /// Name as written to the expense file
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Education => "Education",
            Self::Food => "Food",
            Self::Housing => "Housing",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Shopping => "Shopping",
            Self::Other => "Other",
        }
    }

    /// Icon shown next to the category in listings
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Education => "📚",
            Self::Food => "🍔",
            Self::Housing => "🏠",
            Self::Transportation => "🚌",
            Self::Entertainment => "🎮",
            Self::Utilities => "📱",
            Self::Shopping => "🛍️",
            Self::Other => "📝",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ExpenseCategory {
    type Err = CategoryParseError;

    /// Case-insensitive match against the category names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CategoryParseError(needle.to_string()))
    }
}

/// Error returned for a name outside the fixed category set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: '{}'", self.0)
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Food".parse::<ExpenseCategory>().unwrap(), ExpenseCategory::Food);
        assert_eq!("food".parse::<ExpenseCategory>().unwrap(), ExpenseCategory::Food);
        assert_eq!(
            " TRANSPORTATION ".parse::<ExpenseCategory>().unwrap(),
            ExpenseCategory::Transportation
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Groceries".parse::<ExpenseCategory>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown category: 'Groceries'");
    }

    #[test]
    fn test_display_matches_name() {
        for category in ExpenseCategory::ALL {
            assert_eq!(category.to_string(), category.name());
            assert_eq!(category.name().parse::<ExpenseCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&ExpenseCategory::Shopping).unwrap();
        assert_eq!(json, "\"Shopping\"");
    }
}
