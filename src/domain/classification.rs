use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Billing,
    Technical,
    Account,
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Billing => "billing",
            Category::Technical => "technical",
            Category::Account => "account",
            Category::General => "general",
        }
    }

    /// Exact membership check against the fixed value set. Case variants
    /// like `"Billing"` are out-of-enum and rejected, matching the wire
    /// contract the prompt states.
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "billing" => Some(Category::Billing),
            "technical" => Some(Category::Technical),
            "account" => Some(Category::Account),
            "general" => Some(Category::General),
            _ => None,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::General
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            "critical" => Some(Priority::Critical),
            _ => None,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// Result of classifying a ticket description. Always fully populated;
/// `Default` is the fallback returned on any failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub suggested_category: Category,
    pub suggested_priority: Priority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_category() {
        assert_eq!(Category::from_str("billing"), Some(Category::Billing));
        assert_eq!(Category::from_str("technical"), Some(Category::Technical));
        assert_eq!(Category::from_str("refunds"), None);
        assert_eq!(Category::from_str(""), None);
    }

    #[test]
    fn parses_priority() {
        assert_eq!(Priority::from_str("critical"), Some(Priority::Critical));
        assert_eq!(Priority::from_str("low"), Some(Priority::Low));
        assert_eq!(Priority::from_str("urgent"), None);
    }

    #[test]
    fn rejects_case_variant_values() {
        assert_eq!(Category::from_str("Billing"), None);
        assert_eq!(Category::from_str(" technical "), None);
        assert_eq!(Priority::from_str("CRITICAL"), None);
        assert_eq!(Priority::from_str("High"), None);
    }

    #[test]
    fn default_is_general_medium() {
        let fallback = Classification::default();
        assert_eq!(fallback.suggested_category, Category::General);
        assert_eq!(fallback.suggested_priority, Priority::Medium);
    }

    #[test]
    fn renders_pretty_json() {
        let classification = Classification::default();
        let json = serde_json::to_string_pretty(&classification).unwrap();
        assert_eq!(
            json,
            "{\n  \"suggested_category\": \"general\",\n  \"suggested_priority\": \"medium\"\n}"
        );
    }

    #[test]
    fn serializes_with_lowercase_values() {
        let classification = Classification {
            suggested_category: Category::Billing,
            suggested_priority: Priority::High,
        };
        let json = serde_json::to_value(classification).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "suggested_category": "billing",
                "suggested_priority": "high",
            })
        );
    }
}
