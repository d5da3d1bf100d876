use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorises expenses for aggregation and charting.
///
/// The set is closed; the declaration order doubles as the registry order
/// used to break ties between equal category totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Entertainment,
    Daily,
    Medical,
}

impl Category {
    /// Every category, in registry order.
    pub const ALL: [Category; 4] = [
        Category::Food,
        Category::Entertainment,
        Category::Daily,
        Category::Medical,
    ];

    /// Stable identifier, identical to the serialized form.
    pub fn id(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Entertainment => "entertainment",
            Category::Daily => "daily",
            Category::Medical => "medical",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "食費",
            Category::Entertainment => "娯楽",
            Category::Daily => "雑費",
            Category::Medical => "医療",
        }
    }

    /// Chart color as a `#rrggbb` hex string.
    pub fn color_hex(&self) -> &'static str {
        match self {
            Category::Food => "#f97316",
            Category::Entertainment => "#a855f7",
            Category::Daily => "#3b82f6",
            Category::Medical => "#f43f5e",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_lowercase_ids() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).expect("serialize");
            assert_eq!(json, format!("\"{}\"", category.id()));
        }
    }

    #[test]
    fn deserializes_known_ids() {
        let category: Category = serde_json::from_str("\"daily\"").expect("deserialize");
        assert_eq!(category, Category::Daily);
    }

    #[test]
    fn rejects_unknown_ids() {
        let result = serde_json::from_str::<Category>("\"transport\"");
        assert!(result.is_err());
    }

    #[test]
    fn registry_order_is_stable() {
        let ids: Vec<&str> = Category::ALL.iter().map(Category::id).collect();
        assert_eq!(ids, ["food", "entertainment", "daily", "medical"]);
    }
}
