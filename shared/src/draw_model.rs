use serde::{Deserialize, Serialize};

use crate::drawn_store::DrawnStore;

/// A short opaque label: a category letter or one of its values.
pub type Token = String;

/// One configured category and the values that can be drawn with it.
///
/// Stored as `{"alphabet": "A", "digits": ["1", "2"]}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CategoryConfig {
    #[serde(rename = "alphabet")]
    pub category: Token,
    #[serde(rename = "digits")]
    pub values: Vec<Token>,
}

impl CategoryConfig {
    pub fn new(category: impl Into<Token>, values: impl IntoIterator<Item = impl Into<Token>>) -> Self {
        Self {
            category: category.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Values of this category whose combination has not been drawn yet, in configured order.
    pub fn undrawn_values(&self, drawn: &dyn DrawnStore) -> Vec<Token> {
        self.values
            .iter()
            .filter(|value| !drawn.contains(&combination_key(&self.category, value)))
            .cloned()
            .collect()
    }
}

/// The finished outcome of one round.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DrawResult {
    pub category: Token,
    pub value: Token,
}

impl DrawResult {
    pub fn new(category: impl Into<Token>, value: impl Into<Token>) -> Self {
        Self {
            category: category.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> String {
        combination_key(&self.category, &self.value)
    }
}

impl std::fmt::Display for DrawResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.category, self.value)
    }
}

pub fn combination_key(category: &str, value: &str) -> String {
    format!("{}{}", category, value)
}

pub fn find_category<'a>(config: &'a [CategoryConfig], category: &str) -> Option<&'a CategoryConfig> {
    config.iter().find(|item| item.category == category)
}

/// Undrawn values for `category`. Unknown categories have none.
pub fn undrawn_values(config: &[CategoryConfig], drawn: &dyn DrawnStore, category: &str) -> Vec<Token> {
    find_category(config, category)
        .map(|item| item.undrawn_values(drawn))
        .unwrap_or_default()
}

/// Categories with at least one undrawn value, in configured order.
pub fn undrawn_categories(config: &[CategoryConfig], drawn: &dyn DrawnStore) -> Vec<Token> {
    config
        .iter()
        .filter(|item| !item.undrawn_values(drawn).is_empty())
        .map(|item| item.category.clone())
        .collect()
}

/// Every combination still available, as keys.
pub fn available_combinations(config: &[CategoryConfig], drawn: &dyn DrawnStore) -> Vec<String> {
    config
        .iter()
        .flat_map(|item| {
            item.undrawn_values(drawn)
                .into_iter()
                .map(move |value| combination_key(&item.category, &value))
        })
        .collect()
}

pub fn total_combinations(config: &[CategoryConfig]) -> usize {
    config.iter().map(|item| item.values.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawn_store::DrawnSet;

    fn config() -> Vec<CategoryConfig> {
        vec![
            CategoryConfig::new("A", ["1", "2", "3"]),
            CategoryConfig::new("B", ["1"]),
            CategoryConfig::new("C", ["7", "8"]),
        ]
    }

    #[test]
    fn test_undrawn_categories_skip_exhausted() {
        let drawn = DrawnSet::from_keys(["B1", "C7", "C8"]);
        assert_eq!(undrawn_categories(&config(), &drawn), vec!["A".to_string()]);
    }

    #[test]
    fn test_undrawn_values_keep_order() {
        let drawn = DrawnSet::from_keys(["A2"]);
        assert_eq!(undrawn_values(&config(), &drawn, "A"), vec!["1", "3"]);
        assert!(undrawn_values(&config(), &drawn, "Z").is_empty());
    }

    #[test]
    fn test_available_and_total() {
        let drawn = DrawnSet::from_keys(["A1", "C8"]);
        assert_eq!(total_combinations(&config()), 6);
        assert_eq!(available_combinations(&config(), &drawn), vec!["A2", "A3", "B1", "C7"]);
    }

    #[test]
    fn test_stored_record_shape() {
        let json = serde_json::to_string(&CategoryConfig::new("A", ["1", "2"])).unwrap();
        assert_eq!(json, r#"{"alphabet":"A","digits":["1","2"]}"#);
    }

    #[test]
    fn test_result_key_has_no_separator() {
        let result = DrawResult::new("A", "12");
        assert_eq!(result.key(), "A12");
        assert_eq!(result.to_string(), "A12");
    }
}
