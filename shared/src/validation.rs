use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::constants::*;
use crate::draw_model::{CategoryConfig, Token};

static CATEGORY_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\p{Lu}$").expect("valid category pattern"));

pub fn normalize_category(input: &str) -> String {
    input.trim().to_uppercase()
}

pub fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category.is_empty() {
        return Err(ValidationError::new("category_required"));
    }
    if !CATEGORY_PATTERN.is_match(category) {
        return Err(ValidationError::new("invalid_category_format"));
    }
    Ok(())
}

/// Splits a comma separated list of values, dropping blanks.
pub fn parse_values(input: &str) -> Result<Vec<Token>, ValidationError> {
    let values: Vec<Token> = input
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect();

    if values.len() < MIN_VALUES_PER_CATEGORY {
        return Err(ValidationError::new("values_required"));
    }
    if values.len() > MAX_VALUES_PER_CATEGORY {
        return Err(ValidationError::new("too_many_values"));
    }
    for (i, value) in values.iter().enumerate() {
        if values[..i].contains(value) {
            return Err(ValidationError::new("duplicate_values"));
        }
    }
    Ok(values)
}

/// Builds a configuration entry from the raw setup form inputs.
pub fn build_category(category_input: &str, values_input: &str) -> Result<CategoryConfig, ValidationError> {
    let category = normalize_category(category_input);
    validate_category(&category)?;
    let values = parse_values(values_input)?;
    Ok(CategoryConfig { category, values })
}

/// Adds `item`, or replaces the entry at `edit_index`. Category letters stay unique.
pub fn upsert_category(
    config: &[CategoryConfig],
    edit_index: Option<usize>,
    item: CategoryConfig,
) -> Result<Vec<CategoryConfig>, ValidationError> {
    let duplicate = config
        .iter()
        .enumerate()
        .any(|(i, existing)| Some(i) != edit_index && existing.category == item.category);
    if duplicate {
        return Err(ValidationError::new("duplicate_category"));
    }

    let mut updated = config.to_vec();
    match edit_index {
        Some(index) if index < updated.len() => updated[index] = item,
        _ => updated.push(item),
    }
    Ok(updated)
}

pub fn remove_category(config: &[CategoryConfig], index: usize) -> Vec<CategoryConfig> {
    config
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| item.clone())
        .collect()
}

pub fn validate_config_ready(config: &[CategoryConfig]) -> Result<(), ValidationError> {
    if config.is_empty() {
        return Err(ValidationError::new("config_empty"));
    }
    Ok(())
}

/// User facing message for a setup validation error.
pub fn error_message(error: &ValidationError) -> &'static str {
    match &*error.code {
        "category_required" => CATEGORY_REQUIRED_ERROR,
        "invalid_category_format" => CATEGORY_FORMAT_ERROR,
        "duplicate_category" => CATEGORY_DUPLICATE_ERROR,
        "values_required" => VALUES_REQUIRED_ERROR,
        "duplicate_values" => VALUES_DUPLICATE_ERROR,
        "too_many_values" => VALUES_TOO_MANY_ERROR,
        _ => CONFIG_EMPTY_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_category_normalizes_input() {
        let item = build_category(" a ", " 1, 2 ,,3 ").unwrap();
        assert_eq!(item, CategoryConfig::new("A", ["1", "2", "3"]));
    }

    #[test]
    fn test_category_must_be_one_letter() {
        assert_eq!(build_category("", "1").unwrap_err().code, "category_required");
        assert_eq!(build_category("AB", "1").unwrap_err().code, "invalid_category_format");
        assert_eq!(build_category("7", "1").unwrap_err().code, "invalid_category_format");
    }

    #[test]
    fn test_values_rules() {
        assert_eq!(parse_values(" , ,").unwrap_err().code, "values_required");
        assert_eq!(parse_values("1, 2, 1").unwrap_err().code, "duplicate_values");
        let many = (0..=MAX_VALUES_PER_CATEGORY).map(|i| i.to_string()).collect::<Vec<_>>().join(",");
        assert_eq!(parse_values(&many).unwrap_err().code, "too_many_values");
    }

    #[test]
    fn test_upsert_rejects_duplicate_category() {
        let config = vec![CategoryConfig::new("A", ["1"]), CategoryConfig::new("B", ["2"])];
        let err = upsert_category(&config, None, CategoryConfig::new("A", ["3"])).unwrap_err();
        assert_eq!(error_message(&err), CATEGORY_DUPLICATE_ERROR);
        assert!(upsert_category(&config, Some(1), CategoryConfig::new("A", ["3"])).is_err());
    }

    #[test]
    fn test_upsert_edits_in_place() {
        let config = vec![CategoryConfig::new("A", ["1"]), CategoryConfig::new("B", ["2"])];
        let updated = upsert_category(&config, Some(0), CategoryConfig::new("A", ["1", "4"])).unwrap();
        assert_eq!(updated[0].values, vec!["1", "4"]);
        assert_eq!(updated.len(), 2);
        let appended = upsert_category(&config, None, CategoryConfig::new("C", ["5"])).unwrap();
        assert_eq!(appended.last().map(|c| c.category.as_str()), Some("C"));
    }

    #[test]
    fn test_remove_and_ready() {
        let config = vec![CategoryConfig::new("A", ["1"])];
        let removed = remove_category(&config, 0);
        assert!(removed.is_empty());
        assert!(validate_config_ready(&removed).is_err());
        assert!(validate_config_ready(&config).is_ok());
    }
}
