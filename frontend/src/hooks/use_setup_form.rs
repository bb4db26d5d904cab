use shared::validation::{build_category, error_message, upsert_category};
use shared::CategoryConfig;
use yew::prelude::*;

/// Inputs of the setup form plus the entry being edited, if any.
#[derive(Clone, PartialEq)]
pub struct SetupForm {
    pub category_input: UseStateHandle<String>,
    pub values_input: UseStateHandle<String>,
    pub edit_index: UseStateHandle<Option<usize>>,
    pub error: UseStateHandle<String>,
}

impl SetupForm {
    pub fn is_editing(&self) -> bool {
        self.edit_index.is_some()
    }

    pub fn begin_edit(&self, index: usize, item: &CategoryConfig) {
        self.category_input.set(item.category.clone());
        self.values_input.set(item.values.join(", "));
        self.edit_index.set(Some(index));
        self.error.set(String::new());
    }

    pub fn clear(&self) {
        self.category_input.set(String::new());
        self.values_input.set(String::new());
        self.edit_index.set(None);
        self.error.set(String::new());
    }

    pub fn set_error(&self, message: &str) {
        self.error.set(message.to_string());
    }

    /// Validates the inputs against `config` and returns the updated configuration.
    pub fn submit(&self, config: &[CategoryConfig]) -> Option<Vec<CategoryConfig>> {
        let result = build_category(&self.category_input, &self.values_input)
            .and_then(|item| upsert_category(config, *self.edit_index, item));
        match result {
            Ok(updated) => {
                self.clear();
                Some(updated)
            }
            Err(e) => {
                log::debug!("Setup form rejected: {}", e.code);
                self.set_error(error_message(&e));
                None
            }
        }
    }
}

#[hook]
pub fn use_setup_form() -> SetupForm {
    let category_input = use_state(String::new);
    let values_input = use_state(String::new);
    let edit_index = use_state(|| None::<usize>);
    let error = use_state(String::new);

    SetupForm {
        category_input,
        values_input,
        edit_index,
        error,
    }
}
