use shared::validation::{error_message, remove_category, validate_config_ready};
use shared::CategoryConfig;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::FireflyParticles;
use crate::hooks::use_setup_form;
use crate::storage;
use crate::styles;
use crate::Route;

fn persist(config: &UseStateHandle<Vec<CategoryConfig>>, updated: Vec<CategoryConfig>) {
    if let Err(e) = storage::repository().save_config(&updated) {
        log::error!("Failed to save configuration: {}", e);
    }
    config.set(updated);
}

#[function_component(Setup)]
pub fn setup() -> Html {
    let navigator = use_navigator();
    let config = use_state(|| storage::repository().load_config());
    let form = use_setup_form();

    let on_submit = {
        let config = config.clone();
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(updated) = form.submit(&config) {
                persist(&config, updated);
            }
        })
    };

    let on_cancel_edit = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.clear())
    };

    let on_start = {
        let config = config.clone();
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = validate_config_ready(&config) {
                form.set_error(error_message(&e));
                return;
            }
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Roulette);
            }
        })
    };

    html! {
        <div class={styles::PAGE}>
            <style>{styles::CUSTOM_CSS}</style>
            <FireflyParticles />
            <div class={classes!(styles::PAGE_INNER, "max-w-3xl", "space-y-6")}>
                <h1 class={classes!(styles::TEXT_H1, "mb-8")}>{"🎡 Lucky Draw Setup"}</h1>

                <form class={styles::CARD} onsubmit={on_submit}>
                    <h2 class={classes!(styles::TEXT_H2, "mb-4")}>
                        { if form.is_editing() { "Edit Category" } else { "Add Category & Values" } }
                    </h2>
                    <div class="space-y-4">
                        <div>
                            <label for="category" class={styles::TEXT_LABEL}>{"Category letter (e.g., A)"}</label>
                            <input
                                id="category"
                                type="text"
                                maxlength="1"
                                placeholder="Enter a single letter"
                                class={styles::INPUT}
                                value={(*form.category_input).clone()}
                                oninput={let input = form.category_input.clone(); move |e: InputEvent| {
                                    let target: HtmlInputElement = e.target_unchecked_into();
                                    input.set(target.value());
                                }}
                            />
                        </div>
                        <div>
                            <label for="values" class={styles::TEXT_LABEL}>{"Values (comma-separated)"}</label>
                            <input
                                id="values"
                                type="text"
                                placeholder="e.g., 1, 2, 3"
                                class={styles::INPUT}
                                value={(*form.values_input).clone()}
                                oninput={let input = form.values_input.clone(); move |e: InputEvent| {
                                    let target: HtmlInputElement = e.target_unchecked_into();
                                    input.set(target.value());
                                }}
                            />
                        </div>

                        if !form.error.is_empty() {
                            <div class={styles::ALERT_ERROR}>
                                <p>{&*form.error}</p>
                            </div>
                        }

                        <div class="flex gap-3">
                            <button type="submit" class={classes!(styles::BUTTON_PRIMARY, "flex-1")}>
                                { if form.is_editing() { "Update Category" } else { "➕ Add Category" } }
                            </button>
                            if form.is_editing() {
                                <button type="button" class={styles::BUTTON_SECONDARY} onclick={on_cancel_edit}>
                                    {"Cancel"}
                                </button>
                            }
                        </div>
                    </div>
                </form>

                if !config.is_empty() {
                    <div class={styles::CARD}>
                        <h2 class={classes!(styles::TEXT_H2, "mb-4")}>{"Configured Categories"}</h2>
                        <div class="space-y-3">
                            { for config.iter().enumerate().map(|(index, item)| {
                                let on_edit = {
                                    let form = form.clone();
                                    let item = item.clone();
                                    Callback::from(move |_: MouseEvent| form.begin_edit(index, &item))
                                };
                                let on_delete = {
                                    let config = config.clone();
                                    let form = form.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        if *form.edit_index == Some(index) {
                                            form.clear();
                                        }
                                        persist(&config, remove_category(&config, index));
                                    })
                                };
                                html! {
                                    <div key={item.category.clone()} class={styles::CARD_ITEM}>
                                        <span class="text-3xl font-bold text-blue-400 w-12">{&item.category}</span>
                                        <div class="flex-1 flex flex-wrap gap-2">
                                            { for item.values.iter().map(|value| html! {
                                                <span class={styles::TOKEN_CHIP}>{value}</span>
                                            }) }
                                        </div>
                                        <button type="button" class={styles::BUTTON_ICON} title="Edit" onclick={on_edit}>
                                            {"⚙"}
                                        </button>
                                        <button type="button" class={styles::BUTTON_DANGER_ICON} title="Delete" onclick={on_delete}>
                                            {"🗑"}
                                        </button>
                                    </div>
                                }
                            }) }
                        </div>
                    </div>
                }

                <div class="text-center">
                    <button
                        type="button"
                        class={classes!(styles::BUTTON_PRIMARY, "px-12", "py-4", "text-xl")}
                        disabled={config.is_empty()}
                        onclick={on_start}
                    >
                        {"Start Lucky Draw 🎉"}
                    </button>
                </div>
            </div>
        </div>
    }
}
