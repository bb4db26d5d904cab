use shared::draw_model::{available_combinations, total_combinations};
use shared::{CategoryConfig, DrawnSet};
use yew::prelude::*;

use crate::styles;

/// Header counters of the roulette page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawCounts {
    pub total: usize,
    pub remaining: usize,
    pub drawn: usize,
}

impl DrawCounts {
    pub fn new(config: &[CategoryConfig], drawn: &DrawnSet) -> Self {
        Self {
            total: total_combinations(config),
            remaining: available_combinations(config, drawn).len(),
            drawn: drawn.len(),
        }
    }
}

/// `remaining` still counts the combination on screen, which is committed by this button.
pub fn next_draw_label(remaining: usize) -> &'static str {
    if remaining <= 1 {
        "All Done!"
    } else {
        "Next Draw"
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub combination: String,
    pub remaining: usize,
    pub on_next: Callback<()>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let onclick = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };

    html! {
        <div class="mt-12 text-center animate-fadeIn">
            <h2 class={classes!(styles::TEXT_H2, "mb-4")}>{"🎉 Lucky Draw Result"}</h2>
            <div class="inline-block p-8 rounded-3xl bg-gradient-to-r from-yellow-400 to-orange-400 border-4 border-orange-500 shadow-xl transform scale-110">
                <span class="text-8xl font-bold text-white drop-shadow-lg">{&props.combination}</span>
            </div>
            <div class="mt-10">
                <button
                    type="button"
                    class={classes!(styles::BUTTON_PRIMARY, "px-8", "text-lg")}
                    disabled={props.remaining == 0}
                    {onclick}
                >
                    {next_draw_label(props.remaining)}
                </button>
            </div>
        </div>
    }
}
