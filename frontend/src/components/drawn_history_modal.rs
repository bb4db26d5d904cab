use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct DrawnHistoryModalProps {
    pub drawn: Vec<String>,
    pub is_open: bool,
    pub on_close: Callback<()>,
}

/// Every combination drawn so far, oldest first. Clicking outside the panel closes it.
#[function_component(DrawnHistoryModal)]
pub fn drawn_history_modal(props: &DrawnHistoryModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={styles::MODAL_BACKDROP} onclick={on_close.clone()}>
            <div
                class={classes!(styles::MODAL, "animate-fadeIn")}
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <div class="flex items-center justify-between px-6 py-4 border-b border-white/10">
                    <h3 class={styles::TEXT_H2}>{format!("Drawn History ({})", props.drawn.len())}</h3>
                    <button type="button" class={styles::BUTTON_ICON} onclick={on_close}>
                        {"✕"}
                    </button>
                </div>
                <div class="p-6">
                    if props.drawn.is_empty() {
                        <p class={classes!(styles::TEXT_SMALL, "text-center", "py-8")}>
                            {"Start spinning to see results here!"}
                        </p>
                    } else {
                        <ol class="grid grid-cols-3 sm:grid-cols-4 gap-3">
                            { for props.drawn.iter().enumerate().map(|(i, key)| html! {
                                <li key={key.clone()} class="flex flex-col items-center rounded-lg bg-white/5 py-2">
                                    <span class="text-xs text-gray-500">{format!("#{}", i + 1)}</span>
                                    <span class="text-lg font-bold text-white">{key}</span>
                                </li>
                            }) }
                        </ol>
                    }
                </div>
            </div>
        </div>
    }
}
