use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonColor {
    Blue,
    Green,
}

impl ButtonColor {
    fn classes(&self) -> &'static str {
        match self {
            ButtonColor::Blue => "from-blue-500 to-indigo-600 hover:from-blue-600 hover:to-indigo-700",
            ButtonColor::Green => "from-emerald-500 to-teal-600 hover:from-emerald-600 hover:to-teal-700",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinPowerButtonProps {
    pub color: ButtonColor,
    pub is_holding: bool,
    pub disabled: bool,
    #[prop_or(false)]
    pub is_waiting: bool,
    pub on_press: Callback<()>,
    pub on_release: Callback<()>,
}

fn button_text(props: &SpinPowerButtonProps) -> &'static str {
    if props.is_waiting {
        "WAITING..."
    } else if props.is_holding {
        "HOLD..."
    } else {
        "PRESS & HOLD"
    }
}

/// Press-and-hold button driving a power charger. Mouse and touch both work.
#[function_component(SpinPowerButton)]
pub fn spin_power_button(props: &SpinPowerButtonProps) -> Html {
    let disabled = props.disabled || props.is_waiting;

    let press = {
        let on_press = props.on_press.clone();
        move || {
            if !disabled {
                on_press.emit(());
            }
        }
    };
    let release = {
        let on_release = props.on_release.clone();
        let is_holding = props.is_holding;
        move || {
            if is_holding {
                on_release.emit(());
            }
        }
    };

    let onmousedown = {
        let press = press.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            press();
        })
    };
    let onmouseup = {
        let release = release.clone();
        Callback::from(move |_: MouseEvent| release())
    };
    let onmouseleave = {
        let release = release.clone();
        Callback::from(move |_: MouseEvent| release())
    };
    let ontouchstart = Callback::from(move |e: TouchEvent| {
        e.prevent_default();
        press();
    });
    let ontouchend = Callback::from(move |e: TouchEvent| {
        e.prevent_default();
        release();
    });

    let state_class = if disabled {
        "from-gray-600 to-gray-700 opacity-60 cursor-not-allowed"
    } else if props.is_holding {
        "scale-95 shadow-inner animate-pulse"
    } else {
        "shadow-lg hover:-translate-y-0.5"
    };

    html! {
        <button
            type="button"
            {disabled}
            {onmousedown}
            {onmouseup}
            {onmouseleave}
            {ontouchstart}
            {ontouchend}
            class={classes!(
                "w-full", "max-w-xs", "mx-auto", "block", "px-8", "py-4",
                "rounded-full", "font-bold", "text-lg", "text-white", "select-none",
                "bg-gradient-to-r", "transition-all", "duration-200", "focus:outline-none",
                (!disabled).then_some(props.color.classes()),
                state_class,
            )}
        >
            {button_text(props)}
        </button>
    }
}
