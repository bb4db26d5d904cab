use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PowerMeterProps {
    pub label: AttrValue,
    pub power: f64,
    pub is_holding: bool,
}

#[function_component(PowerMeter)]
pub fn power_meter(props: &PowerMeterProps) -> Html {
    let power = props.power.clamp(0.0, 100.0);
    let bar_class = if power >= 80.0 {
        "from-orange-400 to-red-500"
    } else if power >= 40.0 {
        "from-yellow-300 to-orange-400"
    } else {
        "from-green-300 to-yellow-300"
    };

    html! {
        <div class="w-full max-w-xs mx-auto">
            <div class="flex justify-between text-xs text-gray-400 mb-1">
                <span>{props.label.clone()}</span>
                <span class={classes!(props.is_holding.then_some("text-yellow-300 font-semibold"))}>
                    {format!("⚡ Power: {:.0}%", power)}
                </span>
            </div>
            <div class="h-3 w-full rounded-full bg-gray-800 overflow-hidden">
                <div
                    class={classes!("h-full", "rounded-full", "bg-gradient-to-r", bar_class)}
                    style={format!("width: {:.1}%;", power)}
                ></div>
            </div>
        </div>
    }
}
