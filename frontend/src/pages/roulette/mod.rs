mod roulette_utils;
mod wheel_canvas;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use shared::power_charger::Release;
use shared::{DrawSession, DrawnSet, RoundEvent, SessionEvent, WheelKind};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::audio::{AudioBank, AudioCue};
use crate::components::{ButtonColor, DrawnHistoryModal, FireflyParticles, PowerMeter, SpinPowerButton};
use crate::config::get_tuning;
use crate::hooks::use_frame_clock;
use crate::storage;
use crate::styles;
use crate::Route;

use roulette_utils::{DrawCounts, ResultDisplay};
use wheel_canvas::{WheelCanvas, WheelColor};

const MERGE_DELAY_MS: u32 = 800;
const RESULT_DELAY_MS: u32 = 600;

fn start_session(drawn: &DrawnSet) -> Option<DrawSession> {
    let config = storage::repository().load_config();
    match DrawSession::start(config, drawn, get_tuning()) {
        Ok(session) => Some(session),
        Err(e) => {
            log::error!("Failed to start draw session: {}", e);
            None
        }
    }
}

fn needs_frames(session: &DrawSession) -> bool {
    [WheelKind::Category, WheelKind::Value]
        .iter()
        .any(|kind| session.charger(*kind).is_charging() || session.wheel(*kind).is_spinning())
}

/// Plays the reveal: both tokens slide together, then the result replaces the wheels.
fn reveal_after_merge(audio: Rc<RefCell<AudioBank>>, merging: UseStateHandle<bool>, show_result: UseStateHandle<bool>) {
    spawn_local(async move {
        TimeoutFuture::new(MERGE_DELAY_MS).await;
        audio.borrow().play(AudioCue::Merge, 0.3);
        merging.set(true);
        TimeoutFuture::new(RESULT_DELAY_MS).await;
        show_result.set(true);
    });
}

struct WheelColumn {
    kind: WheelKind,
    label: &'static str,
    color: WheelColor,
}

const WHEEL_COLUMNS: [WheelColumn; 2] = [
    WheelColumn {
        kind: WheelKind::Category,
        label: "Category Wheel",
        color: WheelColor::Blue,
    },
    WheelColumn {
        kind: WheelKind::Value,
        label: "Value Wheel",
        color: WheelColor::Green,
    },
];

fn render_wheel_column(
    column: &WheelColumn,
    session: &DrawSession,
    merging: bool,
    on_press: &Callback<WheelKind>,
    on_release: &Callback<WheelKind>,
) -> Html {
    let wheel = session.wheel(column.kind);
    let charger = session.charger(column.kind);
    let is_holding = charger.is_charging();

    let (picked, merge_class, token_class, button_color) = match column.kind {
        WheelKind::Category => (
            session.selected_category().cloned(),
            "animate-merge-right",
            "text-purple-600",
            ButtonColor::Blue,
        ),
        WheelKind::Value => (
            session.result().map(|result| result.value.clone()),
            "animate-merge-left",
            "text-emerald-600",
            ButtonColor::Green,
        ),
    };
    let picked = picked.filter(|_| !wheel.is_spinning());
    let is_waiting = column.kind == WheelKind::Value && session.selected_category().is_none();

    let kind = column.kind;
    let on_press = {
        let on_press = on_press.clone();
        Callback::from(move |_: ()| on_press.emit(kind))
    };
    let on_release = {
        let on_release = on_release.clone();
        Callback::from(move |_: ()| on_release.emit(kind))
    };

    html! {
        <div class="relative">
            <PowerMeter label={column.label} power={charger.value()} {is_holding} />
            <div class="relative mt-4">
                <WheelCanvas
                    segments={wheel.segments().to_vec()}
                    angle={wheel.angle()}
                    color={column.color}
                    disabled={!wheel.is_enabled()}
                    is_spinning={wheel.is_spinning()}
                />
                if let Some(token) = picked {
                    <div
                        key={token.clone()}
                        class={classes!(
                            "absolute", "left-1/2", "top-[calc(50%-40px)]", "z-20",
                            "-translate-x-1/2", "-translate-y-1/2", "animate-fadeIn",
                            merging.then_some(merge_class),
                        )}
                    >
                        <div class="min-w-[145px] h-[145px] bg-white rounded-2xl shadow-2xl p-8 flex items-center justify-center">
                            <span class={classes!("text-7xl", "font-bold", token_class)}>{token}</span>
                        </div>
                    </div>
                }
            </div>
            <div class="text-center my-6">
                <SpinPowerButton
                    color={button_color}
                    {is_holding}
                    disabled={!is_holding && !wheel.can_launch()}
                    {is_waiting}
                    {on_press}
                    {on_release}
                />
            </div>
        </div>
    }
}

#[function_component(Roulette)]
pub fn roulette() -> Html {
    let navigator = use_navigator();
    let config = use_state(|| storage::repository().load_config());
    let drawn = use_state(|| storage::repository().load_drawn());
    let session = {
        let drawn = (*drawn).clone();
        use_mut_ref(move || start_session(&drawn))
    };
    let audio = use_mut_ref(AudioBank::new);
    let show_result = use_state(|| false);
    let merging = use_state(|| false);
    let show_history = use_state(|| false);
    let force_update = use_force_update();

    // Pause every cue when leaving the page
    {
        let audio = audio.clone();
        use_effect_with((), move |_| move || audio.borrow_mut().pause_all());
    }

    // Fanfare plays while the result is on screen
    {
        let audio = audio.clone();
        let drawn_count = drawn.len();
        use_effect_with(*show_result, move |show_result| {
            if *show_result {
                audio.borrow_mut().play_winner_sequence(drawn_count);
            }
            move || audio.borrow_mut().stop_winner_sequence()
        });
    }

    let on_frame = {
        let session = session.clone();
        let audio = audio.clone();
        let merging = merging.clone();
        let show_result = show_result.clone();
        let force_update = force_update.clone();
        Callback::from(move |elapsed: f64| {
            let events = {
                let mut session_ref = session.borrow_mut();
                let Some(session) = session_ref.as_mut() else {
                    return;
                };
                let events = session.tick(elapsed);
                let progress = session
                    .category_wheel()
                    .spin_progress()
                    .max(session.value_wheel().spin_progress());
                audio.borrow().sync_spin(progress);
                events
            };

            let auto_selected = events
                .iter()
                .any(|event| matches!(event, SessionEvent::ValueAutoSelected { .. }));
            for event in events {
                match event {
                    SessionEvent::Launched { wheel, power } => {
                        log::debug!("{:?} wheel launched at {:.0}%", wheel, power);
                        let audio = audio.borrow();
                        audio.play(AudioCue::Burst, 0.3);
                        audio.start_spin_loop();
                    }
                    SessionEvent::Stopped { wheel, token } => {
                        log::debug!("{:?} wheel stopped on {}", wheel, token);
                        let audio = audio.borrow();
                        audio.stop_spin_loop();
                        audio.play(AudioCue::SpinSuccess, 0.3);
                    }
                    SessionEvent::ValueWheelArmed { category, values } => {
                        log::debug!("Value wheel armed for {} with {} values", category, values);
                    }
                    SessionEvent::ValueAutoSelected { category, value } => {
                        log::info!("Only {}{} was left, skipping the value spin", category, value);
                    }
                    SessionEvent::Round(RoundEvent::Drawn(_)) => {
                        if auto_selected {
                            show_result.set(true);
                        } else {
                            reveal_after_merge(audio.clone(), merging.clone(), show_result.clone());
                        }
                    }
                    SessionEvent::Round(RoundEvent::Exhausted) => {
                        log::info!("Nothing left to draw");
                    }
                }
            }
            force_update.force_update();
        })
    };

    let frames_active = session.borrow().as_ref().map_or(false, needs_frames);
    use_frame_clock(frames_active, on_frame);

    let on_press = {
        let session = session.clone();
        let force_update = force_update.clone();
        Callback::from(move |kind: WheelKind| {
            if let Some(session) = session.borrow_mut().as_mut() {
                session.press(kind);
            }
            force_update.force_update();
        })
    };

    let on_release = {
        let session = session.clone();
        let force_update = force_update.clone();
        Callback::from(move |kind: WheelKind| {
            let release = session
                .borrow_mut()
                .as_mut()
                .map_or(Release::Ignored, |session| session.release(kind));
            if release == Release::Tap {
                log::debug!("{:?} press too short to launch", kind);
            }
            force_update.force_update();
        })
    };

    let on_next = {
        let session = session.clone();
        let audio = audio.clone();
        let config = config.clone();
        let drawn = drawn.clone();
        let show_result = show_result.clone();
        let merging = merging.clone();
        Callback::from(move |_: ()| {
            let mut updated = (*drawn).clone();
            let mut session_ref = session.borrow_mut();
            let Some(session) = session_ref.as_mut() else {
                return;
            };
            if session.commit(&mut updated).is_some() {
                if let Err(e) = storage::repository().save_drawn(&updated) {
                    log::error!("Failed to save drawn combinations: {}", e);
                }
            }
            {
                let mut audio = audio.borrow_mut();
                audio.stop_winner_sequence();
                audio.play(AudioCue::StartOver, 0.4);
            }
            if let Err(e) = session.next_round((*config).clone(), &updated) {
                log::warn!("Could not start the next round: {}", e);
            }
            drawn.set(updated);
            merging.set(false);
            show_result.set(false);
        })
    };

    let on_reset = {
        let audio = audio.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = storage::repository().reset() {
                log::error!("Failed to reset the draw: {}", e);
            }
            audio.borrow_mut().pause_all();
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Setup);
            }
        })
    };

    let on_show_history = {
        let show_history = show_history.clone();
        Callback::from(move |_: MouseEvent| show_history.set(true))
    };
    let on_close_history = {
        let show_history = show_history.clone();
        Callback::from(move |_: ()| show_history.set(false))
    };

    if config.is_empty() {
        return html! { <Redirect<Route> to={Route::Setup} /> };
    }

    let counts = DrawCounts::new(&config, &drawn);
    let session_ref = session.borrow();
    let result = session_ref
        .as_ref()
        .and_then(|s| s.result())
        .map(|result| result.key())
        .filter(|_| *show_result);
    let exhausted = session_ref.as_ref().map_or(true, |s| s.is_exhausted());

    html! {
        <div class={styles::PAGE}>
            <style>{styles::CUSTOM_CSS}</style>
            <FireflyParticles />
            <div class={styles::PAGE_INNER}>
                <div class="text-center mb-6">
                    <h1 class={classes!(styles::TEXT_H1, "text-5xl", "mb-4", "drop-shadow-lg")}>
                        { if *show_result { "🎉 Congratulations!" } else { "🎡 Spin to Win Magic" } }
                    </h1>
                    <div class="flex justify-center gap-3 flex-wrap">
                        <span class={classes!(styles::BADGE, "bg-blue-500/80", "text-white")}>
                            {format!("Total: {}", counts.total)}
                        </span>
                        <span class={classes!(styles::BADGE, "bg-green-500/80", "text-white")}>
                            {format!("Remaining: {}", counts.remaining)}
                        </span>
                        <button
                            type="button"
                            class={classes!(styles::BADGE, "bg-red-500/80", "text-white", "hover:bg-red-600", "cursor-pointer")}
                            onclick={on_show_history}
                        >
                            {format!("Drawn: {}", counts.drawn)}
                        </button>
                    </div>
                </div>

                if let Some(combination) = result {
                    <ResultDisplay {combination} remaining={counts.remaining} {on_next} />
                } else {
                    if exhausted {
                        <div class={classes!(styles::CARD, "text-center", "mb-8", "animate-fadeIn")}>
                            <p class="text-xl font-semibold text-gray-100">{"🎊 Every combination has been drawn!"}</p>
                            <p class={classes!(styles::TEXT_SMALL, "mt-2")}>{"Reset to set up a new draw."}</p>
                        </div>
                    }
                    <div class="grid md:grid-cols-2 gap-8">
                        { for WHEEL_COLUMNS.iter().filter_map(|column| {
                            session_ref
                                .as_ref()
                                .map(|session| render_wheel_column(column, session, *merging, &on_press, &on_release))
                        }) }
                    </div>
                    <div class="mt-12 text-center">
                        <button type="button" class={classes!(styles::BUTTON_SECONDARY, "mx-auto")} onclick={on_reset}>
                            {"↺ Reset & Setup"}
                        </button>
                    </div>
                }
            </div>
            <DrawnHistoryModal
                drawn={drawn.iter().map(str::to_string).collect::<Vec<_>>()}
                is_open={*show_history}
                on_close={on_close_history}
            />
        </div>
    }
}
