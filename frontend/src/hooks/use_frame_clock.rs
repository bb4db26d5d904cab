use gloo_render::request_animation_frame;
use yew::prelude::*;

/// Longest step handed to the simulation. Frames after a stall are capped to this.
const MAX_FRAME_SECONDS: f64 = 0.1;

/// Calls `on_frame` with the seconds elapsed since the previous animation frame, for as long
/// as `active` holds. The first frame after activation only records its timestamp.
#[hook]
pub fn use_frame_clock(active: bool, on_frame: Callback<f64>) {
    let frame_count = use_state(|| 0u64);
    let last_timestamp = use_mut_ref(|| None::<f64>);

    {
        let frame_count = frame_count.clone();
        let last_timestamp = last_timestamp.clone();

        // One frame in flight at a time. Each frame bumps the counter, which requests the next.
        use_effect_with((active, *frame_count), move |(active, _)| {
            let frame = if *active {
                Some(request_animation_frame(move |timestamp| {
                    let previous = last_timestamp.borrow_mut().replace(timestamp);
                    if let Some(previous) = previous {
                        let elapsed = ((timestamp - previous) / 1000.0).clamp(0.0, MAX_FRAME_SECONDS);
                        on_frame.emit(elapsed);
                    }
                    frame_count.set(*frame_count + 1);
                }))
            } else {
                last_timestamp.borrow_mut().take();
                None
            };

            move || drop(frame)
        });
    }
}
