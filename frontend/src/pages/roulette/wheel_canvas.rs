use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const CANVAS_SIZE: u32 = 400;
const LABEL_RADIUS_RATIO: f64 = 0.65;
const PLACEHOLDER_SEGMENTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelColor {
    Blue,
    Green,
}

struct Palette {
    primary: &'static str,
    secondary: &'static str,
    pointer: &'static str,
}

impl WheelColor {
    fn palette(&self) -> Palette {
        match self {
            WheelColor::Blue => Palette {
                primary: "#3b82f6",
                secondary: "#60a5fa",
                pointer: "#1e40af",
            },
            WheelColor::Green => Palette {
                primary: "#10b981",
                secondary: "#34d399",
                pointer: "#047857",
            },
        }
    }
}

/// Where segment `index` begins, in degrees clockwise from 12 o'clock, once the wheel is
/// turned `angle` degrees clockwise.
pub fn segment_start_degrees(index: usize, count: usize, angle: f64) -> f64 {
    let span = 360.0 / count.max(1) as f64;
    (index as f64 * span + angle).rem_euclid(360.0)
}

fn to_canvas_radians(clock_degrees: f64) -> f64 {
    (clock_degrees - 90.0) * PI / 180.0
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn draw_wheel(context: &CanvasRenderingContext2d, segments: &[String], angle: f64, color: WheelColor) {
    let palette = color.palette();
    let size = CANVAS_SIZE as f64;
    let center = size / 2.0;
    let radius = center - 12.0;

    context.clear_rect(0.0, 0.0, size, size);

    let placeholder: Vec<String>;
    let labels: &[String] = if segments.is_empty() {
        placeholder = vec!["?".to_string(); PLACEHOLDER_SEGMENTS];
        &placeholder
    } else {
        segments
    };
    let count = labels.len();
    let span = 360.0 / count as f64;

    context.set_stroke_style_str("#ffffff");
    context.set_line_width(2.0);
    for (index, label) in labels.iter().enumerate() {
        let start = segment_start_degrees(index, count, angle);
        context.begin_path();
        context.set_fill_style_str(if index % 2 == 0 { palette.primary } else { palette.secondary });
        if count == 1 {
            let _ = context.arc(center, center, radius, 0.0, 2.0 * PI);
        } else {
            context.move_to(center, center);
            let _ = context.arc(
                center,
                center,
                radius,
                to_canvas_radians(start),
                to_canvas_radians(start + span),
            );
            context.close_path();
        }
        context.fill();
        context.stroke();

        let middle = to_canvas_radians(start + span / 2.0);
        let label_radius = if count == 1 { 0.0 } else { radius * LABEL_RADIUS_RATIO };
        context.set_fill_style_str("#ffffff");
        context.set_font("600 24px 'Segoe UI', Roboto, system-ui, sans-serif");
        context.set_text_align("center");
        context.set_text_baseline("middle");
        let _ = context.fill_text(
            label,
            center + label_radius * middle.cos(),
            center + label_radius * middle.sin(),
        );
    }

    // Hub
    context.begin_path();
    context.set_fill_style_str("#ffffff");
    let _ = context.arc(center, center, radius * 0.12, 0.0, 2.0 * PI);
    context.fill();

    // Fixed pointer at 12 o'clock
    context.begin_path();
    context.set_fill_style_str(palette.pointer);
    context.move_to(center - 18.0, 0.0);
    context.line_to(center + 18.0, 0.0);
    context.line_to(center, 30.0);
    context.close_path();
    context.fill();
}

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub segments: Vec<String>,
    pub angle: f64,
    pub color: WheelColor,
    pub disabled: bool,
    pub is_spinning: bool,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let color = props.color;
        use_effect_with(
            (props.segments.clone(), props.angle),
            move |(segments, angle)| {
                if let Some(context) = canvas_ref.cast::<HtmlCanvasElement>().as_ref().and_then(context_2d) {
                    draw_wheel(&context, segments, *angle, color);
                } else {
                    log::warn!("Wheel canvas has no 2d context");
                }
            },
        );
    }

    let status = if props.is_spinning {
        "Spinning..."
    } else if props.disabled {
        ""
    } else {
        "Ready to spin"
    };

    html! {
        <div class="flex flex-col items-center">
            <div class={classes!("relative", props.disabled.then_some("grayscale opacity-70"))}>
                <canvas
                    ref={canvas_ref}
                    width={CANVAS_SIZE.to_string()}
                    height={CANVAS_SIZE.to_string()}
                    class="max-w-full h-auto rounded-full shadow-2xl"
                />
            </div>
            <p class="mt-6 h-7 text-lg font-semibold text-white">{status}</p>
        </div>
    }
}
