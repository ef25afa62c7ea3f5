//! Chart Components
//!
//! Bar and pie charts drawn onto HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Chart colors for different series
const SERIES_COLORS: [&str; 6] = [
    "#2196F3", // Blue (primary)
    "#4CAF50", // Green
    "#FF9800", // Orange
    "#F44336", // Red
    "#9C27B0", // Purple
    "#00BCD4", // Cyan
];

const BACKGROUND: &str = "#1f2937"; // gray-800
const GRID: &str = "#374151"; // gray-700
const AXIS_TEXT: &str = "#9ca3af"; // gray-400
const EMPTY_TEXT: &str = "#6b7280"; // gray-500

/// One labeled chart bucket.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// Labeled bar chart component
#[component]
pub fn BarChart(
    data: Vec<ChartPoint>,
    /// Bar fill color
    #[prop(default = "#2196F3")]
    color: &'static str,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Draw once the canvas is mounted
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_bar_chart(&canvas, &data, color);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="300"
            class="w-full h-64 rounded-lg"
        />
    }
}

/// Pie chart component with legend
#[component]
pub fn PieChart(data: Vec<ChartPoint>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    let data_for_draw = data.clone();
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_pie_chart(&canvas, &data_for_draw);
        }
    });

    view! {
        <div>
            <canvas
                node_ref=canvas_ref
                width="400"
                height="300"
                class="w-full h-64 rounded-lg"
            />

            // Legend
            <div class="flex justify-center flex-wrap gap-4 mt-4">
                {data
                    .into_iter()
                    .zip(SERIES_COLORS.iter().cycle())
                    .map(|(point, color)| view! {
                        <div class="flex items-center gap-2">
                            <span
                                class="w-3 h-3 rounded-full inline-block"
                                style=format!("background-color: {}", color)
                            />
                            <span class="text-sm text-gray-300">
                                {format!("{} {:.1}%", point.label, point.value)}
                            </span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
        _ => None,
    }
}

fn clear_canvas(ctx: &CanvasRenderingContext2d, w: f64, h: f64) {
    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, w, h);
}

fn draw_empty_message(ctx: &CanvasRenderingContext2d, w: f64, h: f64) {
    ctx.set_fill_style(&EMPTY_TEXT.into());
    ctx.set_font("16px sans-serif");
    let _ = ctx.fill_text("No data", w / 2.0 - 30.0, h / 2.0);
}

/// Draw labeled bars on canvas
fn draw_bar_chart(canvas: &HtmlCanvasElement, data: &[ChartPoint], color: &str) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    clear_canvas(&ctx, w, h);

    if data.is_empty() {
        draw_empty_message(&ctx, w, h);
        return;
    }

    // Plot area inside the axis gutters
    let (left, right, top, bottom) = (50.0, 20.0, 20.0, 40.0);
    let plot_w = w - left - right;
    let plot_h = h - top - bottom;

    let top_value = data
        .iter()
        .map(|p| p.value)
        .fold(0.0_f64, f64::max)
        .max(1.0);

    // Horizontal grid with y-axis labels
    ctx.set_stroke_style(&GRID.into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    let rows = 5;
    for i in 0..=rows {
        let frac = i as f64 / rows as f64;
        let y = top + frac * plot_h;
        ctx.begin_path();
        ctx.move_to(left, y);
        ctx.line_to(w - right, y);
        ctx.stroke();

        ctx.set_fill_style(&AXIS_TEXT.into());
        let _ = ctx.fill_text(&format!("{:.0}", top_value * (1.0 - frac)), 5.0, y + 4.0);
    }

    // Bars fill 60% of their slot, centered
    let slot = plot_w / data.len() as f64;
    let bar_w = (slot * 0.6).max(2.0);
    ctx.set_fill_style(&color.into());
    for (i, point) in data.iter().enumerate() {
        let bar_h = (point.value / top_value) * plot_h;
        let x = left + i as f64 * slot + (slot - bar_w) / 2.0;
        ctx.fill_rect(x, top + plot_h - bar_h, bar_w, bar_h);
    }

    // X-axis labels, thinned out when buckets are dense
    ctx.set_fill_style(&AXIS_TEXT.into());
    let step = (data.len() / 12).max(1);
    for (i, point) in data.iter().enumerate().step_by(step) {
        let x = left + i as f64 * slot + slot / 2.0;
        let _ = ctx.fill_text(&point.label, x - 12.0, h - 10.0);
    }
}

/// Draw proportional slices on canvas
fn draw_pie_chart(canvas: &HtmlCanvasElement, data: &[ChartPoint]) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    clear_canvas(&ctx, w, h);

    let total: f64 = data.iter().map(|p| p.value).sum();
    if total <= 0.0 {
        draw_empty_message(&ctx, w, h);
        return;
    }

    let cx = w / 2.0;
    let cy = h / 2.0;
    let radius = (w.min(h) / 2.0) - 20.0;

    // Slices start at twelve o'clock
    let mut angle = -std::f64::consts::FRAC_PI_2;
    for (point, color) in data.iter().zip(SERIES_COLORS.iter().cycle()) {
        let sweep = (point.value / total) * std::f64::consts::TAU;

        ctx.set_fill_style(&(*color).into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, angle, angle + sweep);
        ctx.close_path();
        ctx.fill();

        angle += sweep;
    }
}
