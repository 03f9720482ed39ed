use crate::models::HabitStat;
use crate::ui::escape_html;
use std::fmt::Write;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 260.0;
const PAD_LEFT: f64 = 48.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 40.0;
const Y_MAX: f64 = 100.0;
const Y_STEP: usize = 20;

const FILLS: [&str; 7] = [
    "rgba(52, 152, 219, 0.8)",
    "rgba(155, 89, 182, 0.8)",
    "rgba(46, 204, 113, 0.8)",
    "rgba(241, 196, 15, 0.8)",
    "rgba(230, 126, 34, 0.8)",
    "rgba(231, 76, 60, 0.8)",
    "rgba(149, 165, 166, 0.8)",
];
const STROKES: [&str; 7] = [
    "rgb(52, 152, 219)",
    "rgb(155, 89, 182)",
    "rgb(46, 204, 113)",
    "rgb(241, 196, 15)",
    "rgb(230, 126, 34)",
    "rgb(231, 76, 60)",
    "rgb(149, 165, 166)",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    /// Completion rate in percent, clamped to the axis.
    pub value: f64,
}

/// Bar chart of per-habit completion rates. A new instance replaces the
/// previous one on every analytics load; `generation` tells them apart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub generation: u64,
    pub bars: Vec<Bar>,
}

impl BarChart {
    /// Returns `None` when there is nothing to plot.
    pub fn from_stats(generation: u64, stats: &[HabitStat]) -> Option<Self> {
        if stats.is_empty() {
            return None;
        }
        let bars = stats
            .iter()
            .map(|stat| Bar {
                label: stat.habit_name.clone(),
                value: clamp_rate(stat.completion_rate),
            })
            .collect();
        Some(Self { generation, bars })
    }

    pub fn y_ticks() -> impl Iterator<Item = (f64, String)> {
        (0..=Y_MAX as usize)
            .step_by(Y_STEP)
            .map(|tick| (tick as f64, format!("{tick}%")))
    }

    pub fn render_svg(&self) -> String {
        let plot_w = WIDTH - PAD_LEFT - PAD_RIGHT;
        let plot_h = HEIGHT - PAD_TOP - PAD_BOTTOM;
        let y_of = |value: f64| PAD_TOP + plot_h - value / Y_MAX * plot_h;

        let mut svg = format!(
            r#"<svg id="progress-chart" data-generation="{}" viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="Share of days without the habit">"#,
            self.generation
        );

        for (value, label) in Self::y_ticks() {
            let y = y_of(value);
            let _ = write!(
                svg,
                r#"<line class="chart-grid" x1="{PAD_LEFT}" x2="{:.1}" y1="{y:.1}" y2="{y:.1}"/><text class="chart-label" x="{:.1}" y="{:.1}" text-anchor="end">{label}</text>"#,
                WIDTH - PAD_RIGHT,
                PAD_LEFT - 6.0,
                y + 4.0,
            );
        }

        let slot = plot_w / self.bars.len() as f64;
        let bar_w = slot * 0.6;
        for (index, bar) in self.bars.iter().enumerate() {
            let x = PAD_LEFT + slot * index as f64 + (slot - bar_w) / 2.0;
            let top = y_of(bar.value);
            let label = escape_html(&bar.label);
            let _ = write!(
                svg,
                r#"<rect class="chart-bar" x="{x:.1}" y="{top:.1}" width="{bar_w:.1}" height="{:.1}" fill="{}" stroke="{}" stroke-width="2"><title>{label}: {}% of days without the habit</title></rect><text class="chart-label" x="{:.1}" y="{:.1}" text-anchor="middle">{label}</text>"#,
                PAD_TOP + plot_h - top,
                FILLS[index % FILLS.len()],
                STROKES[index % STROKES.len()],
                format_rate(bar.value),
                x + bar_w / 2.0,
                HEIGHT - PAD_BOTTOM + 18.0,
            );
        }

        svg.push_str("</svg>");
        svg
    }
}

pub fn clamp_rate(rate: f64) -> f64 {
    if rate.is_nan() { 0.0 } else { rate.clamp(0.0, Y_MAX) }
}

/// `43.3` stays `43.3`, `50.0` prints as `50`.
pub fn format_rate(rate: f64) -> String {
    let rounded = (rate * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded:.1}")
    }
}
