//! SVG bar-chart export.
//!
//! Writes two charts comparing policies over one input: average waiting
//! time and average turnaround time. Charts are emitted as self-contained
//! SVG documents, one file per chart.

use std::fs;
use std::io;
use std::path::Path;

use crate::metrics::RunMetrics;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 500;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_TOP: f64 = 60.0;
const PLOT_WIDTH: f64 = 690.0;
const PLOT_HEIGHT: f64 = 370.0;

/// Writes `waiting_time.svg` and `turnaround_time.svg` into `dir`,
/// creating the directory if needed.
pub fn save_charts(results: &[(String, RunMetrics)], dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;

    let waiting: Vec<(&str, f64)> = results
        .iter()
        .map(|(name, m)| (name.as_str(), m.avg_waiting))
        .collect();
    fs::write(
        dir.join("waiting_time.svg"),
        bar_chart("Average Waiting Time vs Algorithm", "Average Waiting Time", &waiting),
    )?;

    let turnaround: Vec<(&str, f64)> = results
        .iter()
        .map(|(name, m)| (name.as_str(), m.avg_turnaround))
        .collect();
    fs::write(
        dir.join("turnaround_time.svg"),
        bar_chart(
            "Average Turnaround Time vs Algorithm",
            "Average Turnaround Time",
            &turnaround,
        ),
    )
}

/// Renders one vertical bar chart as an SVG document.
fn bar_chart(title: &str, y_label: &str, values: &[(&str, f64)]) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\" \
         viewBox=\"0 0 {WIDTH} {HEIGHT}\">\n"
    ));
    svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");
    svg.push_str(&format!(
        "<text x=\"{}\" y=\"30\" text-anchor=\"middle\" font-family=\"sans-serif\" \
         font-size=\"20\">{title}</text>\n",
        f64::from(WIDTH) / 2.0
    ));
    svg.push_str(&format!(
        "<text x=\"20\" y=\"{}\" text-anchor=\"middle\" font-family=\"sans-serif\" \
         font-size=\"14\" transform=\"rotate(-90 20 {})\">{y_label}</text>\n",
        MARGIN_TOP + PLOT_HEIGHT / 2.0,
        MARGIN_TOP + PLOT_HEIGHT / 2.0
    ));

    // Axes.
    let axis_y = MARGIN_TOP + PLOT_HEIGHT;
    svg.push_str(&format!(
        "<line x1=\"{MARGIN_LEFT}\" y1=\"{MARGIN_TOP}\" x2=\"{MARGIN_LEFT}\" y2=\"{axis_y}\" \
         stroke=\"black\"/>\n"
    ));
    svg.push_str(&format!(
        "<line x1=\"{MARGIN_LEFT}\" y1=\"{axis_y}\" x2=\"{}\" y2=\"{axis_y}\" stroke=\"black\"/>\n",
        MARGIN_LEFT + PLOT_WIDTH
    ));

    let max_value = values
        .iter()
        .map(|(_, v)| *v)
        .fold(0.0f64, f64::max)
        .max(1.0);
    let slot = PLOT_WIDTH / values.len().max(1) as f64;
    let bar_width = slot * 0.6;

    for (i, (name, value)) in values.iter().enumerate() {
        let height = value / max_value * (PLOT_HEIGHT - 20.0);
        let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_width) / 2.0;
        let y = axis_y - height;
        let center = x + bar_width / 2.0;

        svg.push_str(&format!(
            "<rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{bar_width:.1}\" height=\"{height:.1}\" \
             fill=\"steelblue\"/>\n"
        ));
        svg.push_str(&format!(
            "<text x=\"{center:.1}\" y=\"{:.1}\" text-anchor=\"middle\" \
             font-family=\"sans-serif\" font-size=\"13\">{value:.2}</text>\n",
            y - 6.0
        ));
        svg.push_str(&format!(
            "<text x=\"{center:.1}\" y=\"{:.1}\" text-anchor=\"middle\" \
             font-family=\"sans-serif\" font-size=\"14\">{name}</text>\n",
            axis_y + 20.0
        ));
    }

    svg.push_str("</svg>\n");
    svg
}
