//! # Chart & Meter Rendering
//! Static presentation of a [`MeterReading`]: HTML fragments for the browser
//! shell and fixed-width text for the CLI.
//!
//! The HTML output is a plain string the hosting page drops into a container;
//! there is no interactivity. Labels are user text and are always escaped.

use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::engine::MeterReading;

/// Bar chart rendering options.
#[derive(Debug, Clone, Copy)]
pub struct ChartOptions {
    /// Cap on rendered rows; remaining entries are dropped.
    pub max_bars: usize,
    /// Render the percentage column.
    pub show_percent: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            max_bars: 5,
            show_percent: true,
        }
    }
}

/// Render ranked entries as a `.bar-chart` HTML fragment.
///
/// Bar width is the probability as a percentage, floored at 0.5 so that
/// near-zero bars stay visible. Percentages show one decimal place.
pub fn render_bar_chart(reading: &MeterReading, opts: &ChartOptions) -> String {
    let mut html = String::from("<div class=\"bar-chart\">");

    for entry in reading.entries.iter().take(opts.max_bars) {
        let percent = entry.probability * 100.0;
        let width = percent.max(0.5);
        let text_label = encode_text(&entry.label);
        let attr_label = encode_double_quoted_attribute(&entry.label);
        let value = if opts.show_percent {
            format!("{:.1}%", percent)
        } else {
            String::new()
        };

        let _ = write!(
            html,
            "<div class=\"bar-row\">\
             <div class=\"bar-label\" title=\"{attr_label}\">{text_label}</div>\
             <div class=\"bar-wrapper\"><div class=\"bar-fill\" style=\"width: {width}%\"></div></div>\
             <div class=\"bar-value\">{value}</div>\
             </div>",
        );
    }

    html.push_str("</div>");
    html
}

/// Render the confidence meter fragment: fill, numeric value, band label, and
/// rationale. The fill element covers the track from the right, so its width
/// is `100 - confidence`.
pub fn render_meter(reading: &MeterReading) -> String {
    let band = match reading.judgment.band {
        crate::verdict::Band::High => "high",
        crate::verdict::Band::Medium => "medium",
        crate::verdict::Band::Low => "low",
    };

    let mut html = String::from("<div class=\"confidence-meter\">");
    let _ = write!(
        html,
        "<div class=\"meter-track\"><div class=\"meter-fill\" style=\"width: {:.1}%\"></div></div>\
         <div class=\"confidence-value\">{:.1}%</div>\
         <div class=\"confidence-label {band}\">{}</div>\
         <div class=\"confidence-reason {band}\">{}</div>",
        100.0 - reading.confidence,
        reading.confidence,
        encode_text(&reading.judgment.label),
        encode_text(&reading.judgment.reason),
    );
    html.push_str("</div>");
    html
}

/// Plain-text table + meter for terminal output.
pub fn render_text(reading: &MeterReading, opts: &ChartOptions) -> String {
    const BAR_WIDTH: usize = 30;

    let mut out = String::new();
    let label_width = reading
        .entries
        .iter()
        .take(opts.max_bars)
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0);

    for entry in reading.entries.iter().take(opts.max_bars) {
        let filled = (entry.probability * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        let _ = writeln!(
            out,
            "{:<label_width$}  {}{}  {:>5.1}%  (score {})",
            entry.label,
            "#".repeat(filled),
            "-".repeat(BAR_WIDTH - filled),
            entry.probability * 100.0,
            entry.score,
        );
    }

    let _ = writeln!(
        out,
        "\nconfidence: {:.1}%  [{}]  {}",
        reading.confidence, reading.judgment.label, reading.judgment.reason
    );
    let _ = writeln!(
        out,
        "temperature: {}  ({})",
        reading.temperature,
        reading.regime.describe()
    );
    out
}
