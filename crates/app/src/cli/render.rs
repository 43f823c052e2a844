//! Text rendering of spectrum views and LO sweeps

use rfplan_core::{
    AppConfig, AxisRange, BandRole, ChainOutput, Label, Language, SpectrumRow, SpectrumView,
};
use std::fmt::Write;

const INDENT: &str = "  ";
const MARKER: char = '|';
const LEGEND: [BandRole; 6] = [
    BandRole::Input,
    BandRole::Image,
    BandRole::If,
    BandRole::Sum,
    BandRole::Output,
    BandRole::Bypass,
];

fn glyph(role: BandRole) -> char {
    match role {
        BandRole::Input => '=',
        BandRole::Image => '~',
        BandRole::If => '#',
        BandRole::Sum => '+',
        BandRole::Output => '@',
        BandRole::Bypass => '-',
    }
}

/// Column of `value` on a chart `width` cells wide
fn column(range: &AxisRange, value: f64, width: usize) -> usize {
    let last = (width - 1) as f64;
    let col = (range.position(value) * last).round();
    if col.is_nan() {
        0
    } else {
        col.clamp(0.0, last) as usize
    }
}

/// Write `text` centred on `col` unless it would overlap earlier text.
/// Returns the first free column after the text.
fn place_text(cells: &mut [char], text: &str, col: usize, next_free: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() > cells.len() {
        return next_free;
    }

    let start = col
        .saturating_sub(chars.len() / 2)
        .min(cells.len() - chars.len());
    if start < next_free {
        return next_free;
    }

    cells[start..start + chars.len()].copy_from_slice(&chars);
    start + chars.len() + 1
}

fn plot_row(row: &SpectrumRow, range: &AxisRange, width: usize) -> String {
    let mut cells = vec![' '; width];

    for item in &row.bands {
        let a = column(range, item.band.start, width);
        let b = column(range, item.band.end, width);
        // narrow bands still get one cell
        for cell in &mut cells[a.min(b)..=a.max(b)] {
            *cell = glyph(item.role);
        }
    }
    for marker in &row.markers {
        cells[column(range, marker.freq, width)] = MARKER;
    }

    cells.into_iter().collect()
}

fn marker_labels(row: &SpectrumRow, range: &AxisRange, width: usize, lang: Language) -> String {
    let mut cells = vec![' '; width];
    let mut next_free = 0;
    for marker in &row.markers {
        let col = column(range, marker.freq, width);
        next_free = place_text(&mut cells, &marker.label().text(lang), col, next_free);
    }
    cells.into_iter().collect::<String>().trim_end().to_string()
}

fn axis_line(ticks: &[f64], range: &AxisRange, width: usize) -> String {
    let mut cells = vec!['-'; width];
    for &tick in ticks {
        cells[column(range, tick, width)] = '+';
    }
    cells.into_iter().collect()
}

fn tick_labels(ticks: &[f64], range: &AxisRange, width: usize) -> String {
    let mut cells = vec![' '; width];
    let mut next_free = 0;
    for &tick in ticks {
        let col = column(range, tick, width);
        next_free = place_text(&mut cells, &tick.to_string(), col, next_free);
    }
    cells.into_iter().collect::<String>().trim_end().to_string()
}

fn render_row(out: &mut String, row: &SpectrumRow, view: &SpectrumView, app: &AppConfig) {
    let width = app.chart_width;
    let lang = app.language;

    let _ = writeln!(out, "{}", row.title().text(lang));
    let labels = marker_labels(row, &view.range, width, lang);
    if !labels.is_empty() {
        let _ = writeln!(out, "{INDENT}{labels}");
    }
    let _ = writeln!(out, "{INDENT}{}", plot_row(row, &view.range, width));
    let _ = writeln!(out, "{INDENT}{}", axis_line(&view.ticks, &view.range, width));
    let _ = writeln!(out, "{INDENT}{}", tick_labels(&view.ticks, &view.range, width));

    for item in &row.bands {
        let band = &item.band;
        let _ = writeln!(
            out,
            "{INDENT}{} {:<16} {:>10.2} - {:<10.2} {}  center {}",
            glyph(item.role),
            Label::Legend(item.role).text(lang),
            band.start,
            band.end,
            app.unit,
            band.center.round(),
        );
    }
    for marker in &row.markers {
        let _ = writeln!(
            out,
            "{INDENT}{MARKER} {:<16} {:>10.2} {}",
            marker.label().text(lang),
            marker.freq,
            app.unit,
        );
    }
    out.push('\n');
}

/// Full chart: header, one block per row, legend
pub fn render_view(view: &SpectrumView, app: &AppConfig) -> String {
    let lang = app.language;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} :: {}",
        Label::AppTitle.text(lang),
        Label::ChartTitle.text(lang)
    );
    let _ = writeln!(out, "{}", Label::ChartDescription.text(lang));
    let _ = writeln!(
        out,
        "{INDENT}{:.2} .. {:.2} {}\n",
        view.range.min, view.range.max, app.unit
    );

    for row in &view.rows {
        render_row(&mut out, row, view, app);
    }

    let legend: Vec<String> = LEGEND
        .iter()
        .map(|&role| format!("{} {}", glyph(role), Label::Legend(role).text(lang)))
        .collect();
    let _ = writeln!(out, "{}", legend.join("   "));

    out
}

/// Table of LO against the stage output
pub fn render_sweep<I>(stage: usize, points: I, app: &AppConfig) -> String
where
    I: IntoIterator<Item = (f64, ChainOutput)>,
{
    let lang = app.language;
    let lo_header = format!("{} ({})", Label::LoMarker(stage + 1).text(lang), app.unit);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:>12} | {:>10} | {:>10} | {:>10} | {:>12}",
        lo_header,
        Label::Min.text(lang),
        Label::Max.text(lang),
        Label::Legend(BandRole::Output).text(lang),
        Label::Legend(BandRole::Image).text(lang),
    );

    let mut rows = 0usize;
    for (lo, chain) in points {
        let output = chain.output();
        let image = chain
            .stage(stage)
            .and_then(|s| s.result.image)
            .map(|band| format!("{:.2}", band.center))
            .unwrap_or_else(|| "-".to_string());

        let _ = writeln!(
            out,
            "{:>12.2} | {:>10.2} | {:>10.2} | {:>10.2} | {:>12}",
            lo, output.start, output.end, output.center, image
        );
        rows += 1;
    }

    if rows == 0 {
        let _ = writeln!(out, "(empty LO range)");
    }
    out
}
