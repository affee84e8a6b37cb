// src/gui/charts.rs
//
// Dashboard charts drawn straight onto an egui painter. Each function
// allocates its own rect at the current cursor.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2};

use crate::analysis::{Heatmap, Histogram};

pub const PALETTE: [Color32; 4] = [
    Color32::from_rgb(0x00, 0xb8, 0xb5),
    Color32::from_rgb(0x9c, 0x7f, 0xca),
    Color32::from_rgb(0x43, 0x1c, 0x76),
    Color32::from_rgb(0xe1, 0x36, 0x61),
];

const ROW_H: f32 = 22.0;

fn ink(ui: &egui::Ui) -> Color32 {
    ui.visuals().text_color()
}

fn grid(ui: &egui::Ui) -> Color32 {
    ui.visuals().widgets.noninteractive.bg_stroke.color
}

fn fmt_value(v: f64) -> String {
    if v.fract() == 0.0 { format!("{v:.0}") } else { format!("{v:.1}") }
}

fn clip(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s!(s)
    } else {
        let head: String = s.chars().take(max.saturating_sub(1)).collect();
        join!(&head, "…")
    }
}

pub fn no_data(ui: &mut egui::Ui) {
    ui.add_space(8.0);
    ui.weak("No data. Run the pipeline or press Reload.");
    ui.add_space(8.0);
}

/// Horizontal bars, first item on top. Hovering a bar shows its full label.
pub fn bar_chart(ui: &mut egui::Ui, bars: &[(String, f64)], color: Color32) {
    if bars.is_empty() {
        return no_data(ui);
    }
    let width = ui.available_width().max(320.0);
    let (resp, painter) = ui.allocate_painter(Vec2::new(width, ROW_H * bars.len() as f32 + 8.0), Sense::hover());
    let rect = resp.rect;
    let label_w = (width * 0.32).min(260.0);
    let plot_w = width - label_w - 60.0;
    let max = bars.iter().map(|b| b.1).fold(0.0, f64::max);
    let font = FontId::proportional(12.0);
    let text = ink(ui);

    let mut hovered = None;
    for (i, (label, value)) in bars.iter().enumerate() {
        let top = rect.top() + ROW_H * i as f32;
        let len = if max > 0.0 { (value / max) as f32 * plot_w } else { 0.0 };
        let bar = Rect::from_min_size(
            Pos2::new(rect.left() + label_w + 6.0, top + 3.0),
            Vec2::new(len.max(1.0), ROW_H - 6.0),
        );
        painter.rect_filled(bar, 2.0, color);
        painter.text(
            Pos2::new(rect.left() + label_w, top + ROW_H / 2.0),
            Align2::RIGHT_CENTER,
            clip(label, 36),
            font.clone(),
            text,
        );
        painter.text(
            Pos2::new(bar.right() + 6.0, top + ROW_H / 2.0),
            Align2::LEFT_CENTER,
            fmt_value(*value),
            font.clone(),
            text,
        );
        let row = Rect::from_min_size(Pos2::new(rect.left(), top), Vec2::new(width, ROW_H));
        if resp.hover_pos().is_some_and(|p| row.contains(p)) {
            hovered = Some(i);
        }
    }
    if let Some(i) = hovered {
        let (label, value) = &bars[i];
        resp.on_hover_text(format!("{label}: {}", fmt_value(*value)));
    }
}

/// Vertical columns with a label under each.
pub fn column_chart(ui: &mut egui::Ui, columns: &[(String, f64)], color: Color32, height: f32) {
    if columns.is_empty() || columns.iter().all(|c| c.1 == 0.0) {
        return no_data(ui);
    }
    let width = ui.available_width().max(320.0);
    let (resp, painter) = ui.allocate_painter(Vec2::new(width, height), Sense::hover());
    let rect = resp.rect;
    let base = rect.bottom() - 24.0;
    let plot_h = base - rect.top() - 18.0;
    let slot = width / columns.len() as f32;
    let max = columns.iter().map(|c| c.1).fold(0.0, f64::max);
    let font = FontId::proportional(11.0);
    let text = ink(ui);

    painter.line_segment([Pos2::new(rect.left(), base), Pos2::new(rect.right(), base)], Stroke::new(1.0, grid(ui)));
    for (i, (label, value)) in columns.iter().enumerate() {
        let h = if max > 0.0 { (value / max) as f32 * plot_h } else { 0.0 };
        let x = rect.left() + slot * i as f32;
        let col = Rect::from_min_max(Pos2::new(x + slot * 0.15, base - h), Pos2::new(x + slot * 0.85, base));
        painter.rect_filled(col, 2.0, color);
        painter.text(Pos2::new(col.center().x, col.top() - 2.0), Align2::CENTER_BOTTOM, fmt_value(*value), font.clone(), text);
        painter.text(Pos2::new(col.center().x, base + 4.0), Align2::CENTER_TOP, clip(label, 12), font.clone(), text);
    }
}

pub fn histogram(ui: &mut egui::Ui, hist: &Histogram, color: Color32) {
    let columns: Vec<(String, f64)> = hist
        .counts
        .iter()
        .zip(hist.edges.windows(2))
        .map(|(n, e)| (format!("{:.0}-{:.0}", e[0], e[1]), *n as f64))
        .collect();
    column_chart(ui, &columns, color, 220.0);
}

/// Lines over categorical x positions, one legend entry per series.
pub fn line_chart(ui: &mut egui::Ui, ticks: &[String], series: &[(&str, Vec<f64>)]) {
    if ticks.is_empty() || series.iter().all(|s| s.1.is_empty()) {
        return no_data(ui);
    }
    let width = ui.available_width().max(320.0);
    let (resp, painter) = ui.allocate_painter(Vec2::new(width, 260.0), Sense::hover());
    let rect = resp.rect;
    let plot = Rect::from_min_max(
        Pos2::new(rect.left() + 48.0, rect.top() + 24.0),
        Pos2::new(rect.right() - 12.0, rect.bottom() - 28.0),
    );
    let max = series.iter().flat_map(|s| s.1.iter().copied()).fold(0.0, f64::max).max(1.0);
    let font = FontId::proportional(11.0);
    let text = ink(ui);
    let x_at = |i: usize| {
        if ticks.len() == 1 {
            plot.center().x
        } else {
            plot.left() + plot.width() * i as f32 / (ticks.len() - 1) as f32
        }
    };
    let y_at = |v: f64| plot.bottom() - plot.height() * (v / max) as f32;

    for k in 0..=4 {
        let v = max * k as f64 / 4.0;
        let y = y_at(v);
        painter.line_segment([Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)], Stroke::new(0.5, grid(ui)));
        painter.text(Pos2::new(plot.left() - 4.0, y), Align2::RIGHT_CENTER, fmt_value((v * 10.0).round() / 10.0), font.clone(), text);
    }

    let every = ticks.len().div_ceil(12).max(1);
    for (i, t) in ticks.iter().enumerate().filter(|(i, _)| i % every == 0) {
        painter.text(Pos2::new(x_at(i), plot.bottom() + 4.0), Align2::CENTER_TOP, t, font.clone(), text);
    }

    for (k, (name, values)) in series.iter().enumerate() {
        let color = PALETTE[k % PALETTE.len()];
        let points: Vec<Pos2> = values.iter().enumerate().map(|(i, v)| Pos2::new(x_at(i), y_at(*v))).collect();
        painter.add(Shape::line(points.clone(), Stroke::new(2.0, color)));
        for p in points {
            painter.circle_filled(p, 3.0, color);
        }
        let lx = plot.left() + 8.0 + 120.0 * k as f32;
        painter.rect_filled(Rect::from_min_size(Pos2::new(lx, rect.top() + 4.0), Vec2::splat(10.0)), 1.0, color);
        painter.text(Pos2::new(lx + 14.0, rect.top() + 9.0), Align2::LEFT_CENTER, *name, font.clone(), text);
    }
}

fn heat_color(t: f32) -> Color32 {
    let (a, b) = ([0xfb, 0xe9, 0xe0], [0x43, 0x1c, 0x76]);
    let mix = |i: usize| (a[i] as f32 + (b[i] as f32 - a[i] as f32) * t.clamp(0.0, 1.0)).round() as u8;
    Color32::from_rgb(mix(0), mix(1), mix(2))
}

/// Annotated grid; rows are minimum years, columns locations.
pub fn heatmap(ui: &mut egui::Ui, map: &Heatmap) {
    if map.is_empty() {
        return no_data(ui);
    }
    let width = ui.available_width().max(320.0);
    let left = 56.0;
    let cell_w = ((width - left) / map.cols.len() as f32).min(96.0);
    let cell_h = 24.0;
    let header = 40.0;
    let height = header + cell_h * map.rows.len() as f32;
    let (resp, painter) = ui.allocate_painter(Vec2::new(width, height), Sense::hover());
    let rect = resp.rect;
    let max = map.max();
    let font = FontId::proportional(10.5);
    let text = ink(ui);

    for (c, col) in map.cols.iter().enumerate() {
        let x = rect.left() + left + cell_w * (c as f32 + 0.5);
        painter.text(Pos2::new(x, rect.top() + header / 2.0), Align2::CENTER_CENTER, clip(col, 12), font.clone(), text);
    }
    for (r, (years, row)) in map.rows.iter().zip(&map.cells).enumerate() {
        let y = rect.top() + header + cell_h * r as f32;
        painter.text(Pos2::new(rect.left() + left - 6.0, y + cell_h / 2.0), Align2::RIGHT_CENTER, fmt_value(*years), font.clone(), text);
        for (c, v) in row.iter().enumerate() {
            let t = if max > 0.0 { (v / max) as f32 } else { 0.0 };
            let cell = Rect::from_min_size(Pos2::new(rect.left() + left + cell_w * c as f32, y), Vec2::new(cell_w, cell_h)).shrink(1.0);
            painter.rect_filled(cell, 1.0, heat_color(t));
            if *v > 0.0 {
                let fg = if t > 0.55 { Color32::WHITE } else { Color32::from_rgb(0x26, 0x27, 0x30) };
                painter.text(cell.center(), Align2::CENTER_CENTER, format!("{v:.1}"), font.clone(), fg);
            }
        }
    }
}
