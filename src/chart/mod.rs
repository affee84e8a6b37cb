// src/chart/mod.rs
//
// SVG figures. Each chart function is pure (data in, document out);
// `render_figures` derives the series from postings and writes the files.

pub mod svg;

use std::path::{Path, PathBuf};

use crate::analysis::{self, FiveNumber, Heatmap, LevelSpread};
use crate::error::Result;
use crate::posting::CleanPosting;
use crate::skills::SkillCount;
use crate::store::write_text;
use svg::{blend, clip, nice_step, Anchor, Svg, GRID, INK, PALETTE};

pub const NO_DATA: &str = "No data";

const WIDTH: f64 = 900.0;
const LABEL_CHARS: usize = 34;

/// Title-only chart with a centered notice.
pub fn empty_chart(title: &str) -> String {
    let mut doc = Svg::new(WIDTH, 200.0);
    doc.title(title);
    doc.text(WIDTH / 2.0, 110.0, 16.0, Anchor::Middle, NO_DATA);
    doc.finish()
}

fn value_label(v: f64) -> String {
    if v.fract() == 0.0 { format!("{v:.0}") } else { format!("{v:.1}") }
}

/// Horizontal bars, first item on top.
pub fn bar_chart(title: &str, x_label: &str, bars: &[(String, f64)]) -> String {
    if bars.is_empty() {
        return empty_chart(title);
    }
    let (left, right, top, row) = (240.0, 60.0, 50.0, 26.0);
    let height = top + row * bars.len() as f64 + 50.0;
    let plot_w = WIDTH - left - right;
    let max = bars.iter().map(|b| b.1).fold(0.0, f64::max);
    let scale = if max > 0.0 { plot_w / max } else { 0.0 };

    let mut doc = Svg::new(WIDTH, height);
    doc.title(title);

    let step = nice_step(max, 5);
    let mut tick = 0.0;
    let bottom = top + row * bars.len() as f64;
    while tick <= max + f64::EPSILON && scale > 0.0 {
        let x = left + tick * scale;
        doc.line(x, top, x, bottom, GRID, 1.0);
        doc.text(x, bottom + 16.0, 11.0, Anchor::Middle, &value_label(tick));
        tick += step;
    }

    for (i, (label, value)) in bars.iter().enumerate() {
        let y = top + row * i as f64;
        let fill = PALETTE[i % PALETTE.len()];
        doc.rect(left, y + 4.0, value * scale, row - 8.0, fill);
        doc.text(left - 8.0, y + row / 2.0 + 4.0, 12.0, Anchor::End, &clip(label, LABEL_CHARS));
        doc.text(left + value * scale + 6.0, y + row / 2.0 + 4.0, 11.0, Anchor::Start, &value_label(*value));
    }
    doc.line(left, top, left, bottom, INK, 1.0);
    doc.text(left + plot_w / 2.0, bottom + 38.0, 13.0, Anchor::Middle, x_label);
    doc.finish()
}

pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

/// Lines over categorical x positions. Every series has one value per tick.
pub fn line_chart(title: &str, x_label: &str, y_label: &str, ticks: &[String], series: &[Series]) -> String {
    if ticks.is_empty() || series.iter().all(|s| s.values.is_empty()) {
        return empty_chart(title);
    }
    let (left, right, top, bottom) = (80.0, 160.0, 50.0, 110.0);
    let height = 480.0;
    let (x0, x1, y0, y1) = (left, WIDTH - right, top, height - bottom);
    let max = series.iter().flat_map(|s| s.values.iter().copied()).fold(0.0, f64::max);
    let step = nice_step(max, 5);
    let y_max = (max / step).ceil().max(1.0) * step;

    let x_at = |i: usize| {
        if ticks.len() == 1 { (x0 + x1) / 2.0 } else { x0 + (x1 - x0) * i as f64 / (ticks.len() - 1) as f64 }
    };
    let y_at = |v: f64| y1 - (y1 - y0) * v / y_max;

    let mut doc = Svg::new(WIDTH, height);
    doc.title(title);

    let mut tick = 0.0;
    while tick <= y_max + f64::EPSILON {
        let y = y_at(tick);
        doc.line(x0, y, x1, y, GRID, 1.0);
        doc.text(x0 - 8.0, y + 4.0, 11.0, Anchor::End, &value_label(tick));
        tick += step;
    }
    doc.line(x0, y1, x1, y1, INK, 1.0);
    doc.line(x0, y0, x0, y1, INK, 1.0);

    // At most ~20 tick labels.
    let every = ticks.len().div_ceil(20).max(1);
    for (i, t) in ticks.iter().enumerate().filter(|(i, _)| i % every == 0) {
        doc.text_rotated(x_at(i), y1 + 14.0, 11.0, -45.0, Anchor::End, t);
    }

    for (k, s) in series.iter().enumerate() {
        let color = PALETTE[k % PALETTE.len()];
        let points: Vec<(f64, f64)> = s.values.iter().enumerate().map(|(i, v)| (x_at(i), y_at(*v))).collect();
        doc.polyline(&points, color);
        for (x, y) in &points {
            doc.circle(*x, *y, 3.0, color);
        }
        let ly = y0 + 20.0 * k as f64;
        doc.rect(x1 + 16.0, ly - 9.0, 12.0, 12.0, color);
        doc.text(x1 + 34.0, ly + 1.0, 12.0, Anchor::Start, &s.name);
    }

    doc.text((x0 + x1) / 2.0, height - 14.0, 13.0, Anchor::Middle, x_label);
    doc.text_rotated(20.0, (y0 + y1) / 2.0, 13.0, -90.0, Anchor::Middle, y_label);
    doc.finish()
}

/// Grouped box plots: one group per category, one box per named member.
pub fn box_chart(title: &str, y_label: &str, members: &[&str], groups: &[(String, Vec<Option<FiveNumber>>)]) -> String {
    let max = groups
        .iter()
        .flat_map(|(_, boxes)| boxes.iter().flatten().map(|b| b.max))
        .fold(f64::NEG_INFINITY, f64::max);
    if groups.is_empty() || !max.is_finite() {
        return empty_chart(title);
    }
    let (left, right, top, bottom) = (80.0, 160.0, 50.0, 150.0);
    let height = 520.0;
    let (x0, x1, y0, y1) = (left, WIDTH - right, top, height - bottom);
    let step = nice_step(max, 5);
    let y_max = (max / step).ceil().max(1.0) * step;
    let y_at = |v: f64| y1 - (y1 - y0) * v / y_max;

    let mut doc = Svg::new(WIDTH, height);
    doc.title(title);

    let mut tick = 0.0;
    while tick <= y_max + f64::EPSILON {
        let y = y_at(tick);
        doc.line(x0, y, x1, y, GRID, 1.0);
        doc.text(x0 - 8.0, y + 4.0, 11.0, Anchor::End, &value_label(tick));
        tick += step;
    }
    doc.line(x0, y0, x0, y1, INK, 1.0);

    let slot = (x1 - x0) / groups.len() as f64;
    let box_w = (slot * 0.7 / members.len().max(1) as f64).min(40.0);
    for (g, (name, boxes)) in groups.iter().enumerate() {
        let center = x0 + slot * (g as f64 + 0.5);
        let start = center - box_w * boxes.len() as f64 / 2.0;
        for (m, b) in boxes.iter().enumerate() {
            let Some(b) = b else { continue };
            let color = PALETTE[m % PALETTE.len()];
            let bx = start + box_w * m as f64;
            let mid = bx + box_w / 2.0;
            doc.line(mid, y_at(b.max), mid, y_at(b.q3), INK, 1.0);
            doc.line(mid, y_at(b.q1), mid, y_at(b.min), INK, 1.0);
            doc.line(bx + 4.0, y_at(b.max), bx + box_w - 4.0, y_at(b.max), INK, 1.0);
            doc.line(bx + 4.0, y_at(b.min), bx + box_w - 4.0, y_at(b.min), INK, 1.0);
            doc.outline(bx + 2.0, y_at(b.q3), box_w - 4.0, y_at(b.q1) - y_at(b.q3), color, INK);
            doc.line(bx + 2.0, y_at(b.median), bx + box_w - 2.0, y_at(b.median), INK, 2.0);
        }
        doc.text_rotated(center, y1 + 14.0, 11.0, -45.0, Anchor::End, &clip(name, 28));
    }

    for (m, member) in members.iter().enumerate() {
        let ly = y0 + 20.0 * m as f64;
        doc.rect(x1 + 16.0, ly - 9.0, 12.0, 12.0, PALETTE[m % PALETTE.len()]);
        doc.text(x1 + 34.0, ly + 1.0, 12.0, Anchor::Start, member);
    }
    doc.text_rotated(20.0, (y0 + y1) / 2.0, 13.0, -90.0, Anchor::Middle, y_label);
    doc.finish()
}

/// Annotated heatmap, rows top to bottom in the given order.
pub fn heatmap_chart(title: &str, row_label: &str, map: &Heatmap) -> String {
    if map.is_empty() {
        return empty_chart(title);
    }
    let (left, top) = (90.0, 50.0);
    let cell_w = ((WIDTH - left - 40.0) / map.cols.len() as f64).min(90.0);
    let cell_h = 28.0;
    let height = top + cell_h * map.rows.len() as f64 + 160.0;
    let max = map.max();

    let mut doc = Svg::new(WIDTH, height);
    doc.title(title);

    for (r, (years, row)) in map.rows.iter().zip(&map.cells).enumerate() {
        let y = top + cell_h * r as f64;
        doc.text(left - 8.0, y + cell_h / 2.0 + 4.0, 11.0, Anchor::End, &value_label(*years));
        for (c, v) in row.iter().enumerate() {
            let x = left + cell_w * c as f64;
            let t = if max > 0.0 { v / max } else { 0.0 };
            doc.outline(x, y, cell_w, cell_h, &blend("#fbe9e0", "#431c76", t), "#ffffff");
            if *v > 0.0 {
                let ink = if t > 0.55 { "#ffffff" } else { INK };
                let text = format!("{v:.1}");
                doc.text_fill(x + cell_w / 2.0, y + cell_h / 2.0 + 4.0, 10.0, Anchor::Middle, ink, &text);
            }
        }
    }
    let bottom = top + cell_h * map.rows.len() as f64;
    for (c, col) in map.cols.iter().enumerate() {
        let x = left + cell_w * (c as f64 + 0.5);
        doc.text_rotated(x, bottom + 14.0, 11.0, -45.0, Anchor::End, &clip(col, 24));
    }
    doc.text_rotated(20.0, top + (bottom - top) / 2.0, 13.0, -90.0, Anchor::Middle, row_label);
    doc.finish()
}

/// Everything `render_figures` reads.
pub struct FigureInputs<'a> {
    pub data_jobs: &'a [CleanPosting],
    pub soft_skills: &'a [SkillCount],
    pub hard_skills: &'a [SkillCount],
    pub domains: &'a [SkillCount],
    pub top_n: usize,
    pub top_skills: usize,
}

fn counts_to_bars(counts: Vec<analysis::Count>) -> Vec<(String, f64)> {
    counts.into_iter().map(|c| (c.label, c.count as f64)).collect()
}

fn skills_to_bars(counts: &[SkillCount], n: usize) -> Vec<(String, f64)> {
    counts.iter().take(n).map(|c| (c.skill.clone(), c.count as f64)).collect()
}

fn level_groups(spread: Vec<LevelSpread>) -> Vec<(String, Vec<Option<FiveNumber>>)> {
    spread
        .into_iter()
        .map(|l| {
            let name = if l.level.trim().is_empty() { s!("(blank)") } else { l.level };
            (name, vec![l.exp_min, l.exp_max])
        })
        .collect()
}

/// Writes the fixed set of figures into `dir`, returning the paths written.
pub fn render_figures(inputs: &FigureInputs, dir: &Path) -> Result<Vec<PathBuf>> {
    let jobs = inputs.data_jobs;
    let mut figures: Vec<(&str, String, bool)> = Vec::new();

    let by_location: Vec<_> = counts_to_bars(analysis::jobs_by_location(jobs)).into_iter().take(inputs.top_n).collect();
    figures.push((
        "jobs_by_location",
        bar_chart("Number of Jobs by Location", "Jobs", &by_location),
        by_location.is_empty(),
    ));

    let points = analysis::salary_by_experience(jobs);
    let ticks: Vec<String> = points.iter().map(|p| value_label(p.years)).collect();
    let series = [
        Series { name: s!("Min Salary"), values: points.iter().map(|p| p.mean_min).collect() },
        Series { name: s!("Max Salary"), values: points.iter().map(|p| p.mean_max).collect() },
    ];
    figures.push((
        "salary_by_experience",
        line_chart("Salary by Experience", "Years of experience", "Salary (million VND)", &ticks, &series),
        points.is_empty(),
    ));

    let by_date = analysis::jobs_by_date(jobs);
    let ticks: Vec<String> = by_date.iter().map(|(d, _)| d.format("%d-%b").to_string()).collect();
    let series = [Series { name: s!("Jobs"), values: by_date.iter().map(|(_, n)| *n as f64).collect() }];
    figures.push((
        "jobs_by_date",
        line_chart("Jobs Posted by Date", "Date", "Jobs", &ticks, &series),
        by_date.is_empty(),
    ));

    let groups = level_groups(analysis::experience_by_level(jobs));
    let has_boxes = groups.iter().any(|(_, b)| b.iter().any(Option::is_some));
    figures.push((
        "experience_by_job_level",
        box_chart("Experience by Job Level", "Years", &["exp_min", "exp_max"], &groups),
        !has_boxes,
    ));

    let titles = counts_to_bars(analysis::top_titles(jobs, inputs.top_n));
    figures.push((
        "top_job_titles",
        bar_chart(&format!("Top {} Job Titles", inputs.top_n), "Postings", &titles),
        titles.is_empty(),
    ));

    let companies = counts_to_bars(analysis::top_companies(jobs, inputs.top_n));
    figures.push((
        "top_companies",
        bar_chart(&format!("Top {} Companies", inputs.top_n), "Postings", &companies),
        companies.is_empty(),
    ));

    let heat = analysis::salary_heatmap(jobs, inputs.top_n);
    figures.push((
        "salary_heatmap",
        heatmap_chart("Mean Min Salary (million VND) by Location and Experience", "Min years", &heat),
        heat.is_empty(),
    ));

    for (name, title, counts) in [
        ("top_soft_skills", "Top Soft Skills", inputs.soft_skills),
        ("top_hard_skills", "Top Hard Skills", inputs.hard_skills),
        ("top_domains", "Top Domains", inputs.domains),
    ] {
        let bars = skills_to_bars(counts, inputs.top_skills);
        figures.push((name, bar_chart(title, "Mentions", &bars), bars.is_empty()));
    }

    let mut written = Vec::with_capacity(figures.len());
    for (name, doc, empty) in figures {
        if empty {
            logw!("Figure {name}: no data");
        }
        let path = dir.join(join!(name, ".svg"));
        write_text(&path, &doc)?;
        logd!("Wrote {}", path.display());
        written.push(path);
    }
    logf!("Visualize: {} figures in {}", written.len(), dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bars() -> Vec<(String, f64)> {
        vec![(s!("Hà Nội"), 12.0), (s!("Hồ Chí Minh"), 7.0), (s!("R&D <Lab>"), 1.0)]
    }

    #[test]
    fn bar_chart_draws_one_bar_per_item() {
        let doc = bar_chart("Jobs", "Jobs", &bars());
        assert!(doc.contains("Hà Nội"));
        assert!(doc.contains("R&amp;D &lt;Lab&gt;"));
        // Background plus one rect per bar.
        assert_eq!(doc.matches("<rect").count(), 4);
        assert!(!doc.contains(NO_DATA));
    }

    #[test]
    fn empty_series_get_notice() {
        assert!(bar_chart("Jobs", "Jobs", &[]).contains(NO_DATA));
        assert!(line_chart("Salary", "x", "y", &[], &[]).contains(NO_DATA));
        assert!(box_chart("Exp", "y", &["a"], &[(s!("Senior"), vec![None])]).contains(NO_DATA));
        assert!(heatmap_chart("Heat", "y", &Heatmap::default()).contains(NO_DATA));
    }

    #[test]
    fn line_chart_has_polyline_per_series() {
        let ticks = vec![s!("0"), s!("2"), s!("5")];
        let series = [
            Series { name: s!("Min Salary"), values: vec![8.0, 15.0, 30.0] },
            Series { name: s!("Max Salary"), values: vec![12.0, 25.0, 45.0] },
        ];
        let doc = line_chart("Salary by Experience", "Years", "Salary", &ticks, &series);
        assert_eq!(doc.matches("<polyline").count(), 2);
        assert_eq!(doc.matches("<circle").count(), 6);
        assert!(doc.contains("Max Salary"));
    }

    #[test]
    fn single_tick_line_is_centered() {
        let doc = line_chart("One", "x", "y", &[s!("3")], &[Series { name: s!("Jobs"), values: vec![4.0] }]);
        assert!(doc.contains(r#"cx="410.0""#));
    }

    #[test]
    fn box_chart_draws_median_lines() {
        let five = FiveNumber { min: 1.0, q1: 2.0, median: 3.0, q3: 4.0, max: 6.0 };
        let groups = vec![(s!("Nhân viên"), vec![Some(five), None])];
        let doc = box_chart("Experience", "Years", &["exp_min", "exp_max"], &groups);
        assert!(doc.contains(r#"stroke-width="2""#));
        assert!(doc.contains("Nhân viên"));
    }

    #[test]
    fn heatmap_annotates_nonzero_cells() {
        let map = Heatmap {
            rows: vec![0.0, 2.0],
            cols: vec![s!("Hà Nội"), s!("Đà Nẵng")],
            cells: vec![vec![10.0, 0.0], vec![20.5, 15.0]],
        };
        let doc = heatmap_chart("Heat", "Min years", &map);
        assert!(doc.contains(">20.5</text>"));
        assert!(doc.contains(">10.0</text>"));
        assert!(!doc.contains(">0.0</text>"));
    }

    #[test]
    fn render_writes_every_figure() {
        let dir = std::env::temp_dir().join("job_scrape_chart_test");
        let _ = std::fs::remove_dir_all(&dir);
        let jobs = vec![CleanPosting {
            title: s!("Data Analyst"),
            company: s!("Acme"),
            location: s!("Hà Nội"),
            level: s!("Nhân viên"),
            date: s!("05-03-2025"),
            min_salary: Some(15e6),
            max_salary: Some(25e6),
            exp_min: Some(1.0),
            exp_max: Some(3.0),
            ..Default::default()
        }];
        let hard = vec![SkillCount { skill: s!("SQL"), count: 3 }];
        let inputs = FigureInputs {
            data_jobs: &jobs,
            soft_skills: &[],
            hard_skills: &hard,
            domains: &[],
            top_n: 15,
            top_skills: 20,
        };
        let written = render_figures(&inputs, &dir).unwrap();
        assert_eq!(written.len(), 10);
        assert!(written.iter().all(|p| p.exists()));
        let soft = std::fs::read_to_string(dir.join("top_soft_skills.svg")).unwrap();
        assert!(soft.contains(NO_DATA));
        let hard = std::fs::read_to_string(dir.join("top_hard_skills.svg")).unwrap();
        assert!(hard.contains("SQL"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
