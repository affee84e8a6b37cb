// src/chart/svg.rs
//
// Minimal SVG document builder. Coordinates are in user units, origin top-left.

pub const FONT: &str = "Inter, Helvetica, Arial, sans-serif";
pub const INK: &str = "#262730";
pub const GRID: &str = "#e6e6e6";

/// Dashboard colors: teal, lavender, plum, rose.
pub const PALETTE: &[&str] = &["#00b8b5", "#9c7fca", "#431c76", "#e13661", "#f0a35e", "#5a8f29"];

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

/// Shorten long labels to `max` chars with an ellipsis.
pub fn clip(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s!(s)
    } else {
        let head: String = s.chars().take(max.saturating_sub(1)).collect();
        join!(&head, "…")
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

pub struct Svg {
    width: f64,
    height: f64,
    body: String,
}

impl Svg {
    pub fn new(width: f64, height: f64) -> Self {
        let mut svg = Self { width, height, body: String::new() };
        svg.rect(0.0, 0.0, width, height, "#ffffff");
        svg
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        self.body.push_str(&format!(
            r#"<rect x="{x:.1}" y="{y:.1}" width="{:.1}" height="{:.1}" fill="{fill}"/>"#,
            w.max(0.0),
            h.max(0.0)
        ));
        self.body.push('\n');
    }

    pub fn outline(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str, stroke: &str) {
        self.body.push_str(&format!(
            r#"<rect x="{x:.1}" y="{y:.1}" width="{:.1}" height="{:.1}" fill="{fill}" stroke="{stroke}" stroke-width="1.2"/>"#,
            w.max(0.0),
            h.max(0.0)
        ));
        self.body.push('\n');
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, width: f64) {
        self.body.push_str(&format!(
            r#"<line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" stroke="{stroke}" stroke-width="{width}"/>"#
        ));
        self.body.push('\n');
    }

    pub fn polyline(&mut self, points: &[(f64, f64)], stroke: &str) {
        let pts: Vec<String> = points.iter().map(|(x, y)| format!("{x:.1},{y:.1}")).collect();
        self.body.push_str(&format!(
            r#"<polyline points="{}" fill="none" stroke="{stroke}" stroke-width="2"/>"#,
            pts.join(" ")
        ));
        self.body.push('\n');
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        self.body.push_str(&format!(r#"<circle cx="{cx:.1}" cy="{cy:.1}" r="{r}" fill="{fill}"/>"#));
        self.body.push('\n');
    }

    pub fn text(&mut self, x: f64, y: f64, size: f64, anchor: Anchor, content: &str) {
        self.text_fill(x, y, size, anchor, INK, content);
    }

    pub fn text_fill(&mut self, x: f64, y: f64, size: f64, anchor: Anchor, fill: &str, content: &str) {
        self.body.push_str(&format!(
            r#"<text x="{x:.1}" y="{y:.1}" font-family="{FONT}" font-size="{size}" fill="{fill}" text-anchor="{}">{}</text>"#,
            anchor.as_str(),
            escape(content)
        ));
        self.body.push('\n');
    }

    /// Text rotated by `deg` around its anchor point.
    pub fn text_rotated(&mut self, x: f64, y: f64, size: f64, deg: f64, anchor: Anchor, content: &str) {
        self.body.push_str(&format!(
            r#"<text x="{x:.1}" y="{y:.1}" font-family="{FONT}" font-size="{size}" fill="{INK}" text-anchor="{}" transform="rotate({deg} {x:.1} {y:.1})">{}</text>"#,
            anchor.as_str(),
            escape(content)
        ));
        self.body.push('\n');
    }

    pub fn title(&mut self, title: &str) {
        let x = self.width / 2.0;
        self.text(x, 28.0, 18.0, Anchor::Middle, title);
    }

    pub fn finish(self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
{body}</svg>
"#,
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

/// Linear blend between two `#rrggbb` colors, `t` in 0..=1.
pub fn blend(from: &str, to: &str, t: f64) -> String {
    let parse = |c: &str| -> [f64; 3] {
        let c = c.trim_start_matches('#');
        let ch = |i: usize| c.get(i..i + 2).and_then(|h| u8::from_str_radix(h, 16).ok()).unwrap_or(0) as f64;
        [ch(0), ch(2), ch(4)]
    };
    let (a, b) = (parse(from), parse(to));
    let t = t.clamp(0.0, 1.0);
    let mix = |i: usize| (a[i] + (b[i] - a[i]) * t).round() as u8;
    format!("#{:02x}{:02x}{:02x}", mix(0), mix(1), mix(2))
}

/// Round numbers for axis ticks: 1, 2, 5 × 10^k.
pub fn nice_step(max: f64, ticks: usize) -> f64 {
    if max <= 0.0 || ticks == 0 {
        return 1.0;
    }
    let raw = max / ticks as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let step = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * mag
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape(r#"Oil & Gas <x> "q""#), "Oil &amp; Gas &lt;x&gt; &quot;q&quot;");
    }

    #[test]
    fn clips_long_labels() {
        assert_eq!(clip("Chuyên Viên Phân Tích", 8), "Chuyên …");
        assert_eq!(clip("SQL", 8), "SQL");
    }

    #[test]
    fn blends_colors() {
        assert_eq!(blend("#000000", "#ffffff", 0.0), "#000000");
        assert_eq!(blend("#000000", "#ffffff", 1.0), "#ffffff");
        assert_eq!(blend("#000000", "#ff0000", 0.5), "#800000");
    }

    #[test]
    fn nice_steps() {
        assert_eq!(nice_step(100.0, 5), 20.0);
        assert_eq!(nice_step(7.0, 5), 2.0);
        assert_eq!(nice_step(0.0, 5), 1.0);
    }

    #[test]
    fn document_wraps_body() {
        let mut s = Svg::new(100.0, 50.0);
        s.text(1.0, 2.0, 10.0, Anchor::Start, "hi");
        let out = s.finish();
        assert!(out.starts_with("<svg"));
        assert!(out.contains(">hi</text>"));
        assert!(out.trim_end().ends_with("</svg>"));
    }
}
