// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use image::{Rgba, RgbaImage};
use job_scrape::{
    gui,
    log::{self, Sink},
};

const ICON_SIZE: u32 = 64;

/// Three ascending bars on a rounded plum tile.
fn app_icon() -> IconData {
    let bg = Rgba([0x43, 0x1c, 0x76, 0xff]);
    let bars = [
        (Rgba([0x00, 0xb8, 0xb5, 0xff]), 0.40),
        (Rgba([0x9c, 0x7f, 0xca, 0xff]), 0.62),
        (Rgba([0xe1, 0x36, 0x61, 0xff]), 0.84),
    ];
    let n = ICON_SIZE as f32;
    let radius = n * 0.18;

    let img = RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let (fx, fy) = (x as f32 + 0.5, y as f32 + 0.5);
        // Corner rounding: outside the quarter circles is transparent.
        let cx = fx.clamp(radius, n - radius);
        let cy = fy.clamp(radius, n - radius);
        if (fx - cx).powi(2) + (fy - cy).powi(2) > radius * radius {
            return Rgba([0, 0, 0, 0]);
        }
        let margin = n * 0.18;
        let slot = (n - 2.0 * margin) / bars.len() as f32;
        let base = n - margin;
        if fx >= margin && fx < n - margin {
            let i = ((fx - margin) / slot) as usize;
            let inner = (fx - margin) - slot * i as f32;
            if let Some((color, h)) = bars.get(i) {
                if inner > slot * 0.15 && inner < slot * 0.85 && fy <= base && fy >= base - h * (n - 2.0 * margin) {
                    return *color;
                }
            }
        }
        bg
    });
    IconData { rgba: img.into_raw(), width: ICON_SIZE, height: ICON_SIZE }
}

fn main() {
    log::init(Sink::File, 0);

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([1200.0, 780.0])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        job_scrape::loge!("GUI failed: {}", e);
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
