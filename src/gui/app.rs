// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{
        state::{AppState, PageKind},
        Settings,
    },
    error::Result,
    runner::RunSummary,
};

use super::{
    actions, components,
    data::Datasets,
    pages::{Page, PageCtx},
    router,
};

pub fn run(options: eframe::NativeOptions) -> std::result::Result<(), Box<dyn Error>> {
    let settings = match Settings::load(None) {
        Ok(s) => s,
        Err(e) => {
            loge!("Settings: {}; using defaults", e);
            Settings::default()
        }
    };
    eframe::run_native(
        "Job Market Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState { settings, ..AppState::default() })))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub data: Datasets,

    // status/progress (the pipeline worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub include_scrape: bool,

    pub(super) job: Option<Receiver<Result<RunSummary>>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let data = Datasets::load(&state.settings.paths());
        let status = if data.is_empty() {
            s!("No local data yet: run the pipeline")
        } else {
            s!("Loaded local data")
        };
        logf!("Init: data_dir={}, page={:?}", state.settings.data_dir.display(), PageKind::Overview);

        Self {
            state,
            data,
            status: Arc::new(Mutex::new(status)),
            running: false,
            include_scrape: true,
            job: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages.get(self.current_index()).copied().unwrap_or(pages[0])
    }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap_or_else(|e| e.into_inner()) = msg.into();
    }

    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll_pipeline(self);
        if self.running {
            // Status text changes without input events.
            ctx.request_repaint_after(std::time::Duration::from_millis(200));
        }

        egui::SidePanel::left("nav")
            .resizable(false)
            .exact_width(190.0)
            .show(ctx, |ui| {
                components::nav_panel::draw(ui, self);
            });

        egui::TopBottomPanel::top("actions").show(ctx, |ui| {
            ui.add_space(4.0);
            components::action_bar::draw(ui, self);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let page = self.current_page();
            ui.heading(page.title());
            if let Some(c) = page.caption() {
                ui.weak(c);
            }
            ui.separator();

            let mut pctx = PageCtx {
                gui: &mut self.state.gui,
                data: &self.data,
                settings: &self.state.settings,
            };
            if page.wants_scroll() {
                egui::ScrollArea::vertical()
                    .id_salt(("page_scroll", page.kind()))
                    .auto_shrink([false, false])
                    .show(ui, |ui| page.draw(ui, &mut pctx));
            } else {
                page.draw(ui, &mut pctx);
            }
        });
    }
}
