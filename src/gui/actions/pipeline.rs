// src/gui/actions/pipeline.rs
//
// Runs the pipeline on one background thread. The worker reports through
// `GuiProgress` and hands the final result back over a channel that the
// app polls once per frame.

use std::sync::mpsc::{self, TryRecvError};
use std::thread;

use eframe::egui;

use crate::{
    config::Overrides,
    gui::{app::App, progress::GuiProgress},
    runner::{self, Stages},
};

pub fn start_pipeline(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }
    let stages = if app.include_scrape { Stages::all() } else { Stages::offline() };
    let settings = app.state.settings.clone();
    let status = app.status.clone();
    let repaint = ctx.clone();
    let (tx, rx) = mpsc::channel();

    logf!("Pipeline: begin {:?}", stages);
    app.status("Starting pipeline…");
    app.running = true;

    thread::spawn(move || {
        let mut progress = GuiProgress::new(status);
        let res = runner::run(stages, &settings, &Overrides::default(), Some(&mut progress));
        let _ = tx.send(res);
        repaint.request_repaint();
    });
    app.job = Some(rx);
}

/// Pick up a finished run, if any. Called every frame.
pub fn poll_pipeline(app: &mut App) {
    let Some(rx) = app.job.as_ref() else { return };
    let res = match rx.try_recv() {
        Ok(res) => res,
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Disconnected) => {
            loge!("Pipeline: worker exited without a result");
            app.job = None;
            app.running = false;
            app.status("Error: pipeline worker stopped");
            return;
        }
    };
    app.job = None;
    app.running = false;

    match res {
        Ok(summary) => {
            logf!(
                "Pipeline: OK scraped={} processed={} figures={}",
                summary.scraped, summary.processed, summary.figures
            );
            super::reload(app);
            app.status(format!(
                "Done: {} processed, {} data-related, {} analyst, {} figures",
                summary.processed, summary.data_jobs, summary.analyst_jobs, summary.figures
            ));
        }
        Err(e) => {
            loge!("Pipeline: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
