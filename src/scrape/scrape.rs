// src/scrape/scrape.rs
use std::{
    collections::HashSet, thread, time::Duration,
    sync::{ mpsc, Arc, atomic::{ AtomicBool, AtomicUsize, Ordering }}
};

use rand::Rng;

use crate::{
    config::Settings,
    core::net::Fetcher,
    error::Result,
    posting::JobPosting,
    progress::Progress,
    specs::{ detail::{ self, JobDetail }, listing },
};

fn jitter(max_ms: u64) -> u64 {
    match max_ms {
        0 => 0,
        j => rand::thread_rng().gen_range(0..=j),
    }
}

/// Politeness pause between two requests from the same worker.
fn pause(settings: &Settings) {
    let wait = settings.request_pause_ms + jitter(settings.jitter_ms);
    thread::sleep(Duration::from_millis(wait)); // be polite
}

/// One listing page: its cards (capped at `max_jobs_per_page`), each
/// completed with its detail page. A failed detail fetch keeps the card
/// with placeholder detail fields.
pub fn scrape_page(fetcher: &Fetcher, url: &str, settings: &Settings) -> Result<Vec<JobPosting>> {
    let body = fetcher.get(url)?;
    let mut jobs = listing::parse_listing(&body)?;
    jobs.truncate(settings.max_jobs_per_page);

    for job in jobs.iter_mut() {
        pause(settings);
        let detail = fetcher
            .get(&job.link)
            .and_then(|html| detail::parse_detail(&html))
            .unwrap_or_else(|e| {
                logw!("Detail: {} ({})", job.link, e);
                JobDetail::unavailable()
            });
        detail.apply_to(job);
        logd!("Detail: {}", job.title);
    }
    Ok(jobs)
}

/// Pages in page order, deduplicated by link, capped at `max_jobs`, and
/// stripped of postings with an empty description or requirements.
pub fn merge_pages(mut per_page: Vec<(usize, Vec<JobPosting>)>, max_jobs: usize) -> Vec<JobPosting> {
    per_page.sort_by_key(|(idx, _)| *idx);

    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();
    for (_, jobs) in per_page {
        for job in jobs {
            if job.link.is_empty() || !seen.insert(job.link.clone()) {
                continue;
            }
            out.push(job);
        }
    }
    out.truncate(max_jobs);

    let before = out.len();
    out.retain(|j| !j.description.trim().is_empty() && !j.requirements.trim().is_empty());
    if out.len() < before {
        logw!("Scrape: dropped {} postings without description/requirements", before - out.len());
    }
    out
}

/// Scrape every listing page of `settings.base_url` with a small worker pool.
pub fn collect_postings(
    settings: &Settings,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<JobPosting>> {
    let pages = listing::pagination_urls(&settings.base_url, settings.max_pages.max(1));
    let fetcher = Fetcher::new(settings)?;

    logf!("Scrape: {} pages from {}", pages.len(), settings.base_url);
    if let Some(p) = progress.as_deref_mut() {
        p.begin(pages.len());
    }

    // Concurrency
    type FetchOk = (usize, Vec<JobPosting>);
    type FetchErr = (usize, String);

    let pages_arc = Arc::new(pages);
    let counter = Arc::new(AtomicUsize::new(0));
    let stop = Arc::new(AtomicBool::new(false));
    let (res_tx, res_rx) = mpsc::channel::<std::result::Result<FetchOk, FetchErr>>();

    let workers = settings.workers.min(pages_arc.len()).max(1);

    // Spawn workers

    for _ in 0..workers {
        let pages = Arc::clone(&pages_arc);
        let idx = Arc::clone(&counter);
        let stop = Arc::clone(&stop);
        let tx = res_tx.clone();
        let fetcher = fetcher.clone();
        let settings = settings.clone();

        thread::spawn(
            move || {
                loop {
                    if stop.load(Ordering::Relaxed) {
                        break;
                    }
                    let i = idx.fetch_add(1, Ordering::Relaxed);
                    if i >= pages.len() {
                        break;
                    }
                    let result = match scrape_page(&fetcher, &pages[i], &settings) {
                        Ok(jobs) => Ok((i, jobs)),
                        Err(e) => Err((i, e.to_string())),
                    };
                    if tx.send(result).is_err() {
                        break;
                    }
                    pause(&settings);
                }
            }
        );
    }
    drop(res_tx); // main thread is sole receiver now

    // Aggregate results
    let mut per_page: Vec<FetchOk> = Vec::new();
    let mut links: HashSet<String> = HashSet::new();

    for msg in res_rx.iter() {
        match msg {
            Ok((i, jobs)) => {
                links.extend(jobs.iter().map(|j| j.link.clone()));
                logf!("Scrape: page {} gave {} jobs ({} unique so far)", i + 1, jobs.len(), links.len());
                per_page.push((i, jobs));
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&pages_arc[i]);
                }
                if links.len() >= settings.max_jobs && !stop.swap(true, Ordering::Relaxed) {
                    logf!("Scrape: reached {} jobs, stopping", settings.max_jobs);
                }
            }
            Err((i, msg)) => {
                loge!("Scrape: page {}: {}", pages_arc[i], msg);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&pages_arc[i]);
                }
            }
        }
    }

    let jobs = merge_pages(per_page, settings.max_jobs);
    logf!("Scrape: {} postings collected", jobs.len());
    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(link: &str, desc: &str) -> JobPosting {
        JobPosting {
            title: s!("Data Analyst"),
            link: s!(link),
            description: s!(desc),
            requirements: s!("SQL"),
            ..Default::default()
        }
    }

    #[test]
    fn merge_orders_dedupes_and_caps() {
        let pages = vec![
            (1, vec![job("b", "d"), job("a", "d")]),
            (0, vec![job("a", "d"), job("c", "d")]),
        ];
        let out = merge_pages(pages, 10);
        let links: Vec<_> = out.iter().map(|j| j.link.as_str()).collect();
        assert_eq!(links, vec!["a", "c", "b"]);

        let pages = vec![(0, vec![job("a", "d"), job("b", "d"), job("c", "d")])];
        assert_eq!(merge_pages(pages, 2).len(), 2);
    }

    #[test]
    fn jitter_stays_within_bound() {
        assert_eq!(jitter(0), 0);
        for _ in 0..200 {
            assert!(jitter(50) <= 50);
        }
    }

    #[test]
    fn merge_drops_unverified_postings() {
        let pages = vec![(0, vec![job("a", ""), job("b", "text"), job("", "text")])];
        let out = merge_pages(pages, 10);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].link, "b");
    }
}
