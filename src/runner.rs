// src/runner.rs
//
// Batch orchestration: harvest feat links per category, then fetch and
// extract pages on a small worker pool. Broken links come back as part of
// the report value; nothing here is process-global.

use std::{
    error::Error,
    sync::{
        atomic::{AtomicUsize, Ordering},
        mpsc, Arc,
    },
    thread,
    time::Duration,
};

use crate::{
    config::consts::{JITTER_MS, REQUEST_PAUSE_MS, WORKERS},
    config::options::{CategorySelector, ExportOptions, ScrapeOptions},
    model::FeatRecord,
    progress::Progress,
    scrape::{self, categories::find_category, Category},
    store,
};

/// What a run produced. `broken_links` lists pages that could not be
/// reached even after redirect recovery; they need manual follow-up.
pub struct RunReport {
    pub written: usize,
    pub broken_links: Vec<String>,
}

pub fn run(
    scrape_opts: &ScrapeOptions,
    export: &ExportOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunReport, Box<dyn Error>> {
    let selected = select_categories(&scrape_opts.categories)?;

    // Phase 1: link harvesting, sequential (one page per category)
    let mut jobs: Vec<(String, &'static str)> = Vec::new();
    for cat in &selected {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Finding links: {}", cat.name));
        }
        match scrape::harvest_links(cat) {
            Ok(links) => jobs.extend(links.into_iter().map(|l| (l, cat.name))),
            Err(e) => {
                loge!("Category {}: {}", cat.name, e);
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("Warning: category {} skipped: {}", cat.name, e));
                }
            }
        }
    }
    if let Some(limit) = scrape_opts.limit {
        jobs.truncate(limit);
    }

    logf!("Harvested {} feat links across {} categories", jobs.len(), selected.len());
    if let Some(p) = progress.as_deref_mut() {
        p.begin(jobs.len());
    }

    // Phase 2: fetch and extract on a worker pool
    type FetchOk = (usize, FeatRecord);
    type FetchErr = (usize, String);

    let jobs_arc = Arc::new(jobs);
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<Result<FetchOk, FetchErr>>();

    let workers = WORKERS.min(jobs_arc.len()).max(1);

    for _ in 0..workers {
        let jobs = Arc::clone(&jobs_arc);
        let idx = Arc::clone(&counter);
        let tx = res_tx.clone();

        thread::spawn(move || loop {
            let i = idx.fetch_add(1, Ordering::Relaxed);
            if i >= jobs.len() {
                break;
            }
            let (link, category) = (&jobs[i].0, jobs[i].1);
            let result = match scrape::fetch_feat(link, category) {
                Ok(record) => Ok((i, record)),
                Err(e) => Err((i, e.to_string())),
            };
            let _ = tx.send(result);
            let jitter = (i as u64) % JITTER_MS;
            thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS + jitter)); // be polite
        });
    }
    drop(res_tx); // main thread is sole receiver now

    // Aggregate: save as results land, collect failures
    let mut written = 0usize;
    let mut broken_links = Vec::new();

    for _ in 0..jobs_arc.len() {
        match res_rx.recv() {
            Ok(Ok((_, record))) => {
                let name = record.name.clone();
                match store::save_feat(&record, &export.out_dir, export.pretty) {
                    Ok(_) => written += 1,
                    Err(e) => loge!("Write failed for {}: {}", name, e),
                }
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&name);
                }
            }
            Ok(Err((i, msg))) => {
                let link = jobs_arc[i].0.clone();
                loge!("Feat page {}: {}", link, msg);
                broken_links.push(link);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&jobs_arc[i].0);
                }
            }
            Err(_) => break, // workers ended early; bail gracefully
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(RunReport { written, broken_links })
}

fn select_categories(sel: &CategorySelector) -> Result<Vec<&'static Category>, Box<dyn Error>> {
    match sel {
        CategorySelector::All => Ok(scrape::CATEGORIES.iter().collect()),
        CategorySelector::Named(names) => {
            let mut out = Vec::with_capacity(names.len());
            for name in names {
                let cat = find_category(name)
                    .ok_or_else(|| format!("Unknown category: {}", name))?;
                out.push(cat);
            }
            Ok(out)
        }
    }
}
