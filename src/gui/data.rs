// src/gui/data.rs
//
// Read-only copies of the stage CSVs for the dashboard. Loaded at startup,
// replaced wholesale on Reload or after a pipeline run.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{
    config::{state::Dataset, Paths},
    error::Error,
    posting::{CleanPosting, TaggedPosting},
    skills::{skill_counts, SkillCount, SkillKind},
    store::load_records,
};

use super::table_model::TableData;

#[derive(Clone, Debug, Default)]
pub struct Datasets {
    pub processed: Vec<CleanPosting>,
    pub filtered: Vec<CleanPosting>,
    pub analyst: Vec<CleanPosting>,
    pub tagged: Vec<TaggedPosting>,
    counts: [Vec<SkillCount>; 3],
    tables: [TableData; 3],
}

/// Missing files are expected before the first run; other errors are logged.
fn load_or_empty<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    match load_records(path) {
        Ok(rows) => {
            logd!("Cache: loaded {} rows from {}", rows.len(), path.display());
            rows
        }
        Err(Error::MissingInput(p)) => {
            logd!("Cache: {} not found", p.display());
            Vec::new()
        }
        Err(e) => {
            loge!("Cache: failed to read {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

impl Datasets {
    pub fn load(paths: &Paths) -> Self {
        let tagged: Vec<TaggedPosting> = load_or_empty(&paths.analyst_skills);
        let mut counts: [Vec<SkillCount>; 3] = [
            load_or_empty(&paths.soft_skills),
            load_or_empty(&paths.hard_skills),
            load_or_empty(&paths.domain_skills),
        ];
        // Count files lag behind the tagged CSV only if a run was interrupted.
        for (slot, kind) in counts.iter_mut().zip(SkillKind::ALL) {
            if slot.is_empty() && !tagged.is_empty() {
                *slot = skill_counts(&tagged, kind);
            }
        }

        let mut out = Self {
            processed: load_or_empty(&paths.processed),
            filtered: load_or_empty(&paths.filtered),
            analyst: load_or_empty(&paths.analyst),
            tagged,
            counts,
            tables: Default::default(),
        };
        for (i, which) in Dataset::ALL.into_iter().enumerate() {
            match TableData::from_records(out.records(which)) {
                Ok(t) => out.tables[i] = t,
                Err(e) => loge!("Cache: cannot tabulate {}: {}", which.label(), e),
            }
        }
        logf!(
            "Cache: processed={} filtered={} analyst={} tagged={}",
            out.processed.len(),
            out.filtered.len(),
            out.analyst.len(),
            out.tagged.len()
        );
        out
    }

    pub fn records(&self, which: Dataset) -> &[CleanPosting] {
        match which {
            Dataset::Processed => &self.processed,
            Dataset::Filtered => &self.filtered,
            Dataset::Analyst => &self.analyst,
        }
    }

    pub fn table(&self, which: Dataset) -> &TableData {
        match which {
            Dataset::Processed => &self.tables[0],
            Dataset::Filtered => &self.tables[1],
            Dataset::Analyst => &self.tables[2],
        }
    }

    pub fn counts(&self, kind: SkillKind) -> &[SkillCount] {
        match kind {
            SkillKind::Soft => &self.counts[0],
            SkillKind::Hard => &self.counts[1],
            SkillKind::Domain => &self.counts[2],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.processed.is_empty() && self.filtered.is_empty() && self.analyst.is_empty()
    }
}
