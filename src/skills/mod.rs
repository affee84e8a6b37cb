// src/skills/mod.rs
//
// Keyword skill tagging. Each table term becomes one whole-word pattern over
// lowercased text; a term is reported once per occurrence.

pub mod tables;

use std::collections::{HashMap, HashSet};

use regex::{Regex, RegexSet};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::posting::{CleanPosting, TaggedPosting};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkillKind {
    Soft,
    Hard,
    Domain,
}

impl SkillKind {
    pub const ALL: [SkillKind; 3] = [SkillKind::Soft, SkillKind::Hard, SkillKind::Domain];

    pub fn table(self) -> &'static [&'static str] {
        match self {
            SkillKind::Soft => tables::SOFT_SKILLS,
            SkillKind::Hard => tables::HARD_SKILLS,
            SkillKind::Domain => tables::DOMAINS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillKind::Soft => "Soft Skills",
            SkillKind::Hard => "Hard Skills",
            SkillKind::Domain => "Domains",
        }
    }

    pub fn tags(self, p: &TaggedPosting) -> &[String] {
        match self {
            SkillKind::Soft => &p.soft_skills,
            SkillKind::Hard => &p.hard_skills,
            SkillKind::Domain => &p.domains,
        }
    }
}

/// Which posting text the tagger reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextColumn {
    #[default]
    Requirements,
    Description,
}

impl TextColumn {
    fn of(self, p: &CleanPosting) -> &str {
        match self {
            TextColumn::Requirements => &p.requirements,
            TextColumn::Description => &p.description,
        }
    }
}

pub struct SkillMatcher {
    /// Canonical spelling per distinct lowercase term, in table order.
    terms: Vec<String>,
    patterns: Vec<Regex>,
    any: RegexSet,
}

impl SkillMatcher {
    pub fn new(table: &[&str]) -> Result<Self> {
        // Later spellings of a term replace earlier ones; the position stays.
        let mut order: Vec<String> = Vec::new();
        let mut canon: HashMap<String, String> = HashMap::new();
        for term in table {
            let key = term.to_lowercase();
            if !canon.contains_key(&key) {
                order.push(key.clone());
            }
            canon.insert(key, s!(*term));
        }

        let sources: Vec<String> = order.iter().map(|k| format!(r"\b{}\b", regex::escape(k))).collect();
        let patterns = sources.iter().map(|p| Regex::new(p)).collect::<std::result::Result<Vec<_>, _>>()?;
        let any = RegexSet::new(&sources)?;
        let terms = order.into_iter().filter_map(|k| canon.remove(&k)).collect();

        Ok(Self { terms, patterns, any })
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Canonical terms found in `text`, repeated per occurrence, in table order.
    pub fn extract(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        let lower = text.to_lowercase();
        let mut found = Vec::new();
        for i in self.any.matches(&lower).iter() {
            let n = self.patterns[i].find_iter(&lower).count();
            found.extend(std::iter::repeat_n(&self.terms[i], n).cloned());
        }
        found
    }
}

pub struct SkillTagger {
    soft: SkillMatcher,
    hard: SkillMatcher,
    domains: SkillMatcher,
}

impl SkillTagger {
    pub fn new() -> Result<Self> {
        Ok(Self {
            soft: SkillMatcher::new(tables::SOFT_SKILLS)?,
            hard: SkillMatcher::new(tables::HARD_SKILLS)?,
            domains: SkillMatcher::new(tables::DOMAINS)?,
        })
    }

    pub fn matcher(&self, kind: SkillKind) -> &SkillMatcher {
        match kind {
            SkillKind::Soft => &self.soft,
            SkillKind::Hard => &self.hard,
            SkillKind::Domain => &self.domains,
        }
    }

    pub fn tag(&self, p: CleanPosting, column: TextColumn) -> TaggedPosting {
        let text = column.of(&p);
        let soft = self.soft.extract(text);
        let hard = self.hard.extract(text);
        let domains = self.domains.extract(text);
        TaggedPosting::new(p, soft, hard, domains)
    }

    pub fn tag_all(&self, records: &[CleanPosting], column: TextColumn) -> Vec<TaggedPosting> {
        let out: Vec<TaggedPosting> = records.iter().cloned().map(|p| self.tag(p, column)).collect();
        let tagged = out
            .iter()
            .filter(|t| !(t.soft_skills.is_empty() && t.hard_skills.is_empty() && t.domains.is_empty()))
            .count();
        logf!("Skills: tagged {}/{} postings", tagged, out.len());
        out
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCount {
    #[serde(rename = "Skill")]
    pub skill: String,
    #[serde(rename = "Count")]
    pub count: usize,
}

/// Occurrence counts of one tag column, most frequent first, ties by name.
pub fn skill_counts(records: &[TaggedPosting], kind: SkillKind) -> Vec<SkillCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for r in records {
        for tag in kind.tags(r) {
            *counts.entry(tag.as_str()).or_default() += 1;
        }
    }
    let mut out: Vec<SkillCount> = counts
        .into_iter()
        .map(|(skill, count)| SkillCount { skill: s!(skill), count })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.skill.cmp(&b.skill)));
    out
}

/// Number of postings mentioning each tag at least once.
pub fn postings_per_skill(records: &[TaggedPosting], kind: SkillKind) -> Vec<SkillCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for r in records {
        let distinct: HashSet<&str> = kind.tags(r).iter().map(String::as_str).collect();
        for tag in distinct {
            *counts.entry(tag).or_default() += 1;
        }
    }
    let mut out: Vec<SkillCount> = counts
        .into_iter()
        .map(|(skill, count)| SkillCount { skill: s!(skill), count })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.skill.cmp(&b.skill)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_word_occurrences_in_table_order() {
        let m = SkillMatcher::new(&["SQL", "Python", "R", "Power BI"]).unwrap();
        let found = m.extract("Strong sql and Python; SQL Server, r or R. mysql does not count. power bi");
        assert_eq!(found, vec!["SQL", "SQL", "Python", "R", "R", "Power BI"]);
    }

    #[test]
    fn duplicate_terms_collapse() {
        let m = SkillMatcher::new(&["Metric Design", "Excel", "metric design"]).unwrap();
        assert_eq!(m.len(), 2);
        assert_eq!(m.extract("metric design in excel"), vec!["metric design", "Excel"]);
    }

    #[test]
    fn empty_text_has_no_tags() {
        let t = SkillTagger::new().unwrap();
        assert!(t.matcher(SkillKind::Hard).extract("").is_empty());
        assert!(t.matcher(SkillKind::Soft).extract("   ").is_empty());
    }

    #[test]
    fn extraction_is_deterministic() {
        let t = SkillTagger::new().unwrap();
        let text = "Use SQL, Python, Tableau and Excel. Communication and Leadership. Banking or Retail.";
        let a = t.matcher(SkillKind::Hard).extract(text);
        let b = t.matcher(SkillKind::Hard).extract(text);
        assert_eq!(a, b);
        assert!(a.contains(&s!("SQL")) && a.contains(&s!("Tableau")));
        assert_eq!(t.matcher(SkillKind::Soft).extract(text), vec!["Communication", "Leadership"]);
        assert_eq!(t.matcher(SkillKind::Domain).extract(text), vec!["Banking", "Retail"]);
    }

    #[test]
    fn tag_all_reads_requirements_by_default() {
        let t = SkillTagger::new().unwrap();
        let p = CleanPosting {
            requirements: s!("SQL and SQL again, teamwork"),
            description: s!("Python"),
            ..Default::default()
        };
        let tagged = t.tag_all(&[p.clone()], TextColumn::default());
        assert_eq!(tagged[0].hard_skills, vec!["SQL", "SQL"]);
        let by_desc = t.tag_all(&[p], TextColumn::Description);
        assert_eq!(by_desc[0].hard_skills, vec!["Python"]);
    }

    #[test]
    fn counts_sorted_desc_then_name() {
        let rows = vec![
            TaggedPosting { hard_skills: vec![s!("SQL"), s!("SQL"), s!("Excel")], ..Default::default() },
            TaggedPosting { hard_skills: vec![s!("Python"), s!("Excel")], ..Default::default() },
        ];
        let counts = skill_counts(&rows, SkillKind::Hard);
        let pairs: Vec<_> = counts.iter().map(|c| (c.skill.as_str(), c.count)).collect();
        assert_eq!(pairs, vec![("Excel", 2), ("SQL", 2), ("Python", 1)]);

        let per = postings_per_skill(&rows, SkillKind::Hard);
        assert_eq!(per[0], SkillCount { skill: s!("Excel"), count: 2 });
        assert_eq!(per[1], SkillCount { skill: s!("Python"), count: 1 });
    }
}
