// src/posting.rs
//
// Row types for the three CSV stages. Column names are the on-disk headers.

use serde::{Deserialize, Serialize};

/// One scraped listing with its detail page fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPosting {
    #[serde(rename = "Job Title")]
    pub title: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Salary")]
    pub salary: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Job Link")]
    pub link: String,
    #[serde(rename = "Expire Date")]
    pub expire: String,
    #[serde(rename = "Welfare", with = "list_cell")]
    pub welfare: Vec<String>,
    #[serde(rename = "Job Description")]
    pub description: String,
    #[serde(rename = "Job Requirements")]
    pub requirements: String,
    #[serde(rename = "Job Level")]
    pub level: String,
    #[serde(rename = "Job Type")]
    pub job_type: String,
    #[serde(rename = "Experience")]
    pub experience: String,
    #[serde(rename = "Industry")]
    pub industry: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "VND")]
    Vnd,
    #[serde(rename = "USD")]
    Usd,
    #[default]
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Entry,
    Junior,
    Mid,
    Senior,
    Expert,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 5] = [
        ExperienceLevel::Entry,
        ExperienceLevel::Junior,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
        ExperienceLevel::Expert,
    ];

    pub fn from_years(years: f64) -> Self {
        match years {
            y if y < 1.0 => ExperienceLevel::Entry,
            y if y < 3.0 => ExperienceLevel::Junior,
            y if y < 5.0 => ExperienceLevel::Mid,
            y if y < 10.0 => ExperienceLevel::Senior,
            _ => ExperienceLevel::Expert,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Entry",
            ExperienceLevel::Junior => "Junior",
            ExperienceLevel::Mid => "Mid",
            ExperienceLevel::Senior => "Senior",
            ExperienceLevel::Expert => "Expert",
        }
    }
}

/// A posting after normalization. Carries every raw column plus the derived ones.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanPosting {
    #[serde(rename = "Job Title")]
    pub title: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Salary")]
    pub salary: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Job Link")]
    pub link: String,
    #[serde(rename = "Expire Date")]
    pub expire: String,
    #[serde(rename = "Welfare", with = "list_cell")]
    pub welfare: Vec<String>,
    #[serde(rename = "Job Description")]
    pub description: String,
    #[serde(rename = "Job Requirements")]
    pub requirements: String,
    #[serde(rename = "Job Level")]
    pub level: String,
    #[serde(rename = "Job Type")]
    pub job_type: String,
    #[serde(rename = "Experience")]
    pub experience: String,
    #[serde(rename = "Industry")]
    pub industry: String,

    #[serde(rename = "Min_Salary")]
    pub min_salary: Option<f64>,
    #[serde(rename = "Max_Salary")]
    pub max_salary: Option<f64>,
    #[serde(rename = "Currency")]
    pub currency: Currency,
    #[serde(rename = "Salary_Imputed")]
    pub salary_imputed: bool,
    pub exp_min: Option<f64>,
    pub exp_max: Option<f64>,
    #[serde(rename = "Experience_Level")]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(rename = "Expire_Date")]
    pub expire_date: String,
    #[serde(rename = "Data_Related")]
    pub data_related: bool,
}

/// A clean posting with its keyword tags. Tags repeat once per occurrence.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggedPosting {
    #[serde(rename = "Job Title")]
    pub title: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Salary")]
    pub salary: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Job Link")]
    pub link: String,
    #[serde(rename = "Expire Date")]
    pub expire: String,
    #[serde(rename = "Welfare", with = "list_cell")]
    pub welfare: Vec<String>,
    #[serde(rename = "Job Description")]
    pub description: String,
    #[serde(rename = "Job Requirements")]
    pub requirements: String,
    #[serde(rename = "Job Level")]
    pub level: String,
    #[serde(rename = "Job Type")]
    pub job_type: String,
    #[serde(rename = "Experience")]
    pub experience: String,
    #[serde(rename = "Industry")]
    pub industry: String,
    #[serde(rename = "Min_Salary")]
    pub min_salary: Option<f64>,
    #[serde(rename = "Max_Salary")]
    pub max_salary: Option<f64>,
    #[serde(rename = "Currency")]
    pub currency: Currency,
    #[serde(rename = "Salary_Imputed")]
    pub salary_imputed: bool,
    pub exp_min: Option<f64>,
    pub exp_max: Option<f64>,
    #[serde(rename = "Experience_Level")]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(rename = "Expire_Date")]
    pub expire_date: String,
    #[serde(rename = "Data_Related")]
    pub data_related: bool,

    #[serde(rename = "Soft Skills", with = "list_cell")]
    pub soft_skills: Vec<String>,
    #[serde(rename = "Hard Skills", with = "list_cell")]
    pub hard_skills: Vec<String>,
    #[serde(rename = "Domains", with = "list_cell")]
    pub domains: Vec<String>,
}

impl TaggedPosting {
    pub fn new(p: CleanPosting, soft: Vec<String>, hard: Vec<String>, domains: Vec<String>) -> Self {
        Self {
            title: p.title,
            company: p.company,
            location: p.location,
            salary: p.salary,
            date: p.date,
            link: p.link,
            expire: p.expire,
            welfare: p.welfare,
            description: p.description,
            requirements: p.requirements,
            level: p.level,
            job_type: p.job_type,
            experience: p.experience,
            industry: p.industry,
            min_salary: p.min_salary,
            max_salary: p.max_salary,
            currency: p.currency,
            salary_imputed: p.salary_imputed,
            exp_min: p.exp_min,
            exp_max: p.exp_max,
            experience_level: p.experience_level,
            expire_date: p.expire_date,
            data_related: p.data_related,
            soft_skills: soft,
            hard_skills: hard,
            domains,
        }
    }
}

/// Deduplication key: the listing URL, or title|company|location without one.
pub trait Identity {
    fn identity_key(&self) -> String;
}

fn key_of(link: &str, title: &str, company: &str, location: &str) -> String {
    let link = link.trim();
    if link.is_empty() {
        join!(title.trim(), "|", company.trim(), "|", location.trim())
    } else {
        s!(link)
    }
}

impl Identity for JobPosting {
    fn identity_key(&self) -> String {
        key_of(&self.link, &self.title, &self.company, &self.location)
    }
}

impl Identity for CleanPosting {
    fn identity_key(&self) -> String {
        key_of(&self.link, &self.title, &self.company, &self.location)
    }
}

/// List columns live in one CSV cell, joined by "; ".
mod list_cell {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::core::sanitize::{join_list, split_list};

    pub fn serialize<S: Serializer>(v: &[String], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&join_list(v))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        let cell = Option::<String>::deserialize(d)?.unwrap_or_default();
        Ok(split_list(&cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_prefers_link() {
        let mut p = JobPosting {
            title: s!("Data Analyst"),
            company: s!("Acme"),
            location: s!("Hà Nội"),
            link: s!("https://careerviet.vn/vi/tim-viec-lam/x.1.html"),
            ..Default::default()
        };
        assert_eq!(p.identity_key(), "https://careerviet.vn/vi/tim-viec-lam/x.1.html");
        p.link.clear();
        assert_eq!(p.identity_key(), "Data Analyst|Acme|Hà Nội");
    }

    #[test]
    fn experience_buckets() {
        assert_eq!(ExperienceLevel::from_years(0.0), ExperienceLevel::Entry);
        assert_eq!(ExperienceLevel::from_years(1.0), ExperienceLevel::Junior);
        assert_eq!(ExperienceLevel::from_years(3.0), ExperienceLevel::Mid);
        assert_eq!(ExperienceLevel::from_years(7.5), ExperienceLevel::Senior);
        assert_eq!(ExperienceLevel::from_years(12.0), ExperienceLevel::Expert);
    }

    #[test]
    fn list_cells_read_back_from_csv() {
        let p = JobPosting {
            title: s!("BI Developer"),
            welfare: vec![s!("Laptop"), s!("Bảo hiểm")],
            ..Default::default()
        };
        let mut w = csv::Writer::from_writer(vec![]);
        w.serialize(&p).unwrap();
        let bytes = w.into_inner().unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.contains("Laptop; Bảo hiểm"));

        let mut r = csv::Reader::from_reader(bytes.as_slice());
        let back: JobPosting = r.deserialize().next().unwrap().unwrap();
        assert_eq!(back, p);
    }
}
