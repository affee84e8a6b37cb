// src/clean/salary.rs
//
// Free-text salary → numeric VND bounds.
//   "15 Tr - 25 Tr VND"   → 15e6 .. 25e6
//   "1,000 - 1,500 USD"   → ×rate
//   "Lên Đến 30 Tr VND"   → .. 30e6 (min left for imputation)
//   "Cạnh tranh"          → nothing

use once_cell::sync::Lazy;
use regex::Regex;

use crate::posting::Currency;

const MILLION: f64 = 1_000_000.0;

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d[\d,]*(?:\.\d+)?").unwrap());
static MILLIONS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\btr\b").unwrap());
static USD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\busd\b|\$").unwrap());
static VND: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bvnd\b|\bđồng\b").unwrap());

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SalaryRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub currency: Currency,
}

fn number(raw: &str) -> Option<f64> {
    raw.replace(',', "").parse().ok()
}

pub fn parse_salary(text: &str, usd_rate: f64) -> SalaryRange {
    let lower = text.to_lowercase();
    let nums: Vec<f64> = NUMBER.find_iter(&lower).filter_map(|m| number(m.as_str())).collect();

    let (currency, scale) = if USD.is_match(&lower) {
        (Currency::Usd, usd_rate)
    } else if MILLIONS.is_match(&lower) {
        (Currency::Vnd, MILLION)
    } else if VND.is_match(&lower) {
        (Currency::Vnd, 1.0)
    } else {
        (Currency::Unknown, 1.0)
    };

    let Some(&first) = nums.first() else {
        return SalaryRange { min: None, max: None, currency };
    };

    if lower.contains("lên đến") {
        return SalaryRange { min: None, max: Some(first * scale), currency };
    }

    SalaryRange {
        min: Some(first * scale),
        max: nums.get(1).map(|n| n * scale),
        currency,
    }
}
