// src/clean/experience.rs
//
// Free-text experience → (min, max) years.

use once_cell::sync::Lazy;
use regex::Regex;

static YEARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?").unwrap());

fn first_number(s: &str) -> Option<f64> {
    YEARS.find(s).and_then(|m| m.as_str().parse().ok())
}

pub fn parse_experience(text: &str) -> (Option<f64>, Option<f64>) {
    let lower = text.to_lowercase();

    if lower.contains("chưa có kinh nghiệm") {
        return (Some(0.0), Some(0.0));
    }
    if lower.contains("lên đến") {
        return (Some(0.0), first_number(&lower));
    }

    let mut parts = lower.splitn(2, '-');
    let min = parts.next().and_then(first_number);
    let max = parts.next().and_then(first_number);

    if lower.contains("trên") {
        return (min, None);
    }
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_and_keywords() {
        assert_eq!(parse_experience("2 - 5 Năm"), (Some(2.0), Some(5.0)));
        assert_eq!(parse_experience("Chưa Có Kinh Nghiệm"), (Some(0.0), Some(0.0)));
        assert_eq!(parse_experience("Trên 3 Năm"), (Some(3.0), None));
        assert_eq!(parse_experience("Lên Đến 2 Năm"), (Some(0.0), Some(2.0)));
        assert_eq!(parse_experience("1.5 Năm"), (Some(1.5), None));
        assert_eq!(parse_experience("Not Available"), (None, None));
    }
}
