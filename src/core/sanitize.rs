// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Word-initial letters upper, the rest lower. A "word" is a run of letters,
/// so `"data-driven 3d"` → `"Data-Driven 3D"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_letter = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_letter { out.extend(ch.to_lowercase()); }
            else { out.extend(ch.to_uppercase()); }
            prev_letter = true;
        } else {
            out.push(ch);
            prev_letter = false;
        }
    }
    out
}

/// Listing titles carry a "(Mới)" badge on fresh posts.
pub fn strip_new_badge(s: &str) -> String {
    normalize_ws(&s.replace("(Mới)", "").replace('\n', " "))
}

/// Multi-line location cells ("Hà Nội\r\nHồ Chí Minh") become one comma list.
pub fn normalize_location(s: &str) -> String {
    let joined = s.replace("\r\n", ",").replace(['\n', '\r'], ",");
    joined
        .split(',')
        .map(normalize_ws)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn ascii_letter_count(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_alphabetic()).count()
}

/// Cell encoding for list-valued columns.
pub const LIST_SEP: &str = "; ";

pub fn join_list(items: &[String]) -> String {
    items.join(LIST_SEP)
}

pub fn split_list(cell: &str) -> Vec<String> {
    cell.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_matches_word_runs() {
        assert_eq!(title_case("data ANALYST"), "Data Analyst");
        assert_eq!(title_case("chuyên viên phân tích"), "Chuyên Viên Phân Tích");
        assert_eq!(title_case("7 tr - 15 tr vnd"), "7 Tr - 15 Tr Vnd");
        assert_eq!(title_case("data-driven 3d"), "Data-Driven 3D");
    }

    #[test]
    fn title_case_is_idempotent() {
        for s in ["Senior BI engineer", "lên đến 20 tr vnd", "", "ÀÁ bb"] {
            let once = title_case(s);
            assert_eq!(title_case(&once), once);
        }
    }

    #[test]
    fn strip_new_badge_cleans_title() {
        assert_eq!(strip_new_badge("  Data Analyst (Mới)\n "), "Data Analyst");
    }

    #[test]
    fn normalize_location_joins_lines() {
        assert_eq!(normalize_location("Hà Nội\r\nHồ Chí Minh"), "Hà Nội, Hồ Chí Minh");
        assert_eq!(normalize_location("Hà Nội ,  Đà Nẵng,"), "Hà Nội, Đà Nẵng");
        let once = normalize_location("A\nB");
        assert_eq!(normalize_location(&once), once);
    }

    #[test]
    fn list_cells_split_back() {
        let items = vec![s!("SQL"), s!("Power BI")];
        assert_eq!(split_list(&join_list(&items)), items);
        assert!(split_list("").is_empty());
    }
}
