// src/analysis/provinces.rs
//
// Province names as they appear in CareerViet location cells, with their region.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    North,
    Central,
    South,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::North, Region::Central, Region::South];

    pub fn label(self) -> &'static str {
        match self {
            Region::North => "North",
            Region::Central => "Central",
            Region::South => "South",
        }
    }
}

pub const PROVINCES: &[(&str, Region)] = &[
    // North
    ("Hà Nội", Region::North),
    ("Hải Phòng", Region::North),
    ("Thái Nguyên", Region::North),
    ("Bắc Ninh", Region::North),
    ("Hạ Long", Region::North),
    ("Lào Cai", Region::North),
    ("Điện Biên", Region::North),
    ("Hải Dương", Region::North),
    ("Nam Định", Region::North),
    ("Ninh Bình", Region::North),
    ("Vĩnh Phúc", Region::North),
    ("Cao Bằng", Region::North),
    ("Lạng Sơn", Region::North),
    ("Bắc Giang", Region::North),
    ("Thái Bình", Region::North),
    ("Hà Giang", Region::North),
    ("Yên Bái", Region::North),
    ("Phú Thọ", Region::North),
    ("Tuyên Quang", Region::North),
    ("Hà Nam", Region::North),
    ("Bắc Kạn", Region::North),
    ("Hưng Yên", Region::North),
    ("Hòa Bình", Region::North),
    ("Quảng Ninh", Region::North),
    ("Sơn La", Region::North),

    // Central
    ("Đà Nẵng", Region::Central),
    ("Huế", Region::Central),
    ("Nha Trang", Region::Central),
    ("Quy Nhơn", Region::Central),
    ("Đà Lạt", Region::Central),
    ("Thanh Hóa", Region::Central),
    ("Nghệ An", Region::Central),
    ("Hà Tĩnh", Region::Central),
    ("Quảng Bình", Region::Central),
    ("Quảng Trị", Region::Central),
    ("Thừa Thiên Huế", Region::Central),
    ("Quảng Nam", Region::Central),
    ("Quảng Ngãi", Region::Central),
    ("Bình Định", Region::Central),
    ("Phú Yên", Region::Central),
    ("Khánh Hòa", Region::Central),
    ("Ninh Thuận", Region::Central),
    ("Bình Thuận", Region::Central),
    ("Kon Tum", Region::Central),
    ("Gia Lai", Region::Central),
    ("Đắk Lắk", Region::Central),
    ("Đắk Nông", Region::Central),
    ("Lâm Đồng", Region::Central),

    // South
    ("Hồ Chí Minh", Region::South),
    ("Cần Thơ", Region::South),
    ("Biên Hòa", Region::South),
    ("Vũng Tàu", Region::South),
    ("Long Xuyên", Region::South),
    ("Tây Ninh", Region::South),
    ("Bình Phước", Region::South),
    ("Bình Dương", Region::South),
    ("Đồng Nai", Region::South),
    ("Bà Rịa - Vũng Tàu", Region::South),
    ("Long An", Region::South),
    ("Tiền Giang", Region::South),
    ("Bến Tre", Region::South),
    ("Trà Vinh", Region::South),
    ("Vĩnh Long", Region::South),
    ("Đồng Tháp", Region::South),
    ("An Giang", Region::South),
    ("Kiên Giang", Region::South),
    ("Hậu Giang", Region::South),
    ("Sóc Trăng", Region::South),
    ("Bạc Liêu", Region::South),
    ("Cà Mau", Region::South),
];

pub fn region_of(province: &str) -> Option<Region> {
    PROVINCES.iter().find(|(p, _)| *p == province).map(|(_, r)| *r)
}

/// Provinces named in a location cell. Longer names are tried first and each
/// match is cut out of the text, so "Thừa Thiên Huế" is not also counted as "Huế".
pub fn extract_provinces(location: &str) -> Vec<&'static str> {
    let mut by_len: Vec<&'static str> = PROVINCES.iter().map(|(p, _)| *p).collect();
    by_len.sort_by_key(|p| std::cmp::Reverse(p.chars().count()));

    let mut remaining = location.to_lowercase();
    let mut found = Vec::new();
    for province in by_len {
        let needle = province.to_lowercase();
        if remaining.contains(&needle) {
            found.push(province);
            remaining = remaining.replace(&needle, "");
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_name_wins() {
        assert_eq!(extract_provinces("Thừa Thiên Huế"), vec!["Thừa Thiên Huế"]);
        assert_eq!(extract_provinces("Bà Rịa - Vũng Tàu"), vec!["Bà Rịa - Vũng Tàu"]);
    }

    #[test]
    fn several_provinces_in_one_cell() {
        let mut got = extract_provinces("Hà Nội, Hồ Chí Minh");
        got.sort();
        assert_eq!(got, vec!["Hà Nội", "Hồ Chí Minh"]);
        assert!(extract_provinces("Nước ngoài").is_empty());
    }

    #[test]
    fn regions() {
        assert_eq!(region_of("Hà Nội"), Some(Region::North));
        assert_eq!(region_of("Đà Nẵng"), Some(Region::Central));
        assert_eq!(region_of("Cần Thơ"), Some(Region::South));
        assert_eq!(region_of("Paris"), None);
    }
}
