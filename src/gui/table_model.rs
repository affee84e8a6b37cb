// src/gui/table_model.rs
//! String grid behind the Raw Data table.
//!
//! Records are flattened through the same serde + csv path used for the
//! stage files, so the on-screen columns match the CSV headers exactly.

use serde::Serialize;

use crate::error::{Error, Result};

#[derive(Clone, Debug, Default)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn from_records<T: Serialize>(records: &[T]) -> Result<Self> {
        if records.is_empty() {
            return Ok(Self::default());
        }
        let mut w = csv::Writer::from_writer(Vec::new());
        for r in records {
            w.serialize(r)?;
        }
        let bytes = w.into_inner().map_err(|e| Error::Io(e.into_error()))?;

        let mut r = csv::Reader::from_reader(bytes.as_slice());
        let headers = r.headers()?.iter().map(String::from).collect();
        let mut rows = Vec::with_capacity(records.len());
        for rec in r.records() {
            rows.push(rec?.iter().map(String::from).collect());
        }
        Ok(Self { headers, rows })
    }

    pub fn ncols(&self) -> usize {
        self.headers.len()
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Indices of rows with any cell containing `query`, case-insensitive.
    /// An empty query keeps every row.
    pub fn matching(&self, query: &str) -> Vec<usize> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return (0..self.rows.len()).collect();
        }
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.iter().any(|cell| cell.to_lowercase().contains(&q)))
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posting::CleanPosting;

    fn rows() -> Vec<CleanPosting> {
        vec![
            CleanPosting { title: s!("Data Analyst"), company: s!("Acme"), min_salary: Some(15e6), ..Default::default() },
            CleanPosting { title: s!("BI Developer"), company: s!("Globex"), ..Default::default() },
        ]
    }

    #[test]
    fn columns_follow_csv_headers() {
        let t = TableData::from_records(&rows()).unwrap();
        assert_eq!(t.nrows(), 2);
        assert_eq!(t.headers[0], "Job Title");
        assert!(t.headers.iter().any(|h| h == "Min_Salary"));
        assert_eq!(t.rows[1][1], "Globex");
    }

    #[test]
    fn search_is_case_insensitive() {
        let t = TableData::from_records(&rows()).unwrap();
        assert_eq!(t.matching("globex"), vec![1]);
        assert_eq!(t.matching("  "), vec![0, 1]);
        assert!(t.matching("nowhere").is_empty());
    }

    #[test]
    fn empty_input_is_empty_table() {
        let t = TableData::from_records::<CleanPosting>(&[]).unwrap();
        assert_eq!(t.ncols(), 0);
    }
}
