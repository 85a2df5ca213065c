use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};

/// Surová tabuľka orientovaná po riadkoch - hodnoty sú zatiaľ len reťazce
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub records: Vec<HashMap<String, String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, records: Vec<HashMap<String, String>>) -> Self {
        Self { headers, records }
    }

    /// Zostaví tabuľku z hlavičky a riadkov v poradí stĺpcov
    pub fn from_rows(headers: &[&str], rows: &[Vec<&str>]) -> Result<Self> {
        let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        let mut records = Vec::with_capacity(rows.len());

        for (idx, row) in rows.iter().enumerate() {
            if row.len() != headers.len() {
                return Err(Error::Table(format!(
                    "Riadok {} má {} stĺpcov, očakávaných {}",
                    idx + 1,
                    row.len(),
                    headers.len()
                )));
            }
            records.push(
                headers
                    .iter()
                    .cloned()
                    .zip(row.iter().map(|v| v.to_string()))
                    .collect(),
            );
        }

        Ok(Self { headers, records })
    }

    /// Načíta tabuľku zo súboru, loader sa vyberie podľa prípony
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let mut loader = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => super::TableLoaderFactory::create(ext)?,
            None => super::TableLoaderFactory::create_auto(&text)?,
        };
        loader.load_from_string(&text)
    }

    pub fn num_rows(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    /// Hodnoty jedného stĺpca v poradí riadkov
    pub fn column(&self, column: &str) -> Option<Vec<&str>> {
        if !self.has_column(column) {
            return None;
        }
        self.records
            .iter()
            .map(|record| record.get(column).map(|v| v.as_str()))
            .collect()
    }
}

/// Strategy pattern pre načítanie surových tabuliek z rôznych formátov
pub trait TableLoader {
    /// Názov loadera
    fn get_name(&self) -> &str;

    /// Načíta tabuľku zo stringu
    fn load_from_string(&mut self, data: &str) -> Result<RawTable>;

    /// Získa dostupné stĺpce (headers) z dát
    fn get_available_columns(&self, data: &str) -> Result<Vec<String>>;

    /// Validuje formát dát pred načítaním
    fn validate_format(&self, data: &str) -> Result<()>;
}
