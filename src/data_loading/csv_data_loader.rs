use super::data_loader::{RawTable, TableLoader};
use crate::error::{Error, Result};
use csv::ReaderBuilder;
use std::collections::HashMap;

/// CSV loader - implementácia Strategy pattern pre CSV súbory
pub struct CsvTableLoader;

impl CsvTableLoader {
    pub fn new() -> Self {
        Self
    }

    /// Helper pre parsovanie CSV
    fn parse_csv(&self, csv_text: &str) -> Result<(Vec<String>, Vec<HashMap<String, String>>)> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .trim(csv::Trim::All)
            .from_reader(csv_text.as_bytes());

        let headers: Vec<String> = rdr
            .headers()
            .map_err(|e| Error::Table(format!("Chyba pri čítaní CSV hlavičiek: {}", e)))?
            .iter()
            .map(|s| s.trim().to_string())
            .collect();

        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(Error::Table("CSV nemá žiadne stĺpce".to_string()));
        }

        let mut records = Vec::new();
        for (idx, record) in rdr.records().enumerate() {
            let record = record
                .map_err(|e| Error::Table(format!("Chyba pri čítaní riadku {}: {}", idx + 1, e)))?;

            if record.len() != headers.len() {
                return Err(Error::Table(format!(
                    "Riadok {} má {} stĺpcov, očakávaných {}",
                    idx + 1,
                    record.len(),
                    headers.len()
                )));
            }

            records.push(
                record
                    .iter()
                    .enumerate()
                    .map(|(i, val)| (headers[i].clone(), val.trim().to_string()))
                    .collect::<HashMap<_, _>>(),
            );
        }

        Ok((headers, records))
    }
}

impl TableLoader for CsvTableLoader {
    fn get_name(&self) -> &str {
        "CSV Table Loader"
    }

    fn load_from_string(&mut self, data: &str) -> Result<RawTable> {
        self.validate_format(data)?;
        let (headers, records) = self.parse_csv(data)?;
        tracing::debug!(rows = records.len(), columns = headers.len(), "CSV tabuľka načítaná");
        Ok(RawTable::new(headers, records))
    }

    fn get_available_columns(&self, data: &str) -> Result<Vec<String>> {
        let (headers, _) = self.parse_csv(data)?;
        Ok(headers)
    }

    fn validate_format(&self, data: &str) -> Result<()> {
        if data.trim().is_empty() {
            return Err(Error::Table("CSV dáta sú prázdne".to_string()));
        }
        Ok(())
    }
}

impl Default for CsvTableLoader {
    fn default() -> Self {
        Self::new()
    }
}
