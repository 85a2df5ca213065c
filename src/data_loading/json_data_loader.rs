use super::data_loader::{RawTable, TableLoader};
use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;

/// JSON loader - implementácia Strategy pattern pre JSON súbory
pub struct JsonTableLoader;

impl JsonTableLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parsuje JSON array of objects formát
    /// Príklad: [{"smiles": "CCO", "y": 1.0}, ...]
    fn parse_json_array(&self, json_text: &str) -> Result<(Vec<String>, Vec<HashMap<String, String>>)> {
        let parsed: Value = serde_json::from_str(json_text)?;

        let array = parsed
            .as_array()
            .ok_or_else(|| Error::Table("JSON musí byť array objektov".to_string()))?;

        // Prázdne pole je platná tabuľka bez stĺpcov
        let Some(first) = array.first() else {
            return Ok((Vec::new(), Vec::new()));
        };

        let first_obj = first
            .as_object()
            .ok_or_else(|| Error::Table("Prvý element musí byť objekt".to_string()))?;
        let headers: Vec<String> = first_obj.keys().cloned().collect();

        let mut records = Vec::with_capacity(array.len());
        for (idx, item) in array.iter().enumerate() {
            let obj = item
                .as_object()
                .ok_or_else(|| Error::Table(format!("Element {} nie je objekt", idx)))?;

            let mut record = HashMap::new();
            for header in &headers {
                let value = obj.get(header).ok_or_else(|| {
                    Error::Table(format!("Chýba kľúč '{}' v elemente {}", header, idx))
                })?;

                let value_str = match value {
                    Value::Number(n) => n.to_string(),
                    Value::String(s) => s.clone(),
                    Value::Bool(b) => if *b { "1" } else { "0" }.to_string(),
                    _ => {
                        return Err(Error::Table(format!(
                            "Nepodporovaný typ hodnoty pre kľúč '{}'",
                            header
                        )))
                    }
                };

                record.insert(header.clone(), value_str);
            }
            records.push(record);
        }

        Ok((headers, records))
    }
}

impl TableLoader for JsonTableLoader {
    fn get_name(&self) -> &str {
        "JSON Table Loader"
    }

    fn load_from_string(&mut self, data: &str) -> Result<RawTable> {
        self.validate_format(data)?;
        let (headers, records) = self.parse_json_array(data)?;
        tracing::debug!(rows = records.len(), columns = headers.len(), "JSON tabuľka načítaná");
        Ok(RawTable::new(headers, records))
    }

    fn get_available_columns(&self, data: &str) -> Result<Vec<String>> {
        let (headers, _) = self.parse_json_array(data)?;
        Ok(headers)
    }

    fn validate_format(&self, data: &str) -> Result<()> {
        let trimmed = data.trim();
        if trimmed.is_empty() {
            return Err(Error::Table("JSON dáta sú prázdne".to_string()));
        }
        if !trimmed.starts_with('[') || !trimmed.ends_with(']') {
            return Err(Error::Table(
                "JSON musí byť array (začínať '[' a končiť ']')".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for JsonTableLoader {
    fn default() -> Self {
        Self::new()
    }
}
