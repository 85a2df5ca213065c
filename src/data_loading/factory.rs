use super::csv_data_loader::CsvTableLoader;
use super::data_loader::TableLoader;
use super::json_data_loader::JsonTableLoader;
use crate::error::{Error, Result};

/// Factory pre vytváranie table loaderov podľa typu
pub struct TableLoaderFactory;

impl TableLoaderFactory {
    /// Vytvorí loader na základe typu
    pub fn create(loader_type: &str) -> Result<Box<dyn TableLoader>> {
        match loader_type.to_lowercase().as_str() {
            "csv" => Ok(Box::new(CsvTableLoader::new())),
            "json" => Ok(Box::new(JsonTableLoader::new())),
            _ => Err(Error::Table(format!("Neznámy typ loadera: {}", loader_type))),
        }
    }

    /// Automaticky detekuje formát na základe obsahu
    pub fn create_auto(data: &str) -> Result<Box<dyn TableLoader>> {
        let trimmed = data.trim();

        if trimmed.starts_with('[') {
            Ok(Box::new(JsonTableLoader::new()))
        } else if trimmed.contains(',') || trimmed.contains('\n') {
            Ok(Box::new(CsvTableLoader::new()))
        } else {
            Err(Error::Table(
                "Nepodarilo sa automaticky detekovať formát dát".to_string(),
            ))
        }
    }

    /// Vráti zoznam všetkých podporovaných formátov
    pub fn available_formats() -> Vec<&'static str> {
        vec!["csv", "json"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_by_name() {
        assert_eq!(TableLoaderFactory::create("CSV").unwrap().get_name(), "CSV Table Loader");
        assert_eq!(TableLoaderFactory::create("json").unwrap().get_name(), "JSON Table Loader");
        assert!(TableLoaderFactory::create("parquet").is_err());
    }

    #[test]
    fn test_auto_detection() {
        let json = TableLoaderFactory::create_auto(r#"[{"smiles": "C", "y": 1}]"#).unwrap();
        assert_eq!(json.get_name(), "JSON Table Loader");

        let csv = TableLoaderFactory::create_auto("smiles,y\nC,1\n").unwrap();
        assert_eq!(csv.get_name(), "CSV Table Loader");

        assert!(TableLoaderFactory::create_auto("nothing").is_err());
    }
}
