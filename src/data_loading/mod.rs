pub mod data_loader; // RawTable + Strategy trait
pub mod csv_data_loader; // CSV implementation of strategy
pub mod json_data_loader; // JSON implementation of strategy
pub mod factory; // Factory for loaders

pub use data_loader::{RawTable, TableLoader};
pub use csv_data_loader::CsvTableLoader;
pub use json_data_loader::JsonTableLoader;
pub use factory::TableLoaderFactory;
