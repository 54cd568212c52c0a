//! Data module - CSV loading, normalization and filtering

mod filter;
mod loader;
mod processor;
mod record;

pub use filter::filtered_indices;
pub use loader::{DataLoader, LoadedData};
pub use record::{column_values, HoursColumn, HoursRecord};
