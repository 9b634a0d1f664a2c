//! Envdash Dataset
//!
//! The fixed in-memory table the dashboard plots:
//!
//! - **types**: cell values, column kinds and columns
//! - **table**: the validated, immutable `Dataset`
//! - **environmental**: the six-row environmental statistics table
//! - **error**: startup validation errors
//!
//! The dataset is built once at startup and shared read-only:
//!
//! ```rust
//! use envdash::dataset::{Dataset, AIR_QUALITY_INDEX};
//! use std::sync::Arc;
//!
//! let dataset = Arc::new(Dataset::environmental().expect("valid table"));
//! assert_eq!(dataset.row_count(), 6);
//! assert!(dataset.column(AIR_QUALITY_INDEX).is_some());
//! ```

mod environmental;
mod error;
mod table;
mod types;

pub use environmental::{
    AIR_QUALITY_INDEX, AVERAGE_TEMPERATURE, CO2_EMISSIONS, COUNTRY, DEFORESTATION_RATE,
    RENEWABLE_ENERGY, WASTE_RECYCLED, WATER_QUALITY_INDEX, YEAR,
};
pub use error::{DatasetError, DatasetResult};
pub use table::Dataset;
pub use types::{Column, ColumnKind, Value};
