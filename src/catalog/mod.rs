pub mod source;
pub mod sources;
pub mod types;

pub use source::{CatalogError, CatalogSource, load_catalog, source_for};
pub use sources::{FileSource, HttpSource};
pub use types::{Catalog, Price, PricingPlan, ToolRecord};
