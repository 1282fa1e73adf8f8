pub mod catalog;
pub mod error;
pub mod export;
pub mod fetch;
pub mod job;
pub mod logger;
pub mod menu;
pub mod parser;
pub mod schema;
pub mod view;

// Exporting types for convenience
pub use catalog::{Comparison, JobCatalog, SortKey};
pub use error::ScrapeError;
pub use fetch::{HttpFetcher, PageFetcher};
pub use job::{Job, Salary};
pub use menu::MenuChoice;
pub use parser::JobsParser;
pub use schema::SiteSchema;
