pub mod catalog;
pub mod config;
pub mod error;
pub mod fs;
pub mod janitor;
pub mod models;
pub mod paths;
pub mod quota;
pub mod reconcile;
pub mod report;

pub use catalog::{CatalogStore, StoreOptions};
pub use config::JanitorConfig;
pub use error::*;
pub use fs::{FileSystemGateway, LocalFileSystem};
pub use janitor::Janitor;
pub use models::*;
pub use quota::QuotaEvictor;
pub use reconcile::{OrphanEntryReconciler, OrphanFileReconciler};
pub use report::{PhaseOutcome, RunReport};
