// User Intake - Core Library
// Collects user demographic and expense entries, persists them to a document
// store, and exports them to CSV. Exposes all modules for use in the CLI, the
// web server, and tests.

pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod generator;
pub mod record;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use error::{IntakeError, Result};
pub use export::{export_csv, export_header, DEFAULT_EXPORT_FILE};
pub use form::{parse_submission, RawSubmission};
pub use generator::{generate_batch, generate_record};
pub use record::{UserRecord, EXPENSE_CATEGORIES, FIXED_COLUMNS, GENDER_OPTIONS};
pub use store::RecordStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Size of one seeding batch.
pub const SEED_BATCH_SIZE: usize = 100;
