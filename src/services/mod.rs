pub mod export;
pub mod sheets;

pub use export::{ExportResult, ExportService};
pub use sheets::SheetsService;
