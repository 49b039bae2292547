//! The driver layer: everything between raw input and the unwind pipeline.
//!
//! `loader` turns text into candidates, `search` selects one and runs the
//! unwinder, `report` renders the outcome, and `generate` produces shuffled
//! test sets for the loader to consume.

pub mod generate;
pub mod loader;
pub mod report;
pub mod search;

pub use generate::{generate_test_set, write_test_set, write_test_set_to_path};
pub use loader::{load_candidates, load_candidates_from_path};
pub use report::{write_report, ReportFormat};
pub use search::{run, select_candidate, SearchReport};
