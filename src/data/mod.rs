//! Local data layout
//!
//! Cache directories for index files and vocabularies, plus line-based
//! backups of intermediate results.

mod backup;
mod cache;

pub use backup::write_lines;
pub use cache::{CacheLayout, CacheStatus};
