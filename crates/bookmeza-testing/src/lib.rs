//! Testing infrastructure for the Bookmeza grid crates.
//!
//! - `fixtures`: deterministic record builders and sample data
//! - `host`: a recording [`HostEnvironment`](bookmeza_export::HostEnvironment)
//!   fake for export tests

pub mod fixtures;
pub mod host;

pub use fixtures::{RecordBuilder, record, sample_records};
pub use host::RecordingHost;
