// Engine module - the pure core of the grid
// This layer sits between the record model (types) and the facade/host:
// derivation pipeline, value formatting and CRUD mediation. No UI concerns,
// no layout branching, no hidden state between calls.

pub mod collate;
pub mod crud;
pub mod error;
pub mod format;
pub mod pipeline;

pub use crud::{RecordDraft, add, remove, update};
pub use error::{Error, Result};
pub use format::{badge_tone, format_value, render_cell};
pub use pipeline::{Page, derive, paginate};
