// Grid facade - the single surface the host UI talks to. Owns the record
// collection, the column configuration and the view state, and exposes the
// interaction rules, CRUD entry points and export orchestration as methods.

pub mod grid;

pub use grid::{Grid, GridView};
