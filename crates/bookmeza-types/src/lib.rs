pub mod column;
pub mod constants;
pub mod record;
pub mod view;

pub use column::{BadgeTone, Cell, CellRenderer, Column, ColumnKey, ColumnType, default_columns};
pub use constants::{CITIES, DEPARTMENTS, FIRST_NAMES, LAST_NAMES, PAGE_SIZES, STATUSES, texts};
pub use record::{Field, Record, Value};
pub use view::{SortDirection, SortState, ViewState};
