// Export module - serializes a derived row set into downloadable payloads
// (CSV, spreadsheet/print/word HTML surrogates) and drives the staged,
// cancellable export flow against a host environment.

pub mod error;
pub mod host;
pub mod progress;
pub mod selection;
pub mod serialize;

pub use error::{Error, Result};
pub use host::HostEnvironment;
pub use progress::{
    CancelHandle, CancelSignal, ExportOutcome, ExportStage, cancel_channel, run_export,
};
pub use selection::{Delimiter, ExportColumn, ExportFormat, ExportOptions, ExportSelection, export_columns};
pub use serialize::{ExportPayload, file_name, serialize};
