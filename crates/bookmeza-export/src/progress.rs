//! Staged, cancellable export flow.
//!
//! The four stages are user-feedback pacing, not real checkpoints: the
//! serialization and delivery happen after the last stage fires. The
//! contract is that progress callbacks fire in strictly increasing
//! percentage order ending at 100, a terminal outcome is always reached, and
//! dismissing the dialog before completion suppresses the download/print
//! side effect entirely.

use std::time::Duration;

use bookmeza_types::{Record, texts};
use tokio::sync::watch;

use crate::error::{Error, Result};
use crate::host::HostEnvironment;
use crate::selection::{ExportFormat, ExportSelection};
use crate::serialize::{file_name, serialize};

/// Cosmetic delay between stages.
pub const STAGE_PACING: Duration = Duration::from_millis(300);

/// Progress sequence for one export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStage {
    Preparing,
    Converting,
    Writing,
    Complete,
}

impl ExportStage {
    pub const SEQUENCE: [ExportStage; 4] = [
        ExportStage::Preparing,
        ExportStage::Converting,
        ExportStage::Writing,
        ExportStage::Complete,
    ];

    pub fn percent(self) -> u8 {
        match self {
            ExportStage::Preparing => 20,
            ExportStage::Converting => 50,
            ExportStage::Writing => 80,
            ExportStage::Complete => 100,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ExportStage::Preparing => texts::EXPORT_PREPARING_DATA,
            ExportStage::Converting => texts::EXPORT_CONVERTING_FORMAT,
            ExportStage::Writing => texts::EXPORT_CREATING_FILE,
            ExportStage::Complete => texts::EXPORT_COMPLETED,
        }
    }
}

/// Terminal result of a driven export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The payload was delivered (downloaded, or handed to the print
    /// context for the PDF surrogate).
    Completed { file_name: String },
    /// The dialog was dismissed before completion; nothing was delivered.
    Cancelled,
}

/// Receiving side of the cancellation pair, passed into [`run_export`].
pub type CancelSignal = watch::Receiver<bool>;

/// Cancellation handle for an in-flight export. Dropping the handle without
/// calling [`CancelHandle::cancel`] lets the export run to completion.
#[derive(Debug)]
pub struct CancelHandle(watch::Sender<bool>);

impl CancelHandle {
    pub fn cancel(&self) {
        let _ = self.0.send(true);
    }
}

/// Create a cancellation pair for [`run_export`].
pub fn cancel_channel() -> (CancelHandle, CancelSignal) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle(tx), rx)
}

/// Drive one export end to end: pace through the stages, serialize, then
/// deliver through the host.
///
/// Each inter-stage delay is a cancellation-safe suspension; a cancel
/// observed at any point before delivery returns
/// [`ExportOutcome::Cancelled`] without firing the side effect, and cleanup
/// is nothing more than dropping the in-memory payload, so it is idempotent
/// by construction.
pub async fn run_export<E, F>(
    rows: &[Record],
    selection: &ExportSelection,
    env: &E,
    mut on_progress: F,
    mut cancel: CancelSignal,
) -> Result<ExportOutcome>
where
    E: HostEnvironment + ?Sized,
    F: FnMut(ExportStage),
{
    // Block initiation before any progress is shown.
    if selection.columns.is_empty() {
        return Err(Error::EmptySelection);
    }

    for stage in ExportStage::SEQUENCE {
        tokio::select! {
            _ = tokio::time::sleep(STAGE_PACING) => {}
            cancelled = cancel.wait_for(|flag| *flag) => {
                if cancelled.is_ok() {
                    return Ok(ExportOutcome::Cancelled);
                }
                // The cancel handle is gone; nothing can interrupt the
                // export anymore, so honor the pacing and keep going.
                tokio::time::sleep(STAGE_PACING).await;
            }
        }
        on_progress(stage);
    }

    // Last chance to observe a dismissal that raced the final stage.
    if *cancel.borrow() {
        return Ok(ExportOutcome::Cancelled);
    }

    let payload = serialize(rows, selection)?;
    let name = file_name(payload.extension);

    match selection.format {
        ExportFormat::Pdf => {
            let opened = env
                .open_print_context(&payload.text())
                .map_err(Error::Host)?;
            if !opened {
                return Err(Error::PopupBlocked);
            }
        }
        _ => env.download(&payload, &name).map_err(Error::Host)?,
    }

    Ok(ExportOutcome::Completed { file_name: name })
}
