use std::time::Duration;

use bookmeza_export::{
    Error, ExportFormat, ExportOptions, ExportOutcome, ExportSelection, ExportStage,
    cancel_channel, run_export,
};
use bookmeza_testing::RecordingHost;
use bookmeza_testing::fixtures::sample_records;

fn csv_selection() -> ExportSelection {
    ExportSelection::all(ExportFormat::Csv, ExportOptions::default())
}

#[tokio::test(start_paused = true)]
async fn test_export_completes_and_downloads() {
    let rows = sample_records(3);
    let host = RecordingHost::new();
    let (_handle, cancel) = cancel_channel();
    let mut stages = Vec::new();

    let outcome = run_export(&rows, &csv_selection(), &host, |stage| stages.push(stage), cancel)
        .await
        .expect("export");

    assert_eq!(stages, ExportStage::SEQUENCE.to_vec());
    let percents: Vec<u8> = stages.iter().map(|s| s.percent()).collect();
    assert!(percents.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(*percents.last().unwrap(), 100);

    let downloads = host.downloads();
    assert_eq!(downloads.len(), 1);
    assert!(downloads[0].file_name.starts_with("Bookmeza_DataGrid_Export_"));
    assert!(downloads[0].file_name.ends_with(".csv"));
    assert_eq!(downloads[0].mime_type, "text/csv;charset=utf-8;");
    assert!(matches!(outcome, ExportOutcome::Completed { .. }));
}

#[tokio::test(start_paused = true)]
async fn test_cancel_before_start_fires_nothing() {
    let rows = sample_records(3);
    let host = RecordingHost::new();
    let (handle, cancel) = cancel_channel();
    handle.cancel();
    let mut stages = Vec::new();

    let outcome = run_export(&rows, &csv_selection(), &host, |stage| stages.push(stage), cancel)
        .await
        .expect("export");

    assert_eq!(outcome, ExportOutcome::Cancelled);
    assert!(stages.is_empty());
    assert!(host.downloads().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_mid_flight_suppresses_the_download() {
    let rows = sample_records(3);
    let host = RecordingHost::new();
    let (handle, cancel) = cancel_channel();
    let mut stages = Vec::new();
    let selection = csv_selection();

    let (outcome, ()) = tokio::join!(
        run_export(&rows, &selection, &host, |stage| stages.push(stage), cancel),
        async {
            tokio::time::sleep(Duration::from_millis(450)).await;
            handle.cancel();
        }
    );

    assert_eq!(outcome.expect("export"), ExportOutcome::Cancelled);
    assert_eq!(stages, vec![ExportStage::Preparing]);
    assert!(host.downloads().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_dropping_the_handle_lets_the_export_finish() {
    let rows = sample_records(2);
    let host = RecordingHost::new();
    let (handle, cancel) = cancel_channel();
    drop(handle);

    let outcome = run_export(&rows, &csv_selection(), &host, |_| {}, cancel)
        .await
        .expect("export");

    assert!(matches!(outcome, ExportOutcome::Completed { .. }));
    assert_eq!(host.downloads().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_print_path_opens_context_instead_of_downloading() {
    let rows = sample_records(2);
    let selection = ExportSelection::all(ExportFormat::Pdf, ExportOptions::default());
    let host = RecordingHost::new();
    let (_handle, cancel) = cancel_channel();

    let outcome = run_export(&rows, &selection, &host, |_| {}, cancel)
        .await
        .expect("export");

    assert!(matches!(outcome, ExportOutcome::Completed { .. }));
    assert!(host.downloads().is_empty());
    let printed = host.printed_documents();
    assert_eq!(printed.len(), 1);
    assert!(printed[0].contains("Bookmeza Veri Raporu"));
}

#[tokio::test(start_paused = true)]
async fn test_blocked_popup_is_a_terminal_error() {
    let rows = sample_records(2);
    let selection = ExportSelection::all(ExportFormat::Pdf, ExportOptions::default());
    let host = RecordingHost::blocking_popups();
    let (_handle, cancel) = cancel_channel();

    let err = run_export(&rows, &selection, &host, |_| {}, cancel)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::PopupBlocked));
    assert!(host.printed_documents().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_empty_selection_blocks_initiation() {
    let rows = sample_records(2);
    let selection = ExportSelection {
        columns: Vec::new(),
        format: ExportFormat::Csv,
        options: ExportOptions::default(),
    };
    let host = RecordingHost::new();
    let (_handle, cancel) = cancel_channel();
    let mut stages = Vec::new();

    let err = run_export(&rows, &selection, &host, |stage| stages.push(stage), cancel)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::EmptySelection));
    assert!(stages.is_empty());
    assert!(host.downloads().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_download_failure_surfaces_as_host_error() {
    let rows = sample_records(2);
    let host = RecordingHost::failing_downloads();
    let (_handle, cancel) = cancel_channel();

    let err = run_export(&rows, &csv_selection(), &host, |_| {}, cancel)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Host(_)));
}
