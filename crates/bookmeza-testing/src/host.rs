//! Recording fake for the export host environment.

use std::sync::Mutex;

use bookmeza_export::{ExportPayload, HostEnvironment};

/// One captured download request.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedDownload {
    pub file_name: String,
    pub mime_type: String,
    pub content: Vec<u8>,
}

/// Host environment that records side effects instead of performing them.
///
/// `block_popups` simulates a host that refuses to open a print context;
/// `fail_downloads` simulates a host without download capability.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub block_popups: bool,
    pub fail_downloads: bool,
    downloads: Mutex<Vec<CapturedDownload>>,
    printed: Mutex<Vec<String>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocking_popups() -> Self {
        RecordingHost {
            block_popups: true,
            ..Self::default()
        }
    }

    pub fn failing_downloads() -> Self {
        RecordingHost {
            fail_downloads: true,
            ..Self::default()
        }
    }

    pub fn downloads(&self) -> Vec<CapturedDownload> {
        self.downloads.lock().expect("downloads lock").clone()
    }

    pub fn printed_documents(&self) -> Vec<String> {
        self.printed.lock().expect("printed lock").clone()
    }
}

impl HostEnvironment for RecordingHost {
    fn download(&self, payload: &ExportPayload, file_name: &str) -> anyhow::Result<()> {
        if self.fail_downloads {
            anyhow::bail!("host cannot create object URLs");
        }
        self.downloads.lock().expect("downloads lock").push(CapturedDownload {
            file_name: file_name.to_string(),
            mime_type: payload.mime_type.to_string(),
            content: payload.content.clone(),
        });
        Ok(())
    }

    fn open_print_context(&self, html: &str) -> anyhow::Result<bool> {
        if self.block_popups {
            return Ok(false);
        }
        self.printed.lock().expect("printed lock").push(html.to_string());
        Ok(true)
    }
}
