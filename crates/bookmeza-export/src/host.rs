//! Host environment boundary.
//!
//! The core never touches the file system or opens windows itself; the host
//! (a browser shell, a test fake) provides the delivery capabilities.
//! Missing capabilities surface as errors, never as crashes.

use crate::serialize::ExportPayload;

/// Delivery capabilities the export flow needs from its host.
pub trait HostEnvironment {
    /// Deliver a generated payload as a download under the given file name.
    fn download(&self, payload: &ExportPayload, file_name: &str) -> anyhow::Result<()>;

    /// Open a new browsing context with the given document and invoke the
    /// platform print dialog. Returns `Ok(false)` when the host refused to
    /// open the context (popup blocked), which is a reportable condition
    /// rather than a failure of the host itself.
    fn open_print_context(&self, html: &str) -> anyhow::Result<bool>;
}
