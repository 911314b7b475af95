//! Format-specific payload builders.
//!
//! All four formats share the same column selection and the same per-cell
//! formatting as the on-screen grid; only the envelope differs. Exports
//! always receive the full filtered+sorted row set, never the current page.

use bookmeza_engine::format_value;
use bookmeza_types::Record;
use chrono::{Local, Utc};

use crate::error::{Error, Result};
use crate::selection::{ExportColumn, ExportFormat, ExportOptions, ExportSelection};

/// Byte-order marker guaranteeing correct rendering of non-ASCII text in
/// common spreadsheet readers.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A serialized export, ready for the host to deliver.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPayload {
    pub content: Vec<u8>,
    pub mime_type: &'static str,
    pub extension: &'static str,
}

impl ExportPayload {
    /// The payload body as text (HTML surrogates; CSV minus the BOM).
    pub fn text(&self) -> String {
        let body = self
            .content
            .strip_prefix(UTF8_BOM)
            .unwrap_or(&self.content);
        String::from_utf8_lossy(body).into_owned()
    }
}

/// Serialize the rows for the selected columns into the selected format.
pub fn serialize(rows: &[Record], selection: &ExportSelection) -> Result<ExportPayload> {
    if selection.columns.is_empty() {
        return Err(Error::EmptySelection);
    }

    match selection.format {
        ExportFormat::Csv => Ok(ExportPayload {
            content: to_csv(rows, &selection.columns, &selection.options)?,
            mime_type: "text/csv;charset=utf-8;",
            extension: "csv",
        }),
        ExportFormat::Excel => Ok(ExportPayload {
            content: to_excel_html(rows, &selection.columns).into_bytes(),
            mime_type: "application/vnd.ms-excel;charset=utf-8;",
            extension: "xls",
        }),
        ExportFormat::Pdf => Ok(ExportPayload {
            content: to_print_html(rows, &selection.columns).into_bytes(),
            mime_type: "text/html;charset=utf-8;",
            extension: "html",
        }),
        ExportFormat::Word => Ok(ExportPayload {
            content: to_word_html(rows, &selection.columns).into_bytes(),
            mime_type: "application/msword;charset=utf-8;",
            extension: "doc",
        }),
    }
}

/// Download file name: `Bookmeza_DataGrid_Export_<ISO-date>.<ext>`.
pub fn file_name(extension: &str) -> String {
    format!(
        "Bookmeza_DataGrid_Export_{}.{}",
        Utc::now().format("%Y-%m-%d"),
        extension
    )
}

fn cell_text(record: &Record, column: &ExportColumn) -> String {
    format_value(&record.value(column.field), column.kind)
}

/// Delimited text with an optional header row. Fields containing the
/// delimiter (or quotes/line breaks) are quoted; output is BOM-prefixed.
fn to_csv(rows: &[Record], columns: &[ExportColumn], options: &ExportOptions) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(options.delimiter.as_byte())
        .from_writer(UTF8_BOM.to_vec());

    if options.include_headers {
        writer.write_record(columns.iter().map(|column| column.label))?;
    }
    for record in rows {
        writer.write_record(columns.iter().map(|column| cell_text(record, column)))?;
    }

    writer
        .into_inner()
        .map_err(|err| Error::Csv(err.into_error().into()))
}

fn table_html(rows: &[Record], columns: &[ExportColumn]) -> String {
    let headers: String = columns
        .iter()
        .map(|column| format!("<th>{}</th>", escape_html(column.label)))
        .collect();

    let body: String = rows
        .iter()
        .map(|record| {
            let cells: String = columns
                .iter()
                .map(|column| format!("<td>{}</td>", escape_html(&cell_text(record, column))))
                .collect();
            format!("<tr>{}</tr>", cells)
        })
        .collect();

    format!(
        "<table><thead><tr>{}</tr></thead><tbody>{}</tbody></table>",
        headers, body
    )
}

/// Minimal HTML document consumed by spreadsheet applications via
/// content-type sniffing, not a native binary workbook.
fn to_excel_html(rows: &[Record], columns: &[ExportColumn]) -> String {
    format!(
        concat!(
            "<html><head><meta charset=\"utf-8\"><title>Bookmeza Export</title>",
            "<style>table{{border-collapse:collapse;width:100%;font-family:Arial,sans-serif;}}",
            "th,td{{border:1px solid #ddd;padding:8px;}}",
            "th{{background-color:#f0f0f0;font-weight:bold;}}</style></head>",
            "<body>{table}</body></html>"
        ),
        table = table_html(rows, columns)
    )
}

/// Print-ready report document: title, generation date, record count, data
/// table, footer. Rendered in a new browsing context by the host.
fn to_print_html(rows: &[Record], columns: &[ExportColumn]) -> String {
    format!(
        concat!(
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Bookmeza Raporu</title>",
            "<style>body{{font-family:Arial,sans-serif;margin:15px;}}",
            ".header{{text-align:center;margin-bottom:20px;}}",
            ".title{{font-size:20px;font-weight:bold;color:#333;margin-bottom:8px;}}",
            ".subtitle{{font-size:12px;color:#666;}}",
            "table{{width:100%;border-collapse:collapse;margin:15px 0;}}",
            "th,td{{border:1px solid #ccc;padding:6px;font-size:9px;text-align:left;}}",
            "th{{background-color:#f8f9fa;font-weight:bold;font-size:10px;}}",
            ".footer{{margin-top:25px;text-align:center;font-size:10px;color:#666;}}</style></head>",
            "<body><div class=\"header\"><div class=\"title\">Bookmeza Veri Raporu</div>",
            "<div class=\"subtitle\">Oluşturulma Tarihi: {date} | Toplam Kayıt: {count}</div></div>",
            "{table}",
            "<div class=\"footer\"><p>Bu rapor Bookmeza Data Grid sistemi tarafından oluşturulmuştur.</p></div>",
            "</body></html>"
        ),
        date = Local::now().format("%d.%m.%Y"),
        count = rows.len(),
        table = table_html(rows, columns)
    )
}

/// HTML with Office XML namespace hints so word processors open it as a
/// document rather than a web page.
fn to_word_html(rows: &[Record], columns: &[ExportColumn]) -> String {
    format!(
        concat!(
            "<html xmlns:o=\"urn:schemas-microsoft-com:office:office\" ",
            "xmlns:w=\"urn:schemas-microsoft-com:office:word\" ",
            "xmlns=\"http://www.w3.org/TR/REC-html40\">",
            "<head><meta charset=\"utf-8\"><title>Bookmeza Raporu</title>",
            "<!--[if gte mso 9]><xml><w:WordDocument><w:View>Print</w:View><w:Zoom>90</w:Zoom>",
            "<w:DoNotOptimizeForBrowser/></w:WordDocument></xml><![endif]-->",
            "<style>body{{font-family:Arial,sans-serif;}}",
            ".header{{text-align:center;margin-bottom:20px;}}",
            "table{{border-collapse:collapse;width:100%;}}",
            "th,td{{border:1px solid #000;padding:8px;}}",
            "th{{background-color:#f0f0f0;}}</style></head>",
            "<body><div class=\"header\"><h1>Bookmeza Veri Raporu</h1>",
            "<p>Oluşturulma Tarihi: {date} | Toplam Kayıt: {count}</p></div>",
            "{table}</body></html>"
        ),
        date = Local::now().format("%d.%m.%Y"),
        count = rows.len(),
        table = table_html(rows, columns)
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
