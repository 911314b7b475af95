//! Export selection: target format, included columns and format options.
//!
//! Initialized from the grid's displayed columns (the composite user column
//! expands to its constituent fields), adjusted by the user, and discarded
//! after the export finishes or the dialog is dismissed.

use std::str::FromStr;

use bookmeza_types::{Column, ColumnKey, ColumnType, Field, texts};

use crate::error::Error;

/// Supported output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Excel,
    Pdf,
    Word,
}

impl ExportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Excel => "excel",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Word => "word",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ExportFormat::Csv => texts::CSV_DESCRIPTION,
            ExportFormat::Excel => texts::EXCEL_DESCRIPTION,
            ExportFormat::Pdf => texts::PDF_DESCRIPTION,
            ExportFormat::Word => texts::WORD_DESCRIPTION,
        }
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(ExportFormat::Csv),
            "excel" => Ok(ExportFormat::Excel),
            "pdf" => Ok(ExportFormat::Pdf),
            "word" => Ok(ExportFormat::Word),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// Field delimiter for the delimited-text format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Semicolon,
    Tab,
}

impl Delimiter {
    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Semicolon => b';',
            Delimiter::Tab => b'\t',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Delimiter::Comma => texts::COMMA,
            Delimiter::Semicolon => texts::SEMICOLON,
            Delimiter::Tab => texts::TAB,
        }
    }
}

/// Format-specific options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    pub include_headers: bool,
    pub delimiter: Delimiter,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            include_headers: true,
            delimiter: Delimiter::Comma,
        }
    }
}

/// One exportable field with its label and formatting type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportColumn {
    pub field: Field,
    pub label: &'static str,
    pub kind: ColumnType,
}

const EXPORT_COLUMNS: [ExportColumn; 12] = [
    ExportColumn { field: Field::Id, label: "ID", kind: ColumnType::Number },
    ExportColumn { field: Field::FirstName, label: "Ad", kind: ColumnType::Text },
    ExportColumn { field: Field::LastName, label: "Soyad", kind: ColumnType::Text },
    ExportColumn { field: Field::Email, label: "E-posta", kind: ColumnType::Email },
    ExportColumn { field: Field::Phone, label: "Telefon", kind: ColumnType::Phone },
    ExportColumn { field: Field::Department, label: "Departman", kind: ColumnType::Text },
    ExportColumn { field: Field::City, label: "Şehir", kind: ColumnType::Text },
    ExportColumn { field: Field::Status, label: "Durum", kind: ColumnType::Text },
    ExportColumn { field: Field::Score, label: "Puan", kind: ColumnType::Number },
    ExportColumn { field: Field::Salary, label: "Maaş", kind: ColumnType::Currency },
    ExportColumn { field: Field::JoinDate, label: "Katılım Tarihi", kind: ColumnType::Date },
    ExportColumn { field: Field::IsActive, label: "Aktif", kind: ColumnType::Boolean },
];

/// The full catalogue of exportable columns, in output order.
pub fn export_columns() -> &'static [ExportColumn] {
    &EXPORT_COLUMNS
}

/// Which columns go into one export, plus the target format and options.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSelection {
    pub columns: Vec<ExportColumn>,
    pub format: ExportFormat,
    pub options: ExportOptions,
}

impl ExportSelection {
    /// Seed the selection from the grid's displayed columns: the composite
    /// user column expands to first name, last name and email; the actions
    /// column is skipped; catalogue order is preserved.
    pub fn from_grid_columns(
        grid_columns: &[Column],
        format: ExportFormat,
        options: ExportOptions,
    ) -> Self {
        let mut wanted: Vec<Field> = Vec::new();
        for column in grid_columns {
            match column.key {
                ColumnKey::Actions => {}
                ColumnKey::User => {
                    wanted.extend([Field::FirstName, Field::LastName, Field::Email]);
                }
                ColumnKey::Field(field) => wanted.push(field),
            }
        }

        let columns = EXPORT_COLUMNS
            .iter()
            .filter(|column| wanted.contains(&column.field))
            .copied()
            .collect();

        ExportSelection {
            columns,
            format,
            options,
        }
    }

    /// Select every exportable column.
    pub fn all(format: ExportFormat, options: ExportOptions) -> Self {
        ExportSelection {
            columns: EXPORT_COLUMNS.to_vec(),
            format,
            options,
        }
    }
}
