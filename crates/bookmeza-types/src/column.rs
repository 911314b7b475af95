use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::record::{Field, Record, Value};

/// What a column addresses: a direct attribute, the composite user column,
/// or the UI-only actions slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnKey {
    Field(Field),
    /// Virtual column presenting name + email + avatar as one unit.
    /// Search, sort and export are defined in terms of the constituent
    /// fields, never by string-matching a magic key.
    User,
    /// Host-rendered action buttons. Never searched, sorted or exported.
    Actions,
}

/// Semantic type tag driving default formatting for display and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnType {
    Number,
    Badge,
    Boolean,
    Custom,
    Text,
    Email,
    Phone,
    Currency,
    Date,
}

/// Visual category of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Success,
    Danger,
    Warning,
    Neutral,
}

/// Display-ready content of one cell: the formatter's text plus the visual
/// hints the host turns into markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub text: String,
    /// Secondary line (the composite user column shows the email here).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<BadgeTone>,
    /// Binary on/off indicator for boolean cells.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Cell {
            text: text.into(),
            secondary: None,
            tone: None,
            indicator: None,
            avatar: None,
        }
    }
}

/// Host-supplied cell renderer. Overrides the default per-type formatting
/// for on-screen display only; export always formats by type tag.
pub type CellRenderer = fn(&Value, &Record) -> Cell;

/// Metadata describing one displayable field of the grid.
#[derive(Debug, Clone)]
pub struct Column {
    pub key: ColumnKey,
    pub label: String,
    pub column_type: Option<ColumnType>,
    pub sortable: bool,
    pub filterable: bool,
    pub searchable: bool,
    /// Width hint passed through to the host layout, e.g. "80px".
    pub width: Option<String>,
    pub render: Option<CellRenderer>,
}

impl Column {
    pub fn new(key: ColumnKey, label: impl Into<String>) -> Self {
        Column {
            key,
            label: label.into(),
            column_type: None,
            sortable: false,
            filterable: false,
            searchable: false,
            width: None,
            render: None,
        }
    }

    pub fn field(field: Field, label: impl Into<String>) -> Self {
        Self::new(ColumnKey::Field(field), label)
    }

    pub fn with_type(mut self, column_type: ColumnType) -> Self {
        self.column_type = Some(column_type);
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn with_renderer(mut self, render: CellRenderer) -> Self {
        self.render = Some(render);
        self
    }
}

static DEFAULT_COLUMNS: Lazy<Vec<Column>> = Lazy::new(|| {
    vec![
        Column::field(Field::Id, "ID")
            .with_type(ColumnType::Number)
            .sortable()
            .with_width("80px"),
        Column::new(ColumnKey::User, "Kullanıcı").sortable().searchable(),
        Column::field(Field::Department, "Departman").sortable().filterable(),
        Column::field(Field::Status, "Durum")
            .with_type(ColumnType::Badge)
            .sortable()
            .filterable(),
        Column::field(Field::Score, "Puan")
            .with_type(ColumnType::Number)
            .sortable(),
        Column::field(Field::IsActive, "Aktif")
            .with_type(ColumnType::Boolean)
            .sortable(),
    ]
});

/// Column configuration used when the host supplies none.
pub fn default_columns() -> &'static [Column] {
    &DEFAULT_COLUMNS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_columns_cover_the_reference_grid() {
        let columns = default_columns();
        assert_eq!(columns.len(), 6);
        assert!(columns.iter().any(|c| c.key == ColumnKey::User && c.searchable));
        assert!(
            columns
                .iter()
                .any(|c| c.key == ColumnKey::Field(Field::Status) && c.filterable)
        );
    }

    #[test]
    fn test_builder_flags_default_off() {
        let column = Column::field(Field::Email, "E-posta");
        assert!(!column.sortable && !column.filterable && !column.searchable);
        assert!(column.render.is_none());
    }
}
