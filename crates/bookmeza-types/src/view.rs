use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::column::ColumnKey;
use crate::constants::PAGE_SIZES;
use crate::record::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort key and direction. Single-key only; there is no multi-column
/// sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: ColumnKey,
    pub direction: SortDirection,
}

/// Transient user intent for one render cycle: search, per-column filters,
/// sort, pagination and selection.
///
/// Owned by the host UI and passed into the core per derivation; the core
/// keeps no hidden state between calls. Selection is tracked by record
/// identifier, so it survives filtering, sorting and page changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub search: String,
    pub filters: BTreeMap<Field, String>,
    pub sort: Option<SortState>,
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
    pub selected: BTreeSet<i64>,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            search: String::new(),
            filters: BTreeMap::new(),
            sort: None,
            page: 1,
            page_size: PAGE_SIZES[1],
            selected: BTreeSet::new(),
        }
    }
}

impl ViewState {
    /// True when neither search nor any filter narrows the record set.
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && self.filters.values().all(|v| v.is_empty())
    }
}
