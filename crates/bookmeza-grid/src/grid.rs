//! The grid controller.
//!
//! Owns the records, the column configuration and the view state, and
//! funnels every interaction through the engine. The host UI holds one
//! `Grid`, calls mutators in response to user input and re-reads
//! [`Grid::view`] after each change. Layout and responsive concerns stay in
//! the host; nothing here branches on viewport.

use bookmeza_engine::{self as engine, RecordDraft, collate, pipeline};
use bookmeza_export::{
    CancelSignal, ExportFormat, ExportOptions, ExportOutcome, ExportSelection, ExportStage,
    HostEnvironment, export_columns, run_export,
};
use bookmeza_types::{
    Cell, Column, ColumnKey, Field, Record, SortDirection, SortState, ViewState, constants,
    default_columns,
};
use serde::Serialize;

/// One render cycle's worth of derived output: the current page plus the
/// numbers the host needs for the pagination footer and the toolbar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridView {
    pub rows: Vec<Record>,
    /// Count after search and filters, before pagination.
    pub total_records: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
    /// 1-based display range of this page within the derived set; both zero
    /// when the page is empty.
    pub range_start: usize,
    pub range_end: usize,
    pub selected_count: usize,
}

/// Controller for one grid instance.
pub struct Grid {
    records: Vec<Record>,
    columns: Vec<Column>,
    view: ViewState,
}

impl Grid {
    /// Build a grid over the given records with the default column
    /// configuration.
    pub fn new(records: Vec<Record>) -> Self {
        Self::with_columns(records, default_columns().to_vec())
    }

    pub fn with_columns(records: Vec<Record>, columns: Vec<Column>) -> Self {
        Grid {
            records,
            columns,
            view: ViewState::default(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    /// Replace the search text. Narrowing or widening the result set makes
    /// the current page meaningless, so the page resets to the first.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.view.search = search.into();
        self.view.page = 1;
    }

    /// Set or clear one column filter. An empty value removes the filter.
    /// Resets to the first page.
    pub fn set_filter(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.view.filters.remove(&field);
        } else {
            self.view.filters.insert(field, value);
        }
        self.view.page = 1;
    }

    /// Drop the search text and every column filter at once.
    pub fn clear_filters(&mut self) {
        self.view.search.clear();
        self.view.filters.clear();
        self.view.page = 1;
    }

    /// Sort by the given column: a repeated key flips the direction, a new
    /// key starts ascending. Non-sortable columns (and the actions slot)
    /// ignore the click.
    pub fn toggle_sort(&mut self, key: ColumnKey) {
        let sortable = self
            .columns
            .iter()
            .any(|column| column.key == key && column.sortable);
        if !sortable {
            return;
        }

        let direction = match &self.view.sort {
            Some(sort) if sort.key == key => sort.direction.toggled(),
            _ => SortDirection::Ascending,
        };
        self.view.sort = Some(SortState { key, direction });
        self.view.page = 1;
    }

    /// Navigate to a 1-based page. Out-of-range pages are allowed and yield
    /// an empty page; zero is clamped to one.
    pub fn set_page(&mut self, page: usize) {
        self.view.page = page.max(1);
    }

    /// Change the page size. Sizes outside the supported set are ignored;
    /// a change resets to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        if !constants::PAGE_SIZES.contains(&page_size) {
            return;
        }
        self.view.page_size = page_size;
        self.view.page = 1;
    }

    /// Toggle one row's membership in the selection. Selection is by
    /// identifier, so it survives filtering, sorting and page changes.
    pub fn toggle_selection(&mut self, id: i64) {
        if !self.view.selected.remove(&id) {
            self.view.selected.insert(id);
        }
    }

    /// Header checkbox behavior: when every row of the current page is
    /// selected, deselect them; otherwise select them all. Rows outside the
    /// page keep their selection state either way.
    pub fn toggle_page_selection(&mut self) {
        let page_ids: Vec<i64> = self.view().rows.iter().map(|record| record.id).collect();
        let all_selected = !page_ids.is_empty()
            && page_ids.iter().all(|id| self.view.selected.contains(id));

        if all_selected {
            for id in page_ids {
                self.view.selected.remove(&id);
            }
        } else {
            self.view.selected.extend(page_ids);
        }
    }

    pub fn clear_selection(&mut self) {
        self.view.selected.clear();
    }

    /// The full derived row set (search, filters and sort applied, no
    /// pagination). This is what exports operate on.
    pub fn derived_rows(&self) -> Vec<Record> {
        pipeline::derive(&self.records, &self.columns, &self.view)
    }

    /// Derive the current page and its footer numbers.
    pub fn view(&self) -> GridView {
        let page = pipeline::paginate(self.derived_rows(), self.view.page, self.view.page_size);
        let (range_start, range_end) = if page.rows.is_empty() {
            (0, 0)
        } else {
            let start = (self.view.page - 1) * self.view.page_size + 1;
            (start, start + page.rows.len() - 1)
        };

        GridView {
            rows: page.rows,
            total_records: page.total_records,
            total_pages: page.total_pages,
            page: self.view.page,
            page_size: self.view.page_size,
            range_start,
            range_end,
            selected_count: self.view.selected.len(),
        }
    }

    /// Render one record into display cells, one per configured column.
    pub fn render_row(&self, record: &Record) -> Vec<Cell> {
        self.columns
            .iter()
            .map(|column| engine::render_cell(record, column))
            .collect()
    }

    /// Label/value pairs for the detail view, covering every exportable
    /// field in catalogue order with the same formatting the export uses.
    pub fn detail_pairs(&self, record: &Record) -> Vec<(&'static str, String)> {
        export_columns()
            .iter()
            .map(|column| {
                let text = engine::format_value(&record.value(column.field), column.kind);
                (column.label, text)
            })
            .collect()
    }

    /// Distinct values of one field across all records, in collation order.
    /// Feeds the host's filter dropdowns.
    pub fn unique_filter_values(&self, field: Field) -> Vec<String> {
        let mut values: Vec<String> = self
            .records
            .iter()
            .map(|record| record.value(field).as_text())
            .filter(|value| !value.is_empty())
            .collect();
        values.sort_by(|a, b| collate::compare(a, b));
        values.dedup();
        values
    }

    /// Append a record built from the draft. Validation failures leave the
    /// collection untouched.
    pub fn add(&mut self, draft: RecordDraft) -> engine::Result<()> {
        self.records = engine::add(&self.records, draft)?;
        Ok(())
    }

    /// Replace the record with the given identifier by the edited draft.
    pub fn update(&mut self, id: i64, draft: RecordDraft) -> engine::Result<()> {
        self.records = engine::update(&self.records, id, draft)?;
        Ok(())
    }

    /// Remove a record. Unknown identifiers are a no-op. The identifier also
    /// leaves the selection so the selected count never counts ghosts.
    pub fn remove(&mut self, id: i64) {
        self.records = engine::remove(&self.records, id);
        self.view.selected.remove(&id);
    }

    /// Seed an export selection from the displayed columns.
    pub fn export_selection(&self, format: ExportFormat, options: ExportOptions) -> ExportSelection {
        ExportSelection::from_grid_columns(&self.columns, format, options)
    }

    /// Run one export over the current derived row set (the page slice is
    /// never what gets exported).
    pub async fn export<E, F>(
        &self,
        selection: &ExportSelection,
        env: &E,
        on_progress: F,
        cancel: CancelSignal,
    ) -> bookmeza_export::Result<ExportOutcome>
    where
        E: HostEnvironment + ?Sized,
        F: FnMut(ExportStage),
    {
        let rows = self.derived_rows();
        run_export(&rows, selection, env, on_progress, cancel).await
    }
}
