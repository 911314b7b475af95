//! The view pipeline: search -> filter -> sort -> paginate, in that fixed
//! order, over an in-memory record slice. Pure functions; inputs are never
//! mutated.

use std::cmp::Ordering;

use bookmeza_types::{Column, ColumnKey, Record, SortDirection, SortState, Value, ViewState};

use crate::collate;

/// Result of slicing the derived row set into one page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub rows: Vec<Record>,
    /// Count of the full derived set, not of this slice.
    pub total_records: usize,
    pub total_pages: usize,
}

/// Apply search, filters and sort from the view state, producing the full
/// ordered row set (the input to both pagination and export).
pub fn derive(records: &[Record], columns: &[Column], view: &ViewState) -> Vec<Record> {
    let mut rows: Vec<Record> = records.to_vec();

    if !view.search.is_empty() {
        let needle = view.search.to_lowercase();
        rows.retain(|record| matches_search(record, columns, &needle));
    }

    for (field, value) in &view.filters {
        if value.is_empty() {
            continue;
        }
        let needle = value.to_lowercase();
        rows.retain(|record| record.value(*field).as_text().to_lowercase().contains(&needle));
    }

    if let Some(sort) = &view.sort {
        sort_rows(&mut rows, sort);
    }

    rows
}

/// Slice the derived set into the requested 1-based page.
///
/// An out-of-range page yields an empty slice with honest totals; clamping
/// navigation is the host's job, the pipeline never wraps.
pub fn paginate(rows: Vec<Record>, page: usize, page_size: usize) -> Page {
    let total_records = rows.len();
    let total_pages = total_records.div_ceil(page_size.max(1));

    let start = page.saturating_sub(1).saturating_mul(page_size);
    let page_rows = if start >= total_records {
        Vec::new()
    } else {
        rows[start..(start + page_size).min(total_records)].to_vec()
    };

    Page {
        rows: page_rows,
        total_records,
        total_pages,
    }
}

/// A record matches when any searchable column matches, or when the fallback
/// haystack (name + email + department) matches. The fallback keeps records
/// findable even when no column declares itself searchable; the OR is part
/// of the contract, not an accident.
fn matches_search(record: &Record, columns: &[Column], needle: &str) -> bool {
    let column_hit = columns.iter().any(|column| {
        if !column.searchable {
            return false;
        }
        match column.key {
            ColumnKey::User => format!(
                "{} {} {}",
                record.first_name, record.last_name, record.email
            )
            .to_lowercase()
            .contains(needle),
            ColumnKey::Field(field) => {
                record.value(field).as_text().to_lowercase().contains(needle)
            }
            ColumnKey::Actions => false,
        }
    });

    column_hit
        || format!(
            "{} {} {} {}",
            record.first_name, record.last_name, record.email, record.department
        )
        .to_lowercase()
        .contains(needle)
}

/// Single-key sort. Strings compare with Turkish collation, numbers and
/// booleans naturally. Ties may reorder: the sort is not guaranteed stable
/// beyond what the comparison itself provides.
fn sort_rows(rows: &mut [Record], sort: &SortState) {
    rows.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, sort.key);
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn compare_by_key(a: &Record, b: &Record, key: ColumnKey) -> Ordering {
    match key {
        ColumnKey::User => collate::compare(&a.full_name(), &b.full_name()),
        ColumnKey::Field(field) => compare_values(&a.value(field), &b.value(field)),
        ColumnKey::Actions => Ordering::Equal,
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Str(a), Value::Str(b)) => collate::compare(a, b),
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::UInt(a), Value::UInt(b)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        // Fields are homogeneously typed; mixed variants only arise from a
        // misconfigured column and compare as equal.
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookmeza_types::{Field, default_columns};
    use bookmeza_testing::fixtures::record;

    fn people() -> Vec<Record> {
        vec![
            record(1)
                .first_name("Ali")
                .last_name("Veli")
                .email("ali@bookmeza.com")
                .status("Aktif")
                .build(),
            record(2)
                .first_name("Ayşe")
                .last_name("Kaya")
                .email("ayse@bookmeza.com")
                .status("Pasif")
                .build(),
        ]
    }

    fn view() -> ViewState {
        ViewState::default()
    }

    #[test]
    fn test_search_matches_composite_user_column() {
        let records = people();
        let mut state = view();
        state.search = "ayşe".to_string();

        let rows = derive(&records, default_columns(), &state);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 2);
    }

    #[test]
    fn test_search_falls_back_to_department_haystack() {
        let records = vec![
            record(1).department("Yazılım").build(),
            record(2).department("Finans").build(),
        ];
        // No searchable column at all; the fallback haystack still matches.
        let columns = vec![Column::field(Field::Id, "ID")];
        let mut state = view();
        state.search = "finans".to_string();

        let rows = derive(&records, &columns, &state);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 2);
    }

    #[test]
    fn test_filters_compose_with_and() {
        let records = vec![
            record(1).department("Yazılım").city("Ankara").build(),
            record(2).department("Yazılım").city("İzmir").build(),
            record(3).department("Finans").city("Ankara").build(),
        ];
        let mut state = view();
        state.filters.insert(Field::Department, "yazılım".to_string());
        state.filters.insert(Field::City, "ankara".to_string());

        let rows = derive(&records, default_columns(), &state);
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_empty_filter_entries_are_ignored() {
        let records = people();
        let mut state = view();
        state.filters.insert(Field::Department, String::new());

        assert_eq!(derive(&records, default_columns(), &state).len(), 2);
    }

    #[test]
    fn test_unfiltered_derive_is_a_permutation() {
        let records = people();
        let mut state = view();
        state.sort = Some(SortState {
            key: ColumnKey::User,
            direction: SortDirection::Descending,
        });

        let rows = derive(&records, default_columns(), &state);
        assert_eq!(rows.len(), records.len());
        for record in &records {
            assert!(rows.contains(record));
        }
    }

    #[test]
    fn test_user_sort_ascending_and_toggled() {
        let records = vec![
            record(1).first_name("B").last_name("X").build(),
            record(2).first_name("A").last_name("X").build(),
        ];
        let mut state = view();
        state.sort = Some(SortState {
            key: ColumnKey::User,
            direction: SortDirection::Ascending,
        });
        let ascending = derive(&records, default_columns(), &state);
        assert_eq!(ascending.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 1]);

        state.sort = Some(SortState {
            key: ColumnKey::User,
            direction: SortDirection::Descending,
        });
        let descending = derive(&records, default_columns(), &state);
        assert_eq!(descending.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_numeric_sort_uses_natural_order() {
        let records = vec![
            record(1).score(9).build(),
            record(2).score(80).build(),
            record(3).score(45).build(),
        ];
        let mut state = view();
        state.sort = Some(SortState {
            key: ColumnKey::Field(Field::Score),
            direction: SortDirection::Ascending,
        });

        let rows = derive(&records, default_columns(), &state);
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3, 2]);
    }

    #[test]
    fn test_paginate_slices_and_counts() {
        let records: Vec<Record> = (1..=23).map(|id| record(id).build()).collect();
        let page = paginate(records.clone(), 3, 10);

        assert_eq!(page.rows.len(), 3);
        assert_eq!(page.total_records, 23);
        assert_eq!(page.total_pages, 3);

        let page = paginate(records, 5, 10);
        assert!(page.rows.is_empty());
        assert_eq!(page.total_records, 23);
    }

    #[test]
    fn test_page_slice_never_exceeds_page_size() {
        let records: Vec<Record> = (1..=7).map(|id| record(id).build()).collect();
        for page_number in 1..=4 {
            let page = paginate(records.clone(), page_number, 5);
            assert!(page.rows.len() <= 5);
            assert_eq!(page.total_records, 7);
        }
    }
}
