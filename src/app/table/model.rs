//! Table model combining canonical rows, filter chips and a column sorter.

use std::{cmp::Ordering, fmt};

use crate::app::table::{
    column::ColumnDef,
    filter::FilterChip,
    sort::{ColumnSorter, SortDir},
};

/// A row of a [`FilterableTable`].
pub trait TableRow: Clone {
    /// Compares two rows by a column.
    ///
    /// Columns without an ordering return [`Ordering::Equal`], which keeps the canonical order.
    fn compare(&self, other: &Self, column: usize) -> Ordering;

    /// Text shown in a cell of this row.
    fn cell(&self, column: usize) -> String;
}

/// Copy of the visible state of a table for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSnapshot<R> {
    pub columns: Vec<ColumnDef>,
    /// Sort direction per column.
    pub sort: Vec<SortDir>,
    pub chips: Vec<FilterChip>,
    pub rows: Vec<R>,
}

impl<R> Default for TableSnapshot<R> {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            sort: Vec::new(),
            chips: Vec::new(),
            rows: Vec::new(),
        }
    }
}

type Extractor<R> = Box<dyn Fn(&R) -> Vec<String> + Send + Sync>;

struct Filter<R> {
    chip: FilterChip,
    extract: Extractor<R>,
}

/// Rows of a table with filter chips and single column sorting.
///
/// The canonical rows are never changed by filtering or sorting. Every change recomputes the
/// filtered rows from scratch, so the result only depends on the rows and the current state.
pub struct FilterableTable<R: TableRow> {
    columns: Vec<ColumnDef>,
    sorter: ColumnSorter,
    filters: Vec<Filter<R>>,
    rows: Vec<R>,
    rows_filtered: Vec<R>,
}

impl<R: TableRow> fmt::Debug for FilterableTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterableTable")
            .field("columns", &self.columns)
            .field("sorter", &self.sorter)
            .field("filters", &self.chips())
            .field("rows", &self.rows.len())
            .field("rows_filtered", &self.rows_filtered.len())
            .finish()
    }
}

impl<R: TableRow> FilterableTable<R> {
    pub fn new(columns: Vec<ColumnDef>, sorter: ColumnSorter) -> Self {
        Self {
            columns,
            sorter,
            filters: Vec::new(),
            rows: Vec::new(),
            rows_filtered: Vec::new(),
        }
    }

    /// Adds a filter chip.
    ///
    /// # Arguments
    /// - `label` - Label of the chip
    /// - `extract` - Returns the values of a row for this filter. A row passes when the
    ///   selected option is among them, which allows multi-valued fields like tags.
    pub fn with_filter<F>(mut self, label: &str, extract: F) -> Self
    where
        F: Fn(&R) -> Vec<String> + Send + Sync + 'static,
    {
        self.filters.push(Filter {
            chip: FilterChip::new(label),
            extract: Box::new(extract),
        });
        self
    }

    /// Replaces the canonical rows and recomputes the filtered rows.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.filter_rows(None);
    }

    /// Selects an option of a filter, or clears it with `None`, and recomputes.
    ///
    /// # Returns
    /// - `true` - The selection changed
    /// - `false` - Unknown filter, unknown option or no change
    pub fn select(&mut self, filter: usize, value: Option<String>) -> bool {
        let changed = self
            .filters
            .get_mut(filter)
            .is_some_and(|f| f.chip.set_selected(value));
        if changed {
            self.filter_rows(None);
        }
        changed
    }

    /// Sets the sort of a column directly and recomputes.
    pub fn set_sort(&mut self, column: usize, dir: SortDir) {
        self.sorter.set(column, dir);
        self.filter_rows(None);
    }

    /// Restores the default sort and recomputes.
    pub fn reset_sort(&mut self) {
        self.sorter.reset();
        self.filter_rows(None);
    }

    /// Recomputes the filtered rows.
    ///
    /// # Arguments
    /// - `sort_column` - Column whose header was clicked, which advances its direction,
    ///   or `None` to keep the current sort
    pub fn filter_rows(&mut self, sort_column: Option<usize>) {
        let sort = self.sorter.apply(sort_column);

        // A selection whose option vanished is cleared by `set_options`, which widens the
        // result again, so filter until the selections are stable.
        let mut rows = loop {
            let rows = self.matching_rows();
            let mut cleared = false;
            for filter in &mut self.filters {
                let was_active = filter.chip.is_active();
                let options = rows.iter().flat_map(|r| (filter.extract)(r));
                filter.chip.set_options(options);
                cleared |= was_active && !filter.chip.is_active();
            }
            if !cleared {
                break rows;
            }
        };

        if let Some((column, dir)) = sort {
            rows.sort_by(|a, b| {
                let ord = a.compare(b, column);
                if dir == SortDir::Desc {
                    ord.reverse()
                } else {
                    ord
                }
            });
        }
        self.rows_filtered = rows;
    }

    fn matching_rows(&self) -> Vec<R> {
        self.rows
            .iter()
            .filter(|r| {
                self.filters
                    .iter()
                    .all(|f| !f.chip.is_active() || f.chip.matches(&(f.extract)(*r)))
            })
            .cloned()
            .collect()
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn rows_filtered(&self) -> &[R] {
        &self.rows_filtered
    }

    pub fn filters(&self) -> impl Iterator<Item = &FilterChip> {
        self.filters.iter().map(|f| &f.chip)
    }

    /// Returns copies of the filter chips, e.g. for a view snapshot.
    pub fn chips(&self) -> Vec<FilterChip> {
        self.filters().cloned().collect()
    }

    pub fn snapshot(&self) -> TableSnapshot<R> {
        TableSnapshot {
            columns: self.columns.clone(),
            sort: (0..self.sorter.len()).map(|i| self.sorter.column(i)).collect(),
            chips: self.chips(),
            rows: self.rows_filtered.clone(),
        }
    }

    pub fn sorter(&self) -> &ColumnSorter {
        &self.sorter
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }
}
