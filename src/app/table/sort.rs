//! Single column sort state of a table.

use crate::app::table::column::ColumnDef;

/// Sort direction of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    /// The column can not be sorted.
    None,
    #[default]
    Off,
    Asc,
    Desc,
}

impl SortDir {
    /// Next direction when a column header is clicked.
    fn next(self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Off => Self::Asc,
            Self::Asc => Self::Desc,
            Self::Desc => Self::Off,
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, Self::Asc | Self::Desc)
    }
}

/// Sort state of the columns of a table. At most one column is sorted at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSorter {
    cols: Vec<SortDir>,
    sortable: Vec<bool>,
    default: Option<(usize, SortDir)>,
}

impl ColumnSorter {
    /// Creates a sorter with all sortable columns off.
    pub fn new(columns: &[ColumnDef]) -> Self {
        let mut sorter = Self {
            cols: vec![SortDir::Off; columns.len()],
            sortable: columns.iter().map(|c| c.sortable).collect(),
            default: None,
        };
        sorter.clear();
        sorter
    }

    /// Creates a sorter with a default sort, which is applied now and by [`Self::reset`].
    pub fn with_default(columns: &[ColumnDef], idx: usize, dir: SortDir) -> Self {
        let mut sorter = Self::new(columns);
        sorter.default = Some((idx, dir));
        sorter.set(idx, dir);
        sorter
    }

    pub fn len(&self) -> usize {
        self.cols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cols.is_empty()
    }

    /// Returns the direction of a column. Unknown columns are reported as off.
    pub fn column(&self, idx: usize) -> SortDir {
        self.cols.get(idx).copied().unwrap_or(SortDir::Off)
    }

    /// Returns the sorted column and its direction, if any column is sorted.
    pub fn current(&self) -> Option<(usize, SortDir)> {
        self.cols
            .iter()
            .enumerate()
            .find(|(_, d)| d.is_active())
            .map(|(i, d)| (i, *d))
    }

    /// Turns sorting off for all sortable columns.
    pub fn clear(&mut self) {
        for (dir, sortable) in self.cols.iter_mut().zip(&self.sortable) {
            *dir = if *sortable { SortDir::Off } else { SortDir::None };
        }
    }

    /// Sets the direction of one column and turns all other columns off.
    ///
    /// Unknown and non-sortable columns only clear the current sort.
    pub fn set(&mut self, idx: usize, dir: SortDir) {
        self.clear();
        if let Some(col) = self.cols.get_mut(idx) {
            if *col != SortDir::None && dir != SortDir::None {
                *col = dir;
            }
        }
    }

    /// Restores the default sort.
    pub fn reset(&mut self) {
        match self.default {
            Some((idx, dir)) => self.set(idx, dir),
            None => self.clear(),
        }
    }

    /// Advances a column to its next direction: off, ascending, descending, off.
    ///
    /// # Returns
    /// - `Some((idx, dir))` - The column is now sorted in `dir`
    /// - `None` - The column is now off, or it is not sortable
    pub fn cycle(&mut self, idx: usize) -> Option<(usize, SortDir)> {
        let dir = self.column(idx);
        if dir == SortDir::None || idx >= self.cols.len() {
            return None;
        }
        let next = dir.next();
        self.set(idx, next);
        next.is_active().then_some((idx, next))
    }

    /// Updates the sort state for a refresh of the table.
    ///
    /// # Arguments
    /// - `clicked` - Column whose header was clicked, or `None` to keep the current state.
    ///   Clicks on non-sortable columns are ignored.
    ///
    /// # Returns
    /// - `Some((idx, dir))` - Rows are to be sorted by this column
    /// - `None` - Rows keep their canonical order
    pub fn apply(&mut self, clicked: Option<usize>) -> Option<(usize, SortDir)> {
        if let Some(idx) = clicked {
            if self.column(idx) != SortDir::None && idx < self.cols.len() {
                return self.cycle(idx);
            }
        }
        self.current()
    }
}
