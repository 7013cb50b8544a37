/// Definition of a table column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub label: &'static str,
    pub sortable: bool,
    /// Preferred width in pixels, `None` to let the layout decide.
    pub width: Option<u16>,
}

impl ColumnDef {
    pub const fn new(label: &'static str) -> Self {
        Self {
            label,
            sortable: true,
            width: None,
        }
    }

    pub const fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub const fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}
