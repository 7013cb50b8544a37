//! Categorical filter chips.

/// A filter with a list of options of which at most one can be selected.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterChip {
    pub label: String,
    selected: Option<String>,
    options: Vec<String>,
}

impl FilterChip {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            selected: None,
            options: Vec::new(),
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn is_active(&self) -> bool {
        self.selected.is_some()
    }

    /// Replaces the options. They are sorted and de-duplicated, and empty values are dropped.
    ///
    /// A selection which is no longer among the options is cleared.
    pub fn set_options<I, S>(&mut self, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options: Vec<String> = options
            .into_iter()
            .map(Into::into)
            .filter(|o| !o.is_empty())
            .collect();
        options.sort();
        options.dedup();
        self.options = options;
        if let Some(selected) = &self.selected {
            if !self.options.contains(selected) {
                self.selected = None;
            }
        }
    }

    /// Selects an option or clears the selection with `None`.
    ///
    /// # Returns
    /// - `true` - The selection was changed
    /// - `false` - The value is not among the options or already selected
    pub fn set_selected(&mut self, value: Option<String>) -> bool {
        if let Some(v) = &value {
            if !self.options.contains(v) {
                return false;
            }
        }
        if self.selected == value {
            return false;
        }
        self.selected = value;
        true
    }

    /// Reports whether a row with the given values passes this filter.
    pub fn matches(&self, values: &[String]) -> bool {
        match &self.selected {
            None => true,
            Some(selected) => values.contains(selected),
        }
    }
}
