use serde::{Deserialize, Serialize};

/// Visual importance of a label, mapped to a color by the GUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Importance {
    Low,
    #[default]
    Medium,
    Success,
    Warning,
    Danger,
}

impl Importance {
    /// CSS class used by the GUI for text with this importance.
    pub fn text_class(self) -> &'static str {
        match self {
            Self::Low => "text-base-content/60",
            Self::Medium => "text-base-content",
            Self::Success => "text-success",
            Self::Warning => "text-warning",
            Self::Danger => "text-error",
        }
    }
}
