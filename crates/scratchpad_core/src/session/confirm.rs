//! Clear confirmation prompt.

/// Choice presented by the clear prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearChoice {
    Cancel,
    Clear,
}

impl ClearChoice {
    pub fn label(self) -> &'static str {
        match self {
            Self::Cancel => "Cancel",
            Self::Clear => "Clear",
        }
    }
}

/// Shown prompt guarding the destructive clear action.
///
/// Consumed by `Scratchpad::resolve_clear`, so a prompt resolves once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearPrompt {
    pub title: &'static str,
    pub message: &'static str,
    pub choices: [ClearChoice; 2],
}

impl Default for ClearPrompt {
    fn default() -> Self {
        Self {
            title: "Clear scratchpad?",
            message: "All notes will be deleted.",
            choices: [ClearChoice::Cancel, ClearChoice::Clear],
        }
    }
}
