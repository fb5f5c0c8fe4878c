//! Configuration types for the tree walker

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkerConfig {
    /// Include entries whose names start with `.`
    pub show_hidden: bool,
}

impl WalkerConfig {
    pub fn with_hidden(show_hidden: bool) -> Self {
        Self { show_hidden }
    }
}
