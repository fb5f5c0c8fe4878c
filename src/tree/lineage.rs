//! Ancestor lineage and the connector glyphs it selects

/// Connector for an entry that has siblings after it.
pub const BRANCH: &str = "├── ";
/// Connector for the last entry of a directory.
pub const LAST_BRANCH: &str = "└── ";
/// Indent under an ancestor that still has siblings below it.
pub const PIPE_INDENT: &str = "│   ";
/// Indent under an ancestor that was the last of its siblings.
pub const BLANK_INDENT: &str = "    ";

/// One flag per ancestor level, outermost first: was that ancestor the
/// last among its siblings?
///
/// The walker pushes before descending and pops on the way back, so a
/// directory only ever sees its own chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lineage(Vec<bool>);

impl Lineage {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, is_last: bool) {
        self.0.push(is_last);
    }

    pub fn pop(&mut self) -> Option<bool> {
        self.0.pop()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    /// Indent written before the connector of every entry at this level.
    pub fn prefix(&self) -> String {
        self.0
            .iter()
            .map(|&was_last| if was_last { BLANK_INDENT } else { PIPE_INDENT })
            .collect()
    }
}

impl From<Vec<bool>> for Lineage {
    fn from(flags: Vec<bool>) -> Self {
        Self(flags)
    }
}

/// Connector for an entry, given whether it closes its directory.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}
