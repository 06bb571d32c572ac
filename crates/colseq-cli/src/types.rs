use serde::Serialize;

/// A set operation over one or two lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOperation {
    Without,
    Intersect,
    Union,
    Unique,
    Duplicates,
}

impl ListOperation {
    /// Whether the operation compares against a second list.
    pub fn needs_other(self) -> bool {
        matches!(self, Self::Without | Self::Intersect | Self::Union)
    }
}

/// One column position with its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnRow {
    pub index: i64,
    pub name: String,
}

/// One entry of a remapped column layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemapRow {
    pub name: String,
    pub column: String,
    pub index: i64,
}
