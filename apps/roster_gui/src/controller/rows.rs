use shared::domain::Entry;

/// The table never renders fewer rows than this.
pub const MIN_TABLE_ROWS: usize = 5;

/// Keeps blank rows at their normal height.
pub const BLANK_CELL: &str = "\u{00A0}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayRow<'a> {
    Entry(&'a Entry),
    Blank,
}

impl<'a> DisplayRow<'a> {
    pub fn name(&self) -> &'a str {
        match *self {
            DisplayRow::Entry(entry) => &entry.name,
            DisplayRow::Blank => BLANK_CELL,
        }
    }

    pub fn location(&self) -> &'a str {
        match *self {
            DisplayRow::Entry(entry) => &entry.location,
            DisplayRow::Blank => BLANK_CELL,
        }
    }

    #[cfg(test)]
    pub fn is_blank(&self) -> bool {
        matches!(self, DisplayRow::Blank)
    }
}

pub fn display_rows(entries: &[Entry]) -> Vec<DisplayRow<'_>> {
    let padding = MIN_TABLE_ROWS.saturating_sub(entries.len());
    entries
        .iter()
        .map(DisplayRow::Entry)
        .chain(std::iter::repeat(DisplayRow::Blank).take(padding))
        .collect()
}

/// Odd rows get the shaded background.
pub fn is_shaded_row(index: usize) -> bool {
    index % 2 == 1
}

#[cfg(test)]
#[path = "tests/rows_tests.rs"]
mod tests;
