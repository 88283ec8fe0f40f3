//! Fixed-width text tables for listing entities.
//!
//! Every row starts with the entity id followed by any number of columns,
//! each padded or truncated to its configured width:
//!
//! ```text
//! | 5f1a2b3c4d5e6f7a8b9c0d1e | Backlog                                       |
//! ```

use std::fmt;

/// Column width used for entity names in most listings.
pub const NAME_WIDTH: usize = 45;

/// A table of `| id | col | col |` rows.
///
/// # Examples
///
/// ```rust
/// use trello_core::display::Table;
///
/// let mut table = Table::new(&[5]);
/// table.push("abc", vec!["Backlog".to_string()]);
/// assert_eq!(table.to_string(), "| abc | Backl |\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Table {
    widths: Vec<usize>,
    rows: Vec<(String, Vec<String>)>,
}

impl Table {
    /// Creates an empty table whose non-id columns have the given widths.
    pub fn new(widths: &[usize]) -> Self {
        Self {
            widths: widths.to_vec(),
            rows: Vec::new(),
        }
    }

    /// Appends a row. Missing cells render empty; extra cells are ignored.
    pub fn push(&mut self, id: impl Into<String>, cells: Vec<String>) {
        self.rows.push((id.into(), cells));
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, cells) in &self.rows {
            write!(f, "| {id} |")?;
            for (index, &width) in self.widths.iter().enumerate() {
                let cell = cells.get(index).map(String::as_str).unwrap_or_default();
                write!(f, " {cell:<width$.width$} |")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
