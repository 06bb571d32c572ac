//! Positional records built from named fields.

use std::collections::HashMap;

use tracing::trace;

use crate::error::{Result, TableError};

/// Builds one record at a time for a fixed, ordered column schema.
///
/// Values may be set in any order; [`RecordBuilder::record`] always returns
/// them in schema order, with `None` for columns that were never set.
///
/// # Example
///
/// ```
/// use colseq_table::RecordBuilder;
///
/// let mut builder = RecordBuilder::new(["foo", "bar", "baz"])?;
/// builder.set("foo", "1")?;
/// builder.set("baz", "2")?;
/// builder.set("bar", "3")?;
/// assert_eq!(
///     builder.record(),
///     [Some("1".to_string()), Some("3".to_string()), Some("2".to_string())]
/// );
///
/// builder.reset();
/// builder.set("foo", "FOO")?;
/// assert_eq!(builder.record(), [Some("FOO".to_string()), None, None]);
/// # Ok::<(), colseq_table::TableError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    columns: Vec<String>,
    positions: HashMap<String, usize>,
    values: Vec<Option<String>>,
}

impl RecordBuilder {
    /// Create a builder for the given column order.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::DuplicateColumn`] if a column is named twice.
    pub fn new<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let mut positions = HashMap::with_capacity(columns.len());
        for (idx, column) in columns.iter().enumerate() {
            if positions.insert(column.clone(), idx).is_some() {
                return Err(TableError::DuplicateColumn {
                    column: column.clone(),
                });
            }
        }
        let values = vec![None; columns.len()];
        Ok(Self {
            columns,
            positions,
            values,
        })
    }

    /// The column schema in record order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Clear every value to start a new record.
    pub fn reset(&mut self) {
        self.values.fill(None);
    }

    /// Store `value` in `column`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UnknownColumn`] if `column` is not in the schema.
    pub fn set(&mut self, column: &str, value: impl Into<String>) -> Result<()> {
        let idx = self.position(column)?;
        let value = value.into();
        trace!(column, idx, "set record value");
        self.values[idx] = Some(value);
        Ok(())
    }

    /// The value stored in `column`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UnknownColumn`] if `column` is not in the schema.
    pub fn get(&self, column: &str) -> Result<Option<&str>> {
        let idx = self.position(column)?;
        Ok(self.values[idx].as_deref())
    }

    /// The current record in schema order.
    pub fn record(&self) -> &[Option<String>] {
        &self.values
    }

    /// The current record as `(column, value)` pairs in schema order.
    pub fn mapped_record(&self) -> Vec<(&str, Option<&str>)> {
        self.columns
            .iter()
            .zip(&self.values)
            .map(|(column, value)| (column.as_str(), value.as_deref()))
            .collect()
    }

    fn position(&self, column: &str) -> Result<usize> {
        self.positions
            .get(column)
            .copied()
            .ok_or_else(|| TableError::UnknownColumn {
                column: column.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builder_is_empty_record() {
        let builder = RecordBuilder::new(["a", "b"]).unwrap();
        assert_eq!(builder.len(), 2);
        assert!(!builder.is_empty());
        assert!(builder.record().iter().all(Option::is_none));
    }

    #[test]
    fn test_empty_schema() {
        let builder = RecordBuilder::new(Vec::<String>::new()).unwrap();
        assert!(builder.is_empty());
        assert!(builder.record().is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let mut builder = RecordBuilder::new(["a"]).unwrap();
        builder.set("a", "1").unwrap();
        builder.set("a", "2").unwrap();
        assert_eq!(builder.get("a").unwrap(), Some("2"));
    }
}
