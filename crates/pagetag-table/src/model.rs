use crate::error::TableError;

/// A rectangular table with named columns and stable row order.
///
/// Rows are normalized to the header width on insertion: short rows are
/// padded with empty cells, long rows are truncated. Nothing ever reorders
/// existing rows; positional alignment downstream depends on that.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Append a row, normalizing it to the header width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    /// Index of a named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// All values of a named column, in row order.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|r| r[idx].as_str()).collect())
    }

    /// Append a new column on the right, one value per row.
    ///
    /// `None` values become empty cells. Existing rows keep their order.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ColumnLength`] if `values` does not have
    /// exactly one entry per row.
    pub fn append_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<Option<String>>,
    ) -> Result<(), TableError> {
        if values.len() != self.rows.len() {
            return Err(TableError::ColumnLength {
                expected: self.rows.len(),
                actual: values.len(),
            });
        }
        self.headers.push(name.into());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value.unwrap_or_default());
        }
        Ok(())
    }

    /// Remove the named columns, preserving the order of the rest.
    ///
    /// Names that match no column are ignored.
    pub fn drop_columns(&mut self, names: &[String]) {
        let keep: Vec<usize> = (0..self.headers.len())
            .filter(|&i| !names.contains(&self.headers[i]))
            .collect();
        if keep.len() == self.headers.len() {
            return;
        }
        self.headers = keep.iter().map(|&i| self.headers[i].clone()).collect();
        for row in &mut self.rows {
            *row = keep.iter().map(|&i| row[i].clone()).collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut t = Table::new(vec!["name".into(), "qty".into()]);
        t.push_row(vec!["widget".into(), "2".into()]);
        t.push_row(vec!["gadget".into(), "5".into()]);
        t.push_row(vec!["sprocket".into(), "1".into()]);
        t
    }

    #[test]
    fn push_row_pads_short_rows() {
        let mut t = Table::new(vec!["a".into(), "b".into(), "c".into()]);
        t.push_row(vec!["x".into()]);
        assert_eq!(t.rows()[0], vec!["x", "", ""]);
    }

    #[test]
    fn push_row_truncates_long_rows() {
        let mut t = Table::new(vec!["a".into()]);
        t.push_row(vec!["x".into(), "extra".into()]);
        assert_eq!(t.rows()[0], vec!["x"]);
    }

    #[test]
    fn append_column_fills_every_row() {
        let mut t = sample();
        t.append_column(
            "code",
            vec![Some("c1".into()), None, Some("c3".into())],
        )
        .unwrap();
        assert_eq!(t.headers(), &["name", "qty", "code"]);
        assert_eq!(t.column("code").unwrap(), vec!["c1", "", "c3"]);
    }

    #[test]
    fn append_column_preserves_row_order() {
        let mut t = sample();
        t.append_column("code", vec![Some("a".into()), Some("b".into()), Some("c".into())])
            .unwrap();
        let names: Vec<_> = t.rows().iter().map(|r| r[0].as_str()).collect();
        assert_eq!(names, vec!["widget", "gadget", "sprocket"]);
    }

    #[test]
    fn append_column_rejects_wrong_length() {
        let mut t = sample();
        let err = t.append_column("code", vec![Some("only-one".into())]).unwrap_err();
        assert!(matches!(
            err,
            TableError::ColumnLength {
                expected: 3,
                actual: 1
            }
        ));
    }

    #[test]
    fn drop_columns_removes_named_column() {
        let mut t = sample();
        t.drop_columns(&["qty".to_string()]);
        assert_eq!(t.headers(), &["name"]);
        assert_eq!(t.rows()[1], vec!["gadget"]);
    }

    #[test]
    fn drop_columns_ignores_unknown_names() {
        let mut t = sample();
        t.drop_columns(&["nonexistent".to_string()]);
        assert_eq!(t.headers(), &["name", "qty"]);
        assert_eq!(t.row_count(), 3);
    }

    #[test]
    fn column_of_unknown_name_is_none() {
        assert!(sample().column("missing").is_none());
    }
}
