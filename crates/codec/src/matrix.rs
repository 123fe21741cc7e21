//! Dense row-major feature matrix.
//!
//! Both the raw encoded table and its scaled counterpart are stored as a
//! `FeatureMatrix`. Row `i` always refers to catalog row `i`.

use crate::error::{CodecError, Result};

/// A dense, row-major matrix of `f32` features with named columns.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    columns: Vec<String>,
    data: Vec<f32>,
    n_rows: usize,
}

impl FeatureMatrix {
    /// Build a matrix from column names and a row-major buffer.
    ///
    /// Fails if the buffer length isn't a multiple of the column count.
    pub fn new(columns: Vec<String>, data: Vec<f32>) -> Result<Self> {
        let n_cols = columns.len();
        let n_rows = if n_cols == 0 { 0 } else { data.len() / n_cols };

        if n_rows * n_cols != data.len() {
            return Err(CodecError::ShapeMismatch {
                len: data.len(),
                rows: n_rows,
                cols: n_cols,
            });
        }

        Ok(Self {
            columns,
            data,
            n_rows,
        })
    }

    /// Build a matrix from a list of equally sized rows.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<f32>>) -> Result<Self> {
        let n_cols = columns.len();
        let mut data = Vec::with_capacity(rows.len() * n_cols);
        for row in &rows {
            if row.len() != n_cols {
                return Err(CodecError::DimensionMismatch {
                    expected: n_cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        let mut matrix = Self::new(columns, data)?;
        // A zero-width matrix still has rows
        matrix.n_rows = rows.len();
        Ok(matrix)
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Position of a named column, if present
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Borrow row `i` as a slice.
    ///
    /// Panics if `i` is out of range, like slice indexing.
    pub fn row(&self, i: usize) -> &[f32] {
        let n_cols = self.n_cols();
        &self.data[i * n_cols..(i + 1) * n_cols]
    }

    /// Value at (`row`, `col`)
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.n_cols() + col]
    }

    /// The underlying row-major buffer
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(cols: &[&str]) -> Vec<String> {
        cols.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_row_access() {
        let m = FeatureMatrix::from_rows(
            names(&["a", "b"]),
            vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]],
        )
        .unwrap();

        assert_eq!(m.n_rows(), 3);
        assert_eq!(m.n_cols(), 2);
        assert_eq!(m.row(1), &[3.0, 4.0]);
        assert_eq!(m.get(2, 0), 5.0);
        assert_eq!(m.column_index("b"), Some(1));
        assert_eq!(m.column_index("c"), None);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = FeatureMatrix::from_rows(names(&["a", "b"]), vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(
            result,
            Err(CodecError::DimensionMismatch { expected: 2, found: 1 })
        ));
    }

    #[test]
    fn test_bad_buffer_length_rejected() {
        let result = FeatureMatrix::new(names(&["a", "b"]), vec![1.0, 2.0, 3.0]);
        assert!(matches!(result, Err(CodecError::ShapeMismatch { .. })));
    }
}
