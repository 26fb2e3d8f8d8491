use anyhow::{bail, ensure, Result};
use itertools::Itertools;
use std::fmt;
use std::fmt::{Display, Formatter};

/// A dense, row-major matrix with at least one row and one column.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: Vec<Vec<f64>>,
}

impl Matrix {
    /// Fails on empty or ragged input.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Matrix> {
        let columns = match rows.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => bail!("A matrix needs at least one row and one column"),
        };
        ensure!(
            rows.iter().all(|row| row.len() == columns),
            "Every row of a matrix must have {} columns",
            columns
        );
        Ok(Matrix { rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows[0].len()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.rows.get(row)?.get(column).copied()
    }

    /// # Examples
    ///
    /// ```
    /// use calculator::numbers::Matrix;
    /// # use anyhow::Result;
    ///
    /// # fn main() -> Result<()> {
    /// let a = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
    /// let identity = Matrix::new(vec![vec![1.0, 0.0], vec![0.0, 1.0]])?;
    /// assert_eq!(a.multiply(&identity)?, a);
    /// # Ok::<(), anyhow::Error>(()) }
    /// ```
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        ensure!(
            self.column_count() == other.row_count(),
            "Incompatible dimensions: {}x{} times {}x{}",
            self.row_count(),
            self.column_count(),
            other.row_count(),
            other.column_count()
        );
        let rows = self
            .rows
            .iter()
            .map(|row| {
                (0..other.column_count())
                    .map(|column| {
                        row.iter()
                            .zip(&other.rows)
                            .map(|(value, other_row)| value * other_row[column])
                            .sum::<f64>()
                    })
                    .collect::<Vec<f64>>()
            })
            .collect();
        Ok(Matrix { rows })
    }

    pub fn transpose(&self) -> Matrix {
        let rows = (0..self.column_count())
            .map(|column| self.rows.iter().map(|row| row[column]).collect::<Vec<f64>>())
            .collect();
        Matrix { rows }
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "[{}]", row.iter().join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn demo_matrices() -> (Matrix, Matrix) {
        let a = Matrix::new(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let b = Matrix::new(vec![vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]]).unwrap();
        (a, b)
    }

    #[test]
    fn multiply_two_by_three_with_three_by_two() {
        let (a, b) = demo_matrices();
        let expected = Matrix::new(vec![vec![58.0, 64.0], vec![139.0, 154.0]]).unwrap();

        assert_eq!(a.multiply(&b).unwrap(), expected);
    }

    #[test]
    fn multiply_incompatible_dimensions_returns_err() {
        let (a, _) = demo_matrices();

        assert!(a.multiply(&a).is_err());
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let (a, _) = demo_matrices();

        let transposed = a.transpose();

        assert_eq!(transposed.row_count(), 3);
        assert_eq!(transposed.get(2, 1), Some(6.0));
        assert_eq!(transposed.transpose(), a);
    }

    #[test]
    fn ragged_or_empty_rows_are_rejected() {
        assert!(Matrix::new(vec![]).is_err());
        assert!(Matrix::new(vec![vec![]]).is_err());
        assert!(Matrix::new(vec![vec![1.0], vec![1.0, 2.0]]).is_err());
    }

    #[test]
    fn display_prints_one_row_per_line() {
        let (a, _) = demo_matrices();

        assert_eq!(a.to_string(), "[1, 2, 3]\n[4, 5, 6]\n");
    }
}
