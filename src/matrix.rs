// src/matrix.rs
//! Dense row-major matrix: checked arithmetic, transpose, cofactor
//! determinant and inverse.

use crate::error::{LinalgError, Result};
use crate::initializers;
use crate::types::{within, Scalar, EPSILON};
use crate::vector::Vector;
use std::fmt;
use std::ops::{Index, IndexMut, Mul, Neg};
use tracing::{debug, trace};

/// A `rows × columns` grid of reals, `rows, columns ≥ 1`.
///
/// Elements are stored row-major and addressed 0-based as `m[(row, column)]`.
/// Initializer callbacks passed to [`Matrix::from_fn`] and friends receive
/// 1-based coordinates instead; see [`crate::initializers`].
#[derive(Clone, Debug)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    elements: Vec<Scalar>,
}

impl Matrix {
    // ---------------------------------------------------------------
    // Construction
    // ---------------------------------------------------------------

    /// Build from a row-major flat buffer of length `rows * columns`.
    pub fn from_row_major(rows: usize, columns: usize, elements: Vec<Scalar>) -> Result<Self> {
        if elements.len() != Self::storage_len(rows, columns)? {
            return Err(LinalgError::mismatch(
                "matrix storage",
                format!("{rows}x{columns}"),
                format!("{} elements", elements.len()),
            ));
        }
        Ok(Self { rows, columns, elements })
    }

    /// Build from a list of equally long rows.
    pub fn from_rows(rows: Vec<Vec<Scalar>>) -> Result<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        if columns == 0 {
            return Err(LinalgError::EmptyMatrix);
        }
        let n_rows = rows.len();
        let mut elements = Vec::with_capacity(n_rows * columns);
        for row in rows {
            if row.len() != columns {
                return Err(LinalgError::mismatch(
                    "matrix rows",
                    format!("{columns} columns"),
                    format!("{} columns", row.len()),
                ));
            }
            elements.extend(row);
        }
        Self::from_row_major(n_rows, columns, elements)
    }

    /// Zero-filled `rows × columns` matrix.
    pub fn zeros(rows: usize, columns: usize) -> Result<Self> {
        let len = Self::storage_len(rows, columns)?;
        Self::from_row_major(rows, columns, vec![0.0; len])
    }

    /// Element count of a `rows × columns` grid, rejecting empty shapes and
    /// shapes whose buffer size does not fit in `isize::MAX` bytes.
    fn storage_len(rows: usize, columns: usize) -> Result<usize> {
        if rows == 0 || columns == 0 {
            return Err(LinalgError::EmptyMatrix);
        }
        rows.checked_mul(columns)
            .filter(|len| {
                len.checked_mul(std::mem::size_of::<Scalar>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or(LinalgError::ShapeOverflow { rows, columns })
    }

    /// Fill each cell with `f(row, column)` (1-based).
    pub fn from_fn<F>(rows: usize, columns: usize, f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> Scalar,
    {
        let mut m = Self::zeros(rows, columns)?;
        m.set_values(f);
        Ok(m)
    }

    /// Fill each cell with `f(row, column, rows, columns)` (1-based coordinates).
    pub fn from_fn_with_dims<F>(rows: usize, columns: usize, f: F) -> Result<Self>
    where
        F: FnMut(usize, usize, usize, usize) -> Scalar,
    {
        let mut m = Self::zeros(rows, columns)?;
        m.set_values_with_dims(f);
        Ok(m)
    }

    /// `n × n` identity.
    pub fn identity(n: usize) -> Result<Self> {
        Self::from_fn(n, n, initializers::identity)
    }

    /// Overwrite every cell with `f(row, column)` (1-based).
    pub fn set_values<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, usize) -> Scalar,
    {
        for r in 0..self.rows {
            for c in 0..self.columns {
                self.elements[r * self.columns + c] = f(r + 1, c + 1);
            }
        }
    }

    /// Overwrite every cell with `f(row, column, rows, columns)` (1-based coordinates).
    pub fn set_values_with_dims<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, usize, usize, usize) -> Scalar,
    {
        let (rows, columns) = (self.rows, self.columns);
        self.set_values(|r, c| f(r, c, rows, columns));
    }

    // ---------------------------------------------------------------
    // Shape and access
    // ---------------------------------------------------------------

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline(always)]
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    pub fn same_dimensions(&self, other: &Self) -> bool {
        self.rows == other.rows && self.columns == other.columns
    }

    /// Row-major view of the elements.
    #[inline(always)]
    pub fn as_slice(&self) -> &[Scalar] {
        &self.elements
    }

    /// Element at `(row, column)`, or `None` outside the grid.
    pub fn get(&self, row: usize, column: usize) -> Option<Scalar> {
        if row < self.rows && column < self.columns {
            Some(self.elements[row * self.columns + column])
        } else {
            None
        }
    }

    /// Copy of row `row` as a standalone vector.
    pub fn row_vector(&self, row: usize) -> Result<Vector> {
        if row >= self.rows {
            return Err(LinalgError::IndexOutOfBounds { index: row, len: self.rows });
        }
        Ok(Vector::from(self.row(row)))
    }

    /// Copy of column `column` as a standalone vector.
    pub fn column_vector(&self, column: usize) -> Result<Vector> {
        if column >= self.columns {
            return Err(LinalgError::IndexOutOfBounds { index: column, len: self.columns });
        }
        Ok(Vector::new(
            (0..self.rows).map(|r| self.elements[r * self.columns + column]).collect(),
        ))
    }

    #[inline]
    fn row(&self, row: usize) -> &[Scalar] {
        &self.elements[row * self.columns..(row + 1) * self.columns]
    }

    // ---------------------------------------------------------------
    // Arithmetic
    // ---------------------------------------------------------------

    /// Multiply every element by `s`.
    pub fn scale(&self, s: Scalar) -> Self {
        self.map(|x| s * x)
    }

    /// Elementwise sum of two matrices of identical shape.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        if !self.same_dimensions(other) {
            return Err(LinalgError::mismatch("matrix add", self.shape(), other.shape()));
        }
        let elements = self
            .elements
            .iter()
            .zip(&other.elements)
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self { rows: self.rows, columns: self.columns, elements })
    }

    /// `self + (-1 * other)`.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.try_add(&other.scale(-1.0))
    }

    /// Matrix product `self · other`; needs `self.columns == other.rows`.
    ///
    /// Cell `(r, c)` is the dot product of row `r` of `self` with column `c`
    /// of `other`, accumulated left to right.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.columns != other.rows {
            return Err(LinalgError::mismatch(
                "matrix multiply",
                self.shape(),
                other.shape(),
            ));
        }
        let (n, k, m) = (self.rows, self.columns, other.columns);
        let mut c = vec![0.0; n * m];
        for i in 0..n {
            for j in 0..m {
                let mut sum = 0.0;
                for p in 0..k {
                    sum += self.elements[i * k + p] * other.elements[p * m + j];
                }
                c[i * m + j] = sum;
            }
        }
        Ok(Self { rows: n, columns: m, elements: c })
    }

    /// Matrix-vector product; needs `v.dimensions() == self.columns`.
    pub fn multiply_vector(&self, v: &Vector) -> Result<Vector> {
        if v.dimensions() != self.columns {
            return Err(LinalgError::mismatch(
                "matrix-vector multiply",
                self.shape(),
                format!("{}-vector", v.dimensions()),
            ));
        }
        Ok(Vector::new(
            (0..self.rows)
                .map(|r| v.dot_unchecked(&Vector::from(self.row(r))))
                .collect(),
        ))
    }

    /// `columns × rows` matrix with `t[(c, r)] == self[(r, c)]`.
    pub fn transpose(&self) -> Self {
        let mut elements = Vec::with_capacity(self.elements.len());
        for c in 0..self.columns {
            for r in 0..self.rows {
                elements.push(self.elements[r * self.columns + c]);
            }
        }
        Self { rows: self.columns, columns: self.rows, elements }
    }

    // ---------------------------------------------------------------
    // Determinant, cofactors, inverse
    // ---------------------------------------------------------------

    /// Submatrix with `row` and `column` removed.
    pub fn minor(&self, row: usize, column: usize) -> Result<Self> {
        self.require_square()?;
        if row >= self.rows {
            return Err(LinalgError::IndexOutOfBounds { index: row, len: self.rows });
        }
        if column >= self.columns {
            return Err(LinalgError::IndexOutOfBounds { index: column, len: self.columns });
        }
        if self.rows == 1 {
            return Err(LinalgError::EmptyMatrix);
        }
        Ok(self.minor_unchecked(row, column))
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// O(n!) in the order of the matrix. Terms are summed in column order with
    /// alternating sign starting at `+1`, so integer-valued inputs give exact
    /// results.
    pub fn determinant(&self) -> Result<Scalar> {
        self.require_square()?;
        Ok(self.cofactor_expansion())
    }

    /// Signed minor determinant `(-1)^(row + column) · det(minor(row, column))`.
    pub fn cofactor(&self, row: usize, column: usize) -> Result<Scalar> {
        let det = self.minor(row, column)?.cofactor_expansion();
        Ok(if (row + column) % 2 == 0 { det } else { -det })
    }

    /// Matrix of all cofactors. A 1×1 matrix has the cofactor matrix `[[1]]`.
    pub fn cofactor_matrix(&self) -> Result<Self> {
        self.require_square()?;
        if self.rows == 1 {
            return Self::from_row_major(1, 1, vec![1.0]);
        }
        let mut elements = Vec::with_capacity(self.elements.len());
        for r in 0..self.rows {
            for c in 0..self.columns {
                elements.push(self.cofactor(r, c)?);
            }
        }
        Self::from_row_major(self.rows, self.columns, elements)
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Result<Self> {
        Ok(self.cofactor_matrix()?.transpose())
    }

    /// Inverse of a square matrix.
    ///
    /// Fails with [`LinalgError::Singular`] when the determinant is exactly
    /// zero. Orders 1 and 2 use the closed forms; larger orders divide the
    /// adjugate by the determinant.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant()?;
        if det == 0.0 {
            return Err(LinalgError::Singular);
        }
        match self.rows {
            1 => Self::from_row_major(1, 1, vec![1.0 / det]),
            2 => {
                let (a, b, c, d) = (
                    self.elements[0],
                    self.elements[1],
                    self.elements[2],
                    self.elements[3],
                );
                Self::from_row_major(2, 2, vec![d / det, -b / det, -c / det, a / det])
            }
            n => {
                debug!(order = n, det, "inverting via adjugate");
                Ok(self.adjugate()?.map(|x| x / det))
            }
        }
    }

    /// Caller guarantees a square matrix of order ≥ 1.
    fn cofactor_expansion(&self) -> Scalar {
        let e = &self.elements;
        match self.rows {
            1 => e[0],
            2 => e[0] * e[3] - e[1] * e[2],
            n => {
                trace!(order = n, "cofactor expansion");
                let mut sum = 0.0;
                let mut sign = 1.0;
                for term in self.first_row_terms() {
                    sum += sign * term;
                    sign = -sign;
                }
                sum
            }
        }
    }

    /// `A[0][c] · det(minor(0, c))` for each column, in column order.
    #[cfg(not(feature = "parallel"))]
    fn first_row_terms(&self) -> Vec<Scalar> {
        (0..self.columns).map(|c| self.first_row_term(c)).collect()
    }

    #[cfg(feature = "parallel")]
    fn first_row_terms(&self) -> Vec<Scalar> {
        use rayon::prelude::*;
        (0..self.columns)
            .into_par_iter()
            .map(|c| self.first_row_term(c))
            .collect()
    }

    #[inline]
    fn first_row_term(&self, column: usize) -> Scalar {
        self.elements[column] * self.minor_unchecked(0, column).cofactor_expansion()
    }

    /// Caller guarantees `row < rows`, `column < columns` and both ≥ 2.
    fn minor_unchecked(&self, row: usize, column: usize) -> Self {
        let mut elements = Vec::with_capacity((self.rows - 1) * (self.columns - 1));
        for r in (0..self.rows).filter(|&r| r != row) {
            for c in (0..self.columns).filter(|&c| c != column) {
                elements.push(self.elements[r * self.columns + c]);
            }
        }
        Self { rows: self.rows - 1, columns: self.columns - 1, elements }
    }

    fn require_square(&self) -> Result<()> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare { rows: self.rows, columns: self.columns });
        }
        Ok(())
    }

    // ---------------------------------------------------------------
    // Comparison and rendering
    // ---------------------------------------------------------------

    /// Same shape and every element within `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: Scalar) -> bool {
        self.same_dimensions(other)
            && self
                .elements
                .iter()
                .zip(&other.elements)
                .all(|(a, b)| within(*a, *b, tolerance))
    }

    /// Rows rendered as brace-delimited literals, e.g. `{1,2,},`.
    pub fn to_array_string(&self) -> String {
        (0..self.rows)
            .map(|r| {
                let body: String = self.row(r).iter().map(|x| format!("{x},")).collect();
                format!("{{{body}}},")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn map(&self, f: impl Fn(Scalar) -> Scalar) -> Self {
        Self {
            rows: self.rows,
            columns: self.columns,
            elements: self.elements.iter().map(|&x| f(x)).collect(),
        }
    }

    fn shape(&self) -> String {
        format!("{}x{}", self.rows, self.columns)
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, EPSILON)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Scalar;
    #[inline]
    fn index(&self, (row, column): (usize, usize)) -> &Scalar {
        assert!(
            row < self.rows && column < self.columns,
            "index ({row}, {column}) out of bounds for {}x{} matrix",
            self.rows,
            self.columns
        );
        &self.elements[row * self.columns + column]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Scalar {
        assert!(
            row < self.rows && column < self.columns,
            "index ({row}, {column}) out of bounds for {}x{} matrix",
            self.rows,
            self.columns
        );
        &mut self.elements[row * self.columns + column]
    }
}

impl Mul<Scalar> for &Matrix {
    type Output = Matrix;
    #[inline]
    fn mul(self, rhs: Scalar) -> Matrix {
        self.scale(rhs)
    }
}

impl Mul<Scalar> for Matrix {
    type Output = Matrix;
    #[inline]
    fn mul(self, rhs: Scalar) -> Matrix {
        self.scale(rhs)
    }
}

impl Mul<&Matrix> for Scalar {
    type Output = Matrix;
    #[inline]
    fn mul(self, rhs: &Matrix) -> Matrix {
        rhs.scale(self)
    }
}

impl Mul<Matrix> for Scalar {
    type Output = Matrix;
    #[inline]
    fn mul(self, rhs: Matrix) -> Matrix {
        rhs.scale(self)
    }
}

impl Neg for &Matrix {
    type Output = Matrix;
    #[inline]
    fn neg(self) -> Matrix {
        self.scale(-1.0)
    }
}

impl Neg for Matrix {
    type Output = Matrix;
    #[inline]
    fn neg(self) -> Matrix {
        self.scale(-1.0)
    }
}

/// Renders as a `RxC Matrix:` header followed by one `|`-delimited,
/// tab-separated line per row.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{} Matrix:", self.rows, self.columns)?;
        for r in 0..self.rows {
            write!(f, "\n|\t")?;
            for x in self.row(r) {
                write!(f, "{x} \t")?;
            }
            write!(f, "|")?;
        }
        Ok(())
    }
}
