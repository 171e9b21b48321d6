/* ************************************************************************ **
** This file is part of matrices, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Structural operations: identity, transpose, row/column extraction,
//! and the square-only scalar functions.

use crate::error::{Axis, Error, Result};
use crate::Matrix;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

impl<const N: usize> Matrix<N, N> {
    /// The identity matrix: ones on the diagonal, zeros elsewhere.
    pub const IDENTITY: Self = {
        let mut rows = [[0.0; N]; N];
        let mut i = 0;
        while i < N {
            rows[i][i] = 1.0;
            i += 1;
        }
        Self::from_rows(rows)
    };

    /// Construct the identity matrix.
    ///
    /// This is also available as the free function `mat::eye` and the
    /// associated constant `IDENTITY`.
    #[inline(always)]
    pub fn identity() -> Self
    { Self::IDENTITY }

    /// Sum of the diagonal.
    #[inline]
    pub fn trace(&self) -> f64
    { (0..N).map(|i| self.0[i][i]).sum() }

    /// Matrix determinant.
    #[inline(always)]
    pub fn det(&self) -> f64
    where Self: Det,
    { Det::det(self) }
}

impl<const C: usize, const R: usize> Matrix<C, R> {
    /// Matrix transpose.
    #[inline]
    pub fn t(&self) -> Matrix<R, C>
    { Matrix::from_fn(|x, y| self.0[x][y]) }

    /// Copy out column `x` as a column vector.
    pub fn column(&self, x: usize) -> Result<Matrix<1, R>> {
        if x >= C {
            return Err(Error::IndexOutOfRange { axis: Axis::Column, index: x, bound: C });
        }
        Ok(self.column_unchecked(x))
    }

    /// Copy out row `y` as a row vector.
    pub fn row(&self, y: usize) -> Result<Matrix<C, 1>> {
        if y >= R {
            return Err(Error::IndexOutOfRange { axis: Axis::Row, index: y, bound: R });
        }
        Ok(self.row_unchecked(y))
    }

    /// Map each component.
    #[inline]
    pub fn map<F>(&self, mut f: F) -> Self
    where F: FnMut(f64) -> f64,
    { Matrix::from_fn(|x, y| f(self.0[y][x])) }

    // Callers guarantee `x < C`; the slice index still panics otherwise.
    #[inline]
    pub(crate) fn column_unchecked(&self, x: usize) -> Matrix<1, R>
    { Matrix::from_fn(|_, y| self.0[y][x]) }

    #[inline]
    pub(crate) fn row_unchecked(&self, y: usize) -> Matrix<C, 1>
    { Matrix::from_rows([self.0[y]]) }
}

// -------------------------- END PUBLIC API ---------------------------------
// ---------------------------------------------------------------------------

/// Implementation detail of the inherent method `det`.
///
/// Implemented for the four square shapes.
pub trait Det {
    fn det(&self) -> f64;
}

impl Det for Matrix<1, 1> {
    #[inline]
    fn det(&self) -> f64
    { self.0[0][0] }
}

impl Det for Matrix<2, 2> {
    #[inline]
    fn det(&self) -> f64 {
        let [[a, b], [c, d]] = self.0;
        a * d - b * c
    }
}

impl Det for Matrix<3, 3> {
    fn det(&self) -> f64 {
        let [
            [a0, a1, a2],
            [b0, b1, b2],
            [c0, c1, c2],
        ] = self.0;

        0.0
        + a0 * b1 * c2
        + a1 * b2 * c0
        + a2 * b0 * c1
        - a0 * b2 * c1
        - a1 * b0 * c2
        - a2 * b1 * c0
    }
}

impl Det for Matrix<4, 4> {
    // cofactor expansion along the first row
    fn det(&self) -> f64 {
        (0..4).map(|skip| {
            let minor = Matrix::<3, 3>::from_fn(|x, y| {
                let x = if x < skip { x } else { x + 1 };
                self.0[y + 1][x]
            });
            let sign = if skip % 2 == 0 { 1.0 } else { -1.0 };
            sign * self.0[0][skip] * minor.det()
        }).sum()
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity() {
        assert_eq!(Matrix::<1, 1>::IDENTITY, Matrix::from_rows([[1.0]]));
        assert_eq!(Matrix::<2, 2>::identity(), Matrix::from_rows([[1.0, 0.0], [0.0, 1.0]]));
        assert_eq!(Matrix::<4, 4>::IDENTITY.trace(), 4.0);
        assert_eq!(Matrix::<3, 3>::IDENTITY, Matrix::from_rows([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ]));
    }

    #[test]
    fn transpose() {
        let m = Matrix::from_rows([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
        ]);
        let t: Matrix<2, 3> = m.t();
        assert_eq!(t, Matrix::from_rows([
            [1.0, 4.0],
            [2.0, 5.0],
            [3.0, 6.0],
        ]));
        assert_eq!(t.t(), m);
    }

    #[test]
    fn extraction() {
        let m = Matrix::from_rows([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
        ]);
        assert_eq!(m.column(2), Ok(Matrix::from_rows([[3.0], [6.0]])));
        assert_eq!(m.row(1), Ok(Matrix::from_rows([[4.0, 5.0, 6.0]])));
        assert_eq!(
            m.column(3),
            Err(Error::IndexOutOfRange { axis: Axis::Column, index: 3, bound: 3 }),
        );
        assert_eq!(
            m.row(2),
            Err(Error::IndexOutOfRange { axis: Axis::Row, index: 2, bound: 2 }),
        );
    }

    #[test]
    fn extraction_is_a_copy() {
        let m = Matrix::<2, 2>::filled(1.0);
        let mut column = m.column(0).unwrap();
        column.set(0, 1, 5.0).unwrap();
        assert_eq!(m, Matrix::filled(1.0));
    }

    #[test]
    fn determinants() {
        assert_eq!(Matrix::from_rows([[-3.0]]).det(), -3.0);
        assert_eq!(Matrix::from_rows([[7.0, 2.0], [-11.0, 4.0]]).det(), 50.0);
        assert_eq!(Matrix::from_rows([
            [1.0, 2.0, 4.0],
            [5.0, 2.0, 1.0],
            [3.0, 6.0, 3.0],
        ]).det(), 72.0);
        assert_eq!(Matrix::<4, 4>::IDENTITY.det(), 1.0);

        // swapping two rows negates the determinant
        let m = Matrix::from_rows([
            [2.0, 0.0, 1.0, 3.0],
            [1.0, 1.0, 0.0, 2.0],
            [0.0, 4.0, 1.0, 1.0],
            [3.0, 1.0, 2.0, 0.0],
        ]);
        let [r0, r1, r2, r3] = m.into_rows();
        let swapped = Matrix::from_rows([r1, r0, r2, r3]);
        assert_eq!(m.det(), -swapped.det());
        assert_close!(m.det(), -28.0);
    }

    #[test]
    fn map() {
        let m = Matrix::from_rows([[1.0, -4.0]]);
        assert_eq!(m.map(f64::abs), Matrix::from_rows([[1.0, 4.0]]));
    }
}
