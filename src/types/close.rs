/* ************************************************************************ **
** This file is part of matrices, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use matrices_assert_close::{CheckClose, CheckCloseError, Tolerances};

use crate::{DynMatrix, Matrix};

impl<const C: usize, const R: usize> CheckClose for Matrix<C, R> {
    type Scalar = f64;

    #[inline]
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<f64>>
    { self.as_rows().check_close(other.as_rows(), tol) }
}

// Shapes must agree; a mismatch is a bug in the test, not a tolerance failure.
impl CheckClose for DynMatrix {
    type Scalar = f64;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<f64>> {
        assert_eq!(self.shape(), other.shape(), "shape mismatch in check_close");
        self.row_major_data().check_close(other.row_major_data(), tol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_back_is_close() {
        let m = Matrix::from_rows([[0.1, 0.2, 0.3], [1e3, -7.0, 1.0 / 3.0]]);
        let round_trip = m * 3.0 / 3.0;
        assert_close!(m, round_trip);
        assert_close!(DynMatrix::from(m), DynMatrix::from(round_trip));
    }

    #[test]
    fn detects_difference() {
        let a = Matrix::<2, 2>::filled(1.0);
        let mut b = a;
        b.set_m22(1.001);
        let err = a.check_close(&b, Tolerances::default()).unwrap_err();
        assert_eq!((err.left, err.right), (1.0, 1.001));
        assert!(a.check_close(&b, Tolerances { abs: 1e-2, rel: 0.0 }).is_ok());
    }
}
