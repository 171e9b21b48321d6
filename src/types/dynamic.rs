/* ************************************************************************ **
** This file is part of matrices, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::convert::TryFrom;

use log::trace;

use crate::error::{self, Error, Result, Shape};
use crate::Matrix;

/// A matrix from the same family as `Matrix<C, R>`, with the shape chosen at runtime.
///
/// This is for code that only learns the shape late (e.g. from a file).
/// Every operation that a `Matrix` checks at compile time is checked here
/// up front, before any arithmetic, and reported as an `Error`.
#[derive(Debug, Clone, PartialEq)]
pub struct DynMatrix {
    // row-major; invariant: shape.len() == data.len()
    data: Vec<f64>,
    shape: Shape,
}

impl DynMatrix {
    /// A zero matrix of the given shape.
    pub fn new(columns: usize, rows: usize) -> Result<Self>
    { DynMatrix::filled(columns, rows, 0.0) }

    pub fn filled(columns: usize, rows: usize, value: f64) -> Result<Self> {
        let shape = checked_shape(columns, rows)?;
        Ok(DynMatrix { data: vec![value; shape.len()], shape })
    }

    /// Construct from values in row-major reading order.
    pub fn from_row_major(columns: usize, rows: usize, data: Vec<f64>) -> Result<Self> {
        let shape = checked_shape(columns, rows)?;
        if data.len() != shape.len() {
            return Err(Error::ComponentCount { expected: shape.len(), actual: data.len() });
        }
        Ok(DynMatrix { data, shape })
    }

    #[inline(always)]
    pub fn columns(&self) -> usize { self.shape.columns }
    #[inline(always)]
    pub fn rows(&self) -> usize { self.shape.rows }
    #[inline(always)]
    pub fn shape(&self) -> Shape { self.shape }

    /// Components in row-major reading order.
    #[inline(always)]
    pub fn row_major_data(&self) -> &[f64] { &self.data }

    pub fn get(&self, x: usize, y: usize) -> Result<f64> {
        error::check_index(self.shape, x, y)?;
        Ok(self.data[self.offset(x, y)])
    }

    pub fn set(&mut self, x: usize, y: usize, value: f64) -> Result<()> {
        error::check_index(self.shape, x, y)?;
        let offset = self.offset(x, y);
        self.data[offset] = value;
        Ok(())
    }

    pub fn try_add(&self, other: &DynMatrix) -> Result<DynMatrix> {
        self.expect_same_shape(other)?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    pub fn try_sub(&self, other: &DynMatrix) -> Result<DynMatrix> {
        self.expect_same_shape(other)?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// Matrix product; the column count of `self` must equal the row count of `other`.
    pub fn try_mul(&self, other: &DynMatrix) -> Result<DynMatrix> {
        if self.columns() != other.rows() {
            trace!("refusing to multiply {} by {}", self.shape, other.shape);
            return Err(Error::ShapeMismatch { left: self.shape, right: other.shape });
        }
        let shape = Shape::new(other.columns(), self.rows());
        let mut data = Vec::with_capacity(shape.len());
        for y in 0..shape.rows {
            for x in 0..shape.columns {
                let mut acc = 0.0;
                for k in 0..self.columns() {
                    acc += self.data[self.offset(k, y)] * other.data[other.offset(x, k)];
                }
                data.push(acc);
            }
        }
        Ok(DynMatrix { data, shape })
    }

    pub fn scale(&self, scalar: f64) -> DynMatrix {
        let data = self.data.iter().map(|&a| a * scalar).collect();
        DynMatrix { data, shape: self.shape }
    }

    pub fn transpose(&self) -> DynMatrix {
        let shape = Shape::new(self.rows(), self.columns());
        let mut data = Vec::with_capacity(shape.len());
        for y in 0..shape.rows {
            for x in 0..shape.columns {
                data.push(self.data[self.offset(y, x)]);
            }
        }
        DynMatrix { data, shape }
    }

    #[inline(always)]
    fn offset(&self, x: usize, y: usize) -> usize
    { y * self.shape.columns + x }

    fn expect_same_shape(&self, other: &DynMatrix) -> Result<()> {
        if self.shape != other.shape {
            trace!("shape mismatch between {} and {}", self.shape, other.shape);
            return Err(Error::ShapeMismatch { left: self.shape, right: other.shape });
        }
        Ok(())
    }

    fn zip_with(&self, other: &DynMatrix, mut f: impl FnMut(f64, f64) -> f64) -> DynMatrix {
        let data = self.data.iter().zip(&other.data).map(|(&a, &b)| f(a, b)).collect();
        DynMatrix { data, shape: self.shape }
    }
}

fn checked_shape(columns: usize, rows: usize) -> Result<Shape> {
    let shape = Shape::new(columns, rows);
    if !shape.is_supported() {
        return Err(Error::InvalidShape { columns, rows });
    }
    Ok(shape)
}

// ---------------------------------------------------------------------------

impl<const C: usize, const R: usize> From<Matrix<C, R>> for DynMatrix {
    fn from(m: Matrix<C, R>) -> Self
    { DynMatrix { data: m.to_row_major(), shape: m.shape() } }
}

impl<const C: usize, const R: usize> TryFrom<DynMatrix> for Matrix<C, R> {
    type Error = Error;

    fn try_from(m: DynMatrix) -> Result<Self> {
        Matrix::<C, R>::try_from(&m)
    }
}

impl<'a, const C: usize, const R: usize> TryFrom<&'a DynMatrix> for Matrix<C, R> {
    type Error = Error;

    fn try_from(m: &'a DynMatrix) -> Result<Self> {
        let expected = Shape::new(C, R);
        if m.shape != expected {
            trace!("cannot convert a {} DynMatrix into Matrix<{}, {}>", m.shape, C, R);
            return Err(Error::ShapeMismatch { left: m.shape, right: expected });
        }
        Matrix::from_row_major(&m.data)
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Axis;

    #[test]
    fn construction() {
        let m = DynMatrix::new(3, 2).unwrap();
        assert_eq!(m.shape(), Shape::new(3, 2));
        assert_eq!(m.row_major_data(), &[0.0; 6][..]);

        assert_eq!(DynMatrix::new(0, 2), Err(Error::InvalidShape { columns: 0, rows: 2 }));
        assert_eq!(DynMatrix::filled(2, 5, 1.0), Err(Error::InvalidShape { columns: 2, rows: 5 }));
        assert_eq!(
            DynMatrix::from_row_major(2, 2, vec![1.0; 5]),
            Err(Error::ComponentCount { expected: 4, actual: 5 }),
        );
    }

    #[test]
    fn indexing() {
        let mut m = DynMatrix::from_row_major(2, 3, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(m.get(1, 2), Ok(5.0));
        m.set(0, 1, -1.0).unwrap();
        assert_eq!(m.get(0, 1), Ok(-1.0));
        assert_eq!(
            m.set(2, 0, 9.0),
            Err(Error::IndexOutOfRange { axis: Axis::Column, index: 2, bound: 2 }),
        );
        assert_eq!(
            m.get(0, 3),
            Err(Error::IndexOutOfRange { axis: Axis::Row, index: 3, bound: 3 }),
        );
    }

    #[test]
    fn multiply_checks_inner_dimension() {
        let a = DynMatrix::filled(2, 2, 3.0).unwrap();
        let b = DynMatrix::filled(1, 2, 2.0).unwrap();
        assert_eq!(a.try_mul(&b), Ok(DynMatrix::filled(1, 2, 12.0).unwrap()));
        assert_eq!(
            b.try_mul(&b),
            Err(Error::ShapeMismatch { left: Shape::new(1, 2), right: Shape::new(1, 2) }),
        );
    }

    #[test]
    fn agrees_with_static_matrices() {
        let a = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = Matrix::from_rows([[1.0, 1.0], [1.0, -1.0], [0.0, 1.0]]);

        let product = DynMatrix::from(a).try_mul(&DynMatrix::from(b)).unwrap();
        assert_eq!(Matrix::<2, 2>::try_from(product), Ok(a * b));

        let sum = DynMatrix::from(a).try_add(&DynMatrix::from(a)).unwrap();
        assert_eq!(Matrix::try_from(&sum), Ok(a * 2.0));

        let diff = DynMatrix::from(a).try_sub(&DynMatrix::from(a.map(|x| x + 1.0))).unwrap();
        assert_eq!(diff, DynMatrix::filled(3, 2, -1.0).unwrap());

        assert_eq!(DynMatrix::from(a).transpose(), DynMatrix::from(a.t()));
        assert_eq!(DynMatrix::from(a).scale(0.5), DynMatrix::from(a * 0.5));
    }

    #[test]
    fn add_checks_shape() {
        let a = DynMatrix::new(2, 3).unwrap();
        let b = DynMatrix::new(3, 2).unwrap();
        assert_eq!(
            a.try_add(&b),
            Err(Error::ShapeMismatch { left: Shape::new(2, 3), right: Shape::new(3, 2) }),
        );
        assert!(a.try_sub(&b).is_err());
    }

    #[test]
    fn conversion_checks_shape() {
        let m = DynMatrix::new(3, 2).unwrap();
        assert_eq!(
            Matrix::<2, 3>::try_from(m),
            Err(Error::ShapeMismatch { left: Shape::new(3, 2), right: Shape::new(2, 3) }),
        );
    }
}
