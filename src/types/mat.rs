/* ************************************************************************ **
** This file is part of matrices, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Free-function forms of the matrix operations.
//!
//! Every operator on `Matrix` has a named counterpart here. The shapes
//! are inferred from the arguments (or from how the result is used, for
//! the constructors).

use crate::methods::Det;
use crate::Matrix;

/// Construct a matrix from a function of `(x, y)` (column, row).
#[inline(always)]
pub fn from_fn<F, const C: usize, const R: usize>(f: F) -> Matrix<C, R>
where F: FnMut(usize, usize) -> f64,
{ Matrix::from_fn(f) }

/// Construct a matrix from a 2D array of rows.
///
/// Type inference works in the forward direction, deciding the shape
/// from the array.
#[inline(always)]
pub fn from_array<const C: usize, const R: usize>(rows: [[f64; C]; R]) -> Matrix<C, R>
{ Matrix::from_rows(rows) }

/// Construct an identity matrix (using type inference).
#[inline(always)]
pub fn eye<const N: usize>() -> Matrix<N, N>
{ Matrix::IDENTITY }

/// Construct a zero matrix (using type inference).
#[inline(always)]
pub fn zero<const C: usize, const R: usize>() -> Matrix<C, R>
{ Matrix::default() }

/// Component-wise sum.
#[inline(always)]
pub fn add<const C: usize, const R: usize>(a: &Matrix<C, R>, b: &Matrix<C, R>) -> Matrix<C, R>
{ a + b }

/// Component-wise difference.
#[inline(always)]
pub fn subtract<const C: usize, const R: usize>(a: &Matrix<C, R>, b: &Matrix<C, R>) -> Matrix<C, R>
{ a - b }

/// Multiply every component by a scalar.
#[inline(always)]
pub fn scale<const C: usize, const R: usize>(a: &Matrix<C, R>, scalar: f64) -> Matrix<C, R>
{ a * scalar }

/// Matrix product.
///
/// The column count of `a` must equal the row count of `b`.
#[inline(always)]
pub fn multiply<const K: usize, const R: usize, const C: usize>(a: &Matrix<K, R>, b: &Matrix<C, K>) -> Matrix<C, R>
{ crate::ops::mul_impl(a, b) }

/// Exact component-wise equality.
#[inline(always)]
pub fn equals<const C: usize, const R: usize>(a: &Matrix<C, R>, b: &Matrix<C, R>) -> bool
{ a == b }

/// Matrix transpose.
#[inline(always)]
pub fn transpose<const C: usize, const R: usize>(a: &Matrix<C, R>) -> Matrix<R, C>
{ a.t() }

/// Matrix determinant.
#[inline(always)]
pub fn det<const N: usize>(a: &Matrix<N, N>) -> f64
where Matrix<N, N>: Det,
{ a.det() }
