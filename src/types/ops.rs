/* ************************************************************************ **
** This file is part of matrices, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Add, Sub, AddAssign, SubAssign, Neg};
use std::ops::{Mul, Div, MulAssign, DivAssign};
use num_traits::{Zero, One};

use crate::Matrix;

// ---------------------------------------------------------------------------
// matrix-matrix ops between identical shapes

// NOTE: There are deliberately no impls between differently-shaped matrices
//       (other than multiplication), so that a shape mistake is a type error.
gen_each!{
    @{by_ref}
    [ [(   ) (   )] [('s,) (&'s)] ]
    impl_m_add_sub!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // matrix + matrix
        impl<$($lt_a)* $($lt_b)* const C: usize, const R: usize> Add<$($ref_b)* Matrix<C, R>> for $($ref_a)* Matrix<C, R> {
            type Output = Matrix<C, R>;

            #[inline]
            fn add(self, other: $($ref_b)* Matrix<C, R>) -> Self::Output
            { Matrix::from_fn(|x, y| self.0[y][x] + other.0[y][x]) }
        }

        // matrix - matrix
        impl<$($lt_a)* $($lt_b)* const C: usize, const R: usize> Sub<$($ref_b)* Matrix<C, R>> for $($ref_a)* Matrix<C, R> {
            type Output = Matrix<C, R>;

            #[inline]
            fn sub(self, other: $($ref_b)* Matrix<C, R>) -> Self::Output
            { Matrix::from_fn(|x, y| self.0[y][x] - other.0[y][x]) }
        }
    }
}

// ---------------------------------------------------------------------------
// unary ops

gen_each!{
    @{by_ref}
    impl_m_unops!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // -matrix
        impl<$($lt_a)* const C: usize, const R: usize> Neg for $($ref_a)* Matrix<C, R> {
            type Output = Matrix<C, R>;

            #[inline]
            fn neg(self) -> Self::Output
            { Matrix::from_fn(|x, y| -self.0[y][x]) }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix-scalar ops

gen_each!{
    @{by_ref}
    impl_m_scalar_ops!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // matrix * scalar
        impl<$($lt_a)* const C: usize, const R: usize> Mul<f64> for $($ref_a)* Matrix<C, R> {
            type Output = Matrix<C, R>;

            #[inline]
            fn mul(self, scalar: f64) -> Self::Output
            { Matrix::from_fn(|x, y| self.0[y][x] * scalar) }
        }

        // scalar * matrix
        impl<$($lt_a)* const C: usize, const R: usize> Mul<$($ref_a)* Matrix<C, R>> for f64 {
            type Output = Matrix<C, R>;

            #[inline(always)]
            fn mul(self, matrix: $($ref_a)* Matrix<C, R>) -> Self::Output
            { matrix * self }
        }

        // matrix / scalar
        impl<$($lt_a)* const C: usize, const R: usize> Div<f64> for $($ref_a)* Matrix<C, R> {
            type Output = Matrix<C, R>;

            #[inline]
            fn div(self, scalar: f64) -> Self::Output
            { Matrix::from_fn(|x, y| self.0[y][x] / scalar) }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix * matrix

/// The shared multiplication routine behind every `Matrix * Matrix` impl.
///
/// `a` has `K` columns and `b` has `K` rows; the output takes its rows from
/// `a` and its columns from `b`.
#[inline]
pub(crate) fn mul_impl<const K: usize, const R: usize, const C: usize>(
    a: &Matrix<K, R>,
    b: &Matrix<C, K>,
) -> Matrix<C, R> {
    Matrix::from_fn(|x, y| {
        // explicit loop to keep the summation order fixed at k = 0, 1, ...
        let mut acc = 0.0;
        for k in 0..K {
            acc += a.0[y][k] * b.0[k][x];
        }
        acc
    })
}

gen_each!{
    @{by_ref}
    [ [(   ) (   )] [('s,) (&'s)] ]
    impl_m_m_mul!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        impl<$($lt_a)* $($lt_b)* const K: usize, const R: usize, const C: usize> Mul<$($ref_b)* Matrix<C, K>> for $($ref_a)* Matrix<K, R> {
            type Output = Matrix<C, R>;

            #[inline(always)]
            fn mul(self, other: $($ref_b)* Matrix<C, K>) -> Self::Output
            { mul_impl::<K, R, C>(&self, &other) }
        }
    }
}

// ---------------------------------------------------------------------------
// assign ops (general)

// matrix += matrix;
impl<B, const C: usize, const R: usize> AddAssign<B> for Matrix<C, R>
where for<'a> &'a Self: Add<B, Output=Self>,
{
    #[inline(always)]
    fn add_assign(&mut self, rhs: B)
    { *self = &*self + rhs; }
}

// matrix -= matrix;
impl<B, const C: usize, const R: usize> SubAssign<B> for Matrix<C, R>
where for<'a> &'a Self: Sub<B, Output=Self>,
{
    #[inline(always)]
    fn sub_assign(&mut self, rhs: B)
    { *self = &*self - rhs; }
}

// matrix *= scalar;
// matrix *= square matrix;
impl<B, const C: usize, const R: usize> MulAssign<B> for Matrix<C, R>
where for<'a> &'a Self: Mul<B, Output=Self>,
{
    #[inline(always)]
    fn mul_assign(&mut self, rhs: B)
    { *self = &*self * rhs; }
}

// matrix /= scalar;
impl<B, const C: usize, const R: usize> DivAssign<B> for Matrix<C, R>
where for<'a> &'a Self: Div<B, Output=Self>,
{
    #[inline(always)]
    fn div_assign(&mut self, rhs: B)
    { *self = &*self / rhs; }
}

// ---------------------------------------------------------------------------

impl<const C: usize, const R: usize> Zero for Matrix<C, R> {
    #[inline(always)]
    fn zero() -> Self
    { Matrix::filled(0.0) }

    #[inline]
    fn is_zero(&self) -> bool
    { self.iter().all(|x| x == 0.0) }
}

impl<const N: usize> One for Matrix<N, N> {
    #[inline(always)]
    fn one() -> Self
    { Self::IDENTITY }
}

// ---------------------------------------------------------------------------
