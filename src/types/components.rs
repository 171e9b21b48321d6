/* ************************************************************************ **
** This file is part of matrices, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Named accessors (`m21`, `column1`, `row3`, ...).
//!
//! These only exist on shapes that actually have the position in question,
//! so `Matrix::<2, 2>::default().m31()` is a compile error rather than a
//! runtime one.
//!
//! The digits are 1-based, column first: `m21` is column 2, row 1, which is
//! the same as `get(1, 0)`.

use crate::Matrix;

/// Marker for matrices that have a column at 0-based index `X`.
///
/// This trait is sealed.
pub trait HasColumn<const X: usize>: private::Sealed { }

/// Marker for matrices that have a row at 0-based index `Y`.
///
/// This trait is sealed.
pub trait HasRow<const Y: usize>: private::Sealed { }

mod private {
    pub trait Sealed { }
}

impl<const C: usize, const R: usize> private::Sealed for Matrix<C, R> { }

gen_each!{
    @{dim_index}
    @{dim}
    impl_has_column!(
        {$c:tt $x:tt}
        {$r:tt}
    ) => {
        impl HasColumn<$x> for Matrix<$c, $r> { }
        impl HasRow<$x> for Matrix<$r, $c> { }
    }
}

// ---------------------------------------------------------------------------

macro_rules! named_components {
    ($( [$get:ident $set:ident] => ($x:tt, $y:tt); )+) => {
        impl<const C: usize, const R: usize> Matrix<C, R> {
            $(
                #[inline(always)]
                pub fn $get(&self) -> f64
                where Self: HasColumn<$x> + HasRow<$y>,
                { self.0[$y][$x] }

                #[inline(always)]
                pub fn $set(&mut self, value: f64)
                where Self: HasColumn<$x> + HasRow<$y>,
                { self.0[$y][$x] = value; }
            )+
        }
    };
}

named_components!{
    [m11 set_m11] => (0, 0);
    [m21 set_m21] => (1, 0);
    [m31 set_m31] => (2, 0);
    [m41 set_m41] => (3, 0);
    [m12 set_m12] => (0, 1);
    [m22 set_m22] => (1, 1);
    [m32 set_m32] => (2, 1);
    [m42 set_m42] => (3, 1);
    [m13 set_m13] => (0, 2);
    [m23 set_m23] => (1, 2);
    [m33 set_m33] => (2, 2);
    [m43 set_m43] => (3, 2);
    [m14 set_m14] => (0, 3);
    [m24 set_m24] => (1, 3);
    [m34 set_m34] => (2, 3);
    [m44 set_m44] => (3, 3);
}

macro_rules! named_vectors {
    ($( [$column:ident $row:ident] => $i:tt; )+) => {
        impl<const C: usize, const R: usize> Matrix<C, R> {
            $(
                #[inline(always)]
                pub fn $column(&self) -> Matrix<1, R>
                where Self: HasColumn<$i>,
                { self.column_unchecked($i) }

                #[inline(always)]
                pub fn $row(&self) -> Matrix<C, 1>
                where Self: HasRow<$i>,
                { self.row_unchecked($i) }
            )+
        }
    };
}

named_vectors!{
    [column1 row1] => 0;
    [column2 row2] => 1;
    [column3 row3] => 2;
    [column4 row4] => 3;
}

// ---------------------------------------------------------------------------
