/* ************************************************************************ **
** This file is part of matrices, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small fixed-size `f64` matrices, from `Matrix<1, 1>` to `Matrix<4, 4>`.
//!
//! `Matrix<C, R>` has `C` columns and `R` rows, and components are addressed
//! as `(x, y)` = (column, row). Shapes are part of the type, so adding a
//! `Matrix<2, 3>` to a `Matrix<3, 2>` or multiplying two matrices whose inner
//! dimensions disagree is a compile error:
//!
//! ```
//! use matrices_types::Matrix;
//!
//! let a = Matrix::<2, 2>::filled(3.0);
//! let b = Matrix::<1, 2>::filled(2.0);   // a column vector
//! let c: Matrix<1, 2> = a * b;
//! assert_eq!(c, Matrix::filled(12.0));
//! assert_eq!(c.m12(), 12.0);
//! ```
//!
//! `DynMatrix` covers the same shapes when they are only known at runtime,
//! and reports shape problems as an `Error` instead.

#[cfg(test)]
#[macro_use]
extern crate matrices_assert_close;
#[cfg(test)]
#[macro_use]
extern crate itertools;

#[macro_use] mod macros;
mod error;
mod types;
mod ops;
mod methods;
mod components;
mod dynamic;
mod close;
#[cfg(feature = "serde")]
mod serde_impls;

pub mod mat;

pub use crate::error::{Axis, Error, Result, Shape};
pub use crate::types::Matrix;
pub use crate::methods::Det;
pub use crate::components::{HasColumn, HasRow};
pub use crate::dynamic::DynMatrix;

/// Row vector with `N` components.
pub type RowVector<const N: usize> = Matrix<N, 1>;
/// Column vector with `N` components.
pub type ColumnVector<const N: usize> = Matrix<1, N>;
