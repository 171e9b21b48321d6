//! Fixed-shape `f64` matrices from 1x1 to 4x4.
//!
//! This crate gathers the workspace into one dependency:
//! the matrix family from `matrices-types` and the tolerance-based
//! assertions from `matrices-assert-close`.

pub use matrices_types::{Matrix, DynMatrix, RowVector, ColumnVector};
pub use matrices_types::{Axis, Error, Result, Shape};
pub use matrices_types::{Det, HasColumn, HasRow};
pub use matrices_types::mat;

pub use matrices_assert_close::{assert_close, debug_assert_close};
pub use matrices_assert_close::{CheckClose, CheckCloseError, Tolerances};

pub mod prelude {
    pub use crate::{Matrix, DynMatrix};
    pub use crate::CheckClose;
}
