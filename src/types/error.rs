/* ************************************************************************ **
** This file is part of matrices, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;

/// Which index of a `(x, y)` pair was rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The `x` index, selecting a column.
    Column,
    /// The `y` index, selecting a row.
    Row,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Column => write!(f, "column"),
            Axis::Row => write!(f, "row"),
        }
    }
}

/// A `(columns, rows)` pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    pub columns: usize,
    pub rows: usize,
}

impl Shape {
    #[inline(always)]
    pub const fn new(columns: usize, rows: usize) -> Self
    { Shape { columns, rows } }

    /// Number of components in a matrix of this shape.
    #[inline(always)]
    pub const fn len(&self) -> usize
    { self.columns * self.rows }

    /// Whether a matrix of this shape exists in the family.
    #[inline]
    pub fn is_supported(&self) -> bool
    { (1..=4).contains(&self.columns) && (1..=4).contains(&self.rows) }
}

// Printed as "CxR", column count first.
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { write!(f, "{}x{}", self.columns, self.rows) }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("{axis} index {index} is out of range (matrix has {bound} {axis}s)")]
    IndexOutOfRange {
        axis: Axis,
        index: usize,
        bound: usize,
    },

    #[error("incompatible matrix shapes: {left} and {right}")]
    ShapeMismatch {
        left: Shape,
        right: Shape,
    },

    #[error("no matrix has shape {columns}x{rows}; both dimensions must lie in 1..=4")]
    InvalidShape {
        columns: usize,
        rows: usize,
    },

    #[error("expected {expected} components, got {actual}")]
    ComponentCount {
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Checks an `(x, y)` pair against a shape, `x` first.
#[inline]
pub(crate) fn check_index(shape: Shape, x: usize, y: usize) -> Result<()> {
    if x >= shape.columns {
        return Err(Error::IndexOutOfRange { axis: Axis::Column, index: x, bound: shape.columns });
    }
    if y >= shape.rows {
        return Err(Error::IndexOutOfRange { axis: Axis::Row, index: y, bound: shape.rows });
    }
    Ok(())
}
