/* ************************************************************************ **
** This file is part of matrices, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use crate::error::{self, Error, Result, Shape};

// ---------------------------------------------------------------------------

/// A dense matrix of `f64` with `C` columns and `R` rows.
///
/// Both dimensions must lie in `1..=4`; constructing any other shape is
/// a compile-time error.
///
/// Components are addressed as `(x, y)`, where `x` picks the column and
/// `y` picks the row. The storage is a plain array of rows, so the natural
/// reading order (row 0 left to right, then row 1, ...) is also the memory
/// order.
#[derive(Copy, Clone, PartialEq)]
pub struct Matrix<const C: usize, const R: usize>(pub(crate) [[f64; C]; R]);

impl<const C: usize, const R: usize> Matrix<C, R> {
    /// Number of columns.
    pub const COLUMNS: usize = C;
    /// Number of rows.
    pub const ROWS: usize = R;

    const VALID_SHAPE: () = assert!(
        1 <= C && C <= 4 && 1 <= R && R <= 4,
        "matrix dimensions must lie in 1..=4",
    );

    /// Wrap an array of rows.
    #[inline(always)]
    pub const fn from_rows(rows: [[f64; C]; R]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_SHAPE;
        Matrix(rows)
    }

    /// A matrix with every component equal to `value`.
    #[inline(always)]
    pub const fn filled(value: f64) -> Self
    { Self::from_rows([[value; C]; R]) }

    /// Construct from `C * R` values in row-major reading order.
    pub fn from_row_major(values: &[f64]) -> Result<Self> {
        if values.len() != C * R {
            return Err(Error::ComponentCount { expected: C * R, actual: values.len() });
        }
        Ok(Self::from_fn(|x, y| values[y * C + x]))
    }

    /// Construct from a function of `(x, y)`.
    #[inline]
    pub fn from_fn<F>(mut f: F) -> Self
    where F: FnMut(usize, usize) -> f64,
    {
        let mut rows = [[0.0; C]; R];
        for (y, row) in rows.iter_mut().enumerate() {
            for (x, out) in row.iter_mut().enumerate() {
                *out = f(x, y);
            }
        }
        Self::from_rows(rows)
    }

    #[inline(always)]
    pub fn columns(&self) -> usize { C }
    #[inline(always)]
    pub fn rows(&self) -> usize { R }
    #[inline(always)]
    pub fn shape(&self) -> Shape { Shape::new(C, R) }

    /// Read the component in column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Result<f64> {
        error::check_index(self.shape(), x, y)?;
        Ok(self.0[y][x])
    }

    /// Write the component in column `x`, row `y`.
    ///
    /// On failure the matrix is left untouched.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f64) -> Result<()> {
        *self.get_mut(x, y)? = value;
        Ok(())
    }

    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> Result<&mut f64> {
        error::check_index(self.shape(), x, y)?;
        Ok(&mut self.0[y][x])
    }

    /// Borrow the rows.
    #[inline(always)]
    pub fn as_rows(&self) -> &[[f64; C]; R]
    { &self.0 }

    #[inline(always)]
    pub fn as_rows_mut(&mut self) -> &mut [[f64; C]; R]
    { &mut self.0 }

    #[inline(always)]
    pub fn into_rows(self) -> [[f64; C]; R]
    { self.0 }

    /// Components in row-major reading order.
    pub fn to_row_major(&self) -> Vec<f64>
    { self.iter().collect() }

    /// Iterate over components in row-major reading order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item=f64> + '_
    { self.0.iter().flat_map(|row| row.iter().copied()) }

    /// A hash of the component values.
    ///
    /// Equal matrices always produce equal codes. The value is stable within
    /// a build of this crate but is not meant to be persisted.
    pub fn hash_code(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl<const C: usize, const R: usize> Default for Matrix<C, R> {
    #[inline(always)]
    fn default() -> Self
    { Self::filled(0.0) }
}

// ---------------------------------------------------------------------------

impl<const C: usize, const R: usize> Index<(usize, usize)> for Matrix<C, R> {
    type Output = f64;

    #[inline]
    fn index(&self, (x, y): (usize, usize)) -> &f64 {
        if let Err(e) = error::check_index(self.shape(), x, y) {
            panic!("{}", e);
        }
        &self.0[y][x]
    }
}

impl<const C: usize, const R: usize> IndexMut<(usize, usize)> for Matrix<C, R> {
    #[inline]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut f64 {
        match self.get_mut(x, y) {
            Ok(out) => out,
            Err(e) => panic!("{}", e),
        }
    }
}

// ---------------------------------------------------------------------------

// f64 has no Hash impl; hash the bits, after folding together the values
// that compare equal (0.0 == -0.0). NaN never equals anything, so any
// single representative will do.
#[inline(always)]
fn canonical_bits(x: f64) -> u64 {
    if x == 0.0 {
        0
    } else if x.is_nan() {
        f64::NAN.to_bits()
    } else {
        x.to_bits()
    }
}

impl<const C: usize, const R: usize> Hash for Matrix<C, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for x in self.iter() {
            canonical_bits(x).hash(state);
        }
    }
}

// ---------------------------------------------------------------------------

// forward the debug impl without a surrounding "Matrix(...)", so that the
// output is valid JSON and Python for finite values
impl<const C: usize, const R: usize> fmt::Debug for Matrix<C, R> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.0, f) }
}

// fmt traits apply the format to each element for convenience.
gen_each!{
    [ {Display} {LowerExp} {UpperExp} ]
    impl_fmt!( {$Format:ident} ) => {
        impl<const C: usize, const R: usize> fmt::$Format for Matrix<C, R> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (y, row) in self.0.iter().enumerate() {
                    if y > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "[")?;
                    for (x, value) in row.iter().enumerate() {
                        if x > 0 {
                            write!(f, ", ")?;
                        }
                        fmt::$Format::fmt(value, f)?;
                    }
                    write!(f, "]")?;
                }
                write!(f, "]")
            }
        }
    }
}

// ---------------------------------------------------------------------------
