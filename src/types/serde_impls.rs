/* ************************************************************************ **
** This file is part of matrices, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// serde only implements its traits for arrays up to a fixed length with no
// const generics, so the nested-row format is written out by hand.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::Matrix;

/// Serialized as a list of rows, e.g. `[[1.0, 2.0], [3.0, 4.0]]`.
impl<const C: usize, const R: usize> Serialize for Matrix<C, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>
    { serializer.collect_seq(self.as_rows().iter().map(|row| &row[..])) }
}

impl<'de, const C: usize, const R: usize> Deserialize<'de> for Matrix<C, R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<f64>>::deserialize(deserializer)?;
        if rows.len() != R {
            return Err(de::Error::invalid_length(rows.len(), &&*format!("{} rows", R)));
        }
        let mut out = Matrix::default();
        for (y, row) in rows.iter().enumerate() {
            if row.len() != C {
                return Err(de::Error::invalid_length(row.len(), &&*format!("{} columns", C)));
            }
            out.as_rows_mut()[y].copy_from_slice(row);
        }
        Ok(out)
    }
}
