// Copyright 2026 cowarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use core::fmt;

use crate::{Array, Dimension, IntoDimension};

/// Write the elements with one pair of brackets per axis, in row-major
/// order. A new row starts whenever one of the leading axes advances.
fn format_array<A, D, F>(array: &Array<A, D>, f: &mut fmt::Formatter<'_>, mut format: F) -> fmt::Result
where
    F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result,
    D: Dimension,
{
    let ndim = D::NDIM;
    let elements = match array.indexed_iter() {
        Ok(iter) => iter,
        Err(_) => return write!(f, "[]"),
    };
    for _ in 0..ndim {
        write!(f, "[")?;
    }
    let mut last_index = D::zeros();
    let mut first = true;
    for (index, elt) in elements {
        let index = index.into_dimension();
        // first leading axis whose index changed starts a new row
        let changed = index
            .slice()
            .iter()
            .take(ndim - 1)
            .zip(last_index.slice())
            .position(|(a, b)| a != b);
        if let Some(i) = changed {
            let n = ndim - i - 1;
            for _ in 0..n {
                write!(f, "]")?;
            }
            writeln!(f, ",")?;
            for _ in 0..ndim - n {
                write!(f, " ")?;
            }
            for _ in 0..n {
                write!(f, "[")?;
            }
            first = true;
            last_index = index;
        }
        if !first {
            write!(f, ", ")?;
        }
        first = false;
        format(elt, f)?;
    }
    for _ in 0..ndim {
        write!(f, "]")?;
    }
    Ok(())
}

/// Format the array using `Display` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style. An empty array is shown as `[]`.
impl<A: fmt::Display, D: Dimension> fmt::Display for Array<A, D>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_array(self, f, <_>::fmt)
    }
}

/// Format the array using `Debug` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style, followed by its shape and strides.
impl<A: fmt::Debug, D: Dimension> fmt::Debug for Array<A, D>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        // Add extra information for Debug
        format_array(self, f, <_>::fmt)?;
        write!(f, " shape={:?}, strides={:?}, const ndim={}", self.shape(), self.strides(), D::NDIM)?;
        if !self.is_valid() {
            write!(f, ", invalid")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests
{
    use crate::{Array1, Array2, Array3};
    use alloc::format;
    use alloc::vec;

    #[test]
    fn display_nested_rows()
    {
        let a = Array2::from_shape_vec((2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(format!("{}", a), "[[1, 2, 3],\n [4, 5, 6]]");

        let b = Array3::from_shape_fn((2, 2, 1), |(i, j, _)| 2 * i + j);
        assert_eq!(format!("{}", b), "[[[0],\n  [1]],\n [[2],\n  [3]]]");
    }

    #[test]
    fn display_applies_element_format()
    {
        let a = Array1::from_vec(vec![1.54, 2.26]);
        assert_eq!(format!("{:.1}", a), "[1.5, 2.3]");
    }

    #[test]
    fn debug_shows_shape()
    {
        let a = Array2::from_elem((1, 2), 0u8);
        assert_eq!(format!("{:?}", a), "[[0, 0]] shape=[1, 2], strides=[2, 1], const ndim=2");
        let e = Array2::<u8>::empty();
        assert_eq!(format!("{:?}", e), "[] shape=[0, 0], strides=[0, 0], const ndim=2, invalid");
    }
}
