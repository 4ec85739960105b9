// Copyright 2026 cowarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for cowarray
//!

use alloc::vec;
use alloc::vec::Vec;
use num_traits::Zero;

use crate::dimension;
use crate::error::{from_kind, ArrayError, ErrorKind};
use crate::{Array, Dimension, IntoDimension, OwnedRcRepr};

macro_rules! size_of_shape_checked_unwrap {
    ($dim:expr) => {
        match dimension::size_of_shape_checked($dim) {
            Ok(sz) => sz,
            Err(_) => panic!(
                "cowarray: Shape {:?} has a zero length axis or its number of elements overflows isize",
                $dim
            ),
        }
    };
}

/// # Constructor Methods for Arrays
///
/// Note that the constructor methods apply to every rank; the shape
/// argument decides it (`usize` for one axis, a tuple or `[usize; N]`
/// otherwise). Every axis length must be positive.
impl<A, D> Array<A, D>
where D: Dimension
{
    /// Create an array with copies of `elem`, shape `shape`.
    ///
    /// **Panics** if an axis length is zero or if the number of elements
    /// overflows `isize`.
    ///
    /// ```
    /// use cowarray::Array;
    ///
    /// let a = Array::from_elem((2, 2, 2), 1.);
    ///
    /// assert_eq!(a.to_vec(), vec![1.; 8]);
    /// assert_eq!(a.strides(), &[4, 2, 1]);
    /// ```
    pub fn from_elem<Sh>(shape: Sh, elem: A) -> Self
    where
        Sh: IntoDimension<Dim = D>,
        A: Clone,
    {
        let dim = shape.into_dimension();
        let size = size_of_shape_checked_unwrap!(&dim);
        let v = vec![elem; size];
        Self::from_shape_vec_unchecked(dim, v)
    }

    /// Create an array with zeros, shape `shape`.
    ///
    /// **Panics** if an axis length is zero or if the number of elements
    /// overflows `isize`.
    pub fn zeros<Sh>(shape: Sh) -> Self
    where
        Sh: IntoDimension<Dim = D>,
        A: Clone + Zero,
    {
        Self::from_elem(shape, A::zero())
    }

    /// Create an array with default values, shape `shape`.
    ///
    /// **Panics** if an axis length is zero or if the number of elements
    /// overflows `isize`.
    ///
    /// ```
    /// use cowarray::Array2;
    ///
    /// let a = Array2::<String>::default((2, 3));
    /// assert!(a.iter().unwrap().all(String::is_empty));
    /// ```
    pub fn default<Sh>(shape: Sh) -> Self
    where
        Sh: IntoDimension<Dim = D>,
        A: Default,
    {
        Self::from_shape_simple_fn(shape, A::default)
    }

    /// Create an array with values created by the function `f`.
    ///
    /// `f` is called with no argument, and it should return the element to
    /// create. The elements are created in row-major order.
    ///
    /// **Panics** if an axis length is zero or if the number of elements
    /// overflows `isize`.
    pub fn from_shape_simple_fn<Sh, F>(shape: Sh, mut f: F) -> Self
    where
        Sh: IntoDimension<Dim = D>,
        F: FnMut() -> A,
    {
        let dim = shape.into_dimension();
        let size = size_of_shape_checked_unwrap!(&dim);
        let v = (0..size).map(|_| f()).collect();
        Self::from_shape_vec_unchecked(dim, v)
    }

    /// Create an array with values created by the function `f`.
    ///
    /// `f` is called with the index of the element to create; the elements
    /// are visited in row-major order. For one-dimensional arrays the index
    /// is a `usize`, otherwise it is a tuple.
    ///
    /// **Panics** if an axis length is zero or if the number of elements
    /// overflows `isize`.
    ///
    /// ```
    /// use cowarray::Array;
    ///
    /// let a = Array::from_shape_fn((2, 3), |(i, j)| 10 * i + j);
    /// assert_eq!(a.to_vec(), vec![0, 1, 2, 10, 11, 12]);
    /// ```
    pub fn from_shape_fn<Sh, F>(shape: Sh, mut f: F) -> Self
    where
        Sh: IntoDimension<Dim = D>,
        F: FnMut(D::Pattern) -> A,
    {
        let dim = shape.into_dimension();
        let size = size_of_shape_checked_unwrap!(&dim);
        let strides = dim.default_strides();
        let v = (0..size)
            .map(|offset| f(D::offset_to_index(offset, &strides).into_pattern()))
            .collect();
        Self::from_shape_vec_unchecked(dim, v)
    }

    /// Create an array with the given shape from a vector, whose elements
    /// are interpreted in row-major order. No copying needed.
    ///
    /// **Errors** with `InvalidShape` if an axis length is zero or the
    /// number of elements overflows `isize`, and with `IncompatibleShapes`
    /// if the vector's length does not match the shape.
    ///
    /// ```
    /// use cowarray::{Array, ErrorKind};
    ///
    /// let a = Array::from_shape_vec((2, 2), vec![1., 2., 3., 4.]).unwrap();
    /// assert_eq!(a[(1, 0)], 3.);
    ///
    /// let e = Array::from_shape_vec((2, 2), vec![1., 2., 3.]).unwrap_err();
    /// assert_eq!(e.kind(), ErrorKind::IncompatibleShapes);
    /// ```
    pub fn from_shape_vec<Sh>(shape: Sh, v: Vec<A>) -> Result<Self, ArrayError>
    where Sh: IntoDimension<Dim = D>
    {
        let dim = shape.into_dimension();
        let size = dimension::size_of_shape_checked(&dim)?;
        if size != v.len() {
            return Err(from_kind(ErrorKind::IncompatibleShapes));
        }
        Ok(Self::from_shape_vec_unchecked(dim, v))
    }

    /// Create an empty array: it has no storage and every element access
    /// fails with `InvalidArray`. The same value is produced by `Default`.
    ///
    /// ```
    /// use cowarray::{Array2, ErrorKind};
    ///
    /// let a = Array2::<f32>::empty();
    /// assert!(!a.is_valid());
    /// assert_eq!(a.get((0, 0)).unwrap_err().kind(), ErrorKind::InvalidArray);
    /// ```
    pub fn empty() -> Self
    {
        Array {
            data: None,
            dim: D::zeros(),
            strides: D::zeros(),
        }
    }

    /// Create an array from a vector whose length is already known to be
    /// the size of the (valid) shape `dim`.
    pub(crate) fn from_shape_vec_unchecked(dim: D, v: Vec<A>) -> Self
    {
        debug_assert_eq!(dim.size_checked(), Some(v.len()));
        debug_assert!(!v.is_empty());
        Array {
            data: Some(OwnedRcRepr::from(v)),
            strides: dim.default_strides(),
            dim,
        }
    }
}

#[cfg(test)]
mod tests
{
    use crate::error::ErrorKind;
    use crate::{Array, Array1, Array2, Array3};
    use alloc::vec;

    #[test]
    fn from_shape_vec_shape_errors()
    {
        let e = Array2::from_shape_vec((0, 3), vec![1; 0]).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::InvalidShape);
        let e = Array2::from_shape_vec((2, 3), vec![1; 5]).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::IncompatibleShapes);
        let a = Array2::from_shape_vec((2, 3), vec![1; 6]).unwrap();
        assert_eq!(a.len(), 6);
    }

    #[test]
    #[should_panic]
    fn zero_axis_panics()
    {
        let _ = Array3::<f64>::zeros((2, 0, 3));
    }

    #[test]
    #[should_panic]
    fn overflowing_shape_panics()
    {
        let _ = Array::<u8, _>::default((usize::MAX, 2));
    }

    #[test]
    fn from_shape_fn_row_major()
    {
        let a = Array1::from_shape_fn(4, |i| i * i);
        assert_eq!(a.to_vec(), vec![0, 1, 4, 9]);
        let b = Array3::from_shape_fn((2, 2, 2), |(i, j, k)| (i, j, k));
        assert_eq!(b[(1, 0, 1)], (1, 0, 1));
        assert_eq!(b.as_slice().unwrap()[5], (1, 0, 1));
    }

    #[test]
    fn empty_is_invalid()
    {
        let a = Array3::<i32>::empty();
        assert!(!a.is_valid());
        assert_eq!(a.len(), 0);
        assert_eq!(a.shape(), &[0, 0, 0]);
    }
}
