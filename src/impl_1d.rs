// Copyright 2026 cowarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods for one-dimensional arrays.
use alloc::vec::Vec;

use crate::{Array, IntoDimension, Ix1};

/// # Methods For 1-D Arrays
impl<A> Array<A, Ix1>
{
    /// Create a one-dimensional array from a vector (no copying needed).
    ///
    /// **Panics** if the vector is empty.
    ///
    /// ```
    /// use cowarray::Array1;
    ///
    /// let a = Array1::from_vec(vec![1., 2., 3., 4.]);
    /// assert_eq!(a.dim(), 4);
    /// ```
    pub fn from_vec(v: Vec<A>) -> Self
    {
        assert!(!v.is_empty(), "cowarray: Array1::from_vec needs at least one element");
        let dim = v.len().into_dimension();
        Array::from_shape_vec_unchecked(dim, v)
    }
}

/// Create a one-dimensional array from a vector.
///
/// **Panics** if the vector is empty.
impl<A> From<Vec<A>> for Array<A, Ix1>
{
    fn from(v: Vec<A>) -> Self
    {
        Self::from_vec(v)
    }
}

/// Create a one-dimensional array from an iterator.
///
/// **Panics** if the iterator is empty.
impl<A> FromIterator<A> for Array<A, Ix1>
{
    fn from_iter<I>(iterable: I) -> Array<A, Ix1>
    where I: IntoIterator<Item = A>
    {
        Self::from_vec(iterable.into_iter().collect())
    }
}
