// Copyright 2026 cowarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::fmt;

use super::IntoDimension;

/// Dimension description.
///
/// `Dim` describes the number of axes and the length of each axis
/// in an array. It is also used as an index type and to store strides.
///
/// See also the [`Dimension`](super::Dimension) trait for its methods and
/// operations.
///
/// # Examples
///
/// To create an array with a particular dimension, you'd just pass
/// a tuple (in this example (3, 2) is used), which is converted to
/// `Dim` by the array constructor.
///
/// ```
/// use cowarray::Array2;
/// use cowarray::Dim;
///
/// let mut array = Array2::<f64>::zeros((3, 2));
/// array[[0, 0]] = 1.;
/// assert_eq!(array.raw_dim(), Dim([3, 2]));
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Dim<I: ?Sized>
{
    index: I,
}

impl<I> Dim<I>
{
    /// Private constructor and accessors for Dim
    pub(crate) fn new(index: I) -> Dim<I>
    {
        Dim { index }
    }
    #[inline(always)]
    pub(crate) fn ix(&self) -> &I
    {
        &self.index
    }
    #[inline(always)]
    pub(crate) fn ixm(&mut self) -> &mut I
    {
        &mut self.index
    }
}

/// Create a new dimension value.
#[allow(non_snake_case)]
pub fn Dim<T>(index: T) -> T::Dim
where T: IntoDimension
{
    index.into_dimension()
}

impl<I: ?Sized> PartialEq<I> for Dim<I>
where I: PartialEq
{
    fn eq(&self, rhs: &I) -> bool
    {
        self.index == *rhs
    }
}

impl<I> fmt::Debug for Dim<I>
where I: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{:?}", self.index)
    }
}
