// Copyright 2026 cowarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::fmt::Debug;

use crate::error::ArrayError;
use crate::{Dim, Dimension, Ix, Ix1};

/// Tuple or fixed size arrays that can be used to index an array.
///
/// The number of components is part of the type, so indexing an array
/// with the wrong number of components does not compile.
///
/// ```
/// use cowarray::Array2;
///
/// let mut a = Array2::from_shape_vec((2, 2), vec![0, 1, 2, 3]).unwrap();
/// assert_eq!(a[[0, 1]], 1);
/// assert_eq!(a[[1, 1]], 3);
/// a[[1, 1]] += 1;
/// assert_eq!(a[(1, 1)], 4);
/// ```
///
/// **Note** that `NdIndex` is implemented for all `D where D: Dimension`.
pub trait NdIndex<E>: Debug
{
    #[doc(hidden)]
    fn index_checked(&self, dim: &E, strides: &E) -> Result<usize, ArrayError>;
}

impl<D> NdIndex<D> for D
where D: Dimension
{
    fn index_checked(&self, dim: &D, strides: &D) -> Result<usize, ArrayError>
    {
        dim.stride_offset_checked(strides, self)
    }
}

impl NdIndex<Ix1> for Ix
{
    #[inline]
    fn index_checked(&self, dim: &Ix1, strides: &Ix1) -> Result<usize, ArrayError>
    {
        dim.stride_offset_checked(strides, &Dim::new([*self]))
    }
}

macro_rules! ndindex_with_array {
    ($($n:tt)*) => {
        $(
        impl NdIndex<Dim<[Ix; $n]>> for [Ix; $n] {
            #[inline]
            fn index_checked(&self, dim: &Dim<[Ix; $n]>, strides: &Dim<[Ix; $n]>)
                -> Result<usize, ArrayError>
            {
                dim.stride_offset_checked(strides, &Dim::new(*self))
            }
        }

        impl NdIndex<Dim<[Ix; $n]>> for index!(tuple_type [Ix] $n) {
            #[inline]
            fn index_checked(&self, dim: &Dim<[Ix; $n]>, strides: &Dim<[Ix; $n]>)
                -> Result<usize, ArrayError>
            {
                dim.stride_offset_checked(strides, &Dim::new(index!(array_expr [self] $n)))
            }
        }
        )*
    };
}

ndindex_with_array!(1 2 3 4 5 6);
